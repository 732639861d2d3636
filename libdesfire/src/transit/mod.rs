// libdesfire/src/transit/mod.rs

//! Card-specific decoders on top of a [`Card`] snapshot.
//!
//! Each decoder recognises one card product from the applications and files
//! it carries. Decoders are plain values behind [`TransitDecoder`], so new
//! products are added by registering another implementation in a
//! [`Registry`].

use crate::Result;
use crate::card::Card;
use crate::types::ValueBalance;

pub mod mensa;

pub use mensa::MensaCard;

/// Short identification shown before a full decode.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitIdentity {
    pub name: String,
    pub serial: Option<String>,
}

impl TransitIdentity {
    pub fn new(name: impl Into<String>, serial: Option<String>) -> Self {
        Self {
            name: name.into(),
            serial,
        }
    }
}

/// Decoded product data.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitData {
    pub card_name: String,
    pub serial: Option<String>,
    /// Raw balance in the product's smallest unit.
    pub balance: Option<ValueBalance>,
}

/// One card product.
pub trait TransitDecoder {
    fn name(&self) -> &'static str;

    /// Whether `card` looks like this product.
    fn detect(&self, card: &Card) -> bool;

    fn parse_identity(&self, card: &Card) -> TransitIdentity;

    /// Decode a card for which [`detect`](Self::detect) returned true.
    fn decode(&self, card: &Card) -> Result<TransitData>;
}

/// Ordered set of decoders; the first one that detects a card wins.
#[derive(Default)]
pub struct Registry {
    decoders: Vec<Box<dyn TransitDecoder>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in decoder.
    pub fn with_defaults() -> Self {
        let mut reg = Self::new();
        reg.register(Box::new(MensaCard));
        reg
    }

    pub fn register(&mut self, decoder: Box<dyn TransitDecoder>) {
        self.decoders.push(decoder);
    }

    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.decoders.iter().map(|d| d.name())
    }

    pub fn identify(&self, card: &Card) -> Option<&dyn TransitDecoder> {
        self.decoders
            .iter()
            .map(|d| d.as_ref())
            .find(|d| d.detect(card))
    }

    /// `None` when no decoder recognises the card.
    pub fn decode(&self, card: &Card) -> Option<Result<TransitData>> {
        let decoder = self.identify(card)?;
        log::debug!("card detected as {}", decoder.name());
        Some(decoder.decode(card))
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
