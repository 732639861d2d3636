// libdesfire/src/transit/mensa.rs

//! Canteen payment card used by German student services.

use crate::card::Card;
use crate::types::{ApplicationId, FileId, FileType};
use crate::{Error, Result};

use super::{TransitData, TransitDecoder, TransitIdentity};

const CARD_NAME: &str = "Mensacard";

/// Application holding the credit value file.
pub const CREDIT_APPLICATION: ApplicationId = ApplicationId::from_bytes([0x5F, 0x84, 0x15]);
pub const CREDIT_FILE: FileId = FileId::new(0x01);

/// Balance is kept in thousandths of a euro.
#[derive(Debug, Clone, Copy, Default)]
pub struct MensaCard;

impl TransitDecoder for MensaCard {
    fn name(&self) -> &'static str {
        CARD_NAME
    }

    fn detect(&self, card: &Card) -> bool {
        card.application(CREDIT_APPLICATION)
            .and_then(|app| app.file(CREDIT_FILE))
            .is_some_and(|f| f.file_type() == Some(FileType::Value))
    }

    fn parse_identity(&self, _card: &Card) -> TransitIdentity {
        TransitIdentity::new(CARD_NAME, None)
    }

    fn decode(&self, card: &Card) -> Result<TransitData> {
        let balance = card
            .application(CREDIT_APPLICATION)
            .and_then(|app| app.file(CREDIT_FILE))
            .and_then(|f| f.value())
            .ok_or_else(|| {
                Error::UnsupportedCard(format!(
                    "{}: file {} of application {} is not readable",
                    CARD_NAME, CREDIT_FILE, CREDIT_APPLICATION
                ))
            })?;

        Ok(TransitData {
            card_name: CARD_NAME.to_string(),
            serial: None,
            balance: Some(balance),
        })
    }
}
