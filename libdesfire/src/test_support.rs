//! Test support helpers shared by unit tests and the `tests/` crates.
//!
//! They build trailer-terminated responses and wire a `MockTransport` into a
//! `Device` while keeping the mock inspectable afterwards.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use crate::constants::{TRAILER_MARKER, status};
use crate::device::Device;
use crate::transport::{MockTransport, Transport};
use crate::Result;

/// Raw response: payload followed by `[0x91, status]`.
#[doc(hidden)]
pub fn response(payload: &[u8], status: u8) -> Vec<u8> {
    let mut out = Vec::with_capacity(payload.len() + 2);
    out.extend_from_slice(payload);
    out.push(TRAILER_MARKER);
    out.push(status);
    out
}

/// Final frame of a successful response.
#[doc(hidden)]
pub fn ok(payload: &[u8]) -> Vec<u8> {
    response(payload, status::OPERATION_OK)
}

/// Intermediate frame announcing that more frames follow.
#[doc(hidden)]
pub fn more(payload: &[u8]) -> Vec<u8> {
    response(payload, status::ADDITIONAL_FRAME)
}

/// A `MockTransport` that can be handed to a `Device` while the test keeps
/// a handle to inspect what was sent.
#[doc(hidden)]
pub struct SharedMock(Rc<RefCell<MockTransport>>);

impl SharedMock {
    pub fn new(mock: MockTransport) -> Self {
        Self(Rc::new(RefCell::new(mock)))
    }

    pub fn handle(&self) -> Rc<RefCell<MockTransport>> {
        Rc::clone(&self.0)
    }
}

impl Transport for SharedMock {
    fn transceive(&mut self, frame: &[u8]) -> Result<Vec<u8>> {
        self.0.borrow_mut().transceive(frame)
    }
}

/// Device backed by a mock pre-seeded with `responses`, plus the mock handle.
#[doc(hidden)]
pub fn mock_device(responses: Vec<Vec<u8>>) -> (Device, Rc<RefCell<MockTransport>>) {
    let shared = SharedMock::new(MockTransport::with_responses(responses));
    let handle = shared.handle();
    (Device::new(Box::new(shared)), handle)
}

/// Snapshot with zeroed manufacturing data and the given applications.
#[doc(hidden)]
pub fn card_with(applications: Vec<crate::card::Application>) -> crate::card::Card {
    let version = crate::protocol::VersionInfo {
        vendor_id: 0x04,
        kind: 0x01,
        subtype: 0x01,
        major_version: 0x01,
        minor_version: 0x00,
        storage_size: 0x18,
        protocol: 0x05,
    };
    crate::card::Card {
        manufacturing: crate::protocol::ManufacturingData {
            hardware: version,
            software: version,
            uid: [0x04, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66],
            batch_number: [0; 5],
            production_week: 0x12,
            production_year: 0x10,
        },
        applications,
    }
}
