#[path = "../common/mod.rs"]
mod common;

use libdesfire::test_support::{more, ok, response};
use libdesfire::{ApplicationId, Error, FileId, ProtocolViolation, StatusError, ValueBalance};

#[test]
fn manufacturing_data_over_three_frames() {
    let (mut dev, mock) = common::helpers::replay_device(common::fixtures::manufacturing_frames());
    let m = dev.get_manufacturing_data().unwrap();
    assert_eq!(m.uid, [0x04, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66]);

    let mock = mock.borrow();
    assert_eq!(mock.sent[0], vec![0x90, 0x60, 0x00, 0x00, 0x00]);
    assert_eq!(mock.sent[1], vec![0x90, 0xAF, 0x00, 0x00, 0x00]);
    assert_eq!(mock.sent.len(), 3);
}

#[test]
fn select_then_read_value() {
    let (mut dev, mock) = common::helpers::replay_device(vec![
        ok(&[]),
        ok(&[0x34, 0x30, 0x00, 0x00]),
    ]);
    dev.select_application(common::fixtures::mensa_aid()).unwrap();
    assert_eq!(dev.read_value(FileId::new(1)).unwrap(), ValueBalance::new(12_340));

    let mock = mock.borrow();
    assert_eq!(mock.sent[0], hex::decode("905a0000035f841500").unwrap());
    assert_eq!(mock.sent[1], hex::decode("906c0000010100").unwrap());
}

#[test]
fn select_picc_level() {
    let (mut dev, mock) = common::helpers::replay_device(vec![ok(&[])]);
    dev.select_application(ApplicationId::PICC).unwrap();
    assert_eq!(mock.borrow().sent[0], hex::decode("905a00000300000000").unwrap());
}

#[test]
fn large_data_file_is_reassembled() {
    let chunk = [0x5Au8; 59];
    let (mut dev, _) = common::helpers::replay_device(vec![
        more(&chunk),
        more(&chunk),
        ok(&chunk[..10]),
    ]);
    let data = dev.read_data_file(FileId::new(3)).unwrap();
    assert_eq!(data.len(), 128);
    assert!(data.iter().all(|b| *b == 0x5A));
}

#[test]
fn protected_file_reports_permission_denied() {
    let (mut dev, _) = common::helpers::replay_device(vec![response(&[], 0x9D)]);
    match dev.read_record_file(FileId::new(4)) {
        Err(e @ Error::Status(StatusError::PermissionDenied)) => assert!(e.is_access_denied()),
        other => panic!("expected PermissionDenied, got {:?}", other),
    }
}

#[test]
fn misaligned_directory_is_rejected() {
    let (mut dev, _) = common::helpers::replay_device(vec![ok(&[0x5F, 0x84])]);
    assert!(matches!(
        dev.list_applications(),
        Err(Error::Protocol(ProtocolViolation::MisalignedLength { unit: 3, actual: 2 }))
    ));
}

#[test]
fn capped_device_stops_runaway_card() {
    let replies = (0..5).map(|_| more(&[0x00])).collect();
    let (mut dev, mock) = common::helpers::replay_device_capped(replies, 2);
    assert!(matches!(
        dev.list_applications(),
        Err(Error::Protocol(ProtocolViolation::TooManyContinuationFrames { limit: 2 }))
    ));
    assert_eq!(mock.borrow().pending(), 3);
}

#[test]
fn empty_transport_times_out() {
    let (mut dev, _) = common::helpers::replay_device(vec![]);
    assert!(matches!(dev.list_files(), Err(Error::Timeout)));
}
