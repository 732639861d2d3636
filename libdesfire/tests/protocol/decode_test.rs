#[path = "../common/mod.rs"]
mod common;

use libdesfire::protocol::{
    FileDetail, decode_application_ids, decode_file_ids, decode_file_settings,
    decode_manufacturing_data, decode_value,
};
use libdesfire::{
    AccessKey, ApplicationId, CommunicationMode, Error, FileId, FileType, ProtocolViolation,
};

#[test]
fn application_directory() {
    let ids = decode_application_ids(&hex::decode("5f8415000001").unwrap()).unwrap();
    assert_eq!(ids, vec![common::fixtures::mensa_aid(), ApplicationId::new(1).unwrap()]);
    assert_eq!(ids[0].to_string(), "5F8415");
    assert!(decode_application_ids(&[]).unwrap().is_empty());
}

#[test]
fn application_directory_must_be_aligned() {
    for len in [1usize, 2, 4, 5] {
        match decode_application_ids(&vec![0; len]) {
            Err(Error::Protocol(ProtocolViolation::MisalignedLength { unit: 3, actual })) => {
                assert_eq!(actual, len)
            }
            other => panic!("expected MisalignedLength, got {:?}", other),
        }
    }
}

#[test]
fn file_ids_are_bytes() {
    assert_eq!(
        decode_file_ids(&[0x00, 0x01, 0x1F]),
        vec![FileId::new(0), FileId::new(1), FileId::new(0x1F)]
    );
    assert!(decode_file_ids(&[]).is_empty());
}

#[test]
fn value_file_settings() {
    let s = decode_file_settings(&common::fixtures::value_settings_payload()).unwrap();
    assert_eq!(s.file_type, FileType::Value);
    assert_eq!(s.communication, CommunicationMode::Plain);
    assert!(s.access.is_free_read());
    assert_eq!(
        s.detail,
        FileDetail::Value {
            lower_limit: 0,
            upper_limit: 100_000,
            limited_credit_value: 0,
            limited_credit_enabled: false,
        }
    );
    assert_eq!(s.content_len(), None);
}

#[test]
fn data_and_record_file_settings() {
    let data = decode_file_settings(&common::fixtures::data_settings_payload()).unwrap();
    assert_eq!(data.file_type, FileType::StandardData);
    assert_eq!(data.communication, CommunicationMode::Enciphered);
    assert_eq!(data.access.read(), AccessKey::Key(1));
    assert_eq!(data.content_len(), Some(32));

    let rec = decode_file_settings(&common::fixtures::record_settings_payload()).unwrap();
    assert_eq!(rec.file_type, FileType::CyclicRecord);
    assert_eq!(
        rec.detail,
        FileDetail::Record {
            record_size: 16,
            max_records: 5,
            current_records: 2,
        }
    );
    assert_eq!(rec.content_len(), Some(32));
}

#[test]
fn bad_file_settings() {
    assert!(matches!(
        decode_file_settings(&[0x07, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
        Err(Error::Protocol(ProtocolViolation::UnknownFileType(0x07)))
    ));
    assert!(matches!(
        decode_file_settings(&[0x00, 0x00]),
        Err(Error::Protocol(ProtocolViolation::UnexpectedLength { .. }))
    ));
}

#[test]
fn manufacturing_record() {
    let m = decode_manufacturing_data(&common::fixtures::manufacturing_payload()).unwrap();
    assert_eq!(m.uid_hex(), "04112233445566");
    assert_eq!(m.hardware.storage_size_bytes(), (4096, true));
    assert_eq!(m.software.minor_version, 0x04);
    assert_eq!(m.production_week, 0x21);
    assert_eq!(m.production_year, 0x12);
}

#[test]
fn manufacturing_record_length_is_exact() {
    let mut long = common::fixtures::manufacturing_payload();
    long.push(0x00);
    assert!(matches!(
        decode_manufacturing_data(&long),
        Err(Error::Protocol(ProtocolViolation::UnexpectedLength { expected: 28, actual: 29 }))
    ));
}

#[test]
fn value_is_little_endian_and_signed() {
    assert_eq!(decode_value(&[0x34, 0x30, 0x00, 0x00]).unwrap().raw(), 12_340);
    assert_eq!(decode_value(&[0xFF, 0xFF, 0xFF, 0xFF]).unwrap().raw(), -1);
    for len in [0usize, 3, 5] {
        assert!(decode_value(&vec![0; len]).is_err());
    }
}
