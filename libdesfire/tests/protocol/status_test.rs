use libdesfire::protocol::{Failure, Outcome, classify};
use libdesfire::{Error, StatusError};

#[test]
fn only_two_bytes_are_not_failures() {
    for code in 0..=u8::MAX {
        match classify(code) {
            Outcome::Success => assert_eq!(code, 0x00),
            Outcome::Continue => assert_eq!(code, 0xAF),
            Outcome::Failure(_) => assert!(code != 0x00 && code != 0xAF),
        }
    }
}

#[test]
fn documented_failures_round_trip_through_code() {
    for kind in StatusError::ALL {
        assert_eq!(classify(kind.code()), Outcome::Failure(Failure::Status(kind)));
        assert!(!kind.to_string().is_empty());
    }
}

#[test]
fn undocumented_byte_keeps_raw_value() {
    assert_eq!(classify(0x42), Outcome::Failure(Failure::UnknownStatus(0x42)));
    let err: Error = Failure::UnknownStatus(0x42).into();
    assert!(matches!(err, Error::UnknownStatus(0x42)));
}

#[test]
fn access_denied_statuses() {
    assert!(Error::from(StatusError::PermissionDenied).is_access_denied());
    assert!(Error::from(StatusError::AuthenticationError).is_access_denied());
    assert!(!Error::from(StatusError::FileNotFound).is_access_denied());
    assert!(!Error::Timeout.is_access_denied());
}
