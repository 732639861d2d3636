use libdesfire::protocol::{EngineConfig, execute};
use libdesfire::test_support::{more, ok, response};
use libdesfire::transport::{MockTransport, from_fn};
use libdesfire::{Error, ProtocolViolation, StatusError};

#[test]
fn reassembles_in_arrival_order() {
    let mut mock = MockTransport::with_responses(vec![
        more(&[0x01]),
        more(&[]),
        more(&[0x02, 0x03]),
        ok(&[0x04]),
    ]);
    let payload = execute(&mut mock, 0x6A, None, &EngineConfig::default()).unwrap();
    assert_eq!(payload, vec![0x01, 0x02, 0x03, 0x04]);

    assert_eq!(mock.sent.len(), 4);
    assert_eq!(mock.sent[0], vec![0x90, 0x6A, 0x00, 0x00, 0x00]);
    for req in &mock.sent[1..] {
        assert_eq!(req, &vec![0x90, 0xAF, 0x00, 0x00, 0x00]);
    }
}

#[test]
fn failure_on_any_frame_voids_the_operation() {
    let mut mock = MockTransport::with_responses(vec![more(&[0x01; 59]), response(&[], 0xAE)]);
    match execute(&mut mock, 0xBD, Some(&[0x01, 0, 0, 0, 0, 0, 0]), &EngineConfig::default()) {
        Err(Error::Status(StatusError::AuthenticationError)) => {}
        other => panic!("expected AuthenticationError, got {:?}", other),
    }
}

#[test]
fn bare_authentication_error() {
    let mut mock = MockTransport::with_responses(vec![vec![0x91, 0xAE]]);
    assert!(matches!(
        execute(&mut mock, 0x6C, Some(&[0x01]), &EngineConfig::default()),
        Err(Error::Status(StatusError::AuthenticationError))
    ));
}

#[test]
fn unknown_status_is_an_error() {
    let mut mock = MockTransport::with_responses(vec![response(&[0x01], 0x42)]);
    assert!(matches!(
        execute(&mut mock, 0x60, None, &EngineConfig::default()),
        Err(Error::UnknownStatus(0x42))
    ));
}

#[test]
fn endless_continuation_is_capped() {
    let mut sent = 0usize;
    let mut transport = from_fn(|_frame: &[u8]| {
        sent += 1;
        Ok(more(&[0x00]))
    });
    let config = EngineConfig { max_frames: 8 };
    match execute(&mut transport, 0x6A, None, &config) {
        Err(Error::Protocol(ProtocolViolation::TooManyContinuationFrames { limit: 8 })) => {}
        other => panic!("expected TooManyContinuationFrames, got {:?}", other),
    }
    drop(transport);
    assert_eq!(sent, 8);
}

#[test]
fn default_cap_is_64() {
    assert_eq!(EngineConfig::default().max_frames, 64);
}

#[test]
fn transport_failure_passes_through() {
    let mut mock = MockTransport::new();
    mock.push_response(more(&[0x01]));
    mock.push_failure("tag lost");
    match execute(&mut mock, 0x6A, None, &EngineConfig::default()) {
        Err(Error::Transport(e)) => assert_eq!(e.to_string(), "tag lost"),
        other => panic!("expected Transport, got {:?}", other),
    }
}
