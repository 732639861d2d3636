use libdesfire::protocol::codec::{decode_response_frame, encode_command_frame};
use libdesfire::protocol::{Command, Frame, Outcome, build_frame};
use libdesfire::{Error, FileId, ProtocolViolation};

#[test]
fn request_frames_match_wire_layout() {
    assert_eq!(
        encode_command_frame(&Command::GetApplicationDirectory),
        vec![0x90, 0x6A, 0x00, 0x00, 0x00]
    );
    assert_eq!(
        encode_command_frame(&Command::GetFileSettings { file: FileId::new(3) }),
        vec![0x90, 0xF5, 0x00, 0x00, 0x01, 0x03, 0x00]
    );
    assert_eq!(
        build_frame(0x5A, Some(&[0x5F, 0x84, 0x15])),
        vec![0x90, 0x5A, 0x00, 0x00, 0x03, 0x5F, 0x84, 0x15, 0x00]
    );
}

#[test]
fn empty_parameters_equal_absent_parameters() {
    assert_eq!(build_frame(0x60, Some(&[])), build_frame(0x60, None));
}

#[test]
fn frame_length_follows_parameter_count() {
    for n in [1usize, 7, 255] {
        let params = vec![0xA5; n];
        let frame = build_frame(0xBD, Some(&params));
        assert_eq!(frame.len(), n + 6);
        assert_eq!(frame[4] as usize, n);
        assert_eq!(*frame.last().unwrap(), 0x00);
    }
}

#[test]
fn split_trailer() {
    let raw = [0xDE, 0xAD, 0x91, 0x00];
    let frame = Frame::split(&raw).unwrap();
    assert_eq!(frame.payload, &[0xDE, 0xAD]);
    assert_eq!(frame.status, 0x00);

    let resp = decode_response_frame(&[0x91, 0xAF]).unwrap();
    assert!(resp.payload.is_empty());
    assert_eq!(resp.outcome, Outcome::Continue);
}

#[test]
fn short_and_malformed_responses() {
    for raw in [&[][..], &[0x91][..]] {
        match Frame::split(raw) {
            Err(Error::Protocol(ProtocolViolation::ResponseTooShort { actual })) => {
                assert_eq!(actual, raw.len())
            }
            other => panic!("expected ResponseTooShort, got {:?}", other),
        }
    }
    match Frame::split(&[0x01, 0x90, 0x00]) {
        Err(Error::Protocol(ProtocolViolation::InvalidTrailerMarker { actual: 0x90 })) => {}
        other => panic!("expected InvalidTrailerMarker, got {:?}", other),
    }
}
