// fixtures.rs — captured payloads and reply sequences used across tests

use libdesfire::ApplicationId;
use libdesfire::test_support::{more, ok, response};

pub const MENSA_AID: u32 = 0x5F8415;

pub fn mensa_aid() -> ApplicationId {
    ApplicationId::new(MENSA_AID).unwrap()
}

fn bytes(s: &str) -> Vec<u8> {
    hex::decode(s).unwrap()
}

/// 28-byte manufacturing record of an EV1 card with 4 KiB storage.
pub fn manufacturing_payload() -> Vec<u8> {
    let mut v = bytes("04010101001805"); // hardware
    v.extend(bytes("04010101041805")); // software
    v.extend(bytes("04112233445566")); // uid
    v.extend(bytes("ba34567890")); // batch
    v.extend(bytes("2112")); // week, year
    v
}

/// The manufacturing record as a card sends it: 7 + 7 + 14 bytes.
pub fn manufacturing_frames() -> Vec<Vec<u8>> {
    let p = manufacturing_payload();
    vec![more(&p[..7]), more(&p[7..14]), ok(&p[14..])]
}

/// Value file: free read, limits 0..100000, no limited credit.
pub fn value_settings_payload() -> Vec<u8> {
    bytes("020000e0" /* type, comm, access */)
        .into_iter()
        .chain(bytes("00000000a086010000000000" /* lower, upper, credit */))
        .chain([0x00])
        .collect()
}

/// Standard data file of 32 bytes, enciphered, read key 1.
pub fn data_settings_payload() -> Vec<u8> {
    bytes("00030010200000")
}

/// Cyclic record file, 16-byte records, 2 of 5 in use.
pub fn record_settings_payload() -> Vec<u8> {
    bytes("0400eee0100000050000020000")
}

/// Replies for a full snapshot of a canteen card:
/// one application with a readable value file (balance 12.340 EUR)
/// and a protected file whose settings are refused.
pub fn mensa_session(balance: i32) -> Vec<Vec<u8>> {
    let mut replies = manufacturing_frames();
    replies.push(ok(&mensa_aid().to_bytes())); // application directory
    replies.push(ok(&[])); // select
    replies.push(ok(&[0x01, 0x02])); // file ids
    replies.push(ok(&value_settings_payload()));
    replies.push(ok(&balance.to_le_bytes()));
    replies.push(response(&[], 0x9D)); // settings of file 2
    replies
}
