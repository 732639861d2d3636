// libdesfire/src/protocol/commands/application.rs

use crate::types::ApplicationId;

/// Parameter block of SelectApplication (0x5A): the AID, MSB first.
pub fn encode_select_application(aid: ApplicationId) -> [u8; 3] {
    aid.to_bytes()
}
