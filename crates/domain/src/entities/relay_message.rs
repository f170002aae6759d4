//! Outbound relay message

use serde::{Deserialize, Serialize};

/// Destination the chat framework routes replies through
pub const RELAY_DESTINATION: &str = "relay";

/// A reply handed back to the chat-relay framework
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayMessage {
    /// Always [`RELAY_DESTINATION`]
    pub dst: String,
    /// Recipient identity (the query's sender)
    pub to: String,
    /// Channel the query came from, if known
    pub relayto: Option<String>,
    /// Reply text
    pub msg: String,
}

impl RelayMessage {
    /// Build a reply for `to`, routed back through `relayto`
    pub fn reply(to: impl Into<String>, relayto: Option<String>, msg: impl Into<String>) -> Self {
        Self {
            dst: RELAY_DESTINATION.to_string(),
            to: to.into(),
            relayto,
            msg: msg.into(),
        }
    }
}
