//! Error envelope returned in place of a response body when the HTTP round
//! trip fails

use serde::{Deserialize, Serialize};

/// Code carried by every transport failure envelope
pub const TRANSPORT_FAILURE_CODE: i64 = -1;

/// `{code, msg}` body describing a failed round trip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// Always [`TRANSPORT_FAILURE_CODE`] for envelopes built by the client
    pub code: i64,
    /// Human readable description; never empty
    pub msg: String,
}

impl ErrorEnvelope {
    /// Build a transport failure envelope
    pub fn transport(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        let msg = if msg.trim().is_empty() {
            "transport failure".to_string()
        } else {
            msg
        };

        Self {
            code: TRANSPORT_FAILURE_CODE,
            msg,
        }
    }

    /// The envelope as a JSON object
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({ "code": self.code, "msg": self.msg })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_envelope() {
        let envelope = ErrorEnvelope::transport("connection refused");
        assert_eq!(envelope.code, -1);
        assert_eq!(
            envelope.to_json(),
            serde_json::json!({"code": -1, "msg": "connection refused"})
        );
    }

    #[test]
    fn test_empty_message_is_replaced() {
        let envelope = ErrorEnvelope::transport("  ");
        assert!(!envelope.msg.is_empty());
    }
}
