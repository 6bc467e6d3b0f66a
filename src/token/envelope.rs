//! # Encrypted Envelope
//!
//! The externally visible output of the encryption pipeline.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// The encrypted envelope: `{encryptedMessage, ephemeralPublicKey, tag}`.
///
/// All three values are standard base64 without newlines. Immutable once
/// produced.
///
/// Field declaration order IS the canonical JSON key order — the detached
/// signature covers the serialized form byte-for-byte, so reordering these
/// fields (or introducing whitespace) breaks signature verification at the
/// counterpart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EncryptedEnvelope {
    /// base64 of the AES-CTR ciphertext.
    pub encrypted_message: String,
    /// base64 of the 65-byte uncompressed SEC1 ephemeral public point.
    pub ephemeral_public_key: String,
    /// base64 of the HMAC-SHA256 tag over the ciphertext.
    pub tag: String,
}

impl EncryptedEnvelope {
    /// Assemble an envelope from the raw pipeline outputs.
    pub fn from_raw(ciphertext: &[u8], ephemeral_public_key: &[u8], tag: &[u8]) -> Self {
        Self {
            encrypted_message: BASE64.encode(ciphertext),
            ephemeral_public_key: BASE64.encode(ephemeral_public_key),
            tag: BASE64.encode(tag),
        }
    }

    /// The canonical serialized form: compact JSON, declaration-order keys.
    ///
    /// This exact string is what the signing half frames and signs, and
    /// what the assembled token carries as `signedMessage`.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_json_shape() {
        let envelope = EncryptedEnvelope::from_raw(b"ct", b"pk", b"tg");
        let json = envelope.to_json().unwrap();

        // Key order and compactness are load-bearing.
        assert_eq!(
            json,
            r#"{"encryptedMessage":"Y3Q=","ephemeralPublicKey":"cGs=","tag":"dGc="}"#
        );
    }

    #[test]
    fn test_json_round_trip() {
        let envelope = EncryptedEnvelope::from_raw(b"ciphertext", b"point", b"tag");
        let json = envelope.to_json().unwrap();
        let restored: EncryptedEnvelope = serde_json::from_str(&json).unwrap();

        assert_eq!(envelope, restored);
    }
}
