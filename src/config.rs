//! # Pipeline Configuration
//!
//! Caller-overridable defaults for the token pipeline. These are
//! configuration, not protocol: the counterpart verifier must simply be
//! given the same values.

/// Default sender identifier (the wallet provider constant).
pub const DEFAULT_SENDER_ID: &str = "Google";

/// Default recipient identifier (a merchant-style external id).
pub const DEFAULT_RECIPIENT_ID: &str = "merchant:0123456789";

/// Default protocol version label.
pub const DEFAULT_PROTOCOL_VERSION: &str = "ECv1";

/// Default HKDF context string identifying the counterpart verifier.
pub const DEFAULT_KDF_INFO: &[u8] = b"Google";

/// Configuration for the token pipeline.
///
/// Both pipeline halves read from this: the encryption half uses `kdf_info`
/// as the HKDF context, and the signing half frames `sender_id`,
/// `recipient_id` and `protocol_version` into the signature string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenConfig {
    /// Sender identifier framed into the signature string.
    pub sender_id: String,
    /// Recipient identifier framed into the signature string.
    pub recipient_id: String,
    /// Protocol version framed into the signature string and carried on
    /// the assembled token.
    pub protocol_version: String,
    /// HKDF `info` context for envelope key derivation.
    pub kdf_info: Vec<u8>,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            sender_id: DEFAULT_SENDER_ID.to_string(),
            recipient_id: DEFAULT_RECIPIENT_ID.to_string(),
            protocol_version: DEFAULT_PROTOCOL_VERSION.to_string(),
            kdf_info: DEFAULT_KDF_INFO.to_vec(),
        }
    }
}
