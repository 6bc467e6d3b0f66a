//! # Error Handling
//!
//! This module provides the error types for tokenseal.
//!
//! Every failure in this crate reflects a programming or input defect, not a
//! transient condition, so no operation retries internally. The one partial
//! exception is [`Error::EntropyUnavailable`]: the random source may recover,
//! and the caller may retry after a delay, but the pipeline itself surfaces
//! it immediately.
//!
//! Error messages name the stage that failed so callers can diagnose, and
//! never contain key material.

use thiserror::Error;

/// Result type alias for tokenseal operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for tokenseal
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Key Errors
    // ========================================================================
    /// Malformed or capability-mismatched key supplied by the caller.
    ///
    /// Not retriable: the caller must supply a correct key. Raised for
    /// recipient public keys that are not valid points on the curve, for
    /// encryption keys of the wrong length, and for signing-key handles
    /// that hold no private material.
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    // ========================================================================
    // Derivation Errors
    // ========================================================================
    /// The HKDF primitive rejected its parameters.
    ///
    /// Not retriable: indicates a configuration bug (e.g. requesting more
    /// output than HKDF-SHA256 can produce).
    #[error("Key derivation failed: {0}")]
    DerivationError(String),

    // ========================================================================
    // Framing Errors
    // ========================================================================
    /// A signature-string field exceeds the 4-byte length encoding range.
    ///
    /// Practically unreachable, but surfaced rather than silently
    /// truncating the length prefix.
    #[error("Signature string field of {0} bytes exceeds the 4-byte length prefix range")]
    FieldTooLarge(usize),

    // ========================================================================
    // Entropy Errors
    // ========================================================================
    /// The secure random source is exhausted or unavailable.
    ///
    /// Surfaced immediately; the caller may retry after a delay.
    #[error("Secure random source unavailable")]
    EntropyUnavailable,

    // ========================================================================
    // Signing Errors
    // ========================================================================
    /// The ECDSA primitive failed to produce a signature.
    #[error("Signing failed: {0}")]
    SigningFailed(String),

    // ========================================================================
    // Serialization Errors
    // ========================================================================
    /// Envelope or token JSON serialization failed.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

// ============================================================================
// ERROR CONVERSIONS
// ============================================================================

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::SerializationError(err.to_string())
    }
}

// ============================================================================
// TESTS
// ============================================================================
