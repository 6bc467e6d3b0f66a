//! # Token Pipeline
//!
//! The two pure pipelines that make up a token, and their assembly:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        TOKEN PIPELINE                               │
//! ├─────────────────────────────────────────────────────────────────────┤
//! │                                                                     │
//! │  ENCRYPT                                                            │
//! │  cleartext ──► KeyAgreement ──► KeyDerivation ──► AES-CTR + HMAC    │
//! │                   │                                    │            │
//! │                   ▼                                    ▼            │
//! │       {encryptedMessage, ephemeralPublicKey, tag}  (envelope)       │
//! │                                                                     │
//! │  SIGN                                                               │
//! │  envelope JSON ──► signature string ──► ECDSA ──► detached sig      │
//! │                                                                     │
//! │  ASSEMBLE                                                           │
//! │  {protocolVersion, signature, signedMessage}       (token)          │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The two halves share no mutable state; every invocation is independent
//! and may run concurrently.

mod envelope;
mod signature_string;

pub use envelope::EncryptedEnvelope;
pub use signature_string::build_signature_string;

use rand_core::CryptoRngCore;
use serde::{Deserialize, Serialize};

use crate::config::TokenConfig;
use crate::crypto::{self, DetachedSignature, EphemeralKeyPair, RecipientKey, SigningKeyHandle};
use crate::error::Result;

/// Run the encryption pipeline: fresh ephemeral key agreement, key
/// derivation and authenticated encryption of `cleartext` for `recipient`.
///
/// `info` is the HKDF context identifying the counterpart verifier
/// (typically [`crate::config::TokenConfig::kdf_info`]). The random source
/// is injected; production callers pass `rand::rngs::OsRng`.
///
/// Two calls with identical inputs produce different envelopes: the
/// ephemeral key pair is generated anew every time and discarded before
/// this function returns.
pub fn encrypt(
    cleartext: &[u8],
    recipient: &RecipientKey,
    info: &[u8],
    rng: &mut impl CryptoRngCore,
) -> Result<EncryptedEnvelope> {
    let ephemeral = EphemeralKeyPair::generate(rng)?;
    let ephemeral_public = ephemeral.public_key_bytes();
    let shared_secret = ephemeral.compute_shared_secret(recipient);

    let keys = crypto::derive_keys(
        &ephemeral_public,
        &shared_secret,
        info,
        crypto::DERIVED_KEY_HALF_SIZE,
    )?;

    let (ciphertext, tag) = crypto::encrypt(cleartext, &keys.aes_key, &keys.mac_key)?;

    tracing::debug!(
        cleartext_len = cleartext.len(),
        ciphertext_len = ciphertext.len(),
        "sealed envelope"
    );

    Ok(EncryptedEnvelope::from_raw(&ciphertext, &ephemeral_public, &tag))
}

/// Run the signing pipeline over an envelope.
///
/// Serializes the envelope to its canonical JSON, frames it with the
/// configured sender id, recipient id and protocol version, and signs the
/// result with the caller's long-lived key.
pub fn sign_envelope(
    envelope: &EncryptedEnvelope,
    signing_key: &SigningKeyHandle,
    config: &TokenConfig,
) -> Result<DetachedSignature> {
    let serialized = envelope.to_json()?;
    let payload = build_signature_string(
        serialized.as_bytes(),
        &config.recipient_id,
        &config.sender_id,
        &config.protocol_version,
    )?;
    crypto::sign(signing_key, &payload)
}

/// A complete token: the envelope JSON, its detached signature, and the
/// protocol version — the object the counterpart verifier ingests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    /// Protocol version label, e.g. `"ECv1"`.
    pub protocol_version: String,
    /// base64 of the DER-encoded detached ECDSA signature.
    pub signature: String,
    /// The exact serialized envelope JSON the signature covers.
    pub signed_message: String,
}

/// Run both pipelines and assemble the complete token.
pub fn generate_token(
    cleartext: &[u8],
    recipient: &RecipientKey,
    signing_key: &SigningKeyHandle,
    config: &TokenConfig,
    rng: &mut impl CryptoRngCore,
) -> Result<Token> {
    let envelope = encrypt(cleartext, recipient, &config.kdf_info, rng)?;
    let signed_message = envelope.to_json()?;
    let signature = sign_envelope(&envelope, signing_key, config)?;

    tracing::debug!(
        protocol_version = %config.protocol_version,
        recipient_id = %config.recipient_id,
        "assembled token"
    );

    Ok(Token {
        protocol_version: config.protocol_version.clone(),
        signature: signature.to_base64(),
        signed_message,
    })
}

// ============================================================================
// TESTS
// ============================================================================
