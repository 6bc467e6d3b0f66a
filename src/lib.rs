//! # tokenseal
//!
//! A hybrid-encryption payment token generator, producing test fixtures
//! compatible with the public "envelope encryption" scheme used by
//! digital-wallet tokenization.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        TOKENSEAL MODULES                            │
//! ├─────────────────────────────────────────────────────────────────────┤
//! │                                                                     │
//! │  ┌─────────────────────────┐   ┌──────────────────────────────┐     │
//! │  │        Crypto           │   │           Token              │     │
//! │  │                         │   │                              │     │
//! │  │ - P-256 ECDH (keys)     │   │ - EncryptedEnvelope (JSON)   │     │
//! │  │ - HKDF-SHA256 (kdf)     │   │ - signature string framing   │     │
//! │  │ - AES-CTR + HMAC        │   │ - Token assembly             │     │
//! │  │ - ECDSA (signing)       │   │                              │     │
//! │  └─────────────────────────┘   └──────────────────────────────┘     │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Hierarchy
//!
//! - [`error`] - Error types for the entire library
//! - [`config`] - Pipeline defaults (sender id, protocol version, KDF info)
//! - [`crypto`] - Cryptographic primitives (keys, kdf, encryption, signing)
//! - [`token`] - Envelope, signature string and token assembly
//!
//! ## One-directional by design
//!
//! This crate constructs payloads; it does not decrypt or verify them. The
//! counterpart verifier — implemented elsewhere — consumes the tokens this
//! crate emits. Tests exercise local inverse operations to check the
//! construction, but no inverse is exported.
//!
//! ## Security Model
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Envelope: P-256 ECDH (fresh ephemeral key per call)                │
//! │            → HKDF-SHA256 → AES-128-CTR + HMAC-SHA256 tag            │
//! │  Signature: detached ECDSA-P256/SHA-256 over a length-prefixed      │
//! │             canonical byte string covering the envelope JSON        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Secret material (ephemeral scalars, shared secrets, derived keys) is
//! scoped to one call and zeroized on drop; it is never logged and never
//! appears in error messages. All operations are stateless and safe to
//! invoke concurrently.
//!
//! ## Example
//!
//! ```no_run
//! use rand::rngs::OsRng;
//! use tokenseal::{generate_token, RecipientKey, SigningKeyHandle, TokenConfig};
//!
//! # fn main() -> tokenseal::Result<()> {
//! # let (recipient_sec1, signer_scalar) = ([0u8; 65], [0u8; 32]);
//! let recipient = RecipientKey::from_sec1_bytes(&recipient_sec1)?;
//! let signer = SigningKeyHandle::from_secret_bytes(&signer_scalar)?;
//!
//! let token = generate_token(
//!     br#"{"messageId":"example"}"#,
//!     &recipient,
//!     &signer,
//!     &TokenConfig::default(),
//!     &mut OsRng,
//! )?;
//! println!("{}", serde_json::to_string(&token)?);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod config;
pub mod crypto;
pub mod error;
pub mod token;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use config::TokenConfig;
pub use crypto::{DetachedSignature, EphemeralKeyPair, RecipientKey, SharedSecret, SigningKeyHandle};
pub use error::{Error, Result};
pub use token::{build_signature_string, encrypt, generate_token, sign_envelope, EncryptedEnvelope, Token};
