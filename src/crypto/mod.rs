//! # Cryptography Module
//!
//! This module provides the cryptographic primitives behind the token
//! pipeline.
//!
//! ## Envelope Scheme
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     ENVELOPE ENCRYPTION                             │
//! ├─────────────────────────────────────────────────────────────────────┤
//! │                                                                     │
//! │  1. Key Agreement: P-256 ECDH                                       │
//! │     Ephemeral Private × Recipient Public = Shared Secret            │
//! │     (fresh ephemeral key pair on every call)                        │
//! │                                                                     │
//! │  2. Key Derivation: HKDF-SHA256                                     │
//! │     ikm  = ephemeral_public_point || shared_secret                  │
//! │     salt = empty                                                    │
//! │     info = verifier context string                                  │
//! │     → (AES half, MAC half)                                          │
//! │                                                                     │
//! │  3. Encryption: AES-128-CTR, fixed zero IV                          │
//! │     keystream keyed from the leading 16 bytes of the AES half       │
//! │                                                                     │
//! │  4. Tag: HMAC-SHA256(mac_key, ciphertext)                           │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Signature Scheme
//!
//! Detached ECDSA over P-256 with SHA-256, DER encoded, produced by a
//! long-lived key the caller supplies. See [`signing`].
//!
//! ## Security Considerations
//!
//! 1. **Key Zeroization**: ephemeral scalars, shared secrets and derived
//!    keys are zeroized when dropped
//! 2. **Point Validation**: recipient keys are validated as curve points at
//!    parse time, not merely format-checked
//! 3. **Secure Random**: callers inject the random source; production code
//!    passes `rand::rngs::OsRng`
//! 4. **No Key Reuse**: a fresh ephemeral key pair per encryption makes the
//!    fixed CTR IV safe

pub mod encryption;
pub mod kdf;
pub mod keys;
pub mod signing;

pub use encryption::{compute_tag, encrypt, AES_KEY_SIZE, TAG_SIZE};
pub use kdf::{derive_keys, DerivedKeys, DERIVED_KEY_HALF_SIZE};
pub use keys::{EphemeralKeyPair, RecipientKey, SharedSecret, SigningKeyHandle};
pub use signing::{sign, DetachedSignature};

/// Size of an uncompressed SEC1 P-256 point encoding in bytes
pub const UNCOMPRESSED_POINT_SIZE: usize = 65;

/// Size of a raw ECDH shared secret in bytes (the x-coordinate)
pub const SHARED_SECRET_SIZE: usize = 32;
