//! # Key Derivation
//!
//! Expands the ECDH output into the envelope keys.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                 SHARED SECRET → ENVELOPE KEYS                       │
//! ├─────────────────────────────────────────────────────────────────────┤
//! │                                                                     │
//! │  HKDF-SHA256(                                                       │
//! │    ikm  = ephemeral_public_point || shared_secret,                  │
//! │    salt = empty,                                                    │
//! │    info = verifier context (e.g. b"Google")                         │
//! │  ) → 2 × output_length bytes                                        │
//! │                                                                     │
//! │  first half  → aes_key                                              │
//! │  second half → mac_key                                              │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The IKM concatenation order — ephemeral public point first, shared
//! secret second — must match the verifier bit-for-bit.
//!
//! Per the counterpart's published derivation, both halves are 32 bytes but
//! their consumed lengths differ: the cipher keys AES-128 from the leading
//! 16 bytes of the AES half, while HMAC consumes the full MAC half. See
//! [`crate::crypto::encryption`].

use hkdf::Hkdf;
use sha2::Sha256;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::crypto::SharedSecret;
use crate::error::{Error, Result};

/// Default length of each derived half in bytes.
pub const DERIVED_KEY_HALF_SIZE: usize = 32;

/// The derived envelope key pair.
///
/// Same lifetime discipline as [`SharedSecret`]: scoped to one encryption
/// call, zeroized on drop.
#[derive(ZeroizeOnDrop)]
pub struct DerivedKeys {
    /// Symmetric encryption key half.
    pub aes_key: Vec<u8>,
    /// MAC key half.
    pub mac_key: Vec<u8>,
}

/// Derive the envelope keys from an ephemeral public point and a shared
/// secret.
///
/// Produces `2 × output_length` bytes of HKDF-SHA256 output with an empty
/// salt (RFC 5869 absent-salt semantics, matching the verifier's empty
/// string) and splits them evenly into the AES and MAC halves.
///
/// ## Errors
///
/// [`Error::DerivationError`] if HKDF rejects the parameters — in practice
/// only when the requested output exceeds `255 × 32` bytes. Not retriable;
/// indicates a configuration bug.
pub fn derive_keys(
    ephemeral_public_key: &[u8],
    shared_secret: &SharedSecret,
    info: &[u8],
    output_length: usize,
) -> Result<DerivedKeys> {
    let mut ikm = Vec::with_capacity(ephemeral_public_key.len() + shared_secret.as_bytes().len());
    ikm.extend_from_slice(ephemeral_public_key);
    ikm.extend_from_slice(shared_secret.as_bytes());

    let hkdf = Hkdf::<Sha256>::new(None, &ikm);

    let mut okm = vec![0u8; output_length * 2];
    hkdf.expand(info, &mut okm).map_err(|_| {
        Error::DerivationError(format!(
            "HKDF-SHA256 cannot produce {} bytes",
            output_length * 2
        ))
    })?;

    ikm.zeroize();

    let mac_key = okm[output_length..].to_vec();
    okm.truncate(output_length);

    Ok(DerivedKeys {
        aes_key: okm,
        mac_key,
    })
}

// ============================================================================
// TESTS
// ============================================================================
