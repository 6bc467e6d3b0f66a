//! # Authenticated Encryption
//!
//! AES-128-CTR encryption of the cleartext payload plus a detached
//! HMAC-SHA256 tag over the ciphertext.
//!
//! This is not an AEAD mode: the counterpart protocol specifies counter-mode
//! encryption with a separately computed MAC, and the tag scope is the
//! ciphertext ONLY — no associated data, not the ephemeral public key.
//! Verifiers replicate exactly this scope.
//!
//! The CTR IV is the fixed all-zero block. Safe here because the AES key is
//! never reused: every encryption call derives its keys from a fresh
//! ephemeral key pair, so each (key, IV) pair occurs once.

use aes::Aes128;
use ctr::cipher::{KeyIvInit, StreamCipher};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::{Error, Result};

type Aes128Ctr = ctr::Ctr128BE<Aes128>;
type HmacSha256 = Hmac<Sha256>;

/// AES-128 key size in bytes.
///
/// The derived AES half is longer (see [`crate::crypto::kdf`]); the cipher
/// consumes its leading 16 bytes, mirroring the counterpart verifier.
pub const AES_KEY_SIZE: usize = 16;

/// HMAC-SHA256 tag size in bytes.
pub const TAG_SIZE: usize = 32;

/// The protocol's fixed CTR initialization vector.
const ZERO_IV: [u8; 16] = [0u8; 16];

/// Encrypt a cleartext payload and compute its tag.
///
/// Counter mode is a stream cipher: the ciphertext has exactly the
/// cleartext's length, with no padding. An empty cleartext produces an
/// empty ciphertext (whose tag is still defined).
///
/// ## Errors
///
/// [`Error::InvalidKey`] if `aes_key` is shorter than [`AES_KEY_SIZE`].
/// Programmer error, fatal for the call.
pub fn encrypt(cleartext: &[u8], aes_key: &[u8], mac_key: &[u8]) -> Result<(Vec<u8>, Vec<u8>)> {
    if aes_key.len() < AES_KEY_SIZE {
        return Err(Error::InvalidKey(format!(
            "AES key must be at least {} bytes, got {}",
            AES_KEY_SIZE,
            aes_key.len()
        )));
    }

    let mut cipher = Aes128Ctr::new_from_slices(&aes_key[..AES_KEY_SIZE], &ZERO_IV)
        .map_err(|_| Error::InvalidKey("AES-CTR rejected key or IV length".into()))?;

    let mut ciphertext = cleartext.to_vec();
    cipher.apply_keystream(&mut ciphertext);

    let tag = compute_tag(mac_key, &ciphertext)?;

    Ok((ciphertext, tag))
}

/// Compute `HMAC-SHA256(mac_key, ciphertext)`.
///
/// Exposed separately so the tag can be recomputed over an existing
/// ciphertext; the scope is the ciphertext bytes alone.
pub fn compute_tag(mac_key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    let mut mac = HmacSha256::new_from_slice(mac_key)
        .map_err(|_| Error::InvalidKey("HMAC rejected MAC key".into()))?;
    mac.update(ciphertext);
    Ok(mac.finalize().into_bytes().to_vec())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const AES_KEY: [u8; 32] = [0x11; 32];
    const MAC_KEY: [u8; 32] = [0x22; 32];

    /// CTR decryption is re-application of the same keystream.
    fn decrypt(ciphertext: &[u8], aes_key: &[u8]) -> Vec<u8> {
        let mut cipher = Aes128Ctr::new_from_slices(&aes_key[..AES_KEY_SIZE], &ZERO_IV).unwrap();
        let mut cleartext = ciphertext.to_vec();
        cipher.apply_keystream(&mut cleartext);
        cleartext
    }

    #[test]
    fn test_round_trip() {
        let cleartext = b"an example payment payload";

        let (ciphertext, _) = encrypt(cleartext, &AES_KEY, &MAC_KEY).unwrap();
        assert_ne!(&ciphertext[..], &cleartext[..]);
        assert_eq!(decrypt(&ciphertext, &AES_KEY), cleartext);
    }

    #[test]
    fn test_ciphertext_length_equals_cleartext_length() {
        for len in [0usize, 1, 15, 16, 17, 1000] {
            let cleartext = vec![0xAB; len];
            let (ciphertext, tag) = encrypt(&cleartext, &AES_KEY, &MAC_KEY).unwrap();
            assert_eq!(ciphertext.len(), len);
            assert_eq!(tag.len(), TAG_SIZE);
        }
    }

    #[test]
    fn test_tag_recomputes_over_ciphertext() {
        let (ciphertext, tag) = encrypt(b"payload", &AES_KEY, &MAC_KEY).unwrap();
        assert_eq!(compute_tag(&MAC_KEY, &ciphertext).unwrap(), tag);
    }

    #[test]
    fn test_tag_detects_ciphertext_change() {
        let (mut ciphertext, tag) = encrypt(b"payload", &AES_KEY, &MAC_KEY).unwrap();
        ciphertext[0] ^= 0x01;
        assert_ne!(compute_tag(&MAC_KEY, &ciphertext).unwrap(), tag);
    }

    #[test]
    fn test_cipher_consumes_leading_sixteen_bytes_only() {
        // The verifier keys AES-128 from the first 16 bytes of the derived
        // half; trailing bytes must not influence the keystream.
        let mut longer = AES_KEY;
        longer[16..].fill(0xEE);

        let (ct1, _) = encrypt(b"payload", &AES_KEY, &MAC_KEY).unwrap();
        let (ct2, _) = encrypt(b"payload", &longer, &MAC_KEY).unwrap();
        assert_eq!(ct1, ct2);
    }

    #[test]
    fn test_short_aes_key_is_rejected() {
        let result = encrypt(b"payload", &[0u8; 8], &MAC_KEY);
        assert!(matches!(result, Err(Error::InvalidKey(_))));
    }
}
