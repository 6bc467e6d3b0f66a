//! # Detached Signatures
//!
//! ECDSA over P-256 with SHA-256, producing the detached signature that
//! travels next to the envelope. The signature is DER encoded, which is
//! what the counterpart verifier parses.
//!
//! Signing uses RFC 6979 deterministic nonces (the curve crate's default),
//! so the same key and data always produce the same signature. The
//! long-lived signing key is supplied by the caller and never generated
//! here.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use p256::ecdsa::{signature::Signer as _, Signature, SigningKey};

use crate::crypto::SigningKeyHandle;
use crate::error::{Error, Result};

/// A detached ECDSA signature (DER encoded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetachedSignature(Vec<u8>);

impl DetachedSignature {
    /// The raw DER bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Base64 (standard alphabet, no newlines) of the DER bytes — the
    /// form carried on the assembled token.
    pub fn to_base64(&self) -> String {
        BASE64.encode(&self.0)
    }
}

impl AsRef<[u8]> for DetachedSignature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Sign an arbitrary byte string with the caller's long-lived key.
///
/// Computes SHA-256 over `data` and signs the digest with ECDSA-P256.
///
/// The handle's signing capability is checked explicitly before any
/// cryptography runs: a public-only handle fails with
/// [`Error::InvalidKey`] rather than producing output.
///
/// ## Errors
///
/// - [`Error::InvalidKey`] if the handle holds no private material.
/// - [`Error::SigningFailed`] if the ECDSA primitive fails.
pub fn sign(handle: &SigningKeyHandle, data: &[u8]) -> Result<DetachedSignature> {
    let signing_key = SigningKey::from(handle.secret_key()?);

    let signature: Signature = signing_key
        .try_sign(data)
        .map_err(|e| Error::SigningFailed(e.to_string()))?;

    Ok(DetachedSignature(signature.to_der().as_bytes().to_vec()))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use p256::ecdsa::{signature::Verifier as _, VerifyingKey};
    use p256::elliptic_curve::sec1::ToEncodedPoint;
    use p256::SecretKey;
    use rand::rngs::OsRng;

    fn verify(handle: &SigningKeyHandle, data: &[u8], signature: &DetachedSignature) -> bool {
        let verifying_key = VerifyingKey::from(handle.public_key());
        match Signature::from_der(signature.as_bytes()) {
            Ok(sig) => verifying_key.verify(data, &sig).is_ok(),
            Err(_) => false,
        }
    }

    #[test]
    fn test_signature_verifies() {
        let handle = SigningKeyHandle::from_secret_key(SecretKey::random(&mut OsRng));
        let data = b"canonical signature string";

        let signature = sign(&handle, data).unwrap();
        assert!(verify(&handle, data, &signature));
    }

    #[test]
    fn test_signature_fails_on_altered_data() {
        let handle = SigningKeyHandle::from_secret_key(SecretKey::random(&mut OsRng));
        let signature = sign(&handle, b"canonical signature string").unwrap();

        assert!(!verify(&handle, b"canonical signature strinG", &signature));
    }

    #[test]
    fn test_signature_fails_on_altered_signature() {
        let handle = SigningKeyHandle::from_secret_key(SecretKey::random(&mut OsRng));
        let data = b"canonical signature string";
        let signature = sign(&handle, data).unwrap();

        let mut bytes = signature.as_bytes().to_vec();
        let last = bytes.len() - 1;
        bytes[last] ^= 0x01;
        let tampered = DetachedSignature(bytes);

        assert!(!verify(&handle, data, &tampered));
    }

    #[test]
    fn test_deterministic_signatures() {
        let handle = SigningKeyHandle::from_secret_key(SecretKey::random(&mut OsRng));
        let data = b"canonical signature string";

        // RFC 6979: same key + same data = same signature.
        assert_eq!(sign(&handle, data).unwrap(), sign(&handle, data).unwrap());
    }

    #[test]
    fn test_public_only_handle_is_refused() {
        let secret = SecretKey::random(&mut OsRng);
        let public_bytes = secret.public_key().to_encoded_point(false).as_bytes().to_vec();
        let handle = SigningKeyHandle::from_public_bytes(&public_bytes).unwrap();

        assert!(matches!(
            sign(&handle, b"data"),
            Err(Error::InvalidKey(_))
        ));
    }

    #[test]
    fn test_base64_round_trips() {
        let handle = SigningKeyHandle::from_secret_key(SecretKey::random(&mut OsRng));
        let signature = sign(&handle, b"data").unwrap();

        let decoded = BASE64.decode(signature.to_base64()).unwrap();
        assert_eq!(decoded, signature.as_bytes());
    }
}
