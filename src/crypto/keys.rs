//! # Key Management
//!
//! Key types for the envelope pipeline.
//!
//! ## Key Types
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          KEY TYPES                                  │
//! ├─────────────────────────────────────────────────────────────────────┤
//! │                                                                     │
//! │  EphemeralKeyPair (P-256)                                           │
//! │  ────────────────────────                                           │
//! │  Generated fresh for every encryption; consumed by the shared-      │
//! │  secret computation so it cannot be reused across envelopes.        │
//! │                                                                     │
//! │  RecipientKey (P-256 public)                                        │
//! │  ───────────────────────────                                        │
//! │  The counterpart's long-lived public key. Parsed from SEC1 bytes    │
//! │  with full point validation. Read-only input.                       │
//! │                                                                     │
//! │  SigningKeyHandle (P-256)                                           │
//! │  ────────────────────────                                           │
//! │  The caller's long-lived signing key. May be constructed from       │
//! │  private scalar bytes or from public-only bytes; signing checks     │
//! │  the capability explicitly and refuses public-only handles.         │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use p256::elliptic_curve::sec1::ToEncodedPoint;
use p256::{ecdh, PublicKey, SecretKey};
use rand_core::CryptoRngCore;
use zeroize::{ZeroizeOnDrop, Zeroizing};

use crate::crypto::SHARED_SECRET_SIZE;
use crate::error::{Error, Result};

/// A fresh P-256 key pair owned by exactly one encryption call.
///
/// Generated anew on every call — reuse would break forward secrecy — and
/// discarded as soon as the shared secret is computed. The secret scalar is
/// zeroized on drop.
#[derive(ZeroizeOnDrop)]
pub struct EphemeralKeyPair {
    #[zeroize(skip)] // p256::SecretKey zeroizes its own scalar on drop
    secret: SecretKey,
}

impl EphemeralKeyPair {
    /// Generate a new ephemeral key pair from the supplied random source.
    ///
    /// The random source is injected so tests can substitute a seeded
    /// generator for fixed-vector regression tests; production callers pass
    /// `rand::rngs::OsRng`.
    ///
    /// Candidate scalars are drawn until one is a valid non-zero scalar
    /// below the curve order (rejection probability ~2^-32 per draw).
    ///
    /// ## Errors
    ///
    /// [`Error::EntropyUnavailable`] if the random source fails. Fatal for
    /// this payload construction; the caller may retry later.
    pub fn generate(rng: &mut impl CryptoRngCore) -> Result<Self> {
        let mut candidate = Zeroizing::new([0u8; 32]);
        loop {
            rng.try_fill_bytes(candidate.as_mut())
                .map_err(|_| Error::EntropyUnavailable)?;
            if let Ok(secret) = SecretKey::from_slice(candidate.as_ref()) {
                return Ok(Self { secret });
            }
        }
    }

    /// The raw point encoding of the public half: 65-byte uncompressed SEC1
    /// (`0x04 || x || y`), the encoding the verifier expects both inside the
    /// envelope and as HKDF input.
    pub fn public_key_bytes(&self) -> Vec<u8> {
        self.secret
            .public_key()
            .to_encoded_point(false)
            .as_bytes()
            .to_vec()
    }

    /// Perform ECDH against the recipient's static public key.
    ///
    /// Consumes the key pair: one agreement per ephemeral key, enforced by
    /// the type system. The secret scalar is zeroized when `self` drops at
    /// the end of this call.
    pub fn compute_shared_secret(self, recipient: &RecipientKey) -> SharedSecret {
        let shared = ecdh::diffie_hellman(
            self.secret.to_nonzero_scalar(),
            recipient.public.as_affine(),
        );
        let mut bytes = [0u8; SHARED_SECRET_SIZE];
        bytes.copy_from_slice(shared.raw_secret_bytes().as_slice());
        SharedSecret { bytes }
    }
}

/// Raw bytes from ECDH key agreement.
///
/// Exists only inside one derivation call; zeroized on drop; never logged
/// and never serialized.
#[derive(ZeroizeOnDrop)]
pub struct SharedSecret {
    bytes: [u8; SHARED_SECRET_SIZE],
}

impl SharedSecret {
    /// Create from raw DH output.
    pub fn from_bytes(bytes: [u8; SHARED_SECRET_SIZE]) -> Self {
        Self { bytes }
    }

    /// Get the raw bytes (for key derivation).
    pub(crate) fn as_bytes(&self) -> &[u8; SHARED_SECRET_SIZE] {
        &self.bytes
    }
}

/// The recipient's long-lived P-256 public key.
#[derive(Clone)]
pub struct RecipientKey {
    public: PublicKey,
}

impl RecipientKey {
    /// Parse from SEC1 bytes (compressed or uncompressed).
    ///
    /// Performs full point validation — curve membership and identity
    /// rejection — not just a format check. Accepting unvalidated points
    /// would open the scheme to invalid-curve attacks.
    ///
    /// ## Errors
    ///
    /// [`Error::InvalidKey`] if the bytes do not encode a valid point on
    /// the curve.
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self> {
        let public = PublicKey::from_sec1_bytes(bytes)
            .map_err(|_| Error::InvalidKey("recipient key is not a valid P-256 point".into()))?;
        Ok(Self { public })
    }

    /// Wrap an already-validated public key.
    pub fn from_public_key(public: PublicKey) -> Self {
        Self { public }
    }
}

/// The caller's long-lived signing key handle.
///
/// Holds the public key and, when available, the private scalar. Signing
/// requires the private half; [`SigningKeyHandle::can_sign`] exposes that
/// capability as an explicit query, and [`crate::crypto::sign`] refuses
/// public-only handles with [`Error::InvalidKey`] instead of producing
/// garbage output.
#[derive(ZeroizeOnDrop)]
pub struct SigningKeyHandle {
    #[zeroize(skip)] // p256::SecretKey zeroizes its own scalar on drop
    secret: Option<SecretKey>,
    #[zeroize(skip)]
    public: PublicKey,
}

impl SigningKeyHandle {
    /// Build a signing-capable handle from a secret key.
    pub fn from_secret_key(secret: SecretKey) -> Self {
        let public = secret.public_key();
        Self {
            secret: Some(secret),
            public,
        }
    }

    /// Build a signing-capable handle from raw 32-byte scalar bytes.
    ///
    /// ## Errors
    ///
    /// [`Error::InvalidKey`] if the bytes are not a valid non-zero scalar.
    pub fn from_secret_bytes(bytes: &[u8]) -> Result<Self> {
        let secret = SecretKey::from_slice(bytes)
            .map_err(|_| Error::InvalidKey("signing key scalar is out of range".into()))?;
        Ok(Self::from_secret_key(secret))
    }

    /// Build a public-only handle from SEC1 point bytes.
    ///
    /// Such a handle can report its public key but cannot sign.
    pub fn from_public_bytes(bytes: &[u8]) -> Result<Self> {
        let public = PublicKey::from_sec1_bytes(bytes)
            .map_err(|_| Error::InvalidKey("signing public key is not a valid P-256 point".into()))?;
        Ok(Self {
            secret: None,
            public,
        })
    }

    /// Whether this handle holds private material and can sign.
    pub fn can_sign(&self) -> bool {
        self.secret.is_some()
    }

    /// The public half of the key.
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// The private half, or `InvalidKey` when the handle is public-only.
    pub(crate) fn secret_key(&self) -> Result<&SecretKey> {
        self.secret
            .as_ref()
            .ok_or_else(|| Error::InvalidKey("signing key handle holds no private material".into()))
    }
}

// ============================================================================
// TESTS
// ============================================================================
