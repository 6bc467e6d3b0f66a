//! # Canonical Signature String
//!
//! The byte string the detached signature covers. Four fields, each
//! prefixed by a 4-byte little-endian length:
//!
//! ```text
//! LE32(len(sender_id))        || sender_id
//! LE32(len(recipient_id))     || recipient_id
//! LE32(len(protocol_version)) || protocol_version
//! LE32(len(message))          || message
//! ```
//!
//! Field order and prefix placement are fixed; these are the exact bytes
//! passed to the signing primitive, and any reordering breaks interop with
//! a conformant verifier. Lengths are BYTE lengths, which matters for
//! non-ASCII identifiers.

use crate::error::{Error, Result};

/// Build the canonical length-prefixed byte string to be signed.
///
/// `message` is typically the serialized envelope JSON, but any byte
/// string is accepted.
///
/// ## Errors
///
/// [`Error::FieldTooLarge`] if a field's byte length exceeds the 4-byte
/// prefix range. Practically unreachable; never silently truncated.
pub fn build_signature_string(
    message: &[u8],
    recipient_id: &str,
    sender_id: &str,
    protocol_version: &str,
) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(
        4 * 4 + sender_id.len() + recipient_id.len() + protocol_version.len() + message.len(),
    );

    append_length_prefixed(&mut out, sender_id.as_bytes())?;
    append_length_prefixed(&mut out, recipient_id.as_bytes())?;
    append_length_prefixed(&mut out, protocol_version.as_bytes())?;
    append_length_prefixed(&mut out, message)?;

    Ok(out)
}

fn append_length_prefixed(out: &mut Vec<u8>, field: &[u8]) -> Result<()> {
    let length = u32::try_from(field.len()).map_err(|_| Error::FieldTooLarge(field.len()))?;
    out.extend_from_slice(&length.to_le_bytes());
    out.extend_from_slice(field);
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vector() {
        let built =
            build_signature_string(b"hello", "merchant:0123456789", "Google", "ECv1").unwrap();

        let mut expected = Vec::new();
        expected.extend_from_slice(&6u32.to_le_bytes());
        expected.extend_from_slice(b"Google");
        expected.extend_from_slice(&20u32.to_le_bytes());
        expected.extend_from_slice(b"merchant:0123456789");
        expected.extend_from_slice(&4u32.to_le_bytes());
        expected.extend_from_slice(b"ECv1");
        expected.extend_from_slice(&5u32.to_le_bytes());
        expected.extend_from_slice(b"hello");

        assert_eq!(built, expected);
    }

    #[test]
    fn test_known_vector_literal_bytes() {
        let built =
            build_signature_string(b"hello", "merchant:0123456789", "Google", "ECv1").unwrap();

        assert_eq!(
            built,
            hex::decode(
                "06000000476f6f676c65\
                 140000006d65726368616e743a30313233343536373839\
                 0400000045437631\
                 0500000068656c6c6f"
            )
            .unwrap()
        );
    }

    #[test]
    fn test_prefixes_are_byte_lengths_not_char_counts() {
        // "é" is one char but two UTF-8 bytes.
        let built = build_signature_string(b"", "é", "é", "é").unwrap();

        let mut expected = Vec::new();
        for _ in 0..3 {
            expected.extend_from_slice(&2u32.to_le_bytes());
            expected.extend_from_slice("é".as_bytes());
        }
        expected.extend_from_slice(&0u32.to_le_bytes());

        assert_eq!(built, expected);
    }

    #[test]
    fn test_empty_message_still_carries_prefix() {
        let built = build_signature_string(b"", "r", "s", "v").unwrap();
        assert_eq!(built.len(), 4 * 4 + 3);
        assert_eq!(&built[built.len() - 4..], &0u32.to_le_bytes());
    }
}
