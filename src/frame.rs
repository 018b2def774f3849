//! One-byte length framing over compressed payloads.
//!
//! The wire layout is a single unsigned length byte followed by exactly that
//! many payload bytes:
//!
//! ```text
//! [len(1)][payload(len)]
//! ```
//!
//! Lengths are counted in whole bytes since llama-zip emits whole bytes. The
//! single-byte header caps payloads at 255 bytes; anything larger is rejected
//! outright rather than truncated or split.

use crate::LlamapackError;

/// Maximum payload length representable by the one-byte header.
pub const MAX_PAYLOAD_LEN: usize = 0xFF;

/// Prepend a one-byte length header to `payload`.
///
/// The returned vector is `payload.len() + 1` bytes: the first byte holds the
/// payload length and the rest is the payload unchanged.
pub fn frame(payload: &[u8]) -> Result<Vec<u8>, LlamapackError> {
    if payload.len() > MAX_PAYLOAD_LEN {
        return Err(LlamapackError::Oversized(payload.len()));
    }
    let mut out = Vec::with_capacity(payload.len() + 1);
    out.push(payload.len() as u8);
    out.extend_from_slice(payload);
    Ok(out)
}

/// Read a framed payload, returning the declared length and the payload bytes.
///
/// Bytes past the declared length are ignored; the caller decides whether
/// trailing data is meaningful. Fails if the input is empty or shorter than
/// `1 + declared_length`.
pub fn unframe(framed: &[u8]) -> Result<(u8, &[u8]), LlamapackError> {
    let (&len, rest) = framed.split_first().ok_or(LlamapackError::Truncated {
        declared: 1,
        available: 0,
    })?;
    if rest.len() < len as usize {
        return Err(LlamapackError::Truncated {
            declared: len as usize,
            available: rest.len(),
        });
    }
    Ok((len, &rest[..len as usize]))
}
