//! JRMP error types

use thiserror::Error;

/// Result type for JRMP decoding
pub type Result<T> = std::result::Result<T, JrmpError>;

/// Errors raised while reading or writing JRMP reference data
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JrmpError {
    /// Buffer underflow (not enough data)
    #[error("buffer underflow: need {needed} bytes, have {have}")]
    BufferUnderflow { needed: usize, have: usize },

    /// Malformed modified UTF-8 data
    #[error("invalid modified UTF-8: {0}")]
    InvalidUtf(String),

    /// String does not fit the u16 length prefix
    #[error("string too long: {0} encoded bytes exceeds 65535")]
    StringTooLong(usize),

    /// Reference class name is not one this crate knows
    #[error("unknown remote reference type: {0}")]
    UnknownRefType(String),
}

/// Fail with `BufferUnderflow` unless `needed` bytes remain
pub(crate) fn ensure_remaining<B: bytes::Buf>(buf: &B, needed: usize) -> Result<()> {
    if buf.remaining() < needed {
        return Err(JrmpError::BufferUnderflow {
            needed,
            have: buf.remaining(),
        });
    }
    Ok(())
}
