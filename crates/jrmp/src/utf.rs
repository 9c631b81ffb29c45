//! Java modified UTF-8 (`DataOutput.writeUTF` / `DataInput.readUTF`)
//!
//! Strings are prefixed with their encoded byte length as a big-endian u16.
//! NUL is written as `C0 80` and characters outside the BMP are written as
//! two three-byte surrogate halves.

use bytes::{Buf, BufMut};

use crate::error::{ensure_remaining, JrmpError, Result};

/// Largest encoded length the u16 prefix can express
pub const MAX_UTF_LEN: usize = u16::MAX as usize;

/// Number of bytes `s` occupies after encoding, excluding the prefix
pub fn encoded_len(s: &str) -> usize {
    s.encode_utf16()
        .map(|unit| match unit {
            0x0001..=0x007f => 1,
            0x0000 | 0x0080..=0x07ff => 2,
            _ => 3,
        })
        .sum()
}

/// Write a length-prefixed modified UTF-8 string
pub fn write_utf<B: BufMut>(buf: &mut B, s: &str) -> Result<()> {
    let len = encoded_len(s);
    if len > MAX_UTF_LEN {
        return Err(JrmpError::StringTooLong(len));
    }
    buf.put_u16(len as u16);
    for unit in s.encode_utf16() {
        match unit {
            0x0001..=0x007f => buf.put_u8(unit as u8),
            0x0000 | 0x0080..=0x07ff => {
                buf.put_u8(0xc0 | (unit >> 6) as u8);
                buf.put_u8(0x80 | (unit & 0x3f) as u8);
            }
            _ => {
                buf.put_u8(0xe0 | (unit >> 12) as u8);
                buf.put_u8(0x80 | ((unit >> 6) & 0x3f) as u8);
                buf.put_u8(0x80 | (unit & 0x3f) as u8);
            }
        }
    }
    Ok(())
}

/// Read a length-prefixed modified UTF-8 string
pub fn read_utf<B: Buf>(buf: &mut B) -> Result<String> {
    ensure_remaining(buf, 2)?;
    let len = buf.get_u16() as usize;
    ensure_remaining(buf, len)?;

    let mut data = vec![0u8; len];
    buf.copy_to_slice(&mut data);
    decode_units(&data)
}

fn decode_units(data: &[u8]) -> Result<String> {
    let mut units = Vec::with_capacity(data.len());
    let mut i = 0;

    while i < data.len() {
        let b0 = data[i];
        match b0 >> 4 {
            0x0..=0x7 => {
                units.push(b0 as u16);
                i += 1;
            }
            0xc | 0xd => {
                let b1 = continuation(data, i + 1)?;
                units.push(((b0 as u16 & 0x1f) << 6) | b1);
                i += 2;
            }
            0xe => {
                let b1 = continuation(data, i + 1)?;
                let b2 = continuation(data, i + 2)?;
                units.push(((b0 as u16 & 0x0f) << 12) | (b1 << 6) | b2);
                i += 3;
            }
            _ => {
                return Err(JrmpError::InvalidUtf(format!(
                    "bad lead byte 0x{:02x} at offset {}",
                    b0, i
                )))
            }
        }
    }

    String::from_utf16(&units)
        .map_err(|_| JrmpError::InvalidUtf("unpaired surrogate".to_string()))
}

fn continuation(data: &[u8], at: usize) -> Result<u16> {
    match data.get(at) {
        Some(b) if b & 0xc0 == 0x80 => Ok((b & 0x3f) as u16),
        Some(b) => Err(JrmpError::InvalidUtf(format!(
            "bad continuation byte 0x{:02x} at offset {}",
            b, at
        ))),
        None => Err(JrmpError::InvalidUtf("truncated multi-byte sequence".to_string())),
    }
}
