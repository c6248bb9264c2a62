//! Decoding of `\uXXXX` escapes.
//!
//! The [`UnicodeEscapeBuffer`] type accumulates exactly four ASCII hexadecimal
//! digits (`0-9`, `A-F`, `a-f`) into a UTF-16 code unit as they arrive and
//! hands the unit back when the fourth digit is fed. Turning units into
//! scalar values is left to [`decode_utf16_pair`] and [`decode_utf16_unit`],
//! since a high surrogate needs a second escape before it means anything.

use crate::error::ErrorKind;

const HIGH_SURROGATES: core::ops::RangeInclusive<u16> = 0xD800..=0xDBFF;
const LOW_SURROGATES: core::ops::RangeInclusive<u16> = 0xDC00..=0xDFFF;

/// Accumulates four hexadecimal digits into one UTF-16 code unit.
#[derive(Debug, Default)]
pub(crate) struct UnicodeEscapeBuffer {
    acc: u16,
    len: u8,
}

impl UnicodeEscapeBuffer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn hex_val(byte: u8) -> Option<u16> {
        match byte {
            b'0'..=b'9' => Some(u16::from(byte - b'0')),
            b'a'..=b'f' => Some(u16::from(byte - b'a') + 10),
            b'A'..=b'F' => Some(u16::from(byte - b'A') + 10),
            _ => None,
        }
    }

    /// Feeds one digit.
    ///
    /// - `Ok(None)` while fewer than four digits have arrived.
    /// - `Ok(Some(unit))` on the fourth digit; the buffer is then reset.
    /// - `Err(BadHexDigit)` if `byte` is not an ASCII hex digit.
    pub(crate) fn feed(&mut self, byte: u8) -> Result<Option<u16>, ErrorKind> {
        let digit = Self::hex_val(byte).ok_or(ErrorKind::BadHexDigit)?;
        debug_assert!(self.len < 4);

        self.acc = (self.acc << 4) | digit;
        self.len += 1;
        if self.len < 4 {
            return Ok(None);
        }

        let unit = self.acc;
        *self = Self::default();
        Ok(Some(unit))
    }
}

#[inline]
pub(crate) fn is_high_surrogate(unit: u16) -> bool {
    HIGH_SURROGATES.contains(&unit)
}

/// Decodes a unit that stands on its own. Any surrogate is rejected here.
pub(crate) fn decode_utf16_unit(unit: u16) -> Result<char, ErrorKind> {
    char::from_u32(u32::from(unit)).ok_or(ErrorKind::BadSurrogateEncoding)
}

/// Combines a high and a low surrogate into the scalar above U+FFFF they
/// encode.
pub(crate) fn decode_utf16_pair(high: u16, low: u16) -> Result<char, ErrorKind> {
    if !is_high_surrogate(high) || !LOW_SURROGATES.contains(&low) {
        return Err(ErrorKind::BadSurrogateEncoding);
    }
    let code = 0x1_0000 + ((u32::from(high) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
    char::from_u32(code).ok_or(ErrorKind::BadSurrogateEncoding)
}
