//! String lexemes: quote handling, simple escapes and `\u` escapes.
//!
//! Bytes other than `"` and `\` are copied through untouched, so the lexeme
//! is only guaranteed to be UTF-8 when the input was. Every `\u` escape is
//! validated: a high surrogate must be followed directly by `\u` and a low
//! surrogate, and a low surrogate may not appear alone.

use super::Scanner;
use crate::{
    error::ErrorKind,
    escape_buffer::{UnicodeEscapeBuffer, decode_utf16_pair, decode_utf16_unit, is_high_surrogate},
    source::Source,
};

impl Scanner {
    /// Scans a quoted string into the lexeme buffer, without the quotes.
    pub(super) fn scan_string<S: Source + ?Sized>(&mut self, src: &mut S) -> Result<(), ErrorKind> {
        self.lexeme.clear();
        if self.read(src)? != Some(b'"') {
            return Err(ErrorKind::StringFormat);
        }

        loop {
            match self.read(src)? {
                None => return Err(ErrorKind::StringFormat),
                Some(b'"') => return Ok(()),
                Some(b'\\') => self.scan_escape(src)?,
                Some(byte) => self.lexeme.push(byte)?,
            }
        }
    }

    /// Called after the backslash.
    fn scan_escape<S: Source + ?Sized>(&mut self, src: &mut S) -> Result<(), ErrorKind> {
        let decoded = match self.read(src)? {
            Some(b'"') => b'"',
            Some(b'\\') => b'\\',
            Some(b'/') => b'/',
            Some(b'b') => 0x08,
            Some(b'f') => 0x0C,
            Some(b'n') => b'\n',
            Some(b'r') => b'\r',
            Some(b't') => b'\t',
            Some(b'u') => return self.scan_unicode_escape(src),
            _ => return Err(ErrorKind::BadEscape),
        };
        self.lexeme.push(decoded)
    }

    /// Called after `\u`.
    fn scan_unicode_escape<S: Source + ?Sized>(&mut self, src: &mut S) -> Result<(), ErrorKind> {
        let unit = self.read_code_unit(src)?;
        let ch = if is_high_surrogate(unit) {
            if self.read(src)? != Some(b'\\') || self.read(src)? != Some(b'u') {
                return Err(ErrorKind::BadSurrogateEncoding);
            }
            let low = self.read_code_unit(src)?;
            decode_utf16_pair(unit, low)?
        } else {
            decode_utf16_unit(unit)?
        };

        let mut utf8 = [0; 4];
        self.lexeme.extend_from_slice(ch.encode_utf8(&mut utf8).as_bytes())
    }

    fn read_code_unit<S: Source + ?Sized>(&mut self, src: &mut S) -> Result<u16, ErrorKind> {
        let mut digits = UnicodeEscapeBuffer::new();
        loop {
            let byte = self.read(src)?.ok_or(ErrorKind::BadHexDigit)?;
            if let Some(unit) = digits.feed(byte)? {
                return Ok(unit);
            }
        }
    }
}
