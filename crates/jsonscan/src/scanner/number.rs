//! Number grammar:
//!
//! ```text
//! number   = [ "-" ] int [ frac ] [ exp ]
//! int      = "0" / digit1-9 *digit
//! frac     = "." 1*digit
//! exp      = ("e" / "E") [ "+" / "-" ] 1*digit
//! ```
//!
//! A digit right after a leading `0` is rejected. The byte that ends the
//! number is pushed back onto the source.

use super::Scanner;
use crate::{error::ErrorKind, source::Source};

impl Scanner {
    pub(super) fn scan_number<S: Source + ?Sized>(&mut self, src: &mut S) -> Result<(), ErrorKind> {
        self.lexeme.clear();

        let mut next = self.read(src)?;
        if next == Some(b'-') {
            self.lexeme.push(b'-')?;
            next = self.read(src)?;
        }

        next = match next {
            Some(b'0') => {
                self.lexeme.push(b'0')?;
                let after = self.read(src)?;
                if after.is_some_and(|b| b.is_ascii_digit()) {
                    return Err(ErrorKind::NumberFormat);
                }
                after
            }
            _ => self.required_digits(src, next)?,
        };

        if next == Some(b'.') {
            self.lexeme.push(b'.')?;
            next = self.read(src)?;
            next = self.required_digits(src, next)?;
        }

        if let Some(marker @ (b'e' | b'E')) = next {
            self.lexeme.push(marker)?;
            next = self.read(src)?;
            if let Some(sign @ (b'+' | b'-')) = next {
                self.lexeme.push(sign)?;
                next = self.read(src)?;
            }
            next = self.required_digits(src, next)?;
        }

        if let Some(byte) = next {
            self.unread(src, byte);
        }
        Ok(())
    }

    /// Appends `first` and every digit after it. `first` must be a digit.
    /// Returns the byte that ended the run, already consumed.
    fn required_digits<S: Source + ?Sized>(&mut self, src: &mut S, first: Option<u8>) -> Result<Option<u8>, ErrorKind> {
        let Some(digit) = first.filter(u8::is_ascii_digit) else {
            return Err(ErrorKind::NumberFormat);
        };
        self.lexeme.push(digit)?;
        loop {
            match self.read(src)? {
                Some(digit) if digit.is_ascii_digit() => self.lexeme.push(digit)?,
                other => return Ok(other),
            }
        }
    }
}
