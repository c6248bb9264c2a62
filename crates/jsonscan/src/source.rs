//! Byte sources the scanner pulls from.
//!
//! A source is owned by the caller and lent to [`Scanner::scan`] for the
//! duration of one call. The scanner needs exactly one byte of pushback: it
//! reads one byte past the end of a number, and it peeks past whitespace.
//! [`Source::unread`] is therefore only ever called with the byte returned by
//! the immediately preceding [`Source::next_byte`], and never twice in a row.
//!
//! [`Scanner::scan`]: crate::Scanner::scan

use crate::error::ErrorKind;

/// A stream of input bytes with one byte of pushback.
pub trait Source {
    /// Returns the next byte, or `Ok(None)` once the input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns an [`ErrorKind`] when the underlying input fails. Such errors
    /// are terminal for the scanner exactly like lexical errors.
    fn next_byte(&mut self) -> Result<Option<u8>, ErrorKind>;

    /// Pushes `byte` back so that the next [`next_byte`](Self::next_byte)
    /// returns it again.
    fn unread(&mut self, byte: u8);

    /// Returns the next byte without consuming it.
    ///
    /// # Errors
    ///
    /// Same as [`next_byte`](Self::next_byte).
    fn peek_byte(&mut self) -> Result<Option<u8>, ErrorKind> {
        let next = self.next_byte()?;
        if let Some(byte) = next {
            self.unread(byte);
        }
        Ok(next)
    }
}

impl<S: Source + ?Sized> Source for &mut S {
    #[inline]
    fn next_byte(&mut self) -> Result<Option<u8>, ErrorKind> {
        (**self).next_byte()
    }

    #[inline]
    fn unread(&mut self, byte: u8) {
        (**self).unread(byte);
    }

    #[inline]
    fn peek_byte(&mut self) -> Result<Option<u8>, ErrorKind> {
        (**self).peek_byte()
    }
}

/// In-memory input.
///
/// ```rust
/// use jsonscan::{Source, SliceSource};
///
/// let mut src = SliceSource::new(b"[1]");
/// assert_eq!(src.next_byte(), Ok(Some(b'[')));
/// src.unread(b'[');
/// assert_eq!(src.remaining(), b"[1]");
/// ```
#[derive(Debug, Clone)]
pub struct SliceSource<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> SliceSource<'a> {
    /// Creates a source reading `bytes` from the start.
    #[must_use]
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    /// The bytes not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.offset..]
    }

    /// Bytes consumed so far.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl<'a> From<&'a [u8]> for SliceSource<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::new(bytes)
    }
}

impl<'a> From<&'a str> for SliceSource<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text.as_bytes())
    }
}

impl Source for SliceSource<'_> {
    #[inline]
    fn next_byte(&mut self) -> Result<Option<u8>, ErrorKind> {
        let byte = self.bytes.get(self.offset).copied();
        if byte.is_some() {
            self.offset += 1;
        }
        Ok(byte)
    }

    #[inline]
    fn unread(&mut self, byte: u8) {
        debug_assert!(self.offset > 0, "unread before any read");
        self.offset -= 1;
        debug_assert_eq!(self.bytes[self.offset], byte, "unread of a different byte");
    }

    #[inline]
    fn peek_byte(&mut self) -> Result<Option<u8>, ErrorKind> {
        Ok(self.bytes.get(self.offset).copied())
    }
}

#[cfg(feature = "std")]
pub use io::IoSource;

#[cfg(feature = "std")]
mod io {
    use std::io::{self, BufRead};

    use super::Source;
    use crate::error::ErrorKind;

    /// Adapts any [`BufRead`] into a [`Source`].
    ///
    /// Reads go through the reader's own buffer one byte at a time; wrap
    /// unbuffered readers (files, sockets) in a [`std::io::BufReader`] first.
    /// Reads interrupted by a signal are retried.
    ///
    /// ```rust
    /// use std::io::BufReader;
    /// use jsonscan::{IoSource, Scanner, Token};
    ///
    /// let reader = BufReader::new(&b"[true]"[..]);
    /// let mut src = IoSource::new(reader);
    /// let mut scanner = Scanner::new().unwrap();
    /// assert_eq!(scanner.scan(&mut src), Ok(Token::ArrayStart));
    /// assert_eq!(scanner.scan(&mut src), Ok(Token::True));
    /// ```
    #[derive(Debug)]
    pub struct IoSource<R> {
        inner: R,
        pushback: Option<u8>,
    }

    impl<R: BufRead> IoSource<R> {
        /// Wraps `inner`.
        pub fn new(inner: R) -> Self {
            Self {
                inner,
                pushback: None,
            }
        }

        /// Returns a reference to the wrapped reader.
        pub fn get_ref(&self) -> &R {
            &self.inner
        }

        /// Unwraps the reader. A pushed-back byte, if any, is lost.
        pub fn into_inner(self) -> R {
            self.inner
        }
    }

    impl<R: BufRead> Source for IoSource<R> {
        fn next_byte(&mut self) -> Result<Option<u8>, ErrorKind> {
            if let Some(byte) = self.pushback.take() {
                return Ok(Some(byte));
            }
            loop {
                let byte = match self.inner.fill_buf() {
                    Ok(buf) => buf.first().copied(),
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) => {
                        log::debug!("reader failed: {e}");
                        return Err(ErrorKind::Io(e.kind()));
                    }
                };
                if byte.is_some() {
                    self.inner.consume(1);
                }
                return Ok(byte);
            }
        }

        fn unread(&mut self, byte: u8) {
            debug_assert!(self.pushback.is_none(), "only one byte of pushback");
            self.pushback = Some(byte);
        }
    }

}
