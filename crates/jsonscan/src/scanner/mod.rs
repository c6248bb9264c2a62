//! Scanner: the token dispatcher and the state it carries between calls.
//!
//! What it does
//! - Skips JSON whitespace, then decides from the expectation [`State`] which
//!   lexeme may come next and hands over to the string, number or literal
//!   sub-scanner (`string.rs`, `number.rs`, `literal.rs`).
//! - Tracks open arrays and objects in a nesting stack instead of recursing,
//!   so depth is bounded only by memory (or `max_depth`).
//! - Keeps the text of the last string, key or number in one lexeme buffer
//!   that is reused across calls. Returned tokens borrow it.
//!
//! Invariants
//! - `position` counts bytes taken from the source; a pushed-back byte is
//!   given back.
//! - Once in [`State::Error`], `scan` returns the same error without reading.
//!   Only [`Scanner::reset`] leaves that state.
//! - Only the first position inside `[` or `{` accepts the matching closer;
//!   after a `,` another value or key is required.

use core::iter::FusedIterator;

use bstr::BStr;

use crate::{
    buffer::GrowBuf,
    error::{ErrorKind, ScanError},
    options::ScannerOptions,
    source::Source,
    stack::{Container, NestingStack},
    token::{OwnedToken, Token, TokenKind},
};

mod literal;
mod number;
mod string;


/// What the scanner expects to see next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// A value: top level, after `:` or after `,` inside an array.
    ExpectValue,
    /// A value or `]`, right after `[`.
    ExpectFirstValue,
    /// An object key, after `,` inside an object.
    ExpectKey,
    /// An object key or `}`, right after `{`.
    ExpectFirstKey,
    /// `,`, a closer, or the end of input once the stack is empty.
    ExpectSeparatorOrEnd,
    /// A lexical error was found. Terminal until [`Scanner::reset`].
    Error(ErrorKind),
}

/// A pull-based JSON lexer.
///
/// Each call to [`scan`](Self::scan) reads just enough of the source to
/// produce one [`Token`]. The scanner never owns the source, so the same
/// scanner can be reset and reused for another document.
///
/// ```rust
/// use jsonscan::{Scanner, SliceSource, Token};
///
/// let mut scanner = Scanner::new().unwrap();
/// let mut src = SliceSource::from(r#"{"a": [1, true]}"#);
///
/// assert_eq!(scanner.scan(&mut src), Ok(Token::ObjectStart));
/// assert_eq!(scanner.scan(&mut src), Ok(Token::Key("a".into())));
/// assert_eq!(scanner.scan(&mut src), Ok(Token::ArrayStart));
/// assert_eq!(scanner.scan(&mut src), Ok(Token::Number("1".into())));
/// assert_eq!(scanner.depth(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Scanner {
    state: State,
    position: usize,
    lexeme: GrowBuf,
    stack: NestingStack,
    options: ScannerOptions,
}

impl Scanner {
    /// Creates a scanner with the default capacities.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::OutOfMemory`] if the initial buffers cannot be allocated.
    pub fn new() -> Result<Self, ErrorKind> {
        Self::with_options(ScannerOptions::default())
    }

    /// Creates a scanner whose buffers start with the given capacities.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::OutOfMemory`] if the initial buffers cannot be allocated.
    pub fn with_capacity(lexeme_capacity: usize, stack_capacity: usize) -> Result<Self, ErrorKind> {
        Self::with_options(ScannerOptions {
            lexeme_capacity,
            stack_capacity,
            ..ScannerOptions::default()
        })
    }

    /// Creates a scanner from a full set of options.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::OutOfMemory`] if the initial buffers cannot be allocated.
    pub fn with_options(options: ScannerOptions) -> Result<Self, ErrorKind> {
        Ok(Self {
            state: State::ExpectValue,
            position: 0,
            lexeme: GrowBuf::with_capacity(options.lexeme_capacity, options.max_lexeme_len)?,
            stack: NestingStack::with_capacity(options.stack_capacity, options.max_depth)?,
            options,
        })
    }

    /// Reads the next token from `src`.
    ///
    /// Text in the returned token borrows the scanner and is overwritten by
    /// the next call. Once the document is complete every further call
    /// returns [`Token::EndOfInput`] again.
    ///
    /// # Errors
    ///
    /// A [`ScanError`] when the input is not valid JSON, a buffer cannot
    /// grow, or the source fails. The scanner then stays in
    /// [`State::Error`] and returns the same error on every call until
    /// [`reset`](Self::reset).
    pub fn scan<S: Source + ?Sized>(&mut self, src: &mut S) -> Result<Token<'_>, ScanError> {
        if let State::Error(kind) = self.state {
            return Err(ScanError {
                kind,
                position: self.position,
            });
        }

        match self.dispatch(src) {
            Ok(kind) => {
                let token = self.token(kind);
                log::trace!("{} ending at byte {}", token.kind(), self.position);
                Ok(token)
            }
            Err(kind) => {
                log::debug!("{kind} at byte {}, scanner is now in the error state", self.position);
                self.state = State::Error(kind);
                Err(ScanError {
                    kind,
                    position: self.position,
                })
            }
        }
    }

    /// Returns an iterator of owned tokens over `src`.
    ///
    /// The iterator yields the final [`OwnedToken::EndOfInput`] or the first
    /// error and then stops.
    pub fn tokens<'a, S: Source + ?Sized>(&'a mut self, src: &'a mut S) -> Tokens<'a, S> {
        Tokens {
            scanner: self,
            source: src,
            finished: false,
        }
    }

    /// Returns the scanner to its initial state for a new document.
    ///
    /// Both buffers are emptied but keep their capacity.
    pub fn reset(&mut self) {
        log::debug!("resetting scanner at byte {} in state {:?}", self.position, self.state);
        self.state = State::ExpectValue;
        self.position = 0;
        self.lexeme.clear();
        self.stack.clear();
    }

    /// Bytes consumed from the source since creation or the last reset.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of arrays and objects currently open.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    /// The innermost open container, if any.
    #[must_use]
    pub fn innermost(&self) -> Option<Container> {
        self.stack.top()
    }

    /// The current expectation state.
    #[must_use]
    pub fn state(&self) -> State {
        self.state
    }

    /// Whether a previous call failed.
    #[must_use]
    pub fn is_errored(&self) -> bool {
        matches!(self.state, State::Error(_))
    }

    /// Text of the most recently scanned string, key or number.
    #[must_use]
    pub fn lexeme(&self) -> &BStr {
        self.lexeme.as_bstr()
    }

    /// The options this scanner was built with.
    #[must_use]
    pub fn options(&self) -> &ScannerOptions {
        &self.options
    }

    /// Current capacity of the lexeme buffer.
    #[must_use]
    pub fn lexeme_capacity(&self) -> usize {
        self.lexeme.capacity()
    }

    /// Current capacity of the nesting stack.
    #[must_use]
    pub fn stack_capacity(&self) -> usize {
        self.stack.capacity()
    }

    fn token(&self, kind: TokenKind) -> Token<'_> {
        let text = self.lexeme.as_bstr();
        match kind {
            TokenKind::EndOfInput => Token::EndOfInput,
            TokenKind::String => Token::String(text),
            TokenKind::Number => Token::Number(text),
            TokenKind::ObjectStart => Token::ObjectStart,
            TokenKind::Key => Token::Key(text),
            TokenKind::ObjectEnd => Token::ObjectEnd,
            TokenKind::ArrayStart => Token::ArrayStart,
            TokenKind::Separator => Token::Separator,
            TokenKind::ArrayEnd => Token::ArrayEnd,
            TokenKind::True => Token::True,
            TokenKind::False => Token::False,
            TokenKind::Null => Token::Null,
        }
    }

    fn dispatch<S: Source + ?Sized>(&mut self, src: &mut S) -> Result<TokenKind, ErrorKind> {
        let next = self.skip_whitespace(src)?;
        match self.state {
            State::ExpectFirstValue if next == Some(b']') => self.close(src, Container::Array),
            State::ExpectValue | State::ExpectFirstValue => self.expect_value(src, next),
            State::ExpectFirstKey if next == Some(b'}') => self.close(src, Container::Object),
            State::ExpectKey | State::ExpectFirstKey => self.expect_key(src, next),
            State::ExpectSeparatorOrEnd => self.expect_separator_or_end(src),
            State::Error(kind) => Err(kind),
        }
    }

    /// `next` is the already peeked first byte of the value.
    fn expect_value<S: Source + ?Sized>(&mut self, src: &mut S, next: Option<u8>) -> Result<TokenKind, ErrorKind> {
        let Some(byte) = next else {
            return Err(ErrorKind::UnexpectedEof);
        };

        self.state = State::ExpectSeparatorOrEnd;
        match byte {
            b't' | b'f' | b'n' => self.scan_literal(src),
            b'"' => {
                self.scan_string(src)?;
                Ok(TokenKind::String)
            }
            b'-' | b'0'..=b'9' => {
                self.scan_number(src)?;
                Ok(TokenKind::Number)
            }
            b'[' => {
                self.read(src)?;
                self.stack.open(Container::Array)?;
                self.state = State::ExpectFirstValue;
                Ok(TokenKind::ArrayStart)
            }
            b'{' => {
                self.read(src)?;
                self.stack.open(Container::Object)?;
                self.state = State::ExpectFirstKey;
                Ok(TokenKind::ObjectStart)
            }
            _ => Err(ErrorKind::UnexpectedCharacter),
        }
    }

    fn expect_key<S: Source + ?Sized>(&mut self, src: &mut S, next: Option<u8>) -> Result<TokenKind, ErrorKind> {
        if next.is_none() {
            return Err(ErrorKind::UnexpectedEof);
        }

        self.scan_string(src)?;
        if self.skip_whitespace(src)? != Some(b':') {
            return Err(ErrorKind::KeyFormat);
        }
        self.read(src)?;
        self.state = State::ExpectValue;
        Ok(TokenKind::Key)
    }

    fn expect_separator_or_end<S: Source + ?Sized>(&mut self, src: &mut S) -> Result<TokenKind, ErrorKind> {
        let Some(byte) = self.read(src)? else {
            return if self.stack.is_empty() {
                Ok(TokenKind::EndOfInput)
            } else {
                Err(ErrorKind::UnexpectedEof)
            };
        };

        match byte {
            b',' => {
                self.state = match self.stack.top() {
                    Some(Container::Array) => State::ExpectValue,
                    Some(Container::Object) => State::ExpectKey,
                    None => return Err(ErrorKind::SeparatorError),
                };
                Ok(TokenKind::Separator)
            }
            b']' => {
                self.stack.close(Container::Array)?;
                Ok(TokenKind::ArrayEnd)
            }
            b'}' => {
                self.stack.close(Container::Object)?;
                Ok(TokenKind::ObjectEnd)
            }
            _ => Err(ErrorKind::UnexpectedCharacter),
        }
    }

    /// Consumes the peeked closer of an empty container.
    fn close<S: Source + ?Sized>(&mut self, src: &mut S, container: Container) -> Result<TokenKind, ErrorKind> {
        self.read(src)?;
        self.stack.close(container)?;
        self.state = State::ExpectSeparatorOrEnd;
        Ok(match container {
            Container::Array => TokenKind::ArrayEnd,
            Container::Object => TokenKind::ObjectEnd,
        })
    }

    #[inline]
    fn read<S: Source + ?Sized>(&mut self, src: &mut S) -> Result<Option<u8>, ErrorKind> {
        let byte = src.next_byte()?;
        if byte.is_some() {
            self.position += 1;
        }
        Ok(byte)
    }

    #[inline]
    fn unread<S: Source + ?Sized>(&mut self, src: &mut S, byte: u8) {
        debug_assert!(self.position > 0);
        src.unread(byte);
        self.position -= 1;
    }

    /// Consumes whitespace and returns the following byte without consuming
    /// it.
    fn skip_whitespace<S: Source + ?Sized>(&mut self, src: &mut S) -> Result<Option<u8>, ErrorKind> {
        loop {
            match src.peek_byte()? {
                Some(b' ' | b'\t' | b'\n' | b'\r') => {
                    self.read(src)?;
                }
                next => return Ok(next),
            }
        }
    }
}

/// Iterator returned by [`Scanner::tokens`].
#[derive(Debug)]
pub struct Tokens<'a, S: ?Sized> {
    scanner: &'a mut Scanner,
    source: &'a mut S,
    finished: bool,
}

impl<S: Source + ?Sized> Iterator for Tokens<'_, S> {
    type Item = Result<OwnedToken, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let item = self.scanner.scan(&mut *self.source).map(|token| token.to_owned_token());
        self.finished = !matches!(&item, Ok(token) if *token != OwnedToken::EndOfInput);
        Some(item)
    }
}

impl<S: Source + ?Sized> FusedIterator for Tokens<'_, S> {}
