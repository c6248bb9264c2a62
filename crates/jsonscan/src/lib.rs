//! A streaming, pull-based JSON lexer.
//!
//! [`Scanner`] reads bytes from a caller-owned [`Source`] and returns one
//! [`Token`] per call to [`Scanner::scan`]: delimiters, keys, strings,
//! numbers, literals, separators and finally [`Token::EndOfInput`]. It
//! checks the JSON grammar as it goes, decodes escapes (surrogate pairs
//! included) into UTF-8, and tracks nesting without recursion. No tree is
//! built, and number text is handed back unconverted.
//!
//! ```rust
//! use jsonscan::{Scanner, SliceSource, Token};
//!
//! let mut scanner = Scanner::new().unwrap();
//! let mut src = SliceSource::from(r#"{"id": 7, "tags": ["a", "é"]}"#);
//!
//! let mut keys = Vec::new();
//! loop {
//!     match scanner.scan(&mut src) {
//!         Ok(Token::EndOfInput) => break,
//!         Ok(Token::Key(key)) => keys.push(key.to_string()),
//!         Ok(_) => {}
//!         Err(err) => panic!("{err}"),
//!     }
//! }
//! assert_eq!(keys, ["id", "tags"]);
//! ```
//!
//! Errors are terminal: after the first [`ScanError`] every call returns it
//! again until [`Scanner::reset`].
//!
//! The crate is `no_std` with `alloc`. The default `std` feature adds
//! [`IoSource`] for reading from any [`std::io::BufRead`].

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod buffer;
mod error;
mod escape_buffer;
mod literal_buffer;
mod options;
mod scanner;
mod source;
mod stack;
mod token;

#[cfg(test)]
mod tests;

pub use bstr::{BStr, BString};
pub use error::{ErrorKind, ScanError};
pub use options::{DEFAULT_LEXEME_CAPACITY, DEFAULT_STACK_CAPACITY, ScannerOptions};
pub use scanner::{Scanner, State, Tokens};
#[cfg(feature = "std")]
pub use source::IoSource;
pub use source::{SliceSource, Source};
pub use stack::Container;
pub use token::{OwnedToken, Token, TokenKind};
