use thiserror::Error;

/// The reason the scanner entered its error state.
///
/// Kinds carry no payload beyond what identifies the violated rule; the byte
/// offset lives on [`ScanError`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A buffer could not grow: allocation failed, the size arithmetic would
    /// overflow, or a configured ceiling was reached.
    #[error("out of memory")]
    OutOfMemory,
    /// Something other than a hex digit inside a `\u` escape.
    #[error("invalid hex digit in unicode escape")]
    BadHexDigit,
    /// A `\u` escape that does not form a valid UTF-16 sequence.
    #[error("invalid UTF-16 surrogate encoding")]
    BadSurrogateEncoding,
    /// A backslash followed by an unknown escape character.
    #[error("invalid escape sequence")]
    BadEscape,
    /// A string without an opening quote or without a closing quote.
    #[error("malformed string")]
    StringFormat,
    /// A number that does not follow the JSON number grammar.
    #[error("malformed number")]
    NumberFormat,
    /// Input starting like `true`, `false` or `null` that is not one of them.
    #[error("malformed literal")]
    PrimitiveFormat,
    /// An object key that is not followed by `:`.
    #[error("expected ':' after object key")]
    KeyFormat,
    /// A `,` outside of any array or object.
    #[error("',' outside of an array or object")]
    SeparatorError,
    /// A closing delimiter that does not match the innermost open container.
    #[error("mismatched delimiter")]
    DelimiterMismatch,
    /// The input ended inside a value or an open container.
    #[error("unexpected end of input")]
    UnexpectedEof,
    /// A character that cannot start or continue anything at this position.
    #[error("unexpected character")]
    UnexpectedCharacter,
    /// The underlying reader failed.
    #[cfg(feature = "std")]
    #[error("read error: {0}")]
    Io(std::io::ErrorKind),
}

/// An [`ErrorKind`] together with the number of input bytes consumed when it
/// was raised.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{kind} at byte {position}")]
pub struct ScanError {
    /// Which rule was violated.
    pub kind: ErrorKind,
    /// Input bytes consumed before the error was reported.
    pub position: usize,
}
