use core::fmt;

use bstr::{BStr, BString};

/// One lexical unit of JSON, as returned by [`Scanner::scan`].
///
/// Text payloads borrow the scanner's lexeme buffer and therefore live only
/// until the next call on the scanner. Use [`Token::to_owned_token`] to keep
/// one around longer.
///
/// `String` and `Key` text is the decoded content without quotes; `Number`
/// text is the literal exactly as written, to be converted by the caller.
///
/// [`Scanner::scan`]: crate::Scanner::scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token<'a> {
    /// The document ended cleanly.
    EndOfInput,
    /// A string value.
    String(&'a BStr),
    /// A number literal.
    Number(&'a BStr),
    /// `{`
    ObjectStart,
    /// An object key, already followed by its `:`.
    Key(&'a BStr),
    /// `}`
    ObjectEnd,
    /// `[`
    ArrayStart,
    /// `,`
    Separator,
    /// `]`
    ArrayEnd,
    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    Null,
}

/// The payload-free discriminant of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// See [`Token::EndOfInput`].
    EndOfInput,
    /// See [`Token::String`].
    String,
    /// See [`Token::Number`].
    Number,
    /// See [`Token::ObjectStart`].
    ObjectStart,
    /// See [`Token::Key`].
    Key,
    /// See [`Token::ObjectEnd`].
    ObjectEnd,
    /// See [`Token::ArrayStart`].
    ArrayStart,
    /// See [`Token::Separator`].
    Separator,
    /// See [`Token::ArrayEnd`].
    ArrayEnd,
    /// See [`Token::True`].
    True,
    /// See [`Token::False`].
    False,
    /// See [`Token::Null`].
    Null,
}

impl TokenKind {
    /// Whether tokens of this kind carry text.
    #[must_use]
    pub const fn has_text(self) -> bool {
        matches!(self, TokenKind::String | TokenKind::Number | TokenKind::Key)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TokenKind::EndOfInput => "end of input",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::ObjectStart => "'{'",
            TokenKind::Key => "key",
            TokenKind::ObjectEnd => "'}'",
            TokenKind::ArrayStart => "'['",
            TokenKind::Separator => "','",
            TokenKind::ArrayEnd => "']'",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Null => "null",
        })
    }
}

impl<'a> Token<'a> {
    /// Returns the kind of this token.
    #[must_use]
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::EndOfInput => TokenKind::EndOfInput,
            Token::String(_) => TokenKind::String,
            Token::Number(_) => TokenKind::Number,
            Token::ObjectStart => TokenKind::ObjectStart,
            Token::Key(_) => TokenKind::Key,
            Token::ObjectEnd => TokenKind::ObjectEnd,
            Token::ArrayStart => TokenKind::ArrayStart,
            Token::Separator => TokenKind::Separator,
            Token::ArrayEnd => TokenKind::ArrayEnd,
            Token::True => TokenKind::True,
            Token::False => TokenKind::False,
            Token::Null => TokenKind::Null,
        }
    }

    /// The text of a `String`, `Number` or `Key` token.
    #[must_use]
    pub fn text(&self) -> Option<&'a BStr> {
        match *self {
            Token::String(text) | Token::Number(text) | Token::Key(text) => Some(text),
            _ => None,
        }
    }

    /// Returns `true` for [`Token::EndOfInput`].
    #[must_use]
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, Token::EndOfInput)
    }

    /// Copies the token out of the scanner's buffer.
    #[must_use]
    pub fn to_owned_token(&self) -> OwnedToken {
        OwnedToken::from(*self)
    }
}

/// A [`Token`] that owns its text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OwnedToken {
    /// See [`Token::EndOfInput`].
    EndOfInput,
    /// See [`Token::String`].
    String(BString),
    /// See [`Token::Number`].
    Number(BString),
    /// See [`Token::ObjectStart`].
    ObjectStart,
    /// See [`Token::Key`].
    Key(BString),
    /// See [`Token::ObjectEnd`].
    ObjectEnd,
    /// See [`Token::ArrayStart`].
    ArrayStart,
    /// See [`Token::Separator`].
    Separator,
    /// See [`Token::ArrayEnd`].
    ArrayEnd,
    /// See [`Token::True`].
    True,
    /// See [`Token::False`].
    False,
    /// See [`Token::Null`].
    Null,
}

impl OwnedToken {
    /// Borrows this token as a [`Token`].
    #[must_use]
    pub fn as_token(&self) -> Token<'_> {
        match self {
            OwnedToken::EndOfInput => Token::EndOfInput,
            OwnedToken::String(text) => Token::String(BStr::new(text)),
            OwnedToken::Number(text) => Token::Number(BStr::new(text)),
            OwnedToken::ObjectStart => Token::ObjectStart,
            OwnedToken::Key(text) => Token::Key(BStr::new(text)),
            OwnedToken::ObjectEnd => Token::ObjectEnd,
            OwnedToken::ArrayStart => Token::ArrayStart,
            OwnedToken::Separator => Token::Separator,
            OwnedToken::ArrayEnd => Token::ArrayEnd,
            OwnedToken::True => Token::True,
            OwnedToken::False => Token::False,
            OwnedToken::Null => Token::Null,
        }
    }

    /// Returns the kind of this token.
    #[must_use]
    pub fn kind(&self) -> TokenKind {
        self.as_token().kind()
    }
}

impl From<Token<'_>> for OwnedToken {
    fn from(token: Token<'_>) -> Self {
        match token {
            Token::EndOfInput => OwnedToken::EndOfInput,
            Token::String(text) => OwnedToken::String(BString::new(text.to_vec())),
            Token::Number(text) => OwnedToken::Number(BString::new(text.to_vec())),
            Token::ObjectStart => OwnedToken::ObjectStart,
            Token::Key(text) => OwnedToken::Key(BString::new(text.to_vec())),
            Token::ObjectEnd => OwnedToken::ObjectEnd,
            Token::ArrayStart => OwnedToken::ArrayStart,
            Token::Separator => OwnedToken::Separator,
            Token::ArrayEnd => OwnedToken::ArrayEnd,
            Token::True => OwnedToken::True,
            Token::False => OwnedToken::False,
            Token::Null => OwnedToken::Null,
        }
    }
}

impl PartialEq<OwnedToken> for Token<'_> {
    fn eq(&self, other: &OwnedToken) -> bool {
        *self == other.as_token()
    }
}
