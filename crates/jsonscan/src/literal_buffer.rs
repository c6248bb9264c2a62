use crate::token::TokenKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Literal {
    Null,
    True,
    False,
}

impl From<Literal> for TokenKind {
    fn from(literal: Literal) -> Self {
        match literal {
            Literal::Null => TokenKind::Null,
            Literal::True => TokenKind::True,
            Literal::False => TokenKind::False,
        }
    }
}

/// What happened after feeding one more byte into the literal matcher?
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    /// Byte matched, but the literal is not finished yet.
    NeedMore,
    /// Byte matched *and* it was the last byte of the literal.
    Done(Literal),
    /// Byte did **not** match the expected byte.
    Reject,
}

/// Matches the rest of `true`, `false` or `null` after its first byte.
///
/// Holds the bytes still expected and the literal they complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ExpectedLiteralBuffer {
    rest: &'static [u8],
    literal: Literal,
}

impl ExpectedLiteralBuffer {
    /// Starts matching after the *first* byte (`n`, `t`, or `f`). `None` for
    /// any other byte.
    pub(crate) fn new(first: u8) -> Option<Self> {
        let (rest, literal): (&'static [u8], _) = match first {
            b'n' => (b"ull", Literal::Null),
            b't' => (b"rue", Literal::True),
            b'f' => (b"alse", Literal::False),
            _ => return None,
        };
        Some(Self { rest, literal })
    }

    /// Gives the matcher the next input byte. After `Reject` the buffer is
    /// left unchanged.
    pub(crate) fn step(&mut self, byte: u8) -> Step {
        match self.rest.split_first() {
            Some((&expected, rest)) if expected == byte => {
                self.rest = rest;
                if rest.is_empty() {
                    Step::Done(self.literal)
                } else {
                    Step::NeedMore
                }
            }
            _ => Step::Reject,
        }
    }
}
