use super::Scanner;
use crate::{
    error::ErrorKind,
    literal_buffer::{ExpectedLiteralBuffer, Step},
    source::Source,
    token::TokenKind,
};

impl Scanner {
    /// Scans `true`, `false` or `null`. The lexeme buffer is left alone.
    pub(super) fn scan_literal<S: Source + ?Sized>(&mut self, src: &mut S) -> Result<TokenKind, ErrorKind> {
        let mut expected = self
            .read(src)?
            .and_then(ExpectedLiteralBuffer::new)
            .ok_or(ErrorKind::PrimitiveFormat)?;

        loop {
            let byte = self.read(src)?.ok_or(ErrorKind::PrimitiveFormat)?;
            match expected.step(byte) {
                Step::NeedMore => {}
                Step::Done(literal) => return Ok(literal.into()),
                Step::Reject => return Err(ErrorKind::PrimitiveFormat),
            }
        }
    }
}
