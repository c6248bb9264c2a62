mod value;

use alloc::vec::Vec;

use crate::{OwnedToken, ScanError, Scanner, SliceSource, Source};

/// Scans `src` to completion, keeping every token and the error, if any.
#[cfg_attr(not(feature = "std"), allow(dead_code))]
pub(crate) fn collect_tokens<S: Source + ?Sized>(src: &mut S) -> Result<Vec<OwnedToken>, ScanError> {
    let mut scanner = Scanner::new().map_err(|kind| ScanError { kind, position: 0 })?;
    scanner.tokens(src).collect()
}

pub(crate) fn lex_str(input: &str) -> Result<Vec<OwnedToken>, ScanError> {
    collect_tokens(&mut SliceSource::from(input))
}
