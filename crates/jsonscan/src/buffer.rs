//! Growable byte buffer backing the lexeme text and the nesting stack.
//!
//! Growth is explicit rather than left to `Vec::push`: capacity doubles (an
//! empty buffer jumps to [`MIN_CAPACITY`]), all size arithmetic is checked,
//! and allocation goes through `try_reserve_exact`. Any failure on that path
//! is reported as [`ErrorKind::OutOfMemory`] and leaves the contents intact.
//!
//! Invariants
//! - `len() <= capacity()` at all times.
//! - When a limit is set, `len() <= limit` at all times.
//! - `clear()` never releases capacity.

use alloc::vec::Vec;

use bstr::BStr;

use crate::error::ErrorKind;

/// Capacity an empty buffer grows to on its first push.
pub(crate) const MIN_CAPACITY: usize = 8;

#[derive(Debug, Clone, Default)]
pub(crate) struct GrowBuf {
    bytes: Vec<u8>,
    limit: Option<usize>,
}

impl GrowBuf {
    /// Allocates `capacity` bytes up front. `limit`, if set, is the largest
    /// length the buffer may ever reach.
    pub(crate) fn with_capacity(capacity: usize, limit: Option<usize>) -> Result<Self, ErrorKind> {
        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(capacity)
            .map_err(|_| ErrorKind::OutOfMemory)?;
        Ok(Self { bytes, limit })
    }

    #[inline]
    pub(crate) fn push(&mut self, byte: u8) -> Result<(), ErrorKind> {
        if self.bytes.len() == self.bytes.capacity() || self.at_limit(1) {
            self.grow(1)?;
        }
        self.bytes.push(byte);
        Ok(())
    }

    pub(crate) fn extend_from_slice(&mut self, bytes: &[u8]) -> Result<(), ErrorKind> {
        if self.bytes.capacity() - self.bytes.len() < bytes.len() || self.at_limit(bytes.len()) {
            self.grow(bytes.len())?;
        }
        self.bytes.extend_from_slice(bytes);
        Ok(())
    }

    /// Removes the last byte. `None` when empty.
    #[inline]
    pub(crate) fn pop(&mut self) -> Option<u8> {
        self.bytes.pop()
    }

    /// Returns the last byte without removing it. `None` when empty.
    #[inline]
    pub(crate) fn peek(&self) -> Option<u8> {
        self.bytes.last().copied()
    }

    #[inline]
    pub(crate) fn clear(&mut self) {
        self.bytes.clear();
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.bytes.capacity()
    }

    #[inline]
    pub(crate) fn as_bstr(&self) -> &BStr {
        BStr::new(&self.bytes)
    }

    fn at_limit(&self, additional: usize) -> bool {
        self.limit
            .is_some_and(|limit| self.bytes.len().saturating_add(additional) > limit)
    }

    /// Makes room for `additional` more bytes by doubling.
    fn grow(&mut self, additional: usize) -> Result<(), ErrorKind> {
        let len = self.bytes.len();
        let required = len.checked_add(additional).ok_or(ErrorKind::OutOfMemory)?;
        if self.limit.is_some_and(|limit| required > limit) {
            return Err(ErrorKind::OutOfMemory);
        }

        let mut capacity = self.bytes.capacity().max(MIN_CAPACITY);
        while capacity < required {
            capacity = capacity.checked_mul(2).ok_or(ErrorKind::OutOfMemory)?;
        }
        if let Some(limit) = self.limit {
            capacity = capacity.min(limit);
        }
        if capacity <= self.bytes.capacity() {
            return Ok(());
        }

        log::trace!(
            "growing buffer from {} to {capacity} bytes",
            self.bytes.capacity()
        );
        self.bytes
            .try_reserve_exact(capacity - len)
            .map_err(|_| ErrorKind::OutOfMemory)
    }
}
