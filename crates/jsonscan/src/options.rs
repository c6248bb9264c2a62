/// Default initial capacity of the lexeme buffer, in bytes.
pub const DEFAULT_LEXEME_CAPACITY: usize = 8196;

/// Default initial capacity of the nesting stack, in levels.
pub const DEFAULT_STACK_CAPACITY: usize = 256;

/// Configuration options for the JSON scanner.
///
/// Capacities only size the initial allocations; both buffers grow on demand.
/// The `max_*` ceilings bound that growth so that hostile input cannot make
/// the scanner allocate without limit. Reaching a ceiling is reported as
/// [`ErrorKind::OutOfMemory`](crate::ErrorKind::OutOfMemory), the same as a
/// failed allocation.
///
/// # Examples
///
/// ```rust
/// use jsonscan::{Scanner, ScannerOptions};
///
/// let options = ScannerOptions {
///     max_depth: Some(64),
///     max_lexeme_len: Some(1 << 20),
///     ..Default::default()
/// };
/// let scanner = Scanner::with_options(options).unwrap();
/// assert_eq!(scanner.options().max_depth, Some(64));
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannerOptions {
    /// Initial capacity of the lexeme buffer.
    ///
    /// # Default
    ///
    /// `8196`
    pub lexeme_capacity: usize,

    /// Initial capacity of the nesting stack.
    ///
    /// # Default
    ///
    /// `256`
    pub stack_capacity: usize,

    /// Longest decoded string, key or number the scanner will hold.
    ///
    /// # Default
    ///
    /// `None` (bounded only by memory)
    pub max_lexeme_len: Option<usize>,

    /// Deepest nesting of arrays and objects the scanner will track.
    ///
    /// # Default
    ///
    /// `None` (bounded only by memory)
    pub max_depth: Option<usize>,
}

impl Default for ScannerOptions {
    fn default() -> Self {
        Self {
            lexeme_capacity: DEFAULT_LEXEME_CAPACITY,
            stack_capacity: DEFAULT_STACK_CAPACITY,
            max_lexeme_len: None,
            max_depth: None,
        }
    }
}
