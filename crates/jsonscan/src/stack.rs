use crate::{buffer::GrowBuf, error::ErrorKind};

/// The kind of an open compound value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Container {
    /// Opened by `[`.
    Array,
    /// Opened by `{`.
    Object,
}

impl Container {
    /// The byte that opens this container.
    #[must_use]
    pub const fn opener(self) -> u8 {
        match self {
            Container::Array => b'[',
            Container::Object => b'{',
        }
    }

    /// The byte that closes this container.
    #[must_use]
    pub const fn closer(self) -> u8 {
        match self {
            Container::Array => b']',
            Container::Object => b'}',
        }
    }

    fn from_opener(byte: u8) -> Option<Self> {
        match byte {
            b'[' => Some(Container::Array),
            b'{' => Some(Container::Object),
            _ => None,
        }
    }
}

/// LIFO record of open containers, stored as their opener bytes.
///
/// Depth is the length of the underlying buffer; nothing else is tracked.
#[derive(Debug, Clone)]
pub(crate) struct NestingStack {
    markers: GrowBuf,
}

impl NestingStack {
    pub(crate) fn with_capacity(capacity: usize, max_depth: Option<usize>) -> Result<Self, ErrorKind> {
        Ok(Self {
            markers: GrowBuf::with_capacity(capacity, max_depth)?,
        })
    }

    pub(crate) fn open(&mut self, container: Container) -> Result<(), ErrorKind> {
        self.markers.push(container.opener())
    }

    /// Pops the innermost container if it is `container`.
    ///
    /// Closing with an empty stack or with the wrong closer is a
    /// `DelimiterMismatch`; the stack is left untouched in both cases.
    pub(crate) fn close(&mut self, container: Container) -> Result<(), ErrorKind> {
        match self.top() {
            Some(top) if top == container => {
                self.markers.pop();
                Ok(())
            }
            top => {
                log::debug!(
                    "'{}' does not close {:?}",
                    char::from(container.closer()),
                    top.map(|open| char::from(open.opener()))
                );
                Err(ErrorKind::DelimiterMismatch)
            }
        }
    }

    #[inline]
    pub(crate) fn top(&self) -> Option<Container> {
        self.markers.peek().and_then(Container::from_opener)
    }

    #[inline]
    pub(crate) fn depth(&self) -> usize {
        self.markers.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.markers.capacity()
    }

    pub(crate) fn clear(&mut self) {
        self.markers.clear();
    }
}
