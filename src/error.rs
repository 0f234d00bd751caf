//! Error types for list operations.

use core::fmt;

/// Index argument fell outside the operation's valid range.
///
/// `get`, `get_mut`, and `remove` accept `[0, len - 1]`; `insert` accepts
/// `[0, len]`. On an empty list every `get`/`remove` index is invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRange {
    /// The index that was requested.
    pub index: usize,
    /// List length at the time of the call.
    pub len: usize,
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "index {} out of range (len {})", self.index, self.len)
    }
}

impl std::error::Error for OutOfRange {}
