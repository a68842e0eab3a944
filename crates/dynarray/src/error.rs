//! Container error types.

use std::error::Error;
use std::fmt;

/// Errors returned by fallible [`DynamicArray`](crate::DynamicArray) operations.
///
/// A failed operation leaves the container exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// `pop` was called on a container with no elements.
    EmptyContainer,
    /// `remove` was called with an index outside `0..len`.
    IndexOutOfRange {
        /// The index that was requested.
        index: usize,
        /// Number of live elements at the time of the call.
        len: usize,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyContainer => write!(f, "cannot pop from an empty array"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} is out of range for length {len}")
            }
        }
    }
}

impl Error for ArrayError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_index_and_len() {
        let err = ArrayError::IndexOutOfRange { index: 7, len: 3 };
        assert_eq!(err.to_string(), "index 7 is out of range for length 3");
    }

    #[test]
    fn empty_container_message() {
        assert_eq!(
            ArrayError::EmptyContainer.to_string(),
            "cannot pop from an empty array"
        );
    }
}
