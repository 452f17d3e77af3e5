use std::fmt::{Debug, Display};

/// Failure to obtain a buffer of the requested capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocError {
    /// The byte size of the requested capacity does not fit in `isize`.
    CapacityOverflow,
    /// The global allocator returned null for this request.
    Allocator { size: usize, align: usize },
}

impl Display for AllocError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AllocError::CapacityOverflow => Display::fmt("Requested capacity overflows the address space", f),
            AllocError::Allocator { size, align } => write!(f, "Allocator failed to provide {} bytes aligned to {}", size, align),
        }
    }
}

impl std::error::Error for AllocError {}

/// Outcome of a failed `List` operation. The list is left unchanged whenever one is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    Allocation(AllocError),
    IndexOutOfRange { index: usize, len: usize },
    NotFound { nth: usize },
    Empty,
}

impl Display for ListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListError::Allocation(e) => write!(f, "List growth failed - {}", e),
            ListError::IndexOutOfRange { index, len } => write!(f, "Index {} is out of range for list of length {}", index, len),
            ListError::NotFound { nth } => write!(f, "List holds no occurrence of the item at zero-based rank {}", nth),
            ListError::Empty => Display::fmt("List is empty", f),
        }
    }
}

impl std::error::Error for ListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ListError::Allocation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<AllocError> for ListError {
    fn from(e: AllocError) -> Self {
        ListError::Allocation(e)
    }
}
