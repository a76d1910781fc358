//! Error types returned by `RingBuffer`.

#[cfg(feature = "std")]
use std::error::Error;
use std::fmt;

/// Error value indicating that a `RingBuffer` could not be created.
///
/// Returned by `RingBuffer::new`, `RingBuffer::new_in` and
/// `RingBuffer::try_clone`.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub enum CreateError {
    /// A capacity of zero was requested.
    ZeroCapacity,
    /// The capacity is at or above `usize::MAX / 2`, or the storage region
    /// would not fit in the address space.
    CapacityTooLarge {
        /// The requested capacity.
        capacity: usize,
    },
    /// The element type has a size of zero.
    ZeroSizedElement,
    /// The allocator could not provide the storage region.
    AllocationFailed {
        /// The requested capacity.
        capacity: usize,
    },
}

#[cfg(feature = "std")]
impl Error for CreateError {}

impl fmt::Display for CreateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            CreateError::ZeroCapacity => write!(f, "invalid capacity 0 requested"),
            CreateError::CapacityTooLarge { capacity } => {
                write!(f, "capacity {} exceeds limit usize::MAX / 2", capacity)
            }
            CreateError::ZeroSizedElement => write!(f, "cannot allocate a zero-sized element type"),
            CreateError::AllocationFailed { capacity } => {
                write!(f, "failed to allocate storage for {} elements", capacity)
            }
        }
    }
}

impl fmt::Debug for CreateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "CreateError: {}", self)
    }
}

/// Error value indicating that a logical index is not occupied.
///
/// Produced by every checked access: `at`, `front`, `back` and cursor
/// dereference.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct IndexError {
    /// The index that was requested.
    pub index: usize,
    /// The number of elements in the buffer at the time of the access.
    pub len: usize,
}

#[cfg(feature = "std")]
impl Error for IndexError {}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "index out of bounds: the len is {} but the index is {}",
               self.len,
               self.index)
    }
}

impl fmt::Debug for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "IndexError: {}", self)
    }
}
