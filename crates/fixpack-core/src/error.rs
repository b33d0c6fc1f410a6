use core::fmt;

/// All errors returned by `fixpack-core`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreError {
    /// A runtime index was negative or not below the element count.
    IndexOutOfRange { index: isize, size: usize },

    /// A byte region does not have the footprint of the target layout.
    SizeMismatch { expected: usize, got: usize },

    /// A byte region is not aligned for the target element type.
    Misaligned { align: usize },
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, size } => {
                write!(f, "index {index} out of range for size {size}")
            }
            Self::SizeMismatch { expected, got } => {
                write!(f, "size mismatch: expected {expected} bytes, got {got}")
            }
            Self::Misaligned { align } => {
                write!(f, "byte region is not aligned to {align}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoreError {}

/// Convenience alias used throughout `fixpack-core`.
pub type Result<T> = core::result::Result<T, CoreError>;
