#[cfg(feature = "std")]
use thiserror::Error;

/// Byte copy errors
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyError {
    /// Source span length differs from the destination's size
    #[cfg_attr(
        feature = "std",
        error("size mismatch: expected {expected} bytes, found {found}")
    )]
    SizeMismatch { expected: usize, found: usize },

    /// Slices hold different element counts
    #[cfg_attr(
        feature = "std",
        error("length mismatch: source has {source_len} elements, destination {destination_len}")
    )]
    LengthMismatch {
        source_len: usize,
        destination_len: usize,
    },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for CopyError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CopyError::SizeMismatch { expected, found } => {
                write!(f, "size mismatch: expected {} bytes, found {}", expected, found)
            }
            CopyError::LengthMismatch {
                source_len,
                destination_len,
            } => write!(
                f,
                "length mismatch: source has {} elements, destination {}",
                source_len, destination_len
            ),
        }
    }
}
