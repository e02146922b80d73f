use pod_copy::CopyError;
use thiserror::Error;

/// Header projection and boundary errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeaderError {
    #[error("header length mismatch: expected {expected} bytes, received {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("payload of {0} bytes does not fit the 32-bit length field")]
    PayloadTooLarge(usize),
}

impl From<CopyError> for HeaderError {
    fn from(err: CopyError) -> Self {
        match err {
            CopyError::SizeMismatch { expected, found } => {
                HeaderError::LengthMismatch { expected, found }
            }
            CopyError::LengthMismatch {
                source_len,
                destination_len,
            } => HeaderError::LengthMismatch {
                expected: destination_len,
                found: source_len,
            },
        }
    }
}
