//! Raw memory copies between values of one Pod type.

use bytemuck::{Pod, bytes_of, bytes_of_mut, cast_slice, cast_slice_mut};

use crate::CopyError;

/// Overwrite `destination` with the bytes of `source`.
///
/// Afterwards every field of `destination` reads back equal to the
/// corresponding field of `source`. Both sides are the same `T`, so layouts
/// always agree.
#[inline]
pub fn copy_bytes<T: Pod>(source: &T, destination: &mut T) {
    let src = bytes_of(source);
    #[cfg(feature = "tracing")]
    tracing::trace!(size = src.len(), "copy_bytes");
    bytes_of_mut(destination).copy_from_slice(src);
}

/// A fresh value holding the bytes of `source`.
pub fn transcribe<T: Pod>(source: &T) -> T {
    let mut out = T::zeroed();
    copy_bytes(source, &mut out);
    out
}

/// Copy a raw byte span into `destination`.
///
/// Returns [`CopyError::SizeMismatch`] unless `bytes.len() == size_of::<T>()`.
/// `bytes` need not be aligned for `T`.
pub fn try_copy_from_bytes<T: Pod>(bytes: &[u8], destination: &mut T) -> Result<(), CopyError> {
    let expected = core::mem::size_of::<T>();
    if bytes.len() != expected {
        return Err(CopyError::SizeMismatch {
            expected,
            found: bytes.len(),
        });
    }
    bytes_of_mut(destination).copy_from_slice(bytes);
    Ok(())
}

/// Copy a raw byte span into `destination`.
///
/// # Panics
///
/// If `bytes.len()` differs from `size_of::<T>()`. A wrong length is a caller
/// bug, never truncated or padded.
pub fn copy_from_bytes<T: Pod>(bytes: &[u8], destination: &mut T) {
    if let Err(e) = try_copy_from_bytes(bytes, destination) {
        panic!("copy_from_bytes: {}", e);
    }
}

/// Element-wise byte copy between slices of equal length.
pub fn try_copy_slice<T: Pod>(source: &[T], destination: &mut [T]) -> Result<(), CopyError> {
    if source.len() != destination.len() {
        return Err(CopyError::LengthMismatch {
            source_len: source.len(),
            destination_len: destination.len(),
        });
    }
    let src: &[u8] = cast_slice(source);
    #[cfg(feature = "tracing")]
    tracing::trace!(size = src.len(), elements = source.len(), "copy_slice");
    cast_slice_mut::<T, u8>(destination).copy_from_slice(src);
    Ok(())
}

/// # Panics
///
/// If the slices differ in length.
pub fn copy_slice<T: Pod>(source: &[T], destination: &mut [T]) {
    if let Err(e) = try_copy_slice(source, destination) {
        panic!("copy_slice: {}", e);
    }
}
