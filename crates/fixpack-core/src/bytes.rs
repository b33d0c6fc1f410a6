//! Shared helpers for the `bytemuck` byte views.

use bytemuck::PodCastError;

use crate::error::CoreError;

/// Map a `bytemuck` cast failure onto the layout of `T`.
pub(crate) fn cast_error<T>(e: PodCastError, got: usize) -> CoreError {
    match e {
        PodCastError::TargetAlignmentGreaterAndInputNotAligned
        | PodCastError::AlignmentMismatch => CoreError::Misaligned {
            align: align_of::<T>(),
        },
        PodCastError::OutputSliceWouldHaveSlop | PodCastError::SizeMismatch => {
            CoreError::SizeMismatch {
                expected: size_of::<T>(),
                got,
            }
        }
    }
}
