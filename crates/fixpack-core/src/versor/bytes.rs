//! Zero-copy byte views of [`Versor`] (feature `bytemuck`).

use bytemuck::{Pod, Zeroable};

use crate::bytes::cast_error;
use crate::error::Result;

use super::Versor;

// SAFETY: `Versor<T, N>` is `repr(transparent)` over `[T; N]`, which is
// `Zeroable`/`Pod` whenever `T` is.
unsafe impl<T: Zeroable, const N: usize> Zeroable for Versor<T, N> {}
// SAFETY: as above; `[T; N]` has no padding when `T: Pod`.
unsafe impl<T: Pod, const N: usize> Pod for Versor<T, N> {}

impl<T: Pod, const N: usize> Versor<T, N> {
    /// The `N * size_of::<T>()` bytes of this versor.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Reinterpret `bytes` as a versor without copying.
    ///
    /// `bytes` must be exactly `N * size_of::<T>()` long and aligned for `T`.
    pub fn from_bytes(bytes: &[u8]) -> Result<&Self> {
        bytemuck::try_from_bytes(bytes).map_err(|e| cast_error::<Self>(e, bytes.len()))
    }

    /// Mutable form of [`from_bytes`](Self::from_bytes).
    pub fn from_bytes_mut(bytes: &mut [u8]) -> Result<&mut Self> {
        let len = bytes.len();
        bytemuck::try_from_bytes_mut(bytes).map_err(|e| cast_error::<Self>(e, len))
    }

    /// Copy a versor out of `bytes`, which need not be aligned.
    ///
    /// ```
    /// use fixpack_core::Versor;
    ///
    /// let raw = [0u8, 1, 0, 2, 0, 3];
    /// let v = Versor::<u16, 3>::read_from(&raw).unwrap();
    /// assert_eq!(v.into_array(), [
    ///     u16::from_ne_bytes([0, 1]),
    ///     u16::from_ne_bytes([0, 2]),
    ///     u16::from_ne_bytes([0, 3]),
    /// ]);
    /// ```
    pub fn read_from(bytes: &[u8]) -> Result<Self> {
        bytemuck::try_pod_read_unaligned(bytes).map_err(|e| cast_error::<Self>(e, bytes.len()))
    }
}
