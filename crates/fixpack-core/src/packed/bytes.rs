//! Zero-copy byte views of [`PackedTuple`] (feature `bytemuck`).
//!
//! A packed tuple has alignment 1, so any byte slice of the right length
//! can be viewed in place.

use bytemuck::{Pod, Zeroable};

use crate::bytes::cast_error;
use crate::error::{CoreError, Result};

use super::PackedTuple;
use super::list::Cons;
use super::tuple::Tuple;

// SAFETY: `Cons` is `repr(C, packed)`; with both fields zeroable the
// all-zero pattern is valid.
unsafe impl<H: Zeroable, T: Zeroable> Zeroable for Cons<H, T> {}
// SAFETY: `repr(C, packed)` leaves no padding bytes, and every bit
// pattern of the two `Pod` fields is valid.
unsafe impl<H: Pod, T: Pod> Pod for Cons<H, T> {}

// SAFETY: `PackedTuple<L>` is `repr(transparent)` over `L::Packed`.
unsafe impl<L: Tuple> Zeroable for PackedTuple<L> where L::Packed: Zeroable {}
// SAFETY: as above.
unsafe impl<L: Tuple + 'static> Pod for PackedTuple<L> where L::Packed: Pod {}

impl<L: Tuple + 'static> PackedTuple<L>
where
    L::Packed: Pod,
{
    /// The packed bytes, in declaration order.
    ///
    /// ```
    /// use fixpack_core::PackedTuple;
    ///
    /// let t = PackedTuple::new((0xAA_u8, 0x0102_u16));
    /// let b = 0x0102_u16.to_ne_bytes();
    /// assert_eq!(t.as_bytes(), &[0xAA, b[0], b[1]]);
    /// ```
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// View `bytes` as a packed tuple without copying.
    pub fn from_bytes(bytes: &[u8]) -> Result<&Self> {
        bytemuck::try_from_bytes(bytes).map_err(|e| cast_error::<Self>(e, bytes.len()))
    }

    /// Mutable form of [`from_bytes`](Self::from_bytes).
    pub fn from_bytes_mut(bytes: &mut [u8]) -> Result<&mut Self> {
        let len = bytes.len();
        bytemuck::try_from_bytes_mut(bytes).map_err(|e| cast_error::<Self>(e, len))
    }

    /// Copy a packed tuple out of `bytes`.
    pub fn read_from(bytes: &[u8]) -> Result<Self> {
        bytemuck::try_pod_read_unaligned(bytes).map_err(|e| cast_error::<Self>(e, bytes.len()))
    }

    /// The bytes of element `i`, or an error when `i` is out of range.
    ///
    /// ```
    /// use fixpack_core::PackedTuple;
    ///
    /// let t = PackedTuple::new((1_u8, 7_u32, 2_u8));
    /// assert_eq!(t.field_bytes(1).unwrap(), &7_u32.to_ne_bytes());
    /// assert!(t.field_bytes(3).is_err());
    /// ```
    pub fn field_bytes(&self, i: isize) -> Result<&[u8]> {
        let span = self.span_at(i)?;
        self.as_bytes().get(span).ok_or(CoreError::IndexOutOfRange {
            index: i,
            size: Self::SIZE,
        })
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    type Header = PackedTuple<(u8, u32, u16)>;

    #[test]
    fn test_bytes_length_is_footprint() {
        let h = Header::new((1, 2, 3));
        assert_eq!(h.as_bytes().len(), 7);
    }

    #[test]
    fn test_view_at_any_offset() {
        let h = Header::new((9, 0xDEAD_BEEF, 0x1234));
        let mut buf = [0u8; 8];
        buf[1..].copy_from_slice(h.as_bytes());
        let view = Header::from_bytes(&buf[1..]).unwrap();
        assert_eq!(view.into_tuple(), (9, 0xDEAD_BEEF, 0x1234));
        assert_eq!(Header::read_from(&buf[1..]), Ok(h));
    }

    #[test]
    fn test_mutable_view_writes_through() {
        let mut buf = [0u8; 7];
        Header::from_bytes_mut(&mut buf).unwrap().set::<2>(0xFFFF);
        assert_eq!(&buf[5..], &[0xFF_u8, 0xFF]);
        assert_eq!(&buf[..5], &[0_u8; 5]);
    }

    #[test]
    fn test_wrong_length() {
        let buf = [0u8; 6];
        assert_eq!(
            Header::from_bytes(&buf),
            Err(CoreError::SizeMismatch {
                expected: 7,
                got: 6
            })
        );
        assert!(Header::read_from(&[0u8; 8]).is_err());
    }

    #[test]
    fn test_field_bytes_follow_spans() {
        let t = PackedTuple::new((0.5_f64, 3_u8, -1_i32));
        assert_eq!(t.field_bytes(0).unwrap(), &0.5_f64.to_ne_bytes());
        assert_eq!(t.field_bytes(1).unwrap(), &[3_u8]);
        assert_eq!(t.field_bytes(2).unwrap(), &(-1_i32).to_ne_bytes());
        assert_eq!(
            t.field_bytes(-2),
            Err(CoreError::IndexOutOfRange { index: -2, size: 3 })
        );
    }

    #[test]
    fn test_zeroed_is_default() {
        let z: PackedTuple<(f32, u64)> = bytemuck::Zeroable::zeroed();
        assert_eq!(z, PackedTuple::default());
        assert_eq!(z.get::<0>(), 0.0);
    }
}
