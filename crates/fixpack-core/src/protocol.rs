//! The indexed-element protocol shared by [`Versor`](crate::Versor) and
//! [`PackedTuple`](crate::PackedTuple).
//!
//! Both containers answer the same questions:
//!
//! | Question | Instance | Type level |
//! |---|---|---|
//! | how many elements? | `size()` | [`Arity::ARITY`] |
//! | element `I`, checked at build time | `get::<I>()` | [`ElementOf<I>::Type`](ElementOf) |
//! | element `i`, checked at run time | `at(i)` / `span_at(i)` | — |
//!
//! The type-level half lets generic code reason about a container without
//! constructing one:
//!
//! ```
//! use fixpack_core::{Arity, ElementOf, PackedTuple, Versor};
//!
//! fn arity_of<C: Arity>() -> usize {
//!     C::ARITY
//! }
//!
//! assert_eq!(arity_of::<Versor<f32, 4>>(), 4);
//! assert_eq!(arity_of::<PackedTuple<(u8, u16, u32)>>(), 3);
//!
//! let second: <PackedTuple<(u8, u16, u32)> as ElementOf<1>>::Type = 7_u16;
//! assert_eq!(second, 7);
//! ```

use crate::error::{CoreError, Result};

/// Fixed element count of a container type.
pub trait Arity {
    /// Number of elements, known at compile time.
    const ARITY: usize;
}

/// Type of the element at position `I`.
///
/// For [`PackedTuple`](crate::PackedTuple) this is only implemented for
/// `I` below the arity. A [`Versor`](crate::Versor) reports its element
/// type for every `I`; its accessors reject out-of-range positions.
pub trait ElementOf<const I: usize> {
    type Type;
}

/// Validate a signed runtime index against `size`.
///
/// Negative indices are rejected rather than wrapped.
#[inline]
pub fn check_index(index: isize, size: usize) -> Result<usize> {
    match usize::try_from(index) {
        Ok(i) if i < size => Ok(i),
        _ => Err(CoreError::IndexOutOfRange { index, size }),
    }
}

/// Build-time assertion that `I < N`.
///
/// Referencing [`Bounded::OK`] from a monomorphised function turns an
/// out-of-range constant index into a compile error.
pub(crate) struct Bounded<const I: usize, const N: usize>;

impl<const I: usize, const N: usize> Bounded<I, N> {
    pub(crate) const OK: () = assert!(I < N, "element index out of range");
}

/// Build-time assertion that `M <= N`.
pub(crate) struct Fits<const M: usize, const N: usize>;

impl<const M: usize, const N: usize> Fits<M, N> {
    pub(crate) const OK: () = assert!(M <= N, "too many initial values");
}
