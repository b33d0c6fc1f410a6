//! Fixed-length homogeneous vector with element-wise algebra.
//!
//! A [`Versor<T, N>`] is a transparent wrapper around `[T; N]`: its
//! footprint is exactly `N * size_of::<T>()` and it is `Copy` whenever `T`
//! is. All arithmetic is built on the [`apply`](Versor::apply) family,
//! which combines operands of *different* lengths by truncating to the
//! shortest one:
//!
//! ```
//! use fixpack_core::Versor;
//!
//! let mut v = Versor::new([1.0, 2.0, 3.0]);
//! v += Versor::new([10.0, 20.0]);
//! assert_eq!(v, Versor::new([11.0, 22.0, 3.0]));
//! ```

#[cfg(feature = "bytemuck")]
mod bytes;
mod display;
mod linalg;
mod ops;

pub use linalg::{cross, inner};

use core::cmp::Ordering;
use core::ops::{Index, IndexMut};

use crate::ElementEq;
use crate::error::Result;
use crate::protocol::{Arity, Bounded, ElementOf, Fits, check_index};

/// A fixed-length vector of `N` elements of type `T`.
///
/// # Type Parameters
///
/// - `T`: The element type. Arithmetic requires the matching `core::ops`
///   traits; equality requires [`ElementEq`].
/// - `N`: The number of elements.
///
/// Dividing by a scalar (`v / s`, `v /= s`) is only available for
/// [`Float`](crate::Float) elements and multiplies by `s.recip()`; integer
/// versors have no scalar division.
///
/// ```
/// use fixpack_core::Versor;
///
/// assert_eq!(Versor::new([1.0, 3.0]) / 2.0, Versor::new([0.5, 1.5]));
/// ```
///
/// ```compile_fail
/// use fixpack_core::Versor;
///
/// let _ = Versor::new([2_i32, 4]) / 2;
/// ```
#[derive(Debug, Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Versor<T, const N: usize>([T; N]);

impl<T, const N: usize> Versor<T, N> {
    /// Number of elements, as an associated constant.
    pub const SIZE: usize = N;

    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Create a versor from exactly `N` values.
    #[inline]
    pub const fn new(values: [T; N]) -> Self {
        Self(values)
    }

    /// Create a versor from up to `N` leading values; the remaining
    /// positions hold `T::default()`.
    ///
    /// ```
    /// use fixpack_core::Versor;
    ///
    /// let v = Versor::<i32, 4>::from_prefix([7, 8]);
    /// assert_eq!(v.into_array(), [7, 8, 0, 0]);
    /// ```
    ///
    /// Supplying more than `N` values is rejected at build time:
    ///
    /// ```compile_fail
    /// use fixpack_core::Versor;
    ///
    /// let v = Versor::<i32, 2>::from_prefix([1, 2, 3]);
    /// ```
    pub fn from_prefix<const M: usize>(values: [T; M]) -> Self
    where
        T: Default,
    {
        let () = Fits::<M, N>::OK;
        let mut values = values.into_iter();
        Self(core::array::from_fn(|_| values.next().unwrap_or_default()))
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// The number of elements.
    #[inline]
    pub const fn size(&self) -> usize {
        N
    }

    /// Alias for [`size`](Self::size).
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Whether the versor has zero elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// The elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// The elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// The elements as an array reference.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Mutable access to the backing array.
    ///
    /// Destructuring the result binds each element by reference:
    ///
    /// ```
    /// use fixpack_core::Versor;
    ///
    /// let mut v = Versor::<u8, 3>::new([0, 1, 2]);
    /// let [a, b, c] = v.as_mut_array();
    /// *a = 9;
    /// *b = 8;
    /// *c = 7;
    /// assert_eq!(v, Versor::new([9, 8, 7]));
    /// ```
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Consume the versor and return its elements.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Mutable reference to element `I`.
    #[inline]
    pub fn get_mut<const I: usize>(&mut self) -> &mut T {
        let () = Bounded::<I, N>::OK;
        &mut self.0[I]
    }

    /// Mutable reference to element `i`, or an error when `i < 0` or
    /// `i >= N`.
    pub fn at_mut(&mut self, i: isize) -> Result<&mut T> {
        let i = check_index(i, N)?;
        Ok(&mut self.0[i])
    }

    // ------------------------------------------------------------------
    // Iterators
    // ------------------------------------------------------------------

    /// Iterate over the elements in index order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Iterate mutably over the elements in index order.
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.0.iter_mut()
    }
}

impl<T: Copy, const N: usize> Versor<T, N> {
    /// Element `I`, with the index checked at build time.
    ///
    /// ```
    /// use fixpack_core::Versor;
    ///
    /// let v = Versor::new([1, 2, 3]);
    /// assert_eq!(v.get::<2>(), 3);
    /// ```
    ///
    /// ```compile_fail
    /// use fixpack_core::Versor;
    ///
    /// let v = Versor::new([1, 2, 3]);
    /// let _ = v.get::<3>();
    /// ```
    #[inline]
    pub fn get<const I: usize>(&self) -> T {
        let () = Bounded::<I, N>::OK;
        self.0[I]
    }

    /// Element `i`, or [`CoreError::IndexOutOfRange`](crate::CoreError)
    /// when `i < 0` or `i >= N`.
    ///
    /// ```
    /// use fixpack_core::Versor;
    ///
    /// let v = Versor::new([false, true]);
    /// assert_eq!(v.at(1), Ok(true));
    /// assert!(v.at(-1).is_err());
    /// assert!(v.at(2).is_err());
    /// ```
    pub fn at(&self, i: isize) -> Result<T> {
        let i = check_index(i, N)?;
        Ok(self.0[i])
    }

    /// The first element, if any.
    #[inline]
    pub fn front(&self) -> Option<T> {
        self.0.first().copied()
    }

    /// The last element, if any.
    #[inline]
    pub fn back(&self) -> Option<T> {
        self.0.last().copied()
    }

    // ------------------------------------------------------------------
    // Element-wise combination
    // ------------------------------------------------------------------

    /// Replace every element with `f(element)`.
    ///
    /// Elements are visited from the highest index down to `0`.
    ///
    /// ```
    /// use fixpack_core::Versor;
    ///
    /// let mut v = Versor::new([1.0, 2.0, 4.0]);
    /// let w = v[2];
    /// v.apply(|x| x / w);
    /// assert_eq!(v, Versor::new([0.25, 0.5, 1.0]));
    /// ```
    pub fn apply<F>(&mut self, mut f: F) -> &mut Self
    where
        F: FnMut(T) -> T,
    {
        for x in self.0.iter_mut().rev() {
            *x = f(*x);
        }
        self
    }

    /// Replace `self[i]` with `f(self[i], rhs[i])` for every `i` below
    /// `min(N, M)`; elements at or beyond `M` are left untouched.
    ///
    /// Positions are visited from `min(N, M) - 1` down to `0`.
    pub fn apply_with<F, const M: usize>(&mut self, mut f: F, rhs: &Versor<T, M>) -> &mut Self
    where
        F: FnMut(T, T) -> T,
    {
        for i in (0..N.min(M)).rev() {
            self.0[i] = f(self.0[i], rhs.0[i]);
        }
        self
    }

    /// Replace `self[i]` with `f(self[i], a[i], b[i])` for every `i` below
    /// `min(N, M, K)`; longer tails are left untouched.
    ///
    /// Positions are visited from the highest combined index down to `0`.
    ///
    /// ```
    /// use fixpack_core::Versor;
    ///
    /// let mut acc = Versor::new([1, 1, 1, 1]);
    /// acc.apply_with2(|x, a, b| x + a * b, &Versor::new([2, 3, 4]), &Versor::new([5, 6]));
    /// assert_eq!(acc.into_array(), [11, 19, 1, 1]);
    /// ```
    pub fn apply_with2<F, const M: usize, const K: usize>(
        &mut self,
        mut f: F,
        a: &Versor<T, M>,
        b: &Versor<T, K>,
    ) -> &mut Self
    where
        F: FnMut(T, T, T) -> T,
    {
        for i in (0..N.min(M).min(K)).rev() {
            self.0[i] = f(self.0[i], a.0[i], b.0[i]);
        }
        self
    }
}

// ======================================================================
// Defaults and conversions
// ======================================================================

impl<T: Default, const N: usize> Default for Versor<T, N> {
    fn default() -> Self {
        Self(core::array::from_fn(|_| T::default()))
    }
}

impl<T, const N: usize> From<[T; N]> for Versor<T, N> {
    fn from(values: [T; N]) -> Self {
        Self(values)
    }
}

impl<T, const N: usize> From<Versor<T, N>> for [T; N] {
    fn from(v: Versor<T, N>) -> Self {
        v.0
    }
}

// ======================================================================
// Indexing
// ======================================================================

impl<T, const N: usize> Index<usize> for Versor<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.0[i]
    }
}

impl<T, const N: usize> IndexMut<usize> for Versor<T, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.0[i]
    }
}

impl<T, const N: usize> IntoIterator for Versor<T, N> {
    type Item = T;
    type IntoIter = core::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Versor<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut Versor<T, N> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter_mut()
    }
}

// ======================================================================
// Reflection
// ======================================================================

impl<T, const N: usize> Arity for Versor<T, N> {
    const ARITY: usize = N;
}

impl<T, const N: usize, const I: usize> ElementOf<I> for Versor<T, N> {
    type Type = T;
}

// ======================================================================
// Comparison
// ======================================================================

/// Element-wise [`ElementEq`]: ULP-tolerant for floats, exact otherwise.
impl<T: ElementEq, const N: usize> PartialEq for Versor<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| a.element_eq(b))
    }
}

impl<T: ElementEq + Eq, const N: usize> Eq for Versor<T, N> {}

/// Exact lexicographic order over indices `0..N`.
///
/// This ordering does not use the ULP tolerance of `==`: two float versors
/// may compare equal with `==` while `partial_cmp` reports `Less` or
/// `Greater`.
impl<T: ElementEq + PartialOrd, const N: usize> PartialOrd for Versor<T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl<T: ElementEq + Ord, const N: usize> Ord for Versor<T, N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}
