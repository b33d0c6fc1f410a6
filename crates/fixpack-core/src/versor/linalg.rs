//! Vector products on [`Versor`].

use crate::Scalar;

use super::Versor;

/// Inner (dot) product: `sum(a_i * b_i)`.
///
/// Accumulation starts from `T::zero()` and adds terms from index `0`
/// upward, each new term on the left: `a[N-1]*b[N-1] + (… + (a[0]*b[0] + 0))`.
///
/// ```
/// use fixpack_core::{Versor, inner};
///
/// let a = Versor::new([1.0, 2.0, 3.0]);
/// let b = Versor::new([4.0, 5.0, 6.0]);
/// assert_eq!(inner(&a, &b), 32.0);
/// ```
pub fn inner<T: Scalar, const N: usize>(a: &Versor<T, N>, b: &Versor<T, N>) -> T {
    a.iter()
        .zip(b.iter())
        .fold(T::zero(), |acc, (&x, &y)| x * y + acc)
}

/// Cross product of two 3-vectors.
///
/// ```
/// use fixpack_core::{Versor, cross};
///
/// let x = Versor::new([1, 0, 0]);
/// let y = Versor::new([0, 1, 0]);
/// assert_eq!(cross(&x, &y), Versor::new([0, 0, 1]));
/// ```
pub fn cross<T: Scalar>(a: &Versor<T, 3>, b: &Versor<T, 3>) -> Versor<T, 3> {
    let [a0, a1, a2] = *a.as_array();
    let [b0, b1, b2] = *b.as_array();
    Versor::new([a1 * b2 - a2 * b1, a2 * b0 - a0 * b2, a0 * b1 - a1 * b0])
}

impl<T: Scalar, const N: usize> Versor<T, N> {
    /// Method form of [`inner`].
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        inner(self, other)
    }
}

impl<T: Scalar> Versor<T, 3> {
    /// Method form of [`cross`].
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        cross(self, other)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_inner_integers() {
        let a = Versor::new([1, 2, 3, 4]);
        assert_eq!(inner(&a, &a), 30);
        assert_eq!(a.dot(&Versor::new([0, 0, 0, 1])), 4);
    }

    #[test]
    fn test_inner_zero_length_is_identity() {
        let e = Versor::<f64, 0>::default();
        assert_eq!(inner(&e, &e), 0.0);
    }

    #[test]
    fn test_inner_accumulation_order() {
        let a = Versor::new([1.0_f64, 1e17, -1e17]);
        let ones = Versor::new([1.0, 1.0, 1.0]);
        // 1e17 + 1 rounds back to 1e17, so the leading term is absorbed
        assert_eq!(inner(&a, &ones), 0.0);
    }

    #[test]
    fn test_cross_right_handed() {
        let x = Versor::new([1.0, 0.0, 0.0]);
        let y = Versor::new([0.0, 1.0, 0.0]);
        let z = Versor::new([0.0, 0.0, 1.0]);
        assert_eq!(cross(&x, &y), z);
        assert_eq!(y.cross(&z), x);
        assert_eq!(cross(&y, &x), -z);
    }

    #[test]
    fn test_cross_is_orthogonal() {
        let a = Versor::new([2, -3, 5]);
        let b = Versor::new([7, 1, -4]);
        let c = cross(&a, &b);
        assert_eq!(inner(&a, &c), 0);
        assert_eq!(inner(&b, &c), 0);
    }
}
