//! Property tests for the container laws shared by `Versor` and
//! `PackedTuple`.

#![allow(clippy::float_cmp)]

use approx::assert_relative_eq;
use fixpack_core::prelude::*;
use fixpack_core::{almost_equal_ulps, check_index};
use proptest::prelude::*;

fn finite_f64() -> impl Strategy<Value = f64> {
    -1.0e6_f64..1.0e6
}

fn versor4() -> impl Strategy<Value = Versor<f64, 4>> {
    prop::array::uniform4(finite_f64()).prop_map(Versor::new)
}

fn small_i64() -> impl Strategy<Value = i64> {
    -100_000_i64..100_000
}

proptest! {
    // ------------------------------------------------------------------
    // Footprint and access
    // ------------------------------------------------------------------

    /// Every indexed accessor agrees with destructuring.
    #[test]
    fn prop_versor_accessors_agree(values in any::<[i32; 5]>()) {
        let v = Versor::new(values);
        let [a, b, c, d, e] = v.into_array();
        let by_index = [v.get::<0>(), v.get::<1>(), v.get::<2>(), v.get::<3>(), v.get::<4>()];
        prop_assert_eq!(by_index, [a, b, c, d, e]);
        for (i, x) in values.iter().enumerate() {
            prop_assert_eq!(v[i], *x);
            prop_assert_eq!(v.at(i as isize), Ok(*x));
        }
    }

    /// `at(i)` fails exactly when `i < 0` or `i >= size()`.
    #[test]
    fn prop_versor_at_bounds(values in any::<[u8; 6]>(), i in -20_isize..20) {
        let v = Versor::new(values);
        let out_of_range = i < 0 || i >= 6;
        prop_assert_eq!(v.at(i).is_err(), out_of_range);
        prop_assert_eq!(check_index(i, v.size()).is_err(), out_of_range);
        if out_of_range {
            prop_assert_eq!(v.at(i), Err(CoreError::IndexOutOfRange { index: i, size: 6 }));
        }
    }

    /// Packed accessors agree with unpacking, and spans tile the footprint.
    #[test]
    fn prop_packed_accessors_agree(
        a in any::<f64>(),
        b in any::<u8>(),
        c in any::<i32>(),
        d in any::<u16>(),
    ) {
        let t = PackedTuple::new((a, b, c, d));
        let (a2, b2, c2, d2) = t.into_tuple();
        prop_assert_eq!(t.get::<0>().to_bits(), a.to_bits());
        prop_assert_eq!(a2.to_bits(), a.to_bits());
        prop_assert_eq!((t.get::<1>(), t.get::<2>(), t.get::<3>()), (b, c, d));
        prop_assert_eq!((b2, c2, d2), (b, c, d));

        let mut end = 0;
        for i in 0..4 {
            let span = t.span_at(i).unwrap();
            prop_assert_eq!(span.start, end);
            end = span.end;
        }
        prop_assert_eq!(end, size_of::<PackedTuple<(f64, u8, i32, u16)>>());
        prop_assert!(t.span_at(4).is_err());
    }

    /// Writing one field never disturbs its neighbours.
    #[test]
    fn prop_packed_set_is_local(
        a in any::<u8>(),
        b in any::<u64>(),
        c in any::<i16>(),
        nb in any::<u64>(),
    ) {
        let mut t = PackedTuple::new((a, b, c));
        t.set::<1>(nb);
        prop_assert_eq!(t.into_tuple(), (a, nb, c));
    }

    /// Packed order and equality match those of the plain tuple.
    #[test]
    fn prop_packed_order_matches_tuple(
        x in any::<(u8, i32, char)>(),
        y in any::<(u8, i32, char)>(),
    ) {
        let px = PackedTuple::new(x);
        let py = PackedTuple::new(y);
        prop_assert_eq!(px.cmp(&py), x.cmp(&y));
        prop_assert_eq!(px == py, x == y);
    }

    #[test]
    fn prop_packed_bytes_round_trip(x in any::<(u16, i64, u8)>()) {
        let t = PackedTuple::new(x);
        prop_assert_eq!(t.as_bytes().len(), 2 + 8 + 1);
        prop_assert_eq!(PackedTuple::<(u16, i64, u8)>::read_from(t.as_bytes()), Ok(t));
        let view = PackedTuple::<(u16, i64, u8)>::from_bytes(t.as_bytes());
        prop_assert_eq!(view.map(|p| p.into_tuple()), Ok(x));
    }

    // ------------------------------------------------------------------
    // Algebraic laws
    // ------------------------------------------------------------------

    #[test]
    fn prop_scalar_mul_commutes(v in versor4(), s in finite_f64()) {
        prop_assert_eq!(v * s, s * v);
    }

    #[test]
    fn prop_scalar_identities(v in versor4()) {
        prop_assert_eq!(v * 1.0, v / 1.0);
        prop_assert_eq!(v * 2.0, v + v);
        prop_assert_eq!(v - v, Versor::default());
    }

    #[test]
    fn prop_integer_scalar_mul_commutes(
        values in prop::array::uniform3(small_i64()),
        s in small_i64(),
    ) {
        let v = Versor::new(values);
        prop_assert_eq!(v * s, s * v);
    }

    #[test]
    fn prop_bitwise_laws(a in any::<[u32; 4]>(), b in any::<[u32; 4]>()) {
        let a = Versor::new(a);
        let b = Versor::new(b);
        prop_assert_eq!(a ^ a, Versor::default());
        prop_assert_eq!(!!a, a);
        prop_assert_eq!((a | b) & b, b);
        prop_assert_eq!(!(a & b), !a | !b);
    }

    /// Mixed-length operands only touch the common prefix.
    #[test]
    fn prop_truncated_extent(a in any::<[i16; 5]>(), b in any::<[i16; 2]>()) {
        let long = Versor::new(a);
        let short = Versor::new(b);
        let mut acc = long;
        acc ^= short;
        prop_assert_eq!(acc.into_array(), [a[0] ^ b[0], a[1] ^ b[1], a[2], a[3], a[4]]);

        let mut acc = short;
        acc |= long;
        prop_assert_eq!(acc.into_array(), [b[0] | a[0], b[1] | a[1]]);
    }

    #[test]
    fn prop_inner_matches_sum(a in versor4(), b in versor4()) {
        let expected: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
        let scale: f64 = a.iter().zip(b.iter()).map(|(x, y)| (x * y).abs()).sum();
        assert_relative_eq!(inner(&a, &b), expected, epsilon = 1e-12 * scale.max(1.0));
    }

    #[test]
    fn prop_cross_is_orthogonal(
        a in prop::array::uniform3(-1000_i64..1000),
        b in prop::array::uniform3(-1000_i64..1000),
    ) {
        let a = Versor::new(a);
        let b = Versor::new(b);
        let c = cross(&a, &b);
        prop_assert_eq!(inner(&a, &c), 0);
        prop_assert_eq!(inner(&b, &c), 0);
        prop_assert_eq!(cross(&b, &a), -c);
    }

    // ------------------------------------------------------------------
    // Comparator and ordering
    // ------------------------------------------------------------------

    #[test]
    fn prop_comparator_reflexive_and_symmetric(x in any::<f32>(), y in any::<f32>()) {
        prop_assert_eq!(almost_equal(x, x), !x.is_nan());
        prop_assert_eq!(almost_equal(x, y), almost_equal(y, x));
    }

    /// Within the default tolerance of a positive finite value, steps
    /// 1 to 4 compare equal and step 5 does not.
    #[test]
    fn prop_comparator_tolerance(bits in 1_u32..0x7F00_0000) {
        let x = f32::from_bits(bits);
        for step in 1..=4 {
            prop_assert!(almost_equal(x, f32::from_bits(bits + step)));
        }
        prop_assert!(!almost_equal(x, f32::from_bits(bits + 5)));
        prop_assert!(almost_equal_ulps(x, f32::from_bits(bits + 5), 5));
    }

    /// Ordering is exact and lexicographic, like the backing array.
    #[test]
    fn prop_versor_order_matches_array(a in any::<[u8; 3]>(), b in any::<[u8; 3]>()) {
        prop_assert_eq!(Versor::new(a).cmp(&Versor::new(b)), a.cmp(&b));
    }
}

#[test]
fn test_lexicographic_chain() {
    let v1 = Versor::new([0, 0]);
    let v2 = Versor::new([0, 1]);
    let v3 = Versor::new([1, 0]);
    let v4 = Versor::new([1, 1]);
    assert!(v1 < v2 && v2 < v3 && v3 < v4);
}

#[test]
fn test_renderings() {
    assert_eq!(Versor::new(['a', 'b', 'c', 'd', 'e']).to_string(), "(a b c d e)");
    assert_eq!(PackedTuple::new((3.25, 'c', 42)).to_string(), "(3.25 c 42)");
    assert_eq!(ListFormat(&(3.25, 'c', 42)).to_string(), "(3.25 c 42)");
}

#[test]
fn test_footprints() {
    assert_eq!(size_of::<Versor<f64, 7>>(), 7 * size_of::<f64>());
    assert_eq!(size_of::<Versor<u8, 0>>(), 0);
    assert_eq!(size_of::<PackedTuple<(f64, u8, i32)>>(), 13);
    assert_eq!(size_of::<PackedTuple<(u8, u16, u32, u64, u128)>>(), 31);
}
