// tests/q128_props.rs
//
// Property tests over arbitrary 256-bit values.

use q128::{Format, Q128};
use quickcheck::{Arbitrary, Gen, TestResult};
use quickcheck_macros::quickcheck;

#[derive(Clone, Copy, Debug)]
struct Arb(Q128);

impl Arbitrary for Arb {
    fn arbitrary(g: &mut Gen) -> Self {
        Arb(Q128::from_parts(u128::arbitrary(g), u128::arbitrary(g)))
    }
}

#[quickcheck]
fn prop_add_neg_is_zero(v: Arb) -> bool {
    v.0.add(&v.0.neg()) == Q128::ZERO
}

#[quickcheck]
fn prop_double_neg(v: Arb) -> bool {
    v.0.neg().neg() == v.0
}

#[quickcheck]
fn prop_sub_self_is_zero(v: Arb) -> bool {
    v.0.sub(&v.0) == Q128::ZERO
}

#[quickcheck]
fn prop_add_zero_identity(v: Arb) -> bool {
    v.0.add(&Q128::ZERO) == v.0 && Q128::ZERO.add(&v.0) == v.0
}

#[quickcheck]
fn prop_add_commutes(a: Arb, b: Arb) -> bool {
    a.0.add(&b.0) == b.0.add(&a.0)
}

#[quickcheck]
fn prop_sub_is_add_neg(a: Arb, b: Arb) -> bool {
    a.0.sub(&b.0) == a.0.add(&b.0.neg())
}

#[quickcheck]
fn prop_cmp_antisymmetric(a: Arb, b: Arb) -> bool {
    a.0.cmp(&b.0) == b.0.cmp(&a.0).reverse()
}

#[quickcheck]
fn prop_cmp_reflexive(v: Arb) -> bool {
    v.0.cmp(&v.0) == core::cmp::Ordering::Equal
}

#[quickcheck]
fn prop_cmp_transitive(a: Arb, b: Arb, c: Arb) -> bool {
    let mut v = [a.0, b.0, c.0];
    v.sort();
    v[0] <= v[1] && v[1] <= v[2] && v[0] <= v[2]
}

#[quickcheck]
fn prop_floor_ceil_sandwich(v: Arb) -> TestResult {
    // ceil wraps in the topmost integer interval
    if v.0.hi == Q128::MAX.hi && v.0.lo != 0 {
        return TestResult::discard();
    }
    let ok = v.0.floor() <= v.0 && v.0 <= v.0.ceil();
    let gap = v.0.ceil().sub(&v.0.floor());
    TestResult::from_bool(ok && (gap == Q128::ZERO || gap == Q128::ONE))
}

#[quickcheck]
fn prop_shift_round_trip_masks(v: Arb, k: u8) -> bool {
    let k = k as u32;
    let ones = Q128::from_parts(u128::MAX, u128::MAX);
    v.0.shl(k).shr(k) == v.0.and(&ones.shr(k))
}

#[quickcheck]
fn prop_mul_commutes(a: Arb, b: Arb) -> bool {
    a.0.mul(&b.0) == b.0.mul(&a.0)
}

#[quickcheck]
fn prop_mul_by_one(v: Arb) -> bool {
    v.0.mul(&Q128::ONE) == v.0
}

#[quickcheck]
fn prop_rem_reconstructs(a: Arb, b: Arb) -> TestResult {
    if b.0.is_zero() {
        return TestResult::discard();
    }
    let t = a.0.div(&b.0).trunc();
    TestResult::from_bool(t.mul(&b.0).add(&a.0.rem(&b.0)) == a.0)
}

#[quickcheck]
fn prop_string_round_trip_full_precision(v: Arb) -> bool {
    let full = Format {
        precision: Some(39),
        ..Default::default()
    };
    let mut buf = [0u8; 128];
    let n = v.0.format_into(&mut buf, &full);
    let s = core::str::from_utf8(&buf[..n]).unwrap();
    s.parse::<Q128>().unwrap() == v.0
}

#[quickcheck]
fn prop_display_round_trip(v: Arb) -> bool {
    format!("{}", v.0).parse::<Q128>().unwrap() == v.0
}

#[quickcheck]
fn prop_le_bytes_round_trip(v: Arb) -> bool {
    Q128::from_le_bytes(v.0.to_le_bytes()) == v.0
}

#[quickcheck]
fn prop_quarters_round_trip(v: Arb) -> bool {
    Q128::from_quarters(v.0.to_quarters()) == v.0
}

#[quickcheck]
fn prop_abs_nonnegative_except_min(v: Arb) -> bool {
    v.0 == Q128::MIN || !v.0.abs().is_negative()
}

#[quickcheck]
fn prop_float_image_round_trips(int: i32, frac: u16) -> bool {
    // doubles of this shape are exactly representable in Q128.128
    let x = int as f64 + frac as f64 / 65536.0;
    Q128::from_f64(x).to_f64() == x
}

#[quickcheck]
fn prop_truncating_int_conversion(v: Arb) -> bool {
    let i = v.0.to_i128();
    // the truncated integer is within one of the floor
    let f = (v.0.floor().hi) as i128;
    i == f || i == f.wrapping_add(1)
}
