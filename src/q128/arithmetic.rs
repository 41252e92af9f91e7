use super::Q128;
use crate::wide::{div_u512_by_u256, divmod_wide, mul_wide};

// ============ Additive layer ============
impl Q128 {
    /// Wrapping 256-bit addition.
    #[inline(always)]
    pub fn add(&self, other: &Self) -> Self {
        let (lo, carry) = self.lo.overflowing_add(other.lo);
        let hi = self.hi.wrapping_add(other.hi).wrapping_add(carry as u128);
        Self { lo, hi }
    }

    /// Wrapping 256-bit subtraction.
    #[inline(always)]
    pub fn sub(&self, other: &Self) -> Self {
        let (lo, borrow) = self.lo.overflowing_sub(other.lo);
        let hi = self.hi.wrapping_sub(other.hi).wrapping_sub(borrow as u128);
        Self { lo, hi }
    }

    /// Two's-complement negation over the full 256 bits.
    ///
    /// `MIN` negates to itself (wraps), like `i128::wrapping_neg`.
    #[inline(always)]
    pub fn neg(&self) -> Self {
        let (lo, carry) = (!self.lo).overflowing_add(1);
        let hi = (!self.hi).wrapping_add(carry as u128);
        Self { lo, hi }
    }

    /// Magnitude of the value as an unsigned 256-bit (hi, lo) pair.
    /// `MIN` yields the unsigned `(2^127, 0)`.
    #[inline(always)]
    pub(crate) fn unsigned_abs(&self) -> (u128, u128) {
        if self.is_negative() {
            let n = self.neg();
            (n.hi, n.lo)
        } else {
            (self.hi, self.lo)
        }
    }
}

// ============ Multiply ============

/// Unsigned Q128.128 multiply: middle 256 bits of the 512-bit product of
/// two non-negative magnitudes, rounded by injecting bit 127 of the
/// low-by-low partial. Bits above 2^256 wrap away.
#[inline]
pub(crate) fn umul(a_hi: u128, a_lo: u128, b_hi: u128, b_lo: u128) -> (u128, u128) {
    let (ll_hi, ll_lo) = mul_wide(a_lo, b_lo);
    let (lh_hi, lh_lo) = mul_wide(a_lo, b_hi);
    let (hl_hi, hl_lo) = mul_wide(a_hi, b_lo);
    let (_, hh_lo) = mul_wide(a_hi, b_hi);

    let round = ll_lo >> 127;
    let (lo, c1) = ll_hi.overflowing_add(lh_lo);
    let (lo, c2) = lo.overflowing_add(hl_lo);
    let (lo, c3) = lo.overflowing_add(round);
    let hi = hh_lo
        .wrapping_add(lh_hi)
        .wrapping_add(hl_hi)
        .wrapping_add(c1 as u128 + c2 as u128 + c3 as u128);

    (hi, lo)
}

// ============ Divide ============

/// Unsigned Q128.128 divide of magnitudes: (a << 128) / b, truncated.
/// Returns `None` when the quotient does not fit in 256 bits.
#[inline]
pub(crate) fn udiv(a_hi: u128, a_lo: u128, b_hi: u128, b_lo: u128) -> Option<(u128, u128)> {
    if b_hi == 0 {
        // 128-bit divisor: two chained 256/128 divides over the shifted
        // numerator digits (a_hi, a_lo, 0)
        if a_hi >= b_lo {
            return None;
        }
        let (q_hi, r) = divmod_wide(a_hi, a_lo, b_lo);
        let (q_lo, _) = divmod_wide(r, 0, b_lo);
        Some((q_hi, q_lo))
    } else {
        // divisor >= 1: the quotient always fits
        Some(div_u512_by_u256(0, a_hi, a_lo, 0, b_hi, b_lo))
    }
}

impl Q128 {
    /// Fixed-point multiplication, rounding the dropped half-ULP and
    /// wrapping on overflow.
    #[inline(always)]
    pub fn mul(&self, other: &Self) -> Self {
        let neg = self.is_negative() ^ other.is_negative();
        let (a_hi, a_lo) = self.unsigned_abs();
        let (b_hi, b_lo) = other.unsigned_abs();
        let (hi, lo) = umul(a_hi, a_lo, b_hi, b_lo);
        let r = Self { lo, hi };
        if neg {
            r.neg()
        } else {
            r
        }
    }

    /// Fixed-point division, truncated toward zero.
    ///
    /// Division by zero returns `MAX` for a non-negative dividend and
    /// `MIN` for a negative one; a quotient beyond the representable
    /// range saturates to `MAX` with the sign applied.
    #[inline(always)]
    pub fn div(&self, other: &Self) -> Self {
        if other.is_zero() {
            return if self.is_negative() {
                Self::MIN
            } else {
                Self::MAX
            };
        }
        let neg = self.is_negative() ^ other.is_negative();
        let (a_hi, a_lo) = self.unsigned_abs();
        let (b_hi, b_lo) = other.unsigned_abs();
        let r = match udiv(a_hi, a_lo, b_hi, b_lo) {
            Some((hi, lo)) => Self { lo, hi },
            None => Self::MAX,
        };
        if neg {
            r.neg()
        } else {
            r
        }
    }

    /// Remainder: `self - trunc(self / other) * other`.
    ///
    /// Division by zero saturates the same way [`Q128::div`] does.
    #[inline(always)]
    pub fn rem(&self, other: &Self) -> Self {
        if other.is_zero() {
            return if self.is_negative() {
                Self::MIN
            } else {
                Self::MAX
            };
        }
        let q = self.div(other).trunc();
        self.sub(&q.mul(other))
    }
}
