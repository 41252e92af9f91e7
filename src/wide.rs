// Wide arithmetic kernels (internal use only)

/// u128 * u128 -> (high, low). Exact 256-bit product, no rounding.
///
/// Column-wise schoolbook over 64-bit limbs. Each column sums at most
/// three limb products plus the previous column's carry inside a u128,
/// which cannot overflow, so no carry flags are needed.
#[inline]
pub(crate) fn mul_wide(a: u128, b: u128) -> (u128, u128) {
    let (a1, a0) = ((a >> 64) as u64, a as u64);
    let (b1, b0) = ((b >> 64) as u64, b as u64);

    let p00 = a0 as u128 * b0 as u128;
    let p01 = a0 as u128 * b1 as u128;
    let p10 = a1 as u128 * b0 as u128;
    let p11 = a1 as u128 * b1 as u128;

    let col1 = (p00 >> 64) + (p01 as u64 as u128) + (p10 as u64 as u128);
    let col2 = (p01 >> 64) + (p10 >> 64) + (p11 as u64 as u128) + (col1 >> 64);
    let col3 = (p11 >> 64) + (col2 >> 64);

    (
        (col2 as u64 as u128) | (col3 << 64),
        (p00 as u64 as u128) | (col1 << 64),
    )
}

/// Schoolbook long division by a single 64-bit limb, one quotient digit
/// per step. Caller guarantees `high < d`, so `high` seeds the running
/// remainder and only the low half contributes quotient digits.
#[inline]
fn divmod_by_limb(high: u128, low: u128, d: u64) -> (u128, u128) {
    let mut q = 0u128;
    let mut r = high;
    for digit in [(low >> 64) as u64, low as u64] {
        let cur = (r << 64) | digit as u128;
        q = (q << 64) | (cur / d as u128);
        r = cur % d as u128;
    }
    (q, r)
}

/// One base-2^64 quotient digit of the window (u2:u1:u0) / (d1:d0),
/// where the divisor is normalized (top bit of d1 set) and the window
/// value is below d * 2^64. Returns the digit and two-digit remainder.
///
/// The trial digit from the window's top two digits is at most two too
/// large; it is corrected by comparing the full q * (d1:d0) product
/// against the window, not by tracking a partial remainder.
#[inline]
fn quotient_digit(u2: u64, u1: u64, u0: u64, d1: u64, d0: u64) -> (u64, u128) {
    let top = ((u2 as u128) << 64) | u1 as u128;
    let mut q = if u2 >= d1 {
        u64::MAX
    } else {
        (top / d1 as u128) as u64
    };

    let (mid, plo) = loop {
        let p = q as u128 * d0 as u128;
        let mid = q as u128 * d1 as u128 + (p >> 64);
        let plo = p as u64;
        if mid > top || (mid == top && plo > u0) {
            q -= 1;
        } else {
            break (mid, plo);
        }
    };

    // the remainder is below d and fits two digits, so it survives a
    // mod-2^128 subtraction of the product from the window
    let window_lo = ((u1 as u128) << 64) | u0 as u128;
    let product_lo = (mid << 64) | plo as u128;
    (q, window_lo.wrapping_sub(product_lo))
}

/// Knuth long division: u256 / u128 -> (u128 quotient, u128 remainder).
/// Caller guarantees `high < divisor` (the quotient fits in 128 bits).
#[inline]
pub(crate) fn divmod_wide(high: u128, low: u128, divisor: u128) -> (u128, u128) {
    debug_assert!(divisor != 0, "division by zero");

    if high == 0 {
        return (low / divisor, low % divisor);
    }

    debug_assert!(high < divisor, "quotient overflow");

    if divisor >> 64 == 0 {
        return divmod_by_limb(high, low, divisor as u64);
    }

    // scale so the divisor's top bit is set; `high < divisor` keeps the
    // scaled numerator within four digits
    let shift = divisor.leading_zeros();
    let d = divisor << shift;
    let (d1, d0) = ((d >> 64) as u64, d as u64);
    let (nh, nl) = if shift == 0 {
        (high, low)
    } else {
        ((high << shift) | (low >> (128 - shift)), low << shift)
    };

    let mut q = 0u128;
    let mut r = nh;
    for nd in [(nl >> 64) as u64, nl as u64] {
        let (digit, rem) = quotient_digit((r >> 64) as u64, r as u64, nd, d1, d0);
        q = (q << 64) | digit as u128;
        r = rem;
    }
    (q, r >> shift)
}

/// One base-2^128 quotient digit of (u2:u1:u0) / (d1:d0), normalized.
/// Same correction scheme as the 64-bit digit step, except the product
/// is walked down by divisor subtractions instead of being recomputed.
#[inline]
fn quotient_digit_128(
    u2: u128,
    u1: u128,
    u0: u128,
    d1: u128,
    d0: u128,
) -> (u128, (u128, u128)) {
    let mut q = if u2 >= d1 {
        u128::MAX
    } else {
        divmod_wide(u2, u1, d1).0
    };

    // q * (d1:d0) as three digits
    let (p0h, p0l) = mul_wide(q, d0);
    let (p1h, p1l) = mul_wide(q, d1);
    let (mut mid, c) = p1l.overflowing_add(p0h);
    let mut top = p1h + c as u128;
    let mut plo = p0l;

    while top > u2 || (top == u2 && (mid > u1 || (mid == u1 && plo > u0))) {
        q -= 1;
        let (nl, b0) = plo.overflowing_sub(d0);
        let (nm, b1) = mid.overflowing_sub(d1);
        let (nm, b2) = nm.overflowing_sub(b0 as u128);
        top -= (b1 as u128) + (b2 as u128);
        mid = nm;
        plo = nl;
    }

    let (r0, borrow) = u0.overflowing_sub(plo);
    let r1 = u1.wrapping_sub(mid).wrapping_sub(borrow as u128);
    (q, (r1, r0))
}

/// u512 / u256 -> u256 quotient, two base-2^128 digits.
/// Caller guarantees the divisor's high half is non-zero and that the
/// quotient fits in 256 bits ((w3, w2) < (d_hi, d_lo)).
#[inline]
pub(crate) fn div_u512_by_u256(
    w3: u128,
    w2: u128,
    w1: u128,
    w0: u128,
    d_hi: u128,
    d_lo: u128,
) -> (u128, u128) {
    debug_assert!(d_hi != 0, "divisor high half must be non-zero");

    let shift = d_hi.leading_zeros();
    let (d1, d0, n) = if shift == 0 {
        (d_hi, d_lo, [w3, w2, w1, w0])
    } else {
        let back = 128 - shift;
        (
            (d_hi << shift) | (d_lo >> back),
            d_lo << shift,
            [
                (w3 << shift) | (w2 >> back),
                (w2 << shift) | (w1 >> back),
                (w1 << shift) | (w0 >> back),
                w0 << shift,
            ],
        )
    };

    let mut r = (n[0], n[1]);
    let mut q = [0u128; 2];
    for (slot, &nd) in q.iter_mut().zip(&n[2..]) {
        let (digit, rem) = quotient_digit_128(r.0, r.1, nd, d1, d0);
        *slot = digit;
        r = rem;
    }
    (q[0], q[1])
}
