use super::Q128;
use core::iter::{Product, Sum};
use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};

// ============ Operator Traits ============
impl Add for Q128 {
    type Output = Self;
    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Q128::add(&self, &rhs)
    }
}

impl Sub for Q128 {
    type Output = Self;
    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Q128::sub(&self, &rhs)
    }
}

impl Mul for Q128 {
    type Output = Self;
    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Q128::mul(&self, &rhs)
    }
}

impl Div for Q128 {
    type Output = Self;
    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        Q128::div(&self, &rhs)
    }
}

impl Rem for Q128 {
    type Output = Self;
    #[inline(always)]
    fn rem(self, rhs: Self) -> Self {
        Q128::rem(&self, &rhs)
    }
}

impl Neg for Q128 {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self {
        Q128::neg(&self)
    }
}

// ============ Bitwise Traits ============
impl Not for Q128 {
    type Output = Self;
    #[inline(always)]
    fn not(self) -> Self {
        Q128::not(&self)
    }
}

impl BitAnd for Q128 {
    type Output = Self;
    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        self.and(&rhs)
    }
}

impl BitOr for Q128 {
    type Output = Self;
    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        self.or(&rhs)
    }
}

impl BitXor for Q128 {
    type Output = Self;
    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        self.xor(&rhs)
    }
}

/// Logical shift; use [`Q128::sar`] for the arithmetic form.
impl Shl<u32> for Q128 {
    type Output = Self;
    #[inline(always)]
    fn shl(self, rhs: u32) -> Self {
        Q128::shl(&self, rhs)
    }
}

impl Shr<u32> for Q128 {
    type Output = Self;
    #[inline(always)]
    fn shr(self, rhs: u32) -> Self {
        Q128::shr(&self, rhs)
    }
}

// ============ Assign Ops ============
impl AddAssign for Q128 {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        *self = Q128::add(self, &rhs);
    }
}

impl SubAssign for Q128 {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        *self = Q128::sub(self, &rhs);
    }
}

impl MulAssign for Q128 {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: Self) {
        *self = Q128::mul(self, &rhs);
    }
}

impl DivAssign for Q128 {
    #[inline(always)]
    fn div_assign(&mut self, rhs: Self) {
        *self = Q128::div(self, &rhs);
    }
}

impl RemAssign for Q128 {
    #[inline(always)]
    fn rem_assign(&mut self, rhs: Self) {
        *self = Q128::rem(self, &rhs);
    }
}

impl BitAndAssign for Q128 {
    #[inline(always)]
    fn bitand_assign(&mut self, rhs: Self) {
        *self = self.and(&rhs);
    }
}

impl BitOrAssign for Q128 {
    #[inline(always)]
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.or(&rhs);
    }
}

impl BitXorAssign for Q128 {
    #[inline(always)]
    fn bitxor_assign(&mut self, rhs: Self) {
        *self = self.xor(&rhs);
    }
}

impl ShlAssign<u32> for Q128 {
    #[inline(always)]
    fn shl_assign(&mut self, rhs: u32) {
        *self = Q128::shl(self, rhs);
    }
}

impl ShrAssign<u32> for Q128 {
    #[inline(always)]
    fn shr_assign(&mut self, rhs: u32) {
        *self = Q128::shr(self, rhs);
    }
}

// ============ Reference Ops ============
impl<'b> Add<&'b Q128> for &Q128 {
    type Output = Q128;
    #[inline(always)]
    fn add(self, rhs: &'b Q128) -> Q128 {
        Q128::add(self, rhs)
    }
}
impl<'a> Add<&'a Q128> for Q128 {
    type Output = Q128;
    #[inline(always)]
    fn add(self, rhs: &'a Q128) -> Q128 {
        Q128::add(&self, rhs)
    }
}
impl Add<Q128> for &Q128 {
    type Output = Q128;
    #[inline(always)]
    fn add(self, rhs: Q128) -> Q128 {
        Q128::add(self, &rhs)
    }
}

impl<'b> Sub<&'b Q128> for &Q128 {
    type Output = Q128;
    #[inline(always)]
    fn sub(self, rhs: &'b Q128) -> Q128 {
        Q128::sub(self, rhs)
    }
}
impl<'a> Sub<&'a Q128> for Q128 {
    type Output = Q128;
    #[inline(always)]
    fn sub(self, rhs: &'a Q128) -> Q128 {
        Q128::sub(&self, rhs)
    }
}
impl Sub<Q128> for &Q128 {
    type Output = Q128;
    #[inline(always)]
    fn sub(self, rhs: Q128) -> Q128 {
        Q128::sub(self, &rhs)
    }
}

impl<'b> Mul<&'b Q128> for &Q128 {
    type Output = Q128;
    #[inline(always)]
    fn mul(self, rhs: &'b Q128) -> Q128 {
        Q128::mul(self, rhs)
    }
}
impl<'a> Mul<&'a Q128> for Q128 {
    type Output = Q128;
    #[inline(always)]
    fn mul(self, rhs: &'a Q128) -> Q128 {
        Q128::mul(&self, rhs)
    }
}
impl Mul<Q128> for &Q128 {
    type Output = Q128;
    #[inline(always)]
    fn mul(self, rhs: Q128) -> Q128 {
        Q128::mul(self, &rhs)
    }
}

impl<'b> Div<&'b Q128> for &Q128 {
    type Output = Q128;
    #[inline(always)]
    fn div(self, rhs: &'b Q128) -> Q128 {
        Q128::div(self, rhs)
    }
}
impl<'a> Div<&'a Q128> for Q128 {
    type Output = Q128;
    #[inline(always)]
    fn div(self, rhs: &'a Q128) -> Q128 {
        Q128::div(&self, rhs)
    }
}
impl Div<Q128> for &Q128 {
    type Output = Q128;
    #[inline(always)]
    fn div(self, rhs: Q128) -> Q128 {
        Q128::div(self, &rhs)
    }
}

impl<'b> Rem<&'b Q128> for &Q128 {
    type Output = Q128;
    #[inline(always)]
    fn rem(self, rhs: &'b Q128) -> Q128 {
        Q128::rem(self, rhs)
    }
}
impl<'a> Rem<&'a Q128> for Q128 {
    type Output = Q128;
    #[inline(always)]
    fn rem(self, rhs: &'a Q128) -> Q128 {
        Q128::rem(&self, rhs)
    }
}
impl Rem<Q128> for &Q128 {
    type Output = Q128;
    #[inline(always)]
    fn rem(self, rhs: Q128) -> Q128 {
        Q128::rem(self, &rhs)
    }
}

impl Neg for &Q128 {
    type Output = Q128;
    #[inline(always)]
    fn neg(self) -> Q128 {
        Q128::neg(self)
    }
}

// ============ Default ============
impl Default for Q128 {
    #[inline(always)]
    fn default() -> Self {
        Self::ZERO
    }
}

// ============ Iterator Traits ============
impl Sum for Q128 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |a, x| Q128::add(&a, &x))
    }
}
impl<'a> Sum<&'a Q128> for Q128 {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |a, x| Q128::add(&a, x))
    }
}

impl Product for Q128 {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |a, x| Q128::mul(&a, &x))
    }
}
impl<'a> Product<&'a Q128> for Q128 {
    fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |a, x| Q128::mul(&a, x))
    }
}

// ============ Ops with Primitives ============
macro_rules! impl_ops_primitive {
    ($($t:ty),*) => {$(
        impl Add<$t> for Q128 { type Output = Q128; #[inline(always)] fn add(self, rhs: $t) -> Q128 { Q128::add(&self, &Q128::from(rhs)) } }
        impl Add<Q128> for $t { type Output = Q128; #[inline(always)] fn add(self, rhs: Q128) -> Q128 { Q128::add(&Q128::from(self), &rhs) } }
        impl Sub<$t> for Q128 { type Output = Q128; #[inline(always)] fn sub(self, rhs: $t) -> Q128 { Q128::sub(&self, &Q128::from(rhs)) } }
        impl Sub<Q128> for $t { type Output = Q128; #[inline(always)] fn sub(self, rhs: Q128) -> Q128 { Q128::sub(&Q128::from(self), &rhs) } }
        impl Mul<$t> for Q128 { type Output = Q128; #[inline(always)] fn mul(self, rhs: $t) -> Q128 { Q128::mul(&self, &Q128::from(rhs)) } }
        impl Mul<Q128> for $t { type Output = Q128; #[inline(always)] fn mul(self, rhs: Q128) -> Q128 { Q128::mul(&Q128::from(self), &rhs) } }
        impl Div<$t> for Q128 { type Output = Q128; #[inline(always)] fn div(self, rhs: $t) -> Q128 { Q128::div(&self, &Q128::from(rhs)) } }
        impl Div<Q128> for $t { type Output = Q128; #[inline(always)] fn div(self, rhs: Q128) -> Q128 { Q128::div(&Q128::from(self), &rhs) } }
    )*};
}
impl_ops_primitive!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64);
