#![no_std]

//! Q128.128 signed binary fixed-point arithmetic.
//!
//! A [`Q128`] is a 256-bit two's-complement integer scaled by `2^-128`:
//! 128 integer bits, 128 fractional bits, stored as two `u128` halves.
//! Every bit pattern is a legal value; there is no NaN, infinity or
//! denormal. Exceptional inputs saturate to [`Q128::MIN`] / [`Q128::MAX`]
//! instead of returning errors.
//!
//! ```
//! use q128::Q128;
//!
//! let ten: Q128 = "10".parse().unwrap();
//! let third = ten / Q128::from(3);
//! let mut buf = [0u8; 64];
//! let n = third.format_into(&mut buf, &Default::default());
//! assert!(core::str::from_utf8(&buf[..n]).unwrap().starts_with("3.3333"));
//! ```

mod error;
mod q128;
mod util;
mod wide;

pub use error::ParseError;
pub use q128::{Format, Q128, Sign};
pub use util::{decimal_point, set_decimal_point};
