use super::Q128;
use crate::util::{decimal_point, Cursor};
use crate::wide::mul_wide;
use core::fmt;

/// Default fractional places: 39 decimal digits separate any two distinct
/// Q128.128 values, so auto-precision output parses back bit-exactly.
const AUTO_PRECISION: usize = 39;

/// Scratch bound for produced fractional digits. The exact expansion of a
/// 128-bit fraction needs at most 128 places; requests beyond the bound
/// only append zeros, which are emitted without scratch.
const FRAC_BUF: usize = 215;

const DISPLAY_BUF: usize = 512;

/// Sign display style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sign {
    /// Only negative values carry a sign.
    #[default]
    Default,
    /// Non-negative values get a leading space.
    Space,
    /// Non-negative values get a leading `+`.
    Plus,
}

/// Formatting options for [`Q128::format_into`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Format {
    /// Sign style for non-negative values.
    pub sign: Sign,
    /// Minimum field width in bytes.
    pub width: usize,
    /// Fractional places; `None` means "at most 39, trailing zeros
    /// trimmed".
    pub precision: Option<usize>,
    /// Pad to width with zeros after the sign instead of leading spaces.
    pub zero_pad: bool,
    /// Emit the decimal point even when there are no fractional digits.
    pub always_decimal: bool,
    /// Pad on the right instead of the left.
    pub left_align: bool,
}

impl Default for Format {
    #[inline(always)]
    fn default() -> Self {
        Self {
            sign: Sign::Default,
            width: 0,
            precision: None,
            zero_pad: false,
            always_decimal: false,
            left_align: false,
        }
    }
}

impl Format {
    /// Parses a printf-style pattern:
    /// `[%][' '|'+'|'0'|'-'|'#']*[width]['.'precision][type]`.
    ///
    /// The trailing type character and anything else outside the grammar
    /// is ignored.
    pub fn parse(pattern: &str) -> Self {
        let b = pattern.as_bytes();
        let mut f = Format::default();
        let mut i = 0;

        if i < b.len() && b[i] == b'%' {
            i += 1;
        }

        while i < b.len() {
            match b[i] {
                b' ' => {
                    if f.sign == Sign::Default {
                        f.sign = Sign::Space;
                    }
                }
                b'+' => f.sign = Sign::Plus,
                b'0' => f.zero_pad = true,
                b'-' => f.left_align = true,
                b'#' => f.always_decimal = true,
                _ => break,
            }
            i += 1;
        }

        while i < b.len() && b[i].is_ascii_digit() {
            f.width = f
                .width
                .saturating_mul(10)
                .saturating_add((b[i] - b'0') as usize);
            i += 1;
        }

        if i < b.len() && b[i] == b'.' {
            i += 1;
            let mut prec = 0usize;
            while i < b.len() && b[i].is_ascii_digit() {
                prec = prec
                    .saturating_mul(10)
                    .saturating_add((b[i] - b'0') as usize);
                i += 1;
            }
            f.precision = Some(prec);
        }

        f
    }
}

impl Q128 {
    /// Formats the value into `out` as a decimal string.
    ///
    /// Writes past the buffer capacity are suppressed, a NUL byte is
    /// always placed inside the capacity (at the last slot when
    /// truncated), and the returned count is the untruncated length, NUL
    /// excluded.
    pub fn format_into(&self, out: &mut [u8], f: &Format) -> usize {
        let neg = self.is_negative();
        let (mut int, frac0) = self.unsigned_abs();

        let (prec, full_precision) = match f.precision {
            Some(p) => (p, true),
            None => (AUTO_PRECISION, false),
        };
        let (prec, surplus) = if prec > FRAC_BUF {
            (FRAC_BUF, prec - FRAC_BUF)
        } else {
            (prec, 0)
        };

        // fractional digits, most significant first: the high half of
        // frac * 10 is the next digit, the low half the next remainder
        let mut frac_digits = [0u8; FRAC_BUF];
        let mut n_frac = 0;
        let mut frac = frac0;
        while n_frac < prec {
            if frac == 0 && !full_precision {
                break;
            }
            let (digit, rest) = mul_wide(frac, 10);
            frac_digits[n_frac] = b'0' + digit as u8;
            frac = rest;
            n_frac += 1;
        }

        // residual at or above half a ULP of the last place: carry
        // leftward over the emitted digits, possibly into the integer
        if n_frac == prec && (frac >> 127) != 0 {
            let mut i = n_frac;
            loop {
                if i == 0 {
                    int = int.wrapping_add(1);
                    break;
                }
                i -= 1;
                if frac_digits[i] == b'9' {
                    frac_digits[i] = b'0';
                } else {
                    frac_digits[i] += 1;
                    break;
                }
            }
        }

        if !full_precision {
            while n_frac > 0 && frac_digits[n_frac - 1] == b'0' {
                n_frac -= 1;
            }
        }

        // integer digits, least significant first
        let mut int_digits = [0u8; 40];
        let mut n_int = 0;
        loop {
            int_digits[n_int] = b'0' + (int % 10) as u8;
            int /= 10;
            n_int += 1;
            if int == 0 {
                break;
            }
        }

        let sign_byte = if neg {
            Some(b'-')
        } else {
            match f.sign {
                Sign::Plus => Some(b'+'),
                Sign::Space => Some(b' '),
                Sign::Default => None,
            }
        };

        let has_point = n_frac + surplus > 0 || f.always_decimal;
        let content =
            sign_byte.is_some() as usize + n_int + has_point as usize + n_frac + surplus;
        let pad = f.width.saturating_sub(content);

        let mut w = Cursor::new(out);
        if f.left_align {
            if let Some(s) = sign_byte {
                w.put(s);
            }
            emit_digits(&mut w, &int_digits, n_int, has_point, &frac_digits, n_frac, surplus);
            w.put_repeat(b' ', pad);
        } else if f.zero_pad {
            if let Some(s) = sign_byte {
                w.put(s);
            }
            w.put_repeat(b'0', pad);
            emit_digits(&mut w, &int_digits, n_int, has_point, &frac_digits, n_frac, surplus);
        } else {
            w.put_repeat(b' ', pad);
            if let Some(s) = sign_byte {
                w.put(s);
            }
            emit_digits(&mut w, &int_digits, n_int, has_point, &frac_digits, n_frac, surplus);
        }
        w.finish()
    }

    /// Formats using a printf-style pattern, see [`Format::parse`].
    #[inline(always)]
    pub fn format_pattern_into(&self, out: &mut [u8], pattern: &str) -> usize {
        self.format_into(out, &Format::parse(pattern))
    }
}

fn emit_digits(
    w: &mut Cursor<'_>,
    int_digits: &[u8],
    n_int: usize,
    has_point: bool,
    frac_digits: &[u8],
    n_frac: usize,
    surplus: usize,
) {
    for i in (0..n_int).rev() {
        w.put(int_digits[i]);
    }
    if has_point {
        w.put(decimal_point());
    }
    for &d in &frac_digits[..n_frac] {
        w.put(d);
    }
    w.put_repeat(b'0', surplus);
}

/// Display routes through the same formatter: `{:+.20}`, `{:>12.3}` and
/// friends map onto [`Format`]. Output beyond an internal buffer bound is
/// truncated.
impl fmt::Display for Q128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let opts = Format {
            sign: if f.sign_plus() {
                Sign::Plus
            } else {
                Sign::Default
            },
            width: f.width().unwrap_or(0).min(DISPLAY_BUF - 1),
            precision: f.precision(),
            zero_pad: f.sign_aware_zero_pad(),
            always_decimal: f.alternate(),
            left_align: matches!(f.align(), Some(fmt::Alignment::Left)),
        };
        let mut buf = [0u8; DISPLAY_BUF];
        let n = self.format_into(&mut buf, &opts).min(DISPLAY_BUF - 1);
        let s = core::str::from_utf8(&buf[..n]).map_err(|_| fmt::Error)?;
        f.write_str(s)
    }
}
