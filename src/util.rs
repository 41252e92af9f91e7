use core::sync::atomic::{AtomicU8, Ordering};

/// Decimal-point byte used by the formatter and parser.
///
/// Read-mostly: a program that mutates it must synchronize the write
/// against concurrent formatting/parsing calls itself.
static DECIMAL_POINT: AtomicU8 = AtomicU8::new(b'.');

/// Returns the decimal-point character (default `b'.'`).
#[inline(always)]
pub fn decimal_point() -> u8 {
    DECIMAL_POINT.load(Ordering::Relaxed)
}

/// Sets the decimal-point character used by the formatter and parser.
#[inline(always)]
pub fn set_decimal_point(c: u8) {
    DECIMAL_POINT.store(c, Ordering::Relaxed);
}

/// Truncation-aware byte cursor for formatting into a caller buffer.
///
/// Writes past capacity are suppressed while `len` keeps counting, so the
/// final `len` is the untruncated output length.
pub(crate) struct Cursor<'a> {
    buf: &'a mut [u8],
    len: usize,
}

impl<'a> Cursor<'a> {
    #[inline(always)]
    pub(crate) fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, len: 0 }
    }

    #[inline(always)]
    pub(crate) fn put(&mut self, b: u8) {
        if self.len < self.buf.len() {
            self.buf[self.len] = b;
        }
        self.len += 1;
    }

    #[inline(always)]
    pub(crate) fn put_repeat(&mut self, b: u8, n: usize) {
        for _ in 0..n {
            self.put(b);
        }
    }

    /// Untruncated length, then a NUL placed inside capacity (at the last
    /// slot when truncated).
    #[inline(always)]
    pub(crate) fn finish(self) -> usize {
        if !self.buf.is_empty() {
            let at = self.len.min(self.buf.len() - 1);
            self.buf[at] = 0;
        }
        self.len
    }
}
