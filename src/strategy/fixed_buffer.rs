use std::io::{Cursor, Write};

use crate::{Error, Result};

/// Length of the longest `i32` in decimal, sign included ("-2147483648")
pub const I32_MAX_DECIMAL_LEN: usize = decimal_len(i32::MIN);

/// Capacity of the stack scratch buffer used by the `write!` strategy
pub const SCRATCH_LEN: usize = 11;

const _: () = assert!(
    SCRATCH_LEN >= I32_MAX_DECIMAL_LEN,
    "scratch buffer cannot hold every i32 in decimal"
);

/// Number of bytes `value` occupies in decimal, including a minus sign
pub const fn decimal_len(value: i32) -> usize {
    let mut len = if value < 0 { 2 } else { 1 };
    let mut rest = value.unsigned_abs() / 10;
    while rest > 0 {
        len += 1;
        rest /= 10;
    }
    len
}

/// Fixed-capacity stack buffer that integers are printed into with `write!`.
///
/// Output that does not fit is reported as [`Error::ScratchOverflow`] instead of
/// being truncated.
#[derive(Debug, Clone)]
pub struct ScratchBuffer<const N: usize = SCRATCH_LEN> {
    bytes: [u8; N],
}

impl<const N: usize> ScratchBuffer<N> {
    pub fn new() -> Self {
        Self { bytes: [0; N] }
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Print `value` into the buffer and return the written prefix
    pub fn format(&mut self, value: i32) -> Result<&str> {
        let written = {
            let mut cursor = Cursor::new(&mut self.bytes[..]);
            write!(cursor, "{value}").map_err(|_| Error::ScratchOverflow { capacity: N })?;
            cursor.position() as usize
        };
        Ok(std::str::from_utf8(&self.bytes[..written])?)
    }
}

impl<const N: usize> Default for ScratchBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}
