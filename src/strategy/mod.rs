pub mod fixed_buffer;

use std::fmt::{self, Write as _};

use crate::{Error, Result};

pub use fixed_buffer::{I32_MAX_DECIMAL_LEN, SCRATCH_LEN, ScratchBuffer, decimal_len};

/// The ways an `i32` is turned into decimal text, in report order.
///
/// All strategies produce the same text for the same value; only their cost
/// differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// `itoa::Buffer` on the stack, copied into the slot's existing allocation
    Itoa,
    /// `ToString::to_string`, a new `String` per value
    ToString,
    /// `write!` into a fixed 11-byte [`ScratchBuffer`], copied into the slot
    FixedBuffer,
    /// `String::new()` per value that the integer is `write!`-ed into
    FreshString,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Itoa,
        Strategy::ToString,
        Strategy::FixedBuffer,
        Strategy::FreshString,
    ];

    /// Label printed in the report
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Itoa => "itoa",
            Strategy::ToString => "to_string",
            Strategy::FixedBuffer => "write!",
            Strategy::FreshString => "String+write!",
        }
    }

    /// Run `times` full passes over `input`, overwriting `output[i]` with the
    /// text of `input[i]` on every pass.
    ///
    /// Fails with [`Error::LengthMismatch`] before converting anything when
    /// `output` is not the same length as `input`.
    pub fn run_passes(self, input: &[i32], output: &mut [String], times: u32) -> Result<()> {
        if input.len() != output.len() {
            return Err(Error::LengthMismatch {
                input: input.len(),
                output: output.len(),
            });
        }

        match self {
            Strategy::Itoa => {
                let mut buf = itoa::Buffer::new();
                each_slot(input, output, times, |value, slot| {
                    let text = buf.format(value);
                    slot.clear();
                    slot.push_str(text);
                    Ok(())
                })
            }
            Strategy::ToString => each_slot(input, output, times, |value, slot| {
                *slot = value.to_string();
                Ok(())
            }),
            Strategy::FixedBuffer => {
                let mut scratch = ScratchBuffer::<SCRATCH_LEN>::new();
                each_slot(input, output, times, |value, slot| {
                    let text = scratch.format(value)?;
                    slot.clear();
                    slot.push_str(text);
                    Ok(())
                })
            }
            Strategy::FreshString => each_slot(input, output, times, |value, slot| {
                let mut sink = String::new();
                write!(sink, "{value}")?;
                *slot = sink;
                Ok(())
            }),
        }
    }

    /// Convert a single value
    pub fn convert(self, value: i32) -> Result<String> {
        let mut out = [String::new()];
        self.run_passes(&[value], &mut out, 1)?;
        let [text] = out;
        Ok(text)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[inline(always)]
fn each_slot<F>(input: &[i32], output: &mut [String], times: u32, mut convert: F) -> Result<()>
where
    F: FnMut(i32, &mut String) -> Result<()>,
{
    for _ in 0..times {
        for (slot, &value) in output.iter_mut().zip(input) {
            convert(value, slot)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_in_report_order() {
        let names: Vec<_> = Strategy::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(names, ["itoa", "to_string", "write!", "String+write!"]);
        assert_eq!(Strategy::FixedBuffer.to_string(), "write!");
    }

    #[test]
    fn test_convert_edge_values() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.convert(0).unwrap(), "0", "{strategy}");
            assert_eq!(strategy.convert(-1).unwrap(), "-1", "{strategy}");
            assert_eq!(strategy.convert(10).unwrap(), "10", "{strategy}");
            assert_eq!(strategy.convert(i32::MIN).unwrap(), "-2147483648", "{strategy}");
            assert_eq!(strategy.convert(i32::MAX).unwrap(), "2147483647", "{strategy}");
        }
    }

    #[test]
    fn test_zero_passes_leaves_output_untouched() {
        let mut output = vec!["old".to_string(); 2];
        for strategy in Strategy::ALL {
            strategy.run_passes(&[1, 2], &mut output, 0).unwrap();
            assert_eq!(output, ["old", "old"]);
        }
    }

    #[test]
    fn test_overwrites_longer_previous_text() {
        let mut output = vec!["-2147483648".to_string()];
        for strategy in Strategy::ALL {
            output[0] = "-2147483648".to_string();
            strategy.run_passes(&[3], &mut output, 2).unwrap();
            assert_eq!(output[0], "3", "{strategy}");
        }
    }

    #[test]
    fn test_length_mismatch_is_rejected() {
        for strategy in Strategy::ALL {
            let mut short = vec![String::new(); 1];
            let err = strategy.run_passes(&[1, 2, 3], &mut short, 1).unwrap_err();
            assert!(matches!(err, Error::LengthMismatch { input: 3, output: 1 }), "{strategy}");
            // Nothing is converted when the lengths disagree
            assert_eq!(short, [""], "{strategy}");

            let mut long = vec!["old".to_string(); 3];
            let err = strategy.run_passes(&[1], &mut long, 1).unwrap_err();
            assert!(matches!(err, Error::LengthMismatch { input: 1, output: 3 }), "{strategy}");
            assert_eq!(long, ["old", "old", "old"], "{strategy}");
        }
    }
}
