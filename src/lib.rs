pub mod alloc_tracker;
pub mod bench;
pub mod config;
pub mod profiling;
pub mod strategy;
pub mod test_vector;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Formatting error: {0}")]
    Format(#[from] std::fmt::Error),

    #[error("Invalid UTF-8 in formatted output: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("Length mismatch: {input} input values but {output} output slots")]
    LengthMismatch { input: usize, output: usize },

    #[error("Scratch buffer overflow: value does not fit in {capacity} bytes")]
    ScratchOverflow { capacity: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

pub use bench::run_benchmark;
pub use config::Config;
pub use profiling::Timing;
pub use strategy::Strategy;
pub use test_vector::TestVector;
