use std::fmt;
use std::time::{Duration, Instant};

use crate::Result;

/// Wall-clock cost of one strategy, all passes included
#[derive(Debug, Clone, PartialEq)]
pub struct Timing {
    pub label: &'static str,
    pub elapsed: Duration,
}

impl Timing {
    /// Elapsed time in fractional milliseconds
    pub fn millis(&self) -> f64 {
        self.elapsed.as_nanos() as f64 / 1_000_000.0
    }
}

impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ms", self.label, self.millis())
    }
}

/// Monotonic stopwatch for a single labelled measurement
#[derive(Debug)]
pub struct Timer {
    label: &'static str,
    start: Instant,
}

impl Timer {
    pub fn start(label: &'static str) -> Self {
        Self {
            label,
            start: Instant::now(),
        }
    }

    pub fn stop(self) -> Timing {
        Timing {
            label: self.label,
            elapsed: self.start.elapsed(),
        }
    }
}

/// Time one execution of `work`.
///
/// The work runs exactly once and performs its own repetitions; an error from
/// it is returned without a timing.
pub fn run<F>(label: &'static str, work: F) -> Result<Timing>
where
    F: FnOnce() -> Result<()>,
{
    let timer = Timer::start(label);
    work()?;
    Ok(timer.stop())
}
