use std::io::Write;

use tracing::{debug, info};

#[cfg(feature = "alloc-stats")]
use crate::alloc_tracker::AllocSnapshot;
use crate::config::Config;
use crate::profiling::{self, Timing};
use crate::strategy::Strategy;
use crate::test_vector::TestVector;
use crate::Result;

/// One benchmark run: the input integers and the shared output slots every
/// strategy writes into.
#[derive(Debug)]
pub struct Benchmark {
    input: TestVector,
    output: Vec<String>,
    iterations: u32,
}

impl Benchmark {
    pub fn new(input: TestVector, iterations: u32) -> Self {
        let output = vec![String::new(); input.len()];
        Self {
            input,
            output,
            iterations,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let input = TestVector::generate(config.vector_len(), config.seed);
        debug!("Generated test vector of {} values (seed: {:?})", input.len(), config.seed);
        Self::new(input, config.iterations)
    }

    pub fn input(&self) -> &[i32] {
        &self.input
    }

    /// Text left behind by the most recent strategy
    pub fn output(&self) -> &[String] {
        &self.output
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Time every pass of a single strategy
    pub fn run_strategy(&mut self, strategy: Strategy) -> Result<Timing> {
        debug!(
            "Running {} for {} passes over {} values",
            strategy,
            self.iterations,
            self.input.len()
        );

        #[cfg(feature = "alloc-stats")]
        let before = AllocSnapshot::take();

        let timing = profiling::run(strategy.name(), || {
            strategy.run_passes(&self.input, &mut self.output, self.iterations)
        })?;

        #[cfg(feature = "alloc-stats")]
        info!("{}: {}", strategy, AllocSnapshot::take().since(&before));

        debug!("{} finished in {:?}", strategy, timing.elapsed);
        Ok(timing)
    }

    /// Run every strategy in order, writing one report line per strategy
    pub fn run_all<W: Write>(&mut self, out: &mut W) -> Result<Vec<Timing>> {
        let mut timings = Vec::with_capacity(Strategy::ALL.len());
        for strategy in Strategy::ALL {
            let timing = self.run_strategy(strategy)?;
            writeln!(out, "{timing}")?;
            timings.push(timing);
        }
        Ok(timings)
    }
}

/// Full benchmark: header lines followed by one timing line per strategy
pub fn run_benchmark<W: Write>(config: &Config, out: &mut W) -> Result<Vec<Timing>> {
    writeln!(out, "test iterations: {}", config.iterations)?;
    writeln!(out, "vector size: {}", config.size)?;

    let mut benchmark = Benchmark::from_config(config);
    let timings = benchmark.run_all(out)?;
    out.flush()?;

    let total: std::time::Duration = timings.iter().map(|t| t.elapsed).sum();
    info!("Benchmark complete: {} strategies in {:?}", timings.len(), total);
    Ok(timings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sizes_output_to_input() {
        let benchmark = Benchmark::new(TestVector::from(vec![1, 2, 3]), 4);
        assert_eq!(benchmark.output().len(), 3);
        assert_eq!(benchmark.iterations(), 4);
        assert!(benchmark.output().iter().all(String::is_empty));
    }

    #[test]
    fn test_run_strategy_fills_output() {
        let mut benchmark = Benchmark::new(TestVector::from(vec![42, -42]), 2);
        let timing = benchmark.run_strategy(Strategy::Itoa).unwrap();
        assert_eq!(timing.label, "itoa");
        assert_eq!(benchmark.output(), ["42", "-42"]);
    }

    #[test]
    fn test_run_all_reports_in_order() {
        let mut benchmark = Benchmark::new(TestVector::from(vec![7]), 1);
        let mut out = Vec::new();
        let timings = benchmark.run_all(&mut out).unwrap();

        let labels: Vec<_> = timings.iter().map(|t| t.label).collect();
        assert_eq!(labels, ["itoa", "to_string", "write!", "String+write!"]);

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("itoa: "));
        assert!(lines[3].starts_with("String+write!: "));
        assert!(lines.iter().all(|l| l.ends_with(" ms")));
    }
}
