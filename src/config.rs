use clap::Parser;

/// Iteration count used by the reference run
pub const DEFAULT_ITERATIONS: u32 = 1000;

/// Test vector length used by the reference run
pub const DEFAULT_SIZE: u32 = 1000;

#[derive(Parser, Debug, Clone)]
#[command(name = "intbench")]
#[command(about = "intbench - compare the cost of i32 to decimal text conversions", long_about = None)]
pub struct Config {
    // Run shape comes from the command line only, never the environment
    #[arg(short = 'n', long, default_value_t = DEFAULT_ITERATIONS, help = "Number of full passes over the test vector per strategy")]
    pub iterations: u32,

    #[arg(short, long, default_value_t = DEFAULT_SIZE, help = "Number of random integers in the test vector")]
    pub size: u32,

    #[arg(long, env = "INTBENCH_SEED", help = "Seed for the test vector generator (random if omitted)")]
    pub seed: Option<u64>,

    #[arg(long, default_value = "warn", env = "INTBENCH_LOG_LEVEL")]
    pub log_level: String,
}

impl Config {
    /// Get a configuration instance with all values resolved from CLI args and environment variables
    pub fn load() -> Self {
        Config::parse()
    }

    /// Test vector length as a collection size
    pub fn vector_len(&self) -> usize {
        self.size as usize
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            size: DEFAULT_SIZE,
            seed: None,
            log_level: "warn".to_string(),
        }
    }
}
