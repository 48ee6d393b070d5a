use anyhow::Result;
use tracing::info;

use intbench::config::Config;
use intbench::run_benchmark;

#[cfg(feature = "alloc-stats")]
#[global_allocator]
static GLOBAL: intbench::alloc_tracker::CountingAllocator = intbench::alloc_tracker::CountingAllocator;

fn main() -> Result<()> {
    let config = Config::load();

    // Initialize logging; stdout is reserved for the report
    tracing_subscriber::fmt()
        .with_env_filter(config.log_level.clone())
        .with_writer(std::io::stderr)
        .init();

    info!("intbench v{}", env!("CARGO_PKG_VERSION"));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_benchmark(&config, &mut out)?;

    Ok(())
}
