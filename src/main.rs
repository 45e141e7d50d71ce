//! memaccess-bench - memory-access and concurrent-increment microbenchmarks
//!
//! Times sequential, random and cache-line-strided reads, then contrasts
//! atomic, racy and volatile increments. One timed run per pattern.

use anyhow::Result;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use memaccess_bench::benchmark::Orchestrator;
use memaccess_bench::config::{BenchmarkConfig, CliArgs, OutputFormat};
use memaccess_bench::metrics::MetricsReporter;

fn setup_logging(verbose: bool, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else if verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Failed to set tracing subscriber");
    }
}

fn print_banner(config: &BenchmarkConfig) {
    if config.quiet || config.output_format != OutputFormat::Text {
        return;
    }

    println!("memaccess-bench v{}", env!("CARGO_PKG_VERSION"));
    println!("====================================");
    println!(
        "Array size: {}, Cache line: {} bytes (stride {}), Threads: {}",
        config.array_size,
        config.cache_line_size,
        config.stride(),
        config.thread_count
    );
    println!(
        "Patterns: {}",
        config
            .patterns
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!("====================================");
}

fn run() -> Result<()> {
    // Parse CLI arguments
    let args = CliArgs::parse_args();

    // Setup logging
    setup_logging(args.verbose, args.quiet);

    // Build configuration
    let config = BenchmarkConfig::from_cli(&args)
        .map_err(|e| anyhow::anyhow!("Configuration error: {}", e))?;

    print_banner(&config);

    let orchestrator = Orchestrator::new(config.clone())?;
    let mut reporter = MetricsReporter::new(config.output_format, config.verbose);

    let results = orchestrator.run_all(&mut reporter)?;

    if let Some(ref output_path) = config.output_path {
        info!("Writing results to: {:?}", output_path);
        orchestrator.export_json(&results, output_path)?;
    }

    if let Some(ref csv_path) = config.csv_output {
        info!("Writing CSV to: {:?}", csv_path);
        orchestrator.export_csv(&results, csv_path)?;
    }

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        error!("Error: {:#}", e);
        std::process::exit(1);
    }
}
