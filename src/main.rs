use adinsight::{analyze_reports, init_default_themes, print_analysis_results, utils, Args};
use anyhow::Result;
use clap::Parser;
use std::time::Instant;
use tracing::info;

fn main() -> Result<()> {
    let args = Args::parse();

    if args.init {
        return init_default_themes();
    }

    utils::validate_args(&args)?;
    utils::setup_logging(args.verbose)?;

    let start_time = Instant::now();
    let results = analyze_reports(&args)?;
    print_analysis_results(&results, &args)?;

    info!(
        action = "complete",
        component = "main",
        report_count = results.len(),
        duration_ms = start_time.elapsed().as_millis(),
        "Finished"
    );
    Ok(())
}
