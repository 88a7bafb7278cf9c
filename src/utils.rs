use time::macros::format_description;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::EnvFilter;

use crate::scripts::CONCEPT_COUNT;

pub fn setup_logging(verbose: bool) -> anyhow::Result<()> {
    let default_level = if verbose { "info" } else { "error" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let timer = LocalTime::new(format_description!(
        "[hour]:[minute]:[second].[subsecond digits:3]"
    ));

    // stdout is reserved for report output
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(timer)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))
}

/// Shortens an ad line for dashboard display, keeping char boundaries intact.
pub fn truncate_line(line: &str, max_chars: usize) -> String {
    if line.chars().count() <= max_chars {
        return line.to_string();
    }
    let kept: String = line.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept)
}

/// Formats a theme score without a trailing ".0" for whole numbers.
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{:+}", score as i64)
    } else {
        format!("{:+.1}", score)
    }
}

pub fn validate_args(args: &crate::args::Args) -> anyhow::Result<()> {
    if let Some(workers) = args.workers {
        if workers == 0 {
            anyhow::bail!("--workers must be greater than 0");
        }
    }

    if let Some(expand) = args.expand {
        if args.topic.is_none() {
            anyhow::bail!("--expand requires --topic");
        }
        if expand == 0 || expand > CONCEPT_COUNT {
            anyhow::bail!("--expand must be between 1 and {}", CONCEPT_COUNT);
        }
    }

    if let Some(topic) = &args.topic {
        if topic.trim().is_empty() {
            anyhow::bail!("--topic must not be empty");
        }
    }

    Ok(())
}
