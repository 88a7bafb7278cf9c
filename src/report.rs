use anyhow::{Context, Result};
use chrono::Utc;
use rayon::prelude::*;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

use crate::analyzer::Analyzer;
use crate::args::OutputFormat;
use crate::scripts::{self, ScriptConcept};
use crate::stats::{ParsedData, ReportAnalysis, ThemeScore};
use crate::{themes, utils, Args};

pub const STDIN_SOURCE: &str = "-";

const DISPLAYED_ADS: usize = 7;
const AD_LINE_WIDTH: usize = 72;

pub fn read_report(source: &Path) -> Result<String> {
    if source.as_os_str() == STDIN_SOURCE {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read report from stdin")?;
        return Ok(strip_byte_order_mark(text));
    }

    fs::read_to_string(source)
        .map(strip_byte_order_mark)
        .with_context(|| format!("Failed to read report {:?}", source))
}

fn strip_byte_order_mark(text: String) -> String {
    match text.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => text,
    }
}

fn source_label(source: &Path) -> String {
    if source.as_os_str() == STDIN_SOURCE {
        "stdin".to_string()
    } else {
        source.display().to_string()
    }
}

/// Analyzes one report, rejecting blank text before it reaches the analyzer.
pub fn analyze_text(analyzer: &Analyzer, source: &str, text: &str) -> Result<ReportAnalysis> {
    if text.trim().is_empty() {
        anyhow::bail!("Report {} is empty; paste the report text first", source);
    }

    let start_time = Instant::now();
    let data = analyzer.analyze(text);
    info!(
        action = "complete",
        component = "report_analysis",
        source = source,
        winning_ads = data.stats.total_winning,
        losing_ads = data.stats.total_losing,
        themes = data.themes.len(),
        keywords = data.keywords.len(),
        duration_ms = start_time.elapsed().as_millis(),
        "Report analyzed"
    );

    Ok(ReportAnalysis {
        source: source.to_string(),
        analyzed_at: Utc::now(),
        data,
    })
}

pub fn analyze_reports(args: &Args) -> Result<Vec<ReportAnalysis>> {
    let total_start_time = Instant::now();
    info!(action = "start", component = "report_batch", "Starting report analysis");

    let analyzer = Analyzer::new(themes::load_theme_patterns(args.themes.as_deref())?);

    let sources: Vec<PathBuf> = if args.files.is_empty() {
        vec![PathBuf::from(STDIN_SOURCE)]
    } else {
        args.files.clone()
    };

    if sources.iter().filter(|s| s.as_os_str() == STDIN_SOURCE).count() > 1 {
        anyhow::bail!("stdin (\"-\") can only be given once");
    }

    let max_workers = args.workers.unwrap_or_else(|| {
        let cpu_count = num_cpus::get();
        std::cmp::min(cpu_count, 8)
    });
    info!(action = "configure", component = "report_batch", worker_count = max_workers, report_count = sources.len(), "Using workers for processing");

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(max_workers)
        .build()
        .context("Failed to build worker pool")?;

    // Collecting into Result keeps input order and stops at the first failure
    let results = pool.install(|| {
        sources
            .par_iter()
            .map(|source| {
                let text = read_report(source)?;
                analyze_text(&analyzer, &source_label(source), &text)
            })
            .collect::<Result<Vec<_>>>()
    })?;

    info!(
        action = "complete",
        component = "report_batch",
        report_count = results.len(),
        duration_ms = total_start_time.elapsed().as_millis(),
        "Report analysis completed"
    );

    Ok(results)
}

fn print_dashboard(data: &ParsedData) {
    let stats = &data.stats;
    println!("Date range: {}", stats.date_range);
    println!(
        "Winning ads: {}  |  Underperforming ads: {}  |  Win rate: {}%",
        stats.total_winning, stats.total_losing, stats.win_rate
    );

    let winning_themes: Vec<&ThemeScore> = data.winning_themes().collect();
    if !winning_themes.is_empty() {
        println!("\nWinning themes:");
        for theme in &winning_themes {
            println!("- {}: {}", theme.name, utils::format_score(theme.count));
        }
        println!(
            "Insight: {} is your top-performing theme. Use it in your next campaign!",
            winning_themes[0].name
        );
    }

    let losing_themes: Vec<&ThemeScore> = data.losing_themes().collect();
    if !losing_themes.is_empty() {
        println!("\nUnderperforming themes:");
        for theme in &losing_themes {
            println!("- {}: {}", theme.name, utils::format_score(theme.count));
        }
    }

    if !data.formats.is_empty() {
        println!("\nWinning formats:");
        for format in &data.formats {
            println!("- {}: {}", format.name, format.count);
        }
    }

    println!("\nAudience split (placeholder):");
    for audience in &data.audiences {
        println!("- {}: {}%", audience.name, audience.count);
    }

    if !data.keywords.is_empty() {
        println!("\nTop keywords:");
        for keyword in &data.keywords {
            println!(
                "- {} ({}x, weight {:.2})",
                keyword.word, keyword.count, keyword.normalized_count
            );
        }
    }

    for (title, ads) in [
        ("Winning ads", &data.winning_ads),
        ("Underperforming ads", &data.losing_ads),
    ] {
        if ads.is_empty() {
            continue;
        }
        println!(
            "\n{} (showing {} of {}):",
            title,
            std::cmp::min(DISPLAYED_ADS, ads.len()),
            ads.len()
        );
        for ad in ads.iter().take(DISPLAYED_ADS) {
            println!("- {}", utils::truncate_line(ad, AD_LINE_WIDTH));
        }
    }
}

fn print_concepts(concepts: &[ScriptConcept], data: &ParsedData, args: &Args, topic: &str) {
    println!("\nScript concepts for \"{}\":", topic.trim());
    for (index, concept) in concepts.iter().enumerate() {
        println!("\n{}. {} [{}]", index + 1, concept.title, concept.format);
        println!("Hook: {}", concept.hook);
        println!("{}", concept.script);
    }

    if let Some(concept) = args.expand.and_then(|n| concepts.get(n.wrapping_sub(1))) {
        println!(
            "\n--- Full script prompt ({}) ---\n{}",
            args.language,
            scripts::build_full_script_prompt(concept, data, topic, args.language)
        );
    }
}

pub fn print_analysis_results(results: &[ReportAnalysis], args: &Args) -> Result<()> {
    let concepts = match &args.topic {
        Some(topic) => results
            .iter()
            .map(|result| scripts::generate_script_concepts(&result.data, topic))
            .collect::<Result<Vec<_>>>()?,
        None => Vec::new(),
    };

    match args.format {
        OutputFormat::Json => {
            let payload: Vec<serde_json::Value> = results
                .iter()
                .enumerate()
                .map(|(index, result)| -> Result<serde_json::Value, serde_json::Error> {
                    let mut value = serde_json::to_value(result)?;
                    if let Some(report_concepts) = concepts.get(index) {
                        value["scriptConcepts"] = serde_json::to_value(report_concepts)?;
                        if let Some(concept) =
                            args.expand.and_then(|n| report_concepts.get(n.wrapping_sub(1)))
                        {
                            let topic = args.topic.as_deref().unwrap_or_default();
                            value["fullScriptPrompt"] = serde_json::Value::String(
                                scripts::build_full_script_prompt(
                                    concept,
                                    &result.data,
                                    topic,
                                    args.language,
                                ),
                            );
                        }
                    }
                    Ok(value)
                })
                .collect::<Result<_, _>>()?;
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        OutputFormat::Text => {
            for (index, result) in results.iter().enumerate() {
                println!("\n--- Ad Report Analysis: {} ---", result.source);
                print_dashboard(&result.data);
                if let (Some(topic), Some(report_concepts)) = (&args.topic, concepts.get(index)) {
                    print_concepts(report_concepts, &result.data, args, topic);
                }
            }
        }
    }

    Ok(())
}
