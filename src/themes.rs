use anyhow::{Context, Result};
use regex::{Regex, RegexBuilder};
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

use crate::stats::ThemeScore;

// Include default theme patterns at compile time
const DEFAULT_THEMES_BYTES: &[u8] = include_bytes!("../default_theme_patterns.txt");

pub const THEME_FILE: &str = "theme_patterns.txt";

const LOSING_PENALTY: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub pattern: Regex,
}

impl Theme {
    pub fn new(name: &str, pattern: &str) -> Result<Self> {
        let pattern = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .with_context(|| format!("Invalid pattern for theme '{}'", name))?;
        Ok(Self {
            name: name.to_string(),
            pattern,
        })
    }
}

fn parse_theme_line(line: &str) -> Result<Theme> {
    let (name, pattern) = line
        .split_once('=')
        .context("Expected '<theme name> = <pattern>'")?;
    let (name, pattern) = (name.trim(), pattern.trim());
    if name.is_empty() || pattern.is_empty() {
        anyhow::bail!("Theme name and pattern must both be non-empty");
    }
    Theme::new(name, pattern)
}

fn theme_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .map(|(line_num, line)| (line_num + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

/// Parses a theme file strictly: the first malformed line fails the load.
pub fn parse_theme_patterns(content: &str) -> Result<Vec<Theme>> {
    theme_lines(content)
        .map(|(line_num, line)| {
            parse_theme_line(line).with_context(|| format!("Invalid theme at line {}", line_num))
        })
        .collect()
}

fn parse_theme_patterns_lenient(content: &str, component: &str) -> Vec<Theme> {
    let mut themes = Vec::new();
    for (line_num, line) in theme_lines(content) {
        match parse_theme_line(line) {
            Ok(theme) => themes.push(theme),
            Err(e) => {
                warn!(action = "parse", component = component, line_number = line_num, error = %e, "Invalid theme pattern")
            }
        }
    }
    themes
}

pub fn default_themes() -> Result<Vec<Theme>> {
    let default_content = std::str::from_utf8(DEFAULT_THEMES_BYTES)
        .context("Failed to decode embedded default theme patterns")?;
    parse_theme_patterns(default_content)
}

pub fn load_theme_patterns(theme_file_path: Option<&Path>) -> Result<Vec<Theme>> {
    let start_time = Instant::now();
    info!(
        action = "start",
        component = "theme_loading",
        "Starting theme pattern loading"
    );

    let mut themes = Vec::new();

    if let Some(path) = theme_file_path {
        info!(action = "load", component = "theme_file", file_path = ?path, "Loading themes from specified file");
        if !path.exists() {
            anyhow::bail!("Theme file not found: {:?}", path);
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read theme file {:?}", path))?;
        themes = parse_theme_patterns(&content)?;
        if themes.is_empty() {
            anyhow::bail!("Theme file {:?} defines no themes", path);
        }
        info!(action = "loaded", component = "theme_file", theme_count = themes.len(), file_path = ?path, "Loaded themes from file");
    } else {
        let default_file = Path::new(THEME_FILE);
        if default_file.exists() {
            info!(action = "load", component = "default_theme_file", file_path = ?default_file, "Loading themes from default file");
            let content = fs::read_to_string(default_file)?;
            themes = parse_theme_patterns_lenient(&content, "default_theme_file");
            info!(action = "loaded", component = "default_theme_file", theme_count = themes.len(), file_path = ?default_file, "Loaded themes from default file");
        }

        // If no themes loaded, use embedded defaults
        if themes.is_empty() {
            info!(
                action = "load",
                component = "embedded_themes",
                "Using embedded default themes"
            );
            themes = default_themes()?;
        }
    }

    let load_time = start_time.elapsed();
    info!(
        action = "complete",
        component = "theme_loading",
        theme_count = themes.len(),
        duration_ms = load_time.as_millis(),
        "Successfully compiled themes"
    );
    Ok(themes)
}

pub fn init_default_themes() -> Result<()> {
    let default_file = Path::new(THEME_FILE);

    if default_file.exists() {
        anyhow::bail!(
            "{} already exists. Remove it first if you want to reinitialize.",
            THEME_FILE
        );
    }

    let default_content = std::str::from_utf8(DEFAULT_THEMES_BYTES)
        .context("Failed to decode embedded default theme patterns")?;

    fs::write(default_file, default_content)?;
    println!("Created {} with default themes", THEME_FILE);

    Ok(())
}

/// Scores every theme against the classified ads and keeps non-zero scores,
/// highest first. Equal scores keep catalogue order.
pub fn score_themes(themes: &[Theme], winning: &[String], losing: &[String]) -> Vec<ThemeScore> {
    let mut scores: Vec<ThemeScore> = themes
        .iter()
        .map(|theme| {
            let wins = winning.iter().filter(|ad| theme.pattern.is_match(ad)).count();
            let losses = losing.iter().filter(|ad| theme.pattern.is_match(ad)).count();
            ThemeScore {
                name: theme.name.clone(),
                count: wins as f64 - losses as f64 * LOSING_PENALTY,
            }
        })
        .collect();

    scores.retain(|score| score.count != 0.0);
    scores.sort_by(|a, b| b.count.total_cmp(&a.count));
    scores
}
