//! Turns pasted ad-performance report text into [`ParsedData`].
//!
//! Analysis is pure and total: any string produces a result, and degenerate
//! input simply yields empty lists and zeroed stats.

use regex::Regex;
use std::sync::OnceLock;

use crate::formats;
use crate::keywords;
use crate::stats::{NamedCount, ParsedData, ReportStats};
use crate::themes::{self, Theme};

pub const DATE_RANGE_UNSPECIFIED: &str = "Not specified";

/// Audience split shown alongside every report. Not derived from the input.
pub const PLACEHOLDER_AUDIENCES: [(&str, u32); 4] = [
    ("Parents", 35),
    ("Homemakers", 25),
    ("Coaching Interests", 20),
    ("Cold Audience", 20),
];

const WINNING_HEADERS: &[&str] = &["winning ads", "potential winning"];
const LOSING_HEADERS: &[&str] = &["underperforming", "losing"];

fn duration_pattern() -> &'static Regex {
    static DURATION: OnceLock<Regex> = OnceLock::new();
    DURATION.get_or_init(|| {
        Regex::new(r"(?i)Duration:\s*([^\n]+)").expect("duration regex is valid")
    })
}

fn ad_line_pattern() -> &'static Regex {
    static AD_LINE: OnceLock<Regex> = OnceLock::new();
    AD_LINE.get_or_init(|| Regex::new(r"(?i)^(VS|IG|PC|Reel)").expect("ad line regex is valid"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Winning,
    Losing,
}

const BYTE_ORDER_MARK: char = '\u{feff}';

fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK)
}

pub fn segment_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(trim_line)
        .filter(|line| !line.is_empty())
        .collect()
}

pub fn extract_date_range(text: &str) -> String {
    duration_pattern()
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|range| range.as_str().trim().to_string())
        .unwrap_or_else(|| DATE_RANGE_UNSPECIFIED.to_string())
}

/// Splits ad lines into (winning, losing) by the section header they follow.
///
/// Header lines switch sections and are never recorded themselves, even when
/// they also start with an ad prefix. Ad lines outside any section are dropped.
pub fn classify_ads(lines: &[&str]) -> (Vec<String>, Vec<String>) {
    let mut winning = Vec::new();
    let mut losing = Vec::new();
    let mut section = Section::None;

    for line in lines {
        let lowered = line.to_lowercase();
        if WINNING_HEADERS.iter().any(|header| lowered.contains(header)) {
            section = Section::Winning;
        } else if LOSING_HEADERS.iter().any(|header| lowered.contains(header)) {
            section = Section::Losing;
        } else if ad_line_pattern().is_match(line) {
            match section {
                Section::Winning => winning.push(line.to_string()),
                Section::Losing => losing.push(line.to_string()),
                Section::None => {}
            }
        }
    }

    (winning, losing)
}

pub fn placeholder_audiences() -> Vec<NamedCount> {
    PLACEHOLDER_AUDIENCES
        .iter()
        .map(|(name, count)| NamedCount {
            name: name.to_string(),
            count: *count,
        })
        .collect()
}

pub fn win_rate(total_winning: usize, total_losing: usize) -> u32 {
    let total = total_winning + total_losing;
    if total == 0 {
        return 0;
    }
    (total_winning as f64 / total as f64 * 100.0).round() as u32
}

/// Report analyzer bound to a theme catalogue.
#[derive(Debug, Clone)]
pub struct Analyzer {
    themes: Vec<Theme>,
}

impl Analyzer {
    pub fn new(themes: Vec<Theme>) -> Self {
        Self { themes }
    }

    pub fn analyze(&self, text: &str) -> ParsedData {
        let lines = segment_lines(text);
        let date_range = extract_date_range(text);
        let (winning_ads, losing_ads) = classify_ads(&lines);

        let keywords = keywords::top_keywords(keywords::count_keywords(&winning_ads));
        let themes = themes::score_themes(&self.themes, &winning_ads, &losing_ads);
        let formats = formats::count_formats(&winning_ads);

        let stats = ReportStats {
            total_winning: winning_ads.len(),
            total_losing: losing_ads.len(),
            win_rate: win_rate(winning_ads.len(), losing_ads.len()),
            date_range,
        };

        ParsedData {
            winning_ads,
            losing_ads,
            audiences: placeholder_audiences(),
            keywords,
            formats,
            themes,
            stats,
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(themes::default_themes().expect("embedded theme patterns are valid"))
    }
}

fn default_analyzer() -> &'static Analyzer {
    static DEFAULT: OnceLock<Analyzer> = OnceLock::new();
    DEFAULT.get_or_init(Analyzer::default)
}

/// Analyzes report text with the built-in theme catalogue.
pub fn analyze_report(text: &str) -> ParsedData {
    default_analyzer().analyze(text)
}
