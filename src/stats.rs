use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedCount {
    pub name: String,
    pub count: u32,
}

/// Theme score. Losing lines subtract half a point, so this is fractional.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeScore {
    pub name: String,
    pub count: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordStat {
    pub word: String,
    pub count: u32,
    /// Display weight in `[1, 3]`, rescaled over the selected keywords only.
    pub normalized_count: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportStats {
    pub total_winning: usize,
    pub total_losing: usize,
    pub win_rate: u32,
    pub date_range: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedData {
    pub winning_ads: Vec<String>,
    pub losing_ads: Vec<String>,
    pub audiences: Vec<NamedCount>,
    pub keywords: Vec<KeywordStat>,
    pub formats: Vec<NamedCount>,
    pub themes: Vec<ThemeScore>,
    pub stats: ReportStats,
}

impl ParsedData {
    /// Themes with a positive score, highest first.
    pub fn winning_themes(&self) -> impl Iterator<Item = &ThemeScore> {
        self.themes.iter().filter(|theme| theme.count > 0.0)
    }

    /// Themes dragged below zero by underperforming ads.
    pub fn losing_themes(&self) -> impl Iterator<Item = &ThemeScore> {
        self.themes.iter().filter(|theme| theme.count < 0.0)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportAnalysis {
    pub source: String,
    pub analyzed_at: DateTime<Utc>,
    pub data: ParsedData,
}
