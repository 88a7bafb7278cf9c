use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::stats::KeywordStat;

pub const MAX_KEYWORDS: usize = 8;

const STOPWORDS: &[&str] = &[
    "the", "a", "an", "in", "on", "at", "to", "for", "of", "and", "is", "vs", "ig", "reel", "nov",
    "oct", "sep", "hf", "really", "should", "through", "with", "from", "what", "can", "like",
    "one", "how",
];

fn separator() -> &'static Regex {
    static SEPARATOR: OnceLock<Regex> = OnceLock::new();
    SEPARATOR.get_or_init(|| Regex::new(r"[^a-z0-9_]+").expect("separator regex is valid"))
}

/// Lower-cases a line and yields the tokens worth counting.
pub fn tokenize(line: &str) -> Vec<String> {
    let lowered = line.to_lowercase();
    separator()
        .split(&lowered)
        .filter(|word| word.chars().count() > 3 && !STOPWORDS.contains(word))
        .map(str::to_string)
        .collect()
}

/// Counts keyword frequencies across lines, keeping first-seen order.
pub fn count_keywords<'a, I>(lines: I) -> Vec<(String, u32)>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut counts: Vec<(String, u32)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for line in lines {
        for word in tokenize(line) {
            match index.get(&word) {
                Some(&slot) => counts[slot].1 += 1,
                None => {
                    index.insert(word.clone(), counts.len());
                    counts.push((word, 1));
                }
            }
        }
    }

    counts
}

/// Picks the most frequent keywords and rescales their counts into `[1, 3]`.
///
/// The sort is stable, so equal counts keep first-seen order. Min and max are
/// taken over the selected slice rather than the whole vocabulary.
pub fn top_keywords(mut counts: Vec<(String, u32)>) -> Vec<KeywordStat> {
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(MAX_KEYWORDS);

    let max = counts.first().map(|(_, count)| *count).unwrap_or(1);
    let min = counts.iter().map(|(_, count)| *count).min().unwrap_or(max);
    let spread = match max - min {
        0 => 1.0,
        spread => f64::from(spread),
    };

    counts
        .into_iter()
        .map(|(word, count)| KeywordStat {
            word,
            count,
            normalized_count: 1.0 + f64::from(count - min) / spread * 2.0,
        })
        .collect()
}
