use crate::stats::NamedCount;

pub const IG_REELS: &str = "IG Reels";
pub const VIDEO_SALES: &str = "Video Sales (VS)";
pub const STATIC_PC: &str = "Static/PC";
pub const CAROUSEL: &str = "Carousel";

type FormatRule = (fn(&str) -> bool, &'static str);

fn is_ig_reel(line: &str) -> bool {
    line.contains("ig") && line.contains("reel")
}

fn is_video_sales(line: &str) -> bool {
    line.contains("vs")
}

fn is_static(line: &str) -> bool {
    line.contains("pc") || line.contains("static")
}

fn is_carousel(line: &str) -> bool {
    line.contains("carousel")
}

// Evaluated in order against the lower-cased line; first match wins.
const FORMAT_RULES: &[FormatRule] = &[
    (is_ig_reel, IG_REELS),
    (is_video_sales, VIDEO_SALES),
    (is_static, STATIC_PC),
    (is_carousel, CAROUSEL),
];

pub fn classify_format(line: &str) -> Option<&'static str> {
    let lowered = line.to_lowercase();
    FORMAT_RULES
        .iter()
        .find(|(matches, _)| matches(lowered.as_str()))
        .map(|(_, label)| *label)
}

/// Buckets winning ads by format, dropping empty buckets.
pub fn count_formats<'a, I>(lines: I) -> Vec<NamedCount>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut counts: Vec<NamedCount> = FORMAT_RULES
        .iter()
        .map(|(_, label)| NamedCount {
            name: label.to_string(),
            count: 0,
        })
        .collect();

    for line in lines {
        if let Some(label) = classify_format(line) {
            if let Some(bucket) = counts.iter_mut().find(|bucket| bucket.name == label) {
                bucket.count += 1;
            }
        }
    }

    counts.retain(|bucket| bucket.count > 0);
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}
