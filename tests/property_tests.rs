//! Property-based tests for the report analyzer using proptest
//!
//! Reports are assembled from section headers, ad lines and noise so the
//! invariants get exercised on realistic and degenerate shapes alike.

use adinsight::analyze_report;
use proptest::prelude::*;

const THEME_NAMES: &[&str] = &[
    "Family/Parenting",
    "Science/Logic",
    "Health/Healing",
    "Money/Wealth",
    "Distance/Convenience",
    "Emotional",
];

const FORMAT_NAMES: &[&str] = &["IG Reels", "Video Sales (VS)", "Static/PC", "Carousel"];

fn words_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("family".to_string()),
            Just("healing".to_string()),
            Just("money".to_string()),
            Just("remote".to_string()),
            Just("stress".to_string()),
            Just("science".to_string()),
            Just("carousel".to_string()),
            Just("static".to_string()),
            "[a-z]{1,9}",
        ],
        0..6,
    )
    .prop_map(|words| words.join(" "))
}

/// Generate a single report line
fn line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Winning Ads:".to_string()),
        Just("Potential Winning".to_string()),
        Just("Underperforming Ads:".to_string()),
        Just("Losing".to_string()),
        Just("Duration: Oct 1 to Oct 31".to_string()),
        (prop_oneof![Just("VS"), Just("IG Reel"), Just("PC"), Just("reel")], words_strategy())
            .prop_map(|(prefix, rest)| format!("{} {}", prefix, rest)),
        words_strategy(),
        Just(String::new()),
    ]
}

fn report_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(line_strategy(), 0..30).prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn stats_match_ad_lists(text in report_strategy()) {
        let data = analyze_report(&text);
        prop_assert_eq!(data.stats.total_winning, data.winning_ads.len());
        prop_assert_eq!(data.stats.total_losing, data.losing_ads.len());
    }

    #[test]
    fn win_rate_is_a_percentage(text in report_strategy()) {
        let data = analyze_report(&text);
        prop_assert!(data.stats.win_rate <= 100);
        if data.stats.total_winning + data.stats.total_losing == 0 {
            prop_assert_eq!(data.stats.win_rate, 0);
        }
    }

    #[test]
    fn keywords_are_bounded_and_sorted(text in report_strategy()) {
        let data = analyze_report(&text);
        prop_assert!(data.keywords.len() <= 8);
        for pair in data.keywords.windows(2) {
            prop_assert!(pair[0].count >= pair[1].count);
        }
        for keyword in &data.keywords {
            prop_assert!((1.0..=3.0).contains(&keyword.normalized_count));
        }
    }

    #[test]
    fn themes_are_known_nonzero_and_sorted(text in report_strategy()) {
        let data = analyze_report(&text);
        for theme in &data.themes {
            prop_assert!(THEME_NAMES.contains(&theme.name.as_str()));
            prop_assert!(theme.count != 0.0);
        }
        for pair in data.themes.windows(2) {
            prop_assert!(pair[0].count >= pair[1].count);
        }
    }

    #[test]
    fn formats_are_known_positive_and_sorted(text in report_strategy()) {
        let data = analyze_report(&text);
        let total: u32 = data.formats.iter().map(|f| f.count).sum();
        prop_assert!(total as usize <= data.winning_ads.len());
        for format in &data.formats {
            prop_assert!(FORMAT_NAMES.contains(&format.name.as_str()));
            prop_assert!(format.count > 0);
        }
        for pair in data.formats.windows(2) {
            prop_assert!(pair[0].count >= pair[1].count);
        }
    }

    #[test]
    fn analysis_is_deterministic(text in report_strategy()) {
        prop_assert_eq!(analyze_report(&text), analyze_report(&text));
    }

    #[test]
    fn arbitrary_text_never_panics(text in "\\PC{0,400}") {
        let data = analyze_report(&text);
        prop_assert_eq!(data.audiences.len(), 4);
    }
}
