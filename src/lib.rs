pub mod analyzer;
pub mod args;
pub mod formats;
pub mod keywords;
pub mod report;
pub mod scripts;
pub mod stats;
pub mod themes;
pub mod utils;

pub use analyzer::{analyze_report, Analyzer};
pub use args::Args;
pub use report::{analyze_reports, print_analysis_results};
pub use stats::{KeywordStat, NamedCount, ParsedData, ReportAnalysis, ReportStats, ThemeScore};
pub use themes::init_default_themes;
