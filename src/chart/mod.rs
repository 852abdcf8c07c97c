pub mod parser;
pub mod schema;

/// The published daily ranking for YouTube Vietnam.
pub const CHART_URL: &str = "https://kworb.net/youtube/insights/vn_daily.html";
