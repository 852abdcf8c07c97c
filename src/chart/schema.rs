use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// The complete result of one run.  Serialized field names and order are the
/// published document layout; do not reorder.
#[derive(PartialEq, Eq, Debug, TypedBuilder, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub chart_date: String,
    #[serde(rename = "last_updated")]
    #[builder(default = "Unknown".to_owned())]
    pub fetched_at: String,
    pub note: String,
    #[serde(rename = "data")]
    pub records: Vec<ChartRecord>,
}

/// One ranked track.  Every field stays a string, digits included; the source
/// table is the authority and we do not reinterpret it.
#[derive(Clone, PartialEq, Eq, Debug, TypedBuilder, Serialize, Deserialize)]
pub struct ChartRecord {
    pub position: String,
    pub position_change: String,
    pub track: TrackTitle,
    pub streams: String,
    pub streams_change: String,
    #[builder(default)]
    pub youtube_link: String,
    #[builder(default)]
    pub thumbnail_url: String,
    #[builder(default)]
    pub view_count: String,
    /// Placeholder kept in the document layout; nothing populates it.
    #[builder(default)]
    pub affiliate_link: String,
}

#[derive(
    Clone, PartialEq, Eq, Debug, derive_more::From, derive_more::Display, Serialize, Deserialize,
)]
pub struct TrackTitle(String);

impl TrackTitle {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::{ChartRecord, ChartSnapshot};

    fn sample_snapshot() -> ChartSnapshot {
        ChartSnapshot::builder()
            .chart_date("28/08/2025".to_owned())
            .fetched_at("Thu, 28 Aug 2025 01:23:45 GMT".to_owned())
            .note("Showing streams in the past two days.".to_owned())
            .records(vec![ChartRecord::builder()
                .position("1".to_owned())
                .position_change("+1".to_owned())
                .track("Nơi Này Có Anh".to_owned().into())
                .streams("1234567".to_owned())
                .streams_change("12345".to_owned())
                .youtube_link("https://www.youtube.com/watch?v=FN7ALfpGxiI".to_owned())
                .build()])
            .build()
    }

    #[test]
    fn serializes_with_published_field_layout() {
        let json = serde_json::to_string_pretty(&sample_snapshot()).unwrap();
        let keys = ["\"chart_date\"", "\"last_updated\"", "\"note\"", "\"data\""];
        let positions: Vec<_> = keys.iter().map(|k| json.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{json}");
        // Non-ASCII titles must stay unescaped.
        assert!(json.contains("Nơi Này Có Anh"), "{json}");
        assert!(json.contains("  \"chart_date\""), "expected two-space indent");
    }

    #[test]
    fn round_trips_through_json() {
        let snapshot = sample_snapshot();
        let json = serde_json::to_string_pretty(&snapshot).unwrap();
        let deserialized: ChartSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, deserialized);
    }

    #[test]
    fn enrichment_fields_default_to_empty() {
        let record = ChartRecord::builder()
            .position("1".to_owned())
            .position_change("0".to_owned())
            .track("Song A".to_owned().into())
            .streams("1000".to_owned())
            .streams_change(String::new())
            .build();
        assert_eq!(record.youtube_link, "");
        assert_eq!(record.thumbnail_url, "");
        assert_eq!(record.view_count, "");
        assert_eq!(record.affiliate_link, "");
    }
}
