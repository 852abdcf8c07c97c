use std::{
    fmt::Debug,
    io::{BufReader, BufWriter},
    path::PathBuf,
};

use anyhow::Context;
use fs_err::File;
use serde::{Deserialize, Serialize};

pub fn read_json<P: Into<PathBuf> + Debug, T: for<'de> Deserialize<'de>>(
    path: P,
) -> anyhow::Result<T> {
    let path = path.into();
    (|| serde_json::from_reader(BufReader::new(File::open(&path)?)).map_err(anyhow::Error::new))()
        .with_context(|| {
            format!(
                "While trying to parse {path:?} as {}",
                std::any::type_name::<T>()
            )
        })
}

/// Overwrites `path` unconditionally.  Two-space indentation, non-ASCII left
/// unescaped, matching the published document format.
pub fn write_json_pretty<P: Into<PathBuf>, T: Serialize>(path: P, value: &T) -> anyhow::Result<()> {
    Ok(serde_json::to_writer_pretty(
        BufWriter::new(File::create(path.into())?),
        value,
    )?)
}

#[cfg(test)]
mod tests {
    use crate::chart::schema::{ChartRecord, ChartSnapshot};

    use super::{read_json, write_json_pretty};

    #[test]
    fn snapshot_survives_a_file_round_trip() {
        let snapshot = ChartSnapshot::builder()
            .chart_date("28/08/2025".to_owned())
            .fetched_at("Thu, 28 Aug 2025 01:23:45 GMT".to_owned())
            .note("Showing streams in the past two days.".to_owned())
            .records(vec![ChartRecord::builder()
                .position("1".to_owned())
                .position_change("+1".to_owned())
                .track("Nơi Này Có Anh".to_owned().into())
                .streams("1234567".to_owned())
                .streams_change(String::new())
                .build()])
            .build();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("youtube_vn_daily.json");
        write_json_pretty(&path, &snapshot).unwrap();
        let read_back: ChartSnapshot = read_json(&path).unwrap();
        assert_eq!(snapshot, read_back);

        let raw = fs_err::read_to_string(&path).unwrap();
        assert!(raw.contains("Nơi Này Có Anh"), "{raw}");
    }

    #[test]
    fn write_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        write_json_pretty(&path, &vec!["old", "old", "old"]).unwrap();
        write_json_pretty(&path, &vec!["new"]).unwrap();
        let read_back: Vec<String> = read_json(&path).unwrap();
        assert_eq!(read_back, ["new"]);
    }
}
