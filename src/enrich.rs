use std::time::Duration;

use log::{debug, error, info, warn};
use tokio::time::sleep;

use crate::chart::schema::ChartRecord;
use crate::youtube::{watch_url, VideoLookup};

#[derive(Clone, Copy, Debug)]
pub struct EnrichOptions {
    pub fetch_details: bool,
    pub delay: Duration,
}

/// Fills the enrichment fields of each record in place.  Per-record failures
/// are logged and leave that record's fields at their empty defaults; this
/// function never fails the run.
pub async fn enrich_records<L: VideoLookup>(
    lookup: &L,
    records: &mut [ChartRecord],
    options: &EnrichOptions,
) {
    let mut looked_up_any = false;
    for (index, record) in records.iter_mut().enumerate() {
        if record.track.as_str().is_empty() {
            warn!("Row {}: empty track title, skipping lookup", index + 1);
            continue;
        }
        if looked_up_any {
            // Courtesy pause between lookups; the quota is shared.
            sleep(options.delay).await;
        }
        looked_up_any = true;
        enrich_record(lookup, record, options).await;
    }
}

async fn enrich_record<L: VideoLookup>(
    lookup: &L,
    record: &mut ChartRecord,
    options: &EnrichOptions,
) {
    let video_id = match lookup.search_video(&record.track).await {
        Ok(Some(id)) => id,
        Ok(None) => {
            info!("No video found for {}", record.track);
            return;
        }
        Err(e) => {
            error!("Search failed for {}: {e:#}", record.track);
            return;
        }
    };
    record.youtube_link = watch_url(&video_id);
    if !options.fetch_details {
        return;
    }
    match lookup.video_details(&video_id).await {
        Ok(Some(details)) => {
            record.thumbnail_url = details.thumbnail_url;
            record.view_count = details.view_count;
        }
        Ok(None) => debug!("No details available for {video_id}"),
        Err(e) => error!("Details lookup failed for {video_id}: {e:#}"),
    }
}
