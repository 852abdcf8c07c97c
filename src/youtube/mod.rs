pub mod api;
pub mod schema;
pub mod scrape;

use crate::chart::schema::TrackTitle;
use self::schema::{VideoDetails, VideoId};

/// A way to resolve a track title to a video, and a video to its details.
/// Implemented by the Data API client and by the results-page scraper.
#[allow(async_fn_in_trait)]
pub trait VideoLookup {
    async fn search_video(&self, title: &TrackTitle) -> anyhow::Result<Option<VideoId>>;
    async fn video_details(&self, id: &VideoId) -> anyhow::Result<Option<VideoDetails>>;
}

pub fn watch_url(id: &VideoId) -> String {
    format!("https://www.youtube.com/watch?v={id}")
}
