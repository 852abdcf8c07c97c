use crate::chart::schema::TrackTitle;
use crate::regex;
use crate::youtube::schema::{VideoDetails, VideoId};
use crate::youtube::VideoLookup;

pub const RESULTS_URL: &str = "https://www.youtube.com/results";

/// Keyless lookup that scrapes the first video id out of the results page.
/// The page inlines its data as JSON, so the first `"videoId":"..."` hit is
/// the top search result.
pub struct ScrapeLookup {
    client: reqwest::Client,
}

impl ScrapeLookup {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl VideoLookup for ScrapeLookup {
    async fn search_video(&self, title: &TrackTitle) -> anyhow::Result<Option<VideoId>> {
        let body = self
            .client
            .get(RESULTS_URL)
            .query(&[("search_query", title.as_str())])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(first_video_id_in_page(&body))
    }

    /// The results page exposes no stable thumbnails or view counts; details
    /// stay empty under this strategy.
    async fn video_details(&self, _id: &VideoId) -> anyhow::Result<Option<VideoDetails>> {
        Ok(None)
    }
}

fn first_video_id_in_page(body: &str) -> Option<VideoId> {
    regex!(r#""videoId":"([A-Za-z0-9_-]{11})""#)
        .captures(body)
        .map(|captures| captures[1].to_owned().into())
}
