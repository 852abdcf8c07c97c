use log::debug;

use crate::chart::schema::TrackTitle;
use crate::config::ApiKey;
use crate::youtube::schema::{SearchResponse, VideoDetails, VideoId, VideoItem, VideoListResponse};
use crate::youtube::VideoLookup;

pub const API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Thin client over the Data API v3 endpoints the pipeline needs.
pub struct YouTubeClient {
    client: reqwest::Client,
    api_key: ApiKey,
}

impl YouTubeClient {
    pub fn new(client: reqwest::Client, api_key: ApiKey) -> Self {
        Self { client, api_key }
    }
}

impl VideoLookup for YouTubeClient {
    async fn search_video(&self, title: &TrackTitle) -> anyhow::Result<Option<VideoId>> {
        let response: SearchResponse = self
            .client
            .get(format!("{API_BASE_URL}/search"))
            .query(&[
                ("part", "snippet"),
                ("q", title.as_str()),
                ("type", "video"),
                ("maxResults", "1"),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        let video_id = response.first_video_id();
        debug!("Search for {title}: {video_id:?}");
        Ok(video_id)
    }

    async fn video_details(&self, id: &VideoId) -> anyhow::Result<Option<VideoDetails>> {
        let response: VideoListResponse = self
            .client
            .get(format!("{API_BASE_URL}/videos"))
            .query(&[
                ("part", "snippet,statistics"),
                ("id", id.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(response.items.first().map(VideoItem::details))
    }
}
