use serde::Deserialize;

#[derive(Clone, PartialEq, Eq, Debug, derive_more::From, derive_more::Display)]
pub struct VideoId(String);

impl VideoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The two fields the details lookup contributes to a chart record.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct VideoDetails {
    pub thumbnail_url: String,
    pub view_count: String,
}

/// Response of `GET /youtube/v3/search`.  Every field the API might omit is
/// optional or defaulted; a malformed response degrades to "no match".
#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchItem {
    #[serde(default)]
    pub id: SearchItemId,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchItemId {
    #[serde(rename = "videoId")]
    pub video_id: Option<String>,
}

impl SearchResponse {
    pub fn first_video_id(self) -> Option<VideoId> {
        self.items
            .into_iter()
            .next()
            .and_then(|item| item.id.video_id)
            .map(Into::into)
    }
}

/// Response of `GET /youtube/v3/videos` with `part=snippet,statistics`.
#[derive(Debug, Default, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<VideoItem>,
}

#[derive(Debug, Default, Deserialize)]
pub struct VideoItem {
    #[serde(default)]
    pub snippet: Snippet,
    #[serde(default)]
    pub statistics: Statistics,
}

#[derive(Debug, Default, Deserialize)]
pub struct Snippet {
    #[serde(default)]
    pub thumbnails: Thumbnails,
}

#[derive(Debug, Default, Deserialize)]
pub struct Thumbnails {
    pub high: Option<Thumbnail>,
    pub medium: Option<Thumbnail>,
    pub default: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
pub struct Thumbnail {
    pub url: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct Statistics {
    #[serde(rename = "viewCount")]
    pub view_count: Option<String>,
}

impl VideoItem {
    /// Thumbnail preference is high, then medium, then default; the view count
    /// is "0" when the API withholds it.
    pub fn details(&self) -> VideoDetails {
        let thumbnails = &self.snippet.thumbnails;
        let thumbnail_url = [&thumbnails.high, &thumbnails.medium, &thumbnails.default]
            .into_iter()
            .find_map(|thumbnail| thumbnail.as_ref())
            .map(|thumbnail| thumbnail.url.clone())
            .unwrap_or_default();
        VideoDetails {
            thumbnail_url,
            view_count: self
                .statistics
                .view_count
                .clone()
                .unwrap_or_else(|| "0".to_owned()),
        }
    }
}
