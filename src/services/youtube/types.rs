//! YouTube Data API v3 Types
//!
//! Type definitions for the subset of `playlistItems.list` and the OAuth2
//! token endpoint that the fetcher consumes.

use serde::{Deserialize, Serialize};

use crate::models::PlaylistVideo;

/// OAuth2 credential material for the refresh-token grant
#[derive(Debug, Clone)]
pub struct YouTubeCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
}

/// Response from the Google OAuth2 token endpoint
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    /// Lifetime of the access token in seconds
    #[serde(default)]
    pub expires_in: Option<u64>,
}

/// One page of `playlistItems.list` results
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemsPage {
    #[serde(default)]
    pub items: Vec<PlaylistItemResource>,
    pub next_page_token: Option<String>,
}

/// A playlistItem resource (snippet part only)
#[derive(Debug, Deserialize)]
pub struct PlaylistItemResource {
    pub snippet: Snippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub resource_id: ResourceId,
    #[serde(default)]
    pub thumbnails: Thumbnails,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceId {
    pub video_id: String,
}

/// Thumbnail variants keyed by resolution. Private and deleted videos
/// come back with no thumbnails at all.
#[derive(Debug, Default, Deserialize)]
pub struct Thumbnails {
    pub default: Option<Thumbnail>,
    pub medium: Option<Thumbnail>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Thumbnail {
    pub url: String,
}

impl Thumbnails {
    /// Prefer the medium resolution, fall back to default
    pub fn preferred_url(&self) -> Option<String> {
        self.medium
            .as_ref()
            .or(self.default.as_ref())
            .map(|t| t.url.clone())
    }
}

impl From<PlaylistItemResource> for PlaylistVideo {
    fn from(item: PlaylistItemResource) -> Self {
        let thumbnail = item.snippet.thumbnails.preferred_url();
        Self {
            video_id: item.snippet.resource_id.video_id,
            title: item.snippet.title,
            description: item.snippet.description,
            thumbnail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thumbnail_prefers_medium() {
        let thumbs = Thumbnails {
            default: Some(Thumbnail {
                url: "https://i.ytimg.com/vi/a/default.jpg".to_string(),
            }),
            medium: Some(Thumbnail {
                url: "https://i.ytimg.com/vi/a/mqdefault.jpg".to_string(),
            }),
        };
        assert_eq!(
            thumbs.preferred_url().as_deref(),
            Some("https://i.ytimg.com/vi/a/mqdefault.jpg")
        );
    }

    #[test]
    fn test_thumbnail_falls_back_to_default() {
        let thumbs = Thumbnails {
            default: Some(Thumbnail {
                url: "https://i.ytimg.com/vi/a/default.jpg".to_string(),
            }),
            medium: None,
        };
        assert_eq!(
            thumbs.preferred_url().as_deref(),
            Some("https://i.ytimg.com/vi/a/default.jpg")
        );
    }

    #[test]
    fn test_thumbnail_absent_when_no_variants() {
        let thumbs = Thumbnails {
            default: None,
            medium: None,
        };
        assert!(thumbs.preferred_url().is_none());
    }

    #[test]
    fn test_deserialize_playlist_items_page() {
        let body = r#"{
            "kind": "youtube#playlistItemListResponse",
            "nextPageToken": "CDIQAA",
            "items": [
                {
                    "snippet": {
                        "title": "Rust Basics - Ownership",
                        "description": "Part one",
                        "resourceId": { "kind": "youtube#video", "videoId": "dQw4w9WgXcQ" },
                        "thumbnails": {
                            "default": { "url": "https://i.ytimg.com/vi/dQw4w9WgXcQ/default.jpg", "width": 120, "height": 90 },
                            "medium": { "url": "https://i.ytimg.com/vi/dQw4w9WgXcQ/mqdefault.jpg", "width": 320, "height": 180 }
                        }
                    }
                }
            ],
            "pageInfo": { "totalResults": 107, "resultsPerPage": 50 }
        }"#;

        let page: PlaylistItemsPage = serde_json::from_str(body).unwrap();
        assert_eq!(page.next_page_token.as_deref(), Some("CDIQAA"));
        assert_eq!(page.items.len(), 1);

        let video: PlaylistVideo = page.items.into_iter().next().unwrap().into();
        assert_eq!(video.video_id, "dQw4w9WgXcQ");
        assert_eq!(video.title, "Rust Basics - Ownership");
        assert_eq!(
            video.thumbnail.as_deref(),
            Some("https://i.ytimg.com/vi/dQw4w9WgXcQ/mqdefault.jpg")
        );
    }

    #[test]
    fn test_deserialize_item_without_description_or_thumbnails() {
        let body = r#"{
            "snippet": {
                "title": "Private video",
                "resourceId": { "kind": "youtube#video", "videoId": "xxxxxxxxxxx" }
            }
        }"#;

        let item: PlaylistItemResource = serde_json::from_str(body).unwrap();
        let video: PlaylistVideo = item.into();
        assert!(video.description.is_empty());
        assert!(video.thumbnail.is_none());
    }
}
