//! YouTube Playlist Retrieval
//!
//! Paginated access to a playlist through the YouTube Data API v3.
//!
//! The API caps `playlistItems.list` at 50 items per page and signals
//! remaining pages with an opaque `nextPageToken`. The fetcher walks the
//! token chain sequentially and accumulates every item, in API order,
//! before any grouping happens.
//!
//! The page fetch itself sits behind the narrow [`PlaylistSource`] trait so
//! the pagination loop can run against a fake in tests, with
//! [`YouTubeClient`] as the real implementation.

pub mod client;
pub mod types;

// Re-exports for convenience
pub use client::{YouTubeClient, YouTubeError};
pub use types::YouTubeCredentials;

use async_trait::async_trait;

use crate::models::PlaylistVideo;

/// One page of playlist items plus the continuation token, if any
#[derive(Debug)]
pub struct PlaylistPage {
    pub videos: Vec<PlaylistVideo>,
    pub next_page_token: Option<String>,
}

/// Narrow interface over the paginated playlist listing
#[async_trait]
pub trait PlaylistSource: Send + Sync {
    /// Fetch one page, passing the continuation token from the previous
    /// call (`None` for the first page)
    async fn fetch_page(&self, page_token: Option<&str>)
        -> Result<PlaylistPage, YouTubeError>;
}

/// Drain the playlist by following continuation tokens.
///
/// Strictly sequential: each page request waits for the previous response.
/// Any page failure aborts the whole operation with no partial result and
/// no retry.
pub async fn collect_playlist_items(
    source: &dyn PlaylistSource,
) -> Result<Vec<PlaylistVideo>, YouTubeError> {
    let mut videos = Vec::new();
    let mut page_token: Option<String> = None;

    loop {
        let page = source.fetch_page(page_token.as_deref()).await?;
        videos.extend(page.videos);

        match page.next_page_token {
            Some(token) => page_token = Some(token),
            None => break,
        }
    }

    Ok(videos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn make_video(n: usize) -> PlaylistVideo {
        PlaylistVideo {
            video_id: format!("video{:03}", n),
            title: format!("Tutorial - Step {}", n),
            description: String::new(),
            thumbnail: None,
        }
    }

    /// Serves pre-built pages; continuation tokens are page indices
    struct FakeSource {
        pages: Vec<(Vec<PlaylistVideo>, Option<String>)>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl PlaylistSource for FakeSource {
        async fn fetch_page(
            &self,
            page_token: Option<&str>,
        ) -> Result<PlaylistPage, YouTubeError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let index: usize = match page_token {
                None => 0,
                Some(token) => token.parse().expect("fake token is an index"),
            };
            let (videos, next) = &self.pages[index];
            Ok(PlaylistPage {
                videos: videos.clone(),
                next_page_token: next.clone(),
            })
        }
    }

    struct FailingSource;

    #[async_trait]
    impl PlaylistSource for FailingSource {
        async fn fetch_page(
            &self,
            _page_token: Option<&str>,
        ) -> Result<PlaylistPage, YouTubeError> {
            Err(YouTubeError::Http(403))
        }
    }

    #[tokio::test]
    async fn test_collects_all_pages_in_order() {
        // 50 + 50 + 7 items across three pages
        let pages = vec![
            ((0..50).map(make_video).collect(), Some("1".to_string())),
            ((50..100).map(make_video).collect(), Some("2".to_string())),
            ((100..107).map(make_video).collect(), None),
        ];
        let source = FakeSource {
            pages,
            calls: AtomicUsize::new(0),
        };

        let videos = collect_playlist_items(&source).await.unwrap();

        assert_eq!(videos.len(), 107);
        assert_eq!(source.calls.load(Ordering::SeqCst), 3);
        assert_eq!(videos[0].video_id, "video000");
        assert_eq!(videos[49].video_id, "video049");
        assert_eq!(videos[50].video_id, "video050");
        assert_eq!(videos[106].video_id, "video106");
    }

    #[tokio::test]
    async fn test_single_page_without_token() {
        let pages = vec![((0..3).map(make_video).collect(), None)];
        let source = FakeSource {
            pages,
            calls: AtomicUsize::new(0),
        };

        let videos = collect_playlist_items(&source).await.unwrap();

        assert_eq!(videos.len(), 3);
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_page_failure_aborts_without_partial_result() {
        let result = collect_playlist_items(&FailingSource).await;
        assert!(matches!(result, Err(YouTubeError::Http(403))));
    }
}
