use serde::{Deserialize, Serialize};

/// Single playlist entry after thumbnail resolution, in API order.
/// Built fresh per request from the upstream response; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistVideo {
    pub video_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

/// One video within a tutorial, positioned by `order`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub id: String,
    pub title: String,
    /// 1-based position assigned at insertion time
    pub order: u32,
    pub original_title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

/// Group of steps sharing a common title prefix
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tutorial {
    pub title: String,
    pub videos: Vec<Step>,
}

/// Response for GET /api/tutorials
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorialsResponse {
    pub success: bool,
    pub tutorials: Vec<Tutorial>,
    pub total_videos: usize,
    pub total_tutorials: usize,
}
