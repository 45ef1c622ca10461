use std::collections::HashMap;

use crate::models::{PlaylistVideo, Step, Tutorial};

/// Literal separator between tutorial name and step title
/// ("Tutorial A - Step One")
const TITLE_SEPARATOR: &str = " - ";

/// Groups playlist videos into tutorials by title prefix
pub struct TutorialGrouper;

impl TutorialGrouper {
    /// Pure transform from an ordered video sequence to an ordered tutorial
    /// sequence. Tutorials appear in first-occurrence order of their name;
    /// steps keep the order they arrived in.
    pub fn group(videos: &[PlaylistVideo]) -> Vec<Tutorial> {
        let mut tutorials: Vec<Tutorial> = Vec::new();
        // HashMap alone would lose first-occurrence order, so the map only
        // tracks each name's slot in the output vector
        let mut index_by_name: HashMap<String, usize> = HashMap::new();

        for video in videos {
            let parts: Vec<&str> = video.title.split(TITLE_SEPARATOR).collect();

            if parts.len() >= 2 {
                let tutorial_name = parts[0].trim().to_string();
                // Rejoin so hyphens inside the step description survive
                let step_title = parts[1..].join(TITLE_SEPARATOR);

                let index = match index_by_name.get(&tutorial_name) {
                    Some(&index) => index,
                    None => {
                        index_by_name.insert(tutorial_name.clone(), tutorials.len());
                        tutorials.push(Tutorial {
                            title: tutorial_name,
                            videos: Vec::new(),
                        });
                        tutorials.len() - 1
                    }
                };

                let order = tutorials[index].videos.len() as u32 + 1;
                tutorials[index].videos.push(Step {
                    id: video.video_id.clone(),
                    title: step_title.trim().to_string(),
                    order,
                    original_title: video.title.clone(),
                    description: video.description.clone(),
                    thumbnail: video.thumbnail.clone(),
                });
            } else {
                // No separator: the video stands alone under its own name.
                // Assignment replaces any tutorial already held under that
                // name, keeping its slot in the output sequence.
                let tutorial = Tutorial {
                    title: video.title.clone(),
                    videos: vec![Step {
                        id: video.video_id.clone(),
                        title: video.title.clone(),
                        order: 1,
                        original_title: video.title.clone(),
                        description: video.description.clone(),
                        thumbnail: video.thumbnail.clone(),
                    }],
                };

                match index_by_name.get(&video.title) {
                    Some(&index) => tutorials[index] = tutorial,
                    None => {
                        index_by_name.insert(video.title.clone(), tutorials.len());
                        tutorials.push(tutorial);
                    }
                }
            }
        }

        // Pin presentation order; a no-op for the contiguous orders
        // assigned above
        for tutorial in &mut tutorials {
            tutorial.videos.sort_by_key(|step| step.order);
        }

        tutorials
    }
}
