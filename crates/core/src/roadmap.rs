//! Learning-roadmap progress.

use serde::{Deserialize, Serialize};

use crate::Time;

/// A topic marked complete inside a roadmap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletedTopic {
    /// Topic id (unique within the roadmap entry)
    pub topic_id: String,

    /// Human-readable topic title
    pub topic_title: String,

    /// When the topic was completed
    pub completed_at: Time,
}

/// Per-roadmap progress entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapProgress {
    /// Catalog id of the roadmap (unique within the record)
    pub roadmap_id: String,

    /// Human-readable roadmap title
    pub roadmap_title: String,

    /// When the user started this roadmap
    pub started_at: Time,

    /// Topics completed so far
    pub completed_topics: Vec<CompletedTopic>,

    /// Completion percentage, 0-100. Caller-supplied, never derived from
    /// the topic count.
    pub progress_percentage: f64,

    /// Whether the user is actively working this roadmap
    pub is_active: bool,
}

impl RoadmapProgress {
    /// Create a fresh entry, started now.
    pub fn started(roadmap_id: String, roadmap_title: String, started_at: Time) -> Self {
        Self {
            roadmap_id,
            roadmap_title,
            started_at,
            completed_topics: Vec::new(),
            progress_percentage: 0.0,
            is_active: true,
        }
    }

    /// Whether `topic_id` is already marked complete.
    pub fn has_topic(&self, topic_id: &str) -> bool {
        self.completed_topics.iter().any(|t| t.topic_id == topic_id)
    }
}
