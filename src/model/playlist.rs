use serde::{Deserialize, Serialize};

/// Represents a user playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Playlist name, casing preserved for display
    pub name: String,

    /// Video IDs in insertion order, no duplicates
    videos: Vec<String>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            videos: Vec::new(),
        }
    }

    /// Lookup key for a playlist name
    pub fn normalize_name(name: &str) -> String {
        name.to_lowercase()
    }

    /// Append a video. Returns false if it was already present.
    pub fn add_video(&mut self, video_id: &str) -> bool {
        if self.contains(video_id) {
            return false;
        }
        self.videos.push(video_id.to_string());
        true
    }

    /// Remove a video. Returns false if it was not present.
    pub fn remove_video(&mut self, video_id: &str) -> bool {
        match self.videos.iter().position(|id| id == video_id) {
            Some(index) => {
                self.videos.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, video_id: &str) -> bool {
        self.videos.iter().any(|id| id == video_id)
    }

    /// Remove every video, keeping the playlist itself
    pub fn clear(&mut self) {
        self.videos.clear();
    }

    /// Video IDs in playlist order
    pub fn videos(&self) -> &[String] {
        &self.videos
    }

    /// Number of videos in this playlist
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}
