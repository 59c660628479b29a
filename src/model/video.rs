use serde::{Deserialize, Serialize};

/// A single video record in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    /// Unique identifier for this video
    pub id: String,

    /// Display title
    pub title: String,

    /// Author-defined tags, in the order they were declared
    pub tags: Vec<String>,
}

/// How tags are rendered inside the brackets of a video line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagStyle {
    /// `[#a, #b]`, used when listing the whole catalog
    Listing,

    /// `[#a #b]`, used for playback, playlists and search results
    Compact,
}

impl Video {
    pub fn new(id: impl Into<String>, title: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tags,
        }
    }

    /// Check whether the video carries exactly this tag
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Render as `title (id) [tags]`
    pub fn describe(&self, style: TagStyle) -> String {
        let separator = match style {
            TagStyle::Listing => ", ",
            TagStyle::Compact => " ",
        };
        format!("{} ({}) [{}]", self.title, self.id, self.tags.join(separator))
    }
}
