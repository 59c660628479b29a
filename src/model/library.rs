use super::Video;
use std::collections::HashMap;
use std::sync::Arc;

/// Read-only source of video records
///
/// `list` must return the same order on every call so that a random pick
/// followed by a lookup sees a consistent view.
pub trait Catalog {
    /// All videos, in a stable order
    fn list(&self) -> &[Video];

    /// Point lookup by video ID
    fn get(&self, id: &str) -> Option<&Video>;
}

impl<C: Catalog + ?Sized> Catalog for &C {
    fn list(&self) -> &[Video] {
        (**self).list()
    }

    fn get(&self, id: &str) -> Option<&Video> {
        (**self).get(id)
    }
}

impl<C: Catalog + ?Sized> Catalog for Arc<C> {
    fn list(&self) -> &[Video] {
        (**self).list()
    }

    fn get(&self, id: &str) -> Option<&Video> {
        (**self).get(id)
    }
}

/// In-memory video catalog
#[derive(Debug, Clone, Default)]
pub struct Library {
    /// Videos in insertion order
    videos: Vec<Video>,

    /// Video ID -> position in `videos`
    index: HashMap<String, usize>,
}

impl Library {
    /// Create a new empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a video to the library.
    ///
    /// Returns false and leaves the library untouched if the ID is taken.
    pub fn add_video(&mut self, video: Video) -> bool {
        if self.index.contains_key(&video.id) {
            return false;
        }
        self.index.insert(video.id.clone(), self.videos.len());
        self.videos.push(video);
        true
    }

    /// Total number of videos
    pub fn video_count(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

impl Catalog for Library {
    fn list(&self) -> &[Video] {
        &self.videos
    }

    fn get(&self, id: &str) -> Option<&Video> {
        self.index.get(id).map(|&i| &self.videos[i])
    }
}

impl FromIterator<Video> for Library {
    fn from_iter<I: IntoIterator<Item = Video>>(iter: I) -> Self {
        let mut library = Library::new();
        for video in iter {
            library.add_video(video);
        }
        library
    }
}
