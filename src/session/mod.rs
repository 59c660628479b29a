//! Playback session
//!
//! A `Session` owns the single playback slot, the user's playlists and the
//! moderation flags. Every command goes through it and reports what happened
//! as one or more lines of text; rejected commands never change state.

pub mod config;
pub mod error;
pub mod picker;

mod dispatch;
mod flags;
mod playback;
mod playlists;
mod search;

pub use config::{SessionConfig, DEFAULT_FLAG_REASON};
pub use error::{CommandError, CommandResult, ErrorKind, Reason};
pub use picker::{FixedPicker, RandomPicker, VideoPicker};
pub use search::{parse_choice, Decline, LineSelector, SearchQuery, SearchResults, Selector};

use crate::model::{Catalog, Playlist};
use std::collections::{BTreeMap, HashMap};

/// The video occupying the playback slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NowPlaying {
    pub video_id: String,
    pub paused: bool,
}

/// Command-driven playback session over a read-only catalog
pub struct Session<C, P = RandomPicker> {
    catalog: C,
    picker: P,
    config: SessionConfig,

    /// `None` means stopped; paused state only exists while something plays
    now_playing: Option<NowPlaying>,

    /// Normalized name -> playlist
    playlists: BTreeMap<String, Playlist>,

    /// Video ID -> flag reason
    flags: HashMap<String, String>,
}

impl<C: Catalog> Session<C> {
    /// Create a session that picks random videos with the thread RNG
    pub fn new(catalog: C) -> Self {
        Self::with_picker(catalog, RandomPicker::new())
    }
}

impl<C: Catalog, P: VideoPicker> Session<C, P> {
    /// Create a session with a custom random-video picker
    pub fn with_picker(catalog: C, picker: P) -> Self {
        Self {
            catalog,
            picker,
            config: SessionConfig::default(),
            now_playing: None,
            playlists: BTreeMap::new(),
            flags: HashMap::new(),
        }
    }

    /// Replace the session configuration
    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// What is in the playback slot, if anything
    pub fn now_playing(&self) -> Option<&NowPlaying> {
        self.now_playing.as_ref()
    }

    /// Look up a playlist by name, ignoring case
    pub fn playlist(&self, name: &str) -> Option<&Playlist> {
        self.playlists.get(&Playlist::normalize_name(name))
    }

    /// All playlists, ordered by normalized name
    pub fn playlists(&self) -> impl Iterator<Item = &Playlist> {
        self.playlists.values()
    }

    /// Title for a video ID, falling back to the ID itself
    fn title_of<'a>(&'a self, video_id: &'a str) -> &'a str {
        self.catalog
            .get(video_id)
            .map(|video| video.title.as_str())
            .unwrap_or(video_id)
    }
}
