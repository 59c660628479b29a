//! Video catalog loading
//!
//! Reads the plain-text catalog file and builds the in-memory `Library`
//! that sessions look videos up in.

mod parser;

pub use parser::{parse_catalog, read_videos};

use crate::model::Library;
use anyhow::Result;
use std::path::Path;

/// Load a complete library from a catalog file
///
/// Later records whose ID was already seen are dropped.
pub fn load_library(path: &Path) -> Result<Library> {
    log::info!("Loading video catalog from {:?}", path);
    let videos = parse_catalog(path)?;

    let mut library = Library::new();
    for video in videos {
        let id = video.id.clone();
        if !library.add_video(video) {
            log::warn!("Duplicate video ID in catalog, keeping first: {}", id);
        }
    }

    log::info!("Loaded library: {} videos", library.video_count());
    Ok(library)
}
