//! Playlist management
//!
//! Playlists are keyed by their lowercased name; messages echo the name the
//! way the caller typed it.

use super::error::{CommandError, CommandResult, Reason};
use super::{Session, VideoPicker};
use crate::model::{Catalog, Playlist, TagStyle};
use std::collections::btree_map::Entry;

impl<C: Catalog, P: VideoPicker> Session<C, P> {
    /// Create a new empty playlist
    pub fn create_playlist(&mut self, name: &str) -> CommandResult {
        match self.playlists.entry(Playlist::normalize_name(name)) {
            Entry::Occupied(_) => Err(CommandError::rejected(
                "create playlist",
                Reason::DuplicatePlaylist,
            )),
            Entry::Vacant(slot) => {
                slot.insert(Playlist::new(name));
                log::debug!("Created playlist {:?}", name);
                Ok(vec![format!("Successfully created new playlist: {}", name)])
            }
        }
    }

    /// Append a video to a playlist
    pub fn add_to_playlist(&mut self, name: &str, video_id: &str) -> CommandResult {
        let action = || format!("add video to {}", name);

        let playlist = self
            .playlists
            .get_mut(&Playlist::normalize_name(name))
            .ok_or_else(|| CommandError::rejected(action(), Reason::PlaylistNotFound))?;
        let video = self
            .catalog
            .get(video_id)
            .ok_or_else(|| CommandError::rejected(action(), Reason::VideoNotFound))?;

        if !playlist.add_video(video_id) {
            return Err(CommandError::rejected(action(), Reason::AlreadyInPlaylist));
        }

        log::debug!("Added {} to playlist {:?}", video_id, playlist.name);
        Ok(vec![format!("Added video to {}: {}", name, video.title)])
    }

    /// Remove a video from a playlist
    pub fn remove_from_playlist(&mut self, name: &str, video_id: &str) -> CommandResult {
        let action = || format!("remove video from {}", name);

        let playlist = self
            .playlists
            .get_mut(&Playlist::normalize_name(name))
            .ok_or_else(|| CommandError::rejected(action(), Reason::PlaylistNotFound))?;
        let video = self
            .catalog
            .get(video_id)
            .ok_or_else(|| CommandError::rejected(action(), Reason::VideoNotFound))?;

        if !playlist.remove_video(video_id) {
            return Err(CommandError::rejected(action(), Reason::NotInPlaylist));
        }

        log::debug!("Removed {} from playlist {:?}", video_id, playlist.name);
        Ok(vec![format!("Removed video from {}: {}", name, video.title)])
    }

    /// Remove every video from a playlist
    pub fn clear_playlist(&mut self, name: &str) -> CommandResult {
        let playlist = self
            .playlists
            .get_mut(&Playlist::normalize_name(name))
            .ok_or_else(|| {
                CommandError::rejected(format!("clear playlist {}", name), Reason::PlaylistNotFound)
            })?;

        playlist.clear();
        Ok(vec![format!("Successfully removed all videos from {}", name)])
    }

    /// Delete a playlist entirely
    pub fn delete_playlist(&mut self, name: &str) -> CommandResult {
        match self.playlists.remove(&Playlist::normalize_name(name)) {
            Some(removed) => {
                log::debug!("Deleted playlist {:?}", removed.name);
                Ok(vec![format!("Deleted playlist: {}", name)])
            }
            None => Err(CommandError::rejected(
                format!("delete playlist {}", name),
                Reason::PlaylistNotFound,
            )),
        }
    }

    /// List the names of all playlists
    pub fn show_all_playlists(&self) -> CommandResult {
        if self.playlists.is_empty() {
            return Ok(vec!["No playlists exist yet".to_string()]);
        }

        let mut lines = Vec::with_capacity(self.playlists.len() + 1);
        lines.push("Showing all playlists:".to_string());
        lines.extend(self.playlists.values().map(|p| p.name.clone()));
        Ok(lines)
    }

    /// List the videos of one playlist in order
    pub fn show_playlist(&self, name: &str) -> CommandResult {
        let playlist = self.playlist(name).ok_or_else(|| {
            CommandError::rejected(format!("show playlist {}", name), Reason::PlaylistNotFound)
        })?;

        let mut lines = vec![format!("Showing playlist: {}", name)];
        if playlist.is_empty() {
            lines.push("No videos here yet".to_string());
        } else {
            lines.extend(playlist.videos().iter().map(|id| match self.catalog.get(id) {
                Some(video) => video.describe(TagStyle::Compact),
                None => id.clone(),
            }));
        }
        Ok(lines)
    }
}
