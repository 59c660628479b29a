//! Command dispatch

use super::search::Selector;
use super::{Session, VideoPicker};
use crate::command::{Command, HELP_TEXT};
use crate::model::Catalog;

impl<C: Catalog, P: VideoPicker> Session<C, P> {
    /// Run one command and render its outcome as output lines.
    ///
    /// Rejected commands come back as their message; `Exit` produces nothing.
    pub fn execute<S: Selector + ?Sized>(
        &mut self,
        command: &Command,
        selector: &mut S,
    ) -> Vec<String> {
        let result = match command {
            Command::NumberOfVideos => self.number_of_videos(),
            Command::ShowAllVideos => self.show_all_videos(),
            Command::Play(video_id) => self.play(video_id),
            Command::PlayRandom => self.play_random(),
            Command::Stop => self.stop(),
            Command::Pause => self.pause(),
            Command::Continue => self.resume(),
            Command::ShowPlaying => self.show_playing(),
            Command::CreatePlaylist(name) => self.create_playlist(name),
            Command::AddToPlaylist { playlist, video_id } => {
                self.add_to_playlist(playlist, video_id)
            }
            Command::RemoveFromPlaylist { playlist, video_id } => {
                self.remove_from_playlist(playlist, video_id)
            }
            Command::ClearPlaylist(name) => self.clear_playlist(name),
            Command::DeletePlaylist(name) => self.delete_playlist(name),
            Command::ShowAllPlaylists => self.show_all_playlists(),
            Command::ShowPlaylist(name) => self.show_playlist(name),
            Command::Search(query) => self.search_and_select(query, selector),
            Command::Flag { video_id, reason } => self.flag(video_id, reason.as_deref()),
            Command::Allow(video_id) => self.allow(video_id),
            Command::Help => Ok(HELP_TEXT.lines().map(str::to_string).collect()),
            Command::Exit => Ok(Vec::new()),
        };

        match result {
            Ok(lines) => lines,
            Err(e) => {
                log::debug!("{:?} rejected ({:?}): {}", command, e.kind(), e);
                vec![e.to_string()]
            }
        }
    }
}
