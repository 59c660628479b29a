//! Playback control and catalog views

use super::error::{CommandError, CommandResult, Reason};
use super::{NowPlaying, Session, VideoPicker};
use crate::model::{Catalog, TagStyle, Video};

impl<C: Catalog, P: VideoPicker> Session<C, P> {
    /// Report how many videos the catalog holds
    pub fn number_of_videos(&self) -> CommandResult {
        Ok(vec![format!("{} videos in the library", self.catalog.list().len())])
    }

    /// List every video in the catalog, sorted by title
    pub fn show_all_videos(&self) -> CommandResult {
        let mut videos: Vec<&Video> = self.catalog.list().iter().collect();
        videos.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.id.cmp(&b.id)));

        let mut lines = Vec::with_capacity(videos.len() + 1);
        lines.push("Here's a list of all available videos:".to_string());
        lines.extend(videos.iter().map(|v| v.describe(TagStyle::Listing)));
        Ok(lines)
    }

    /// Start playing a video, stopping whatever was in the slot.
    ///
    /// Playing the video that is already playing restarts it.
    pub fn play(&mut self, video_id: &str) -> CommandResult {
        let title = match self.catalog.get(video_id) {
            Some(video) => video.title.clone(),
            None => {
                return Err(CommandError::rejected("play video", Reason::VideoNotFound));
            }
        };

        let mut lines = Vec::with_capacity(2);
        if let Some(previous) = self.now_playing.take() {
            lines.push(format!("Stopping video: {}", self.title_of(&previous.video_id)));
        }

        log::debug!("Now playing {}", video_id);
        self.now_playing = Some(NowPlaying {
            video_id: video_id.to_string(),
            paused: false,
        });
        lines.push(format!("Playing video: {}", title));
        Ok(lines)
    }

    /// Stop the current video
    pub fn stop(&mut self) -> CommandResult {
        let current = self
            .now_playing
            .take()
            .ok_or_else(|| CommandError::rejected("stop video", Reason::NothingPlaying))?;

        log::debug!("Stopped {}", current.video_id);
        Ok(vec![format!("Stopping video: {}", self.title_of(&current.video_id))])
    }

    /// Play a video chosen by the session's picker
    pub fn play_random(&mut self) -> CommandResult {
        let videos = self.catalog.list();
        let chosen = self
            .picker
            .pick(videos.len())
            .and_then(|index| videos.get(index))
            .map(|video| video.id.clone());

        match chosen {
            Some(video_id) => self.play(&video_id),
            None => Ok(vec!["No videos available".to_string()]),
        }
    }

    /// Pause the current video
    pub fn pause(&mut self) -> CommandResult {
        let current = self
            .now_playing
            .as_mut()
            .ok_or_else(|| CommandError::rejected("pause video", Reason::NothingPlaying))?;

        if current.paused {
            let video_id = current.video_id.clone();
            return Err(CommandError::AlreadyPaused {
                title: self.title_of(&video_id).to_string(),
            });
        }

        current.paused = true;
        let video_id = current.video_id.clone();
        log::debug!("Paused {}", video_id);
        Ok(vec![format!("Pausing video: {}", self.title_of(&video_id))])
    }

    /// Resume a paused video
    pub fn resume(&mut self) -> CommandResult {
        let current = self
            .now_playing
            .as_mut()
            .ok_or_else(|| CommandError::rejected("continue video", Reason::NothingPlaying))?;

        if !current.paused {
            return Err(CommandError::rejected("continue video", Reason::NotPaused));
        }

        current.paused = false;
        let video_id = current.video_id.clone();
        log::debug!("Resumed {}", video_id);
        Ok(vec![format!("Continuing video: {}", self.title_of(&video_id))])
    }

    /// Describe the video in the playback slot
    pub fn show_playing(&self) -> CommandResult {
        let line = match &self.now_playing {
            Some(current) => {
                let description = match self.catalog.get(&current.video_id) {
                    Some(video) => video.describe(TagStyle::Compact),
                    None => current.video_id.clone(),
                };
                if current.paused {
                    format!("Currently playing: {} - PAUSED", description)
                } else {
                    format!("Currently playing: {}", description)
                }
            }
            None => "No video is currently playing".to_string(),
        };
        Ok(vec![line])
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{Library, Video};
    use crate::session::{CommandError, ErrorKind, FixedPicker, Reason, Session};

    fn library() -> Library {
        [
            Video::new(
                "amazing_cats_video_id",
                "Amazing Cats",
                vec!["#cat".to_string(), "#animal".to_string()],
            ),
            Video::new(
                "funny_dogs_video_id",
                "Funny Dogs",
                vec!["#dog".to_string(), "#animal".to_string()],
            ),
            Video::new("life_at_google_video_id", "Life at Google", Vec::new()),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_play_pause_resume_scenario() {
        let lib = library();
        let mut session = Session::new(&lib);

        assert_eq!(
            session.play("amazing_cats_video_id").unwrap(),
            ["Playing video: Amazing Cats"]
        );
        assert_eq!(session.pause().unwrap(), ["Pausing video: Amazing Cats"]);
        assert_eq!(
            session.pause().unwrap_err().to_string(),
            "Video already paused: Amazing Cats"
        );
        assert_eq!(session.resume().unwrap(), ["Continuing video: Amazing Cats"]);
    }

    #[test]
    fn test_play_stops_previous_video() {
        let lib = library();
        let mut session = Session::new(&lib);
        session.play("amazing_cats_video_id").unwrap();
        session.pause().unwrap();

        assert_eq!(
            session.play("funny_dogs_video_id").unwrap(),
            ["Stopping video: Amazing Cats", "Playing video: Funny Dogs"]
        );
        let current = session.now_playing().unwrap();
        assert_eq!(current.video_id, "funny_dogs_video_id");
        assert!(!current.paused);
    }

    #[test]
    fn test_replaying_same_video_restarts_it() {
        let lib = library();
        let mut session = Session::new(&lib);
        session.play("funny_dogs_video_id").unwrap();

        assert_eq!(
            session.play("funny_dogs_video_id").unwrap(),
            ["Stopping video: Funny Dogs", "Playing video: Funny Dogs"]
        );
    }

    #[test]
    fn test_play_unknown_video_keeps_state() {
        let lib = library();
        let mut session = Session::new(&lib);
        session.play("funny_dogs_video_id").unwrap();

        let err = session.play("nope").unwrap_err();
        assert_eq!(err.to_string(), "Cannot play video: Video does not exist");
        assert_eq!(err.kind(), ErrorKind::ReferenceNotFound);
        assert_eq!(session.now_playing().unwrap().video_id, "funny_dogs_video_id");
    }

    #[test]
    fn test_stop() {
        let lib = library();
        let mut session = Session::new(&lib);

        assert_eq!(
            session.stop().unwrap_err().to_string(),
            "Cannot stop video: No video is currently playing"
        );

        session.play("amazing_cats_video_id").unwrap();
        session.pause().unwrap();
        assert_eq!(session.stop().unwrap(), ["Stopping video: Amazing Cats"]);
        assert!(session.now_playing().is_none());
    }

    #[test]
    fn test_pause_and_resume_without_video() {
        let lib = library();
        let mut session = Session::new(&lib);

        assert_eq!(
            session.pause().unwrap_err().to_string(),
            "Cannot pause video: No video is currently playing"
        );
        assert_eq!(
            session.resume().unwrap_err().to_string(),
            "Cannot continue video: No video is currently playing"
        );
    }

    #[test]
    fn test_resume_when_not_paused() {
        let lib = library();
        let mut session = Session::new(&lib);
        session.play("amazing_cats_video_id").unwrap();

        let err = session.resume().unwrap_err();
        assert_eq!(err.to_string(), "Cannot continue video: Video is not paused");
        assert_eq!(err.reason(), Some(Reason::NotPaused));
    }

    #[test]
    fn test_show_playing() {
        let lib = library();
        let mut session = Session::new(&lib);
        assert_eq!(session.show_playing().unwrap(), ["No video is currently playing"]);

        session.play("amazing_cats_video_id").unwrap();
        assert_eq!(
            session.show_playing().unwrap(),
            ["Currently playing: Amazing Cats (amazing_cats_video_id) [#cat #animal]"]
        );

        session.pause().unwrap();
        assert_eq!(
            session.show_playing().unwrap(),
            ["Currently playing: Amazing Cats (amazing_cats_video_id) [#cat #animal] - PAUSED"]
        );

        session.play("life_at_google_video_id").unwrap();
        assert_eq!(
            session.show_playing().unwrap(),
            ["Currently playing: Life at Google (life_at_google_video_id) []"]
        );
    }

    #[test]
    fn test_play_random_uses_picker() {
        let lib = library();
        let mut session = Session::with_picker(&lib, FixedPicker(1));
        assert_eq!(session.play_random().unwrap(), ["Playing video: Funny Dogs"]);
    }

    #[test]
    fn test_play_random_on_empty_catalog() {
        let lib = Library::new();
        let mut session = Session::new(&lib);
        assert_eq!(session.play_random().unwrap(), ["No videos available"]);
        assert!(session.now_playing().is_none());
    }

    #[test]
    fn test_catalog_views() {
        let lib = library();
        let session = Session::new(&lib);

        assert_eq!(session.number_of_videos().unwrap(), ["3 videos in the library"]);
        assert_eq!(
            session.show_all_videos().unwrap(),
            [
                "Here's a list of all available videos:",
                "Amazing Cats (amazing_cats_video_id) [#cat, #animal]",
                "Funny Dogs (funny_dogs_video_id) [#dog, #animal]",
                "Life at Google (life_at_google_video_id) []",
            ]
        );
    }

    #[test]
    fn test_rejections_are_command_errors() {
        let lib = library();
        let mut session = Session::new(&lib);
        assert!(matches!(
            session.stop(),
            Err(CommandError::Rejected {
                reason: Reason::NothingPlaying,
                ..
            })
        ));
    }
}
