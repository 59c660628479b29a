//! Command-line parsing for the interactive shell

use crate::session::SearchQuery;
use std::str::FromStr;
use thiserror::Error;

/// A single user command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NumberOfVideos,
    ShowAllVideos,
    Play(String),
    PlayRandom,
    Stop,
    Pause,
    Continue,
    ShowPlaying,
    CreatePlaylist(String),
    AddToPlaylist { playlist: String, video_id: String },
    RemoveFromPlaylist { playlist: String, video_id: String },
    ClearPlaylist(String),
    DeletePlaylist(String),
    ShowAllPlaylists,
    ShowPlaylist(String),
    Search(SearchQuery),
    Flag { video_id: String, reason: Option<String> },
    Allow(String),
    Help,
    Exit,
}

/// Why a line could not be turned into a command
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Please enter a valid command, type HELP for a list of available commands.")]
    Empty,

    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("{command} expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let keyword = words.next().ok_or(ParseError::Empty)?.to_uppercase();
        let args: Vec<&str> = words.collect();

        let arg = |index: usize, command: &'static str, expected: &'static str| {
            args.get(index)
                .map(|s| s.to_string())
                .ok_or(ParseError::MissingArgument { command, expected })
        };

        let command = match keyword.as_str() {
            "NUMBER_OF_VIDEOS" => Command::NumberOfVideos,
            "SHOW_ALL_VIDEOS" => Command::ShowAllVideos,
            "PLAY" => Command::Play(arg(0, "PLAY", "a video id")?),
            "PLAY_RANDOM" => Command::PlayRandom,
            "STOP" => Command::Stop,
            "PAUSE" => Command::Pause,
            "CONTINUE" => Command::Continue,
            "SHOW_PLAYING" => Command::ShowPlaying,
            "CREATE_PLAYLIST" => {
                Command::CreatePlaylist(arg(0, "CREATE_PLAYLIST", "a playlist name")?)
            }
            "ADD_TO_PLAYLIST" => Command::AddToPlaylist {
                playlist: arg(0, "ADD_TO_PLAYLIST", "a playlist name and a video id")?,
                video_id: arg(1, "ADD_TO_PLAYLIST", "a playlist name and a video id")?,
            },
            "REMOVE_FROM_PLAYLIST" => Command::RemoveFromPlaylist {
                playlist: arg(0, "REMOVE_FROM_PLAYLIST", "a playlist name and a video id")?,
                video_id: arg(1, "REMOVE_FROM_PLAYLIST", "a playlist name and a video id")?,
            },
            "CLEAR_PLAYLIST" => {
                Command::ClearPlaylist(arg(0, "CLEAR_PLAYLIST", "a playlist name")?)
            }
            "DELETE_PLAYLIST" => {
                Command::DeletePlaylist(arg(0, "DELETE_PLAYLIST", "a playlist name")?)
            }
            "SHOW_ALL_PLAYLISTS" => Command::ShowAllPlaylists,
            "SHOW_PLAYLIST" => Command::ShowPlaylist(arg(0, "SHOW_PLAYLIST", "a playlist name")?),
            "SEARCH_VIDEOS" => {
                if args.is_empty() {
                    return Err(ParseError::MissingArgument {
                        command: "SEARCH_VIDEOS",
                        expected: "a search term",
                    });
                }
                Command::Search(SearchQuery::Text(args.join(" ")))
            }
            "SEARCH_VIDEOS_WITH_TAG" => Command::Search(SearchQuery::Tag(arg(
                0,
                "SEARCH_VIDEOS_WITH_TAG",
                "a tag",
            )?)),
            "FLAG_VIDEO" => Command::Flag {
                video_id: arg(0, "FLAG_VIDEO", "a video id")?,
                reason: (args.len() > 1).then(|| args[1..].join(" ")),
            },
            "ALLOW_VIDEO" => Command::Allow(arg(0, "ALLOW_VIDEO", "a video id")?),
            "HELP" => Command::Help,
            "EXIT" => Command::Exit,
            _ => return Err(ParseError::Unknown(keyword)),
        };

        Ok(command)
    }
}

/// Text printed for `HELP`
pub const HELP_TEXT: &str = "Available commands:
    NUMBER_OF_VIDEOS - Shows how many videos are in the library.
    SHOW_ALL_VIDEOS - Lists all videos from the library.
    PLAY <video_id> - Plays specified video.
    PLAY_RANDOM - Plays a random video from the library.
    STOP - Stop the current video.
    PAUSE - Pause the current video.
    CONTINUE - Resume the current paused video.
    SHOW_PLAYING - Displays the title, video_id, video tags and paused status of the video that is currently playing (or paused).
    CREATE_PLAYLIST <playlist_name> - Creates a new (empty) playlist with the provided name.
    ADD_TO_PLAYLIST <playlist_name> <video_id> - Adds the requested video to the playlist.
    REMOVE_FROM_PLAYLIST <playlist_name> <video_id> - Removes the specified video from the specified playlist.
    CLEAR_PLAYLIST <playlist_name> - Removes all videos from the specified playlist.
    DELETE_PLAYLIST <playlist_name> - Deletes the playlist.
    SHOW_ALL_PLAYLISTS - Display all the available playlists.
    SHOW_PLAYLIST <playlist_name> - Displays all the videos in the playlist.
    SEARCH_VIDEOS <search_term> - Display all the videos whose id contains the search_term.
    SEARCH_VIDEOS_WITH_TAG <tag_name> - Display all videos whose tags contains the provided tag.
    FLAG_VIDEO <video_id> <flag_reason> - Mark a video as flagged.
    ALLOW_VIDEO <video_id> - Removes a flag from a video.
    HELP - Displays help.
    EXIT - Terminates the program execution.";
