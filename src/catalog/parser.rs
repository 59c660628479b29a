//! Catalog text file (videos.txt) parser
//!
//! One video per line: `Title | video_id | #tag1,#tag2`. The tag field is
//! optional.

use crate::model::Video;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parse a catalog file into video records
pub fn parse_catalog(path: &Path) -> Result<Vec<Video>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open video catalog: {:?}", path))?;

    read_videos(BufReader::new(file))
        .with_context(|| format!("Failed to read video catalog: {:?}", path))
}

/// Parse video records from any line source
pub fn read_videos<R: BufRead>(reader: R) -> Result<Vec<Video>> {
    let mut videos = Vec::new();

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match parse_line(&line) {
            Some(video) => videos.push(video),
            None => log::warn!("Skipping malformed catalog line {}: {:?}", number + 1, line),
        }
    }

    log::info!("Parsed {} videos from catalog", videos.len());
    Ok(videos)
}

/// Convert a single catalog line to a video
fn parse_line(line: &str) -> Option<Video> {
    let mut fields = line.split('|').map(str::trim);

    let title = fields.next().filter(|t| !t.is_empty())?;
    let id = fields.next().filter(|id| !id.is_empty())?;
    let tags = fields
        .next()
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Some(Video::new(id, title, tags))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_line_with_tags() {
        let video = parse_line("Amazing Cats | amazing_cats_video_id |  #cat , #animal").unwrap();
        assert_eq!(video.id, "amazing_cats_video_id");
        assert_eq!(video.title, "Amazing Cats");
        assert_eq!(video.tags, ["#cat", "#animal"]);
    }

    #[test]
    fn test_parse_line_without_tags() {
        let empty = parse_line("Life at Google | life_at_google_video_id | ").unwrap();
        assert!(empty.tags.is_empty());

        let missing = parse_line("Life at Google | life_at_google_video_id").unwrap();
        assert!(missing.tags.is_empty());
    }

    #[test]
    fn test_parse_line_rejects_missing_fields() {
        assert!(parse_line("Only a title").is_none());
        assert!(parse_line(" | some_id | #tag").is_none());
        assert!(parse_line("Title |  | #tag").is_none());
    }

    #[test]
    fn test_read_videos_skips_bad_lines() {
        let input = "Funny Dogs | funny_dogs_video_id | #dog , #animal\n\
                     \n\
                     garbage\n\
                     Another Cat Video | another_cat_video_id | #cat , #animal\n";
        let videos = read_videos(Cursor::new(input)).unwrap();
        let ids: Vec<&str> = videos.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, ["funny_dogs_video_id", "another_cat_video_id"]);
    }
}
