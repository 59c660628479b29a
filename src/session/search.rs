//! Search and interactive selection
//!
//! Searching is split in two phases. `Session::search` computes the numbered
//! hits without touching state; `Session::select` turns the user's answer
//! into a `play`. A `Selector` only supplies the answer; showing the listing
//! is up to the caller, which keeps the second phase drivable from tests as
//! well as from a terminal.

use super::error::CommandResult;
use super::{Session, VideoPicker};
use crate::model::{Catalog, TagStyle, Video};
use std::io::BufRead;

const PLAY_PROMPT: &str =
    "Would you like to play any of the above? If yes, specify the number of the video.";
const DECLINE_HINT: &str = "If your answer is not a valid number, we will assume it's a no.";

/// What to search for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Words matched against video IDs, `cat video` -> `cat_video`.
    ///
    /// Runs of whitespace collapse to a single `_`, so `cat  video` also
    /// becomes `cat_video`. A blank query matches nothing.
    Text(String),

    /// A tag the video must carry exactly
    Tag(String),
}

impl SearchQuery {
    /// The query as the user typed it
    pub fn as_str(&self) -> &str {
        match self {
            SearchQuery::Text(text) => text,
            SearchQuery::Tag(tag) => tag,
        }
    }

    fn matcher(&self) -> Box<dyn Fn(&Video) -> bool + '_> {
        match self {
            SearchQuery::Text(text) => {
                let needle = text
                    .to_lowercase()
                    .split_whitespace()
                    .collect::<Vec<_>>()
                    .join("_");
                if needle.is_empty() {
                    Box::new(|_: &Video| false)
                } else {
                    Box::new(move |video: &Video| video.id.contains(&needle))
                }
            }
            SearchQuery::Tag(tag) => Box::new(move |video: &Video| video.has_tag(tag)),
        }
    }
}

/// Hits of a search, ordered by title
#[derive(Debug, Clone)]
pub struct SearchResults {
    query: String,
    hits: Vec<Video>,
}

impl SearchResults {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn hits(&self) -> &[Video] {
        &self.hits
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    /// Lines to show the user before asking for a choice
    pub fn lines(&self) -> Vec<String> {
        if self.hits.is_empty() {
            return vec![format!("No search results for {}", self.query)];
        }

        let mut lines = Vec::with_capacity(self.hits.len() + 3);
        lines.push(format!("Here are the results for {}:", self.query));
        lines.extend(
            self.hits
                .iter()
                .enumerate()
                .map(|(i, video)| format!("{}) {}", i + 1, video.describe(TagStyle::Compact))),
        );
        lines.push(PLAY_PROMPT.to_string());
        lines.push(DECLINE_HINT.to_string());
        lines
    }

    /// Resolve a raw answer to the chosen video, or `None` to decline
    pub fn choose(&self, answer: &str) -> Option<&Video> {
        let number = parse_choice(answer)?;
        if number == 0 {
            return None;
        }
        self.hits.get(number - 1)
    }
}

/// Parse a selection answer. Anything that is not a non-negative integer is `None`.
pub fn parse_choice(answer: &str) -> Option<usize> {
    answer.trim().parse().ok()
}

/// Source of the answer to a search prompt
pub trait Selector {
    /// Return the raw answer for these results, `None` if there is none
    fn choose(&mut self, results: &SearchResults) -> Option<String>;
}

/// Always answers with this text
impl Selector for &str {
    fn choose(&mut self, _results: &SearchResults) -> Option<String> {
        Some((*self).to_string())
    }
}

/// Never picks anything
#[derive(Debug, Clone, Copy, Default)]
pub struct Decline;

impl Selector for Decline {
    fn choose(&mut self, _results: &SearchResults) -> Option<String> {
        None
    }
}

/// Reads one answer line from `input`
pub struct LineSelector<'a, R> {
    input: &'a mut R,
}

impl<'a, R: BufRead> LineSelector<'a, R> {
    pub fn new(input: &'a mut R) -> Self {
        Self { input }
    }
}

impl<R: BufRead> Selector for LineSelector<'_, R> {
    fn choose(&mut self, _results: &SearchResults) -> Option<String> {
        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(0) => None,
            Ok(_) => Some(answer),
            Err(e) => {
                log::warn!("Failed to read search answer: {}", e);
                None
            }
        }
    }
}

impl<C: Catalog, P: VideoPicker> Session<C, P> {
    /// Find the videos matching a query
    pub fn search(&self, query: &SearchQuery) -> SearchResults {
        let matches = query.matcher();
        let mut hits: Vec<Video> = self
            .catalog
            .list()
            .iter()
            .filter(|video| matches(*video))
            .cloned()
            .collect();
        hits.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.id.cmp(&b.id)));

        log::debug!("Search {:?} matched {} videos", query, hits.len());
        SearchResults {
            query: query.as_str().to_string(),
            hits,
        }
    }

    /// Play the video picked by `answer`; an invalid answer does nothing
    pub fn select(&mut self, results: &SearchResults, answer: &str) -> CommandResult {
        match results.choose(answer) {
            Some(video) => self.play(&video.id),
            None => {
                log::debug!("Search selection declined: {:?}", answer.trim());
                Ok(Vec::new())
            }
        }
    }

    /// Search, ask the selector for an answer, and play its choice.
    ///
    /// Returns the whole transcript: the listing (or the no-results notice)
    /// followed by the output of playing the chosen video, if any.
    pub fn search_and_select<S: Selector + ?Sized>(
        &mut self,
        query: &SearchQuery,
        selector: &mut S,
    ) -> CommandResult {
        let results = self.search(query);
        let mut lines = results.lines();
        if results.is_empty() {
            return Ok(lines);
        }

        if let Some(answer) = selector.choose(&results) {
            lines.extend(self.select(&results, &answer)?);
        }
        Ok(lines)
    }
}
