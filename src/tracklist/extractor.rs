use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use slog::{Logger, debug, info, warn};
use thiserror::Error;

use crate::models::RawTrack;
use crate::tracklist::selectors::{
    CONTAINER_SELECTORS, SelectorChain, TIMESTAMP_SELECTORS, TITLE_SELECTORS, TRACK_SELECTORS,
    element_text,
};
use crate::utils::{Error, Result};

pub const UNKNOWN_TITLE: &str = "Unknown Track";

// First "digits:digits" run in a record's text, with an optional seconds field.
// ASCII digits only, matching what `normalize` accepts.
static TIMECODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+:[0-9]+(?::[0-9]+)?").expect("timecode pattern is valid"));

/// Why a single track record was left out of the result.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordSkip {
    #[error("no timestamp found")]
    MissingTimestamp,
}

/// Pulls track records out of a tracklist page using ordered selector chains.
pub struct Extractor {
    containers: SelectorChain,
    tracks: SelectorChain,
    timestamps: SelectorChain,
    titles: SelectorChain,
    logger: Logger,
}

impl Extractor {
    pub fn new(logger: &Logger) -> Self {
        Self::with_selectors(
            CONTAINER_SELECTORS,
            TRACK_SELECTORS,
            TIMESTAMP_SELECTORS,
            TITLE_SELECTORS,
            logger,
        )
    }

    /// Builds an extractor over custom selector lists, each in priority order.
    pub fn with_selectors(
        containers: &[&'static str],
        tracks: &[&'static str],
        timestamps: &[&'static str],
        titles: &[&'static str],
        logger: &Logger,
    ) -> Self {
        let logger = logger.new(slog::o!("component" => "extractor"));
        Extractor {
            containers: SelectorChain::compile("container", containers, &logger),
            tracks: SelectorChain::compile("track", tracks, &logger),
            timestamps: SelectorChain::compile("timestamp", timestamps, &logger),
            titles: SelectorChain::compile("title", titles, &logger),
            logger,
        }
    }

    /// Returns the tracks of `document` in page order. Records without a
    /// timestamp are dropped; an empty result is an error.
    pub fn extract(&self, document: &Html) -> Result<Vec<RawTrack>> {
        let root = document.root_element();
        let scope = self.locate_container(root)?;

        let (selector, records) = self
            .tracks
            .first_match(scope)
            .ok_or_else(|| Error::Extraction("no track items found".to_string()))?;
        debug!(self.logger, "located track records"; "chain" => self.tracks.name(), "selector" => selector, "count" => records.len());

        let mut tracks = Vec::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            match self.extract_record(record) {
                Ok(track) => tracks.push(track),
                Err(reason) => {
                    warn!(self.logger, "dropping track record"; "index" => index, "reason" => reason.to_string());
                }
            }
        }

        if tracks.is_empty() {
            return Err(Error::Extraction("no tracks with timestamps found".to_string()));
        }
        info!(self.logger, "extracted tracks"; "count" => tracks.len());
        Ok(tracks)
    }

    /// The tracklist's own title: `og:title`, else the `<title>` text.
    pub fn extract_title(&self, document: &Html) -> Option<String> {
        let og_title = Selector::parse("meta[property='og:title']").ok()?;
        let meta = document
            .select(&og_title)
            .filter_map(|meta| meta.value().attr("content"))
            .map(|content| content.split_whitespace().collect::<Vec<_>>().join(" "))
            .find(|content| !content.is_empty());
        if meta.is_some() {
            return meta;
        }

        let title = Selector::parse("title").ok()?;
        document
            .select(&title)
            .map(element_text)
            .find(|text| !text.is_empty())
    }

    fn locate_container<'a>(&self, root: ElementRef<'a>) -> Result<ElementRef<'a>> {
        if let Some((selector, containers)) = self.containers.first_match(root) {
            debug!(self.logger, "located tracklist container"; "chain" => self.containers.name(), "selector" => selector);
            return Ok(containers[0]);
        }

        // No container: if track records exist anywhere, search the whole document.
        if self.tracks.first_match(root).is_some() {
            debug!(self.logger, "no container matched, using whole document"; "chain" => self.containers.name());
            return Ok(root);
        }

        Err(Error::Extraction("no tracklist container found".to_string()))
    }

    fn extract_record(&self, record: ElementRef<'_>) -> std::result::Result<RawTrack, RecordSkip> {
        let timestamp = self
            .timestamps
            .first_text(record)
            .or_else(|| scan_timecode(&element_text(record)))
            .ok_or(RecordSkip::MissingTimestamp)?;

        let title = self
            .titles
            .first_text(record)
            .unwrap_or_else(|| UNKNOWN_TITLE.to_string());

        Ok(RawTrack {
            title,
            artist: None,
            timestamp: Some(timestamp),
        })
    }
}

fn scan_timecode(text: &str) -> Option<String> {
    TIMECODE_PATTERN.find(text).map(|m| m.as_str().to_string())
}
