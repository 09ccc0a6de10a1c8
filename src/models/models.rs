/// Milliseconds from the start of the set.
pub type TimestampMs = u64;

/// One track as found on the page, before any timing reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTrack {
    pub title: String,
    pub artist: Option<String>,
    pub timestamp: Option<String>,
}

impl RawTrack {
    pub fn new(title: &str, artist: Option<&str>, timestamp: Option<&str>) -> Self {
        RawTrack {
            title: title.to_string(),
            artist: artist.map(str::to_string),
            timestamp: timestamp.map(str::to_string),
        }
    }

    /// "Artist - Title" when an artist is known, otherwise the bare title.
    pub fn display_title(&self) -> String {
        match &self.artist {
            Some(artist) => format!("{} - {}", artist, self.title),
            None => self.title.clone(),
        }
    }
}

/// A `[start, end)` span in milliseconds with its chapter title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterInterval {
    pub start_ms: TimestampMs,
    pub end_ms: TimestampMs,
    pub title: String,
}
