use slog::{Logger, debug, info, warn};
use thiserror::Error;

use crate::models::{ChapterInterval, RawTrack, TimestampMs};
use crate::tracklist::timecode::normalize;
use crate::utils::{Error, Result};

/// Length given to the final chapter, which has no following cue to end it.
pub const DEFAULT_TAIL_MS: TimestampMs = 240_000;

/// Why a track produced no chapter.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChapterSkip {
    #[error("missing timestamp")]
    MissingTimestamp,
    #[error("unparsable timestamp {0:?}")]
    InvalidTimestamp(String),
    #[error("next track has no usable timestamp")]
    UnknownEnd,
    #[error("next track starts at {next_ms} ms, not after {start_ms} ms")]
    NonIncreasing { start_ms: TimestampMs, next_ms: TimestampMs },
    #[error("end time out of range")]
    Overflow,
}

/// Turns tracks into chapter intervals, in input order.
///
/// A track's chapter ends where the next track starts; the last one runs for
/// [`DEFAULT_TAIL_MS`]. Tracks whose start or end cannot be determined are
/// logged and dropped without affecting their neighbours.
pub fn synthesize(tracks: &[RawTrack], logger: &Logger) -> Result<Vec<ChapterInterval>> {
    if tracks.is_empty() {
        return Err(Error::Synthesis("no tracks provided".to_string()));
    }

    let mut chapters = Vec::with_capacity(tracks.len());
    for index in 0..tracks.len() {
        match chapter_for(tracks, index) {
            Ok(chapter) => {
                debug!(logger, "chapter"; "index" => index, "start" => chapter.start_ms, "end" => chapter.end_ms, "title" => &chapter.title);
                chapters.push(chapter);
            }
            Err(reason) => {
                warn!(logger, "dropping track"; "index" => index, "title" => &tracks[index].title, "reason" => reason.to_string());
            }
        }
    }

    if chapters.is_empty() {
        return Err(Error::Synthesis("no valid chapters produced".to_string()));
    }
    info!(logger, "synthesized chapters"; "count" => chapters.len(), "dropped" => tracks.len() - chapters.len());
    Ok(chapters)
}

fn chapter_for(tracks: &[RawTrack], index: usize) -> std::result::Result<ChapterInterval, ChapterSkip> {
    let track = &tracks[index];
    let start_ms = start_of(track)?;

    let end_ms = match tracks.get(index + 1) {
        // Conservative: an unreadable next cue drops this track rather than guessing its length.
        Some(next) => {
            let next_ms = start_of(next).map_err(|_| ChapterSkip::UnknownEnd)?;
            if next_ms <= start_ms {
                return Err(ChapterSkip::NonIncreasing { start_ms, next_ms });
            }
            next_ms
        }
        None => start_ms.checked_add(DEFAULT_TAIL_MS).ok_or(ChapterSkip::Overflow)?,
    };

    Ok(ChapterInterval {
        start_ms,
        end_ms,
        title: track.display_title(),
    })
}

fn start_of(track: &RawTrack) -> std::result::Result<TimestampMs, ChapterSkip> {
    let text = track.timestamp.as_deref().ok_or(ChapterSkip::MissingTimestamp)?;
    normalize(text).ok_or_else(|| ChapterSkip::InvalidTimestamp(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::discard_logger;

    fn spans(chapters: &[ChapterInterval]) -> Vec<(TimestampMs, TimestampMs)> {
        chapters.iter().map(|c| (c.start_ms, c.end_ms)).collect()
    }

    #[test]
    fn test_synthesize_three_tracks() {
        let tracks = vec![
            RawTrack::new("A-T1", None, Some("0:34")),
            RawTrack::new("A-T2", None, Some("3:53")),
            RawTrack::new("A-T3", None, Some("7:42")),
        ];
        let chapters = synthesize(&tracks, &discard_logger()).unwrap();
        assert_eq!(spans(&chapters), vec![(34_000, 233_000), (233_000, 462_000), (462_000, 702_000)]);
        assert_eq!(chapters[0].title, "A-T1");
        assert_eq!(chapters[2].title, "A-T3");
    }

    #[test]
    fn test_synthesize_artist_in_title() {
        let tracks = vec![RawTrack::new("X", Some("Y"), Some("0:30"))];
        let chapters = synthesize(&tracks, &discard_logger()).unwrap();
        assert_eq!(chapters[0].title, "Y - X");
        assert_eq!(spans(&chapters), vec![(30_000, 270_000)]);
    }

    #[test]
    fn test_synthesize_empty_input() {
        let err = synthesize(&[], &discard_logger()).unwrap_err();
        match err {
            Error::Synthesis(msg) => assert_eq!(msg, "no tracks provided"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_synthesize_all_dropped() {
        let tracks = vec![
            RawTrack::new("One", None, None),
            RawTrack::new("Two", None, Some("soon")),
        ];
        let err = synthesize(&tracks, &discard_logger()).unwrap_err();
        match err {
            Error::Synthesis(msg) => assert_eq!(msg, "no valid chapters produced"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_synthesize_drops_track_before_unparsable_cue() {
        let tracks = vec![
            RawTrack::new("Kept", None, Some("0:00")),
            RawTrack::new("Lost", None, Some("1:00")),
            RawTrack::new("Broken", None, Some("??")),
            RawTrack::new("Last", None, Some("9:00")),
        ];
        let chapters = synthesize(&tracks, &discard_logger()).unwrap();
        let titles: Vec<&str> = chapters.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Kept", "Last"]);
        assert_eq!(spans(&chapters), vec![(0, 60_000), (540_000, 780_000)]);
    }

    #[test]
    fn test_synthesize_never_emits_empty_interval() {
        let tracks = vec![
            RawTrack::new("A", None, Some("2:00")),
            RawTrack::new("B", None, Some("2:00")),
            RawTrack::new("C", None, Some("1:00")),
            RawTrack::new("D", None, Some("5:00")),
        ];
        let chapters = synthesize(&tracks, &discard_logger()).unwrap();
        assert!(chapters.iter().all(|c| c.end_ms > c.start_ms));
        assert_eq!(spans(&chapters), vec![(60_000, 300_000), (300_000, 540_000)]);
    }

    #[test]
    fn test_chapter_skip_reasons() {
        let tracks = vec![
            RawTrack::new("A", None, None),
            RawTrack::new("B", None, Some("x")),
            RawTrack::new("C", None, Some("1:00")),
            RawTrack::new("D", None, None),
        ];
        assert_eq!(chapter_for(&tracks, 0), Err(ChapterSkip::MissingTimestamp));
        assert_eq!(chapter_for(&tracks, 1), Err(ChapterSkip::InvalidTimestamp("x".to_string())));
        assert_eq!(chapter_for(&tracks, 2), Err(ChapterSkip::UnknownEnd));
    }
}
