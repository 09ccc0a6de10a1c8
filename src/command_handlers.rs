use std::path::{Path, PathBuf};

use scraper::Html;
use slog::{Logger, info};

use crate::download::{self, PageFetcher};
use crate::metadata;
use crate::models::ChapterInterval;
use crate::tracklist::{self, Extractor};
use crate::utils::{self, Result};

pub const DEFAULT_OUTPUT: &str = "output.ffmetadata";

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchSummary {
    pub output: PathBuf,
    pub chapters: usize,
}

/// Validates `url`, fetches the page, and writes its chapters to `output`.
pub fn fetch(url: &str, output: &Path, fetcher: &dyn PageFetcher, logger: &Logger) -> Result<FetchSummary> {
    let url = download::validate_url(url)?;
    let html = fetcher.fetch(&url)?;

    let (chapters, title) = html_to_chapters(&html, logger)?;
    let text = metadata::serialize_with_title(&chapters, title.as_deref())?;

    utils::write_text_file(output, &text)?;
    info!(logger, "wrote chapter metadata"; "path" => output.display().to_string(), "chapters" => chapters.len());

    Ok(FetchSummary {
        output: output.to_path_buf(),
        chapters: chapters.len(),
    })
}

/// Runs extraction, synthesis and serialization over already-fetched HTML.
pub fn html_to_ffmetadata(html: &str, logger: &Logger) -> Result<String> {
    let (chapters, title) = html_to_chapters(html, logger)?;
    metadata::serialize_with_title(&chapters, title.as_deref())
}

/// Extracts and reconciles the chapters of a page, plus the page's title.
pub fn html_to_chapters(html: &str, logger: &Logger) -> Result<(Vec<ChapterInterval>, Option<String>)> {
    // Parsed tree lives only for the extraction step.
    let (tracks, title) = {
        let document = Html::parse_document(html);
        let extractor = Extractor::new(logger);
        (extractor.extract(&document)?, extractor.extract_title(&document))
    };

    let chapters = tracklist::synthesize(&tracks, logger)?;
    Ok((chapters, title))
}
