use scraper::{ElementRef, Selector};
use slog::{Logger, warn};

/// Enclosing element of the whole tracklist.
pub const CONTAINER_SELECTORS: &[&str] = &[
    ".tlpContainer",
    "#tlTab",
    ".tracklist",
    "#tracklist",
    "ol.tracklist-items",
];

/// A single played track.
pub const TRACK_SELECTORS: &[&str] = &[
    ".tlpItem",
    ".tlpTog",
    "div[id^='tlp_']",
    ".track-item",
    "li.track",
];

/// Cue time inside a track record.
pub const TIMESTAMP_SELECTORS: &[&str] = &[
    ".tlpCuePointTimecode .tcWrap",
    ".cueValueField",
    ".tcWrap",
    ".timestamp",
    "time",
];

/// Track title inside a track record.
pub const TITLE_SELECTORS: &[&str] = &[
    ".trackValue",
    ".trackFormat .trackValue",
    ".track-title",
    ".title",
];

/// An ordered list of CSS selectors tried top to bottom; the first one that
/// matches wins. No scoring, no union of results.
pub struct SelectorChain {
    name: &'static str,
    selectors: Vec<(&'static str, Selector)>,
}

impl SelectorChain {
    /// Compiles `candidates` in order. A candidate that is not valid CSS is
    /// logged and left out of the chain.
    pub fn compile(name: &'static str, candidates: &[&'static str], logger: &Logger) -> Self {
        let mut selectors = Vec::with_capacity(candidates.len());
        for &candidate in candidates {
            match Selector::parse(candidate) {
                Ok(selector) => selectors.push((candidate, selector)),
                Err(e) => {
                    warn!(logger, "skipping invalid selector"; "chain" => name, "selector" => candidate, "error" => e.to_string());
                }
            }
        }
        SelectorChain { name, selectors }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// All elements under `scope` matched by the first selector that matches
    /// anything, together with that selector's source text.
    pub fn first_match<'a>(&self, scope: ElementRef<'a>) -> Option<(&'static str, Vec<ElementRef<'a>>)> {
        self.selectors.iter().find_map(|(source, selector)| {
            let matches: Vec<ElementRef<'a>> = scope.select(selector).collect();
            if matches.is_empty() { None } else { Some((*source, matches)) }
        })
    }

    /// The first non-empty text found under `scope`, trying selectors in order
    /// and matched elements in document order.
    pub fn first_text(&self, scope: ElementRef<'_>) -> Option<String> {
        self.selectors.iter().find_map(|(_, selector)| {
            scope
                .select(selector)
                .map(element_text)
                .find(|text| !text.is_empty())
        })
    }
}

/// Text content of an element with surrounding whitespace trimmed and inner
/// runs of whitespace collapsed to one space.
pub fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
