use crate::models::ChapterInterval;
use crate::utils::{Error, Result};

pub const HEADER: &str = ";FFMETADATA1";
pub const TIMEBASE: &str = "TIMEBASE=1/1000";

/// Renders chapters as an FFmpeg metadata file, one `[CHAPTER]` block each.
/// Titles are written as-is.
pub fn serialize(chapters: &[ChapterInterval]) -> Result<String> {
    serialize_with_title(chapters, None)
}

/// Same as [`serialize`], with a global `title=` line after the header.
pub fn serialize_with_title(chapters: &[ChapterInterval], title: Option<&str>) -> Result<String> {
    if chapters.is_empty() {
        return Err(Error::Serialization("no chapters to write".to_string()));
    }

    let mut lines = Vec::with_capacity(2 + chapters.len() * 5);
    lines.push(HEADER.to_string());
    if let Some(title) = title {
        lines.push(format!("title={}", title));
    }
    for chapter in chapters {
        lines.push("[CHAPTER]".to_string());
        lines.push(TIMEBASE.to_string());
        lines.push(format!("START={}", chapter.start_ms));
        lines.push(format!("END={}", chapter.end_ms));
        lines.push(format!("title={}", chapter.title));
    }
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chapter(start_ms: u64, end_ms: u64, title: &str) -> ChapterInterval {
        ChapterInterval { start_ms, end_ms, title: title.to_string() }
    }

    #[test]
    fn test_serialize_layout() {
        let text = serialize(&[chapter(0, 1000, "Intro"), chapter(1000, 2500, "A - B")]).unwrap();
        let expected = [
            ";FFMETADATA1",
            "[CHAPTER]",
            "TIMEBASE=1/1000",
            "START=0",
            "END=1000",
            "title=Intro",
            "[CHAPTER]",
            "TIMEBASE=1/1000",
            "START=1000",
            "END=2500",
            "title=A - B",
        ]
        .join("\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn test_serialize_block_per_chapter_in_order() {
        let chapters: Vec<_> = (0..5).map(|i| chapter(i * 10, i * 10 + 10, &format!("T{}", i))).collect();
        let text = serialize(&chapters).unwrap();
        assert!(text.starts_with(HEADER));
        assert_eq!(text.matches("[CHAPTER]").count(), 5);
        let positions: Vec<usize> = (0..5).map(|i| text.find(&format!("title=T{}", i)).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_serialize_passes_title_through() {
        let text = serialize(&[chapter(0, 1, "a=b; #c\\d")]).unwrap();
        assert!(text.ends_with("title=a=b; #c\\d"));
    }

    #[test]
    fn test_serialize_with_global_title() {
        let text = serialize_with_title(&[chapter(0, 1, "x")], Some("Live Set")).unwrap();
        assert!(text.starts_with(";FFMETADATA1\ntitle=Live Set\n[CHAPTER]"));
    }

    #[test]
    fn test_serialize_empty() {
        assert!(matches!(serialize(&[]), Err(Error::Serialization(_))));
    }
}
