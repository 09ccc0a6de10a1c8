use crate::models::TimestampMs;

/// Converts timestamp text in `H:MM:SS`, `M:SS` or bare-seconds form into milliseconds.
///
/// Returns `None` for empty input, non-numeric fields, any other shape, or a
/// value too large to represent. Never panics.
pub fn normalize(text: &str) -> Option<TimestampMs> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let mut fields = Vec::with_capacity(3);
    for part in text.split(':') {
        fields.push(parse_field(part)?);
    }

    let seconds = match fields.as_slice() {
        [hours, minutes, seconds] => hours
            .checked_mul(3600)?
            .checked_add(minutes.checked_mul(60)?)?
            .checked_add(*seconds)?,
        [minutes, seconds] => minutes.checked_mul(60)?.checked_add(*seconds)?,
        [seconds] => *seconds,
        _ => return None,
    };
    seconds.checked_mul(1000)
}

// Digits only: no sign, no whitespace inside the field.
fn parse_field(part: &str) -> Option<u64> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_minutes_seconds() {
        assert_eq!(normalize("0:34"), Some(34_000));
        assert_eq!(normalize("3:53"), Some(233_000));
        assert_eq!(normalize("07:42"), Some(462_000));
    }

    #[test]
    fn test_normalize_hours() {
        assert_eq!(normalize("1:30:45"), Some(5_445_000));
        assert_eq!(normalize("01:00:00"), Some(3_600_000));
    }

    #[test]
    fn test_normalize_bare_seconds() {
        assert_eq!(normalize("90"), Some(90_000));
        assert_eq!(normalize("0"), Some(0));
    }

    #[test]
    fn test_normalize_trims_whitespace() {
        assert_eq!(normalize("  2:05 \n"), Some(125_000));
    }

    #[test]
    fn test_normalize_rejects_other_shapes() {
        for text in ["", "   ", "invalid", "1:2:3:4", "1:", ":30", "a:30", "1:3o", "-1:30", "+5", "1 :30", "1.5"] {
            assert_eq!(normalize(text), None, "expected None for {:?}", text);
        }
    }

    #[test]
    fn test_normalize_overflow_is_absent() {
        assert_eq!(normalize("99999999999999999999"), None);
        assert_eq!(normalize("18446744073709551615:00"), None);
    }
}
