use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate to at most `max_width` terminal columns, appending "…" if cut 🛡️
pub fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1; // room for the ellipsis
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// Right-pad with spaces to exactly `width` columns (after truncating).
pub fn pad_to(s: &str, width: usize) -> String {
    let mut out = truncate(s, width);
    let w = out.width();
    if w < width {
        out.push_str(&" ".repeat(width - w));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_untouched() {
        assert_eq!(truncate("Kid A", 10), "Kid A");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate("OK Computer", 6), "OK Co…");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn test_truncate_counts_wide_chars() {
        // Each CJK char is two columns wide
        let cut = truncate("東京事変", 5);
        assert_eq!(cut, "東京…");
        assert!(cut.width() <= 5);
    }

    #[test]
    fn test_pad_to_width() {
        assert_eq!(pad_to("ab", 4), "ab  ");
        assert_eq!(pad_to("abcdef", 4), "abc…");
    }
}
