use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Pad `s` with spaces up to `width` terminal columns.
pub fn pad_to_display_width(s: &str, width: usize) -> String {
    let w = s.width();
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

/// Cut `s` so that it fits in `width` columns, appending "…" when cut.
pub fn truncate_to_width(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let cw = ch.width().unwrap_or(0);
        if used + cw + 1 > width {
            break;
        }
        used += cw;
        out.push(ch);
    }
    out.push('…');
    out
}

/// Centre `s` inside `width` columns (left-biased).
pub fn center(s: &str, width: usize) -> String {
    let w = s.width();
    if w >= width {
        return s.to_string();
    }
    let left = (width - w) / 2;
    format!("{}{}", " ".repeat(left), s)
}

/// Word-wrap a paragraph to `width` columns.
pub fn wrap(s: &str, width: usize) -> Vec<String> {
    textwrap::wrap(s, width.max(8))
        .into_iter()
        .map(|cow| cow.into_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad() {
        assert_eq!(pad_to_display_width("ab", 4), "ab  ");
        assert_eq!(pad_to_display_width("abcdef", 4), "abcdef");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello world", 6), "hello…");
        assert_eq!(truncate_to_width("hello", 0), "");
    }

    #[test]
    fn test_center() {
        assert_eq!(center("ab", 6), "  ab");
    }

    #[test]
    fn test_wrap_cyrillic() {
        let lines = wrap("Есть идея? Давайте обсудим!", 12);
        assert!(lines.len() >= 2);
        assert!(lines.iter().all(|l| l.width() <= 12));
    }
}
