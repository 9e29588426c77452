use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate to at most `max_width` terminal columns, ending in "…" when cut.
///
/// CJK characters take two columns, so this counts display width rather
/// than chars.
pub fn truncate_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Right-pad to `width` display columns.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let current = text.width();
    if current >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - current))
    }
}

/// Display width of the widest entry
pub fn max_width<'a>(items: impl IntoIterator<Item = &'a str>) -> usize {
    items.into_iter().map(|s| s.width()).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate_width("Kyoto", 10), "Kyoto");
        assert_eq!(truncate_width("Kyoto Station", 6), "Kyoto…");
        assert_eq!(truncate_width("Kyoto", 0), "");
    }

    #[test]
    fn test_truncate_counts_wide_chars() {
        // each CJK char is two columns
        assert_eq!(truncate_width("伏見稻荷大社", 12), "伏見稻荷大社");
        assert_eq!(truncate_width("伏見稻荷大社", 7), "伏見稻…");
    }

    #[test]
    fn test_pad_to_width() {
        assert_eq!(pad_to_width("京都", 6), "京都  ");
        assert_eq!(pad_to_width("Day 1", 3), "Day 1");
    }

    #[test]
    fn test_max_width() {
        assert_eq!(max_width(["Day 1", "Day 12"]), 6);
        assert_eq!(max_width(Vec::<&str>::new()), 0);
    }
}
