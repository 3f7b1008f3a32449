//! String utilities for the domain layer.

/// Truncate a string to a maximum length with ellipsis (UTF-8 safe)
///
/// Used to keep instruction previews in log lines short.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }
    let mut end = max_len.saturating_sub(3).min(s.len());
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &s[..end])
}

/// Count whitespace-separated words, ignoring the document markers
/// (`#`, `##`, `>`, `•`) that carry no spoken content.
pub fn word_count(s: &str) -> usize {
    s.split_whitespace()
        .filter(|w| !matches!(*w, "#" | "##" | ">" | "•" | "-"))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("make it shorter please", 10), "make it...");
    }

    #[test]
    fn test_truncate_multibyte() {
        // 'é' is 2 bytes; cutting inside it must back up
        assert_eq!(truncate("ééééé", 6), "é...");
    }

    #[test]
    fn test_word_count_skips_markers() {
        assert_eq!(word_count("# Faith"), 1);
        assert_eq!(word_count("• Opening thought about Faith"), 4);
        assert_eq!(word_count("> \"Trust in the Lord\" - Proverbs 3:5-6"), 6);
        assert_eq!(word_count(""), 0);
    }
}
