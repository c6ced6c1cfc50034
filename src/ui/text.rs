//! Width-aware string clipping

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate string to fit within max_width, adding ellipsis if needed
pub fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 1 {
        return "…".repeat(max_width);
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width + 1 > max_width {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

/// Keep the end of `s` visible, as a text input scrolled to its caret does
pub fn tail(s: &str, max_width: usize) -> &str {
    let mut width = 0;
    let mut start = s.len();
    for (idx, c) in s.char_indices().rev() {
        let char_width = c.width().unwrap_or(0);
        if width + char_width > max_width {
            break;
        }
        width += char_width;
        start = idx;
    }
    &s[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello w…");
        assert_eq!(truncate("hi", 2), "hi");
        assert_eq!(truncate("hello", 1), "…");
        assert_eq!(truncate("hello", 0), "");
    }

    #[test]
    fn test_tail() {
        assert_eq!(tail("Back to School", 6), "School");
        assert_eq!(tail("short", 10), "short");
        assert_eq!(tail("", 4), "");
        // Wide glyphs are never split
        assert_eq!(tail("a🛒b", 2), "b");
        assert_eq!(tail("a🛒b", 3), "🛒b");
    }
}
