//! ANSI-aware width measurement.
//!
//! Version and status strings may carry color escapes; the bottom strip is
//! sized from what actually lands on screen.

/// Remove ANSI escape sequences from `text`.
pub fn strip_colors(text: &str) -> String {
    let clean = strip_ansi_escapes::strip(text);
    String::from_utf8_lossy(&clean).into_owned()
}

/// Compute the display width of a string after stripping ANSI escapes.
pub fn display_width(text: &str) -> usize {
    unicode_width::UnicodeWidthStr::width(strip_colors(text).as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_width() {
        assert_eq!(display_width("v1.2.3"), 6);
    }

    #[test]
    fn color_escapes_are_ignored() {
        assert_eq!(display_width("\x1b[32mv1.2.3\x1b[0m"), 6);
        assert_eq!(strip_colors("\x1b[1mbold\x1b[0m"), "bold");
    }

    #[test]
    fn wide_glyphs_count_double() {
        assert_eq!(display_width("版本"), 4);
    }
}
