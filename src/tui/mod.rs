//! Terminal walkthrough for smorg
//!
//! Five views gated by the wizard step:
//! - Pre-course check-in
//! - Contributor introductions
//! - Smorgasbord explorer (search + filters + add)
//! - Plan refinement (edit/remove/reset)
//! - VPS notes with live export preview

mod app;
mod editor;
mod views;
mod widgets;

pub use app::run_wizard;

/// Ellipsize text to fit within max_chars
pub fn ellipsize(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        value.to_string()
    } else if max_chars == 0 {
        String::new()
    } else {
        let take = max_chars.saturating_sub(1);
        let mut result = value.chars().take(take).collect::<String>();
        result.push('…');
        result
    }
}

/// Sanitize text by removing newlines for single-line display
pub fn sanitize_text(value: &str) -> String {
    value.replace('\n', " ").replace('\r', " ")
}

/// Simple word-wrap for text
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            if current_line.is_empty() {
                current_line = word.to_string();
            } else if current_line.len() + 1 + word.len() <= max_width {
                current_line.push(' ');
                current_line.push_str(word);
            } else {
                lines.push(current_line);
                current_line = word.to_string();
            }
        }
        lines.push(current_line);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ellipsize_short_text_unchanged() {
        assert_eq!(ellipsize("short", 10), "short");
    }

    #[test]
    fn test_ellipsize_truncates_with_marker() {
        assert_eq!(ellipsize("a longer title here", 8), "a longe…");
    }

    #[test]
    fn test_wrap_text_respects_width() {
        let wrapped = wrap_text("one two three four five", 9);
        assert!(wrapped.iter().all(|l| l.len() <= 9));
        assert_eq!(wrapped.join(" "), "one two three four five");
    }

    #[test]
    fn test_wrap_text_keeps_paragraph_breaks() {
        let wrapped = wrap_text("first\nsecond", 20);
        assert_eq!(wrapped, vec!["first", "second"]);
    }
}
