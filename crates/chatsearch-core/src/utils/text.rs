use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "…";

/// Truncate text to a display width, ending with an ellipsis when cut
///
/// # Examples
/// ```
/// use chatsearch_core::utils::text::truncate_to_width;
/// assert_eq!(truncate_to_width("town-square", 6), "town-…");
/// ```
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let target_width = max_width - ELLIPSIS.width();
    let mut result = String::new();
    let mut current_width = 0;

    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if current_width + ch_width > target_width {
            break;
        }
        result.push(ch);
        current_width += ch_width;
    }

    result.push_str(ELLIPSIS);
    result
}

/// Pad text with trailing spaces up to a display width
pub fn pad_to_width(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - text_width))
    }
}

/// Split `text` into the segments before and after its last whitespace
///
/// The second segment is the word being typed; it is empty when the text
/// ends with whitespace.
pub fn split_last_word(text: &str) -> (&str, &str) {
    match text.rfind(char::is_whitespace) {
        Some(idx) => {
            let ws_len = text[idx..].chars().next().map_or(1, char::len_utf8);
            (&text[..idx + ws_len], &text[idx + ws_len..])
        }
        None => ("", text),
    }
}
