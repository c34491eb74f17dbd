//! Text truncation and wrapping for card previews
//!
//! Character-counted (not byte-counted) so multi-byte text truncates cleanly.

/// Truncate to at most `max_len` characters, appending "..." when cut.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{kept}...")
    }
}

/// Wrap text at word boundaries into at most `max_lines` lines of at most
/// `width` characters. Words longer than `width` break mid-word. When text
/// remains after the last line, the last line ends with "...".
pub fn wrap_text_lines(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return vec![];
    }
    let text = text.trim();
    if text.is_empty() {
        return vec![];
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    'words: for word in text.split_whitespace() {
        let mut word: String = word.to_string();
        loop {
            let current_len = current.chars().count();
            let word_len = word.chars().count();

            if current_len == 0 && word_len <= width {
                current = word;
                continue 'words;
            }
            if current_len > 0 && current_len + 1 + word_len <= width {
                current.push(' ');
                current.push_str(&word);
                continue 'words;
            }

            // Flush the current line and retry, breaking the word if it still
            // cannot fit on an empty line.
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
            } else {
                let head: String = word.chars().take(width).collect();
                word = word.chars().skip(width).collect();
                if word.is_empty() {
                    current = head;
                    continue 'words;
                }
                lines.push(head);
            }
            if lines.len() >= max_lines {
                return with_ellipsis(lines, width);
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Mark the last line as truncated.
fn with_ellipsis(mut lines: Vec<String>, width: usize) -> Vec<String> {
    if let Some(last) = lines.last_mut() {
        if last.chars().count() + 3 > width {
            *last = last.chars().take(width.saturating_sub(3)).collect();
        }
        last.push_str("...");
    }
    lines
}
