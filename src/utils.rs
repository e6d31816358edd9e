use std::time::Duration;
use unicode_width::UnicodeWidthStr;

const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];
const SPINNER_STEP_MS: u128 = 120;

/// Character-safe truncation with a trailing ellipsis.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Estimates the number of lines word wrapping produces at `max_width`
/// (matching ratatui `Wrap { trim: true }` closely enough for centering).
pub fn wrapped_line_count(text: &str, max_width: usize) -> usize {
    if max_width == 0 {
        return 0;
    }

    let mut total = 0;
    for line in text.split('\n') {
        let mut current = 0;
        let mut lines = 1;
        for word in line.split_whitespace() {
            let width = word.width();
            if current == 0 {
                current = width;
            } else if current + 1 + width <= max_width {
                current += 1 + width;
            } else {
                lines += 1;
                current = width;
            }
            // Words longer than the line are broken across rows
            while current > max_width {
                lines += 1;
                current -= max_width;
            }
        }
        total += lines;
    }
    total
}

/// Blank rows needed above `content_lines` to center them in `area_height`.
pub fn vertical_padding(content_lines: usize, area_height: u16) -> u16 {
    let area = area_height as usize;
    if content_lines >= area {
        0
    } else {
        ((area - content_lines) / 2) as u16
    }
}

pub fn spinner_frame(elapsed: Duration) -> &'static str {
    let step = (elapsed.as_millis() / SPINNER_STEP_MS) as usize;
    SPINNER_FRAMES[step % SPINNER_FRAMES.len()]
}
