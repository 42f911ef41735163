//! Column fitting helpers for fixed-width terminal tables.
//!
//! Widths are measured in terminal columns, not Unicode scalar count, so
//! wide characters in security names and locations line up correctly.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates text to the provided display width, appending an ellipsis when
/// content was cut.
pub(crate) fn truncate_to_display_width(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if text.width() <= max_width {
        return text.to_owned();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let target_width = max_width.saturating_sub(3);
    let mut truncated = String::new();
    let mut current_width = 0;
    for ch in text.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width + char_width > target_width {
            break;
        }
        truncated.push(ch);
        current_width += char_width;
    }
    format!("{truncated}...")
}

/// Fits text into a fixed-width column: truncated when too long, padded with
/// spaces when too short.
pub(crate) fn fit_to_column(text: &str, width: usize) -> String {
    let mut fitted = truncate_to_display_width(text, width);
    let current = fitted.width();
    if current < width {
        fitted.extend(std::iter::repeat_n(' ', width - current));
    }
    fitted
}
