//! Prompt text for the interactive adapter

use crate::config::defaults::{ELLIPSIS, PROMPT_FILE, PROMPT_FOLDER};
use crate::core::parser::is_separator;

/// Shorten `text` to `max_chars` by keeping its tail behind an ellipsis
///
/// Text that already fits is returned unchanged; otherwise the result is
/// exactly `max_chars` long.
pub fn trim_to_max_length(text: &str, max_chars: usize) -> String {
    let len = text.chars().count();
    if len <= max_chars {
        return text.to_string();
    }

    let ellipsis_len = ELLIPSIS.chars().count();
    if max_chars <= ellipsis_len {
        return ELLIPSIS.chars().take(max_chars).collect();
    }

    let keep = max_chars - ellipsis_len;
    let tail: String = text.chars().skip(len - keep).collect();
    format!("{ELLIPSIS}{tail}")
}

/// Label start matching what `input` would create
pub fn prompt_start(input: &str) -> &'static str {
    if input.trim_end().ends_with(is_separator) {
        PROMPT_FOLDER
    } else {
        PROMPT_FILE
    }
}

/// Full prompt label for `location`, trimmed to `max_chars`
pub fn prompt_label(start: &str, location: &str, max_chars: usize) -> String {
    trim_to_max_length(&format!("{start}{location}"), max_chars)
}

/// Usage hint shown before the first prompt
pub fn placeholder() -> String {
    let sep = std::path::MAIN_SEPARATOR;
    format!(
        "Enter a relative path: 'main{sep}src{sep}' creates folders, 'main{sep}src' (no separator at the end) creates a file."
    )
}
