use itertools::Itertools;

/// Longest label, in characters, kept by [`sanitize_label`].
pub const MAX_LABEL_CHARS: usize = 80;

/// Makes free text safe to place inside a `[...]` node box.
///
/// Square brackets are dropped, double quotes become single quotes, whitespace
/// runs collapse to one space and the result is cut to [`MAX_LABEL_CHARS`].
pub fn sanitize_label(text: &str) -> String {
    let cleaned: String = text
        .chars()
        .filter(|c| !matches!(c, '[' | ']'))
        .map(|c| if c == '"' { '\'' } else { c })
        .collect();

    cleaned
        .split_whitespace()
        .join(" ")
        .chars()
        .take(MAX_LABEL_CHARS)
        .collect()
}

/// Makes free text safe to place inside an `-->|...|` edge label.
///
/// Same rules as [`sanitize_label`], and `|` is dropped as well.
pub fn sanitize_condition(text: &str) -> String {
    sanitize_label(&text.replace('|', " "))
}
