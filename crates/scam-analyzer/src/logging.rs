const LOG_EXCERPT_CHARS: usize = 200;

/// Single-line, length-capped rendering of a service body for log fields.
pub(crate) fn escape_log_body(body: &str) -> String {
    if body.is_empty() {
        return "<empty>".to_string();
    }
    let excerpt = truncate_chars(body, LOG_EXCERPT_CHARS);
    excerpt.replace('\n', "\\n").replace('\r', "\\r")
}

pub(crate) fn truncate_chars(value: &str, max_chars: usize) -> &str {
    match value.char_indices().nth(max_chars) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}
