/// Stage 1: turn forced line-break markers into real newlines
///
/// Markers paired with a newline on either side collapse into that newline
/// before standalone markers are replaced, so redundant pairs do not leave
/// doubled blank lines behind.
pub fn normalize_breaks(text: &str, marker: &str) -> String {
    if marker.is_empty() {
        return text.to_string();
    }

    let trailing = format!("{}\n", marker);
    let leading = format!("\n{}", marker);

    text.replace(&trailing, "\n")
        .replace(&leading, "\n")
        .replace(marker, "\n")
}
