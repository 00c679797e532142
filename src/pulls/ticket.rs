//! Ticket reference lookup in pull request bodies

/// Extract the first bracketed tracker reference with the given prefix
///
/// For `prefix = "PRD"` the marker is `[PRD-`; the returned slice runs from
/// just after the `[` up to the next `]`, so `"see [PRD-17]"` gives
/// `"PRD-17"`. A marker at the very start of `text` is not reported, nor is
/// one without a closing bracket.
pub fn extract_ticket<'a>(text: &'a str, prefix: &str) -> &'a str {
    let marker = format!("[{}-", prefix);
    let Some(start) = text.find(&marker) else {
        return "";
    };
    if start == 0 {
        return "";
    }

    let partial = &text[start + 1..];
    match partial.find(']') {
        Some(end) => &partial[..end],
        None => "",
    }
}
