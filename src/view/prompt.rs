/// Interpret the answer of a blocking title prompt.
///
/// `None` (cancelled) and whitespace-only answers yield `None`, meaning the
/// caller leaves its state untouched.
pub fn prompt_title(answer: Option<&str>) -> Option<String> {
    let trimmed = answer?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
