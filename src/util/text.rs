#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

/// Trim `input` and reject blank results.
///
/// Composer submissions use this as their only client-side validation:
/// whitespace-only input never reaches the server.
pub fn non_blank(input: &str) -> Option<&str> {
    let trimmed = input.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}
