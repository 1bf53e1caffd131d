//! Identifier normalization for generated test code.

/// Turns arbitrary human-readable text into an identifier fragment.
///
/// Spaces become underscores, every other character that is not
/// alphanumeric or an underscore is removed, one leading run of digits is
/// stripped together with the underscores immediately following it, and the
/// result is lowercased.
///
/// The function is total: any unicode input produces a (possibly empty)
/// identifier fragment. Callers emitting code must tolerate the empty
/// result for all-symbolic input.
#[must_use]
pub fn to_identifier(text: &str) -> String {
    let worded: String = text
        .chars()
        .map(|ch| if ch == ' ' { '_' } else { ch })
        .filter(|ch| *ch == '_' || ch.is_alphanumeric())
        .collect();
    let without_digits = worded.trim_start_matches(|ch: char| ch.is_numeric());
    let stripped = if without_digits.len() == worded.len() {
        without_digits
    } else {
        without_digits.trim_start_matches('_')
    };
    stripped.to_lowercase()
}
