//! Filename sanitization for exported content

/// Maximum length of a sanitized filename, in characters
const MAX_FILENAME_CHARS: usize = 250;

/// Produce a filesystem-safe name from arbitrary user-supplied text.
///
/// Takes the first 250 characters, keeps only ASCII letters, digits, and
/// spaces, and strips trailing whitespace left behind by the removal step.
/// The result may be empty when the input held no allowed characters;
/// callers must substitute their own default name in that case.
pub fn to_safe_filename(name: &str) -> String {
    let kept: String = name
        .chars()
        .take(MAX_FILENAME_CHARS)
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .collect();
    kept.trim_end().to_string()
}
