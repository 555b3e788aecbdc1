use regex::Regex;
use std::sync::LazyLock;

static NON_SLUG_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^a-z0-9]+").expect("slug pattern is a valid regex")
});

/// Lower-cases `input`, collapses every run of characters outside `[a-z0-9]`
/// into one hyphen and trims hyphens from both ends.
///
/// Returns an empty string when nothing slug-worthy is left; callers decide
/// on the fallback.
pub fn slugify(input: &str) -> String {
    let lowered = input.to_lowercase();
    NON_SLUG_CHARS
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}
