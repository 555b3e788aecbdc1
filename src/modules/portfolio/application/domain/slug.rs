use crate::shared::slug::slugify;

/// Candidates tried before giving up with a conflict.
pub const MAX_SLUG_ATTEMPTS: usize = 50;

const FALLBACK_SLUG: &str = "portfolio";

/// Normalized slug for a title or requested slug, never empty.
pub fn base_slug(input: &str) -> String {
    let slug = slugify(input);
    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

pub fn duplicate_base(original_slug: &str) -> String {
    base_slug(&format!("{original_slug}-copy"))
}

/// `base`, `base-1`, `base-2`, ... bounded by [`MAX_SLUG_ATTEMPTS`].
#[derive(Debug, Clone)]
pub struct SlugCandidates {
    base: String,
    next: usize,
}

impl SlugCandidates {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            next: 0,
        }
    }
}

impl Iterator for SlugCandidates {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= MAX_SLUG_ATTEMPTS {
            return None;
        }
        let candidate = match self.next {
            0 => self.base.clone(),
            n => format!("{}-{}", self.base, n),
        };
        self.next += 1;
        Some(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_follow_suffix_order() {
        let first: Vec<String> = SlugCandidates::new("my-work").take(3).collect();

        assert_eq!(first, vec!["my-work", "my-work-1", "my-work-2"]);
    }

    #[test]
    fn candidates_are_bounded() {
        let all: Vec<String> = SlugCandidates::new("x").collect();

        assert_eq!(all.len(), MAX_SLUG_ATTEMPTS);
        assert_eq!(all.last().unwrap(), "x-49");
    }

    #[test]
    fn base_slug_normalizes_and_falls_back() {
        assert_eq!(base_slug("My Work"), "my-work");
        assert_eq!(base_slug("***"), "portfolio");
    }

    #[test]
    fn duplicate_base_appends_copy() {
        assert_eq!(duplicate_base("my-work"), "my-work-copy");
    }
}
