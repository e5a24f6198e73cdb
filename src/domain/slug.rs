// src/domain/slug.rs
//! URL slugs for catalog entities.
//!
//! A slug is derived from a human title with [`normalize`] and then made
//! unique inside its collection with [`resolve_unique`], which queries the
//! store through a [`SlugLookup`] and appends `-1`, `-2`, ... until it finds a
//! free value. The lookup is a best-effort pre-check: two writers racing on the
//! same title can both observe a free slug, so the store's unique index is the
//! backstop and its violation surfaces as [`DomainError::Conflict`].

use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use std::fmt;

/// Upper bound on suffix lookups before giving up on a candidate.
pub const MAX_SLUG_ATTEMPTS: u32 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    /// Wraps an already-normalized value, e.g. one read back from storage or a
    /// path segment. Only emptiness is checked here.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation("slug cannot be empty"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn with_suffix(&self, counter: u32) -> Self {
        Self(format!("{}-{counter}", self.0))
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

/// Duplicate check backed by the collection that owns the slugs.
#[async_trait]
pub trait SlugLookup<Id>: Send + Sync
where
    Id: Copy + Send + Sync + 'static,
{
    /// Whether an entity other than `exclude` already holds `slug`.
    async fn slug_exists(&self, slug: &Slug, exclude: Option<Id>) -> DomainResult<bool>;
}

/// The ECMAScript `\s` class. Unlike `char::is_whitespace` it contains
/// U+FEFF and not U+0085.
fn is_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

fn is_separator(c: char) -> bool {
    c == '-' || c == '_' || is_space(c)
}

/// Turns free text into a slug candidate.
///
/// Lower-cases and trims the input, drops everything that is not an ASCII
/// word character, whitespace or `-`, folds each run of whitespace,
/// underscores and hyphens into a single `-`, and strips hyphens at both ends.
pub fn normalize(text: &str) -> DomainResult<Slug> {
    let lowered = text.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut pending_separator = false;

    for c in lowered
        .trim_matches(is_space)
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || is_separator(*c))
    {
        if is_separator(c) {
            pending_separator = true;
            continue;
        }
        if pending_separator && !out.is_empty() {
            out.push('-');
        }
        pending_separator = false;
        out.push(c);
    }

    if out.is_empty() {
        return Err(DomainError::validation("title is required"));
    }
    Ok(Slug(out))
}

/// Returns `candidate` or the first `candidate-N` that `lookup` reports free.
///
/// Storage errors from the lookup are returned as-is; only collisions are
/// retried.
pub async fn resolve_unique<Id, L>(
    candidate: &Slug,
    exclude: Option<Id>,
    lookup: &L,
) -> DomainResult<Slug>
where
    Id: Copy + Send + Sync + 'static,
    L: SlugLookup<Id> + ?Sized,
{
    let mut slug = candidate.clone();
    for counter in 1..=MAX_SLUG_ATTEMPTS {
        if !lookup.slug_exists(&slug, exclude).await? {
            return Ok(slug);
        }
        slug = candidate.with_suffix(counter);
    }

    tracing::error!(candidate = %candidate, "slug suffix attempts exhausted");
    Err(DomainError::Invariant(format!(
        "no free slug for '{candidate}' after {MAX_SLUG_ATTEMPTS} attempts"
    )))
}

/// Normalizes `title` and resolves it to a collection-unique slug.
pub async fn assign_slug<Id, L>(title: &str, exclude: Option<Id>, lookup: &L) -> DomainResult<Slug>
where
    Id: Copy + Send + Sync + 'static,
    L: SlugLookup<Id> + ?Sized,
{
    let candidate = normalize(title)?;
    resolve_unique(&candidate, exclude, lookup).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Slugs mapped to the id of the entity holding them.
    struct Taken {
        slugs: HashMap<String, i64>,
        calls: AtomicU32,
    }

    impl Taken {
        fn new(entries: &[(&str, i64)]) -> Self {
            Self {
                slugs: entries
                    .iter()
                    .map(|(slug, id)| ((*slug).to_string(), *id))
                    .collect(),
                calls: AtomicU32::new(0),
            }
        }
    }

    #[async_trait]
    impl SlugLookup<i64> for Taken {
        async fn slug_exists(&self, slug: &Slug, exclude: Option<i64>) -> DomainResult<bool> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self
                .slugs
                .get(slug.as_str())
                .is_some_and(|owner| Some(*owner) != exclude))
        }
    }

    struct AlwaysTaken;

    #[async_trait]
    impl SlugLookup<i64> for AlwaysTaken {
        async fn slug_exists(&self, _slug: &Slug, _exclude: Option<i64>) -> DomainResult<bool> {
            Ok(true)
        }
    }

    struct Unreachable;

    #[async_trait]
    impl SlugLookup<i64> for Unreachable {
        async fn slug_exists(&self, _slug: &Slug, _exclude: Option<i64>) -> DomainResult<bool> {
            Err(DomainError::Persistence("connection refused".into()))
        }
    }

    fn slug(value: &str) -> Slug {
        Slug::new(value).unwrap()
    }

    #[test]
    fn normalize_lowercases_and_hyphenates() {
        assert_eq!(normalize("Nature").unwrap().as_str(), "nature");
        assert_eq!(
            normalize("  Golden Hour at the Lake ").unwrap().as_str(),
            "golden-hour-at-the-lake"
        );
        assert_eq!(normalize("snake_case  and--dashes").unwrap().as_str(), "snake-case-and-dashes");
    }

    #[test]
    fn normalize_strips_punctuation_and_edge_hyphens() {
        assert_eq!(normalize("Don't Stop!").unwrap().as_str(), "dont-stop");
        assert_eq!(normalize("--Edge Case--").unwrap().as_str(), "edge-case");
        assert_eq!(normalize("_lead & trail_").unwrap().as_str(), "lead-trail");
        assert_eq!(normalize("Café Noir").unwrap().as_str(), "caf-noir");
    }

    #[test]
    fn separators_follow_the_ecmascript_space_class() {
        assert_eq!(normalize("a\u{FEFF}b").unwrap().as_str(), "a-b");
        assert_eq!(normalize("a\u{0085}b").unwrap().as_str(), "ab");
        assert_eq!(normalize("a\u{3000}b\u{A0}c").unwrap().as_str(), "a-b-c");
        assert_eq!(normalize("\u{FEFF}Lake\u{FEFF}").unwrap().as_str(), "lake");
    }

    #[test]
    fn normalize_rejects_text_without_word_characters() {
        assert!(matches!(normalize(""), Err(DomainError::Validation(_))));
        assert!(matches!(normalize("   "), Err(DomainError::Validation(_))));
        assert!(matches!(normalize("!!! ---"), Err(DomainError::Validation(_))));
    }

    #[test]
    fn normalize_output_is_lowercase_words_and_inner_hyphens() {
        let inputs = [
            "Hello World",
            "  multiple   spaces  ",
            "MiXeD_CaSe-Title",
            "tabs\tand\nnewlines",
            "123 Numbers 456",
            "-_- odd -_- input -_-",
            "Ünïcödé Letters",
            "a",
        ];
        for input in inputs {
            let out = normalize(input).unwrap();
            let s = out.as_str();
            assert!(
                s.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "unexpected character in {s:?} (from {input:?})"
            );
            assert!(!s.starts_with('-') && !s.ends_with('-'), "edge hyphen in {s:?}");
            assert!(!s.contains("--"), "double hyphen in {s:?}");
        }
    }

    #[tokio::test]
    async fn resolve_returns_candidate_when_free() {
        let lookup = Taken::new(&[]);
        let resolved = resolve_unique(&slug("nature"), None, &lookup).await.unwrap();
        assert_eq!(resolved.as_str(), "nature");
        assert_eq!(lookup.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn resolve_skips_taken_suffixes() {
        let lookup = Taken::new(&[("c", 1), ("c-1", 2)]);
        let resolved = resolve_unique(&slug("c"), None, &lookup).await.unwrap();
        assert_eq!(resolved.as_str(), "c-2");
        assert_eq!(lookup.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn resolve_keeps_own_slug_when_excluded() {
        let lookup = Taken::new(&[("nature", 7)]);
        let resolved = resolve_unique(&slug("nature"), Some(7), &lookup).await.unwrap();
        assert_eq!(resolved.as_str(), "nature");

        let other = resolve_unique(&slug("nature"), Some(8), &lookup).await.unwrap();
        assert_eq!(other.as_str(), "nature-1");
    }

    #[tokio::test]
    async fn resolve_propagates_lookup_failures() {
        let err = resolve_unique(&slug("nature"), None, &Unreachable)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Persistence(_)));
    }

    #[tokio::test]
    async fn resolve_stops_at_attempt_cap() {
        let err = resolve_unique(&slug("loop"), None, &AlwaysTaken)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Invariant(_)));
    }

    #[tokio::test]
    async fn assign_normalizes_before_resolving() {
        let lookup = Taken::new(&[("summer-light", 3)]);
        let resolved = assign_slug("Summer Light", None, &lookup).await.unwrap();
        assert_eq!(resolved.as_str(), "summer-light-1");

        let err = assign_slug("  ", None, &lookup).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
