// Canonical decomposition and combining-mark handling.

use icu_normalizer::DecomposingNormalizerBorrowed;
use std::{borrow::Cow, sync::LazyLock};

pub use unicode_normalization::char::is_combining_mark;

// ── ICU4X ──
static ICU4X_NFD: LazyLock<DecomposingNormalizerBorrowed<'static>> =
    LazyLock::new(DecomposingNormalizerBorrowed::new_nfd);

/// NFD of `text`. Borrowed when already decomposed.
#[inline]
pub fn decompose(text: &str) -> Cow<'_, str> {
    ICU4X_NFD.normalize(text)
}

/// Drop every combining mark (General Category M). Borrowed when none present.
pub fn strip_marks(text: &str) -> Cow<'_, str> {
    if !text.chars().any(is_combining_mark) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.chars().filter(|&c| !is_combining_mark(c)).collect())
}

/// Base letters of `text`: canonical decomposition, then all marks removed.
///
/// `ḉ` (c + cedilla + acute) → `c`.
pub fn base_letters(text: &str) -> String {
    strip_marks(&decompose(text)).into_owned()
}

/// Exemplar clusters are written in braces: `{dž}`, `{ch}`.
#[inline]
pub fn is_cluster(token: &str) -> bool {
    token
        .strip_prefix('{')
        .and_then(|t| t.strip_suffix('}'))
        .is_some_and(|inner| !inner.is_empty())
}
