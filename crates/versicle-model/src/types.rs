use serde::{Deserialize, Serialize};

/// One bible record from the discovery feed (`GET /v1/bibles`).
///
/// The feed repeats languages and abbreviations across entries; the
/// resolver deduplicates, this struct just mirrors the wire shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BibleSummary {
    /// Service-assigned translation ID (e.g., "de4e12af7f28f599-01").
    pub id: String,
    /// Full translation name (e.g., "King James (Authorised) Version").
    pub name: String,
    /// Short translation label (e.g., "engKJV").
    pub abbreviation: String,
    pub language: Language,
}

/// Language block nested inside a [`BibleSummary`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Language {
    /// ISO 639-3 code (e.g., "eng").
    pub id: String,
    /// Display name (e.g., "English").
    pub name: String,
}

/// A translation as resolved from the feed: keyed externally by its
/// lowercase abbreviation, carrying the ID used in request paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationEntry {
    pub id: String,
    pub name: String,
}

/// The response-shape family requested from the service.
///
/// Chosen once at request-build time and threaded through to the
/// normalizer, so shape handling is a single explicit decision rather
/// than sniffing the response contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMode {
    /// Search endpoint; the passage arrives as HTML-tagged markup.
    Html,
    /// Verse-by-id endpoint with `content-type=json`; the passage
    /// arrives as nested item arrays.
    StructuredItems,
    /// Verse-by-id endpoint with `content-type=text`.
    PlainText,
}

/// The externally visible result: a canonical reference and clean text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedVerse {
    /// Reference exactly as the service reported it (e.g., "John 3:16-17").
    pub reference: String,
    pub text: String,
}
