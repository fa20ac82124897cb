//! Reduces the scripture API's three response encodings to one canonical
//! `NormalizedVerse`.
//!
//! Which branch runs is decided by the [`ContentMode`] chosen at
//! request-build time, never by sniffing the response contents.

mod strip;

pub use strip::{strip_digits, strip_tags};

use serde_json::Value;
use versicle_model::{ContentMode, NormalizedVerse, VerseError};

/// Convert a raw `data` payload into a normalized verse.
pub fn normalize(data: &Value, mode: ContentMode) -> Result<NormalizedVerse, VerseError> {
    match mode {
        ContentMode::Html => normalize_search(data),
        ContentMode::StructuredItems => normalize_structured(data),
        ContentMode::PlainText => normalize_plain(data),
    }
}

/// Search response: HTML-tagged passage content.
///
/// The stripped text still carries the verse/chapter numerals the
/// service embeds, so a second character-level pass removes ASCII
/// digits. Nothing is trimmed; digit holes stay as doubled spaces.
fn normalize_search(data: &Value) -> Result<NormalizedVerse, VerseError> {
    let passage = require(
        data.get("passages").and_then(|p| p.get(0)),
        "passages[0]",
    )?;
    let reference = require_str(passage.get("reference"), "passages[0].reference")?;
    let content = require_str(passage.get("content"), "passages[0].content")?;

    let text = strip_digits(&strip_tags(content));

    Ok(NormalizedVerse {
        reference: reference.to_string(),
        text,
    })
}

/// Verse-by-id response with `content-type=json`: nested item arrays.
///
/// The text lives at the fixed path `content[0].items[1].text`. The
/// service documents no schema for this nesting, so each level is
/// checked and a miss fails loudly rather than returning empty text.
fn normalize_structured(data: &Value) -> Result<NormalizedVerse, VerseError> {
    let reference = require_str(data.get("reference"), "reference")?;

    let block = require(data.get("content").and_then(|c| c.get(0)), "content[0]")?;
    let item = require(
        block.get("items").and_then(|i| i.get(1)),
        "content[0].items[1]",
    )?;
    let text = require_str(item.get("text"), "content[0].items[1].text")?;

    Ok(NormalizedVerse {
        reference: reference.to_string(),
        text: text.to_string(),
    })
}

/// Verse-by-id response with `content-type=text`.
///
/// Only outer whitespace is removed. Numerals the service chose to
/// include are part of the contract here and are preserved verbatim.
fn normalize_plain(data: &Value) -> Result<NormalizedVerse, VerseError> {
    let reference = require_str(data.get("reference"), "reference")?;
    let content = require_str(data.get("content"), "content")?;

    Ok(NormalizedVerse {
        reference: reference.to_string(),
        text: content.trim().to_string(),
    })
}

fn require<'a>(value: Option<&'a Value>, what: &str) -> Result<&'a Value, VerseError> {
    value.ok_or_else(|| VerseError::MalformedResponse(format!("missing {what}")))
}

fn require_str<'a>(value: Option<&'a Value>, what: &str) -> Result<&'a str, VerseError> {
    require(value, what)?
        .as_str()
        .ok_or_else(|| VerseError::MalformedResponse(format!("{what} is not a string")))
}
