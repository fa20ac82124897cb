use crate::error::VerseError;
use crate::types::{BibleSummary, TranslationEntry};
use std::collections::BTreeMap;

/// Build the language mapping from a discovery feed.
///
/// One pass over the feed, inserting `lowercase name -> ISO 639-3 code`.
/// The feed repeats languages (one record per translation); the first
/// occurrence of a name wins and later duplicates are skipped.
pub fn resolve_languages(feed: &[BibleSummary]) -> BTreeMap<String, String> {
    let mut languages = BTreeMap::new();
    for bible in feed {
        let name = bible.language.name.to_lowercase();
        if !languages.contains_key(&name) {
            languages.insert(name, bible.language.id.clone());
        }
    }
    languages
}

/// Build the translation mapping from a (usually language-filtered) feed.
///
/// Keyed by lowercase abbreviation; first occurrence wins, matching the
/// language dedup policy.
pub fn resolve_translations(feed: &[BibleSummary]) -> BTreeMap<String, TranslationEntry> {
    let mut translations = BTreeMap::new();
    for bible in feed {
        let abbreviation = bible.abbreviation.to_lowercase();
        if !translations.contains_key(&abbreviation) {
            translations.insert(
                abbreviation,
                TranslationEntry {
                    id: bible.id.clone(),
                    name: bible.name.clone(),
                },
            );
        }
    }
    translations
}

/// Validate one language selection against the resolved mapping.
///
/// Accepts a 3-character ISO 639-3 code iff it is one of the mapping's
/// codes, otherwise accepts the input iff it is a language name present
/// in the mapping (case-insensitive). Returns the resolved code.
///
/// This is single-shot by design: the surrounding shell owns the
/// re-prompt loop and calls this once per attempt.
pub fn validate_language(
    input: &str,
    languages: &BTreeMap<String, String>,
) -> Result<String, VerseError> {
    let selection = input.trim().to_lowercase();
    if selection.len() == 3 && languages.values().any(|code| *code == selection) {
        return Ok(selection);
    }
    if let Some(code) = languages.get(&selection) {
        return Ok(code.clone());
    }
    Err(VerseError::InvalidSelection)
}

/// Validate one translation selection by its abbreviation
/// (case-insensitive). Returns the matching entry.
pub fn validate_translation<'a>(
    input: &str,
    translations: &'a BTreeMap<String, TranslationEntry>,
) -> Result<&'a TranslationEntry, VerseError> {
    let selection = input.trim().to_lowercase();
    translations
        .get(&selection)
        .ok_or(VerseError::InvalidSelection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Language;

    fn bible(id: &str, name: &str, abbrev: &str, lang_id: &str, lang_name: &str) -> BibleSummary {
        BibleSummary {
            id: id.to_string(),
            name: name.to_string(),
            abbreviation: abbrev.to_string(),
            language: Language {
                id: lang_id.to_string(),
                name: lang_name.to_string(),
            },
        }
    }

    fn sample_feed() -> Vec<BibleSummary> {
        vec![
            bible("kjv-01", "King James Version", "engKJV", "eng", "English"),
            // Same language under a different translation, case varies
            bible("asv-01", "American Standard Version", "engASV", "eng", "ENGLISH"),
            bible("rvr-01", "Reina Valera", "spaRVR", "spa", "Spanish"),
            // Duplicate abbreviation; the earlier id/name pair must win
            bible("kjv-02", "King James (reissue)", "ENGKJV", "eng", "english"),
        ]
    }

    #[test]
    fn test_languages_first_wins() {
        let languages = resolve_languages(&sample_feed());
        assert_eq!(languages.len(), 2);
        assert_eq!(languages.get("english").map(String::as_str), Some("eng"));
        assert_eq!(languages.get("spanish").map(String::as_str), Some("spa"));
    }

    #[test]
    fn test_translations_first_wins() {
        let translations = resolve_translations(&sample_feed());
        assert_eq!(translations.len(), 3);
        let kjv = translations.get("engkjv").unwrap();
        assert_eq!(kjv.id, "kjv-01");
        assert_eq!(kjv.name, "King James Version");
    }

    #[test]
    fn test_validate_language_by_code() {
        let languages = resolve_languages(&sample_feed());
        assert_eq!(validate_language("eng", &languages).unwrap(), "eng");
        assert_eq!(validate_language("SPA", &languages).unwrap(), "spa");
    }

    #[test]
    fn test_validate_language_by_name() {
        let languages = resolve_languages(&sample_feed());
        assert_eq!(validate_language("English", &languages).unwrap(), "eng");
        assert_eq!(validate_language("spanish", &languages).unwrap(), "spa");
    }

    #[test]
    fn test_validate_language_rejects_unknown() {
        let languages = resolve_languages(&sample_feed());
        // Three characters, but not a known code
        assert!(matches!(
            validate_language("xyz", &languages),
            Err(VerseError::InvalidSelection)
        ));
        assert!(matches!(
            validate_language("klingon", &languages),
            Err(VerseError::InvalidSelection)
        ));
        assert!(matches!(
            validate_language("", &languages),
            Err(VerseError::InvalidSelection)
        ));
    }

    #[test]
    fn test_validate_translation() {
        let translations = resolve_translations(&sample_feed());
        let entry = validate_translation("engKJV", &translations).unwrap();
        assert_eq!(entry.id, "kjv-01");
        assert!(matches!(
            validate_translation("nope", &translations),
            Err(VerseError::InvalidSelection)
        ));
    }
}
