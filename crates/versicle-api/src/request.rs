use versicle_model::ContentMode;

/// Options for the verse-by-id endpoint family.
///
/// `include-notes`, `include-titles` and `include-verse-spans` are fixed
/// by the request contract; only the two numeral switches vary.
#[derive(Debug, Clone, Copy)]
pub struct VerseOptions {
    pub include_chapter_numbers: bool,
    pub include_verse_numbers: bool,
}

impl Default for VerseOptions {
    fn default() -> Self {
        Self {
            include_chapter_numbers: false,
            include_verse_numbers: true,
        }
    }
}

/// Endpoint path (relative to the bibles base URL) for a content mode.
pub fn endpoint_path(mode: ContentMode, bible_id: &str, reference: &str) -> String {
    match mode {
        ContentMode::Html => format!("{bible_id}/search"),
        ContentMode::StructuredItems | ContentMode::PlainText => {
            format!("{bible_id}/verses/{reference}")
        }
    }
}

/// Build the parameter set matching the chosen content mode.
///
/// Search mode carries only the `query` key; when no reference is given
/// the key is omitted entirely (the caller is doing discovery, not verse
/// retrieval). The verse-by-id modes enumerate the content options and
/// differ only in `content-type`.
pub fn build_params(
    mode: ContentMode,
    reference: Option<&str>,
    options: &VerseOptions,
) -> Vec<(String, String)> {
    match mode {
        ContentMode::Html => reference
            .map(|r| vec![("query".to_string(), r.to_string())])
            .unwrap_or_default(),
        ContentMode::StructuredItems => verse_params("json", options),
        ContentMode::PlainText => verse_params("text", options),
    }
}

fn verse_params(content_type: &str, options: &VerseOptions) -> Vec<(String, String)> {
    vec![
        ("content-type".to_string(), content_type.to_string()),
        ("include-notes".to_string(), "false".to_string()),
        ("include-titles".to_string(), "true".to_string()),
        (
            "include-chapter-numbers".to_string(),
            options.include_chapter_numbers.to_string(),
        ),
        (
            "include-verse-numbers".to_string(),
            options.include_verse_numbers.to_string(),
        ),
        ("include-verse-spans".to_string(), "false".to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_path_and_params() {
        let path = endpoint_path(ContentMode::Html, "kjv-01", "JHN.3.16-17");
        assert_eq!(path, "kjv-01/search");

        let params = build_params(
            ContentMode::Html,
            Some("JHN.3.16-17"),
            &VerseOptions::default(),
        );
        assert_eq!(
            params,
            vec![("query".to_string(), "JHN.3.16-17".to_string())]
        );
    }

    #[test]
    fn test_search_without_reference_omits_query() {
        let params = build_params(ContentMode::Html, None, &VerseOptions::default());
        assert!(params.is_empty());
    }

    #[test]
    fn test_verse_by_id_json_params() {
        let path = endpoint_path(ContentMode::StructuredItems, "kjv-01", "GEN.1.1");
        assert_eq!(path, "kjv-01/verses/GEN.1.1");

        let params = build_params(
            ContentMode::StructuredItems,
            Some("GEN.1.1"),
            &VerseOptions::default(),
        );
        let get = |k: &str| {
            params
                .iter()
                .find(|(name, _)| name == k)
                .map(|(_, v)| v.as_str())
        };
        assert_eq!(get("content-type"), Some("json"));
        assert_eq!(get("include-notes"), Some("false"));
        assert_eq!(get("include-titles"), Some("true"));
        assert_eq!(get("include-chapter-numbers"), Some("false"));
        assert_eq!(get("include-verse-numbers"), Some("true"));
        assert_eq!(get("include-verse-spans"), Some("false"));
    }

    #[test]
    fn test_verse_by_id_text_params() {
        let options = VerseOptions {
            include_chapter_numbers: true,
            include_verse_numbers: false,
        };
        let params = build_params(ContentMode::PlainText, Some("GEN.1.1"), &options);
        let get = |k: &str| {
            params
                .iter()
                .find(|(name, _)| name == k)
                .map(|(_, v)| v.as_str())
        };
        assert_eq!(get("content-type"), Some("text"));
        assert_eq!(get("include-chapter-numbers"), Some("true"));
        assert_eq!(get("include-verse-numbers"), Some("false"));
    }
}
