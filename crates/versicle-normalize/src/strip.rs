use scraper::Html;

/// Strip all markup from an HTML fragment, keeping only text nodes.
///
/// Text fragments are concatenated in document order, so a tag boundary
/// never splits or reorders a text run. Character references are decoded
/// by the parser.
pub fn strip_tags(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    fragment.root_element().text().collect()
}

/// Remove every ASCII digit character.
///
/// The search endpoint embeds chapter/verse numerals directly in the
/// passage text; the markup pass cannot filter them, so they are dropped
/// in this second character-level pass. The holes they leave (usually a
/// doubled space) are left as-is.
pub fn strip_digits(text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_digit()).collect()
}
