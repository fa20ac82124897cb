use anyhow::Result;
use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};
use versicle_api::Client;
use versicle_model::{
    resolve_languages, resolve_translations, validate_language, validate_translation,
    TranslationEntry,
};

/// Interactive language → translation flow. Returns the bible ID to
/// query for verses.
pub async fn choose_bible(client: &Client) -> Result<String> {
    let bibles = client.all_bibles().await?;
    let languages = resolve_languages(&bibles);
    print_languages(&languages);
    let code = prompt_language(&languages)?;

    let bibles = client.bibles_for_language(&code).await?;
    let translations = resolve_translations(&bibles);
    print_translations(&translations);
    let translation = prompt_translation(&translations)?;

    Ok(translation.id)
}

pub fn print_languages(languages: &BTreeMap<String, String>) {
    for (name, code) in languages {
        println!("{code} {}", capitalize(name));
    }
}

pub fn print_translations(translations: &BTreeMap<String, TranslationEntry>) {
    for (abbreviation, entry) in translations {
        println!("{} {}", abbreviation.to_uppercase(), entry.name);
    }
}

/// Blocking retry-until-valid loop. The only normal exit is a valid
/// selection; invalid input prints `Invalid selection.` and asks again.
/// A closed stdin aborts instead of spinning.
fn prompt_language(languages: &BTreeMap<String, String>) -> Result<String> {
    loop {
        let input =
            read_line("Select a language using the ISO 639 code or full language name: ")?;
        match validate_language(&input, languages) {
            Ok(code) => return Ok(code),
            Err(_) => println!("Invalid selection."),
        }
    }
}

fn prompt_translation(
    translations: &BTreeMap<String, TranslationEntry>,
) -> Result<TranslationEntry> {
    loop {
        let input = read_line("Select a translation by its abbreviation: ")?;
        match validate_translation(&input, translations) {
            Ok(entry) => return Ok(entry.clone()),
            Err(_) => println!("Invalid selection."),
        }
    }
}

fn read_line(prompt_text: &str) -> Result<String> {
    print!("{prompt_text}");
    io::stdout().flush()?;

    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line)?;
    if read == 0 {
        anyhow::bail!("stdin closed before a selection was made");
    }
    Ok(line.trim().to_string())
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
