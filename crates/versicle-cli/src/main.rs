mod prompt;

use anyhow::Result;
use clap::{Parser, Subcommand};
use versicle_api::{CacheStore, Client, VerseOptions};
use versicle_model::{
    resolve_languages, resolve_translations, ContentMode, VerseCatalog, VerseError,
};

/// King James Version — the translation used when none is chosen.
const DEFAULT_BIBLE_ID: &str = "de4e12af7f28f599-01";

#[derive(Parser)]
#[command(name = "versicle")]
#[command(about = "Scripture verse retrieval and display tool")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_HASH"), ")"))]
struct Cli {
    /// Log level: error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "info", value_enum)]
    log_level: LogLevel,

    /// API key for api.scripture.api.bible; falls back to the
    /// SCRIPTURE_API_KEY environment variable
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Directory holding the response cache
    #[arg(long, global = true, default_value = ".versicle-cache")]
    cache_dir: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch one verse and print it
    Fetch {
        /// Verse reference (e.g., "JHN.3.16-17"); a random pick from the
        /// built-in catalog when omitted
        #[arg(short, long)]
        reference: Option<String>,

        /// Response shape to request from the service
        #[arg(short, long, value_enum, default_value = "search")]
        mode: FetchMode,

        /// Bible translation ID to query
        #[arg(short, long, default_value = DEFAULT_BIBLE_ID)]
        bible: String,

        /// Choose language and translation interactively first
        #[arg(short, long)]
        interactive: bool,

        /// Ask the service to include chapter numbers (verse modes only)
        #[arg(long)]
        chapter_numbers: bool,

        /// Ask the service to omit verse numbers (verse modes only)
        #[arg(long)]
        no_verse_numbers: bool,
    },

    /// List the languages the service offers
    Languages,

    /// List the translations available for a language
    Translations {
        /// ISO 639-3 language code (e.g., "eng")
        #[arg(short, long)]
        language: String,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum FetchMode {
    /// Search endpoint; the passage arrives as HTML markup
    Search,
    /// Verse-by-id endpoint with structured JSON content
    Json,
    /// Verse-by-id endpoint with plain text content
    Text,
}

impl From<FetchMode> for ContentMode {
    fn from(mode: FetchMode) -> Self {
        match mode {
            FetchMode::Search => ContentMode::Html,
            FetchMode::Json => ContentMode::StructuredItems,
            FetchMode::Text => ContentMode::PlainText,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Map log level, suppressing noisy HTML-parsing crates at debug/trace
    let level = match cli.log_level {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug,selectors=warn,html5ever=warn",
        LogLevel::Trace => "trace,selectors=warn,html5ever=warn",
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // Logs go to stderr; stdout carries only the verse output
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // Credentials are checked before any network call is attempted
    let api_key = cli
        .api_key
        .clone()
        .or_else(|| std::env::var("SCRIPTURE_API_KEY").ok())
        .filter(|key| !key.trim().is_empty())
        .ok_or(VerseError::CredentialsMissing)?;

    let cache = CacheStore::new(&cli.cache_dir);
    let client = Client::new(api_key, cache)?;

    match cli.command {
        Commands::Fetch {
            reference,
            mode,
            bible,
            interactive,
            chapter_numbers,
            no_verse_numbers,
        } => {
            let bible_id = if interactive {
                prompt::choose_bible(&client).await?
            } else {
                bible
            };

            let reference = match reference {
                Some(reference) => reference,
                None => VerseCatalog::default().pick_random()?.to_string(),
            };

            let mode = ContentMode::from(mode);
            let options = VerseOptions {
                include_chapter_numbers: chapter_numbers,
                include_verse_numbers: !no_verse_numbers,
            };

            tracing::info!(reference = %reference, bible = %bible_id, "Fetching verse");
            let data = client
                .fetch_verse(&bible_id, &reference, mode, &options)
                .await?;
            let verse = versicle_normalize::normalize(&data, mode)?;

            println!("{}\n\t{}", verse.reference, verse.text);
        }

        Commands::Languages => {
            let bibles = client.all_bibles().await?;
            let languages = resolve_languages(&bibles);
            tracing::info!(count = languages.len(), "Resolved languages");
            prompt::print_languages(&languages);
        }

        Commands::Translations { language } => {
            let bibles = client.bibles_for_language(&language).await?;
            let translations = resolve_translations(&bibles);
            tracing::info!(
                count = translations.len(),
                language = %language,
                "Resolved translations"
            );
            prompt::print_translations(&translations);
        }
    }

    Ok(())
}
