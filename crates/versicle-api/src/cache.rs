use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

/// Entries older than this are treated as misses and refetched.
pub const DEFAULT_TTL_HOURS: i64 = 24;

/// Headers that never participate in the cache signature.
const VOLATILE_HEADERS: &[&str] = &["user-agent", "accept", "date"];

/// Canonical request signature: method, URL, stable headers, and
/// parameters sorted by name then value, one component per line.
///
/// Two requests that differ only in header/parameter ordering or in a
/// volatile header produce the same signature.
pub fn signature(
    method: &str,
    url: &str,
    headers: &[(String, String)],
    params: &[(String, String)],
) -> String {
    let mut stable_headers: Vec<String> = headers
        .iter()
        .filter(|(name, _)| !VOLATILE_HEADERS.contains(&name.to_lowercase().as_str()))
        .map(|(name, value)| format!("{}={}", name.to_lowercase(), value))
        .collect();
    stable_headers.sort();

    let mut sorted_params: Vec<String> = params
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect();
    sorted_params.sort();

    let mut lines = vec![method.to_uppercase(), url.to_string()];
    lines.extend(stable_headers);
    lines.extend(sorted_params);
    lines.join("\n")
}

/// One stored response body plus the metadata needed to validate it.
#[derive(Debug, Serialize, Deserialize)]
struct CacheEntry {
    signature: String,
    fetched_at: DateTime<Utc>,
    body: String,
}

/// Durable response cache: one JSON file per request signature.
///
/// Entries are immutable once written (within their TTL), so concurrent
/// processes need no locking; a racing writer simply wins the rename.
/// Read and write failures degrade to cache misses — the cache never
/// fails a request.
#[derive(Debug, Clone)]
pub struct CacheStore {
    dir: PathBuf,
    ttl: Duration,
}

impl CacheStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_ttl(dir, Duration::hours(DEFAULT_TTL_HOURS))
    }

    pub fn with_ttl(dir: impl Into<PathBuf>, ttl: Duration) -> Self {
        Self {
            dir: dir.into(),
            ttl,
        }
    }

    /// Return the stored body verbatim iff a fresh entry exists for the
    /// signature.
    pub fn lookup(&self, signature: &str) -> Option<String> {
        let path = self.entry_path(signature);
        if !path.exists() {
            return None;
        }

        let data = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read cache entry");
                return None;
            }
        };

        let entry: CacheEntry = match serde_json::from_str(&data) {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Corrupt cache entry");
                return None;
            }
        };

        // Key collisions aside, a stale signature means the file was
        // written for a different request shape; treat as a miss.
        if entry.signature != signature {
            tracing::warn!(path = %path.display(), "Cache entry signature mismatch");
            return None;
        }

        let age = Utc::now() - entry.fetched_at;
        if age > self.ttl {
            tracing::debug!(path = %path.display(), "Cache entry expired");
            return None;
        }

        Some(entry.body)
    }

    /// Store a response body under the signature. Errors are logged and
    /// swallowed; the caller already holds the live body.
    pub fn store(&self, signature: &str, body: &str) {
        let entry = CacheEntry {
            signature: signature.to_string(),
            fetched_at: Utc::now(),
            body: body.to_string(),
        };

        let json = match serde_json::to_string(&entry) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialize cache entry");
                return;
            }
        };

        let path = self.entry_path(signature);
        if let Err(e) = write_atomic(&path, json.as_bytes()) {
            tracing::warn!(path = %path.display(), error = %e, "Failed to write cache entry");
        }
    }

    fn entry_path(&self, signature: &str) -> PathBuf {
        let mut hasher = Sha256::new();
        hasher.update(signature.as_bytes());
        let key = hex::encode(hasher.finalize());
        self.dir.join(format!("{key}.json"))
    }
}

/// Write via a temp file in the same directory, then rename into place,
/// so a concurrent reader never observes a torn entry.
fn write_atomic(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut tmp = path.to_path_buf();
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("entry");
    tmp.set_file_name(format!("{file_name}.tmp"));

    fs::write(&tmp, bytes)?;
    fs::rename(&tmp, path)
}
