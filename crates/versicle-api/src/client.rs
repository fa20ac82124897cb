use crate::cache::{self, CacheStore};
use crate::request::{build_params, endpoint_path, VerseOptions};
use anyhow::{Context, Result};
use serde_json::Value;
use versicle_model::{BibleSummary, ContentMode, VerseError};

pub const DEFAULT_BASE_URL: &str = "https://api.scripture.api.bible/v1/bibles";

/// Gateway to the scripture API.
///
/// Holds the transport, credentials and cache handle explicitly; nothing
/// here is ambient state. All requests carry the `api-key` header and go
/// through the cache, so a previously seen verse is served fully offline
/// within the TTL window.
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    cache: CacheStore,
}

impl Client {
    pub fn new(api_key: impl Into<String>, cache: CacheStore) -> Result<Self> {
        Self::with_base_url(api_key, cache, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(
        api_key: impl Into<String>,
        cache: CacheStore,
        base_url: impl Into<String>,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent("versicle/0.1 (scripture verse tool)")
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
            cache,
        })
    }

    /// Issue a GET against the bibles API and return the payload under
    /// the top-level `data` key.
    ///
    /// An empty `path` addresses the base URL itself (discovery). On a
    /// fresh cache hit no network call is made; on a miss the live body
    /// is stored before parsing. Non-success statuses fail with
    /// [`VerseError::Api`] and are not retried.
    pub async fn query(&self, path: &str, params: &[(String, String)]) -> Result<Value> {
        let url = if path.is_empty() {
            self.base_url.clone()
        } else {
            format!("{}/{}", self.base_url, path)
        };
        let headers = vec![("api-key".to_string(), self.api_key.clone())];
        let sig = cache::signature("GET", &url, &headers, params);

        let body = match self.cache.lookup(&sig) {
            Some(body) => {
                tracing::debug!(url = %url, "Serving response from cache");
                body
            }
            None => {
                tracing::info!(url = %url, "Fetching from scripture API");
                let response = self
                    .http
                    .get(&url)
                    .header("api-key", &self.api_key)
                    .query(params)
                    .send()
                    .await
                    .context("Failed to reach the scripture API")?;

                let status = response.status();
                // Read as text first so error bodies survive even when
                // they are not JSON.
                let text = response
                    .text()
                    .await
                    .context("Failed to read response body")?;

                if !status.is_success() {
                    return Err(VerseError::Api {
                        status: status.as_u16(),
                        body: text,
                    }
                    .into());
                }

                tracing::debug!(bytes = text.len(), "Received response");
                self.cache.store(&sig, &text);
                text
            }
        };

        let value: Value =
            serde_json::from_str(&body).context("Scripture API response is not valid JSON")?;
        Ok(extract_data(value)?)
    }

    /// Discovery: every bible the service offers.
    pub async fn all_bibles(&self) -> Result<Vec<BibleSummary>> {
        let data = self.query("", &[]).await?;
        serde_json::from_value(data).context("Unexpected bible feed shape")
    }

    /// Discovery: bibles filtered to one ISO 639-3 language code.
    pub async fn bibles_for_language(&self, code: &str) -> Result<Vec<BibleSummary>> {
        let params = vec![("language".to_string(), code.to_string())];
        let data = self.query("", &params).await?;
        serde_json::from_value(data).context("Unexpected bible feed shape")
    }

    /// Fetch one verse (or span) in the given content mode, returning the
    /// raw payload for the normalizer.
    pub async fn fetch_verse(
        &self,
        bible_id: &str,
        reference: &str,
        mode: ContentMode,
        options: &VerseOptions,
    ) -> Result<Value> {
        let path = endpoint_path(mode, bible_id, reference);
        let params = build_params(mode, Some(reference), options);
        self.query(&path, &params).await
    }
}

/// Pull the top-level `data` payload out of a response document.
fn extract_data(value: Value) -> Result<Value, VerseError> {
    match value {
        Value::Object(mut map) => map.remove("data").ok_or_else(|| {
            VerseError::MalformedResponse("missing top-level `data` key".to_string())
        }),
        _ => Err(VerseError::MalformedResponse(
            "response is not a JSON object".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    #[test]
    fn test_extract_data_present() {
        let value = json!({"data": {"passages": []}});
        let data = extract_data(value).unwrap();
        assert_eq!(data, json!({"passages": []}));
    }

    #[test]
    fn test_extract_data_missing() {
        assert!(matches!(
            extract_data(json!({"meta": {}})),
            Err(VerseError::MalformedResponse(_))
        ));
        assert!(matches!(
            extract_data(json!([1, 2, 3])),
            Err(VerseError::MalformedResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_cache_hit_skips_network() {
        // Base URL points at a closed port: any live fetch would fail,
        // so a successful query proves the cache short-circuited it.
        let dir = tempfile::tempdir().unwrap();
        let store = CacheStore::new(dir.path());
        let base = "http://127.0.0.1:9/v1/bibles";

        let params = vec![("query".to_string(), "GEN.1.1".to_string())];
        let headers = vec![("api-key".to_string(), "test-key".to_string())];
        let sig = cache::signature("GET", &format!("{base}/kjv-01/search"), &headers, &params);
        store.store(&sig, r#"{"data":{"passages":[{"reference":"Genesis 1:1"}]}}"#);

        let client = Client::with_base_url("test-key", store, base).unwrap();
        let data = client.query("kjv-01/search", &params).await.unwrap();
        assert_eq!(
            data,
            json!({"passages": [{"reference": "Genesis 1:1"}]})
        );
    }

    #[tokio::test]
    async fn test_non_success_status_surfaces_api_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            let payload = "not found";
            let response = format!(
                "HTTP/1.1 404 Not Found\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{payload}",
                payload.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
        });

        let dir = tempfile::tempdir().unwrap();
        let store = CacheStore::new(dir.path());
        let client =
            Client::with_base_url("test-key", store, format!("http://{addr}/v1/bibles")).unwrap();

        let err = client.query("missing/verses/GEN.1.1", &[]).await.unwrap_err();
        match err.downcast_ref::<VerseError>() {
            Some(VerseError::Api { status, body }) => {
                assert_eq!(*status, 404);
                assert_eq!(body, "not found");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }
}
