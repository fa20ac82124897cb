pub mod cache;
pub mod client;
pub mod request;

pub use cache::CacheStore;
pub use client::{Client, DEFAULT_BASE_URL};
pub use request::{build_params, endpoint_path, VerseOptions};
