//! Resource fetching
//!
//! All content is addressed by site-relative paths such as `pages/home.md`
//! or `blog/index.json`. A [`Fetcher`] resolves them; the controller never
//! touches the filesystem directly.

mod fs;
mod memory;

pub use fs::FsFetcher;
pub use memory::MemoryFetcher;

use serde::de::DeserializeOwned;

/// Errors raised while fetching a resource
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The resource does not exist (non-success status).
    #[error("resource not found: {path}")]
    NotFound { path: String },

    /// The resource could not be transferred.
    #[error("failed to fetch {path}")]
    Transport {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The resource is not valid JSON for the requested type.
    #[error("malformed JSON in {path}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    pub fn path(&self) -> &str {
        match self {
            FetchError::NotFound { path }
            | FetchError::Transport { path, .. }
            | FetchError::Json { path, .. } => path,
        }
    }
}

/// Source of site resources
#[allow(async_fn_in_trait)]
pub trait Fetcher {
    /// Fetch a resource as text
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError>;

    /// Fetch a resource and decode it as JSON
    async fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let text = self.fetch_text(path).await?;
        serde_json::from_str(&text).map_err(|source| FetchError::Json {
            path: path.to_string(),
            source,
        })
    }
}
