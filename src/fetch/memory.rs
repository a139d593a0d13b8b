//! In-memory fetcher with a request log

use std::collections::HashMap;
use std::io;
use std::sync::Mutex;

use super::{FetchError, Fetcher};

#[derive(Debug, Clone)]
enum Resource {
    Body(String),
    Broken,
}

/// Resource table held in memory
///
/// Unknown paths answer `NotFound`; paths registered with [`MemoryFetcher::fail`]
/// answer a transport error. Every request is recorded.
#[derive(Debug, Default)]
pub struct MemoryFetcher {
    resources: HashMap<String, Resource>,
    requests: Mutex<Vec<String>>,
}

impl MemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`MemoryFetcher::insert`]
    pub fn with(mut self, path: &str, body: &str) -> Self {
        self.insert(path, body);
        self
    }

    pub fn insert(&mut self, path: &str, body: &str) {
        self.resources
            .insert(path.to_string(), Resource::Body(body.to_string()));
    }

    /// Make every request for `path` fail in transit
    pub fn fail(&mut self, path: &str) {
        self.resources.insert(path.to_string(), Resource::Broken);
    }

    pub fn remove(&mut self, path: &str) {
        self.resources.remove(path);
    }

    /// Paths requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|log| log.clone())
            .unwrap_or_default()
    }

    /// Number of requests made for `path`
    pub fn request_count(&self, path: &str) -> usize {
        self.requests().iter().filter(|p| p.as_str() == path).count()
    }

    pub fn clear_requests(&self) {
        if let Ok(mut log) = self.requests.lock() {
            log.clear();
        }
    }
}

impl Fetcher for MemoryFetcher {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        if let Ok(mut log) = self.requests.lock() {
            log.push(path.to_string());
        }

        match self.resources.get(path) {
            Some(Resource::Body(body)) => Ok(body.clone()),
            Some(Resource::Broken) => Err(FetchError::Transport {
                path: path.to_string(),
                source: io::Error::new(io::ErrorKind::ConnectionReset, "connection reset"),
            }),
            None => Err(FetchError::NotFound {
                path: path.to_string(),
            }),
        }
    }
}
