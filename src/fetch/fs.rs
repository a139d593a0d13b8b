//! Filesystem-backed fetcher

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use super::{FetchError, Fetcher};

/// Serves site-relative paths from a root directory
#[derive(Debug, Clone)]
pub struct FsFetcher {
    root: PathBuf,
}

impl FsFetcher {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Map a site-relative path below the root; anything escaping it is rejected
    fn resolve(&self, path: &str) -> Option<PathBuf> {
        let relative = Path::new(path);
        let mut resolved = self.root.clone();
        for component in relative.components() {
            match component {
                Component::Normal(part) => resolved.push(part),
                Component::CurDir => {}
                _ => return None,
            }
        }
        Some(resolved)
    }
}

impl Fetcher for FsFetcher {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        let not_found = || FetchError::NotFound {
            path: path.to_string(),
        };
        let full_path = self.resolve(path).ok_or_else(not_found)?;

        tracing::debug!("Fetching {:?}", full_path);

        match tokio::fs::read_to_string(&full_path).await {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(not_found()),
            Err(e) if full_path.is_dir() => {
                tracing::debug!("{:?} is a directory: {}", full_path, e);
                Err(not_found())
            }
            Err(source) => Err(FetchError::Transport {
                path: path.to_string(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_fetch_text() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("pages")).unwrap();
        std::fs::write(dir.path().join("pages/home.md"), "# Home").unwrap();

        let fetcher = FsFetcher::new(dir.path());
        assert_eq!(fetcher.fetch_text("pages/home.md").await.unwrap(), "# Home");
        assert_eq!(fetcher.fetch_text("./pages/home.md").await.unwrap(), "# Home");
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let fetcher = FsFetcher::new(dir.path());
        let err = fetcher.fetch_text("blog/nope.md").await.unwrap_err();
        assert!(matches!(err, FetchError::NotFound { .. }));
        assert_eq!(err.path(), "blog/nope.md");
    }

    #[tokio::test]
    async fn test_escaping_paths_are_rejected() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("secret.txt"), "x").unwrap();
        let site = dir.path().join("site");
        std::fs::create_dir_all(&site).unwrap();

        let fetcher = FsFetcher::new(&site);
        let err = fetcher.fetch_text("../secret.txt").await.unwrap_err();
        assert!(matches!(err, FetchError::NotFound { .. }));
        let err = fetcher.fetch_text("/etc/hostname").await.unwrap_err();
        assert!(matches!(err, FetchError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_fetch_json() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("good.json"), r#"["a", "b"]"#).unwrap();
        std::fs::write(dir.path().join("bad.json"), "{not json").unwrap();

        let fetcher = FsFetcher::new(dir.path());
        let values: Vec<String> = fetcher.fetch_json("good.json").await.unwrap();
        assert_eq!(values, vec!["a", "b"]);

        let err = fetcher.fetch_json::<Vec<String>>("bad.json").await.unwrap_err();
        assert!(matches!(err, FetchError::Json { .. }));
    }
}
