//! On-disk cache of previously posted topics.
//!
//! Plain text, one topic per line. Blank lines are skipped on load so the
//! file can be hand-edited. There is no comment syntax: topics themselves
//! routinely start with `#` ("#CameronMustGo"), so every non-blank line is
//! data.

use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("failed to read seen-topics cache {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write seen-topics cache {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Topics already posted, backed by a plain-text file.
#[derive(Debug)]
pub struct SeenCache {
    path: PathBuf,
    topics: Vec<String>,
}

impl SeenCache {
    /// Load the cache from `path`. A missing file is an empty cache, not an
    /// error.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, CacheError> {
        let path = path.into();
        let topics = match fs::read_to_string(&path) {
            Ok(content) => content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(CacheError::Read { path, source: e }),
        };
        Ok(Self { path, topics })
    }

    pub fn topics(&self) -> &[String] {
        &self.topics
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, topic: &str) -> bool {
        super::is_already_seen(topic, &self.topics)
    }

    /// Remember `topic` and persist the whole cache.
    pub fn record(&mut self, topic: &str) -> Result<(), CacheError> {
        self.topics.push(topic.to_string());
        self.save()
    }

    fn save(&self) -> Result<(), CacheError> {
        let write_err = |source| CacheError::Write {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        let mut content = self.topics.join("\n");
        content.push('\n');
        fs::write(&self.path, content).map_err(write_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let cache = SeenCache::load(dir.path().join("seen.txt")).unwrap();
        assert!(cache.topics().is_empty());
    }

    #[test]
    fn test_record_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("seen.txt");

        let mut cache = SeenCache::load(&path).unwrap();
        cache.record("Led Zeppelin").unwrap();
        cache.record("#CameronMustGo").unwrap();

        let reloaded = SeenCache::load(&path).unwrap();
        assert_eq!(reloaded.topics(), ["Led Zeppelin", "#CameronMustGo"]);
        assert!(reloaded.contains("led zeppelin"));
        assert!(!reloaded.contains("Mariah"));
    }

    #[test]
    fn test_blank_lines_skipped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("seen.txt");
        std::fs::write(&path, "\nMariah\n\n").unwrap();

        let cache = SeenCache::load(&path).unwrap();
        assert_eq!(cache.topics(), ["Mariah"]);
    }

    #[test]
    fn test_hashtag_topic_survives_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("seen.txt");

        let mut cache = SeenCache::load(&path).unwrap();
        cache.record("#CameronMustGo").unwrap();

        let reloaded = SeenCache::load(&path).unwrap();
        assert_eq!(reloaded.topics(), ["#CameronMustGo"]);
        assert!(reloaded.contains("#cameronmustgo"));
    }
}
