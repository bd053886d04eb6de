//! See [`RecordStore`].

use std::{
    fmt::{self, Debug, Formatter},
    io,
    path::{Path, PathBuf},
    sync::Arc,
};

use chrono::{DateTime, FixedOffset, Utc};
use tokio::fs;

use crate::{clock::Clock, error::Error};

/// The file name suffix of every record file.
const RECORD_SUFFIX: &str = ".txt";

/// The format of a record's file name before its suffix: ISO 8601 in UTC with millisecond
/// precision, using `-` in place of `:` so the name is valid on every filesystem.
const NAME_FORMAT: &str = "%Y-%m-%dT%H-%M-%S%.3fZ";

/// The format of a record's content, e.g. `Mon Jan 15 2024 10:30:00 GMT+0000`.
const CONTENT_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT%z";

/// A timestamped text file as it's written to the managed directory.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub(crate) struct Record {
    /// The record's file name, including its suffix.
    pub(crate) name: String,

    /// The record's text content.
    pub(crate) content: String,
}

impl Record {
    /// Constructs the [`Record`] describing an instant. The name is in UTC; the content is in the
    /// instant's own offset.
    pub(crate) fn at(instant: DateTime<FixedOffset>) -> Self {
        Self {
            name: format!(
                "{}{RECORD_SUFFIX}",
                instant.with_timezone(&Utc).format(NAME_FORMAT)
            ),
            content: instant.format(CONTENT_FORMAT).to_string(),
        }
    }
}

/// Returns whether a directory entry's name marks it as a record file.
fn is_record_name(name: &str) -> bool {
    name.ends_with(RECORD_SUFFIX)
}

/// Creates and lists [`Record`]s in one managed directory.
///
/// Nothing is cached: every operation ensures the directory exists and then goes straight to the
/// filesystem. Concurrent operations aren't coordinated, so two records created in the same
/// millisecond share a name and the later write wins.
#[derive(Clone)]
pub(crate) struct RecordStore {
    /// The managed directory.
    dir: PathBuf,

    /// The source of record timestamps.
    clock: Arc<dyn Clock>,
}

impl RecordStore {
    /// Constructs a [`RecordStore`] over a directory. The directory isn't touched until an
    /// operation runs.
    pub(crate) fn new(dir: PathBuf, clock: Arc<dyn Clock>) -> Self {
        Self { dir, clock }
    }

    /// Gets the managed directory's path.
    pub(crate) fn dir(&self) -> &Path {
        &self.dir
    }

    /// Creates the managed directory and any missing parents, doing nothing if it already exists.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory in the path can't be created or a non-directory is in the
    /// way.
    pub(crate) async fn ensure_dir(&self) -> io::Result<()> {
        fs::create_dir_all(&self.dir).await
    }

    /// Writes a new [`Record`] for the current instant, overwriting any record with the same name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Write`] if the directory can't be ensured or the file can't be written.
    pub(crate) async fn create(&self) -> Result<Record, Error> {
        self.ensure_dir().await.map_err(Error::Write)?;

        let record = Record::at(self.clock.now());

        fs::write(self.dir.join(&record.name), &record.content)
            .await
            .map_err(Error::Write)?;

        Ok(record)
    }

    /// Lists the names of the record files in the managed directory, in the order the filesystem
    /// enumerates them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Read`] if the directory can't be ensured or enumerated.
    pub(crate) async fn list(&self) -> Result<Vec<String>, Error> {
        self.ensure_dir().await.map_err(Error::Read)?;

        let mut entries = fs::read_dir(&self.dir).await.map_err(Error::Read)?;
        let mut names = Vec::new();

        while let Some(entry) = entries.next_entry().await.map_err(Error::Read)? {
            let name = entry.file_name().to_string_lossy().into_owned();

            if is_record_name(&name) {
                names.push(name);
            }
        }

        Ok(names)
    }
}

impl Debug for RecordStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordStore")
            .field("dir", &self.dir)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use tempfile::TempDir;

    use super::*;
    use crate::clock::FixedClock;

    /// Constructs a store over a not-yet-existing `Sample` directory inside `tmp`.
    fn store_at(tmp: &TempDir, timestamp: &str) -> RecordStore {
        RecordStore::new(
            tmp.path().join("Sample"),
            Arc::new(FixedClock::at(timestamp)),
        )
    }

    /// Returns whether a name has the shape `YYYY-MM-DDTHH-MM-SS.sssZ.txt`.
    fn looks_like_record_name(name: &str) -> bool {
        let Some(stem) = name.strip_suffix(RECORD_SUFFIX) else {
            return false;
        };

        stem.len() == "YYYY-MM-DDTHH-MM-SS.sssZ".len()
            && stem.char_indices().all(|(index, char)| match index {
                4 | 7 | 13 | 16 => char == '-',
                10 => char == 'T',
                19 => char == '.',
                23 => char == 'Z',
                _ => char.is_ascii_digit(),
            })
    }

    #[test]
    fn record_describes_instant() {
        let record = Record::at(FixedClock::at("2024-01-15T10:30:00Z").0);

        assert_eq!(record.name, "2024-01-15T10-30-00.000Z.txt", "name should be UTC ISO 8601");
        assert_eq!(
            record.content, "Mon Jan 15 2024 10:30:00 GMT+0000",
            "content should be the long form"
        );
        assert!(looks_like_record_name(&record.name), "name should match the record pattern");
    }

    #[test]
    fn record_name_is_utc_and_content_is_local() {
        let record = Record::at(FixedClock::at("2024-01-15T16:00:00.123+05:30").0);

        assert_eq!(record.name, "2024-01-15T10-30-00.123Z.txt", "name should be in UTC");
        assert_eq!(
            record.content, "Mon Jan 15 2024 16:00:00 GMT+0530",
            "content should keep the local offset"
        );
    }

    #[test]
    fn record_names_pad_single_digits() {
        let record = Record::at(FixedClock::at("2025-03-05T04:05:06.007-08:00").0);

        assert_eq!(record.name, "2025-03-05T12-05-06.007Z.txt", "fields should be zero-padded");
        assert_eq!(
            record.content, "Wed Mar 05 2025 04:05:06 GMT-0800",
            "day should be zero-padded"
        );
    }

    #[test]
    fn only_txt_suffix_is_a_record() {
        assert!(is_record_name("a.txt"), "`.txt` should match");
        assert!(is_record_name(".txt"), "a bare suffix should match");
        assert!(!is_record_name("a.TXT"), "matching should be case-sensitive");
        assert!(!is_record_name("a.txt.bak"), "the suffix should be at the end");
        assert!(!is_record_name("atxt"), "the dot should be required");
    }

    #[tokio::test]
    async fn ensure_dir_is_idempotent() -> anyhow::Result<()> {
        let tmp = TempDir::new()?;
        let store = RecordStore::new(
            tmp.path().join("nested").join("Sample"),
            Arc::new(FixedClock::at("2024-01-15T10:30:00Z")),
        );

        store.ensure_dir().await?;
        store.ensure_dir().await?;

        assert!(store.dir().is_dir(), "directory should exist");
        Ok(())
    }

    #[tokio::test]
    async fn list_creates_missing_dir_and_returns_nothing() -> anyhow::Result<()> {
        let tmp = TempDir::new()?;
        let store = store_at(&tmp, "2024-01-15T10:30:00Z");

        assert!(!store.dir().exists(), "directory should start absent");
        assert!(store.list().await?.is_empty(), "fresh directory should list nothing");
        assert!(store.dir().is_dir(), "listing should create the directory");
        assert!(store.list().await?.is_empty(), "listing again should still succeed");
        Ok(())
    }

    #[tokio::test]
    async fn create_writes_one_record() -> anyhow::Result<()> {
        let tmp = TempDir::new()?;
        let store = store_at(&tmp, "2024-01-15T10:30:00Z");

        let record = store.create().await?;

        let content = fs::read_to_string(store.dir().join(&record.name)).await?;
        assert_eq!(content, record.content, "file should hold the record's content");
        assert_eq!(store.list().await?, vec![record.name], "only the new record should be listed");
        Ok(())
    }

    #[tokio::test]
    async fn create_in_same_instant_overwrites() -> anyhow::Result<()> {
        let tmp = TempDir::new()?;
        let store = store_at(&tmp, "2024-01-15T10:30:00Z");

        let first = store.create().await?;
        let second = store.create().await?;

        assert_eq!(first, second, "same instant should produce the same record");
        assert_eq!(store.list().await?.len(), 1, "the second write should replace the first");
        Ok(())
    }

    #[tokio::test]
    async fn list_skips_non_records() -> anyhow::Result<()> {
        let tmp = TempDir::new()?;
        let store = store_at(&tmp, "2024-01-15T10:30:00Z");
        store.ensure_dir().await?;

        for name in ["notes.md", "image.png", "archive.txt.gz", "README", "UPPER.TXT"] {
            fs::write(store.dir().join(name), "").await?;
        }
        fs::create_dir(store.dir().join("subdir")).await?;
        fs::write(store.dir().join("manual.txt"), "").await?;
        let record = store.create().await?;

        let listed: HashSet<String> = store.list().await?.into_iter().collect();

        assert_eq!(
            listed,
            HashSet::from(["manual.txt".to_owned(), record.name]),
            "only `.txt` entries should be listed"
        );
        Ok(())
    }

    #[tokio::test]
    async fn create_fails_when_dir_is_blocked() -> anyhow::Result<()> {
        let tmp = TempDir::new()?;
        let blocker = tmp.path().join("blocker");
        std::fs::write(&blocker, "")?;

        let store = RecordStore::new(
            blocker.join("Sample"),
            Arc::new(FixedClock::at("2024-01-15T10:30:00Z")),
        );

        assert!(
            matches!(store.create().await, Err(Error::Write(_))),
            "creating under a file should be a write failure"
        );
        assert!(
            matches!(store.list().await, Err(Error::Read(_))),
            "listing under a file should be a read failure"
        );
        assert!(!store.dir().exists(), "nothing should be created");
        Ok(())
    }
}
