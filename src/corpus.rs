use crate::api::models::{MatchDto, TimelineDto};
use crate::error::AppError;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

/// Written next to the timelines by the fetch job; not a timeline.
pub const SUMMARY_ARTIFACT: &str = "fetch_summary.json";

/// One enumerable timeline record, identified by its file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineSource {
    pub name: String,
}

impl TimelineSource {
    pub fn new(name: impl Into<String>) -> Self {
        TimelineSource { name: name.into() }
    }

    pub fn is_summary_artifact(&self) -> bool {
        self.name == SUMMARY_ARTIFACT
    }
}

/// Read-only access to already-fetched match and timeline records.
pub trait MatchCorpus {
    /// All timeline records, in the order they should be processed.
    fn timeline_sources(&self) -> Result<Vec<TimelineSource>, AppError>;

    fn load_timeline(&self, source: &TimelineSource) -> Result<TimelineDto, AppError>;

    /// `Ok(None)` when no match record exists for `match_id`.
    fn find_match(&self, match_id: &str) -> Result<Option<MatchDto>, AppError>;
}

/// Corpus laid out as `<data_dir>/matches/match_*<id>.json` and
/// `<data_dir>/matches/timelines/timeline_*.json`.
#[derive(Debug, Clone)]
pub struct FileCorpus {
    matches_dir: PathBuf,
    timelines_dir: PathBuf,
}

impl FileCorpus {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        let matches_dir = data_dir.as_ref().join("matches");
        let timelines_dir = matches_dir.join("timelines");
        FileCorpus {
            matches_dir,
            timelines_dir,
        }
    }

    pub fn timelines_dir(&self) -> &Path {
        &self.timelines_dir
    }

    fn glob_sorted(dir: &Path, file_pattern: &str) -> Result<Vec<PathBuf>, AppError> {
        let pattern = format!(
            "{}/{}",
            glob::Pattern::escape(&dir.to_string_lossy()),
            file_pattern
        );

        let mut paths: Vec<PathBuf> = glob::glob(&pattern)
            .map_err(|e| AppError::PatternError(format!("{}: {}", pattern, e)))?
            .filter_map(|entry| entry.ok())
            .filter(|path| path.is_file())
            .collect();
        paths.sort();

        Ok(paths)
    }

    fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            AppError::JsonError(format!("Failed to parse {}: {}", path.display(), e))
        })
    }
}

impl MatchCorpus for FileCorpus {
    fn timeline_sources(&self) -> Result<Vec<TimelineSource>, AppError> {
        let paths = Self::glob_sorted(&self.timelines_dir, "timeline_*.json")?;

        Ok(paths
            .iter()
            .filter_map(|path| path.file_name())
            .map(|name| TimelineSource::new(name.to_string_lossy()))
            .collect())
    }

    fn load_timeline(&self, source: &TimelineSource) -> Result<TimelineDto, AppError> {
        Self::read_json(&self.timelines_dir.join(&source.name))
    }

    fn find_match(&self, match_id: &str) -> Result<Option<MatchDto>, AppError> {
        let file_pattern = format!("match_*{}.json", glob::Pattern::escape(match_id));
        let paths = Self::glob_sorted(&self.matches_dir, &file_pattern)?;

        match paths.first() {
            Some(path) => Self::read_json(path).map(Some),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, body: &str) {
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join(name), body).unwrap();
    }

    #[test]
    fn test_timeline_sources_are_sorted_and_filtered() {
        let tmp = TempDir::new().unwrap();
        let corpus = FileCorpus::new(tmp.path());
        let dir = corpus.timelines_dir().to_path_buf();
        write(&dir, "timeline_NA1_2.json", "{}");
        write(&dir, "timeline_NA1_1.json", "{}");
        write(&dir, "notes.txt", "");

        let names: Vec<String> = corpus
            .timeline_sources()
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();

        assert_eq!(names, vec!["timeline_NA1_1.json", "timeline_NA1_2.json"]);
    }

    #[test]
    fn test_missing_directories_yield_empty_corpus() {
        let tmp = TempDir::new().unwrap();
        let corpus = FileCorpus::new(tmp.path().join("nowhere"));

        assert!(corpus.timeline_sources().unwrap().is_empty());
        assert!(corpus.find_match("NA1_1").unwrap().is_none());
    }

    #[test]
    fn test_find_match_by_id_suffix() {
        let tmp = TempDir::new().unwrap();
        let matches_dir = tmp.path().join("matches");
        write(
            &matches_dir,
            "match_001_NA1_42.json",
            r#"{"metadata":{"matchId":"NA1_42","participants":["a","b"]}}"#,
        );

        let corpus = FileCorpus::new(tmp.path());
        let found = corpus.find_match("NA1_42").unwrap().unwrap();
        assert_eq!(found.metadata.participants, vec!["a", "b"]);
        assert!(corpus.find_match("NA1_4").unwrap().is_none());
    }

    #[test]
    fn test_unparseable_match_is_error() {
        let tmp = TempDir::new().unwrap();
        write(&tmp.path().join("matches"), "match_NA1_9.json", "{not json");

        let corpus = FileCorpus::new(tmp.path());
        assert!(matches!(
            corpus.find_match("NA1_9"),
            Err(AppError::JsonError(_))
        ));
    }

    #[test]
    fn test_summary_artifact_name() {
        assert!(TimelineSource::new(SUMMARY_ARTIFACT).is_summary_artifact());
        assert!(!TimelineSource::new("timeline_NA1_1.json").is_summary_artifact());
    }
}
