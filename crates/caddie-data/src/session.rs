//! Session assembly: the top-level ingestion pipeline.
//!
//! Resolves the data path, loads and validates the CSV, and wraps the result
//! in a [`Session`] ready for the UI layer. One session per ingested file;
//! nothing is shared across sessions.

use std::path::{Path, PathBuf};

use caddie_core::error::{CaddieError, Result};
use tracing::debug;

use crate::reader;
use crate::repository::ShotRepository;

// ── Public types ──────────────────────────────────────────────────────────────

/// Metadata recorded alongside an ingested session.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct IngestMetadata {
    /// ISO-8601 timestamp when the session was opened.
    pub generated_at: String,
    /// The CSV file that was ingested.
    pub source_file: PathBuf,
    /// Number of shot rows admitted.
    pub rows_ingested: usize,
    /// Number of summary/footer rows skipped (`Average` or blank club).
    pub summary_rows_skipped: usize,
    /// Number of distinct clubs present.
    pub clubs_found: usize,
    /// Wall-clock seconds spent loading and validating the file.
    pub load_time_seconds: f64,
}

/// One in-memory analysis session bound to one ingested file.
#[derive(Debug, Clone)]
pub struct Session {
    repository: ShotRepository,
    metadata: IngestMetadata,
}

impl Session {
    /// The session's shot repository.
    pub fn repository(&self) -> &ShotRepository {
        &self.repository
    }

    /// Ingestion metadata for this session.
    pub fn metadata(&self) -> &IngestMetadata {
        &self.metadata
    }

    /// File name of the ingested export, for display in the header.
    pub fn source_name(&self) -> String {
        self.metadata
            .source_file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.metadata.source_file.display().to_string())
    }
}

// ── Public function ───────────────────────────────────────────────────────────

/// Open an analysis session for `data_path`.
///
/// `data_path` may be a CSV file or a directory; for a directory the most
/// recently modified `.csv` underneath it is chosen (a range session export
/// directory typically accumulates one file per visit).
pub fn open_session(data_path: &Path) -> Result<Session> {
    let source_file = resolve_source_file(data_path)?;

    let load_start = std::time::Instant::now();
    let (shots, summary_rows_skipped) = reader::load_shots(&source_file)?;
    let load_time_seconds = load_start.elapsed().as_secs_f64();

    let repository = ShotRepository::new(shots);
    let metadata = IngestMetadata {
        generated_at: chrono::Utc::now().to_rfc3339(),
        source_file,
        rows_ingested: repository.len(),
        summary_rows_skipped,
        clubs_found: repository.distinct_clubs().len(),
        load_time_seconds,
    };

    debug!(
        "Session opened: {} shots, {} clubs from {}",
        metadata.rows_ingested,
        metadata.clubs_found,
        metadata.source_file.display(),
    );

    Ok(Session {
        repository,
        metadata,
    })
}

// ── Private helpers ───────────────────────────────────────────────────────────

/// Resolve `data_path` to a single CSV file.
///
/// Files pass through untouched; directories are scanned recursively and the
/// newest CSV wins (later path on a modification-time tie).
fn resolve_source_file(data_path: &Path) -> Result<PathBuf> {
    if !data_path.exists() {
        return Err(CaddieError::DataPathNotFound(data_path.to_path_buf()));
    }

    if data_path.is_file() {
        return Ok(data_path.to_path_buf());
    }

    let files = reader::find_csv_files(data_path);
    files
        .into_iter()
        .max_by_key(|p| std::fs::metadata(p).and_then(|m| m.modified()).ok())
        .ok_or_else(|| CaddieError::NoCsvFiles(data_path.to_path_buf()))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    const HEADER: &str = "Club,Carry(yd),Offline(yd),Total(yd),Ball Speed(mph),Launch Angle,Spin Rate";

    fn write_csv(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        path
    }

    // ── open_session ──────────────────────────────────────────────────────────

    #[test]
    fn test_open_session_from_file() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            dir.path(),
            "session.csv",
            &[
                HEADER,
                "Driver,250,10,262,150.2,12.4,2850",
                "7 Iron,150,2,162,118.0,18.9,6500",
                "Average,200,6,212,134.1,15.6,4675",
            ],
        );

        let session = open_session(&path).unwrap();
        assert_eq!(session.repository().len(), 2);
        assert_eq!(session.metadata().rows_ingested, 2);
        assert_eq!(session.metadata().summary_rows_skipped, 1);
        assert_eq!(session.metadata().clubs_found, 2);
        assert_eq!(session.source_name(), "session.csv");
    }

    #[test]
    fn test_open_session_from_directory() {
        let dir = TempDir::new().unwrap();
        write_csv(
            dir.path(),
            "range.csv",
            &[HEADER, "Driver,250,10,262,150.2,12.4,2850"],
        );

        let session = open_session(dir.path()).unwrap();
        assert_eq!(session.repository().len(), 1);
        assert_eq!(session.source_name(), "range.csv");
    }

    #[test]
    fn test_open_session_header_only_is_valid_and_empty() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(dir.path(), "empty.csv", &[HEADER]);

        let session = open_session(&path).unwrap();
        assert!(session.repository().is_empty());
        assert_eq!(session.metadata().clubs_found, 0);
    }

    #[test]
    fn test_open_session_missing_path() {
        let err = open_session(Path::new("/tmp/caddie-missing-dir-xyz")).unwrap_err();
        assert!(matches!(err, CaddieError::DataPathNotFound(_)));
    }

    #[test]
    fn test_open_session_directory_without_csv() {
        let dir = TempDir::new().unwrap();
        let err = open_session(dir.path()).unwrap_err();
        match err {
            CaddieError::NoCsvFiles(path) => assert_eq!(path, dir.path()),
            other => panic!("expected NoCsvFiles, got {other:?}"),
        }
    }

    #[test]
    fn test_open_session_propagates_schema_errors() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            dir.path(),
            "broken.csv",
            &["Club,Carry(yd)", "Driver,250"],
        );

        let err = open_session(&path).unwrap_err();
        assert!(matches!(err, CaddieError::MissingColumns(_)));
    }

    #[test]
    fn test_open_session_metadata_fields_populated() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            dir.path(),
            "session.csv",
            &[HEADER, "Driver,250,10,262,150.2,12.4,2850"],
        );

        let session = open_session(&path).unwrap();
        let meta = session.metadata();
        assert!(!meta.generated_at.is_empty());
        assert!(meta.load_time_seconds >= 0.0);
        assert_eq!(meta.source_file, path);
    }
}
