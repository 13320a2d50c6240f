//! Filesystem input acquisition
//!
//! Turns user-named paths — individual log files, directories, and zip
//! archives — into in-memory [`LogDocument`]s ready for aggregation. The
//! parsing core never touches the filesystem; everything it sees comes
//! through here.

use std::fs::File;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tracing::{debug, info, warn};
use walkdir::WalkDir;
use zip::ZipArchive;

use crate::app::models::LogDocument;
use crate::constants::{is_log_name, is_zip_name};
use crate::{Error, Result};

/// Expand a set of input paths into log documents
///
/// Paths are visited in the order given: zip archives contribute one
/// document per `.log` member in archive order, directories contribute
/// their contained `.log` files in sorted traversal order, and any other
/// regular file is read as a single document. A missing path fails the
/// whole collection before any parsing starts.
pub fn collect_documents(paths: &[PathBuf]) -> Result<Vec<LogDocument>> {
    let mut documents = Vec::new();

    for path in paths {
        if !path.exists() {
            return Err(Error::file_not_found(path.display().to_string()));
        }

        if path.is_dir() {
            collect_from_directory(path, &mut documents)?;
        } else if is_zip_name(&path.to_string_lossy()) {
            collect_from_archive(path, &mut documents)?;
        } else {
            collect_single_file(path, &mut documents)?;
        }
    }

    info!(
        "Collected {} log document(s) from {} input path(s)",
        documents.len(),
        paths.len()
    );

    Ok(documents)
}

/// Read one explicitly-named file as a document
///
/// Explicit files are accepted regardless of extension; an unexpected
/// extension only logs a warning.
fn collect_single_file(path: &Path, documents: &mut Vec<LogDocument>) -> Result<()> {
    let filename = file_name_of(path);

    if !is_log_name(&filename) {
        warn!("{} does not carry the .log extension", filename);
    }

    let bytes = std::fs::read(path)
        .map_err(|e| Error::io(format!("Failed to read {}", path.display()), e))?;
    documents.push(LogDocument::new(filename, bytes));

    Ok(())
}

/// Collect every `.log` file beneath a directory, in sorted traversal order
fn collect_from_directory(dir: &Path, documents: &mut Vec<LogDocument>) -> Result<()> {
    let before = documents.len();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;

        if !entry.file_type().is_file() {
            continue;
        }

        let filename = entry.file_name().to_string_lossy().to_string();
        if !is_log_name(&filename) {
            debug!("Skipping non-log file {}", entry.path().display());
            continue;
        }

        let bytes = std::fs::read(entry.path())
            .map_err(|e| Error::io(format!("Failed to read {}", entry.path().display()), e))?;
        documents.push(LogDocument::new(filename, bytes));
    }

    if documents.len() == before {
        warn!("No .log files found in {}", dir.display());
    }

    Ok(())
}

/// Expand a zip archive and collect its `.log` members in archive order
///
/// The archive is expanded into scoped temporary storage, which is removed
/// when this function returns, success or error. Members without the `.log`
/// extension are ignored and never reach the aggregator.
fn collect_from_archive(path: &Path, documents: &mut Vec<LogDocument>) -> Result<()> {
    let archive_name = path.display().to_string();

    let file = File::open(path)
        .map_err(|e| Error::io(format!("Failed to open archive {}", archive_name), e))?;
    let mut archive =
        ZipArchive::new(file).map_err(|e| Error::archive(&archive_name, e.to_string()))?;

    let staging =
        TempDir::new().map_err(|e| Error::io("Failed to create staging directory", e))?;
    archive
        .extract(staging.path())
        .map_err(|e| Error::archive(&archive_name, e.to_string()))?;

    let before = documents.len();

    for index in 0..archive.len() {
        let member = archive
            .by_index(index)
            .map_err(|e| Error::archive(&archive_name, e.to_string()))?;

        if !member.is_file() || !is_log_name(member.name()) {
            continue;
        }

        let Some(relative) = member.enclosed_name() else {
            warn!("Skipping archive member with unsafe path: {}", member.name());
            continue;
        };

        let member_path = staging.path().join(&relative);
        let filename = file_name_of(&relative);

        let bytes = std::fs::read(&member_path).map_err(|e| {
            Error::io(format!("Failed to read archive member {}", filename), e)
        })?;
        documents.push(LogDocument::new(filename, bytes));
    }

    info!(
        "Expanded {} log member(s) from {}",
        documents.len() - before,
        archive_name
    );

    Ok(())
}

/// Final path component as a plain string
fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;
    use zip::write::SimpleFileOptions;

    const SAMPLE_LOG: &str = "mode |   affinity | rmsd l.b.| rmsd u.b.\n\
                              -----+------------+----------+----------\n\
                                 1       -7.2      0.000      0.000\n";

    fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    fn write_archive(dir: &Path, name: &str, members: &[(&str, &str)]) -> PathBuf {
        let path = dir.join(name);
        let file = File::create(&path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

        for (member_name, content) in members {
            writer.start_file(*member_name, options).unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }

        writer.finish().unwrap();
        path
    }

    #[test]
    fn test_collect_single_file() {
        let dir = TempDir::new().unwrap();
        let path = write_file(dir.path(), "ligand.log", SAMPLE_LOG);

        let documents = collect_documents(&[path]).unwrap();

        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].filename, "ligand.log");
        assert_eq!(documents[0].bytes, SAMPLE_LOG.as_bytes());
    }

    #[test]
    fn test_collect_directory_filters_and_sorts() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "b.log", SAMPLE_LOG);
        write_file(dir.path(), "a.log", SAMPLE_LOG);
        write_file(dir.path(), "notes.txt", "not a log");

        let documents = collect_documents(&[dir.path().to_path_buf()]).unwrap();

        let names: Vec<&str> = documents.iter().map(|d| d.filename.as_str()).collect();
        assert_eq!(names, vec!["a.log", "b.log"]);
    }

    #[test]
    fn test_collect_archive_members_in_archive_order() {
        let dir = TempDir::new().unwrap();
        let archive = write_archive(
            dir.path(),
            "batch.zip",
            &[
                ("run_2.log", SAMPLE_LOG),
                ("run_1.log", SAMPLE_LOG),
                ("readme.txt", "ignored"),
            ],
        );

        let documents = collect_documents(&[archive]).unwrap();

        let names: Vec<&str> = documents.iter().map(|d| d.filename.as_str()).collect();
        assert_eq!(names, vec!["run_2.log", "run_1.log"]);
    }

    #[test]
    fn test_archive_members_in_subdirectories_use_base_name() {
        let dir = TempDir::new().unwrap();
        let archive = write_archive(
            dir.path(),
            "nested.zip",
            &[("results/screen_A/ligand_9.log", SAMPLE_LOG)],
        );

        let documents = collect_documents(&[archive]).unwrap();

        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].filename, "ligand_9.log");
    }

    #[test]
    fn test_missing_path_fails_collection() {
        let result = collect_documents(&[PathBuf::from("/nonexistent/ligand.log")]);
        assert!(matches!(result, Err(Error::FileNotFound { .. })));
    }

    #[test]
    fn test_explicit_file_accepted_regardless_of_extension() {
        let dir = TempDir::new().unwrap();
        let path = write_file(dir.path(), "output.txt", SAMPLE_LOG);

        let documents = collect_documents(&[path]).unwrap();
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].filename, "output.txt");
    }

    #[test]
    fn test_input_path_order_is_preserved() {
        let dir = TempDir::new().unwrap();
        let second = write_file(dir.path(), "second.log", SAMPLE_LOG);
        let first = write_file(dir.path(), "first.log", SAMPLE_LOG);

        let documents = collect_documents(&[second, first]).unwrap();

        let names: Vec<&str> = documents.iter().map(|d| d.filename.as_str()).collect();
        assert_eq!(names, vec!["second.log", "first.log"]);
    }
}
