use crate::error::ExtractError;
use crate::extractor::{decode_text, extract_entries};
use crate::models::{ExtractionOptions, ScanReport, SkippedFile};
use crate::traits::ScanObserver;
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Lists regular files directly inside `folder`, in the order the filesystem
/// yields them. Symlinks are resolved; subdirectories are not entered.
pub fn discover_quiz_files(folder: &Path) -> Result<Vec<PathBuf>, ExtractError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(folder)
        .follow_links(true)
        .min_depth(1)
        .max_depth(1)
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            debug!(path = %entry.path().display(), "skipping non-file entry");
            continue;
        }
        files.push(entry.into_path());
    }

    Ok(files)
}

/// Decodes one file and returns its surviving entries.
pub fn scan_file(
    path: &Path,
    options: &ExtractionOptions,
) -> Result<crate::extractor::FileEntries, ExtractError> {
    let bytes = fs::read(path)?;
    let text = decode_text(&bytes, options.encoding()?, path)?;
    extract_entries(&text, options)
}

/// Scans every file in `folder` and accumulates the corpus.
///
/// Any error aborts the scan, except decoding errors when
/// `options.skip_undecodable` is set; those files are reported and skipped.
pub fn scan_directory(
    folder: &Path,
    options: &ExtractionOptions,
    observer: &dyn ScanObserver,
) -> Result<ScanReport, ExtractError> {
    // fail on a bad label before touching the filesystem
    options.encoding()?;

    let files = discover_quiz_files(folder)?;

    let mut corpus = Vec::new();
    let mut skipped_files = Vec::new();
    let mut files_scanned = 0usize;
    let mut total_questions = 0f64;
    let mut misaligned_pairs = 0usize;

    for path in files {
        observer.file_started(&path);

        let file_entries = match scan_file(&path, options) {
            Ok(file_entries) => file_entries,
            Err(error @ ExtractError::Decoding { .. }) if options.skip_undecodable => {
                let skipped = SkippedFile {
                    path,
                    reason: error.to_string(),
                };
                observer.file_skipped(&skipped);
                skipped_files.push(skipped);
                continue;
            }
            Err(error) => return Err(error),
        };

        for (pair_index, question) in &file_entries.misaligned {
            observer.pair_misaligned(&path, *pair_index, question);
        }
        misaligned_pairs += file_entries.misaligned.len();

        let survivors = file_entries.entries.len();
        observer.file_scanned(&path, survivors);

        corpus.extend(file_entries.entries);
        files_scanned += 1;
        total_questions += survivors as f64 / 2.0;
    }

    let report = ScanReport {
        entries: corpus.len(),
        corpus,
        files_scanned,
        total_questions,
        misaligned_pairs,
        skipped_files,
        scanned_at: Utc::now(),
    };
    observer.scan_finished(&report);

    Ok(report)
}
