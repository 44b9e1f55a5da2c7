use crate::models::{ScanReport, SkippedFile};
use crate::traits::ScanObserver;
use std::path::Path;
use tracing::{debug, info, warn};

/// Reports scan progress as `tracing` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ScanObserver for TracingObserver {
    fn file_started(&self, path: &Path) {
        let name = path.file_name().map(|name| name.to_string_lossy());
        info!(file = %name.unwrap_or_default(), "reading file");
    }

    fn file_scanned(&self, path: &Path, survivors: usize) {
        info!(
            path = %path.display(),
            "found {survivors} questions with answers"
        );
    }

    fn pair_misaligned(&self, path: &Path, pair_index: usize, question: &str) {
        let first_line = question.lines().next().unwrap_or_default();
        warn!(
            path = %path.display(),
            pair_index,
            first_line,
            "pair does not start with a question or end with an answer"
        );
    }

    fn file_skipped(&self, skipped: &SkippedFile) {
        warn!(path = %skipped.path.display(), reason = %skipped.reason, "skipped file");
    }

    fn scan_finished(&self, report: &ScanReport) {
        info!(
            entries = report.entries,
            skipped = report.skipped_files.len(),
            "scanned {} files and {} questions",
            report.files_scanned,
            report.total_questions
        );
        if report.misaligned_pairs > 0 {
            debug!(misaligned = report.misaligned_pairs, "positional pairing mismatches");
        }
    }
}
