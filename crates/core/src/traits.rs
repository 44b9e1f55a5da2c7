use crate::models::{ScanReport, SkippedFile};
use std::path::Path;

/// Receives progress events from a directory scan.
pub trait ScanObserver {
    fn file_started(&self, path: &Path);

    fn file_scanned(&self, path: &Path, survivors: usize);

    fn pair_misaligned(&self, path: &Path, pair_index: usize, question: &str);

    fn file_skipped(&self, skipped: &SkippedFile);

    fn scan_finished(&self, report: &ScanReport);
}
