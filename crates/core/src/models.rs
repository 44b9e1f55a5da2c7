use crate::error::ExtractError;
use crate::grouping::IncompletePolicy;
use chrono::{DateTime, Utc};
use encoding_rs::Encoding;
use serde::Serialize;
use std::path::PathBuf;

pub const DEFAULT_QUESTION_MARKER: &str = "Вопрос";
pub const DEFAULT_ANSWER_MARKER: &str = "Ответ:";
pub const IMAGE_MARKER: &str = "(pic:";
pub const CLOSING_TAG_MARKER: &str = "</";
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

#[derive(Debug, Clone)]
pub struct ExtractionOptions {
    pub question_marker: String,
    pub answer_marker: String,
    pub image_marker: String,
    pub closing_tag_marker: String,
    pub separator: String,
    pub encoding_label: String,
    pub incomplete: IncompletePolicy,
    pub validate_pairs: bool,
    pub skip_undecodable: bool,
}

impl Default for ExtractionOptions {
    fn default() -> Self {
        Self {
            question_marker: DEFAULT_QUESTION_MARKER.to_string(),
            answer_marker: DEFAULT_ANSWER_MARKER.to_string(),
            image_marker: IMAGE_MARKER.to_string(),
            closing_tag_marker: CLOSING_TAG_MARKER.to_string(),
            separator: PARAGRAPH_SEPARATOR.to_string(),
            encoding_label: "koi8-r".to_string(),
            incomplete: IncompletePolicy::Fill,
            validate_pairs: false,
            skip_undecodable: false,
        }
    }
}

impl ExtractionOptions {
    pub fn encoding(&self) -> Result<&'static Encoding, ExtractError> {
        Encoding::for_label(self.encoding_label.trim().as_bytes()).ok_or_else(|| {
            ExtractError::InvalidConfiguration(format!(
                "unknown text encoding: {}",
                self.encoding_label
            ))
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    #[serde(skip)]
    pub corpus: Vec<String>,
    pub entries: usize,
    pub files_scanned: usize,
    /// Survivors / 2 summed per file; an odd survivor count leaves a half.
    pub total_questions: f64,
    pub misaligned_pairs: usize,
    pub skipped_files: Vec<SkippedFile>,
    pub scanned_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WriteReport {
    pub path: PathBuf,
    pub bytes: usize,
    pub checksum: String,
}
