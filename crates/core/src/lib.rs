pub mod error;
pub mod extractor;
pub mod grouping;
pub mod models;
pub mod observer;
pub mod scan;
pub mod traits;
pub mod writer;

pub use error::{ExtractError, Result};
pub use extractor::{candidate_blocks, decode_text, extract_entries, keep_pair, FileEntries};
pub use grouping::{flatten, grouper, Incomplete, IncompletePolicy};
pub use models::{
    ExtractionOptions, ScanReport, SkippedFile, WriteReport, CLOSING_TAG_MARKER,
    DEFAULT_ANSWER_MARKER, DEFAULT_QUESTION_MARKER, IMAGE_MARKER, PARAGRAPH_SEPARATOR,
};
pub use observer::TracingObserver;
pub use scan::{discover_quiz_files, scan_directory, scan_file};
pub use traits::ScanObserver;
pub use writer::{render_corpus, write_corpus};

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn single_file_end_to_end() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let source = tempdir()?;
        let output = tempdir()?;
        fs::write(
            source.path().join("round1.txt"),
            "Question 1\nWhat is 2+2?\n\nAnswer: 4\n\nQuestion 2 (pic:x.jpg)\nSee image\n\nAnswer: none",
        )?;
        let options = ExtractionOptions {
            question_marker: "Question".to_string(),
            answer_marker: "Answer:".to_string(),
            ..ExtractionOptions::default()
        };

        let report = scan_directory(source.path(), &options, &TracingObserver)?;
        assert_eq!(report.corpus, vec!["Question 1\nWhat is 2+2?", "Answer: 4"]);
        assert_eq!(report.total_questions, 1.0);

        let path = output.path().join("quiz.txt");
        write_corpus(&path, &report.corpus, &options.separator)?;
        assert_eq!(fs::read_to_string(&path)?, "Question 1\nWhat is 2+2?\n\nAnswer: 4");
        Ok(())
    }

    #[test]
    fn empty_source_writes_empty_output() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let source = tempdir()?;
        let output = tempdir()?;
        let path = output.path().join("quiz.txt");

        let options = ExtractionOptions::default();

        let report = scan_directory(source.path(), &options, &TracingObserver)?;
        write_corpus(&path, &report.corpus, &options.separator)?;

        assert!(path.exists());
        assert_eq!(fs::read(&path)?.len(), 0);
        Ok(())
    }

    #[test]
    fn output_uses_the_split_separator() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let source = tempdir()?;
        let output = tempdir()?;
        fs::write(
            source.path().join("round1.txt"),
            "Question 1\n\nstill Q1\n===\nAnswer: 1\n===\nNotes",
        )?;
        let options = ExtractionOptions {
            question_marker: "Question".to_string(),
            answer_marker: "Answer:".to_string(),
            separator: "\n===\n".to_string(),
            ..ExtractionOptions::default()
        };

        let report = scan_directory(source.path(), &options, &TracingObserver)?;
        assert_eq!(report.corpus, vec!["Question 1\n\nstill Q1", "Answer: 1"]);

        let path = output.path().join("quiz.txt");
        write_corpus(&path, &report.corpus, &options.separator)?;
        assert_eq!(
            fs::read_to_string(&path)?,
            "Question 1\n\nstill Q1\n===\nAnswer: 1"
        );
        Ok(())
    }
}
