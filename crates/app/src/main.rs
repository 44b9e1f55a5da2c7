use chrono::Utc;
use clap::Parser;
use quiz_extract_core::{
    scan_directory, write_corpus, ExtractionOptions, IncompletePolicy, ScanReport,
    TracingObserver, WriteReport, DEFAULT_ANSWER_MARKER, DEFAULT_QUESTION_MARKER,
};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "quiz-extract", version)]
struct Cli {
    /// Folder with the quiz-question files. Not searched recursively.
    #[arg(long, env = "QUIZ_SOURCE_DIR", default_value = "../quiz-questions")]
    source_dir: PathBuf,

    /// Output file; overwritten on every run.
    #[arg(long, env = "QUIZ_OUTPUT", default_value = "quiz.txt")]
    output: PathBuf,

    /// Encoding label of the source files.
    #[arg(long, default_value = "koi8-r")]
    encoding: String,

    /// Substring that marks a question block.
    #[arg(long, default_value = DEFAULT_QUESTION_MARKER)]
    question_marker: String,

    /// Substring that marks an answer block.
    #[arg(long, default_value = DEFAULT_ANSWER_MARKER)]
    answer_marker: String,

    /// Warn about pairs that do not go question then answer.
    #[arg(long, default_value_t = false)]
    validate_pairs: bool,

    /// Skip files that fail to decode instead of aborting.
    #[arg(long, default_value_t = false)]
    skip_undecodable: bool,

    /// Print the scan summary as JSON after writing.
    #[arg(long, default_value_t = false)]
    json: bool,
}

impl Cli {
    fn extraction_options(&self) -> ExtractionOptions {
        ExtractionOptions {
            question_marker: self.question_marker.clone(),
            answer_marker: self.answer_marker.clone(),
            encoding_label: self.encoding.clone(),
            incomplete: IncompletePolicy::Fill,
            validate_pairs: self.validate_pairs,
            skip_undecodable: self.skip_undecodable,
            ..ExtractionOptions::default()
        }
    }
}

fn json_summary(
    report: &ScanReport,
    written: &WriteReport,
) -> serde_json::Result<serde_json::Value> {
    let mut summary = serde_json::Map::new();
    summary.insert("scan".to_string(), serde_json::to_value(report)?);
    summary.insert("output".to_string(), serde_json::to_value(written)?);
    Ok(serde_json::Value::Object(summary))
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    info!(
        version = env!("CARGO_PKG_VERSION"),
        started_at = %Utc::now().to_rfc3339(),
        source_dir = %cli.source_dir.display(),
        "quiz-extract boot"
    );

    let options = cli.extraction_options();
    let report = scan_directory(&cli.source_dir, &options, &TracingObserver)?;
    let written = write_corpus(&cli.output, &report.corpus, &options.separator)?;

    info!(
        path = %written.path.display(),
        bytes = written.bytes,
        checksum = %written.checksum,
        "wrote corpus"
    );

    if cli.json {
        let summary = json_summary(&report, &written)?;
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}
