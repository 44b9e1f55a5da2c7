use crate::error::ExtractError;
use crate::models::WriteReport;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

/// Joins entries with the same separator the source files were split on.
pub fn render_corpus(corpus: &[String], separator: &str) -> String {
    corpus.join(separator)
}

/// Writes the corpus as UTF-8, replacing whatever is at `path`.
///
/// The write is not atomic: a crash midway can leave a partial file.
pub fn write_corpus(
    path: &Path,
    corpus: &[String],
    separator: &str,
) -> Result<WriteReport, ExtractError> {
    let content = render_corpus(corpus, separator);
    fs::write(path, content.as_bytes())?;

    Ok(WriteReport {
        path: path.to_path_buf(),
        bytes: content.len(),
        checksum: digest_bytes(content.as_bytes()),
    })
}

fn digest_bytes(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}
