use crate::error::ExtractError;
use crate::grouping::{flatten, grouper};
use crate::models::ExtractionOptions;
use encoding_rs::Encoding;
use std::borrow::Cow;
use std::path::Path;

/// Entries kept from one file, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileEntries {
    pub entries: Vec<String>,
    /// Indices of pairs whose halves do not carry the expected markers.
    /// Only filled when pair validation is enabled.
    pub misaligned: Vec<(usize, String)>,
}

/// Decodes raw file bytes. Line endings are normalised to `\n`.
pub fn decode_text(
    bytes: &[u8],
    encoding: &'static Encoding,
    path: &Path,
) -> Result<String, ExtractError> {
    let text = encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .ok_or_else(|| ExtractError::Decoding {
            path: path.to_path_buf(),
            encoding: encoding.name(),
        })?;

    Ok(normalize_newlines(text))
}

fn normalize_newlines(text: Cow<'_, str>) -> String {
    if text.contains('\r') {
        text.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        text.into_owned()
    }
}

/// Paragraph blocks that carry a question or an answer marker.
pub fn candidate_blocks<'a>(text: &'a str, options: &ExtractionOptions) -> Vec<&'a str> {
    text.split(options.separator.as_str())
        .filter(|block| {
            block.contains(options.question_marker.as_str())
                || block.contains(options.answer_marker.as_str())
        })
        .collect()
}

/// A pair survives when its question half has no image and no closing tag.
/// The answer half is never inspected.
pub fn keep_pair(pair: &[String], options: &ExtractionOptions) -> bool {
    pair.first().map_or(true, |question| {
        !question.contains(options.image_marker.as_str())
            && !question.contains(options.closing_tag_marker.as_str())
    })
}

fn is_aligned(pair: &[String], options: &ExtractionOptions) -> bool {
    match pair {
        [question, answer] => {
            question.contains(options.question_marker.as_str())
                && answer.contains(options.answer_marker.as_str())
        }
        _ => false,
    }
}

/// Runs the block pipeline over decoded text: marker filter, positional
/// pairing, picture/tag filter, flatten, drop padding.
pub fn extract_entries(
    text: &str,
    options: &ExtractionOptions,
) -> Result<FileEntries, ExtractError> {
    let blocks = candidate_blocks(text, options)
        .into_iter()
        .map(str::to_string)
        .collect::<Vec<_>>();

    let incomplete = options.incomplete.with_filler(String::new());
    let pairs = grouper(blocks, 2, incomplete)?;

    let mut misaligned = Vec::new();
    if options.validate_pairs {
        for (index, pair) in pairs.iter().enumerate() {
            if !is_aligned(pair, options) {
                let question = pair.first().cloned().unwrap_or_default();
                misaligned.push((index, question));
            }
        }
    }

    let entries = flatten(pairs.into_iter().filter(|pair| keep_pair(pair, options)))
        .filter(|entry| !entry.is_empty())
        .collect();

    Ok(FileEntries {
        entries,
        misaligned,
    })
}
