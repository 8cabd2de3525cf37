//! `KEY: value` block format shared by the quest and item text files.
//!
//! ```text
//! QUEST_ID: first_steps
//! TITLE: First Steps
//! REWARD_XP: 50
//!
//! QUEST_ID: goblin_camp
//! ...
//! ```
//!
//! Blocks are separated by one or more blank lines. Keys are matched
//! case-insensitively; unknown keys are ignored.

use std::collections::BTreeMap;
use std::str::FromStr;

use super::DataError;

/// One parsed block.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Block {
    /// 1-based line number of the first line of the block.
    pub line: usize,
    fields: BTreeMap<String, (usize, String)>,
}

impl Block {
    /// Raw value of a required field.
    pub fn require(&self, key: &str) -> Result<&str, DataError> {
        self.fields
            .get(key)
            .map(|(_, value)| value.as_str())
            .ok_or_else(|| DataError::invalid(self.line, format!("missing field {key}")))
    }

    /// Required field parsed with `FromStr`.
    pub fn parse<T: FromStr>(&self, key: &str) -> Result<T, DataError> {
        let raw = self.require(key)?;
        raw.parse().map_err(|_| {
            DataError::invalid(self.line_of(key), format!("{key} has invalid value '{raw}'"))
        })
    }

    /// Optional field; absent keys read as empty.
    pub fn get_or_empty(&self, key: &str) -> &str {
        self.fields
            .get(key)
            .map(|(_, value)| value.as_str())
            .unwrap_or_default()
    }

    /// Line a field was read from, or the block start if absent.
    pub fn line_of(&self, key: &str) -> usize {
        self.fields.get(key).map_or(self.line, |(line, _)| *line)
    }
}

/// Splits file contents into blocks.
///
/// # Errors
///
/// `InvalidDataFormat` for a non-blank line without a `:` separator.
pub fn parse_blocks(content: &str) -> Result<Vec<Block>, DataError> {
    let mut blocks = Vec::new();
    let mut current: Option<Block> = None;

    for (index, line) in content.lines().enumerate() {
        let line_no = index + 1;
        let trimmed = line.trim();

        if trimmed.is_empty() {
            blocks.extend(current.take());
            continue;
        }

        let (key, value) = trimmed
            .split_once(':')
            .ok_or_else(|| {
                DataError::invalid(line_no, format!("expected 'KEY: value', got '{trimmed}'"))
            })?;

        let block = current.get_or_insert_with(|| Block {
            line: line_no,
            fields: BTreeMap::new(),
        });
        block
            .fields
            .insert(key.trim().to_ascii_uppercase(), (line_no, value.trim().to_owned()));
    }

    blocks.extend(current);
    Ok(blocks)
}

/// Writes `(KEY, value)` pairs as one block followed by a blank line.
pub fn write_block(out: &mut String, fields: &[(&str, String)]) {
    for (key, value) in fields {
        out.push_str(key);
        out.push_str(": ");
        out.push_str(value);
        out.push('\n');
    }
    out.push('\n');
}
