//! Word-list loading.

use crate::error::{LexsimError, Result};
use log::info;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Loads the vocabulary from a word-list file.
///
/// Each line contributes its first tab-separated field. Duplicates are
/// dropped, keeping the first appearance.
pub fn load_words(path: &Path) -> Result<Vec<String>> {
    let file =
        File::open(path).map_err(|_| LexsimError::WordListNotFound(path.to_path_buf()))?;
    let words = read_words(BufReader::new(file))?;
    info!("loaded {} distinct words from {}", words.len(), path.display());
    Ok(words)
}

/// Reads the vocabulary from any buffered source.
///
/// A record whose first field is empty is an input error carrying the
/// 1-based line number; an input with no records at all is rejected.
pub fn read_words<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut words = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let field = line.split('\t').next().unwrap_or("");
        if field.is_empty() {
            return Err(LexsimError::EmptyRecord { line: index + 1 });
        }
        if seen.insert(field.to_string()) {
            words.push(field.to_string());
        }
    }

    if words.is_empty() {
        return Err(LexsimError::EmptyInput("word list".to_string()));
    }
    Ok(words)
}
