//! Text dictionary format.
//!
//! One entry per line, `#` lines are comments:
//!
//! ```text
//! # id<TAB>name1|name2|...
//! DOID:10652	alzheimer's disease|alzheimer disease
//! BRCA1
//! ```
//!
//! A line with a single field registers the id as its own name. Files whose
//! name ends in `.gz` are decompressed on the fly.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use super::trie::DictionaryEntry;
use crate::analysis::tokenizer::regex::fold_case;
use crate::error::{PhraseFindError, Result};

/// Separator between the names of one entry.
pub const NAME_SEPARATOR: char = '|';

/// Parse dictionary entries from a reader.
///
/// With `lowercase` set, names (not ids) are case-folded the same way the
/// query-time tokenizer folds text. Repeated names within one line are kept
/// once. Lines that are not valid UTF-8 are decoded lossily.
pub fn parse_entries<R: BufRead>(reader: R, lowercase: bool) -> Result<Vec<DictionaryEntry>> {
    let mut entries = Vec::new();

    for (index, bytes) in reader.split(b'\n').enumerate() {
        let bytes = bytes?;
        let decoded = String::from_utf8_lossy(&bytes);
        if matches!(decoded, Cow::Owned(_)) {
            log::warn!("Invalid UTF-8 on dictionary line {}", index + 1);
        }
        let line = decoded.trim_end_matches(['\r', '\n']);
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        let (id, names) = match fields.as_slice() {
            [id] => (*id, *id),
            [id, names] => (*id, *names),
            _ => {
                return Err(PhraseFindError::dictionary_format(
                    index + 1,
                    format!("expected 1 or 2 tab-separated fields, found {}", fields.len()),
                ));
            }
        };

        let mut phrases: Vec<String> = Vec::new();
        for name in names.split(NAME_SEPARATOR).filter(|name| !name.is_empty()) {
            let name = if lowercase {
                fold_case(name).into_owned()
            } else {
                name.to_string()
            };
            if !phrases.contains(&name) {
                phrases.push(name);
            }
        }

        if phrases.is_empty() {
            log::debug!("Skipping entry '{}' without names on line {}", id, index + 1);
            continue;
        }
        entries.push(DictionaryEntry::new(id, phrases));
    }

    Ok(entries)
}

/// Read dictionary entries from a file, gunzipping `.gz` files.
pub fn read_entries<P: AsRef<Path>>(path: P, lowercase: bool) -> Result<Vec<DictionaryEntry>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let reader: Box<dyn Read> = if is_gzipped(path) {
        Box::new(MultiGzDecoder::new(file))
    } else {
        Box::new(file)
    };

    let entries = parse_entries(BufReader::new(reader), lowercase)?;
    log::info!(
        "Read {} dictionary entries from {}",
        entries.len(),
        path.display()
    );
    Ok(entries)
}

/// Check whether a path names a gzip file.
pub fn is_gzipped(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}
