//! Output formatting for CLI commands.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, PhraseFindArgs};
use crate::dictionary::DictionaryStats;
use crate::error::Result;

/// Result structure for dictionary compilation.
#[derive(Debug, Serialize, Deserialize)]
pub struct CompileResult {
    pub cache_path: String,
    pub duration_ms: u64,
    #[serde(flatten)]
    pub stats: DictionaryStats,
}

/// Result structure for dictionary statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResult {
    pub dictionary: String,
    #[serde(flatten)]
    pub stats: DictionaryStats,
}

/// One phrase found in one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRow {
    pub file: String,
    pub start: usize,
    pub end: usize,
    pub id: String,
    pub text: String,
}

/// Column names of the tab-separated match output.
pub const MATCH_HEADER: [&str; 5] = ["file", "start", "end", "id", "text"];

/// Output a summary result in the specified format.
pub fn output_result<T: Serialize, W: Write>(
    result: &T,
    args: &PhraseFindArgs,
    writer: &mut W,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Tsv => output_key_values(result, writer),
        OutputFormat::Json => output_json(result, args, writer),
    }
}

/// Output match rows in the specified format.
pub fn output_matches<W: Write>(
    rows: &[MatchRow],
    args: &PhraseFindArgs,
    writer: &mut W,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Tsv => {
            writeln!(writer, "#{}", MATCH_HEADER.join("\t"))?;
            for row in rows {
                writeln!(
                    writer,
                    "{}\t{}\t{}\t{}\t{}",
                    row.file,
                    row.start,
                    row.end,
                    row.id,
                    sanitize_field(&row.text)
                )?;
            }
            Ok(())
        }
        OutputFormat::Json => output_json(&rows, args, writer),
    }
}

/// Output one `key<TAB>value` line per top-level field.
fn output_key_values<T: Serialize, W: Write>(result: &T, writer: &mut W) -> Result<()> {
    let value = serde_json::to_value(result)?;
    if let Some(obj) = value.as_object() {
        for (key, value) in obj {
            match value.as_str() {
                Some(text) => writeln!(writer, "{key}\t{text}")?,
                None => writeln!(writer, "{key}\t{value}")?,
            }
        }
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize, W: Write>(
    result: &T,
    args: &PhraseFindArgs,
    writer: &mut W,
) -> Result<()> {
    if args.pretty {
        serde_json::to_writer_pretty(&mut *writer, result)?;
    } else {
        serde_json::to_writer(&mut *writer, result)?;
    }
    writeln!(writer)?;
    Ok(())
}

/// Replace characters that would break a tab-separated row.
fn sanitize_field(text: &str) -> String {
    text.replace(['\t', '\n', '\r'], " ")
}
