//! Command implementations for the phrasefind CLI.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use rayon::prelude::*;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::MatchConfig;
use crate::dictionary::{PhraseDictionary, cache_path_for};
use crate::error::{PhraseFindError, Result};
use crate::matcher::PhraseMatcher;

/// Execute a CLI command.
pub fn execute_command(args: PhraseFindArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());

    match &args.command {
        Command::Compile(compile_args) => compile_dictionary(compile_args, &args, &mut writer)?,
        Command::Find(find_args) => find_phrases(find_args, &args, &mut writer)?,
        Command::Stats(stats_args) => show_stats(stats_args, &args, &mut writer)?,
    }

    writer.flush()?;
    Ok(())
}

/// Build a dictionary from text and write its cache.
pub fn compile_dictionary<W: Write>(
    args: &CompileArgs,
    cli_args: &PhraseFindArgs,
    writer: &mut W,
) -> Result<()> {
    let start_time = Instant::now();
    let dictionary = PhraseDictionary::from_path(&args.dictionary, args.lowercase)?;

    let cache_path = args
        .output
        .clone()
        .unwrap_or_else(|| cache_path_for(&args.dictionary));
    dictionary.write_cache(&cache_path)?;

    output_result(
        &CompileResult {
            cache_path: cache_path.to_string_lossy().to_string(),
            duration_ms: start_time.elapsed().as_millis() as u64,
            stats: dictionary.stats(),
        },
        cli_args,
        writer,
    )
}

/// Scan text files for dictionary phrases.
///
/// A file that cannot be read is logged and skipped; the other files are
/// still scanned.
pub fn find_phrases<W: Write>(
    args: &FindArgs,
    cli_args: &PhraseFindArgs,
    writer: &mut W,
) -> Result<()> {
    let config = resolve_config(args)?;
    let dictionary = PhraseDictionary::open(&args.dictionary, config.lowercase)?;

    let mut tokenizer = config.tokenizer()?;
    if dictionary.is_lowercase() && !tokenizer.is_lowercase() {
        log::info!("Dictionary is lower-cased, lower-casing texts as well");
        tokenizer = tokenizer.lowercase(true);
    }
    let matcher = PhraseMatcher::new(&dictionary, tokenizer);

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(threads) = config.thread_pool_size {
        builder = builder.num_threads(threads);
    }
    let pool = builder
        .build()
        .map_err(|e| PhraseFindError::other(format!("Failed to create thread pool: {e}")))?;

    let start_time = Instant::now();
    let per_file: Vec<Vec<MatchRow>> = pool.install(|| {
        args.files
            .par_iter()
            .filter_map(|path| match scan_file(&matcher, path) {
                Ok(rows) => Some(rows),
                Err(e) => {
                    log::warn!("Skipping {}: {}", path.display(), e);
                    None
                }
            })
            .collect()
    });
    let rows: Vec<MatchRow> = per_file.into_iter().flatten().collect();

    log::info!(
        "Found {} matches in {} files in {}ms",
        rows.len(),
        args.files.len(),
        start_time.elapsed().as_millis()
    );

    output_matches(&rows, cli_args, writer)
}

/// Show dictionary statistics.
pub fn show_stats<W: Write>(
    args: &StatsArgs,
    cli_args: &PhraseFindArgs,
    writer: &mut W,
) -> Result<()> {
    let dictionary = PhraseDictionary::open(&args.dictionary, args.lowercase)?;
    output_result(
        &StatsResult {
            dictionary: args.dictionary.to_string_lossy().to_string(),
            stats: dictionary.stats(),
        },
        cli_args,
        writer,
    )
}

/// Merge the configuration file with command line overrides.
fn resolve_config(args: &FindArgs) -> Result<MatchConfig> {
    let mut config = match &args.config {
        Some(path) => MatchConfig::from_file(path)?,
        None => MatchConfig::default(),
    };

    if let Some(pattern) = &args.pattern {
        config.word_pattern = pattern.clone();
    }
    if args.lowercase {
        config.lowercase = true;
    }
    if args.threads.is_some() {
        config.thread_pool_size = args.threads;
    }

    config.validate()?;
    Ok(config)
}

/// Find all phrases in one file.
///
/// Invalid UTF-8 is replaced rather than rejected; offsets then refer to the
/// decoded text.
fn scan_file(matcher: &PhraseMatcher<'_>, path: &Path) -> Result<Vec<MatchRow>> {
    let bytes = fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);
    let file = path.to_string_lossy().to_string();

    Ok(matcher
        .find(&text)
        .into_iter()
        .map(|m| MatchRow {
            file: file.clone(),
            text: m.matched_text(&text).to_string(),
            start: m.start,
            end: m.end,
            id: m.id,
        })
        .collect())
}
