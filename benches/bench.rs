//! Criterion benchmarks for phrasefind.
//!
//! Covers dictionary construction and longest-match search over synthetic
//! gene-style dictionaries and documents.

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use phrasefind::analysis::tokenizer::regex::RegexTokenizer;
use phrasefind::dictionary::{DictionaryEntry, PhraseDictionary};
use phrasefind::matcher::PhraseMatcher;

const WORDS: [&str; 24] = [
    "protein", "kinase", "receptor", "factor", "alpha", "beta", "gamma", "growth", "tumor",
    "necrosis", "binding", "domain", "cell", "cancer", "breast", "disease", "syndrome", "type",
    "member", "family", "subunit", "complex", "signal", "transducer",
];

/// Generate a dictionary of 1 to 4 word phrases.
fn generate_entries(count: usize) -> Vec<DictionaryEntry> {
    (0..count)
        .map(|i| {
            let len = 1 + i % 4;
            let phrase = (0..len)
                .map(|j| WORDS[(i * 7 + j * 13) % WORDS.len()])
                .collect::<Vec<_>>()
                .join(" ");
            DictionaryEntry::new(format!("ID{i}"), vec![format!("{phrase} {i}")])
        })
        .collect()
}

/// Generate a document mentioning some dictionary phrases.
fn generate_document(words: usize) -> String {
    (0..words)
        .map(|i| {
            if i % 11 == 0 {
                format!("{}", i % 500)
            } else {
                WORDS[(i * 5) % WORDS.len()].to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn bench_build(c: &mut Criterion) {
    let entries = generate_entries(10_000);
    let mut group = c.benchmark_group("build");
    group.throughput(Throughput::Elements(entries.len() as u64));
    group.bench_function("from_entries_10k", |b| {
        b.iter(|| PhraseDictionary::from_entries(black_box(entries.clone())).unwrap())
    });
    group.finish();
}

fn bench_find(c: &mut Criterion) {
    let dictionary = PhraseDictionary::from_entries(generate_entries(10_000)).unwrap();
    let document = generate_document(20_000);
    let matcher = PhraseMatcher::new(&dictionary, RegexTokenizer::new().unwrap());

    let mut group = c.benchmark_group("find");
    group.throughput(Throughput::Bytes(document.len() as u64));
    group.bench_function("document_20k_words", |b| {
        b.iter(|| matcher.find(black_box(&document)))
    });

    let lower = matcher.tokenizer().clone().lowercase(true);
    let matcher = PhraseMatcher::new(&dictionary, lower);
    group.bench_function("document_20k_words_lowercase", |b| {
        b.iter(|| matcher.find(black_box(&document)))
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_find);
criterion_main!(benches);
