//! Performance benchmarks for whole-document analysis
//!
//! Run with: cargo bench --bench analysis_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lexmetrics_core::{
    GeneralStopWords, MetricsRecord, ReadabilityScorer, SentimentLexicon, SentimentScorer,
    StopWordMatch, StopWordSet, Tokenizer,
};
use std::hint::black_box;

/// Generate lower-cased report text of roughly `size` bytes
fn generate_text(size: usize) -> String {
    let base = "our quarterly revenue showed excellent growth despite poor weather. \
                investors remained cautious, but analysts expect a strong recovery! ";
    let mut text = base.repeat(size / base.len() + 1);
    text.truncate(size);
    text
}

fn lexicon() -> SentimentLexicon {
    SentimentLexicon::builder(&StopWordSet::from_sources(["the\na\nan\nof\n"]))
        .positive_words("excellent\ngrowth\nstrong\nrecovery\n")
        .negative_words("poor\ncautious\ndecline\n")
        .build()
}

/// Full record for texts of increasing size, fresh tokenizer per iteration
fn bench_document_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("document_sizes");
    let lexicon = lexicon();
    let stop_words = GeneralStopWords::english();

    for size in [1024, 10_240, 102_400] {
        let text = generate_text(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("analyze", size), &text, |b, text| {
            b.iter(|| {
                let tokenizer = Tokenizer::with_text(black_box(text.as_str()));
                let _ = MetricsRecord::from_scorers(
                    &SentimentScorer::new(&tokenizer, &lexicon),
                    &ReadabilityScorer::new(&tokenizer, &stop_words),
                );
            });
        });
    }

    group.finish();
}

/// Tokenization alone, words and sentences
fn bench_tokenizer(c: &mut Criterion) {
    let text = generate_text(102_400);

    c.bench_function("tokenize_100kb", |b| {
        b.iter(|| {
            let tokenizer = Tokenizer::with_text(black_box(text.as_str()));
            let _ = tokenizer.words();
            let _ = tokenizer.sentences();
        });
    });
}

/// Dictionary construction against a large stop-word text in both match modes
fn bench_lexicon_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexicon_build");
    let stop_source: String = (0..5_000).map(|i| format!("NAME{i}\n")).collect();
    let stop_words = StopWordSet::from_raw(&stop_source);
    let master: String = (0..2_000u32)
        .filter_map(|i| char::from_u32('a' as u32 + i % 26))
        .map(|c| format!("word{c}\n"))
        .collect();

    for mode in [StopWordMatch::Fragment, StopWordMatch::Token] {
        group.bench_function(format!("{mode:?}"), |b| {
            b.iter(|| {
                SentimentLexicon::builder(&stop_words)
                    .match_mode(mode)
                    .positive_words(black_box(&master))
                    .build()
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_document_sizes,
    bench_tokenizer,
    bench_lexicon_build
);
criterion_main!(benches);
