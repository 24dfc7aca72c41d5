//! Criterion benchmarks for textbayes.
//!
//! Covers text analysis, classifier training, classification and a full
//! in-memory cross-validation run.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use textbayes::analysis::analyzer::{Analyzer, SimpleAnalyzer};
use textbayes::ml::bayes::BayesClassifier;
use textbayes::validation::{CrossValidationConfig, CrossValidator};

const WORDS: &[&str] = &[
    "offer", "cheap", "pills", "winner", "prize", "free", "meeting", "agenda", "project", "notes",
    "schedule", "review", "team", "budget", "report", "invoice", "monday", "friday", "claim",
    "account", "password", "urgent", "release", "deadline",
];

/// Generate labeled test documents; the label decides which half of the
/// vocabulary dominates.
fn generate_test_documents(count: usize) -> Vec<(String, String)> {
    (0..count)
        .map(|i| {
            let label = if i % 2 == 0 { "spam" } else { "ham" };
            let offset = if i % 2 == 0 { 0 } else { WORDS.len() / 2 };
            let length = 40 + (i % 60);
            let text = (0..length)
                .map(|j| {
                    let index = if j % 5 == 0 {
                        (i * 7 + j * 13) % WORDS.len()
                    } else {
                        offset + (i * 3 + j * 11) % (WORDS.len() / 2)
                    };
                    WORDS[index]
                })
                .collect::<Vec<_>>()
                .join(" ");
            (label.to_string(), text)
        })
        .collect()
}

fn analyzed_documents(count: usize) -> Vec<(String, Vec<String>)> {
    let analyzer = SimpleAnalyzer::new();
    generate_test_documents(count)
        .into_iter()
        .map(|(label, text)| {
            let words = analyzer.words(&text).unwrap();
            (label, words)
        })
        .collect()
}

fn bench_text_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_analysis");
    let analyzer = SimpleAnalyzer::new();
    let texts = generate_test_documents(100);

    group.throughput(Throughput::Elements(texts.len() as u64));
    group.bench_function("simple_analyzer_words", |b| {
        b.iter(|| {
            for (_, text) in &texts {
                black_box(analyzer.words(black_box(text)).unwrap());
            }
        })
    });

    group.finish();
}

fn bench_classifier(c: &mut Criterion) {
    let mut group = c.benchmark_group("bayes");
    let documents = analyzed_documents(1000);

    group.throughput(Throughput::Elements(documents.len() as u64));
    group.bench_function("train_1000_documents", |b| {
        b.iter(|| black_box(BayesClassifier::train(documents.iter().cloned()).unwrap()))
    });

    let classifier = BayesClassifier::train(documents.iter().cloned()).unwrap();
    group.bench_function("classify_1000_documents", |b| {
        b.iter(|| {
            for (_, words) in &documents {
                black_box(classifier.classify(black_box(words)));
            }
        })
    });

    group.finish();
}

fn bench_cross_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("cross_validation");
    group.sample_size(20);
    let documents = analyzed_documents(1000);

    for parallel in [false, true] {
        let validator = CrossValidator::new(CrossValidationConfig {
            folds: 10,
            seed: Some(42),
            parallel,
            ..Default::default()
        });
        let name = if parallel { "10_folds_parallel" } else { "10_folds_sequential" };
        group.bench_function(name, |b| {
            b.iter(|| {
                black_box(
                    validator
                        .validate_with(documents.clone(), |entry| Ok(entry.clone()))
                        .unwrap(),
                )
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_text_analysis, bench_classifier, bench_cross_validation);
criterion_main!(benches);
