use criterion::{criterion_group, criterion_main, Criterion};
use search_core::tokenizer::tokenize;
use search_core::{SearchConfig, SearchServer};

const WORDS: &[&str] = &[
    "cat", "dog", "fluffy", "collar", "groomed", "tail", "eyes", "white", "fancy", "starling",
    "and", "in", "the", "with", "bird", "fish",
];

fn corpus(docs: usize) -> Vec<String> {
    (0..docs)
        .map(|i| {
            (0..12)
                .map(|j| WORDS[(i * 7 + j * 3) % WORDS.len()])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn bench_tokenize(c: &mut Criterion) {
    let text = corpus(200).join(" ");
    c.bench_function("tokenize_corpus", |b| b.iter(|| tokenize(&text)));
}

fn bench_search(c: &mut Criterion) {
    let config = SearchConfig::default().with_stop_words(["and", "in", "the", "with"]);
    let server = SearchServer::from_documents(config, corpus(5_000)).expect("unique ids");
    c.bench_function("find_top_documents", |b| {
        b.iter(|| server.find_top_documents("fluffy cat collar -bird"))
    });
}

criterion_group!(benches, bench_tokenize, bench_search);
criterion_main!(benches);
