use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use symspell::{damerau_levenshtein, SymSpell, Verbosity};

fn generate_corpus(words: usize) -> String {
    const SYLLABLES: [&str; 12] = ["ka", "lo", "mi", "ne", "ru", "sa", "te", "vo", "zi", "pa", "qu", "do"];
    let mut corpus = String::new();
    for i in 0..words {
        let mut n = i * 7919 + 13;
        for _ in 0..3 {
            corpus.push_str(SYLLABLES[n % SYLLABLES.len()]);
            n /= SYLLABLES.len();
        }
        corpus.push(' ');
    }
    corpus
}

fn bench_build(c: &mut Criterion) {
    let corpus = generate_corpus(5_000);
    c.bench_function("build_5000_tokens", |b| {
        b.iter(|| {
            let mut symspell = SymSpell::new(2, Verbosity::All);
            black_box(symspell.build_from_corpus(black_box(&corpus), "en"))
        })
    });
}

fn bench_lookup(c: &mut Criterion) {
    let corpus = generate_corpus(20_000);
    let queries = ["kalomi", "klaomi", "kalom", "xalomix", "tevoziq", "quodo"];

    let mut group = c.benchmark_group("lookup");
    for verbosity in [Verbosity::Top, Verbosity::Closest, Verbosity::All] {
        let mut symspell = SymSpell::new(2, verbosity);
        symspell.build_from_corpus(&corpus, "en");

        group.bench_function(format!("{verbosity:?}"), |b| {
            b.iter(|| {
                for query in &queries {
                    black_box(symspell.lookup(black_box(query), "en", 2, verbosity));
                }
            })
        });
    }
    group.finish();
}

fn bench_distance(c: &mut Criterion) {
    c.bench_function("damerau_levenshtein", |b| {
        b.iter(|| damerau_levenshtein(black_box("kitten sitting"), black_box("sitting kitten")))
    });
}

criterion_group!(benches, bench_build, bench_lookup, bench_distance);
criterion_main!(benches);
