use criterion::{black_box, criterion_group, criterion_main, Criterion};

use crossgen::crossword::{generate, generate_with, SearchOptions, Vocabulary};

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("generate_three_words_3x3", |b| {
        b.iter(|| generate(black_box(&["cat", "tar", "rat"][..]), 3, 3))
    });

    let order = ["lana", "abba", "tate", "neyo"]
        .iter()
        .map(|w| w.to_string())
        .collect::<Vec<_>>();
    let vocab = Vocabulary::new(&order).expect("Failed to build vocabulary");

    for parallel_depth in [0, 1] {
        let options = SearchOptions {
            require_crossing: true,
            parallel_depth,
        };
        c.bench_function(
            &format!("connected_four_words_6x6_parallel_{}", parallel_depth),
            |b| b.iter(|| generate_with(black_box(&order), &vocab, 6, 6, options)),
        );
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
