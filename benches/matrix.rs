// benches/matrix.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use deck_matrix::{decklist, stats::CorpusStats};

/// A few hundred synthetic decklists with overlapping card pools.
fn synthetic_corpus(decks: usize) -> Vec<String> {
    (0..decks)
        .map(|i| {
            let mut text = format!("Leaders\n1 | Leader {} | Version {}\nBase\n1 | Base {}\nDeck\n", i % 7, i % 3, i % 5);
            for c in 0..20 {
                text.push_str(&format!("{} | Card {}\n", 1 + (i + c) % 3, (i * 3 + c) % 60));
            }
            text.push_str("Sideboard\n");
            for c in 0..5 {
                text.push_str(&format!("{} | Tech {}\n", 1 + c % 2, (i + c) % 15));
            }
            text
        })
        .collect()
}

fn bench_matrix(c: &mut Criterion) {
    let corpus = synthetic_corpus(500);

    c.bench_function("parse_only", |b| {
        b.iter(|| {
            let cards: usize = corpus.iter().map(|t| decklist::parse(black_box(t)).len()).sum();
            black_box(cards)
        })
    });

    c.bench_function("parse_fold_finalize", |b| {
        b.iter(|| {
            let mut stats = CorpusStats::default();
            for text in &corpus {
                stats.fold(&decklist::parse(black_box(text)));
            }
            black_box(stats.finalize().rows.len())
        })
    });
}

criterion_group!(benches, bench_matrix);
criterion_main!(benches);
