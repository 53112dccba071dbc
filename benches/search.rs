use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hashbrute::alphabet::Alphabet;
use hashbrute::candidates::Candidates;
use hashbrute::{SearchConfig, Searcher, TargetSpec};

fn bench_candidates(c: &mut Criterion) {
    let alphabet = Alphabet::lowercase();

    c.bench_function("candidates_len3", |b| {
        b.iter(|| {
            for candidate in Candidates::new(&alphabet, 3) {
                black_box(candidate);
            }
        })
    });
}

fn bench_search_found(c: &mut Criterion) {
    let searcher = Searcher::new(&SearchConfig::default()).unwrap();

    c.bench_function("search_md5_abc", |b| {
        b.iter(|| black_box(searcher.run(None)))
    });
}

fn bench_search_exhausted(c: &mut Criterion) {
    let config = SearchConfig::default().with_target(TargetSpec::Plaintext(String::new()));
    let searcher = Searcher::new(&config).unwrap();

    c.bench_function("search_md5_exhaust_len3", |b| {
        b.iter(|| black_box(searcher.run(None)))
    });
}

criterion_group!(benches, bench_candidates, bench_search_found, bench_search_exhausted);
criterion_main!(benches);
