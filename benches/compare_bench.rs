use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use simgram::{CompareConfig, SynonymLexicon, compare_word_streams};

fn synthetic_stream(len: usize) -> Vec<String> {
    (0..len).map(|i| format!("word{}", i % 512)).collect()
}

fn bench_compare(c: &mut Criterion) {
    let lexicon = SynonymLexicon::parse("word0 word256 word384\nword1 word129\n");
    let config = CompareConfig::default();
    let mut group = c.benchmark_group("compare_word_streams");

    for size in [256, 2048, 16384].iter() {
        let reference = synthetic_stream(*size);
        let mut candidate = reference.clone();
        candidate.rotate_left(7);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_function(format!("words_{size}"), |b| {
            b.iter(|| {
                compare_word_streams(
                    black_box(&reference),
                    black_box(&candidate),
                    black_box(&lexicon),
                    black_box(&config),
                )
                .expect("compare")
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compare);
criterion_main!(benches);
