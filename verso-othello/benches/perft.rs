use criterion::*;

use verso_othello::test_utils::run_perft;

fn criterion_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.sample_size(20);

    for depth in 1..7 {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| run_perft(black_box(depth)))
        });
    }

    group.finish();
}

criterion_group!(perft, criterion_perft);
criterion_main!(perft);
