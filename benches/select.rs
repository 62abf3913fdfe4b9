use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

use costfloor::select;

const SIZES: [usize; 3] = [10, 100, 10_000];

// deterministic data in [min, max)
fn gen_costs(rng: &mut StdRng, min: f64, max: f64, n: usize) -> Vec<f64> {
    (0..n).map(|_| rng.gen_range(min..max)).collect()
}

fn bench_select(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let mut group = c.benchmark_group("select");

    for n in SIZES {
        let shapes = [
            ("mixed", gen_costs(&mut rng, -100.0, 500.0, n)),
            ("positives", gen_costs(&mut rng, 0.0, 500.0, n)),
            ("negatives", gen_costs(&mut rng, -500.0, -1.0, n)),
            ("equals", vec![0.0; n]),
        ];

        for (shape, costs) in &shapes {
            group.bench_with_input(BenchmarkId::new(*shape, n), costs, |b, costs| {
                b.iter(|| black_box(select(black_box(costs))))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_select);
criterion_main!(benches);
