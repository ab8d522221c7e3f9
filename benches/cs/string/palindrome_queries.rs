use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use palindex::{process_operations, Operation, PalindromeOracle};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn random_input(len: usize, ops: usize, seed: u64) -> (String, Vec<Operation>) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let s: String = (0..len).map(|_| rng.gen_range(b'a'..=b'c') as char).collect();
    let operations = (0..ops)
        .map(|_| {
            if rng.gen_bool(0.5) {
                Operation::Update {
                    position: rng.gen_range(1..=len),
                    ch: rng.gen_range(b'a'..=b'c') as char,
                }
            } else {
                let left = rng.gen_range(1..=len);
                Operation::Query {
                    left,
                    right: rng.gen_range(left..=len),
                }
            }
        })
        .collect();
    (s, operations)
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("palindrome_oracle_build");
    for &len in &[1_000usize, 10_000, 100_000] {
        let (s, _) = random_input(len, 0, 1);
        group.bench_with_input(BenchmarkId::from_parameter(len), &s, |b, s| {
            b.iter(|| PalindromeOracle::new(len, black_box(s)).unwrap())
        });
    }
    group.finish();
}

fn bench_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("palindrome_oracle_operations");
    for &len in &[1_000usize, 100_000] {
        let (s, ops) = random_input(len, 10_000, 2);
        group.bench_with_input(BenchmarkId::from_parameter(len), &(s, ops), |b, (s, ops)| {
            b.iter(|| process_operations(len, black_box(ops), s).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_operations);
criterion_main!(benches);
