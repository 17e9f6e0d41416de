use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_automata::core::{Border, GridRng};
use rust_automata::life::{life, life_generic, lifetri, AdjacencyMatrix};
use rust_automata::sandpile::sandpile;

// ============================================================================
// Sandpile
// ============================================================================

fn bench_sandpile(c: &mut Criterion) {
    let mut group = c.benchmark_group("sandpile");
    for side in [32usize, 64, 128] {
        let pile = GridRng::new(42).grain_grid(side, side, 8);
        group.bench_with_input(BenchmarkId::new("sink", side), &pile, |b, pile| {
            b.iter(|| black_box(sandpile(pile, false)))
        });
    }
    group.finish();
}

// ============================================================================
// Life
// ============================================================================

fn bench_square_life(c: &mut Criterion) {
    let mut group = c.benchmark_group("square_life");
    for side in [64usize, 256] {
        let grid = GridRng::new(7).bool_grid(side, side, 0.35);
        group.bench_with_input(BenchmarkId::new("sink", side), &grid, |b, grid| {
            b.iter(|| black_box(life(grid, 50, false)))
        });
        group.bench_with_input(BenchmarkId::new("periodic", side), &grid, |b, grid| {
            b.iter(|| black_box(life(grid, 50, true)))
        });
    }
    group.finish();
}

fn bench_tri_life(c: &mut Criterion) {
    let grid = GridRng::new(9).bool_grid(128, 128, 0.3);
    c.bench_function("tri_life_128", |b| b.iter(|| black_box(lifetri(&grid, 50))));
}

fn bench_generic_life(c: &mut Criterion) {
    let matrix = AdjacencyMatrix::moore(32, 32, Border::Periodic);
    let state = GridRng::new(3).state_vector(32 * 32, 0.35);
    c.bench_function("generic_life_moore_32", |b| {
        b.iter(|| black_box(life_generic(&matrix, &state, 50, [2, 3], [3])))
    });
}

criterion_group!(
    benches,
    bench_sandpile,
    bench_square_life,
    bench_tri_life,
    bench_generic_life,
);

criterion_main!(benches);
