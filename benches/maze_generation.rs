//! Benchmarks for labyrinth generation and route finding.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use labyrinth::utils::pathfinding::reachable_positions;
use labyrinth::{GenerationConfig, Generator, MazeGenerator, Position};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("maze_generation");

    for size in [10_u32, 25, 50] {
        let config = GenerationConfig::new(42).with_dimensions(size, size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &config, |b, config| {
            b.iter(|| {
                let mut rng = StdRng::seed_from_u64(config.seed);
                MazeGenerator::new().generate(black_box(config), &mut rng)
            })
        });
    }

    group.finish();
}

fn bench_reachability(c: &mut Criterion) {
    let config = GenerationConfig::new(7).with_dimensions(50, 50);
    let mut rng = StdRng::seed_from_u64(config.seed);
    let Ok(grid) = MazeGenerator::new().generate(&config, &mut rng) else {
        return;
    };

    c.bench_function("reachable_positions_50x50", |b| {
        b.iter(|| reachable_positions(black_box(&grid), Position::origin()).len())
    });
}

criterion_group!(benches, bench_generation, bench_reachability);
criterion_main!(benches);
