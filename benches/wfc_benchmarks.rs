use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

use terrain_collapse::{
    generate, generate_with_retries,
    grid::Grid,
    render::{RenderEvent, Renderer},
    superstate::{select_value, SuperState},
    Config, RuleSet, Terrain,
};

// Fixed seed for deterministic benchmarks
const BENCHMARK_SEED: u64 = 12345;

struct Headless;

impl Renderer<Terrain> for Headless {
    fn handle_event(&mut self, _event: &RenderEvent) -> terrain_collapse::Result<()> {
        Ok(())
    }

    fn finalize(&mut self, _grid: &Grid<Terrain>) -> terrain_collapse::Result<()> {
        Ok(())
    }
}

fn permissive_rules() -> RuleSet<Terrain> {
    Terrain::ALL
        .into_iter()
        .map(|t| (t, Terrain::ALL))
        .collect()
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for size in [10, 25, 50].iter() {
        let config = Config::new(*size, permissive_rules());

        group.bench_with_input(format!("permissive_{}", size), size, |b, _| {
            b.iter(|| black_box(generate(&config, XorShiftRng::seed_from_u64(BENCHMARK_SEED))));
        });

        let config = Config::new(*size, RuleSet::terrain());

        group.bench_with_input(format!("terrain_{}", size), size, |b, _| {
            b.iter(|| {
                black_box(generate_with_retries(
                    &config,
                    100,
                    XorShiftRng::seed_from_u64(BENCHMARK_SEED),
                    &mut Headless,
                ))
            });
        });
    }

    group.finish();
}

fn bench_select_value(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_value");

    let rules = RuleSet::terrain();
    let mut grid = Grid::new(3);
    grid.set(1, 0, Terrain::Forest).unwrap();
    grid.set(2, 1, Terrain::Plains).unwrap();
    let neighbors = grid.neighbors(1, 1);

    group.bench_function("constrained", |b| {
        b.iter(|| black_box(SuperState::constrained(&rules, Terrain::Plains, &neighbors)));
    });

    group.bench_function("select", |b| {
        let mut rng = XorShiftRng::seed_from_u64(BENCHMARK_SEED);
        b.iter(|| black_box(select_value(&rules, (1, 1), Terrain::Plains, &neighbors, &mut rng)));
    });

    group.finish();
}

fn bench_grid_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_operations");

    for size in [25, 50, 100].iter() {
        group.bench_with_input(format!("grid_creation_{}", size), size, |b, &size| {
            b.iter(|| black_box(Grid::<Terrain>::new(size)));
        });

        group.bench_with_input(format!("grid_neighbors_{}", size), size, |b, &size| {
            let grid = Grid::<Terrain>::new(size);
            b.iter(|| {
                for x in 0..size as isize {
                    for y in 0..size as isize {
                        black_box(grid.neighbors(x, y));
                    }
                }
            });
        });
    }

    group.finish();
}

fn configure_criterion() -> Criterion {
    Criterion::default()
        .sample_size(100)
        .measurement_time(std::time::Duration::from_secs(10))
        .warm_up_time(std::time::Duration::from_secs(3))
}

criterion_group!(
    name = benches;
    config = configure_criterion();
    targets =
        bench_generate,
        bench_select_value,
        bench_grid_operations
);
criterion_main!(benches);
