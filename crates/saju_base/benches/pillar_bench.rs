use criterion::{Criterion, black_box, criterion_group, criterion_main};
use saju_base::{CycleIndices, Pillar, four_pillars, hour_pillar};

struct Indices([u8; 6]);

impl CycleIndices for Indices {
    fn year_stem_index(&self) -> u8 {
        self.0[0]
    }
    fn year_branch_index(&self) -> u8 {
        self.0[1]
    }
    fn month_stem_index(&self) -> u8 {
        self.0[2]
    }
    fn month_branch_index(&self) -> u8 {
        self.0[3]
    }
    fn day_stem_index(&self) -> u8 {
        self.0[4]
    }
    fn day_branch_index(&self) -> u8 {
        self.0[5]
    }
}

fn deriver_bench(c: &mut Criterion) {
    let date = Indices([0, 4, 2, 2, 4, 6]);

    let mut group = c.benchmark_group("deriver");
    group.bench_function("hour_pillar", |b| {
        b.iter(|| hour_pillar(black_box(&date), black_box(13)))
    });
    group.bench_function("four_pillars", |b| {
        b.iter(|| four_pillars(black_box(&date), black_box(13)))
    });
    group.finish();
}

fn pillar_bench(c: &mut Criterion) {
    let p = Pillar::from_indices(6, 8);

    let mut group = c.benchmark_group("pillar");
    group.bench_function("sexagenary_index", |b| {
        b.iter(|| black_box(p).sexagenary_index())
    });
    group.bench_function("element_counts", |b| {
        let chart = four_pillars(&date_fixture(), 0).unwrap();
        b.iter(|| black_box(chart).element_counts())
    });
    group.finish();
}

fn date_fixture() -> Indices {
    Indices([9, 3, 0, 2, 5, 11])
}

criterion_group!(benches, deriver_bench, pillar_bench);
criterion_main!(benches);
