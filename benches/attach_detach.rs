//! Attach/detach throughput benchmarks.
//!
//! Run with: cargo bench --bench attach_detach

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lanegrid::host::{GridHost, VecItemSource};
use lanegrid::layout::GridLayoutEngine;
use lanegrid::model::{Flow, ItemPosition, Orientation, Size};

const LANE_COUNTS: [usize; 3] = [2, 4, 8];

fn engine(lanes: usize) -> GridLayoutEngine {
    let mut engine = GridLayoutEngine::new(lanes, Orientation::Vertical).unwrap();
    engine.set_container_size(Size::new(100 * lanes as i32, 800));
    engine.reset_layout(0);
    engine
}

fn bench_forward_attach(c: &mut Criterion) {
    let mut group = c.benchmark_group("forward_attach_10k");
    let extents: Vec<i32> = VecItemSource::generated(10_000, 40, 120).extents().to_vec();

    for lanes in LANE_COUNTS {
        group.bench_with_input(BenchmarkId::from_parameter(lanes), &lanes, |b, &lanes| {
            b.iter(|| {
                let mut engine = engine(lanes);
                for (i, e) in extents.iter().enumerate() {
                    let rect = engine
                        .attach(ItemPosition::new(i), Flow::Forward, Size::new(100, *e))
                        .unwrap();
                    black_box(rect);
                }
                engine
            });
        });
    }
    group.finish();
}

fn bench_recycle_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("detach_reattach_cycle");

    for lanes in LANE_COUNTS {
        let mut engine = engine(lanes);
        let size = Size::new(100, 64);
        for i in 0..1_000 {
            engine
                .attach(ItemPosition::new(i), Flow::Forward, size)
                .unwrap();
        }

        group.bench_with_input(BenchmarkId::from_parameter(lanes), &lanes, |b, _| {
            b.iter(|| {
                let last = ItemPosition::new(999);
                engine.detach(last, Flow::Backward, size).unwrap();
                black_box(engine.attach(last, Flow::Forward, size).unwrap());
            });
        });
    }
    group.finish();
}

fn bench_host_scroll(c: &mut Criterion) {
    let mut group = c.benchmark_group("host_scroll");

    for lanes in LANE_COUNTS {
        group.bench_with_input(BenchmarkId::from_parameter(lanes), &lanes, |b, &lanes| {
            b.iter_batched(
                || {
                    let engine = {
                        let mut engine =
                            GridLayoutEngine::new(lanes, Orientation::Vertical).unwrap();
                        engine.set_container_size(Size::new(100 * lanes as i32, 800));
                        engine
                    };
                    let mut host =
                        GridHost::new(engine, VecItemSource::generated(5_000, 40, 120));
                    host.layout().unwrap();
                    host
                },
                |mut host| {
                    for _ in 0..200 {
                        black_box(host.scroll_by(97).unwrap());
                    }
                    for _ in 0..200 {
                        black_box(host.scroll_by(-97).unwrap());
                    }
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_forward_attach,
    bench_recycle_cycle,
    bench_host_scroll
);
criterion_main!(benches);
