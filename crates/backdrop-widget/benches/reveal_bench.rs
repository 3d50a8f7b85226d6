//! Benchmarks for the measure/place pass and a full open transition.
//!
//! Run with: cargo bench -p backdrop-widget --bench reveal_bench

use std::time::Duration;

use backdrop_core::geometry::Size;
use backdrop_core::layer::{Layer, LayerId, LayerTree};
use backdrop_core::measure::MeasureSpec;
use backdrop_widget::{Backdrop, BackdropConfig};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const BACK: LayerId = LayerId::new(1);
const FRONT: LayerId = LayerId::new(2);

fn setup() -> (Backdrop, LayerTree) {
    let mut tree = LayerTree::new();
    tree.insert(Layer::new(BACK, Size::new(360, 400)));
    tree.insert(Layer::new(FRONT, Size::new(360, 800)));

    let mut backdrop = Backdrop::new(
        BackdropConfig::new(FRONT, BACK)
            .open_radius(20)
            .min_front_height(100),
    );
    backdrop.attach(&mut tree);
    (backdrop, tree)
}

fn bench_measure_place(c: &mut Criterion) {
    let (mut backdrop, mut tree) = setup();
    c.bench_function("measure_place_pass", |b| {
        b.iter(|| {
            let size = backdrop.measure(
                &mut tree,
                black_box(MeasureSpec::exactly(360)),
                black_box(MeasureSpec::exactly(800)),
            );
            backdrop.place(&mut tree);
            black_box(size)
        });
    });
}

fn bench_open_cycle(c: &mut Criterion) {
    c.bench_function("open_cycle_60fps", |b| {
        b.iter(|| {
            let (mut backdrop, mut tree) = setup();
            backdrop.measure(
                &mut tree,
                MeasureSpec::exactly(360),
                MeasureSpec::exactly(800),
            );
            backdrop.place(&mut tree);
            backdrop.open(&mut tree);
            while backdrop.is_animating() {
                backdrop.on_frame(&mut tree, Duration::from_millis(16));
            }
            black_box(backdrop.progress())
        });
    });
}

criterion_group!(benches, bench_measure_place, bench_open_cycle);
criterion_main!(benches);
