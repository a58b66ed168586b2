use br_spawn_map::{Camera2D, FilterState, MapId, MarkerCategory, MarkerStore, MAP_EXTENT};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use std::hint::black_box;

fn build_synthetic_store(marker_count: usize) -> MarkerStore {
    let mut store = MarkerStore::new();

    for index in 0..marker_count {
        let category = MarkerCategory::ALL[index % MarkerCategory::COUNT];
        let map = MapId::ALL[index % MapId::ALL.len()];
        let column = (index % 90) as f32;
        let row = (index / 90) as f32;
        store.place(
            map,
            category,
            Vec2::new(column * 90.0 % MAP_EXTENT, row * 90.0 % MAP_EXTENT),
        );
    }

    store
}

fn bench_visible_markers(c: &mut Criterion) {
    let mut group = c.benchmark_group("visible_markers");
    let filters = FilterState::all_visible();

    for &marker_count in &[1_000usize, 10_000usize] {
        let store = build_synthetic_store(marker_count);

        group.bench_with_input(
            BenchmarkId::new("filter_pass", marker_count),
            &store,
            |b, store| {
                b.iter(|| {
                    let visible = store
                        .visible_markers(black_box(MapId::Erangel), &filters)
                        .count();
                    black_box(visible)
                })
            },
        );
    }

    group.finish();
}

fn bench_projection(c: &mut Criterion) {
    let store = build_synthetic_store(10_000);
    let filters = FilterState::all_visible();
    let viewport = Vec2::new(1280.0, 720.0);
    let mut camera = Camera2D::new(MAP_EXTENT);
    camera.reset(MAP_EXTENT, viewport);

    c.bench_function("project_visible_markers", |b| {
        b.iter(|| {
            let mut acc = Vec2::ZERO;
            for marker in store.visible_markers(MapId::Erangel, &filters) {
                acc += camera.world_to_screen(black_box(marker.position), viewport);
            }
            black_box(acc)
        })
    });
}

fn bench_slot_serialization(c: &mut Criterion) {
    let store = build_synthetic_store(1_000);
    let markers = store.to_vec();

    c.bench_function("slot_serialize_1k", |b| {
        b.iter(|| {
            let json = serde_json::to_string(black_box(&markers)).expect("Serialisierung erwartet");
            black_box(json.len())
        })
    });
}

criterion_group!(
    benches,
    bench_visible_markers,
    bench_projection,
    bench_slot_serialization
);
criterion_main!(benches);
