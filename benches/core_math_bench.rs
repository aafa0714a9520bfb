use court_rs::api::{CourtChart, CourtConfig};
use court_rs::core::{
    CoordinateTransform, CourtPoint, GuideOptions, ServeZoneSummary, classify_depth,
    classify_serve_zones,
};
use court_rs::render::NullRenderer;
use court_rs::theme::ThemeRegistry;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn raw_landings(count: usize) -> Vec<CourtPoint> {
    (0..count)
        .map(|i| {
            let t = i as f64;
            CourtPoint::new((t * 0.37) % 10.97, (t * 1.13) % 23.77)
        })
        .collect()
}

fn bench_transform_10k(c: &mut Criterion) {
    let transform = CoordinateTransform::raw_data();
    let raw = raw_landings(10_000);

    c.bench_function("transform_10k", |b| {
        b.iter(|| {
            let _ = transform.to_centered_all(black_box(&raw));
        })
    });
}

fn bench_classify_10k(c: &mut Criterion) {
    let centered = CoordinateTransform::raw_data().to_centered_all(&raw_landings(10_000));
    let depths: Vec<f64> = centered.iter().map(|point| point.y).collect();

    c.bench_function("classify_serve_zones_10k", |b| {
        b.iter(|| {
            let _ = classify_serve_zones(black_box(&centered));
        })
    });

    c.bench_function("classify_depth_10k", |b| {
        b.iter(|| {
            let _ = classify_depth(black_box(&depths));
        })
    });
}

fn bench_serve_summary_10k(c: &mut Criterion) {
    let transform = CoordinateTransform::raw_data();
    let raw = raw_landings(10_000);

    c.bench_function("serve_summary_10k", |b| {
        b.iter(|| {
            let _ = ServeZoneSummary::from_raw(transform, black_box(&raw));
        })
    });
}

fn bench_snapshot_json(c: &mut Criterion) {
    let themes = ThemeRegistry::builtin();
    let config = CourtConfig::default()
        .with_theme("bsu")
        .with_guides(GuideOptions::bsu());
    let chart = CourtChart::new(NullRenderer::default(), config, &themes).expect("chart init");

    c.bench_function("court_snapshot_json", |b| {
        b.iter(|| {
            let _ = black_box(&chart)
                .snapshot_json()
                .expect("snapshot json should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_transform_10k,
    bench_classify_10k,
    bench_serve_summary_10k,
    bench_snapshot_json
);
criterion_main!(benches);
