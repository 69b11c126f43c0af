use criterion::{Criterion, criterion_group, criterion_main};
use riskaxis_rs::YAxisRenderer;
use riskaxis_rs::api::YAxisConfig;
use riskaxis_rs::core::{
    ContentRect, LinearValueTransformer, RiskBandSpec, RiskThresholds, partition_visible,
};
use riskaxis_rs::render::RenderFrame;
use std::hint::black_box;

fn wide_thresholds(count: usize) -> RiskThresholds {
    RiskThresholds::new(
        (0..count)
            .map(|index| RiskBandSpec::new(index as f64 * 10.0, format!("zone {index}"), index % 5))
            .collect(),
    )
    .expect("valid thresholds")
}

fn bench_partition_visible(c: &mut Criterion) {
    let thresholds = wide_thresholds(64);

    c.bench_function("partition_visible_64_bands", |b| {
        b.iter(|| {
            let bands = partition_visible(
                black_box(&thresholds),
                black_box(115.0),
                black_box(402.5),
            )
            .expect("partition should succeed");
            black_box(bands)
        })
    });
}

fn bench_grid_and_band_scene(c: &mut Criterion) {
    let content = ContentRect::new(0.0, 0.0, 1920.0, 1080.0);
    let transformer = LinearValueTransformer::new(0.0, 640.0, content).expect("transformer");
    let config = YAxisConfig::default()
        .with_entries((0..=16).map(|index| f64::from(index) * 40.0).collect())
        .with_risk_bands(true);
    let renderer = YAxisRenderer::new(
        config,
        wide_thresholds(64),
        transformer,
        content,
        0.0,
        640.0,
    )
    .expect("renderer");

    c.bench_function("grid_and_band_scene_build", |b| {
        b.iter(|| {
            let mut frame = RenderFrame::new(content);
            renderer
                .render_grid_and_bands(black_box(&mut frame))
                .expect("scene build should succeed");
            black_box(frame)
        })
    });
}

criterion_group!(benches, bench_partition_visible, bench_grid_and_band_scene);
criterion_main!(benches);
