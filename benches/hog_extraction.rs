use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hog_features_rs::hog_pipeline::{
    BlockNorm, GrayImageF32, HogExtractor, HogParams,
};

fn generate_mock_gray(width: usize, height: usize) -> GrayImageF32 {
    GrayImageF32::from_fn(width, height, |x, y| ((x * 7 + y * 13) % 256) as f32 / 255.0)
}

fn benchmark_extraction_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("extraction_by_size");

    let sizes = vec![
        (64, 128, "64x128"),
        (640, 480, "640x480"),
        (1920, 1080, "1920x1080"),
    ];

    for (width, height, label) in sizes {
        let image = generate_mock_gray(width, height);
        let extractor = HogExtractor::new(HogParams::default()).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(label),
            &image,
            |b, image| {
                b.iter(|| {
                    let _ = extractor.extract(black_box(image));
                });
            },
        );
    }

    group.finish();
}

fn benchmark_block_norms(c: &mut Criterion) {
    let mut group = c.benchmark_group("block_norms");
    let image = generate_mock_gray(640, 480);

    let norms = vec![
        (BlockNorm::L1, "l1"),
        (BlockNorm::L1Sqrt, "l1_sqrt"),
        (BlockNorm::L2, "l2"),
        (BlockNorm::L2Hys, "l2_hys"),
    ];

    for (norm, label) in norms {
        let extractor = HogExtractor::new(HogParams::builder().block_norm(norm).build()).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(label), &image, |b, image| {
            b.iter(|| {
                let _ = extractor.extract(black_box(image));
            });
        });
    }

    group.finish();
}

fn benchmark_visualization(c: &mut Criterion) {
    let image = generate_mock_gray(640, 480);
    let extractor = HogExtractor::new(HogParams::default()).unwrap();

    c.bench_function("extract_with_visualization_640x480", |b| {
        b.iter(|| {
            let _ = extractor.extract_with_visualization(black_box(&image));
        });
    });
}

criterion_group!(
    benches,
    benchmark_extraction_sizes,
    benchmark_block_norms,
    benchmark_visualization
);
criterion_main!(benches);
