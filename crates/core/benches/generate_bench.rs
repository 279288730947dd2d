use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use prodsynth_core::metrics::MetricSampler;
use prodsynth_core::variation::VariationGenerator;
use prodsynth_core::{Category, DatasetGenerator, DatasetStats, GeneratorConfig, Schema};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    group.throughput(Throughput::Elements(10_000));

    let generator = DatasetGenerator::builtin().unwrap();
    group.bench_function("10k_metrics", |b| {
        b.iter(|| black_box(generator.generate(10_000)));
    });

    let basic = DatasetGenerator::builtin().unwrap().with_schema(Schema::Basic);
    group.bench_function("10k_basic", |b| {
        b.iter(|| black_box(basic.generate(10_000)));
    });

    group.finish();
}

fn bench_components(c: &mut Criterion) {
    let config = GeneratorConfig::builtin().unwrap();
    let sampler = MetricSampler::new(&config.profiles).unwrap();
    let variations = VariationGenerator::new(&config.vocabulary, &config.variation);

    let mut group = c.benchmark_group("components");
    group.throughput(Throughput::Elements(10_000));

    group.bench_function("sample_metrics_10k", |b| {
        let mut rng = StdRng::seed_from_u64(1);
        b.iter(|| {
            for _ in 0..10_000 {
                black_box(sampler.sample(Category::Electronics, &mut rng));
            }
        });
    });

    group.bench_function("vary_10k", |b| {
        let mut rng = StdRng::seed_from_u64(1);
        b.iter(|| {
            for i in 0..10_000 {
                let base = &config.catalog[i % config.catalog.len()];
                black_box(variations.vary(base, &mut rng));
            }
        });
    });

    group.finish();
}

fn bench_stats(c: &mut Criterion) {
    let records = DatasetGenerator::builtin().unwrap().generate(100_000);

    let mut group = c.benchmark_group("stats");
    group.throughput(Throughput::Elements(100_000));
    group.bench_function("stats_100k", |b| {
        b.iter(|| black_box(DatasetStats::from_records(&records)));
    });
    group.finish();
}

criterion_group!(benches, bench_generate, bench_components, bench_stats);
criterion_main!(benches);
