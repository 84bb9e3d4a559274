//! Transform benchmark: answers → engineered features → aligned 28-column row.

use beverage_predictor::features::FeatureTransform;
use beverage_predictor::survey::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn sample_answers() -> RawAnswers {
    RawAnswers {
        age: 42,
        gender: Gender::Female,
        zone: Zone::SemiUrban,
        occupation: Occupation::WorkingProfessional,
        income: Income::From26To35L,
        health_concern: HealthConcern::High,
        consume_frequency_weekly: ConsumeFrequency::FiveToSeven,
        current_brand: CurrentBrand::Established,
        preferred_size: PackSize::Large,
        brand_awareness: BrandAwareness::AboveFour,
        reason_for_choosing: ChoiceReason::Quality,
        flavor_preference: Flavor::Traditional,
        purchase_channel: PurchaseChannel::RetailStore,
        packaging_preference: Packaging::Premium,
        consumption_situation: Situation::Casual,
    }
}

fn bench_transform(c: &mut Criterion) {
    let raw = sample_answers();
    c.bench_function("transform_single_submission", |b| {
        b.iter(|| FeatureTransform::transform(black_box(&raw)))
    });
}

fn bench_encode_align(c: &mut Criterion) {
    let raw = sample_answers();
    let record = FeatureTransform::encode(&raw);

    let mut g = c.benchmark_group("transform_steps");
    g.bench_function("encode", |b| b.iter(|| FeatureTransform::encode(black_box(&raw))));
    g.bench_function("align", |b| b.iter(|| FeatureTransform::align(black_box(&record))));
    g.finish();
}

fn bench_collect_and_transform(c: &mut Criterion) {
    let doc = serde_json::to_string(&sample_answers()).unwrap();

    c.bench_function("collect_json_and_transform", |b| {
        b.iter(|| {
            let raw = AnswerCollector::from_json(black_box(&doc)).unwrap();
            black_box(FeatureTransform::transform(&raw))
        })
    });
}

criterion_group!(benches, bench_transform, bench_encode_align, bench_collect_and_transform);
criterion_main!(benches);
