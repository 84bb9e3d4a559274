//! Prediction boundary benchmark with a stub model (no ONNX runtime needed).

use beverage_predictor::features::FeatureTransform;
use beverage_predictor::model::FixedLabelPredictor;
use beverage_predictor::outcome::PredictionEngine;
use beverage_predictor::survey::AnswerCollector;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const ANSWERS: &str = r#"{
    "age": 30, "gender": "Male", "zone": "Urban", "occupation": "Student",
    "income": "16L - 25L", "health_concern": "Medium (Moderately health-conscious)",
    "consume_frequency_weekly": "3-4 times", "current_brand": "Newcomer",
    "preferred_size": "Medium (500 ml)", "brand_awareness": "2 to 4",
    "reason_for_choosing": "Price", "flavor_preference": "Exotic",
    "purchase_channel": "Online", "packaging_preference": "Simple",
    "consumption_situation": "Social (eg. Parties)"
}"#;

fn bench_invoke_stub(c: &mut Criterion) {
    let predictor = FixedLabelPredictor::new("bench");
    let engine = PredictionEngine::new(&predictor);
    let features = FeatureTransform::transform(&AnswerCollector::from_json(ANSWERS).unwrap());

    c.bench_function("invoke_stub_model", |b| {
        b.iter(|| engine.invoke(black_box(&features)))
    });
}

fn bench_submit_stub(c: &mut Criterion) {
    let predictor = FixedLabelPredictor::new("bench");
    let engine = PredictionEngine::new(&predictor);
    let raw = AnswerCollector::from_json(ANSWERS).unwrap();

    c.bench_function("submit_stub_model", |b| b.iter(|| engine.submit(black_box(&raw))));
}

criterion_group!(benches, bench_invoke_stub, bench_submit_stub);
criterion_main!(benches);
