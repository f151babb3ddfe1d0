use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::{Deserialize, Serialize};
use text_parameters::{from_str, marshal, to_string, unmarshal_str, Decoder, Encoder, ParameterMap};

#[derive(Serialize, Deserialize, Clone)]
struct Transfer {
    #[serde(rename = "packet-received")]
    received: u64,
    #[serde(rename = "packet-lost")]
    lost: u64,
    #[serde(rename = "transfer-time")]
    time: f64,
    #[serde(rename = "Peer")]
    peer: String,
    #[serde(rename = "Retries")]
    retries: i32,
}

fn sample_transfer() -> Transfer {
    Transfer {
        received: 1024,
        lost: 3,
        time: 12.345,
        peer: "192.0.2.15:4433".to_string(),
        retries: -1,
    }
}

fn sample_map(size: usize) -> ParameterMap {
    (0..size)
        .map(|i| (format!("param-{i:04}"), format!("value number {i}")))
        .collect()
}

fn benchmark_encode_record(c: &mut Criterion) {
    let transfer = sample_transfer();

    c.bench_function("encode_record", |b| {
        b.iter(|| to_string(black_box(&transfer)))
    });
}

fn benchmark_decode_record(c: &mut Criterion) {
    let body = to_string(&sample_transfer()).unwrap();

    c.bench_function("decode_record", |b| {
        b.iter(|| from_str::<Transfer>(black_box(&body)))
    });
}

fn benchmark_marshal(c: &mut Criterion) {
    let mut group = c.benchmark_group("marshal");

    for size in [10, 100, 1000].iter() {
        let params = sample_map(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &params, |b, params| {
            b.iter(|| marshal(black_box(params)))
        });
    }
    group.finish();
}

fn benchmark_unmarshal(c: &mut Criterion) {
    let mut group = c.benchmark_group("unmarshal");

    for size in [10, 100, 1000].iter() {
        let body = marshal(&sample_map(*size));

        group.bench_with_input(BenchmarkId::from_parameter(size), &body, |b, body| {
            b.iter(|| unmarshal_str(black_box(body)))
        });
    }
    group.finish();
}

fn benchmark_streams(c: &mut Criterion) {
    let transfer = sample_transfer();
    let body = to_string(&transfer).unwrap();

    let mut group = c.benchmark_group("streams");

    group.bench_function("encoder", |b| {
        b.iter(|| {
            let mut encoder = Encoder::new(Vec::with_capacity(128));
            encoder.encode(black_box(&transfer)).map(|()| encoder.into_inner())
        })
    });

    group.bench_function("decoder", |b| {
        b.iter(|| Decoder::new(black_box(body.as_bytes())).decode::<Transfer>())
    });

    group.bench_function("decoder_into", |b| {
        let mut target = sample_transfer();
        b.iter(|| Decoder::new(black_box(body.as_bytes())).decode_into(&mut target))
    });

    group.finish();
}

fn benchmark_comparison_with_json(c: &mut Criterion) {
    let transfer = sample_transfer();

    let mut group = c.benchmark_group("comparison");

    group.bench_function("parameters_serialize", |b| {
        b.iter(|| text_parameters::to_string(black_box(&transfer)))
    });

    group.bench_function("json_serialize", |b| {
        b.iter(|| serde_json::to_string(black_box(&transfer)))
    });

    let parameters_body = text_parameters::to_string(&transfer).unwrap();
    let json_body = serde_json::to_string(&transfer).unwrap();

    group.bench_function("parameters_deserialize", |b| {
        b.iter(|| text_parameters::from_str::<Transfer>(black_box(&parameters_body)))
    });

    group.bench_function("json_deserialize", |b| {
        b.iter(|| serde_json::from_str::<Transfer>(black_box(&json_body)))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_encode_record,
    benchmark_decode_record,
    benchmark_marshal,
    benchmark_unmarshal,
    benchmark_streams,
    benchmark_comparison_with_json
);
criterion_main!(benches);
