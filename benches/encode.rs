use criterion::{Criterion, black_box, criterion_group, criterion_main};
use qr_encode::render::svg::to_svg;
use qr_encode::{encode, encode_batch};

fn bench_encode_url(c: &mut Criterion) {
    let url = "https://example.com/public/application/123";
    c.bench_function("encode_url_44_chars", |b| {
        b.iter(|| encode(black_box(url)))
    });
}

fn bench_encode_max_length(c: &mut Criterion) {
    let text = "A".repeat(78);
    c.bench_function("encode_78_chars", |b| b.iter(|| encode(black_box(&text))));
}

fn bench_encode_empty(c: &mut Criterion) {
    c.bench_function("encode_empty", |b| b.iter(|| encode(black_box(""))));
}

fn bench_encode_batch(c: &mut Criterion) {
    let texts: Vec<String> = (0..256)
        .map(|i| format!("https://example.com/public/application/{i}"))
        .collect();
    c.bench_function("encode_batch_256", |b| {
        b.iter(|| encode_batch(black_box(&texts)))
    });
}

fn bench_render_svg(c: &mut Criterion) {
    let matrix = encode("https://example.com/public/application/123");
    c.bench_function("render_svg_8px", |b| {
        b.iter(|| to_svg(black_box(&matrix), black_box(8)))
    });
}

criterion_group!(
    benches,
    bench_encode_url,
    bench_encode_max_length,
    bench_encode_empty,
    bench_encode_batch,
    bench_render_svg
);
criterion_main!(benches);
