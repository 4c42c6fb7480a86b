//! Benchmarks for share-link derivation.
//!
//! These benchmarks measure URL-escaping and link construction for the
//! share targets.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_payload_encoding(c: &mut Criterion) {
    let payload = "\"The only way to do great work is to love what you do.\" - Steve Jobs";
    c.bench_function("urlencode_payload", |b| {
        b.iter(|| urlencoding::encode(black_box(payload)).into_owned())
    });
}

fn bench_link_construction(c: &mut Criterion) {
    c.bench_function("build_share_urls", |b| {
        b.iter(|| {
            let encoded = urlencoding::encode(black_box(
                "\"Be yourself; everyone else is already taken.\" - Oscar Wilde",
            ));
            let twitter = format!(
                "https://twitter.com/intent/tweet?text={}&hashtags=citaDelDia,inspiracion",
                encoded
            );
            let whatsapp = format!("https://api.whatsapp.com/send?text={}", encoded);
            (twitter, whatsapp)
        })
    });
}

criterion_group!(benches, bench_payload_encoding, bench_link_construction);
criterion_main!(benches);
