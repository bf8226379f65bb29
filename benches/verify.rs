use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use weir::Webhook;

const SECRET: &str = "whsec_MfKQ9r8GKYqrTwjUPD8ILPZIo2LaLaSw";
const PAYLOAD: &[u8] = br#"{"event":"invoice.paid","data":{"id":"inv_42","amount":1000}}"#;

// Headers for a freshly signed delivery; signed at bench start so the
// timestamp stays inside the acceptance window for the whole run.
fn signed_delivery(webhook: &Webhook) -> HashMap<String, String> {
    let now = SystemTime::now();
    let token = webhook.sign("msg_bench", now, PAYLOAD);
    let seconds = now.duration_since(UNIX_EPOCH).unwrap().as_secs();

    let mut headers = HashMap::new();
    headers.insert("svix-id".to_string(), "msg_bench".to_string());
    headers.insert("svix-timestamp".to_string(), seconds.to_string());
    headers.insert("svix-signature".to_string(), token);
    headers
}

fn benchmark_sign(c: &mut Criterion) {
    let webhook = Webhook::new(SECRET).unwrap();
    let now = SystemTime::now();

    c.bench_function("sign", |b| {
        b.iter(|| webhook.sign(black_box("msg_bench"), now, black_box(PAYLOAD)));
    });
}

fn benchmark_verify(c: &mut Criterion) {
    let webhook = Webhook::new(SECRET).unwrap();
    let headers = signed_delivery(&webhook);

    c.bench_function("verify_raw", |b| {
        b.iter(|| {
            webhook
                .verify_raw(black_box(PAYLOAD), black_box(&headers))
                .unwrap()
        });
    });
}

criterion_group!(benches, benchmark_sign, benchmark_verify);
criterion_main!(benches);
