use criterion::{Criterion, black_box, criterion_group, criterion_main};

// cspell:disable
const XPUB: &str = "xpub1qqqqqqqqqqqqqqp98sty9l9tkryvgcl8q8h6ahfp4lmr8mrxcflsd7pz30yr7vedh6p6fdg9ms39rtexlr4krjx29nkp8fu5f6jd2le5tyrjjhvvyyze9hy9f9jxh0g36dfdqt02gcksgfqkns0ds";
// cspell:enable

pub fn encode_benchmark(c: &mut Criterion) {
    c.bench_function("bech32::encode", |b| {
        let payload: Vec<u8> = (0u8..89).collect();
        b.iter(|| -> String { olympus_bech32::encode(black_box("xpub"), black_box(&payload)).expect("Should work") })
    });
}

pub fn decode_benchmark(c: &mut Criterion) {
    c.bench_function("bech32::decode", |b| {
        b.iter(|| -> (String, Vec<u8>) { olympus_bech32::decode(black_box(XPUB)).expect("Should work") })
    });
}

pub fn squash_benchmark(c: &mut Criterion) {
    c.bench_function("bech32::squash", |b| {
        let payload: Vec<u8> = (0u8..89).collect();
        b.iter(|| -> Vec<u8> { olympus_bech32::squash(black_box(&payload), 8, 5).expect("Should work") })
    });
}

criterion_group!(benches, encode_benchmark, decode_benchmark, squash_benchmark);
criterion_main!(benches);
