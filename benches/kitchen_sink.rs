#[macro_use]
extern crate criterion;

use criterion::Criterion;
use rand::prelude::*;
use std::ops::Range;

fn kitchen_sink(kvs: &[(Range<i32>, u8)]) {
    use intervalmap::IntervalMap;

    let mut map: IntervalMap<i32, u8> = IntervalMap::new(0);
    // Hand every second range back to the default.
    let mut clear = false;
    for (range, value) in kvs {
        if clear {
            map.assign(range.start, range.end, 0);
        } else {
            map.assign(range.start, range.end, *value);
        }
        clear = !clear;
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("kitchen sink", |b| {
        let mut rng = thread_rng();
        let kvs: Vec<(Range<i32>, u8)> = (0..1000)
            .map(|_| {
                let start = rng.gen_range(0..1000);
                let end = start + rng.gen_range(1..100);
                let value: u8 = rng.gen_range(0..4);
                (start..end, value)
            })
            .collect();
        b.iter(|| kitchen_sink(&kvs))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
