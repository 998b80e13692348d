#![no_main]
use libfuzzer_sys::fuzz_target;

use intervalmap::IntervalMap;

// Reads a raw fuzzer buffer as a stream of one-byte values
// and native-endian `i32` keys. Every pull returns `None`
// once the buffer can no longer satisfy it.
struct Tape<'a> {
    buf: &'a [u8],
}

impl<'a> Tape<'a> {
    fn pull_value(&mut self) -> Option<u8> {
        let (&value, rest) = self.buf.split_first()?;
        self.buf = rest;
        Some(value)
    }

    fn pull_key(&mut self) -> Option<i32> {
        if self.buf.len() < 4 {
            return None;
        }
        let (head, rest) = self.buf.split_at(4);
        self.buf = rest;
        Some(i32::from_ne_bytes(head.try_into().ok()?))
    }
}

fn check_canonical(map: &IntervalMap<i32, u8>) {
    let table: Vec<(&i32, &u8)> = map.breakpoints().collect();
    assert!(table.is_empty() || table.len() >= 2);
    let mut previous = map.default_value();
    for (key, value) in table.iter() {
        assert!(*value != previous, "repeated value at {}", key);
        previous = *value;
    }
    if let Some((_, last)) = table.last() {
        assert_eq!(*last, map.default_value());
    }
}

fuzz_target!(|data: &[u8]| {
    let mut tape = Tape { buf: data };

    let Some(default) = tape.pull_value() else {
        return;
    };
    let mut map = IntervalMap::new(default);

    // Running out of tape just ends the run.
    while let Some(begin) = tape.pull_key() {
        let Some(end) = tape.pull_key() else { break };
        let Some(value) = tape.pull_value() else { break };
        map.assign(begin, end, value);
        check_canonical(&map);
    }
});
