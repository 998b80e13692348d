#![no_main]
use libfuzzer_sys::fuzz_target;

use arbitrary::Arbitrary;
use intervalmap::IntervalMap;
use std::ops::Range;

#[derive(Clone, Debug, Arbitrary)]
struct Input {
    default: u8,
    assignments: Vec<(Range<i8>, u8)>,
}

fuzz_target!(|input: Input| {
    let Input {
        default,
        assignments,
    } = input;

    // Only a few distinct values, so that coalescing actually happens.
    let default = default % 4;
    let mut map = IntervalMap::new(default);
    let mut dense = [default; 256];

    for (range, value) in assignments {
        let value = value % 4;
        map.assign(range.start, range.end, value);
        for k in range {
            dense[(k as i16 + 128) as usize] = value;
        }
    }

    // Every key should read what the dense replay says.
    for k in i8::MIN..=i8::MAX {
        assert_eq!(*map.lookup(&k), dense[(k as i16 + 128) as usize]);
    }

    // And the breakpoint table should be minimal.
    let mut previous = *map.default_value();
    let mut count = 0;
    for (_, value) in map.breakpoints() {
        if *value == previous {
            panic!()
        }
        previous = *value;
        count += 1;
    }
    assert!(count == 0 || count >= 2);
    assert_eq!(previous, default);
});
