use alloc::{collections::BTreeMap, vec::Vec};

use super::IntervalMap;

// A simple but infeasibly slow and memory-hungry
// version of `IntervalMap` for testing.
//
// Only understands `i32` keys, so that it can walk
// every key of an assigned range one by one. This is
// just for testing, so it's fine.
#[derive(Debug)]
pub struct DenseI32IntervalMap<V> {
    default: V,
    // Every key ever assigned, stored individually.
    btm: BTreeMap<i32, V>,
}

impl<V> DenseI32IntervalMap<V>
where
    V: PartialEq + Clone,
{
    pub fn new(default: V) -> DenseI32IntervalMap<V> {
        DenseI32IntervalMap {
            default,
            btm: BTreeMap::new(),
        }
    }

    pub fn assign(&mut self, begin: i32, end: i32, value: V) {
        for k in begin..end {
            self.btm.insert(k, value.clone());
        }
    }

    pub fn lookup(&self, key: i32) -> &V {
        self.btm.get(&key).unwrap_or(&self.default)
    }

    // The canonical breakpoint table describing the same map:
    // one entry wherever the value differs from the key before it.
    pub fn to_breakpoints(&self) -> Vec<(i32, V)> {
        let mut breakpoints = Vec::new();
        let (first, last) = match (self.btm.keys().next(), self.btm.keys().next_back()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return breakpoints,
        };
        let mut previous = &self.default;
        for k in first..=last + 1 {
            let current = self.lookup(k);
            if current != previous {
                breakpoints.push((k, current.clone()));
            }
            previous = current;
        }
        breakpoints
    }
}

impl<V> From<&IntervalMap<i32, V>> for DenseI32IntervalMap<V>
where
    V: Eq + Clone,
{
    fn from(interval_map: &IntervalMap<i32, V>) -> Self {
        let mut dense = Self::new(interval_map.default_value().clone());
        for (range, value) in interval_map.segments() {
            dense.assign(*range.start, *range.end, value.clone());
        }
        dense
    }
}
