/*!
[`IntervalMap`] is a map whose values are assigned over half-open key ranges
`[begin, end)`, and in which every key that no range covers reads a fixed
default value chosen when the map is built.

It is stored compactly as a table of *breakpoints*: sorted `(key, value)`
pairs, each marking the key from which a new value takes effect. The table
is kept in canonical form after every assignment, so neighbouring ranges
that end up holding the same value are merged, and ranges that are
overwritten with the default value disappear from the table entirely.


# Example

```rust
use intervalmap::IntervalMap;

let mut map = IntervalMap::new('A');

map.assign(0, 10, 'B');
map.assign(10, 20, 'B');
map.assign(5, 8, 'C');

assert_eq!(map.lookup(&-1), &'A');
assert_eq!(map.lookup(&4), &'B');
assert_eq!(map.lookup(&5), &'C');
assert_eq!(map.lookup(&8), &'B');
assert_eq!(map[&19], 'B');
assert_eq!(map[&20], 'A');

// `[0, 10)` and `[10, 20)` were merged before `[5, 8)` split them again.
let table: Vec<_> = map.breakpoints().collect();
assert_eq!(
    table,
    [(&0, &'B'), (&5, &'C'), (&8, &'B'), (&20, &'A')]
);

// An empty (or reversed) range is silently ignored.
map.assign(30, 30, 'Z');
map.assign(30, 25, 'Z');
assert_eq!(map.len(), 4);
```


## Crate features

By default this crate depends only on `log` (at `trace` level, for
assignments that turn out to be no-ops) and `thiserror`.

If you enable the **serde1** feature it will introduce a dependency on
the _serde_ crate and provide `Serialize` and `Deserialize`
implementations for [`IntervalMap`]. Deserialization rejects
breakpoint tables that are not in canonical form.


## Building without the Rust standard library

This crate works without the full standard library available but relies
on the presence of a global allocator; it links the `core` and `alloc`
crates, but not `std`.


[`IntervalMap`]: crate::IntervalMap

*/

#![no_std]
extern crate alloc;

pub mod error;
pub mod map;

#[cfg(test)]
mod dense;

pub use error::BreakpointError;
pub use map::IntervalMap;
