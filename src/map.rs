use crate::error::BreakpointError;
use alloc::collections::BTreeMap;
use core::fmt::{self, Debug};
use core::ops::{Bound, Index, Range};
use log::trace;

#[cfg(feature = "serde1")]
use core::marker::PhantomData;
#[cfg(feature = "serde1")]
use serde::{
    de::{self, Deserialize, Deserializer, SeqAccess, Visitor},
    ser::{Serialize, Serializer},
};

mod iterators;

pub use iterators::{Breakpoints, IntoIter, Segments};

/// A map from half-open key ranges `[begin, end)` to values, where every
/// key not covered by an assigned range reads a fixed default value.
///
/// Internally the map only stores *breakpoints*: each `(key, value)` entry
/// means "from `key` onward the value is `value`, up to the next
/// breakpoint". The table is always kept in canonical form:
///
/// - no two neighbouring breakpoints hold the same value,
/// - the first breakpoint never holds the default value,
/// - the last breakpoint always holds the default value.
///
/// This means two maps compare equal exactly when they answer every
/// [`lookup`](IntervalMap::lookup) the same way.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct IntervalMap<K, V> {
    default: V,
    btm: BTreeMap<K, V>,
}

impl<K, V> IntervalMap<K, V>
where
    K: Ord + Clone,
    V: Eq + Clone,
{
    /// Makes a new map in which every key reads `default`.
    pub fn new(default: V) -> Self {
        IntervalMap {
            default,
            btm: BTreeMap::new(),
        }
    }

    /// Rebuilds a map from an explicit breakpoint table, as yielded by
    /// [`breakpoints`](IntervalMap::breakpoints).
    ///
    /// The table must already be canonical: keys strictly ascending, no
    /// breakpoint repeating the value in effect before it, and the last
    /// breakpoint restoring `default`.
    pub fn from_breakpoints<I>(default: V, breakpoints: I) -> Result<Self, BreakpointError>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut btm = BTreeMap::new();
        for (index, (key, value)) in breakpoints.into_iter().enumerate() {
            if let Some((last_key, last_value)) = btm.last_key_value() {
                if key <= *last_key {
                    return Err(BreakpointError::Unordered { index });
                }
                if value == *last_value {
                    return Err(BreakpointError::Redundant { index });
                }
            } else if value == default {
                return Err(BreakpointError::Redundant { index });
            }
            btm.insert(key, value);
        }
        if let Some((_, last_value)) = btm.last_key_value() {
            if *last_value != default {
                return Err(BreakpointError::Unterminated);
            }
        }
        Ok(IntervalMap { default, btm })
    }

    /// Returns the value in effect at `key`.
    ///
    /// That is the value of the last breakpoint at or before `key`,
    /// or the default value if there is none.
    pub fn lookup(&self, key: &K) -> &V {
        self.btm
            .range((Bound::Unbounded, Bound::Included(key)))
            .next_back()
            .map(|(_key, value)| value)
            .unwrap_or(&self.default)
    }

    /// Sets every key in `[begin, end)` to `value`.
    ///
    /// Keys outside the range keep their current value. If `begin` is not
    /// strictly less than `end` the range is empty and nothing happens.
    pub fn assign(&mut self, begin: K, end: K, value: V) {
        if begin >= end {
            trace!("ignoring assignment over an empty range");
            return;
        }

        // The whole range lies in default space left of every breakpoint
        // (or the table is empty), so nothing stored can be affected.
        let left_of_table = self
            .btm
            .first_key_value()
            .map_or(true, |(first_key, _)| end < *first_key);
        if left_of_table {
            if value == self.default {
                trace!("assignment of the default value over default space");
                return;
            }
            let default = self.default.clone();
            self.btm.insert(end, default);
            self.btm.insert(begin, value);
            return;
        }

        // Both neighbours are read before anything is touched.
        let tail_value = self.lookup(&end).clone();
        let merge_left = *self.value_before(&begin) == value;
        let merge_right = value == tail_value;

        // Everything from `begin` up to (not including) `end` is subsumed.
        while let Some(key) = self
            .btm
            .range((Bound::Included(&begin), Bound::Excluded(&end)))
            .next()
            .map(|(key, _value)| key.clone())
        {
            self.btm.remove(&key);
        }

        if merge_right {
            self.btm.remove(&end);
        } else {
            self.btm.insert(end, tail_value);
        }
        if !merge_left {
            self.btm.insert(begin, value);
        }
    }

    // Value in effect just left of `key`.
    fn value_before(&self, key: &K) -> &V {
        self.btm
            .range((Bound::Unbounded, Bound::Excluded(key)))
            .next_back()
            .map(|(_key, value)| value)
            .unwrap_or(&self.default)
    }
}

impl<K, V> IntervalMap<K, V> {
    /// The value read by every key no range covers.
    pub fn default_value(&self) -> &V {
        &self.default
    }

    /// Number of stored breakpoints. Either zero or at least two.
    pub fn len(&self) -> usize {
        self.btm.len()
    }

    /// Returns `true` if no range holds anything but the default value.
    pub fn is_empty(&self) -> bool {
        self.btm.is_empty()
    }
}

impl<K, V> Index<&K> for IntervalMap<K, V>
where
    K: Ord + Clone,
    V: Eq + Clone,
{
    type Output = V;

    fn index(&self, key: &K) -> &V {
        self.lookup(key)
    }
}

// Not derived, so the field shows up under its meaning rather than
// the name of the backing collection.
impl<K: Debug, V: Debug> Debug for IntervalMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntervalMap")
            .field("default", &self.default)
            .field("breakpoints", &self.btm)
            .finish()
    }
}

impl<K, V> Extend<(Range<K>, V)> for IntervalMap<K, V>
where
    K: Ord + Clone,
    V: Eq + Clone,
{
    fn extend<T: IntoIterator<Item = (Range<K>, V)>>(&mut self, iter: T) {
        iter.into_iter().for_each(move |(range, value)| {
            self.assign(range.start, range.end, value);
        })
    }
}

#[cfg(feature = "serde1")]
impl<K, V> Serialize for IntervalMap<K, V>
where
    K: Ord + Clone + Serialize,
    V: Eq + Clone + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeTuple;
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.default)?;
        tuple.serialize_element(&SerializeBreakpoints(&self.btm))?;
        tuple.end()
    }
}

#[cfg(feature = "serde1")]
struct SerializeBreakpoints<'a, K, V>(&'a BTreeMap<K, V>);

#[cfg(feature = "serde1")]
impl<'a, K, V> Serialize for SerializeBreakpoints<'a, K, V>
where
    K: Serialize,
    V: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for (key, value) in self.0.iter() {
            seq.serialize_element(&(key, value))?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde1")]
impl<'de, K, V> Deserialize<'de> for IntervalMap<K, V>
where
    K: Ord + Clone + Deserialize<'de>,
    V: Eq + Clone + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_tuple(2, IntervalMapVisitor::new())
    }
}

#[cfg(feature = "serde1")]
struct IntervalMapVisitor<K, V> {
    marker: PhantomData<fn() -> IntervalMap<K, V>>,
}

#[cfg(feature = "serde1")]
impl<K, V> IntervalMapVisitor<K, V> {
    fn new() -> Self {
        IntervalMapVisitor {
            marker: PhantomData,
        }
    }
}

#[cfg(feature = "serde1")]
impl<'de, K, V> Visitor<'de> for IntervalMapVisitor<K, V>
where
    K: Ord + Clone + Deserialize<'de>,
    V: Eq + Clone + Deserialize<'de>,
{
    type Value = IntervalMap<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("IntervalMap")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let default: V = access
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let breakpoints: alloc::vec::Vec<(K, V)> = access
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(1, &self))?;
        IntervalMap::from_breakpoints(default, breakpoints).map_err(de::Error::custom)
    }
}
