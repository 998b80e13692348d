use alloc::collections::btree_map;
use core::iter::{FusedIterator, Peekable};
use core::ops::Range;

use super::IntervalMap;

impl<K, V> IntervalMap<K, V> {
    /// Gets an iterator over the stored breakpoints, in ascending key order.
    ///
    /// Each `(key, value)` pair means `value` is in effect from `key` up to
    /// the next breakpoint. Keys before the first breakpoint, and from the
    /// last one onwards, read the default value.
    ///
    /// ```
    /// use intervalmap::IntervalMap;
    ///
    /// let mut map = IntervalMap::new('A');
    /// map.assign(0, 10, 'B');
    /// let table: Vec<_> = map.breakpoints().collect();
    /// assert_eq!(table, [(&0, &'B'), (&10, &'A')]);
    /// ```
    pub fn breakpoints(&self) -> Breakpoints<'_, K, V> {
        Breakpoints(self.btm.iter())
    }

    /// Gets an iterator over the explicitly assigned segments, that is every
    /// maximal range holding something other than the default value.
    ///
    /// The iterator element type is `(Range<&'a K>, &'a V)`.
    pub fn segments(&self) -> Segments<'_, K, V> {
        Segments {
            inner: self.btm.iter().peekable(),
            default: &self.default,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Breakpoints<'a, K, V>(btree_map::Iter<'a, K, V>);

impl<'a, K, V> Iterator for Breakpoints<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, K, V> DoubleEndedIterator for Breakpoints<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}

impl<'a, K, V> ExactSizeIterator for Breakpoints<'a, K, V> {}

impl<'a, K, V> FusedIterator for Breakpoints<'a, K, V> {}

pub struct Segments<'a, K, V> {
    inner: Peekable<btree_map::Iter<'a, K, V>>,
    default: &'a V,
}

impl<'a, K, V> Iterator for Segments<'a, K, V>
where
    V: PartialEq,
{
    type Item = (Range<&'a K>, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (start, value) = self.inner.next()?;
            // The last breakpoint always returns to the default,
            // so a segment never runs off the end of the table.
            let &(end, _) = self.inner.peek()?;
            if value != self.default {
                return Some((start..end, value));
            }
        }
    }
}

impl<'a, K, V> FusedIterator for Segments<'a, K, V> where V: PartialEq {}

pub struct IntoIter<K, V> {
    inner: btree_map::IntoIter<K, V>,
}

impl<K, V> IntervalMap<K, V> {
    /// Consumes the map, yielding its breakpoints in ascending key order.
    pub fn into_breakpoints(self) -> IntoIter<K, V> {
        IntoIter {
            inner: self.btm.into_iter(),
        }
    }
}

impl<K, V> IntoIterator for IntervalMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_breakpoints()
    }
}

impl<'a, K, V> IntoIterator for &'a IntervalMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Breakpoints<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.breakpoints()
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<(K, V)> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}
