// Copyright 2025 the Plotkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A data container that keeps points sorted by key.

extern crate alloc;

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::{Range, SignDomain};

/// A data point that can be stored in a [`DataContainer`].
pub trait SortKey: Copy {
    /// The key the container sorts by.
    fn sort_key(&self) -> f64;

    /// The coordinate plotted along the key axis.
    fn main_key(&self) -> f64 {
        self.sort_key()
    }

    /// The coordinate plotted along the value axis.
    fn main_value(&self) -> f64;
}

fn cmp_keys<T: SortKey>(a: &T, b: &T) -> Ordering {
    a.sort_key().total_cmp(&b.sort_key())
}

/// An ordered sequence of data points, sorted ascending by [`SortKey::sort_key`].
///
/// Points with equal keys keep their insertion order.
#[derive(Clone, Debug, PartialEq)]
pub struct DataContainer<T> {
    data: Vec<T>,
}

impl<T> Default for DataContainer<T> {
    fn default() -> Self {
        Self { data: Vec::new() }
    }
}

impl<T: SortKey> DataContainer<T> {
    /// Creates an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of points.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns whether the container holds no points.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the points as a sorted slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the point at `index`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Iterates over the points in key order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Removes all points.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Replaces all points.
    ///
    /// If `already_sorted` is `false`, the points are sorted first.
    pub fn set(&mut self, data: impl IntoIterator<Item = T>, already_sorted: bool) {
        self.data.clear();
        self.data.extend(data);
        if !already_sorted {
            self.data.sort_by(cmp_keys);
        }
    }

    /// Adds a batch of points.
    ///
    /// With `already_sorted`, a batch whose keys all precede the existing points is prepended
    /// without sorting; otherwise the batch is sorted (if needed), appended and merged in.
    pub fn add(&mut self, data: impl IntoIterator<Item = T>, already_sorted: bool) {
        let mut batch: Vec<T> = data.into_iter().collect();
        if batch.is_empty() {
            return;
        }
        if self.data.is_empty() {
            self.set(batch, already_sorted);
            return;
        }
        if !already_sorted {
            batch.sort_by(cmp_keys);
        }
        let (Some(first_existing), Some(last_new)) = (self.data.first(), batch.last()) else {
            return;
        };
        if already_sorted && cmp_keys(last_new, first_existing).is_lt() {
            batch.append(&mut self.data);
            self.data = batch;
            return;
        }
        let old_len = self.data.len();
        self.data.append(&mut batch);
        if cmp_keys(&self.data[old_len - 1], &self.data[old_len]).is_gt() {
            // Stable, and cheap on two sorted runs.
            self.data.sort_by(cmp_keys);
        }
    }

    /// Inserts one point after any points with an equal key.
    pub fn add_point(&mut self, point: T) {
        let key = point.sort_key();
        let index = self
            .data
            .partition_point(|p| p.sort_key().total_cmp(&key).is_le());
        self.data.insert(index, point);
    }

    /// Returns the index of the first point with key `>= key`.
    ///
    /// With `expanded_range`, the index steps back one more point (if possible) so a line or
    /// bar reaching in from the left is included.
    pub fn find_begin(&self, key: f64, expanded_range: bool) -> usize {
        let index = self.data.partition_point(|p| p.sort_key() < key);
        if expanded_range && index > 0 {
            index - 1
        } else {
            index
        }
    }

    /// Returns the index one past the last point with key `<= key`.
    ///
    /// With `expanded_range`, the index advances one more point (if possible).
    pub fn find_end(&self, key: f64, expanded_range: bool) -> usize {
        let index = self.data.partition_point(|p| p.sort_key() <= key);
        if expanded_range && index < self.data.len() {
            index + 1
        } else {
            index
        }
    }

    /// Returns the span of finite keys in `sign_domain`, or `None` if there are none.
    pub fn key_range(&self, sign_domain: SignDomain) -> Option<Range> {
        span(self.data.iter().map(SortKey::main_key), sign_domain)
    }

    /// Returns the span of finite values in `sign_domain`, or `None` if there are none.
    pub fn value_range(&self, sign_domain: SignDomain) -> Option<Range> {
        span(self.data.iter().map(SortKey::main_value), sign_domain)
    }
}

fn span(values: impl Iterator<Item = f64>, sign_domain: SignDomain) -> Option<Range> {
    let mut out: Option<Range> = None;
    for v in values.filter(|v| v.is_finite() && sign_domain.contains(*v)) {
        let r = out.get_or_insert(Range::new(v, v));
        r.lower = r.lower.min(v);
        r.upper = r.upper.max(v);
    }
    out
}

impl<'a, T> IntoIterator for &'a DataContainer<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq)]
    struct P(f64, f64);

    impl SortKey for P {
        fn sort_key(&self) -> f64 {
            self.0
        }

        fn main_value(&self) -> f64 {
            self.1
        }
    }

    fn keys(c: &DataContainer<P>) -> Vec<f64> {
        c.iter().map(|p| p.0).collect()
    }

    #[test]
    fn unsorted_batches_are_merged_in_order() {
        let mut c = DataContainer::new();
        c.add(vec![P(3.0, 0.0), P(1.0, 0.0)], false);
        c.add(vec![P(2.0, 0.0), P(0.0, 0.0), P(5.0, 0.0)], false);
        assert_eq!(keys(&c), vec![0.0, 1.0, 2.0, 3.0, 5.0]);
    }

    #[test]
    fn sorted_batch_before_existing_is_prepended() {
        let mut c = DataContainer::new();
        c.add(vec![P(5.0, 0.0), P(6.0, 0.0)], true);
        c.add(vec![P(1.0, 0.0), P(2.0, 0.0)], true);
        assert_eq!(keys(&c), vec![1.0, 2.0, 5.0, 6.0]);
    }

    #[test]
    fn equal_keys_keep_insertion_order() {
        let mut c = DataContainer::new();
        c.add_point(P(1.0, 10.0));
        c.add_point(P(1.0, 20.0));
        c.add_point(P(0.5, 0.0));
        c.add(vec![P(1.0, 30.0)], false);
        let values: Vec<f64> = c.iter().map(|p| p.1).collect();
        assert_eq!(values, vec![0.0, 10.0, 20.0, 30.0]);
    }

    #[test]
    fn find_bounds_expand_by_one_point() {
        let mut c = DataContainer::new();
        c.set((0..10).map(|i| P(f64::from(i), 0.0)), true);
        assert_eq!(c.find_begin(3.5, false), 4);
        assert_eq!(c.find_begin(3.5, true), 3);
        assert_eq!(c.find_end(6.0, false), 7);
        assert_eq!(c.find_end(6.0, true), 8);
        assert_eq!(c.find_begin(-1.0, true), 0);
        assert_eq!(c.find_end(20.0, true), 10);
    }

    #[test]
    fn key_range_respects_sign_domain() {
        let mut c = DataContainer::new();
        c.set(vec![P(-2.0, 1.0), P(-1.0, -4.0), P(3.0, 2.0), P(f64::NAN, 0.0)], false);
        assert_eq!(c.key_range(SignDomain::Both), Some(Range::new(-2.0, 3.0)));
        assert_eq!(c.key_range(SignDomain::Negative), Some(Range::new(-2.0, -1.0)));
        assert_eq!(c.value_range(SignDomain::Positive), Some(Range::new(1.0, 2.0)));
        assert_eq!(DataContainer::<P>::new().key_range(SignDomain::Both), None);
    }
}
