// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A binary min-heap ordered by a caller-supplied comparator.
//!
//! A `Heap` always exposes the item that sorts first under its comparator. Any
//! [`Compare`][cmp] implementation can be used, which includes closures of the form
//! `Fn(&T, &T) -> Ordering` and the adaptors of the `compare` crate. Without a comparator
//! the heap uses the natural (ascending) order of its items.
//!
//! Insertion and popping the smallest item are `O(log n)`. Retrieving the smallest item is
//! `O(1)`. Building a heap from a collection inserts the items one at a time and is therefore
//! `O(n log n)`.
//!
//! [cmp]: https://docs.rs/compare/0.1.0/compare/trait.Compare.html

use std::fmt::{self, Debug};
use std::iter;
use std::mem;
use std::slice;
use std::vec;

use compare::{natural, Compare, Natural};

mod dynamic;

pub use crate::dynamic::{Error, Method, Reply};

// The heap is a complete binary tree stored level by level in a Vec.
// Here's the layout of a tree with 10 items, where the numbers are the
// *offsets* in the array:
//
//            0
//         /     \
//        1       2
//       / \     / \
//      3   4   5   6
//     / \  |
//    7  8  9
//
// Every item compares less than or equal to both of its children, so the
// smallest item is always at offset 0.

fn parent(x: usize) -> usize {
    debug_assert!(x > 0);
    (x + 1) / 2 - 1
}

fn left_child(x: usize) -> usize { 2 * (x + 1) - 1 }

fn right_child(x: usize) -> usize { 2 * (x + 1) }

/// Moves the item at `pos` towards the root until its parent no longer
/// compares greater. Returns the item's final offset.
fn sift_up<T, C: Compare<T>>(v: &mut [T], mut pos: usize, cmp: &C) -> usize {
    while pos > 0 {
        let par = parent(pos);
        if cmp.compares_gt(&v[par], &v[pos]) {
            v.swap(par, pos);
            pos = par;
        } else {
            break;
        }
    }
    pos
}

/// Moves the item at `pos` towards the leaves while it compares greater than
/// the child picked for it.
fn sift_down<T, C: Compare<T>>(v: &mut [T], mut pos: usize, cmp: &C) {
    loop {
        let l = left_child(pos);
        let r = right_child(pos);
        if v.len() <= l { return; } // No children. We're done.
        // The right child wins only if the left one compares greater.
        let ch = if r < v.len() && cmp.compares_gt(&v[l], &v[r]) { r } else { l };
        if cmp.compares_gt(&v[pos], &v[ch]) {
            v.swap(pos, ch);
            pos = ch;
        } else {
            return;
        }
    }
}

/// A priority queue implemented with a binary min-heap.
///
/// The comparator must be a total order. It is a logic error for an item to be modified in
/// such a way that the item's ordering relative to any other item, as determined by the heap's
/// comparator, changes while it is in the heap. Neither is detected; the heap just ends up in
/// an unspecified (but memory safe) order.
///
/// Items are owned by the heap. Cloning the heap clones the items, so store `Rc<T>` or
/// `Arc<T>` if copies of a heap should share their items.
#[derive(Clone)]
pub struct Heap<T, C: Compare<T> = Natural<T>> {
    data: Vec<T>,
    cmp: C,
}

impl<T, C: Compare<T> + Default> Default for Heap<T, C> {
    #[inline]
    fn default() -> Heap<T, C> {
        Self::with_comparator(C::default())
    }
}

impl<T: Ord> Heap<T> {
    /// Returns an empty heap ordered according to the natural order of its items.
    ///
    /// # Examples
    ///
    /// ```
    /// use comparator_heap::Heap;
    ///
    /// let heap = Heap::<u32>::new();
    /// assert!(heap.is_empty());
    /// assert_eq!(heap.seek(), None);
    /// ```
    pub fn new() -> Heap<T> { Self::with_comparator(natural()) }

    /// Returns an empty heap with the given capacity and ordered according to the
    /// natural order of its items.
    ///
    /// # Examples
    ///
    /// ```
    /// use comparator_heap::Heap;
    ///
    /// let heap = Heap::<u32>::with_capacity(5);
    /// assert!(heap.is_empty());
    /// assert!(heap.capacity() >= 5);
    /// ```
    pub fn with_capacity(capacity: usize) -> Heap<T> {
        Self::with_capacity_and_comparator(capacity, natural())
    }
}

impl<T: Ord> From<Vec<T>> for Heap<T> {
    /// Returns a heap containing all the items of the given vector and ordered
    /// according to the natural order of its items.
    ///
    /// # Examples
    ///
    /// ```
    /// use comparator_heap::Heap;
    ///
    /// let heap = Heap::from(vec![5, 1, 6, 4]);
    /// assert_eq!(heap.len(), 4);
    /// assert_eq!(heap.seek(), Some(&1));
    /// ```
    fn from(vec: Vec<T>) -> Heap<T> {
        Self::from_vec_and_comparator(vec, natural())
    }
}

impl<T, C: Compare<T>> Heap<T, C> {
    /// Returns an empty heap ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use comparator_heap::Heap;
    ///
    /// let mut heap = Heap::<i32, _>::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    /// heap.push(2);
    /// heap.push(7);
    /// assert_eq!(heap.seek(), Some(&7));
    /// ```
    pub fn with_comparator(cmp: C) -> Heap<T, C> {
        Heap { data: vec![], cmp: cmp }
    }

    /// Returns an empty heap with the given capacity and ordered according to the given
    /// comparator.
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Heap<T, C> {
        Heap { data: Vec::with_capacity(capacity), cmp: cmp }
    }

    /// Returns a heap containing all the items of the given vector and ordered
    /// according to the given comparator.
    ///
    /// The items are inserted one at a time, in vector order, exactly as if they had been
    /// pushed onto an empty heap.
    pub fn from_vec_and_comparator(mut vec: Vec<T>, cmp: C) -> Heap<T, C> {
        for end in 1..vec.len() {
            sift_up(&mut vec[..end + 1], end, &cmp);
        }
        let heap = Heap { data: vec, cmp: cmp };
        debug_assert!(heap.is_valid());
        heap
    }

    /// Returns a reference to the comparator ordering this heap.
    pub fn comparator(&self) -> &C { &self.cmp }

    /// Replaces the comparator and reorders the heap under the new one, returning the old
    /// comparator.
    ///
    /// The items are reinserted in their current storage order.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use comparator_heap::Heap;
    ///
    /// fn asc(a: &i32, b: &i32) -> Ordering { a.cmp(b) }
    /// fn desc(a: &i32, b: &i32) -> Ordering { b.cmp(a) }
    ///
    /// let mut heap = Heap::<i32, _>::from_vec_and_comparator(vec![3, 1, 2], asc as fn(&i32, &i32) -> Ordering);
    /// assert_eq!(heap.seek(), Some(&1));
    /// heap.replace_comparator(desc);
    /// assert_eq!(heap.seek(), Some(&3));
    /// ```
    pub fn replace_comparator(&mut self, cmp: C) -> C {
        let old = mem::replace(&mut self.cmp, cmp);
        for end in 1..self.data.len() {
            sift_up(&mut self.data[..end + 1], end, &self.cmp);
        }
        debug_assert!(self.is_valid());
        old
    }

    /// Returns an iterator visiting all items in the heap in storage order.
    pub fn iter(&self) -> Iter<T> {
        debug_assert!(self.is_valid());
        Iter(self.data.iter())
    }

    /// Returns the heap's storage as a slice, in heap (not sorted) order.
    pub fn as_slice(&self) -> &[T] { &self.data }

    /// Returns a reference to the smallest item in the heap without removing it.
    ///
    /// Returns `None` if the heap is empty.
    pub fn seek(&self) -> Option<&T> {
        debug_assert!(self.is_valid());
        self.data.first()
    }

    /// Returns the number of items the heap can hold without reallocation.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves the minimum capacity for exactly `additional` more items to be inserted into the
    /// heap.
    ///
    /// Does nothing if the capacity is already sufficient.
    pub fn reserve_exact(&mut self, additional: usize) {
        self.data.reserve_exact(additional);
    }

    /// Reserves capacity for at least `additional` more items to be inserted into the heap.
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Discards as much additional capacity from the heap as possible.
    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit()
    }

    /// Removes the smallest item from the heap and returns it.
    ///
    /// Returns `None` if the heap was empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use comparator_heap::Heap;
    ///
    /// let mut heap = Heap::from(vec![4, 2, 8]);
    /// assert_eq!(heap.pop(), Some(2));
    /// assert_eq!(heap.pop(), Some(4));
    /// assert_eq!(heap.pop(), Some(8));
    /// assert_eq!(heap.pop(), None);
    /// assert_eq!(heap.len(), 0);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        debug_assert!(self.is_valid());
        let min = match self.data.len() {
            0 => None,
            1 => self.data.pop(),
            _ => {
                let res = self.data.swap_remove(0);
                sift_down(&mut self.data, 0, &self.cmp);
                Some(res)
            }
        };
        debug_assert!(self.is_valid());
        min
    }

    /// Pushes an item onto the heap and returns the new length.
    pub fn push(&mut self, item: T) -> usize {
        debug_assert!(self.is_valid());
        self.data.push(item);
        let last = self.data.len() - 1;
        sift_up(&mut self.data, last, &self.cmp);
        debug_assert!(self.is_valid());
        self.data.len()
    }

    /// Pushes every item of `items` onto the heap, one at a time and in iteration order, and
    /// returns the new length.
    ///
    /// # Examples
    ///
    /// ```
    /// use comparator_heap::Heap;
    ///
    /// let mut heap = Heap::new();
    /// assert_eq!(heap.push_all(vec![6, 5, 7, 2]), 4);
    /// assert_eq!(heap.seek(), Some(&2));
    /// ```
    pub fn push_all<I: IntoIterator<Item = T>>(&mut self, items: I) -> usize {
        let items = items.into_iter();
        let (lower, _) = items.size_hint();
        self.reserve(lower);
        for item in items {
            self.push(item);
        }
        self.data.len()
    }

    /// Removes the first item (in storage order) that is equal to `item` and returns it.
    ///
    /// The last item of the storage takes the removed item's place and is then moved up or
    /// down the tree, whichever restores the heap property.
    ///
    /// Returns `None`, leaving the heap untouched, if no such item is present.
    ///
    /// # Examples
    ///
    /// ```
    /// use comparator_heap::Heap;
    ///
    /// let mut heap = Heap::from(vec![1, 10, 2, 11, 12, 3, 4]);
    /// assert_eq!(heap.delete(&11), Some(11));
    /// assert_eq!(heap.delete(&11), None);
    /// assert_eq!(heap.into_sorted_vec(), vec![1, 2, 3, 4, 10, 12]);
    /// ```
    pub fn delete(&mut self, item: &T) -> Option<T> where T: PartialEq {
        debug_assert!(self.is_valid());
        let pos = self.data.iter().position(|x| x == item)?;
        let res = self.data.swap_remove(pos);
        if pos < self.data.len() && sift_up(&mut self.data, pos, &self.cmp) == pos {
            sift_down(&mut self.data, pos, &self.cmp);
        }
        debug_assert!(self.is_valid());
        Some(res)
    }

    /// Returns a new heap holding the items of this heap followed by the items of every operand
    /// in `others`.
    ///
    /// Operands are passed as storage slices (see [`as_slice`](#method.as_slice)), so heaps with
    /// different comparator types can be merged in one call. The new heap is a clone of this one
    /// into which the items of each operand are pushed in slice order. It is ordered by this
    /// heap's comparator, whatever comparators the operands use. Neither this heap nor the
    /// operands are modified.
    ///
    /// # Examples
    ///
    /// ```
    /// use comparator_heap::Heap;
    ///
    /// let desc = Heap::<i32, _>::from_vec_and_comparator(vec![6, 5, 7], |a: &i32, b: &i32| b.cmp(a));
    /// let asc = Heap::<i32>::from(vec![3, 8, 1]);
    ///
    /// let merged = desc.concat(vec![asc.as_slice()]);
    /// assert_eq!(merged.seek(), Some(&8));
    /// assert_eq!(merged.len(), 6);
    /// assert_eq!(desc.len(), 3);
    /// ```
    pub fn concat<'a, I>(&self, others: I) -> Heap<T, C>
        where T: Clone + 'a, C: Clone, I: IntoIterator<Item = &'a [T]>
    {
        let mut merged = self.clone();
        for other in others {
            merged.push_all(other.iter().cloned());
        }
        merged
    }

    /// Returns a copy of the heap's storage, in heap (not sorted) order.
    pub fn to_vec(&self) -> Vec<T> where T: Clone {
        self.data.clone()
    }

    /// Always returns `false`: a heap is not a plain sequence.
    #[inline]
    pub fn is_array(&self) -> bool { false }

    /// Consumes the heap and returns its items as a vector in storage order.
    pub fn into_vec(self) -> Vec<T> { self.data }

    /// Consumes the heap and returns its items as a vector sorted in ascending order under the
    /// heap's comparator.
    pub fn into_sorted_vec(self) -> Vec<T> {
        let mut vec = self.data;
        for end in (1..vec.len()).rev() {
            vec.swap(0, end);
            sift_down(&mut vec[..end], 0, &self.cmp);
        }
        vec.reverse();
        vec
    }

    /// Returns the number of items in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap contains no items.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Removes all items from the heap.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Clears the heap, returning an iterator over the removed items in storage order.
    pub fn drain(&mut self) -> Drain<T> {
        Drain(self.data.drain(..))
    }

    /// Checks if the heap is valid.
    ///
    /// The heap is valid if no item compares greater than any of its children.
    fn is_valid(&self) -> bool {
        (1..self.data.len()).all(|i| !self.cmp.compares_gt(&self.data[parent(i)], &self.data[i]))
    }
}

impl<T: Debug, C: Compare<T>> Debug for Heap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<T, C: Compare<T> + Default> iter::FromIterator<T> for Heap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Heap<T, C> {
        Heap::from_vec_and_comparator(iter.into_iter().collect(), C::default())
    }
}

impl<T, C: Compare<T>> Extend<T> for Heap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.push_all(iter);
    }
}

impl<'a, T: 'a + Copy, C: Compare<T>> Extend<&'a T> for Heap<T, C> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.push_all(iter.into_iter().cloned());
    }
}

/// An iterator over a `Heap` in storage order.
///
/// Acquire through [`Heap::iter`](struct.Heap.html#method.iter).
pub struct Iter<'a, T: 'a>(slice::Iter<'a, T>);

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Iter<'a, T> { Iter(self.0.clone()) }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    #[inline] fn next(&mut self) -> Option<&'a T> { self.0.next() }
    #[inline] fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> { self.0.next_back() }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

/// A consuming iterator over a `Heap` in storage order.
pub struct IntoIter<T>(vec::IntoIter<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> { self.0.next_back() }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

/// An iterator that drains a `Heap` in storage order.
///
/// Acquire through [`Heap::drain`](struct.Heap.html#method.drain).
pub struct Drain<'a, T: 'a>(vec::Drain<'a, T>);

impl<'a, T: 'a> Iterator for Drain<'a, T> {
    type Item = T;
    fn next(&mut self) -> Option<T> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, T: 'a> DoubleEndedIterator for Drain<'a, T> {
    fn next_back(&mut self) -> Option<T> { self.0.next_back() }
}

impl<'a, T: 'a> ExactSizeIterator for Drain<'a, T> {}

impl<T, C: Compare<T>> IntoIterator for Heap<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> IntoIter<T> { IntoIter(self.data.into_iter()) }
}

impl<'a, T, C: Compare<T>> IntoIterator for &'a Heap<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> { self.iter() }
}
