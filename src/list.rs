// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt::{Debug, Formatter};
use std::iter::FromIterator;

use crate::alloc::try_box;
use crate::error::Error;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

/// A singly linked list of owned values.
///
/// Each node owns its element and the link to its successor, so the list
/// transitively owns the whole chain; there is no sharing and no cycles
/// by construction. The list keeps no cached tail or length: operations
/// on the back of the list and [`len()`][List::len] traverse the chain,
/// while operations on the front are O(1).
///
/// Operations that allocate report [`Error::AllocationFailure`] instead
/// of aborting, and leave the list unchanged when they fail.
///
/// # Example
///
/// ```rust
/// # use linkstack::List;
/// # fn main() -> Result<(), linkstack::Error> {
/// let mut list = List::new();
/// list.push_back(10)?;
/// list.insert(0, 30)?;
/// list.push_back(10)?;
/// assert_eq!(vec![30, 10, 10], list.iter().copied().collect::<Vec<_>>());
/// assert_eq!(3, list.len());
/// assert_eq!(Ok(&10), list.back());
/// assert_eq!(Some(&30), list.front());
/// # Ok(())
/// # }
/// ```
pub struct List<T> {
    head: Link<T>,
}

impl<T> List<T> {
    /// Construct an empty list. Does not allocate.
    pub fn new() -> Self {
        Self { head: None }
    }

    /// Test whether the list has no elements. O(1).
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Count the elements by walking the chain. O(n).
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Prepend `value` to the front of the list. O(1).
    pub fn push_front(&mut self, value: T) -> Result<(), Error> {
        let mut node = try_box(Node { value, next: None })?;
        node.next = self.head.take();
        self.head = Some(node);
        Ok(())
    }

    /// Append `value` after the current last node, walking the chain to
    /// find it. O(n).
    pub fn push_back(&mut self, value: T) -> Result<(), Error> {
        let node = try_box(Node { value, next: None })?;
        let mut cursor = &mut self.head;
        while let Some(current) = cursor {
            cursor = &mut current.next;
        }
        *cursor = Some(node);
        Ok(())
    }

    /// Detach the first node and return its value.
    ///
    /// Fails with [`Error::EmptyCollection`] if the list is empty.
    pub fn pop_front(&mut self) -> Result<T, Error> {
        let node = self.head.take().ok_or(Error::EmptyCollection)?;
        self.head = node.next;
        Ok(node.value)
    }

    /// Detach the last node and return its value. O(n).
    ///
    /// Fails with [`Error::EmptyCollection`] if the list is empty. A
    /// one-element list behaves exactly like
    /// [`pop_front`][List::pop_front].
    pub fn pop_back(&mut self) -> Result<T, Error> {
        match self.len() {
            0 => Err(Error::EmptyCollection),
            len => self.remove(len - 1),
        }
    }

    /// Insert `value` so it becomes the element at position `index`,
    /// relinking without moving any existing element. `index == len()`
    /// appends.
    ///
    /// Fails with [`Error::IndexOutOfBounds`] when `index > len()`, and
    /// with [`Error::AllocationFailure`] when the node cannot be
    /// allocated; the list is unchanged in both cases.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), Error> {
        if let Some(link) = self.link_mut(index) {
            let mut node = try_box(Node { value, next: None })?;
            node.next = link.take();
            *link = Some(node);
            Ok(())
        } else {
            Err(Error::IndexOutOfBounds {
                index,
                len: self.len(),
            })
        }
    }

    /// Remove the node at position `index` and return its value,
    /// relinking its predecessor to its successor.
    ///
    /// Fails with [`Error::IndexOutOfBounds`] when `index >= len()`.
    pub fn remove(&mut self, index: usize) -> Result<T, Error> {
        if let Some(link) = self.link_mut(index) {
            if let Some(node) = link.take() {
                let Node { value, next } = *node;
                *link = next;
                return Ok(value);
            }
        }
        Err(Error::IndexOutOfBounds {
            index,
            len: self.len(),
        })
    }

    /// Borrow the first element, if any.
    pub fn front(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    /// Mutably borrow the first element, if any.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_mut().map(|node| &mut node.value)
    }

    /// Borrow the last element, walking the chain to find it. O(n).
    ///
    /// Fails with [`Error::EmptyCollection`] if the list is empty.
    pub fn back(&self) -> Result<&T, Error> {
        let mut node = self.head.as_deref().ok_or(Error::EmptyCollection)?;
        while let Some(next) = node.next.as_deref() {
            node = next;
        }
        Ok(&node.value)
    }

    /// Mutably borrow the last element. O(n).
    ///
    /// Fails with [`Error::EmptyCollection`] if the list is empty.
    pub fn back_mut(&mut self) -> Result<&mut T, Error> {
        let mut cursor = &mut self.head;
        while cursor.as_ref().map_or(false, |node| node.next.is_some()) {
            if let Some(node) = cursor {
                cursor = &mut node.next;
            }
        }
        match cursor {
            Some(node) => Ok(&mut node.value),
            None => Err(Error::EmptyCollection),
        }
    }

    /// Drop every element and return the list to its empty state.
    pub fn clear(&mut self) {
        // Unlink iteratively so dropping a long chain can't overflow the
        // call stack through recursive `Box` drops.
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }

    /// Iterate over the elements front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Iterate mutably over the elements front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head.as_deref_mut(),
        }
    }

    /// Walk to the link *preceding* position `index`: the one that owns
    /// the node at `index`, or the empty link one past the last node
    /// when `index == len()`. `None` when `index > len()`.
    fn link_mut(&mut self, index: usize) -> Option<&mut Link<T>> {
        let mut cursor = &mut self.head;
        for _ in 0..index {
            cursor = &mut cursor.as_mut()?.next;
        }
        Some(cursor)
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for List<T> {
    /// Append every element of `iter`, reusing a single tail cursor so
    /// the whole batch is O(n + m) rather than one traversal per push.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut cursor = &mut self.head;
        while let Some(current) = cursor {
            cursor = &mut current.next;
        }
        for value in iter {
            // `Extend` has no error channel, so this is the one allocation
            // path that aborts on heap exhaustion instead of reporting
            // `Error::AllocationFailure`.
            let node = cursor.get_or_insert(Box::new(Node { value, next: None }));
            cursor = &mut node.next;
        }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

/// Borrowing iterator over a [`List`], front to back.
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter { next: self.next }
    }
}

impl<'a, T: Debug> Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// Mutably borrowing iterator over a [`List`], front to back.
pub struct IterMut<'a, T> {
    next: Option<&'a mut Node<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|node| {
            self.next = node.next.as_deref_mut();
            &mut node.value
        })
    }
}

impl<'a, T> Debug for IterMut<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IterMut").finish()
    }
}

/// Owning iterator over a [`List`], front to back.
pub struct IntoIter<T>(List<T>);

impl<T: Debug> Debug for IntoIter<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("IntoIter").field(&self.0).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front().ok()
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut List<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;
    use std::collections::VecDeque;

    fn contents<T: Copy>(list: &List<T>) -> Vec<T> {
        list.iter().copied().collect()
    }

    #[test]
    fn empty_list() {
        let list: List<u32> = List::new();
        assert!(list.is_empty());
        assert_eq!(0, list.len());
        assert_eq!(None, list.front());
        assert_eq!(Err(Error::EmptyCollection), list.back());
    }

    #[test]
    fn push_pop_both_ends() {
        let mut list = List::new();
        list.push_back(2).unwrap();
        list.push_front(1).unwrap();
        list.push_back(3).unwrap();
        assert_eq!(vec![1, 2, 3], contents(&list));
        assert_eq!(Ok(1), list.pop_front());
        assert_eq!(Ok(3), list.pop_back());
        assert_eq!(Ok(2), list.pop_back());
        assert!(list.is_empty());
    }

    #[test]
    fn pops_on_empty_fail() {
        let mut list: List<u32> = List::new();
        assert_eq!(Err(Error::EmptyCollection), list.pop_front());
        assert_eq!(Err(Error::EmptyCollection), list.pop_back());
    }

    #[test]
    fn single_element_emptied_from_either_end() {
        let mut list = List::new();
        list.push_back(42).unwrap();
        assert_eq!(Ok(42), list.pop_back());
        assert_eq!(0, list.len());
        assert_eq!(Err(Error::EmptyCollection), list.pop_front());

        list.push_front(42).unwrap();
        assert_eq!(Ok(42), list.pop_front());
        assert_eq!(0, list.len());
        assert_eq!(Err(Error::EmptyCollection), list.pop_back());
    }

    #[test]
    fn insert_at_head_middle_and_tail() {
        let mut list = List::new();
        list.push_back(10).unwrap();
        list.insert(0, 30).unwrap();
        list.push_back(10).unwrap();
        assert_eq!(vec![30, 10, 10], contents(&list));
        assert_eq!(3, list.len());
        assert_eq!(Ok(&10), list.back());
        assert_eq!(Some(&30), list.front());

        list.insert(2, 20).unwrap();
        assert_eq!(vec![30, 10, 20, 10], contents(&list));
        list.insert(4, 50).unwrap();
        assert_eq!(vec![30, 10, 20, 10, 50], contents(&list));
    }

    #[test]
    fn insert_out_of_range() {
        let mut list = List::new();
        list.push_back(1).unwrap();
        assert_eq!(
            Err(Error::IndexOutOfBounds { index: 2, len: 1 }),
            list.insert(2, 9)
        );
        assert_eq!(vec![1], contents(&list));
    }

    #[test]
    fn remove_relinks_the_chain() {
        let mut list: List<u32> = (0..5).collect();
        assert_eq!(Ok(2), list.remove(2));
        assert_eq!(vec![0, 1, 3, 4], contents(&list));
        assert_eq!(Ok(0), list.remove(0));
        assert_eq!(vec![1, 3, 4], contents(&list));
        assert_eq!(Ok(4), list.remove(2));
        assert_eq!(vec![1, 3], contents(&list));
        assert_eq!(
            Err(Error::IndexOutOfBounds { index: 2, len: 2 }),
            list.remove(2)
        );
    }

    #[test]
    fn front_and_back_views_are_writable() {
        let mut list: List<u32> = (1..=3).collect();
        *list.front_mut().unwrap() = 100;
        *list.back_mut().unwrap() = 300;
        assert_eq!(vec![100, 2, 300], contents(&list));
    }

    #[test]
    fn iter_mut_reaches_every_element() {
        let mut list: List<u32> = (0..4).collect();
        for value in list.iter_mut() {
            *value *= 2;
        }
        assert_eq!(vec![0, 2, 4, 6], contents(&list));
    }

    #[test]
    fn into_iter_drains_front_to_back() {
        let list: List<u32> = (0..4).collect();
        assert_eq!(vec![0, 1, 2, 3], list.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn long_chain_drops_without_recursing() {
        let list: List<u64> = (0..100_000).collect();
        assert_eq!(Ok(&99_999), list.back());
        drop(list);
    }

    #[derive(Debug, Clone)]
    enum Op {
        PushFront(i32),
        PushBack(i32),
        PopFront,
        PopBack,
        Insert(usize, i32),
        Remove(usize),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            any::<i32>().prop_map(Op::PushFront),
            any::<i32>().prop_map(Op::PushBack),
            Just(Op::PopFront),
            Just(Op::PopBack),
            (0usize..16, any::<i32>()).prop_map(|(i, v)| Op::Insert(i, v)),
            (0usize..16).prop_map(Op::Remove),
        ]
    }

    proptest! {
        #[test]
        fn matches_deque_model(ops in proptest::collection::vec(op(), 0..64)) {
            let mut list = List::new();
            let mut model: VecDeque<i32> = VecDeque::new();
            for op in ops {
                match op {
                    Op::PushFront(v) => {
                        list.push_front(v).unwrap();
                        model.push_front(v);
                    }
                    Op::PushBack(v) => {
                        list.push_back(v).unwrap();
                        model.push_back(v);
                    }
                    Op::PopFront => {
                        prop_assert_eq!(model.pop_front().ok_or(Error::EmptyCollection), list.pop_front());
                    }
                    Op::PopBack => {
                        prop_assert_eq!(model.pop_back().ok_or(Error::EmptyCollection), list.pop_back());
                    }
                    Op::Insert(i, v) => {
                        if i <= model.len() {
                            list.insert(i, v).unwrap();
                            model.insert(i, v);
                        } else {
                            prop_assert_eq!(
                                Err(Error::IndexOutOfBounds { index: i, len: model.len() }),
                                list.insert(i, v)
                            );
                        }
                    }
                    Op::Remove(i) => {
                        if i < model.len() {
                            prop_assert_eq!(model.remove(i).ok_or(Error::EmptyCollection), list.remove(i));
                        } else {
                            prop_assert_eq!(
                                Err(Error::IndexOutOfBounds { index: i, len: model.len() }),
                                list.remove(i)
                            );
                        }
                    }
                }
                prop_assert_eq!(model.len(), list.len());
            }
            prop_assert_eq!(model.into_iter().collect::<Vec<_>>(), contents(&list));
        }
    }
}
