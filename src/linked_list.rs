//! A singly linked list with an owned chain of nodes hanging off `head`.
//!
//! Values are matched by [`PartialEq`] for [`LinkedList::insert_after`] and
//! [`LinkedList::delete`]; only the first match from the head is affected.

use std::fmt;

use tracing::trace;

type Link<T> = Option<Box<ListNode<T>>>;

pub struct LinkedList<T> {
    head: Link<T>,
    len: usize,
}

#[derive(Debug)]
pub struct ListNode<T> {
    pub value: T,
    next: Link<T>,
}

pub struct Iter<'a, T> {
    next: Option<&'a ListNode<T>>,
}

impl<T> ListNode<T> {
    pub fn next(&self) -> Option<&ListNode<T>> {
        self.next.as_deref()
    }
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        LinkedList { head: None, len: 0 }
    }

    /// First node of the chain, for callers walking the list themselves.
    pub fn head(&self) -> Option<&ListNode<T>> {
        self.head.as_deref()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Makes `value` the new head. O(1).
    pub fn insert_at_beginning(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(ListNode { value, next }));
        self.len += 1;
    }

    /// Appends `value` after the last node. O(n).
    pub fn insert_at_end(&mut self, value: T) {
        let mut cur = &mut self.head;
        while let Some(node) = cur {
            cur = &mut node.next;
        }
        *cur = Some(Box::new(ListNode { value, next: None }));
        self.len += 1;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter { next: self.head() }
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Splices `value` right after the first node equal to `target`.
    ///
    /// Returns `false` and leaves the list untouched when no node matches.
    pub fn insert_after(&mut self, target: &T, value: T) -> bool {
        let mut cur = self.head.as_deref_mut();
        while let Some(node) = cur {
            if node.value == *target {
                let next = node.next.take();
                node.next = Some(Box::new(ListNode { value, next }));
                self.len += 1;
                return true;
            }
            cur = node.next.as_deref_mut();
        }
        trace!("insert target not found");
        false
    }

    /// Unlinks the first node equal to `value`. Returns `false` when there
    /// is no such node.
    pub fn delete(&mut self, value: &T) -> bool {
        if self.head.as_ref().is_some_and(|head| head.value == *value) {
            self.head = self.head.take().and_then(|head| head.next);
            self.len -= 1;
            return true;
        }

        let mut cur = self.head.as_deref_mut();
        while let Some(node) = cur {
            if node.next.as_ref().is_some_and(|next| next.value == *value) {
                node.next = node.next.take().and_then(|removed| removed.next);
                self.len -= 1;
                return true;
            }
            cur = node.next.as_deref_mut();
        }
        trace!("delete target not found");
        false
    }

    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|item| item == value)
    }
}

impl<T: Clone> LinkedList<T> {
    /// Snapshot of the values from head to tail.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        LinkedList::new()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut values: Vec<T> = iter.into_iter().collect();
        let mut list = LinkedList::new();
        while let Some(value) = values.pop() {
            list.insert_at_beginning(value);
        }
        list
    }
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

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(values: &[i32]) -> LinkedList<i32> {
        values.iter().copied().collect()
    }

    #[test]
    fn empty_after_creation() {
        let list = LinkedList::<i32>::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(list.head().is_none());
        assert!(list.to_vec().is_empty());
    }

    #[test]
    fn insert_at_beginning_prepends() {
        let mut list = LinkedList::new();
        list.insert_at_beginning(1);
        list.insert_at_beginning(2);
        assert_eq!(list.to_vec(), vec![2, 1]);
        assert_eq!(list.head().map(|node| node.value), Some(2));
    }

    #[test]
    fn insert_at_end_appends() {
        let mut list = LinkedList::new();
        list.insert_at_end(1);
        list.insert_at_end(2);
        list.insert_at_end(3);
        assert_eq!(list.to_vec(), vec![1, 2, 3]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn head_walk_reaches_tail() {
        let list = list_of(&[4, 5, 6]);
        let mut seen = Vec::new();
        let mut cur = list.head();
        while let Some(node) = cur {
            seen.push(node.value);
            cur = node.next();
        }
        assert_eq!(seen, vec![4, 5, 6]);
    }

    #[test]
    fn insert_after_match() {
        let mut list = list_of(&[1, 2, 3]);
        assert!(list.insert_after(&2, 99));
        assert_eq!(list.to_vec(), vec![1, 2, 99, 3]);
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn insert_after_tail() {
        let mut list = list_of(&[1, 2, 3]);
        assert!(list.insert_after(&3, 4));
        assert_eq!(list.to_vec(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn insert_after_first_of_duplicates() {
        let mut list = list_of(&[7, 1, 7]);
        assert!(list.insert_after(&7, 8));
        assert_eq!(list.to_vec(), vec![7, 8, 1, 7]);
    }

    #[test]
    fn insert_after_missing_target_is_noop() {
        let mut list = list_of(&[1, 2, 3]);
        assert!(!list.insert_after(&42, 99));
        assert_eq!(list.to_vec(), vec![1, 2, 3]);
        assert_eq!(list.len(), 3);

        let mut empty = LinkedList::new();
        assert!(!empty.insert_after(&1, 2));
        assert!(empty.is_empty());
    }

    #[test]
    fn delete_middle() {
        let mut list = list_of(&[1, 2, 3]);
        assert!(list.delete(&2));
        assert_eq!(list.to_vec(), vec![1, 3]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn delete_head_and_tail() {
        let mut list = list_of(&[1, 2, 3]);
        assert!(list.delete(&1));
        assert_eq!(list.head().map(|node| node.value), Some(2));
        assert!(list.delete(&3));
        assert_eq!(list.to_vec(), vec![2]);
        assert!(list.delete(&2));
        assert!(list.is_empty());
    }

    #[test]
    fn delete_removes_first_match_only() {
        let mut list = list_of(&[5, 6, 5]);
        assert!(list.delete(&5));
        assert_eq!(list.to_vec(), vec![6, 5]);
    }

    #[test]
    fn delete_missing_is_noop() {
        let mut list = list_of(&[1, 2, 3]);
        assert!(!list.delete(&4));
        assert_eq!(list.to_vec(), vec![1, 2, 3]);
        assert!(!LinkedList::<i32>::new().delete(&1));
    }

    #[test]
    fn contains_and_debug() {
        let list = list_of(&[1, 2]);
        assert!(list.contains(&2));
        assert!(!list.contains(&3));
        assert_eq!(format!("{list:?}"), "[1, 2]");
    }

    #[test]
    fn drop_long_list() {
        let list: LinkedList<u32> = (0..100_000).collect();
        assert_eq!(list.len(), 100_000);
        drop(list);
    }
}
