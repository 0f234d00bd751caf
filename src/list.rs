//! Singly-linked list over slab storage.
//!
//! Nodes link by slab key rather than pointer. The list tracks the internal
//! head (most recently added element) and a length counter; the internal
//! tail is logical index 0.
//!
//! # Index Invariant
//!
//! Logical index `i` is reached by walking `len - 1 - i` links from the
//! internal head. Every operation below is written against that single
//! equation.
//!
//! # Example
//!
//! ```
//! use singly::SinglyList;
//!
//! let mut list = SinglyList::new();
//! list.add(10);
//! list.add(20);
//! list.add(30);
//!
//! // Oldest element is index 0, newest is len - 1.
//! assert_eq!(list.get(0), Ok(&10));
//! assert_eq!(list.get(2), Ok(&30));
//!
//! assert_eq!(list.remove(1), Ok(20));
//! assert_eq!(list.to_string(), "[10, 30]");
//! ```

use core::fmt;

use slab::Slab;

use crate::OutOfRange;

/// Sentinel key marking the end of the chain.
const NONE: usize = usize::MAX;

/// A node in the chain: one element plus the key of its internal successor.
#[derive(Debug)]
struct Node<T> {
    value: T,
    next: usize,
}

/// A singly-linked list addressed by logical index.
///
/// Index 0 is the oldest surviving element; the most recently added element
/// holds index `len - 1`. Internally the chain runs the other way, newest
/// first, so positional operations walk `len - 1 - index` links from the
/// internal head.
///
/// # Example
///
/// ```
/// use singly::{OutOfRange, SinglyList};
///
/// let mut list = SinglyList::new();
/// list.add("alpha");
/// list.add("beta");
///
/// assert_eq!(list.len(), 2);
/// assert_eq!(list.get(0), Ok(&"alpha"));
/// assert_eq!(list.get(2), Err(OutOfRange { index: 2, len: 2 }));
/// ```
pub struct SinglyList<T> {
    nodes: Slab<Node<T>>,
    head: usize,
    len: usize,
}

impl<T> SinglyList<T> {
    /// Creates an empty list.
    #[inline]
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            head: NONE,
            len: 0,
        }
    }

    /// Creates an empty list with room for `capacity` elements before the
    /// arena reallocates.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            head: NONE,
            len: 0,
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adds a value to the logical end of the list.
    ///
    /// The new node becomes the internal head, so afterwards `get(len - 1)`
    /// returns `value`. Earlier elements keep their indices. O(1), never
    /// fails: the arena grows on demand.
    pub fn add(&mut self, value: T) {
        let key = self.nodes.insert(Node {
            value,
            next: self.head,
        });
        self.head = key;
        self.len += 1;
    }

    /// Returns a reference to the element at logical `index`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<&T, OutOfRange> {
        self.check(index)?;
        let key = self.walk(self.len - 1 - index);
        Ok(&self.nodes[key].value)
    }

    /// Returns a mutable reference to the element at logical `index`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `index >= len`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, OutOfRange> {
        self.check(index)?;
        let key = self.walk(self.len - 1 - index);
        Ok(&mut self.nodes[key].value)
    }

    /// Inserts `value` so that it becomes the element at logical `index`.
    ///
    /// Elements previously at `index` and above shift up by one. `index ==
    /// len` appends at the logical end, same placement as [`add`].
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `index > len`. Nothing is mutated on
    /// failure.
    ///
    /// [`add`]: SinglyList::add
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), OutOfRange> {
        if index > self.len {
            return Err(OutOfRange {
                index,
                len: self.len,
            });
        }

        // Appending at the logical end means a new internal head. This also
        // covers the empty list, where 0 is the only valid index.
        if index == self.len {
            self.add(value);
            return Ok(());
        }

        // The internal predecessor of logical `index` is the node currently
        // holding that index, len - 1 - index links in.
        let pred = self.walk(self.len - 1 - index);
        let next = self.nodes[pred].next;
        let key = self.nodes.insert(Node { value, next });
        self.nodes[pred].next = key;
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the element at logical `index`.
    ///
    /// Elements above `index` shift down by one; the node's arena slot is
    /// freed for reuse.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `index >= len`. Nothing is mutated on
    /// failure.
    pub fn remove(&mut self, index: usize) -> Result<T, OutOfRange> {
        self.check(index)?;

        let key = if index == self.len - 1 {
            // Target is the internal head.
            let key = self.head;
            self.head = self.nodes[key].next;
            key
        } else {
            // Splice around the target via its internal predecessor.
            let pred = self.walk(self.len - 2 - index);
            let key = self.nodes[pred].next;
            self.nodes[pred].next = self.nodes[key].next;
            key
        };

        self.len -= 1;
        Ok(self.nodes.remove(key).value)
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = NONE;
        self.len = 0;
    }

    /// Returns an iterator over the elements in logical order, oldest first.
    ///
    /// The chain runs newest-first, so the iterator buffers the node keys up
    /// front (O(len) memory) and replays them reversed.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut keys = Vec::with_capacity(self.len);
        let mut key = self.head;
        while key != NONE {
            keys.push(key);
            key = self.nodes[key].next;
        }
        keys.reverse();

        Iter {
            nodes: &self.nodes,
            keys: keys.into_iter(),
        }
    }

    /// Walks `steps` links from the internal head and returns the key there.
    ///
    /// Callers guarantee `steps < len`.
    #[inline]
    fn walk(&self, steps: usize) -> usize {
        let mut key = self.head;
        for _ in 0..steps {
            key = self.nodes[key].next;
        }
        key
    }

    /// Bounds check shared by the positional accessors.
    #[inline]
    fn check(&self, index: usize) -> Result<(), OutOfRange> {
        if index >= self.len {
            return Err(OutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(())
    }
}

impl<T: PartialEq> SinglyList<T> {
    /// Returns the logical index of `value`, or `None` if absent.
    ///
    /// The scan runs from the internal head toward the tail and covers every
    /// element, so among duplicates the match nearest the internal head wins:
    /// the **largest** logical index.
    ///
    /// # Example
    ///
    /// ```
    /// use singly::SinglyList;
    ///
    /// let mut list = SinglyList::new();
    /// list.add("a");
    /// list.add("b");
    /// list.add("a");
    ///
    /// assert_eq!(list.index_of(&"a"), Some(2));
    /// assert_eq!(list.index_of(&"b"), Some(1));
    /// assert_eq!(list.index_of(&"c"), None);
    /// ```
    pub fn index_of(&self, value: &T) -> Option<usize> {
        let mut key = self.head;
        let mut offset = 0;
        while key != NONE {
            let node = &self.nodes[key];
            if node.value == *value {
                return Some(self.len - 1 - offset);
            }
            key = node.next;
            offset += 1;
        }
        None
    }
}

impl<T> Default for SinglyList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display> fmt::Display for SinglyList<T> {
    /// Renders `"[e0, e1, ..., en]"` in logical order; `"[]"` when empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

impl<T: fmt::Debug> fmt::Debug for SinglyList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a SinglyList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over list elements in logical order, oldest first.
pub struct Iter<'a, T> {
    nodes: &'a Slab<Node<T>>,
    keys: std::vec::IntoIter<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let key = self.keys.next()?;
        Some(&self.nodes[key].value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let key = self.keys.next_back()?;
        Some(&self.nodes[key].value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}


#[cfg(test)]
mod bench_ops {
    use super::*;
    use hdrhistogram::Histogram;

    #[inline]
    fn rdtscp() -> u64 {
        #[cfg(target_arch = "x86_64")]
        unsafe {
            core::arch::x86_64::__rdtscp(&mut 0)
        }
        #[cfg(not(target_arch = "x86_64"))]
        {
            std::time::Instant::now().elapsed().as_nanos() as u64
        }
    }

    fn print_histogram(name: &str, hist: &Histogram<u64>) {
        println!(
            "{:16} p50: {:5} cycles | p99: {:6} cycles | p999: {:7} cycles | min: {:5} | max: {:7}",
            name,
            hist.value_at_quantile(0.50),
            hist.value_at_quantile(0.99),
            hist.value_at_quantile(0.999),
            hist.min(),
            hist.max(),
        );
    }

    const WARMUP: usize = 10_000;
    const ITERATIONS: usize = 100_000;

    #[test]
    #[ignore]
    fn bench_add() {
        let mut list: SinglyList<u64> = SinglyList::with_capacity(ITERATIONS + WARMUP);
        let mut hist = Histogram::<u64>::new(3).unwrap();

        for i in 0..WARMUP {
            list.add(i as u64);
            let _ = list.remove(list.len() - 1);
        }

        for i in 0..ITERATIONS {
            let start = rdtscp();
            list.add(i as u64);
            let elapsed = rdtscp() - start;
            hist.record(elapsed).unwrap();
            let _ = list.remove(list.len() - 1);
        }

        print_histogram("add", &hist);
    }

    #[test]
    #[ignore]
    fn bench_get_mid() {
        let mut list: SinglyList<u64> = SinglyList::with_capacity(1024);
        let mut hist = Histogram::<u64>::new(3).unwrap();

        for i in 0..1000u64 {
            list.add(i);
        }

        for _ in 0..WARMUP {
            std::hint::black_box(list.get(500).unwrap());
        }

        for _ in 0..ITERATIONS {
            let start = rdtscp();
            std::hint::black_box(list.get(500).unwrap());
            let elapsed = rdtscp() - start;
            hist.record(elapsed).unwrap();
        }

        print_histogram("get(mid)", &hist);
    }
}
