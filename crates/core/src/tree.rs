//! Ordered tree: an unbalanced binary search tree with one-shot balancing
//!
//! Insertion never rebalances, so the shape of the tree is purely a function
//! of insertion order and sorted input degenerates into a list. That is fine
//! for the index's two-phase lifecycle: keys are bulk-loaded once, then the
//! whole tree is rebuilt at minimum height by [`OrderedTree::into_balanced`]
//! (or [`OrderedTree::balanced_copy`]) and never mutated again.
//!
//! Traversal, height and drop use explicit stacks, so unbalanced trees of any
//! depth are safe. Balanced construction recurses, but only `O(log n)` deep.

use std::cmp::Ordering;
use std::fmt;

type Link<K, V> = Option<Box<Node<K, V>>>;

struct Node<K, V> {
    key: K,
    value: V,
    left: Link<K, V>,
    right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    fn leaf(key: K, value: V) -> Box<Self> {
        Box::new(Node {
            key,
            value,
            left: None,
            right: None,
        })
    }
}

/// A binary search tree mapping unique, totally ordered keys to values.
///
/// # Example
///
/// ```
/// use zdsearch_core::OrderedTree;
///
/// let mut tree = OrderedTree::new();
/// for key in 1..=8 {
///     tree.set(key, key * 10);
/// }
/// assert_eq!(tree.height(), 8);
///
/// let balanced = tree.balanced_copy();
/// assert_eq!(balanced.height(), 4);
/// assert_eq!(balanced.get(&5), Some(&50));
/// ```
pub struct OrderedTree<K, V> {
    root: Link<K, V>,
    len: usize,
}

impl<K, V> Default for OrderedTree<K, V> {
    fn default() -> Self {
        OrderedTree { root: None, len: 0 }
    }
}

impl<K, V> OrderedTree<K, V> {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no entries
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Lazy in-order traversal, yielding entries in ascending key order.
    ///
    /// Each call starts a fresh traversal.
    pub fn inorder(&self) -> Inorder<'_, K, V> {
        let mut iter = Inorder {
            stack: Vec::new(),
            remaining: self.len,
        };
        iter.push_left(self.root.as_deref());
        iter
    }

    /// Maximum number of edges from the root to any absent child slot.
    ///
    /// An empty tree has height 0 and a single node has height 1.
    pub fn height(&self) -> usize {
        let mut max_depth = 0;
        let mut stack = vec![(self.root.as_deref(), 0usize)];
        while let Some((link, depth)) = stack.pop() {
            match link {
                None => max_depth = max_depth.max(depth),
                Some(node) => {
                    stack.push((node.left.as_deref(), depth + 1));
                    stack.push((node.right.as_deref(), depth + 1));
                }
            }
        }
        max_depth
    }

    /// Rebuild at minimum height, moving entries rather than cloning them.
    pub fn into_balanced(mut self) -> Self {
        let entries = self.drain_sorted();
        Self::from_sorted(entries)
    }

    /// Take every entry out in ascending key order, leaving the tree empty.
    fn drain_sorted(&mut self) -> Vec<(K, V)> {
        let mut entries = Vec::with_capacity(self.len);
        let mut stack: Vec<Box<Node<K, V>>> = Vec::new();
        let mut cursor = self.root.take();
        self.len = 0;
        loop {
            while let Some(mut node) = cursor {
                cursor = node.left.take();
                stack.push(node);
            }
            match stack.pop() {
                Some(mut node) => {
                    cursor = node.right.take();
                    let Node { key, value, .. } = *node;
                    entries.push((key, value));
                }
                None => break,
            }
        }
        entries
    }

    /// Build a minimum-height tree from entries already in ascending key order.
    ///
    /// The root of every sub-range is its element at index `len / 2`.
    fn from_sorted(entries: Vec<(K, V)>) -> Self {
        let len = entries.len();
        let mut iter = entries.into_iter();
        let root = build_balanced(len, &mut iter);
        OrderedTree { root, len }
    }
}

fn build_balanced<K, V, I>(len: usize, entries: &mut I) -> Link<K, V>
where
    I: Iterator<Item = (K, V)>,
{
    if len == 0 {
        return None;
    }
    let mid = len / 2;
    let left = build_balanced(mid, entries);
    let (key, value) = entries.next()?;
    let right = build_balanced(len - mid - 1, entries);
    Some(Box::new(Node {
        key,
        value,
        left,
        right,
    }))
}

impl<K: Ord, V> OrderedTree<K, V> {
    /// Insert or overwrite. Returns the previous value for an existing key.
    ///
    /// An existing key keeps its position; only the value is replaced.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        let mut link = &mut self.root;
        loop {
            match link {
                None => {
                    *link = Some(Node::leaf(key, value));
                    self.len += 1;
                    return None;
                }
                Some(node) => match key.cmp(&node.key) {
                    Ordering::Less => link = &mut node.left,
                    Ordering::Greater => link = &mut node.right,
                    Ordering::Equal => return Some(std::mem::replace(&mut node.value, value)),
                },
            }
        }
    }

    /// Look up a key. `None` means absent, never "present but empty".
    pub fn get(&self, key: &K) -> Option<&V> {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            match key.cmp(&node.key) {
                Ordering::Less => cursor = node.left.as_deref(),
                Ordering::Greater => cursor = node.right.as_deref(),
                Ordering::Equal => return Some(&node.value),
            }
        }
        None
    }

    /// Value for `key`, inserting `default()` first if the key is absent.
    ///
    /// Single descent: the returned handle points at the stored value.
    pub fn get_or_insert_with<F>(&mut self, key: K, default: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        let mut link = &mut self.root;
        loop {
            match link {
                None => {
                    self.len += 1;
                    let node = link.insert(Node::leaf(key, default()));
                    return &mut node.value;
                }
                Some(node) => match key.cmp(&node.key) {
                    Ordering::Less => link = &mut node.left,
                    Ordering::Greater => link = &mut node.right,
                    Ordering::Equal => return &mut node.value,
                },
            }
        }
    }

    /// Whether `key` is present
    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }
}

impl<K: Ord + Clone, V: Clone> OrderedTree<K, V> {
    /// A new tree with the same entries, shaped for minimum height.
    pub fn balanced_copy(&self) -> Self {
        let entries: Vec<(K, V)> = self
            .inorder()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        Self::from_sorted(entries)
    }
}

impl<K, V> Drop for OrderedTree<K, V> {
    fn drop(&mut self) {
        // Unlink nodes one at a time; the default recursive drop would follow
        // the full depth of a degenerate tree.
        let mut stack: Vec<Box<Node<K, V>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for OrderedTree<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = OrderedTree::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord, V> Extend<(K, V)> for OrderedTree<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for OrderedTree<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.inorder()).finish()
    }
}

/// In-order iterator over an [`OrderedTree`].
pub struct Inorder<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Inorder<'a, K, V> {
    fn push_left(&mut self, mut cursor: Option<&'a Node<K, V>>) {
        while let Some(node) = cursor {
            self.stack.push(node);
            cursor = node.left.as_deref();
        }
    }
}

impl<'a, K, V> Iterator for Inorder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        self.remaining = self.remaining.saturating_sub(1);
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Inorder<'_, K, V> {}
