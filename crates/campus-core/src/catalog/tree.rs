//! Unbalanced binary search tree
//!
//! Lookups, insertion and removal cost O(height). No rebalancing is done;
//! `height` and `is_balanced` report the resulting shape.

use std::cmp::Ordering;
use std::collections::VecDeque;

type Link<K, V> = Option<Box<Node<K, V>>>;

#[derive(Debug, Clone)]
struct Node<K, V> {
    key: K,
    value: V,
    left: Link<K, V>,
    right: Link<K, V>,
}

#[derive(Debug, Clone)]
pub struct SearchTree<K, V> {
    root: Link<K, V>,
    len: usize,
}

impl<K, V> Default for SearchTree<K, V> {
    fn default() -> Self {
        Self { root: None, len: 0 }
    }
}

impl<K: Ord, V> SearchTree<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new key. Returns false, leaving the tree unchanged, if the
    /// key is already present.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        let inserted = Self::insert_at(&mut self.root, key, value);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    fn insert_at(link: &mut Link<K, V>, key: K, value: V) -> bool {
        match link {
            None => {
                *link = Some(Box::new(Node {
                    key,
                    value,
                    left: None,
                    right: None,
                }));
                true
            }
            Some(node) => match key.cmp(&node.key) {
                Ordering::Less => Self::insert_at(&mut node.left, key, value),
                Ordering::Greater => Self::insert_at(&mut node.right, key, value),
                Ordering::Equal => false,
            },
        }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(&node.value),
            };
        }
        None
    }

    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Remove a key, returning its value. A node with two children is
    /// replaced by its in-order successor.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let removed = Self::remove_at(&mut self.root, key);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    fn remove_at(link: &mut Link<K, V>, key: &K) -> Option<V> {
        let node = link.as_mut()?;
        match key.cmp(&node.key) {
            Ordering::Less => Self::remove_at(&mut node.left, key),
            Ordering::Greater => Self::remove_at(&mut node.right, key),
            Ordering::Equal => {
                let mut removed = link.take()?;
                *link = match (removed.left.take(), removed.right.take()) {
                    (None, None) => None,
                    (Some(child), None) | (None, Some(child)) => Some(child),
                    (Some(left), Some(right)) => {
                        let (mut successor, rest) = Self::take_min(right);
                        successor.left = Some(left);
                        successor.right = rest;
                        Some(successor)
                    }
                };
                Some(removed.value)
            }
        }
    }

    /// Detach the minimum node of a subtree, returning it and what remains
    fn take_min(mut node: Box<Node<K, V>>) -> (Box<Node<K, V>>, Link<K, V>) {
        match node.left.take() {
            None => {
                let rest = node.right.take();
                (node, rest)
            }
            Some(left) => {
                let (min, rest) = Self::take_min(left);
                node.left = rest;
                (min, Some(node))
            }
        }
    }

    pub fn min(&self) -> Option<(&K, &V)> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some((&node.key, &node.value))
    }

    pub fn max(&self) -> Option<(&K, &V)> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some((&node.key, &node.value))
    }

    pub fn in_order(&self) -> Vec<(&K, &V)> {
        let mut out = Vec::with_capacity(self.len);
        visit(self.root.as_deref(), Visit::In, &mut out);
        out
    }

    pub fn pre_order(&self) -> Vec<(&K, &V)> {
        let mut out = Vec::with_capacity(self.len);
        visit(self.root.as_deref(), Visit::Pre, &mut out);
        out
    }

    pub fn post_order(&self) -> Vec<(&K, &V)> {
        let mut out = Vec::with_capacity(self.len);
        visit(self.root.as_deref(), Visit::Post, &mut out);
        out
    }

    /// Breadth-first, left to right within each level
    pub fn level_order(&self) -> Vec<(&K, &V)> {
        let mut out = Vec::with_capacity(self.len);
        let mut queue: VecDeque<&Node<K, V>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            out.push((&node.key, &node.value));
            queue.extend(node.left.as_deref());
            queue.extend(node.right.as_deref());
        }
        out
    }

    /// Number of levels; 0 for an empty tree
    pub fn height(&self) -> usize {
        height(self.root.as_deref())
    }

    /// True when every node's subtrees differ in height by at most one
    pub fn is_balanced(&self) -> bool {
        balanced_height(self.root.as_deref()).is_some()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }
}

#[derive(Clone, Copy)]
enum Visit {
    Pre,
    In,
    Post,
}

fn visit<'a, K, V>(node: Option<&'a Node<K, V>>, order: Visit, out: &mut Vec<(&'a K, &'a V)>) {
    let Some(node) = node else {
        return;
    };
    if let Visit::Pre = order {
        out.push((&node.key, &node.value));
    }
    visit(node.left.as_deref(), order, out);
    if let Visit::In = order {
        out.push((&node.key, &node.value));
    }
    visit(node.right.as_deref(), order, out);
    if let Visit::Post = order {
        out.push((&node.key, &node.value));
    }
}

fn height<K, V>(node: Option<&Node<K, V>>) -> usize {
    node.map_or(0, |n| {
        1 + height(n.left.as_deref()).max(height(n.right.as_deref()))
    })
}

/// Height of a balanced subtree, `None` once any node is out of balance
fn balanced_height<K, V>(node: Option<&Node<K, V>>) -> Option<usize> {
    let Some(node) = node else {
        return Some(0);
    };
    let left = balanced_height(node.left.as_deref())?;
    let right = balanced_height(node.right.as_deref())?;
    (left.abs_diff(right) <= 1).then(|| 1 + left.max(right))
}
