use std::cmp::Ordering;
use std::fmt;

use tracing::trace;

use crate::record::{RaceRecord, RecordField};

/// Unbalanced binary search tree of records ordered by one numeric field.
///
/// A record whose key is smaller than a node's goes left; everything else,
/// equal keys included, goes right. Equal keys therefore come out of an
/// in-order walk in insertion order. There is no rebalancing and no removal
/// of single records: rebuild the tree when the record set changes.
pub struct RankTree {
    root: Option<Box<Node>>,
    key: RecordField,
    len: usize,
}

impl Default for RankTree {
    fn default() -> Self {
        Self::new()
    }
}

impl RankTree {
    /// Creates an empty tree keyed by points.
    pub fn new() -> Self {
        Self::keyed_by(RecordField::Points)
    }

    /// Creates an empty tree keyed by `key`.
    pub fn keyed_by(key: RecordField) -> Self {
        Self {
            root: None,
            key,
            len: 0,
        }
    }

    /// Builds a points-keyed tree by inserting `records` in order.
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a RaceRecord>) -> Self {
        let mut tree = Self::new();
        for record in records {
            tree.insert(record.clone());
        }
        tree
    }

    pub fn key(&self) -> RecordField {
        self.key
    }

    /// Returns the number of records stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` when no records are stored.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes all records from the tree.
    pub fn clear(&mut self) {
        *self = Self::keyed_by(self.key);
    }

    /// Inserts `record`, walking down from the root.
    pub fn insert(&mut self, record: RaceRecord) {
        let field = self.key;
        let key = field.value(&record);
        let mut slot = &mut self.root;
        let mut depth = 0usize;
        while let Some(node) = slot {
            slot = if key.total_cmp(&field.value(&node.record)) == Ordering::Less {
                &mut node.left
            } else {
                &mut node.right
            };
            depth += 1;
        }
        trace!(name = %record.name, key, depth, "inserting into rank tree");
        *slot = Some(Box::new(Node::new(record)));
        self.len += 1;
    }

    /// Creates an iterator that yields records in ascending key order.
    pub fn iter(&self) -> RankTreeIter<'_> {
        RankTreeIter::new(&self.root)
    }

    /// Returns the records in ascending key order.
    pub fn in_order(&self) -> Vec<RaceRecord> {
        self.iter().cloned().collect()
    }

    /// Returns the in-order sequence reversed, highest key first.
    pub fn descending(&self) -> Vec<RaceRecord> {
        let mut ranking = self.in_order();
        ranking.reverse();
        ranking
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending: Vec<(&Node, usize)> =
            self.root.as_deref().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, level)) = pending.pop() {
            deepest = deepest.max(level);
            for child in [node.left.as_deref(), node.right.as_deref()].into_iter().flatten() {
                pending.push((child, level + 1));
            }
        }
        deepest
    }
}

impl fmt::Debug for RankTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RankTree")
            .field("key", &self.key)
            .field("len", &self.len())
            .field("values", &self.in_order())
            .finish()
    }
}

impl Drop for RankTree {
    // Skewed trees are as deep as they are long; unlink iteratively.
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

struct Node {
    record: RaceRecord,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    fn new(record: RaceRecord) -> Self {
        Self {
            record,
            left: None,
            right: None,
        }
    }
}

/// Iterator that yields references in ascending key order.
pub struct RankTreeIter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> RankTreeIter<'a> {
    fn new(root: &'a Option<Box<Node>>) -> Self {
        let mut stack = Vec::new();
        Self::push_left(root.as_deref(), &mut stack);
        Self { stack }
    }

    fn push_left(mut node: Option<&'a Node>, stack: &mut Vec<&'a Node>) {
        while let Some(n) = node {
            stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for RankTreeIter<'a> {
    type Item = &'a RaceRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        Self::push_left(node.right.as_deref(), &mut self.stack);
        Some(&node.record)
    }
}

impl<'a> IntoIterator for &'a RankTree {
    type Item = &'a RaceRecord;
    type IntoIter = RankTreeIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
