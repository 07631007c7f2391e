// Copyright 2018 Chris Pearce
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::Hash;

use tracing::debug;

use crate::error::{Error, Result};
use crate::fp_growth::{fp_growth, ItemSet};
use crate::item_counter::{count_support, ItemCounter};
use crate::item_index::{IndexEntry, ItemIndex};

/// Position of a node in the tree's arena. Doubles as the node's identity.
pub type NodeId = usize;

const ROOT: NodeId = 0;

#[derive(Debug)]
struct FPNode<T> {
    id: NodeId,
    item: Option<T>,
    count: u32,
    children: BTreeMap<T, NodeId>,
    parent: Option<NodeId>,
    // Where this node's entry lives in the item index's list for `item`.
    slot: usize,
}

impl<T> FPNode<T> {
    fn new(id: NodeId, item: Option<T>, parent: Option<NodeId>, slot: usize) -> FPNode<T> {
        FPNode {
            id,
            item,
            count: 1,
            children: BTreeMap::new(),
            parent,
            slot,
        }
    }

    fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Frequent pattern tree. Built once from a list of transactions, then
/// read-only while itemsets are mined from it.
#[derive(Debug)]
pub struct FPTree<T> {
    nodes: Vec<FPNode<T>>,
    index: ItemIndex<T>,
    num_transactions: u32,
}

impl<T> Default for FPTree<T> {
    fn default() -> FPTree<T> {
        FPTree {
            nodes: vec![FPNode::new(ROOT, None, None, 0)],
            index: ItemIndex::default(),
            num_transactions: 0,
        }
    }
}

/// Sorts a transaction so that the most frequent items come first. Items
/// with equal support are kept in ascending order.
pub fn sort_transaction<T>(transaction: &mut [&T], item_count: &ItemCounter<T>)
where
    T: Ord + Hash + Clone,
{
    transaction.sort_by_key(|&item| (Reverse(item_count.get(item)), item));
}

impl<T> FPTree<T>
where
    T: Ord + Hash + Clone,
{
    pub fn new<'a, S>(transactions: &'a [S]) -> FPTree<T>
    where
        T: 'a,
        &'a S: IntoIterator<Item = &'a T>,
    {
        let item_count = count_support(transactions);
        let mut tree = FPTree::default();
        for transaction in transactions {
            tree.insert(transaction, &item_count);
        }
        debug!(
            transactions = tree.num_transactions,
            nodes = tree.num_nodes(),
            items = item_count.len(),
            "built fptree"
        );
        tree
    }

    fn add_node(&mut self, parent: NodeId, item: &T) -> NodeId {
        let id = self.nodes.len();
        let slot = self.index.push(item, IndexEntry { node: id, support: 1 });
        self.nodes
            .push(FPNode::new(id, Some(item.clone()), Some(parent), slot));
        self.nodes[parent].children.insert(item.clone(), id);
        id
    }

    fn child_of(&self, id: NodeId, item: &T) -> Option<NodeId> {
        self.nodes[id].children.get(item).copied()
    }

    fn insert_child(&mut self, id: NodeId, item: &T) -> NodeId {
        match self.child_of(id, item) {
            Some(child_id) => {
                let child = &mut self.nodes[child_id];
                child.count += 1;
                let slot = child.slot;
                self.index.add_support(item, slot, 1);
                child_id
            }
            None => self.add_node(id, item),
        }
    }

    pub(crate) fn insert<'a, I>(&mut self, transaction: I, item_count: &ItemCounter<T>)
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let mut items: Vec<&T> = transaction.into_iter().collect();
        sort_transaction(&mut items, item_count);
        // Equal items are adjacent once sorted.
        items.dedup();

        self.num_transactions += 1;
        let mut id = ROOT;
        for item in items {
            id = self.insert_child(id, item);
        }
    }

    /// Every itemset occurring in at least `minimum_support` transactions.
    pub fn get_frequent_itemsets(&self, minimum_support: u32) -> Result<Vec<ItemSet<T>>> {
        if minimum_support == 0 {
            return Err(Error::InvalidMinimumSupport(minimum_support));
        }
        let itemsets = fp_growth(self, &self.index, minimum_support, &[]);
        debug!(
            minimum_support,
            itemsets = itemsets.len(),
            "mined frequent itemsets"
        );
        Ok(itemsets)
    }

    /// Number of transactions containing `item`.
    pub fn support_of(&self, item: &T) -> u32 {
        self.index.support_of(item)
    }
}

impl<T> FPTree<T> {
    pub fn num_transactions(&self) -> u32 {
        self.num_transactions
    }

    /// Number of nodes, not counting the root.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.num_nodes() == 0
    }

    pub fn item_index(&self) -> &ItemIndex<T> {
        &self.index
    }

    pub fn item_of(&self, id: NodeId) -> Option<&T> {
        self.nodes[id].item.as_ref()
    }

    pub fn count_of(&self, id: NodeId) -> u32 {
        self.nodes[id].count
    }

    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].parent
    }

    /// Walks from the parent of `id` towards the root, stopping before the
    /// root.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_, T> {
        Ancestors {
            tree: self,
            next: self.nodes[id].parent,
        }
    }

    /// Pre-order traversal of `(item, count)` for every node except the
    /// root, visiting children in ascending item order.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter {
            tree: self,
            stack: Vec::new(),
        };
        iter.push_children(ROOT);
        iter
    }
}

pub struct Ancestors<'a, T> {
    tree: &'a FPTree<T>,
    next: Option<NodeId>,
}

impl<'a, T> Iterator for Ancestors<'a, T> {
    type Item = NodeId;
    fn next(&mut self) -> Option<NodeId> {
        let node = &self.tree.nodes[self.next?];
        if node.is_root() {
            self.next = None;
            return None;
        }
        self.next = node.parent;
        Some(node.id)
    }
}

pub struct Iter<'a, T> {
    tree: &'a FPTree<T>,
    stack: Vec<NodeId>,
}

impl<'a, T> Iter<'a, T> {
    fn push_children(&mut self, id: NodeId) {
        self.stack
            .extend(self.tree.nodes[id].children.values().rev().copied());
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (&'a T, u32);
    fn next(&mut self) -> Option<(&'a T, u32)> {
        while let Some(id) = self.stack.pop() {
            self.push_children(id);
            let tree: &'a FPTree<T> = self.tree;
            let node = &tree.nodes[id];
            if let Some(item) = node.item.as_ref() {
                return Some((item, node.count));
            }
        }
        None
    }
}

impl<'a, T> IntoIterator for &'a FPTree<T> {
    type Item = (&'a T, u32);
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for FPTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (item, count) in self.iter() {
            write!(f, "{}:{} ", item, count)?;
        }
        Ok(())
    }
}
