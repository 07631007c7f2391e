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

use fnv::FnvHashMap;
use itertools::Itertools;
use std::hash::Hash;

use crate::fptree::NodeId;

/// One occurrence of an item in an index: the tree node holding it, and the
/// support attributed to that occurrence.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct IndexEntry {
    pub node: NodeId,
    pub support: u32,
}

/// Maps each item to every node that carries it.
#[derive(Clone, Debug)]
pub struct ItemIndex<T> {
    entries: FnvHashMap<T, Vec<IndexEntry>>,
}

impl<T> Default for ItemIndex<T> {
    fn default() -> ItemIndex<T> {
        ItemIndex {
            entries: FnvHashMap::default(),
        }
    }
}

impl<T> ItemIndex<T>
where
    T: Ord + Hash + Clone,
{
    pub fn new() -> ItemIndex<T> {
        ItemIndex::default()
    }

    /// Registers an occurrence of `item`. Returns the entry's position in
    /// that item's list, which stays valid until the item is removed.
    pub fn push(&mut self, item: &T, entry: IndexEntry) -> usize {
        let list = self.entries.entry(item.clone()).or_default();
        list.push(entry);
        list.len() - 1
    }

    pub(crate) fn add_support(&mut self, item: &T, slot: usize, count: u32) {
        if let Some(entry) = self.entries.get_mut(item).and_then(|l| l.get_mut(slot)) {
            entry.support += count;
        }
    }

    pub fn entries_of(&self, item: &T) -> &[IndexEntry] {
        match self.entries.get(item) {
            Some(list) => list,
            None => &[],
        }
    }

    /// Total support of `item` across all of its occurrences.
    pub fn support_of(&self, item: &T) -> u32 {
        self.entries_of(item).iter().map(|e| e.support).sum()
    }

    /// Distinct items whose support is at least `min_count`, ascending.
    pub fn items_with_support_at_least(&self, min_count: u32) -> Vec<T> {
        self.entries
            .iter()
            .filter(|(_, list)| list.iter().map(|e| e.support).sum::<u32>() >= min_count)
            .map(|(item, _)| item.clone())
            .sorted()
            .collect()
    }

    /// Drops every item whose total support is below `min_count`.
    pub fn retain_frequent(&mut self, min_count: u32) {
        self.entries
            .retain(|_, list| list.iter().map(|e| e.support).sum::<u32>() >= min_count);
    }

    pub fn num_items(&self) -> usize {
        self.entries.len()
    }

    pub fn num_entries(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn items(&self) -> impl Iterator<Item = &T> {
        self.entries.keys()
    }
}
