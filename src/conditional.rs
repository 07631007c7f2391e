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
use std::hash::Hash;

use crate::fptree::{FPTree, NodeId};
use crate::item_index::{IndexEntry, ItemIndex};

/// Builds the conditional pattern base of `target` from `index`.
///
/// Every ancestor of every occurrence of `target` is credited with the
/// support of that occurrence. Walks that pass through the same tree node
/// accumulate into a single entry; distinct nodes holding the same item
/// remain separate entries. Items whose total support ends up below
/// `min_count` are dropped.
///
/// The returned entries still refer to nodes of `fptree`, so their ancestor
/// chains are the tree's, and the result can itself be projected again.
pub fn conditional_base<T>(
    fptree: &FPTree<T>,
    target: &T,
    index: &ItemIndex<T>,
    min_count: u32,
) -> ItemIndex<T>
where
    T: Ord + Hash + Clone,
{
    let mut conditional = ItemIndex::new();
    let mut slots: FnvHashMap<NodeId, usize> = FnvHashMap::default();

    for target_entry in index.entries_of(target) {
        for ancestor in fptree.ancestors(target_entry.node) {
            let item = match fptree.item_of(ancestor) {
                Some(item) => item,
                None => continue,
            };
            match slots.get(&ancestor) {
                Some(&slot) => conditional.add_support(item, slot, target_entry.support),
                None => {
                    let slot = conditional.push(
                        item,
                        IndexEntry {
                            node: ancestor,
                            support: target_entry.support,
                        },
                    );
                    slots.insert(ancestor, slot);
                }
            }
        }
    }

    conditional.retain_frequent(min_count);
    conditional
}

#[cfg(test)]
mod tests {
    use super::conditional_base;
    use crate::fptree::FPTree;

    fn scenario() -> FPTree<char> {
        FPTree::new(&vec![
            vec!['B', 'C', 'D'],
            vec!['B', 'C', 'D', 'E'],
            vec!['D', 'E'],
            vec!['A', 'B', 'C', 'D'],
            vec!['A', 'B', 'D'],
        ])
    }

    #[test]
    fn test_shared_ancestor_merges() {
        let fptree = scenario();
        // A hangs below D-B-C and below D-B, so both walks pass the same B.
        let base = conditional_base(&fptree, &'A', fptree.item_index(), 1);
        assert_eq!(base.entries_of(&'B').len(), 1);
        assert_eq!(base.support_of(&'B'), 2);
        assert_eq!(base.entries_of(&'D').len(), 1);
        assert_eq!(base.support_of(&'D'), 2);
        assert_eq!(base.support_of(&'C'), 1);
        assert_eq!(base.support_of(&'A'), 0);
        assert_eq!(base.support_of(&'E'), 0);
    }

    #[test]
    fn test_infrequent_items_pruned() {
        let fptree = scenario();
        let base = conditional_base(&fptree, &'A', fptree.item_index(), 2);
        assert_eq!(base.num_items(), 2);
        assert_eq!(base.support_of(&'C'), 0);
        assert_eq!(base.items_with_support_at_least(2), vec!['B', 'D']);

        let base = conditional_base(&fptree, &'A', fptree.item_index(), 3);
        assert!(base.is_empty());
    }

    #[test]
    fn test_reweights_by_target_support() {
        let fptree = scenario();
        // D has support 5 in the tree, but only co-occurs with C three times.
        let base = conditional_base(&fptree, &'C', fptree.item_index(), 1);
        assert_eq!(base.support_of(&'D'), 3);
        assert_eq!(base.support_of(&'B'), 3);
        assert_eq!(base.num_items(), 2);
    }

    #[test]
    fn test_distinct_nodes_with_same_item_stay_separate() {
        let fptree = FPTree::new(&vec![
            vec!['A', 'B', 'Z'],
            vec!['C', 'B', 'Z'],
            vec!['A'],
            vec!['C'],
        ]);
        // Z lies below A-B and below B-C, two different B nodes.
        let base = conditional_base(&fptree, &'Z', fptree.item_index(), 1);
        let b_entries = base.entries_of(&'B');
        assert_eq!(b_entries.len(), 2);
        assert_ne!(b_entries[0].node, b_entries[1].node);
        assert_eq!(base.support_of(&'B'), 2);

        let pruned = conditional_base(&fptree, &'Z', fptree.item_index(), 2);
        assert_eq!(pruned.items_with_support_at_least(1), vec!['B']);

        // Projecting again follows the tree's own parent links.
        let nested = conditional_base(&fptree, &'B', &base, 1);
        assert_eq!(nested.support_of(&'A'), 1);
        assert_eq!(nested.num_items(), 1);
    }

    #[test]
    fn test_absent_target() {
        let fptree = scenario();
        let base = conditional_base(&fptree, &'Q', fptree.item_index(), 1);
        assert!(base.is_empty());
    }
}
