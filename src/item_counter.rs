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

/// Number of transactions each distinct item occurs in.
#[derive(Clone, Debug)]
pub struct ItemCounter<T> {
    counter: FnvHashMap<T, u32>,
}

impl<T> Default for ItemCounter<T> {
    fn default() -> ItemCounter<T> {
        ItemCounter {
            counter: FnvHashMap::default(),
        }
    }
}

impl<T> ItemCounter<T>
where
    T: Ord + Hash + Clone,
{
    pub fn new() -> ItemCounter<T> {
        ItemCounter::default()
    }

    pub fn add(&mut self, item: &T, count: u32) {
        match self.counter.get_mut(item) {
            Some(existing) => *existing += count,
            None => {
                self.counter.insert(item.clone(), count);
            }
        }
    }

    pub fn get(&self, item: &T) -> u32 {
        match self.counter.get(item) {
            Some(count) => *count,
            None => 0,
        }
    }

    pub fn len(&self) -> usize {
        self.counter.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counter.is_empty()
    }

    /// Items counted at least `min_count` times, in ascending item order.
    pub fn items_with_count_at_least(&self, min_count: u32) -> Vec<T> {
        self.counter
            .iter()
            .filter(|&(_, &count)| count >= min_count)
            .map(|(item, _)| item.clone())
            .sorted()
            .collect()
    }
}

/// Counts how many transactions contain each item. Repeats of an item
/// inside one transaction are only counted once.
pub fn count_support<'a, T, S>(transactions: &'a [S]) -> ItemCounter<T>
where
    T: 'a + Ord + Hash + Clone,
    &'a S: IntoIterator<Item = &'a T>,
{
    let mut item_count = ItemCounter::new();
    for transaction in transactions {
        for item in transaction.into_iter().unique() {
            item_count.add(item, 1);
        }
    }
    item_count
}

#[cfg(test)]
mod tests {
    use super::count_support;
    use super::ItemCounter;
    use std::collections::BTreeSet;

    #[test]
    fn test_count_support() {
        let transactions = vec![
            vec!["a", "b", "c"],
            vec!["b", "c"],
            vec!["c", "c", "c"],
            vec![],
        ];
        let counter = count_support(&transactions);
        assert_eq!(counter.len(), 3);
        assert_eq!(counter.get(&"a"), 1);
        assert_eq!(counter.get(&"b"), 2);
        assert_eq!(counter.get(&"c"), 3);
        assert_eq!(counter.get(&"z"), 0);
    }

    #[test]
    fn test_count_support_empty() {
        let transactions: Vec<BTreeSet<u32>> = vec![];
        assert!(count_support(&transactions).is_empty());
    }

    #[test]
    fn test_items_with_count_at_least() {
        let mut counter = ItemCounter::new();
        counter.add(&'d', 5);
        counter.add(&'a', 2);
        counter.add(&'b', 4);
        counter.add(&'a', 1);
        assert_eq!(counter.get(&'a'), 3);
        assert_eq!(counter.items_with_count_at_least(1), vec!['a', 'b', 'd']);
        assert_eq!(counter.items_with_count_at_least(4), vec!['b', 'd']);
        assert!(counter.items_with_count_at_least(6).is_empty());
    }
}
