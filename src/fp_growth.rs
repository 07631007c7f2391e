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

use itertools::Itertools;
use std::cmp;
use std::hash::Hash;

use crate::conditional::conditional_base;
use crate::error::{Error, Result};
use crate::fptree::FPTree;
use crate::item_index::ItemIndex;

/// A frequent itemset and the number of transactions it occurs in.
#[derive(Clone, Hash, PartialEq, Eq, Debug)]
pub struct ItemSet<T> {
    pub items: Vec<T>,
    pub count: u32,
}

impl<T: Ord> Ord for ItemSet<T> {
    fn cmp(&self, other: &ItemSet<T>) -> cmp::Ordering {
        self.len()
            .cmp(&other.len())
            .then_with(|| self.items.cmp(&other.items))
            .then_with(|| self.count.cmp(&other.count))
    }
}

impl<T: Ord> PartialOrd for ItemSet<T> {
    fn partial_cmp(&self, other: &ItemSet<T>) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> ItemSet<T> {
    pub fn new(items: Vec<T>, count: u32) -> ItemSet<T> {
        ItemSet {
            items: items.into_iter().sorted().dedup().collect(),
            count,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, item: &T) -> bool {
        self.items.binary_search(item).is_ok()
    }
}

/// Recursively mines every itemset that extends `path` with items from
/// `index` and occurs at least `min_count` times.
///
/// Items are visited in ascending order; each one is emitted, and then its
/// conditional base is mined with the item appended to the path.
pub fn fp_growth<T>(
    fptree: &FPTree<T>,
    index: &ItemIndex<T>,
    min_count: u32,
    path: &[T],
) -> Vec<ItemSet<T>>
where
    T: Ord + Hash + Clone,
{
    let mut itemsets: Vec<ItemSet<T>> = vec![];

    // Items below threshold can't be part of any longer frequent itemset.
    for item in index.items_with_support_at_least(min_count) {
        let mut itemset: Vec<T> = Vec::from(path);
        itemset.push(item.clone());
        itemsets.push(ItemSet::new(itemset.clone(), index.support_of(&item)));

        let conditional = conditional_base(fptree, &item, index, min_count);
        if !conditional.is_empty() {
            itemsets.extend(fp_growth(fptree, &conditional, min_count, &itemset));
        }
    }

    itemsets
}

/// Converts a relative support threshold in (0,1] into the minimum number
/// of transactions an itemset must occur in.
pub fn min_count_for(min_support: f64, num_transactions: u32) -> Result<u32> {
    if !(min_support > 0.0 && min_support <= 1.0) {
        return Err(Error::InvalidThreshold(format!(
            "minimum support must be in range (0,1], got {}",
            min_support
        )));
    }
    let exact = min_support * f64::from(num_transactions);
    let rounded = exact.round();
    // Absorb float noise such as 0.3 * 10 = 3.0000000000000004.
    let count = if (exact - rounded).abs() < 1e-9 {
        rounded
    } else {
        exact.ceil()
    };
    Ok(cmp::max(count as u32, 1))
}
