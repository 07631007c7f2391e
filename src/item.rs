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

use crate::itemizer::Itemizer;
use itertools::Itertools;

/// Interned item. Ids are handed out by an `Itemizer` in the order items
/// are first seen, which is also the order used to break support ties.
#[derive(Copy, Clone, Hash, PartialOrd, PartialEq, Eq, Ord, Debug)]
pub struct Item {
    id: u32,
}

impl Item {
    pub fn with_id(id: u32) -> Item {
        Item { id }
    }

    pub fn as_index(&self) -> usize {
        self.id as usize
    }

    pub fn item_vec_to_string(items: &[Item], itemizer: &Itemizer) -> String {
        let mut a: Vec<&str> = items.iter().map(|&id| itemizer.str_of(id)).collect();
        ensure_sorted(&mut a);
        a.join(" ")
    }
}

// If all items in the itemset convert to an integer, order by that integer,
// otherwise order lexicographically.
fn ensure_sorted(a: &mut Vec<&str>) {
    let numbers: Option<Vec<u64>> = a.iter().map(|x| x.parse::<u64>().ok()).collect();
    match numbers {
        Some(numbers) => {
            *a = numbers
                .into_iter()
                .zip(a.iter().cloned())
                .sorted()
                .map(|(_, s)| s)
                .collect();
        }
        None => a.sort(),
    }
}
