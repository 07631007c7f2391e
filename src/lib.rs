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

//! Frequent itemset mining with FP-Growth.
//!
//! ```
//! use fpgrowth::FPTree;
//!
//! let transactions = vec![vec!["bread", "milk"], vec!["bread", "eggs"], vec!["bread", "milk"]];
//! let fptree = FPTree::new(&transactions);
//! let itemsets = fptree.get_frequent_itemsets(2).unwrap();
//! assert_eq!(itemsets.len(), 3);
//! ```

pub mod conditional;
pub mod error;
pub mod fp_growth;
pub mod fptree;
pub mod item;
pub mod item_counter;
pub mod item_index;
pub mod itemizer;
pub mod transaction_reader;

pub use conditional::conditional_base;
pub use error::{Error, Result};
pub use fp_growth::{fp_growth, min_count_for, ItemSet};
pub use fptree::{FPTree, NodeId};
pub use item_counter::{count_support, ItemCounter};
pub use item_index::{IndexEntry, ItemIndex};
