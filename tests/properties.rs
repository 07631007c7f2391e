use fpgrowth::{conditional_base, count_support, FPTree};
use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet, HashSet};

type Transactions = Vec<BTreeSet<u8>>;

fn transactions() -> impl Strategy<Value = Transactions> {
    prop::collection::vec(prop::collection::btree_set(0u8..7, 0..6), 0..24)
}

fn brute_force_support(transactions: &Transactions, itemset: &[u8]) -> u32 {
    transactions
        .iter()
        .filter(|t| itemset.iter().all(|item| t.contains(item)))
        .count() as u32
}

fn brute_force_itemsets(transactions: &Transactions, min_count: u32) -> BTreeMap<Vec<u8>, u32> {
    let universe: Vec<u8> = transactions
        .iter()
        .flatten()
        .cloned()
        .collect::<BTreeSet<u8>>()
        .into_iter()
        .collect();
    let mut itemsets = BTreeMap::new();
    for mask in 1u32..(1 << universe.len()) {
        let itemset: Vec<u8> = universe
            .iter()
            .enumerate()
            .filter(|&(i, _)| mask & (1 << i) != 0)
            .map(|(_, &item)| item)
            .collect();
        let support = brute_force_support(transactions, &itemset);
        if support >= min_count {
            itemsets.insert(itemset, support);
        }
    }
    itemsets
}

fn mined(fptree: &FPTree<u8>, min_count: u32) -> BTreeMap<Vec<u8>, u32> {
    fptree
        .get_frequent_itemsets(min_count)
        .unwrap()
        .into_iter()
        .map(|itemset| (itemset.items, itemset.count))
        .collect()
}

proptest! {
    #[test]
    fn agrees_with_brute_force(transactions in transactions(), min_count in 1u32..5) {
        let fptree = FPTree::new(&transactions);
        let itemsets = fptree.get_frequent_itemsets(min_count).unwrap();
        let distinct: HashSet<&Vec<u8>> = itemsets.iter().map(|i| &i.items).collect();
        prop_assert_eq!(distinct.len(), itemsets.len(), "itemset emitted twice");
        prop_assert_eq!(mined(&fptree, min_count), brute_force_itemsets(&transactions, min_count));
    }

    #[test]
    fn threshold_monotonicity(transactions in transactions(), s1 in 1u32..5, delta in 0u32..4) {
        let fptree = FPTree::new(&transactions);
        let low = mined(&fptree, s1);
        let high = mined(&fptree, s1 + delta);
        for itemset in high.keys() {
            prop_assert!(low.contains_key(itemset), "{:?} missing at lower threshold", itemset);
        }
    }

    #[test]
    fn repeated_queries_are_identical(transactions in transactions(), min_count in 1u32..4) {
        let fptree = FPTree::new(&transactions);
        let first = fptree.get_frequent_itemsets(min_count).unwrap();
        let second = fptree.get_frequent_itemsets(min_count).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn support_is_conserved(transactions in transactions(), min_count in 1u32..4) {
        let fptree = FPTree::new(&transactions);
        let item_count = count_support(&transactions);
        let index = fptree.item_index();
        prop_assert_eq!(index.num_entries(), fptree.num_nodes());
        for item in index.items() {
            prop_assert_eq!(index.support_of(item), item_count.get(item));

            let base = conditional_base(&fptree, item, index, 1);
            let pruned = conditional_base(&fptree, item, index, min_count);
            for other in 0u8..7 {
                let pair = brute_force_support(&transactions, &[*item, other]);
                if other == *item {
                    prop_assert_eq!(base.support_of(&other), 0);
                    continue;
                }
                // Each pair is counted in exactly one of the two bases.
                let total = base.support_of(&other)
                    + conditional_base(&fptree, &other, index, 1).support_of(item);
                prop_assert_eq!(total, pair);
                let expected = if base.support_of(&other) >= min_count {
                    base.support_of(&other)
                } else {
                    0
                };
                prop_assert_eq!(pruned.support_of(&other), expected);
            }
        }
    }

    #[test]
    fn repeated_transactions_share_nodes(transactions in transactions()) {
        let mut doubled = transactions.clone();
        doubled.extend(transactions.iter().cloned());
        let once = FPTree::new(&transactions);
        let twice = FPTree::new(&doubled);
        prop_assert_eq!(once.num_nodes(), twice.num_nodes());
        let counts: Vec<u32> = once.iter().map(|(_, count)| count * 2).collect();
        let doubled_counts: Vec<u32> = twice.iter().map(|(_, count)| count).collect();
        prop_assert_eq!(counts, doubled_counts);
        prop_assert_eq!(twice.num_transactions(), 2 * once.num_transactions());
    }
}

#[test]
fn rejects_zero_minimum_support() {
    let fptree = FPTree::new(&vec![vec![1u8, 2]]);
    assert!(fptree.get_frequent_itemsets(0).is_err());
}
