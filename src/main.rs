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

mod command_line_args;

use command_line_args::parse_args_or_exit;
use command_line_args::{Arguments, Threshold};

use fpgrowth::item::Item;
use fpgrowth::itemizer::Itemizer;
use fpgrowth::transaction_reader::TransactionReader;
use fpgrowth::{FPTree, Result};

use std::fs::File;
use std::io::{BufWriter, Write};
use std::process;
use std::time::Instant;

use tracing::info;
use tracing_subscriber::EnvFilter;

fn mine_fp_growth(args: &Arguments, threshold: Threshold) -> Result<()> {
    info!("Mining data set: {}", args.input_file_path);

    let start = Instant::now();
    let timer = Instant::now();
    let mut itemizer: Itemizer = Itemizer::new();
    let transactions: Vec<Vec<Item>> =
        TransactionReader::open(&args.input_file_path, &mut itemizer)?.collect::<Result<_>>()?;
    info!(
        "Read {} transactions with {} distinct items in {} ms.",
        transactions.len(),
        itemizer.len(),
        timer.elapsed().as_millis()
    );

    // Count item frequencies, then insert each transaction into the tree
    // sorted by item frequency.
    let timer = Instant::now();
    let fptree = FPTree::new(&transactions);
    drop(transactions);
    info!(
        "Building FPTree with {} nodes took {} ms.",
        fptree.num_nodes(),
        timer.elapsed().as_millis()
    );

    let num_transactions = fptree.num_transactions();
    let min_count = threshold.min_count(num_transactions)?;
    info!("Starting recursive FPGrowth with minimum count {}...", min_count);
    let timer = Instant::now();
    let itemsets = fptree.get_frequent_itemsets(min_count)?;
    info!(
        "FPGrowth generated {} frequent itemsets in {} ms.",
        itemsets.len(),
        timer.elapsed().as_millis()
    );

    {
        let mut output = BufWriter::new(File::create(&args.output_itemsets_path)?);
        writeln!(output, "Itemset,Support,Count")?;
        for itemset in &itemsets {
            writeln!(
                output,
                "{},{},{}",
                Item::item_vec_to_string(&itemset.items, &itemizer),
                f64::from(itemset.count) / f64::from(num_transactions),
                itemset.count
            )?;
        }
        output.flush()?;
    }

    info!("Total runtime: {} ms", start.elapsed().as_millis());

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let (arguments, threshold) = parse_args_or_exit();

    if let Err(err) = mine_fp_growth(&arguments, threshold) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
