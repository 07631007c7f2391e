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

use std::env;
use std::io;
use std::process;

use argparse::{ArgumentParser, Store, StoreOption};
use fpgrowth::{min_count_for, Error, Result};

pub struct Arguments {
    pub input_file_path: String,
    pub output_itemsets_path: String,
    pub min_support: Option<f64>,
    pub min_count: Option<u32>,
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Threshold {
    Relative(f64),
    Absolute(u32),
}

impl Threshold {
    /// Minimum number of transactions an itemset must appear in.
    pub fn min_count(&self, num_transactions: u32) -> Result<u32> {
        match *self {
            Threshold::Relative(min_support) => min_count_for(min_support, num_transactions),
            Threshold::Absolute(min_count) => Ok(min_count),
        }
    }
}

impl Arguments {
    pub fn threshold(&self) -> Result<Threshold> {
        match (self.min_support, self.min_count) {
            (Some(_), Some(_)) => Err(Error::InvalidThreshold(
                "pass only one of --min-support and --min-count".to_owned(),
            )),
            (None, None) => Err(Error::InvalidThreshold(
                "one of --min-support or --min-count is required".to_owned(),
            )),
            (Some(min_support), None) => {
                if min_support <= 0.0 || min_support > 1.0 {
                    return Err(Error::InvalidThreshold(
                        "minimum itemset support must be in range (0,1]".to_owned(),
                    ));
                }
                Ok(Threshold::Relative(min_support))
            }
            (None, Some(min_count)) => {
                if min_count == 0 {
                    return Err(Error::InvalidMinimumSupport(min_count));
                }
                Ok(Threshold::Absolute(min_count))
            }
        }
    }
}

pub fn parse_args_or_exit() -> (Arguments, Threshold) {
    let mut args: Arguments = Arguments {
        input_file_path: String::new(),
        output_itemsets_path: String::new(),
        min_support: None,
        min_count: None,
    };

    {
        let mut parser = ArgumentParser::new();
        parser.set_description("Frequent itemset mining with FPGrowth.");

        parser
            .refer(&mut args.input_file_path)
            .add_option(
                &["--input"],
                Store,
                "Input dataset in CSV format, one transaction per line.",
            )
            .metavar("file_path")
            .required();

        parser
            .refer(&mut args.output_itemsets_path)
            .add_option(
                &["--output"],
                Store,
                "File path in which to store frequent itemsets. \
                 Format: itemset, support, count.",
            )
            .metavar("file_path")
            .required();

        parser
            .refer(&mut args.min_support)
            .add_option(
                &["--min-support"],
                StoreOption,
                "Minimum itemset support threshold, in range (0,1].",
            )
            .metavar("threshold");

        parser
            .refer(&mut args.min_count)
            .add_option(
                &["--min-count"],
                StoreOption,
                "Minimum number of transactions an itemset must occur in.",
            )
            .metavar("count");

        if env::args().count() == 1 {
            // Nothing useful to do if stderr itself is broken.
            let _ = parser.print_help("Usage:", &mut io::stderr());
            process::exit(1);
        }

        if let Err(code) = parser.parse_args() {
            process::exit(code);
        }
    }

    match args.threshold() {
        Ok(threshold) => (args, threshold),
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    }
}
