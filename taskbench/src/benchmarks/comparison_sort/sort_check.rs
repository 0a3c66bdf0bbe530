// ============================================================================
// This code is part of Rusty-TaskBench.
// ----------------------------------------------------------------------------
// MIT License
// 
// Copyright (c) 2023-present Javad Abdi, Mark C. Jeffrey
// 
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
// 
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
// 
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.
// ============================================================================

#[path ="../../common/io.rs"] mod io;

use clap::Parser;
use rayon::prelude::*;
use io::read_file_to_vec;
use taskpar::check_sorted;

#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Args {
    /// the sort result's filename
    #[clap(value_parser, required=true)]
    rfname: String,

    /// the input sequence's filename
    #[clap(value_parser, required=true)]
    ifname: String,
}

pub fn check(inp: &mut [f64], out: &[f64]) -> bool {
    if let Err(e) = check_sorted(out, |a, b| a < b) {
        eprintln!("{e}");
        return false;
    }

    if inp.len() != out.len() {
        eprintln!("output has {} values, input has {}.", out.len(), inp.len());
        return false;
    }

    // the result must be a permutation of the input
    inp.par_sort_unstable_by(|a, b| a.partial_cmp(b).unwrap());
    let diff_count = inp.iter().zip(out.iter()).filter(|(a, b)| a != b).count();
    if diff_count != 0 {
        eprintln!("output file has {diff_count} differences.");
        false
    } else { true }
}

fn main() {
    let args = Args::parse();
    let mut inp: Vec<f64> = read_file_to_vec(
        &args.ifname,
        Some(|w: &[&str]| assert_eq!(w[0], "sequenceDouble"))
    );
    let out: Vec<f64> = read_file_to_vec(&args.rfname, Some(|_: &[&str]| {}));
    if check(&mut inp, &out) { println!("OK"); }
    else { eprintln!("ERR"); std::process::exit(1); }
}
