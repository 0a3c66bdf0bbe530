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

#[path ="io.rs"] mod io;

use clap::Parser;
use rayon::prelude::*;
use io::write_seq_to_file;
use taskpar::random::Random;

#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Args {
    /// the number of values to generate
    #[clap(value_parser, required=true)]
    n: usize,

    /// the output filename
    #[clap(value_parser, required=true)]
    ofname: String,

    /// the generator seed
    #[clap(short, long, value_parser, required=false, default_value_t=0)]
    seed: u64,
}

fn main() {
    let args = Args::parse();
    let r = Random::new(args.seed);

    // uniform doubles in [0, 1), the distribution the sort drivers expect
    let vals: Vec<f64> = (0..args.n)
        .into_par_iter()
        .map(|i| r.ith_double(i as u64))
        .collect();

    write_seq_to_file("sequenceDouble", &vals, &args.ofname);
}
