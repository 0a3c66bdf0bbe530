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

#![allow(dead_code)]

#[path ="mod.rs"] mod comparison_sort;
#[path ="../../common/io.rs"] mod io;
#[path ="../macros.rs"] mod macros;

use std::cell::RefCell;
use std::time::Duration;
use io::{read_file_to_vec, write_seq_to_file};
use taskpar::SortParams;


define_args!(
    Algs::MSORT,
    (threshold, usize, 2048),
    (workers, usize, 0)
);

define_algs!(
    (MSORT,     "msort"),
    (CSORT,     "csort"),
    (STD,       "std"),
    (RAYON,     "rayon")
);


pub fn run<T, F>(
    alg: Algs,
    rounds: usize,
    params: SortParams,
    less: F,
    inp: &[T]
) -> (Vec<T>, Duration) where
    T: Copy + Send + Sync + Default,
    F: Fn(T, T) -> bool + Copy + Send + Sync,
{
    let f = match alg {
        Algs::MSORT     => comparison_sort::merge_sort::comp_sort,
        Algs::CSORT     => comparison_sort::chunk_sort::comp_sort,
        Algs::STD       => comparison_sort::std::comp_sort,
        Algs::RAYON     => comparison_sort::rayon::comp_sort,
    };

    let r = RefCell::new(vec![T::default(); inp.len()]);

    let mean = time_loop(
        "sort",
        rounds,
        Duration::new(1, 0),
        || { r.borrow_mut().copy_from_slice(inp); },
        || { f(r.borrow_mut().as_mut_slice(), less, &params) },
        || {}
    );

    (r.into_inner(), mean)
}

fn main() {
    init!();

    let args = Args::parse();

    let arr: Vec<f64> = read_file_to_vec(
        &args.ifname,
        Some(|w: &[&str]| { debug_assert_eq!(w[0], "sequenceDouble") })
    );

    let workers = if args.workers == 0 {
        rayon::current_num_threads()
    } else {
        args.workers
    };
    let params = SortParams { threshold: args.threshold, workers };

    let less = |a: f64, b: f64| a < b;

    let (r, d) = taskpar::parallel::with_pool(workers, || run(
        args.algorithm,
        args.rounds,
        params,
        less,
        &arr
    ));

    finalize!(
        args,
        r,
        d,
        write_seq_to_file("sequenceDouble", &r, args.ofname)
    );
}
