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

use taskpar::parallel::with_pool;
use taskpar::random::Random;
use taskpar::{check_sorted, chunk_sort, parallel_sort, SortError, SortParams};

fn params(threshold: usize, workers: usize) -> SortParams {
    SortParams { threshold, workers }
}

fn random_doubles(n: usize, seed: u64) -> Vec<f64> {
    let r = Random::new(seed);
    (0..n).map(|i| r.ith_double(i as u64)).collect()
}

#[test]
fn empty_and_singleton_are_untouched() {
    let mut empty: Vec<u32> = vec![];
    parallel_sort(&mut empty, |a, b| a < b, &SortParams::default()).unwrap();
    chunk_sort(&mut empty, |a, b| a < b, &SortParams::default()).unwrap();
    assert!(empty.is_empty());

    let mut one = vec![7u32];
    parallel_sort(&mut one, |a, b| a < b, &SortParams::default()).unwrap();
    chunk_sort(&mut one, |a, b| a < b, &SortParams::default()).unwrap();
    assert_eq!(one, vec![7]);
}

#[test]
fn two_elements_take_a_single_merge() {
    let mut v = vec![2u32, 1];
    parallel_sort(&mut v, |a, b| a < b, &params(1, 1)).unwrap();
    assert_eq!(v, vec![1, 2]);
}

#[test]
fn singleton_leaves_end_to_end() {
    // threshold 1 decomposes this into five singleton leaf runs
    let mut v = vec![5, 3, 1, 4, 2];
    parallel_sort(&mut v, |a: i32, b| a < b, &params(1, 4)).unwrap();
    assert_eq!(v, vec![1, 2, 3, 4, 5]);
}

#[test]
fn flat_mode_four_chunks_two_rounds() {
    let mut v = vec![8, 7, 6, 5, 4, 3, 2, 1];
    chunk_sort(&mut v, |a: i32, b| a < b, &params(2, 4)).unwrap();
    assert_eq!(v, vec![1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn sorted_input_is_unchanged() {
    let sorted: Vec<u64> = (0..10_000).collect();
    let mut v = sorted.clone();
    parallel_sort(&mut v, |a, b| a < b, &params(64, 4)).unwrap();
    assert_eq!(v, sorted);
    chunk_sort(&mut v, |a, b| a < b, &params(64, 4)).unwrap();
    assert_eq!(v, sorted);
}

#[test]
fn sorts_a_permutation_of_the_input() {
    let inp = random_doubles(50_000, 42);

    let mut out = inp.clone();
    parallel_sort(&mut out, |a, b| a < b, &SortParams::default()).unwrap();
    assert!(check_sorted(&out, |a, b| a < b).is_ok());

    let mut expected = inp;
    expected.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(out, expected);
}

#[test]
fn output_does_not_depend_on_configuration() {
    let inp = random_doubles(30_000, 7);
    let mut baseline = inp.clone();
    parallel_sort(&mut baseline, |a, b| a < b, &params(1, 1)).unwrap();

    for &threshold in &[1usize, 100, 4096] {
        for &workers in &[1usize, 2, 4, 8] {
            let mut a = inp.clone();
            let mut b = inp.clone();
            with_pool(workers, || {
                let p = params(threshold, workers);
                parallel_sort(&mut a, |x, y| x < y, &p).unwrap();
                chunk_sort(&mut b, |x, y| x < y, &p).unwrap();
            });
            assert_eq!(a, baseline);
            assert_eq!(b, baseline);
        }
    }
}

#[test]
fn zero_threshold_and_zero_workers_are_rejected() {
    let mut v = vec![3u32, 1, 2];
    assert!(matches!(
        parallel_sort(&mut v, |a, b| a < b, &params(0, 4)),
        Err(SortError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        chunk_sort(&mut v, |a, b| a < b, &params(4, 0)),
        Err(SortError::InvalidConfiguration(_))
    ));
    // rejected before any work starts: the input is untouched
    assert_eq!(v, vec![3, 1, 2]);
}

#[test]
fn verifier_reports_the_first_out_of_order_pair() {
    assert!(check_sorted(&[1, 2, 3], |a: i32, b| a < b).is_ok());
    let e = check_sorted(&[1, 5, 4, 0], |a: i32, b| a < b).unwrap_err();
    assert_eq!((e.index, e.prev, e.val), (2, 5, 4));
}

#[test]
fn stress_uniform_doubles() {
    let inp = random_doubles(1_000_000, 1234);
    for &threshold in &[1usize, 100, 100_000] {
        for &workers in &[1usize, 2, 4, 8] {
            let p = params(threshold, workers);

            let mut a = inp.clone();
            parallel_sort(&mut a, |x, y| x < y, &p).unwrap();
            assert!(check_sorted(&a, |x, y| x < y).is_ok());

            let mut b = inp.clone();
            chunk_sort(&mut b, |x, y| x < y, &p).unwrap();
            assert!(check_sorted(&b, |x, y| x < y).is_ok());
        }
    }
}
