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

use rayon::prelude::*;

use crate::internal::leaf_sort::leaf_sort;
use crate::internal::merge::merge_into;
use crate::utilities::log2_up;


/// One reduction round: adjacent pairs of sorted runs of width `run` in
/// `src` are merged into `dst`. A run whose partner falls past the end of
/// the array is copied forward unmerged so the buffer parity stays uniform
/// across rounds.
fn merge_round<T, F>(src: &[T], dst: &mut [T], run: usize, less: F)
where
    T: Copy + Send + Sync,
    F: Fn(T, T) -> bool + Clone + Send + Sync,
{
    let n = src.len();
    dst.par_chunks_mut(2 * run).enumerate().for_each(|(i, window)| {
        let lo = i * 2 * run;
        let mid = n.min(lo + run);
        let hi = n.min(lo + 2 * run);
        debug_assert_eq!(hi - lo, window.len());
        if mid == hi {
            window.copy_from_slice(&src[lo..mid]);
        } else {
            merge_into(&src[lo..mid], &src[mid..hi], window, less.clone());
        }
    });
}

/// Flat strategy: cut the input into `workers` contiguous chunks, sort the
/// chunks independently, then merge adjacent runs over log2(chunks)
/// rounds, alternating which of `inp`/`scratch` is source and destination
/// each round. When the final round leaves the result in `scratch` it is
/// copied back, so the sorted run always ends up in `inp`.
pub(crate) fn chunk_sort_<T, F>(
    inp: &mut [T],
    scratch: &mut [T],
    less: F,
    workers: usize
) where
    T: Copy + Send + Sync,
    F: Fn(T, T) -> bool + Clone + Send + Sync,
{
    let n = inp.len();
    debug_assert!(workers > 0 && n > 0);
    let chunk = (n + workers - 1) / workers;
    let chunks = (n + chunk - 1) / chunk;
    // the chunks tile [0, n) exactly; anything else is a partitioning bug
    debug_assert!((chunks - 1) * chunk < n && n <= chunks * chunk);

    inp.par_chunks_mut(chunk).for_each(|c| leaf_sort(c, less.clone()));

    let mut run = chunk;
    let mut src_is_inp = true;
    for _ in 0..log2_up(chunks) {
        if src_is_inp {
            merge_round(inp, scratch, run, less.clone());
        } else {
            merge_round(scratch, inp, run, less.clone());
        }
        src_is_inp = !src_is_inp;
        run *= 2;
    }

    // an odd number of rounds leaves the sorted run in the scratch buffer
    if !src_is_inp {
        inp.par_iter_mut().zip(scratch.par_iter()).for_each(|(d, s)| *d = *s);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_rounds_of_pairwise_merges() {
        let mut a = [5, 1, 8, 2, 7, 3, 6, 4];
        let mut buf = [0; 8];
        chunk_sort_(&mut a, &mut buf, |x: i32, y| x < y, 4);
        assert_eq!(a, [1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn ragged_tail_is_carried_forward() {
        // three chunks of four: the last has no partner in round one
        let mut a = [9, 8, 7, 6, 5, 4, 3, 2, 1, 0, 10];
        let mut buf = [0; 11];
        chunk_sort_(&mut a, &mut buf, |x: i32, y| x < y, 3);
        assert_eq!(a, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn one_worker_needs_no_rounds() {
        let mut a = [3, 1, 2];
        let mut buf = [0; 3];
        chunk_sort_(&mut a, &mut buf, |x: i32, y| x < y, 1);
        assert_eq!(a, [1, 2, 3]);
    }
}
