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

use crate::internal::binary_search::binary_search;

const MERGE_BASE: usize = 2000;


/// Two-cursor merge of the adjacent sorted runs `in1` and `in2` into
/// `out`. When the heads are equal the element of `in1` is taken, so the
/// left run's equal elements always precede the right run's. Once one run
/// is exhausted the other's remainder is bulk-copied.
pub(crate) fn seq_merge<T, F>(in1: &[T], in2: &[T], out: &mut [T], less: F)
where
    T: Copy,
    F: Fn(T, T) -> bool,
{
    let (n1, n2) = (in1.len(), in2.len());
    debug_assert_eq!(n1 + n2, out.len());
    let (mut i, mut j) = (0, 0);

    while i < n1 && j < n2 {
        if less(in2[j], in1[i]) {
            out[i+j] = in2[j];
            j += 1;
        } else {
            out[i+j] = in1[i];
            i += 1;
        }
    }
    if i < n1 { out[i+j..].copy_from_slice(&in1[i..]); }
    else if j < n2 { out[i+j..].copy_from_slice(&in2[j..]); }
}

/// Parallel merge: split `in1` at its midpoint, binary-search the matching
/// position in `in2`, and recurse on the two disjoint halves of `out`.
/// Elements of `in2` equal to the pivot stay on the right of the split, so
/// the left-favored tie-break of `seq_merge` holds for the whole output.
pub(crate) fn merge_into<T, F>(in1: &[T], in2: &[T], out: &mut [T], less: F)
where
    T: Copy + Send + Sync,
    F: Fn(T, T) -> bool + Clone + Send,
{
    let (n1, n2) = (in1.len(), in2.len());
    debug_assert_eq!(n1 + n2, out.len());

    if n1 + n2 < MERGE_BASE {
        seq_merge(in1, in2, out, less);
    }
    else if n1 == 0 {
        out.par_iter_mut().zip(in2.par_iter()).for_each(|(o, i)| *o = *i); }
    else if n2 == 0 {
        out.par_iter_mut().zip(in1.par_iter()).for_each(|(o, i)| *o = *i); }
    else {
        let mut m1 = n1 / 2;
        let m2 = binary_search(in2, in1[m1], less.clone());
        if m2 == 0 { m1 += 1; } // guarantee progress when in2 has no smaller element
        let (l_out, r_out) = out.split_at_mut(m1 + m2);
        let less_clone = less.clone();
        rayon::join(
            || merge_into(&in1[..m1], &in2[..m2], l_out, less_clone),
            || merge_into(&in1[m1..], &in2[m2..], r_out, less),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_way_merge() {
        let (a, b) = ([3, 7, 9], [1, 2, 8]);
        let mut out = [0; 6];
        seq_merge(&a, &b, &mut out, |x, y| x < y);
        assert_eq!(out, [1, 2, 3, 7, 8, 9]);
    }

    #[test]
    fn ties_favor_the_left_run() {
        // compare by the first field; the second tags the source run
        let a = [(2, 'a'), (2, 'b')];
        let b = [(2, 'c'), (3, 'd')];
        let mut out = [(0, '_'); 4];
        seq_merge(&a, &b, &mut out, |x: (i32, char), y| x.0 < y.0);
        assert_eq!(out, [(2, 'a'), (2, 'b'), (2, 'c'), (3, 'd')]);
    }

    #[test]
    fn parallel_merge_matches_sequential() {
        let n = 10_000u64;
        let evens: Vec<u64> = (0..n).map(|i| 2 * i).collect();
        let odds: Vec<u64> = (0..n).map(|i| 2 * i + 1).collect();
        let mut par = vec![0; 2 * n as usize];
        let mut seq = vec![0; 2 * n as usize];
        merge_into(&evens, &odds, &mut par, |a, b| a < b);
        seq_merge(&evens, &odds, &mut seq, |a, b| a < b);
        assert_eq!(par, seq);
    }
}
