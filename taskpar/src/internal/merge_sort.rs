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

use crate::internal::leaf_sort::leaf_sort;
use crate::internal::merge::merge_into;

/// Fork-join merge sort over `inp`, ping-ponging with the scratch buffer
/// `out`. Ranges at or below `threshold` are leaves and go to the
/// sequential leaf sorter; larger ranges split at the midpoint into two
/// structurally disjoint halves, sort them concurrently, and merge the two
/// child runs into the opposite buffer once both have finished. The
/// threshold is the only spawn governor.
///
/// With `inplace` set the sorted run ends up in `inp`, otherwise in `out`.
pub(crate) fn merge_sort_<T, F>(
    inp: &mut [T],
    out: &mut [T],
    less: F,
    threshold: usize,
    inplace: bool
) where
    T: Copy + Send + Sync,
    F: Fn(T, T) -> bool + Clone + Send,
{
    debug_assert!(threshold > 0);
    let n = inp.len();
    if n <= threshold {
        leaf_sort(inp, less);
        if !inplace { out.copy_from_slice(inp); }
        return;
    }

    let m = n / 2;
    let (l_inp, r_inp) = inp.split_at_mut(m);
    let (l_out, r_out) = out.split_at_mut(m);
    let (less_l, less_r) = (less.clone(), less.clone());
    rayon::join(
        || merge_sort_(l_inp, l_out, less_l, threshold, !inplace),
        || merge_sort_(r_inp, r_out, less_r, threshold, !inplace),
    );

    // both children are done here; their runs are adjacent and sorted
    if inplace {
        merge_into(&out[0..m], &out[m..n], inp, less);
    } else {
        merge_into(&inp[0..m], &inp[m..n], out, less);
    }
}
