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

use std::cmp::Ordering;

const INSERTION_BASE: usize = 48;


/// Simple serial insertion sort
pub(crate) fn insertion_sort<T, F>(inp: &mut [T], less: F)
where
    T: Copy,
    F: Fn(T, T) -> bool,
{
    for i in 1..inp.len() {
        let mut j = i;
        while j > 0 && less(inp[j], inp[j-1]) {
            inp.swap(j, j-1);
            j -= 1;
        }
    }
}

/// Sequential comparison sort for ranges at or below the granularity
/// threshold. Not stable: the order of equal elements across runs is
/// decided by the merge step alone.
pub(crate) fn leaf_sort<T, F>(inp: &mut [T], less: F)
where
    T: Copy,
    F: Fn(T, T) -> bool,
{
    if inp.len() < INSERTION_BASE {
        insertion_sort(inp, less);
    } else {
        inp.sort_unstable_by(|a, b| {
            if less(*a, *b) { Ordering::Less }
            else if less(*b, *a) { Ordering::Greater }
            else { Ordering::Equal }
        });
    }
}
