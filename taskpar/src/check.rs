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

use std::fmt;

/// The first adjacent out-of-order pair found by [`check_sorted`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutOfOrder<T> {
    pub index: usize,
    pub prev: T,
    pub val: T,
}

impl<T: fmt::Display> fmt::Display for OutOfOrder<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "not sorted at index {}: {} < {}",
            self.index, self.val, self.prev
        )
    }
}

/// Single forward scan confirming `inp` is non-decreasing under `less`.
/// This is an acceptance check on a sort's output; it never mutates and is
/// never part of the sort itself.
pub fn check_sorted<T, F>(inp: &[T], less: F) -> Result<(), OutOfOrder<T>>
where
    T: Copy,
    F: Fn(T, T) -> bool,
{
    for i in 1..inp.len() {
        if less(inp[i], inp[i-1]) {
            return Err(OutOfOrder { index: i, prev: inp[i-1], val: inp[i] });
        }
    }
    Ok(())
}
