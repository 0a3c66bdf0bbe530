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

use std::fs;
use rayon::prelude::*;

/// Writes a sequence file: a header line naming the element kind followed
/// by one value per line.
#[allow(dead_code)]
pub(crate) fn write_seq_to_file<T, F>(header: &str, s: &[T], of: F)
where
    T: std::string::ToString,
    F: AsRef<std::path::Path>,
{
    let mut lines: Vec<String> = Vec::with_capacity(s.len() + 1);
    lines.push(header.to_string());
    lines.extend(s.iter().map(T::to_string));
    fs::write(of, lines.join("\n")).expect("cannot write to output");
}

/// Reads a sequence file in parallel. Lines that do not parse as `T`,
/// the header included, are dropped; `debug_assert` can inspect the raw
/// lines first.
#[allow(dead_code)]
pub(crate) fn read_file_to_vec<T, P, F>(
    fname: P,
    debug_assert: Option<F>
) -> Vec<T> where
    T: std::str::FromStr + Send,
    <T as std::str::FromStr>::Err : std::fmt::Debug + Send,
    P: AsRef<std::path::Path>,
    F: Fn(&[&str]),
{
    let s = fs::read_to_string(fname)
        .expect("cannot read input file");
    let w: Vec<_> = s.par_split('\n').collect();
    if let Some(check) = debug_assert {
        check(&w);
    }
    w
        .into_par_iter()
        .map(str::parse)
        .filter(Result::is_ok)
        .map(Result::unwrap)
        .collect::<Vec<T>>()
}
