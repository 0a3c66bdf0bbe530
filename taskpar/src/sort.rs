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

use std::error::Error;
use std::fmt;

use crate::internal::chunk_sort::chunk_sort_;
use crate::internal::merge_sort::merge_sort_;

/// Tuning knobs for the parallel sorts.
///
/// `threshold` is the granularity cutoff of the fork-join engine: ranges
/// at or below it are sorted sequentially instead of being split further.
/// Too small a value makes scheduling dominate real work, too large leaves
/// workers idle. `workers` is the parallel-degree hint; the flat engine
/// cuts the input into this many chunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortParams {
    pub threshold: usize,
    pub workers: usize,
}

impl Default for SortParams {
    fn default() -> Self {
        Self {
            threshold: 2048,
            workers: rayon::current_num_threads(),
        }
    }
}

impl SortParams {
    pub fn validate(&self) -> Result<(), SortError> {
        if self.threshold == 0 {
            return Err(SortError::InvalidConfiguration(
                "threshold must be positive",
            ));
        }
        if self.workers == 0 {
            return Err(SortError::InvalidConfiguration(
                "workers must be positive",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortError {
    /// a zero threshold or worker count, rejected before any work starts
    InvalidConfiguration(&'static str),
    /// the merge scratch buffer could not be allocated
    AllocationFailure,
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SortError::InvalidConfiguration(why) => {
                write!(f, "invalid configuration: {why}")
            }
            SortError::AllocationFailure => {
                write!(f, "cannot allocate the merge scratch buffer")
            }
        }
    }
}

impl Error for SortError {}

// the caller guarantees `inp` is non-empty
fn scratch_for<T: Copy>(inp: &[T]) -> Result<Vec<T>, SortError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(inp.len())
        .map_err(|_| SortError::AllocationFailure)?;
    buf.resize(inp.len(), inp[0]);
    Ok(buf)
}

/// Sorts `inp` in place with the recursive fork-join engine.
///
/// The result is deterministic for a given input: equal elements of a left
/// run always precede those of the right run, whatever threshold or worker
/// count the sort runs under. Inputs of length 0 or 1 return immediately
/// without allocating.
pub fn parallel_sort<T, F>(
    inp: &mut [T],
    less: F,
    params: &SortParams
) -> Result<(), SortError>
where
    T: Copy + Send + Sync,
    F: Fn(T, T) -> bool + Clone + Send + Sync,
{
    params.validate()?;
    if inp.len() <= 1 { return Ok(()); }

    let mut scratch = scratch_for(inp)?;
    merge_sort_(inp, &mut scratch, less, params.threshold, true);
    Ok(())
}

/// Sorts `inp` in place with the flat engine: `params.workers` contiguous
/// chunks are sorted independently and then merged pairwise over
/// log2(workers) reduction rounds.
pub fn chunk_sort<T, F>(
    inp: &mut [T],
    less: F,
    params: &SortParams
) -> Result<(), SortError>
where
    T: Copy + Send + Sync,
    F: Fn(T, T) -> bool + Clone + Send + Sync,
{
    params.validate()?;
    if inp.len() <= 1 { return Ok(()); }

    let mut scratch = scratch_for(inp)?;
    chunk_sort_(inp, &mut scratch, less, params.workers);
    Ok(())
}
