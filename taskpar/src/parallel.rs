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

use std::ops::Range;
use num_traits::PrimInt;
use rayon::prelude::*;
use affinity::set_thread_affinity;

pub trait ParallelFor<T, F> {
    fn par_for(&self, f: F, granularity: Option<usize>) where
        T: PrimInt,
        F: Fn(T) + Send + Sync;
}

impl<F> ParallelFor<usize, F> for Range<usize> {
    /// Runs `f` once per index, possibly concurrently, and returns only
    /// after every call has finished.
    #[inline(always)]
    fn par_for(&self, f: F, granularity: Option<usize>) where
        F: Fn(usize) + Send + Sync
    {
        let (start, end) = (self.start, self.end);
        match granularity {
            Some(g) => (start..end)
                .into_par_iter()
                .with_min_len(g)
                .with_max_len(g)
                .for_each(|i| { f(i); }),
            None => (start..end).into_par_iter().for_each(f),
        }
    }
}

/// Runs `f` inside a dedicated rayon pool with `workers` threads.
pub fn with_pool<R, F>(workers: usize, f: F) -> R
where
    R: Send,
    F: FnOnce() -> R + Send,
{
    rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .expect("cannot build worker pool")
        .install(f)
}

pub fn config_rayon() {
    // TODO: find a better way to do this.
    (0..rayon::current_num_threads()).par_bridge().for_each(|_| {
        set_thread_affinity([rayon::current_thread_index().unwrap()]).unwrap();
        std::thread::sleep(std::time::Duration::from_millis(100))
    })
}
