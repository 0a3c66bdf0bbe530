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

use std::time::Duration;
use taskpar::Timer;

/// Runs `body` for `rounds` timed rounds after spending at least `warmup`
/// on untimed runs. Prints each round's time and returns the mean.
/// `init` runs before and `end` after every round, outside the timed
/// region.
#[allow(dead_code)]
pub(crate) fn time_loop<I, B, E>(
    name: &str,
    rounds: usize,
    warmup: Duration,
    init: I,
    body: B,
    end: E,
) -> Duration
where
    I: Fn(),
    B: Fn(),
    E: Fn(),
{
    let rounds = rounds.max(1);
    let mut t = Timer::new(name);

    while t.total_time() < warmup {
        init();
        t.start();
        body();
        t.stop();
        end();
    }

    t.reset();
    for _ in 0..rounds {
        init();
        t.start();
        body();
        let d = t.stop();
        t.report(d, "");
        end();
    }
    t.total_time() / rounds as u32
}
