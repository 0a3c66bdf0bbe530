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

use std::time::{ Instant, Duration };

/// A timer that can be used to time regions of code.
pub struct Timer<'a> {
    elapsed: Duration,
    since: Option<Instant>,
    name: &'a str,
}

impl<'a> Timer<'a> {
    /// prints `d` in seconds
    pub fn report(&self, d: Duration, name: &str) {
        if name.is_empty() {
            println!("{}:\t{:.6}", self.name, d.as_secs_f64());
        } else {
            println!("{}:{}:\t{:.6}", self.name, name, d.as_secs_f64());
        }
    }

    /// Creates a new, stopped timer with the given name.
    pub fn new(name: &'a str) -> Self {
        Timer {
            elapsed: Duration::ZERO,
            since: None,
            name,
        }
    }

    /// Starts the timer.
    pub fn start(&mut self) {
        self.since = Some(Instant::now());
    }

    /// Stops the timer and returns the time since the last `start`.
    pub fn stop(&mut self) -> Duration {
        let d = match self.since.take() {
            Some(t) => t.elapsed(),
            None => Duration::ZERO,
        };
        self.elapsed += d;
        d
    }

    /// Resets and stops the timer.
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
        self.since = None;
    }

    /// Returns the total time the timer was running since the last
    /// `new` or `reset`.
    pub fn total_time(&self) -> Duration {
        match self.since {
            Some(t) => self.elapsed + t.elapsed(),
            None => self.elapsed,
        }
    }

    /// Prints the total time the timer was running since the last
    /// `new` or `reset`.
    pub fn total(&self) {
        self.report(self.total_time(), "total");
    }
}
