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

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use taskpar::parallel::ParallelFor;
use taskpar::random::Random;
use taskpar::utilities::{hash64, log2_up, write_add, write_add_f64};
use taskpar::Timer;

#[test]
fn par_for_visits_every_index_once() {
    let n = 10_000;
    let hits: Vec<AtomicU64> = (0..n).map(|_| AtomicU64::new(0)).collect();
    (0..n).par_for(|i| { write_add(&hits[i], 1); }, Some(64));
    assert!(hits.iter().all(|h| h.load(Ordering::Relaxed) == 1));
}

#[test]
fn float_accumulator() {
    let acc = AtomicU64::new(0f64.to_bits());
    (0..1000usize).par_for(|_| write_add_f64(&acc, 0.5), None);
    assert_eq!(f64::from_bits(acc.load(Ordering::Relaxed)), 500.0);
}

#[test]
fn log2_up_rounds_upward() {
    assert_eq!(log2_up(1), 0);
    assert_eq!(log2_up(2), 1);
    assert_eq!(log2_up(3), 2);
    assert_eq!(log2_up(4), 2);
    assert_eq!(log2_up(1025), 11);
}

#[test]
fn random_streams_are_deterministic_and_forkable() {
    let r = Random::new(9);
    let again = Random::new(9);
    assert_eq!(r.ith_rand(17), again.ith_rand(17));
    assert_ne!(r.rand(), r.fork(1).rand());
    assert!((0.0..1.0).contains(&r.ith_double(3)));
    assert_eq!(hash64(123), hash64(123));
}

#[test]
fn timer_accumulates_only_while_running() {
    let mut t = Timer::new("test");
    assert_eq!(t.total_time(), Duration::ZERO);
    t.start();
    let d = t.stop();
    assert_eq!(t.total_time(), d);
    t.reset();
    assert_eq!(t.total_time(), Duration::ZERO);
}
