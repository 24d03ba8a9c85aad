//! Compares an un-memoized function against a `HashMap` memo and a
//! fixed-capacity `MemoCache` memo on the same random input stream.
//!
//! Run with: cargo run --example memoize --release
//!
//! The hash map never evicts, so it is the best case for timing but its
//! footprint grows with every distinct input. The memo cache holds at most
//! 32 entries: it is at best as fast as the hash map and at worst as slow as
//! not memoizing at all.

use std::collections::HashMap;
use std::mem::size_of;
use std::thread;
use std::time::{Duration, Instant};

use memo_cache::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const CALLS: usize = 100;
const INPUT_RANGE: u32 = 100;

fn some_expensive_calculation(_input: u32) -> f32 {
    thread::sleep(Duration::from_millis(10));
    std::f32::consts::PI
}

struct Process {
    hash_memo: HashMap<u32, f32>,
    fifo_memo: MemoCache<u32, f32, 32>,
}

impl Process {
    fn new() -> Self {
        Self {
            hash_memo: HashMap::new(),
            fifo_memo: MemoCache::new(),
        }
    }

    fn regular_method(&self, input: u32) -> f32 {
        some_expensive_calculation(input)
    }

    fn hash_memoized(&mut self, input: u32) -> f32 {
        *self
            .hash_memo
            .entry(input)
            .or_insert_with(|| some_expensive_calculation(input))
    }

    fn fifo_memoized(&mut self, input: u32) -> f32 {
        *self
            .fifo_memo
            .find_or_insert_with(input, |&input| some_expensive_calculation(input))
    }
}

fn time_calls(inputs: &[u32], mut f: impl FnMut(u32) -> f32) -> Duration {
    let start = Instant::now();
    for &input in inputs {
        let _ = f(input);
    }
    start.elapsed()
}

fn main() {
    let mut rng = SmallRng::seed_from_u64(7);
    let inputs: Vec<u32> = (0..CALLS)
        .map(|_| rng.random_range(0..INPUT_RANGE))
        .collect();

    let mut p = Process::new();

    println!("Running {CALLS} calls per method..");

    let d_regular = time_calls(&inputs, |i| p.regular_method(i));
    let d_hash = time_calls(&inputs, |i| p.hash_memoized(i));
    let d_fifo = time_calls(&inputs, |i| p.fifo_memoized(i));

    println!("Done. Timing results:");
    println!("  Regular:              {} ms", d_regular.as_millis());
    println!("  Memoized (hash):      {} ms", d_hash.as_millis());
    println!("  Memoized (MemoCache): {} ms", d_fifo.as_millis());

    let entry_size = size_of::<u32>() + size_of::<f32>();
    println!("Post-run cache footprint:");
    println!(
        "  Hash:      {} entries, ~{} bytes",
        p.hash_memo.len(),
        p.hash_memo.capacity() * entry_size
    );
    println!(
        "  MemoCache: {} entries, {} bytes",
        p.fifo_memo.len(),
        p.fifo_memo.size() * entry_size
    );
}
