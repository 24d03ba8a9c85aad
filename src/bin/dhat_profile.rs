//! DHAT heap profiler for memo-cache.
//!
//! Run with: cargo run --bin dhat_profile --release --features dhat-heap
//! View results: Open dhat-heap.json in <https://nnethercote.github.io/dh_view/dh_view.html>

#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use std::collections::HashMap;

use memo_cache::builder::MemoBuilder;
use memo_cache::policy::bounded::BoundedMemo;
use memo_cache::policy::memo_cache::MemoCache;
use memo_cache::traits::Memoize;

/// Simple XorShift64 RNG for deterministic workloads.
struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    fn next_f64(&mut self) -> f64 {
        const SCALE: f64 = 1.0 / (u64::MAX as f64);
        (self.next_u64() as f64) * SCALE
    }
}

/// Stand-in for an expensive function with a heap-allocated result.
fn render(key: u64) -> String {
    format!("value-{key:016x}")
}

/// Hotset workload: 90% of accesses hit 10% of keys.
fn hotset_workload<C: Memoize<u64, String>>(
    cache: &mut C,
    operations: usize,
    universe: u64,
    seed: u64,
) {
    let mut rng = XorShift64::new(seed);
    let hot_size = (universe / 10).max(1);

    for _ in 0..operations {
        let key = if rng.next_f64() < 0.9 {
            rng.next_u64() % hot_size
        } else {
            hot_size + (rng.next_u64() % (universe - hot_size))
        };
        let _ = cache.find_or_insert_with(key, |k| render(*k));
    }
}

/// Unbounded key cardinality: every lookup is a new key.
fn unique_key_churn<C: Memoize<u64, String>>(cache: &mut C, operations: usize) {
    for i in 0..operations {
        let _ = cache.find_or_insert_with(i as u64, |k| render(*k));
    }
}

fn report(label: &str, len: usize) {
    let stats = dhat::HeapStats::get();
    println!(
        "  {label}: len={len} curr_bytes={} max_bytes={}",
        stats.curr_bytes, stats.max_bytes
    );
}

fn profile_memo_cache() {
    println!("=== Profiling MemoCache<_, _, 64> ===");
    let mut cache = MemoCache::<u64, String, 64>::new();

    hotset_workload(&mut cache, 100_000, 1_024, 42);
    report("after hotset", cache.len());

    unique_key_churn(&mut cache, 100_000);
    report("after churn", cache.len());
}

fn profile_bounded() {
    println!("=== Profiling BoundedMemo (128 slots) ===");
    let mut cache: BoundedMemo<u64, String> = BoundedMemo::new(128);

    hotset_workload(&mut cache, 100_000, 1_024, 7);
    report("after hotset", cache.len());

    unique_key_churn(&mut cache, 100_000);
    report("after churn", cache.len());
}

fn profile_builder_large() {
    println!("=== Profiling BoundedMemo via builder (1024 slots) ===");
    let mut cache = MemoBuilder::new(1_024)
        .max_capacity(1_024)
        .build::<u64, String>();

    unique_key_churn(&mut cache, 50_000);
    report("after churn", cache.len());
}

fn profile_hashmap_control() {
    println!("=== Profiling unbounded HashMap control ===");
    let mut map: HashMap<u64, String> = HashMap::new();

    for i in 0..100_000u64 {
        map.entry(i).or_insert_with(|| render(i));
    }
    report("after churn", map.len());
}

fn main() {
    let _profiler = dhat::Profiler::new_heap();

    println!("memo-cache DHAT Heap Profiling");
    println!("==============================\n");

    profile_memo_cache();
    profile_bounded();
    profile_builder_large();
    profile_hashmap_control();

    println!("\n==============================");
    println!("Profiling complete!");
    println!(
        "View results: Open dhat-heap.json in <https://nnethercote.github.io/dh_view/dh_view.html>"
    );
}
