// ==============================================
// SHARED ACCESS TESTS (integration)
// ==============================================
//
// The caches carry no internal synchronization. Sharing across threads goes
// through an external lock; these tests check that pattern end to end.

use std::sync::Arc;
use std::thread;

use memo_cache::prelude::*;
use parking_lot::Mutex;

fn expensive(n: u64) -> u64 {
    (0..=n).map(|i| i * i).sum()
}

#[test]
fn mutex_wrapped_cache_serves_all_threads() {
    let cache = Arc::new(Mutex::new(MemoCache::<u64, u64, 16>::new()));
    let mut handles = Vec::new();

    for t in 0..4u64 {
        let cache = Arc::clone(&cache);
        handles.push(thread::spawn(move || {
            for i in 0..200u64 {
                let n = (i + t) % 12;
                let v = *cache.lock().find_or_insert_with(n, |&n| expensive(n));
                assert_eq!(v, expensive(n));
            }
        }));
    }
    for h in handles {
        h.join().unwrap();
    }

    let guard = cache.lock();
    assert_eq!(guard.len(), 12);
    guard.check_invariants().unwrap();
}

#[test]
fn each_key_computed_once_under_lock() {
    let cache = Arc::new(Mutex::new(BoundedMemo::<u64, u64>::new(32)));
    let computed = Arc::new(Mutex::new(0usize));
    let mut handles = Vec::new();

    for _ in 0..4 {
        let cache = Arc::clone(&cache);
        let computed = Arc::clone(&computed);
        handles.push(thread::spawn(move || {
            for n in 0..20u64 {
                let mut guard = cache.lock();
                guard.find_or_insert_with(n, |&n| {
                    *computed.lock() += 1;
                    n * 2
                });
            }
        }));
    }
    for h in handles {
        h.join().unwrap();
    }

    // The lookup and the compute happen under one lock acquisition.
    assert_eq!(*computed.lock(), 20);
}

#[test]
fn cache_moves_into_worker_thread() {
    let mut cache = MemoCache::<String, usize, 4>::new();
    cache.insert("main".to_string(), 4);

    let cache = thread::spawn(move || {
        cache.find_or_insert_with("worker".to_string(), |k| k.len());
        cache
    })
    .join()
    .unwrap();

    assert_eq!(cache.find("main"), Some(&4));
    assert_eq!(cache.find("worker"), Some(&6));
}
