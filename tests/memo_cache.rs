// ==============================================
// MEMO CACHE BEHAVIOUR TESTS (integration)
// ==============================================
//
// End-to-end scenarios exercised through the public API only, run against
// both the type-sized and the runtime-sized cache.

use memo_cache::prelude::*;

/// Builds a three-slot cache of each flavour behind the shared traits.
fn three_slot_caches() -> (MemoCache<&'static str, i32, 3>, BoundedMemo<&'static str, i32>) {
    (MemoCache::new(), BoundedMemo::new(3))
}

fn veni_vidi_vici<C: CoreCache<&'static str, i32>>(cache: &mut C) {
    cache.insert("veni", 19);
    cache.insert("vidi", 23);
    cache.insert("vici", 29);

    assert_eq!(cache.find(&"veni"), Some(&19));
    assert_eq!(cache.find(&"vidi"), Some(&23));
    assert_eq!(cache.find(&"vici"), Some(&29));

    // Full: "veni" was inserted first and goes first.
    cache.insert("blah", 42);

    assert_eq!(cache.find(&"veni"), None);
    assert_eq!(cache.find(&"vidi"), Some(&23));
    assert_eq!(cache.find(&"vici"), Some(&29));
    assert_eq!(cache.find(&"blah"), Some(&42));
    assert_eq!(cache.len(), 3);

    cache.insert("bleh", 42);
    cache.insert("bloh", 42);

    assert_eq!(cache.find(&"vidi"), None);
    assert_eq!(cache.find(&"vici"), None);
    assert_eq!(cache.find(&"blah"), Some(&42));
    assert_eq!(cache.find(&"bleh"), Some(&42));
    assert_eq!(cache.find(&"bloh"), Some(&42));
}

fn john_doe<C: CoreCache<&'static str, i32>>(cache: &mut C) {
    cache.insert("John", 17);
    cache.insert("Doe", 19);

    // Same value again: a no-op.
    cache.insert("John", 17);
    assert_eq!(cache.len(), 2);
    assert_eq!(cache.find(&"John"), Some(&17));
    assert_eq!(cache.find(&"Doe"), Some(&19));

    // Update in place; nothing is evicted and the cursor stays put.
    cache.insert("John", 42);
    assert_eq!(cache.find(&"John"), Some(&42));
    assert_eq!(cache.find(&"Doe"), Some(&19));

    cache.insert("Jane", 21);
    assert_eq!(cache.find(&"John"), None);
    assert_eq!(cache.find(&"Doe"), Some(&19));
    assert_eq!(cache.find(&"Jane"), Some(&21));
}

// ==============================================
// Scenarios
// ==============================================

mod scenarios {
    use super::*;

    #[test]
    fn veni_vidi_vici_on_both_caches() {
        let (mut typed, mut bounded) = three_slot_caches();
        veni_vidi_vici(&mut typed);
        veni_vidi_vici(&mut bounded);

        let typed_keys: Vec<_> = typed.iter().map(|(k, _)| *k).collect();
        let bounded_keys: Vec<_> = bounded.iter().map(|(k, _)| *k).collect();
        assert_eq!(typed_keys, vec!["blah", "bleh", "bloh"]);
        assert_eq!(typed_keys, bounded_keys);
    }

    #[test]
    fn john_doe_on_both_caches() {
        let mut typed = MemoCache::<&str, i32, 2>::new();
        let mut bounded = BoundedMemo::new(2);
        john_doe(&mut typed);
        john_doe(&mut bounded);
    }

    #[test]
    fn empty_cache_lookup_misses() {
        let typed = MemoCache::<String, f32, 4>::new();
        let bounded: BoundedMemo<String, f32> = BoundedMemo::new(4);

        assert_eq!(typed.find("hello"), None);
        assert_eq!(bounded.find("hello"), None);
        assert!(!typed.contains("hello"));
    }
}

// ==============================================
// Memoization
// ==============================================

mod memoization {
    use super::*;

    fn collatz_len(mut n: u64) -> u32 {
        let mut steps = 0;
        while n != 1 {
            n = if n % 2 == 0 { n / 2 } else { 3 * n + 1 };
            steps += 1;
        }
        steps
    }

    #[test]
    fn memoized_results_match_direct_calls() {
        let mut cache = MemoCache::<u64, u32, 32>::new();
        let mut computed = 0;

        for round in 0..3 {
            for n in 1..=20u64 {
                let v = *cache.find_or_insert_with(n, |&n| {
                    computed += 1;
                    collatz_len(n)
                });
                assert_eq!(v, collatz_len(n), "round {round}, n {n}");
            }
        }
        // 20 distinct keys fit in 32 slots: each computed exactly once.
        assert_eq!(computed, 20);
    }

    #[test]
    fn cyclic_keys_beyond_capacity_always_recompute() {
        // Strict FIFO: a cycle one longer than capacity never hits.
        let mut cache: BoundedMemo<u64, u64> = BoundedMemo::new(4);
        let mut computed = 0;
        for _ in 0..3 {
            for n in 0..5u64 {
                cache.find_or_insert_with(n, |&n| {
                    computed += 1;
                    n
                });
            }
        }
        assert_eq!(computed, 15);
    }

    #[test]
    fn fallible_compute_is_retried_after_error() {
        let mut cache = MemoCache::<&str, u16, 4>::new();

        let err = cache.try_find_or_insert_with("port", |_| "x".parse::<u16>());
        assert!(err.is_err());
        assert!(cache.is_empty());

        let ok = cache.try_find_or_insert_with("port", |_| "8080".parse::<u16>());
        assert_eq!(ok, Ok(&8080));
        assert_eq!(cache.find(&"port"), Some(&8080));
    }

    #[test]
    fn find_mut_then_find() {
        let mut cache = MemoCache::<u8, Vec<u8>, 2>::new();
        cache.insert(1, vec![]);
        if let Some(v) = cache.find_mut(&1) {
            v.extend([1, 2, 3]);
        }
        assert_eq!(cache.find(&1).map(Vec::len), Some(3));
    }
}

// ==============================================
// Type properties
// ==============================================

mod type_properties {
    use super::*;

    fn assert_send<T: Send>() {}
    fn assert_clone_default<T: Clone + Default>() {}

    #[test]
    fn caches_are_send_clone_default() {
        assert_send::<MemoCache<String, Vec<u8>, 8>>();
        assert_send::<BoundedMemo<String, Vec<u8>>>();
        assert_clone_default::<MemoCache<u32, String, 8>>();
    }

    #[test]
    fn caches_are_reachable_from_crate_root() {
        let mut typed = memo_cache::MemoCache::<u32, String, 4>::new();
        let mut bounded: memo_cache::BoundedMemo<u32, String> =
            memo_cache::MemoBuilder::new(4).build();

        typed.insert(1, "one".into());
        bounded.insert(1, "one".into());
        assert_eq!(typed.size(), 4);
        assert_eq!(bounded.size(), 4);
        assert_eq!(typed.find(&1), bounded.find(&1));
    }

    #[test]
    fn moved_cache_keeps_entries() {
        let mut cache = MemoCache::<u32, String, 4>::new();
        cache.insert(1, "one".into());
        let moved = cache;
        assert_eq!(moved.find(&1).map(String::as_str), Some("one"));
    }

    #[test]
    fn key_needs_only_eq() {
        #[derive(PartialEq, Eq)]
        struct Point {
            x: i32,
            y: i32,
        }

        let mut cache = MemoCache::<Point, f64, 4>::new();
        let d = *cache.find_or_insert_with(Point { x: 3, y: 4 }, |p| {
            f64::from(p.x * p.x + p.y * p.y).sqrt()
        });
        assert_eq!(d, 5.0);
        assert!(cache.contains(&Point { x: 3, y: 4 }));
    }
}
