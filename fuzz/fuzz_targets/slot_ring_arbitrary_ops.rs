#![no_main]

use libfuzzer_sys::fuzz_target;
use memo_cache::ds::{Placement, SlotRing};

// Fuzz arbitrary operation sequences on SlotRing
//
// Tests random sequences of insert, get, get_mut, get_or_push_with,
// try_get_or_push_with, peek_oldest and clear, validating the ring after each.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let capacity = (data[0] as usize % 50).max(1);
    let mut ring: SlotRing<u32, u32> = SlotRing::new(capacity);

    let mut idx = 1;
    while idx < data.len() {
        if idx + 2 >= data.len() {
            break;
        }

        let op = data[idx] % 7;
        let key = data[idx + 1] as u32;
        let value = data[idx + 2] as u32;

        match op {
            0 => {
                let was_present = ring.contains(&key);
                let was_full = ring.is_full();
                match ring.insert(key, value) {
                    Placement::Updated(_) => assert!(was_present),
                    Placement::Filled => assert!(!was_present && !was_full),
                    Placement::Replaced(old, _) => {
                        assert!(!was_present && was_full);
                        assert!(!ring.contains(&old));
                    }
                }
                assert_eq!(ring.get(&key), Some(&value));
            }
            1 => {
                assert_eq!(ring.get(&key).is_some(), ring.contains(&key));
            }
            2 => {
                if let Some(v) = ring.get_mut(&key) {
                    *v = value;
                }
            }
            3 => {
                let cursor = ring.cursor();
                let present = ring.contains(&key);
                let (_, _) = ring.get_or_push_with(key, |_| value);
                if present {
                    assert_eq!(ring.cursor(), cursor);
                }
                assert!(ring.contains(&key));
            }
            4 => {
                let len = ring.len();
                let present = ring.contains(&key);
                let result: Result<_, ()> = ring.try_get_or_push_with(key, |_| Err(()));
                assert_eq!(result.is_ok(), present);
                assert_eq!(ring.len(), len);
            }
            5 => {
                if let Some((oldest, _)) = ring.peek_oldest() {
                    let oldest = *oldest;
                    assert_eq!(ring.iter().next().map(|(k, _)| *k), Some(oldest));
                }
            }
            6 => {
                if value % 16 == 0 {
                    ring.clear();
                    assert!(ring.is_empty());
                }
            }
            _ => unreachable!(),
        }

        assert!(ring.len() <= ring.capacity());
        assert_eq!(ring.iter().len(), ring.len());
        assert!(ring.check_invariants().is_ok());

        idx += 3;
    }
});
