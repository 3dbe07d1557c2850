use super::*;

// ============================================================================
// Acquire / release tests
// ============================================================================

#[test]
fn test_sequential_acquire() {
    let mut slots = SlotAllocator::new();
    assert_eq!(slots.acquire(), 0);
    assert_eq!(slots.acquire(), 1);
    assert_eq!(slots.acquire(), 2);
    assert_eq!(slots.len(), 3);
    assert_eq!(slots.capacity(), 3);
}

#[test]
fn test_new_is_empty() {
    let slots = SlotAllocator::new();
    assert!(slots.is_empty());
    assert_eq!(slots.capacity(), 0);
    assert!(!slots.is_live(0));
}

#[test]
fn test_release_and_recycle_lifo() {
    let mut slots = SlotAllocator::new();
    let a = slots.acquire(); // 0
    let _b = slots.acquire(); // 1
    let c = slots.acquire(); // 2
    slots.release(a);
    slots.release(c);

    // Last released is first recycled
    assert_eq!(slots.acquire(), 2);
    assert_eq!(slots.acquire(), 0);
    assert_eq!(slots.acquire(), 3);
    assert_eq!(slots.capacity(), 4);
}

#[test]
fn test_is_live_tracks_state() {
    let mut slots = SlotAllocator::new();
    let a = slots.acquire();
    assert!(slots.is_live(a));
    slots.release(a);
    assert!(!slots.is_live(a));
}

#[test]
fn test_double_release_is_noop() {
    let mut slots = SlotAllocator::new();
    let a = slots.acquire();
    let _b = slots.acquire();
    slots.release(a);
    slots.release(a);

    // Freed once, so it is recycled once
    assert_eq!(slots.acquire(), a);
    assert_eq!(slots.acquire(), 2);
}

#[test]
fn test_release_unknown_index_is_noop() {
    let mut slots = SlotAllocator::new();
    slots.release(7);
    assert!(slots.is_empty());
    assert_eq!(slots.acquire(), 0);
}

// ============================================================================
// release_all tests
// ============================================================================

#[test]
fn test_release_all_keeps_capacity() {
    let mut slots = SlotAllocator::new();
    for _ in 0..5 {
        slots.acquire();
    }
    slots.release_all();

    assert!(slots.is_empty());
    assert_eq!(slots.capacity(), 5);
}

#[test]
fn test_release_all_then_acquire_starts_from_zero() {
    let mut slots = SlotAllocator::new();
    for _ in 0..3 {
        slots.acquire();
    }
    slots.release_all();

    assert_eq!(slots.acquire(), 0);
    assert_eq!(slots.acquire(), 1);
    assert_eq!(slots.acquire(), 2);
    // Table did not grow
    assert_eq!(slots.capacity(), 3);
    assert_eq!(slots.acquire(), 3);
}

#[test]
fn test_release_all_skips_already_free() {
    let mut slots = SlotAllocator::new();
    let a = slots.acquire();
    let _b = slots.acquire();
    slots.release(a);
    slots.release_all();

    assert!(slots.is_empty());
    let mut seen = std::collections::HashSet::new();
    assert!(seen.insert(slots.acquire()));
    assert!(seen.insert(slots.acquire()));
    assert_eq!(slots.capacity(), 2);
}
