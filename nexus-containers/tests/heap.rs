use nexus_containers::MinHeap;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// =============================================================================
// Fixed scenarios
// =============================================================================

#[test]
fn min_extraction() {
    let mut heap = MinHeap::new();
    for v in [5, 3, 8, 1, 4] {
        heap.push(v);
    }

    assert_eq!(heap.peek(), Some(&1));
    assert_eq!(heap.remove_at(1), Some(1));
    assert_eq!(heap.peek(), Some(&3));
    heap.check_invariants().unwrap();
}

#[test]
fn empty_heap_is_idempotent() {
    let mut heap: MinHeap<i64> = MinHeap::new();

    for _ in 0..3 {
        assert_eq!(heap.peek(), None);
        assert_eq!(heap.remove_at(1), None);
        assert_eq!(heap.pop(), None);
        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);
    }
}

#[test]
fn size_law() {
    let mut heap = MinHeap::new();
    for i in 0..64u32 {
        heap.push(i.wrapping_mul(2_654_435_761) % 97);
    }

    let mut removed = 0;
    while heap.len() > 10 {
        let pos = heap.len() / 3 + 1;
        assert!(heap.remove_at(pos).is_some());
        removed += 1;
        assert_eq!(heap.len(), 64 - removed);
    }
    heap.check_invariants().unwrap();
}

#[test]
fn removal_by_tracked_value() {
    let mut heap: MinHeap<&str> = ["pear", "apple", "fig", "kiwi", "date"]
        .into_iter()
        .collect();

    let pos = heap.position(&"fig").unwrap();
    assert_eq!(heap.remove_at(pos), Some("fig"));
    assert_eq!(heap.position(&"fig"), None);
    heap.check_invariants().unwrap();

    assert_eq!(
        heap.into_sorted_vec(),
        vec!["apple", "date", "kiwi", "pear"]
    );
}

#[test]
fn clear_and_reuse() {
    let mut heap: MinHeap<u8> = (0..10).rev().collect();
    heap.clear();
    assert!(heap.is_empty());

    heap.push(3);
    heap.push(2);
    assert_eq!(heap.pop(), Some(2));
}

// =============================================================================
// Randomized against a sorted model
// =============================================================================

#[test]
fn random_operations_match_model() {
    let mut rng = StdRng::seed_from_u64(0x5eed_4ea9);

    for _ in 0..20 {
        let mut heap = MinHeap::new();
        let mut model: Vec<i32> = Vec::new();

        for _ in 0..500 {
            if model.is_empty() || rng.gen_bool(0.55) {
                let v = rng.gen_range(-50..50);
                heap.push(v);
                model.push(v);
            } else {
                let pos = rng.gen_range(1..=heap.len());
                let removed = heap.remove_at(pos).unwrap();
                let at = model.iter().position(|&m| m == removed).unwrap();
                model.swap_remove(at);
            }

            heap.check_invariants().unwrap();
            assert_eq!(heap.len(), model.len());
            assert_eq!(heap.peek(), model.iter().min());
        }

        model.sort_unstable();
        assert_eq!(heap.into_sorted_vec(), model);
    }
}

#[test]
fn random_invalid_positions_leave_heap_unchanged() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut heap: MinHeap<u16> = (0..32).map(|_| rng.r#gen()).collect();
    let before = heap.as_slice().to_vec();

    assert_eq!(heap.remove_at(0), None);
    assert_eq!(heap.remove_at(33), None);
    assert_eq!(heap.remove_at(usize::MAX), None);
    assert_eq!(heap.as_slice(), &before[..]);
}
