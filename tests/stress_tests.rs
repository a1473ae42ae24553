//! Stress tests that push the heap with large random workloads
//!
//! Every test seeds its own `StdRng`, so failures reproduce exactly.

use comparator_heap::{BinaryHeap, MaxOrder, MinOrder};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Push many random values and check the drain against an independent sort
#[test]
fn test_random_values_drain_sorted() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut heap = BinaryHeap::new(|a: &u32, b: &u32| a < b);
    let mut expected = Vec::with_capacity(10_000);

    for _ in 0..10_000 {
        let value: u32 = rng.gen();
        heap.push(value);
        expected.push(value);
    }
    expected.sort_unstable();

    for value in &expected {
        assert_eq!(heap.pop(), Some(*value));
    }
    assert!(heap.is_empty());

    // Draining an already empty heap yields nothing
    assert_eq!(heap.drain_sorted().count(), 0);
}

/// Mixed push/pop/remove/update traffic with periodic full invariant checks
#[test]
fn test_mixed_operations() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut heap = BinaryHeap::new(MinOrder);
    let mut model: Vec<u16> = Vec::new();

    for step in 0..20_000 {
        match rng.gen_range(0..10) {
            0..=4 => {
                let value = rng.gen_range(0..2000);
                heap.push(value);
                model.push(value);
            }
            5..=6 => {
                let popped = heap.pop();
                if let Some(value) = popped {
                    let pos = model.iter().position(|&v| v == value).unwrap();
                    assert_eq!(model.iter().min(), Some(&value));
                    model.swap_remove(pos);
                } else {
                    assert!(model.is_empty());
                }
            }
            7..=8 => {
                let value = rng.gen_range(0..2000);
                let removed = heap.remove(&value);
                let pos = model.iter().position(|&v| v == value);
                assert_eq!(removed.is_some(), pos.is_some());
                if let Some(pos) = pos {
                    model.swap_remove(pos);
                }
            }
            _ => {
                let value = rng.gen_range(0..2000);
                assert_eq!(heap.update(value).is_some(), model.contains(&value));
            }
        }

        assert_eq!(heap.len(), model.len());
        if step % 500 == 0 {
            assert!(heap.is_heap(), "heap property broken at step {}", step);
        }
    }

    model.sort_unstable();
    assert_eq!(heap.into_sorted_vec(), model);
}

/// Repeatedly remove from the middle of a large heap
#[test]
fn test_many_removals() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut values: Vec<i64> = (0..3000).map(|_| rng.gen_range(-100_000..100_000)).collect();

    let mut heap = BinaryHeap::from_vec(values.clone(), MaxOrder);
    assert!(heap.is_heap());

    for _ in 0..1500 {
        let idx = rng.gen_range(0..values.len());
        let target = values.swap_remove(idx);
        assert_eq!(heap.remove(&target), Some(target));
    }
    assert!(heap.is_heap());

    values.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(heap.into_sorted_vec(), values);
}

/// Test ascending and descending insertion orders
#[test]
fn test_monotone_insertions() {
    let mut heap = BinaryHeap::min_heap();
    for i in 0..5000 {
        heap.push(i);
    }
    for i in (5000..10_000).rev() {
        heap.push(i);
    }
    assert_eq!(heap.len(), 10_000);

    for i in 0..10_000 {
        assert_eq!(heap.pop(), Some(i));
    }
    assert_eq!(heap.pop(), None);
}

/// Test alternating push and pop keeps the minimum on top
#[test]
fn test_alternating_ops() {
    let mut heap = BinaryHeap::min_heap();

    for i in 0..2000 {
        heap.push(i * 2 + 1);
        heap.push(i * 2);
        assert_eq!(heap.pop(), Some(i));
    }

    assert_eq!(heap.len(), 2000);
    let drained: Vec<i32> = heap.drain_sorted().collect();
    assert_eq!(drained, (2000..4000).collect::<Vec<_>>());
}
