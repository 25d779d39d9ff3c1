use std::collections::VecDeque;

use nexus_containers::{DoublyLinkedList, Queue, Stack};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// =============================================================================
// DoublyLinkedList
// =============================================================================

#[test]
fn interior_removal_keeps_boundaries() {
    let mut list: DoublyLinkedList<char> = "abcde".chars().collect();

    assert_eq!(list.remove_at(2), Some('c'));
    assert_eq!(list.len(), 4);
    assert_eq!(list.front(), Some(&'a'));
    assert_eq!(list.back(), Some(&'e'));
    assert_eq!(list.iter().collect::<String>(), "abde");
    list.check_invariants().unwrap();
}

#[test]
fn out_of_range_index() {
    let list: DoublyLinkedList<u8> = (0..4).collect();
    assert_eq!(list.get(list.len()), None);
    assert_eq!(list.get(usize::MAX), None);
}

#[test]
fn empty_list_is_idempotent() {
    let mut list: DoublyLinkedList<String> = DoublyLinkedList::new();

    for _ in 0..3 {
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.pop_back(), None);
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_eq!(list.remove_at(0), None);
        assert!(list.is_empty());
        list.check_invariants().unwrap();
    }
}

#[test]
fn owned_payloads_are_moved_out() {
    let mut list = DoublyLinkedList::new();
    list.push_back(String::from("one"));
    list.push_back(String::from("two"));
    list.push_back(String::from("three"));

    let two = list.remove_at(1).unwrap();
    assert_eq!(two, "two");
    assert_eq!(list.remove(&String::from("three")), Some(String::from("three")));
    assert_eq!(list.len(), 1);
    list.check_invariants().unwrap();
}

#[test]
fn random_operations_match_model() {
    let mut rng = StdRng::seed_from_u64(0x11_57);

    for _ in 0..20 {
        let mut list = DoublyLinkedList::new();
        let mut model = VecDeque::new();

        for step in 0..400u32 {
            match rng.gen_range(0..7) {
                0 => {
                    list.push_back(step);
                    model.push_back(step);
                }
                1 => {
                    list.push_front(step);
                    model.push_front(step);
                }
                2 => assert_eq!(list.pop_front(), model.pop_front()),
                3 => assert_eq!(list.pop_back(), model.pop_back()),
                4 => {
                    let idx = rng.gen_range(0..=model.len());
                    assert_eq!(list.remove_at(idx), model.remove(idx));
                }
                5 => {
                    let idx = rng.gen_range(0..=model.len());
                    assert_eq!(list.get(idx), model.get(idx));
                }
                _ => {
                    assert_eq!(list.front(), model.front());
                    assert_eq!(list.back(), model.back());
                }
            }

            list.check_invariants().unwrap();
            assert_eq!(list.len(), model.len());
        }

        assert!(list.iter().eq(model.iter()));
        assert!(list.iter().rev().eq(model.iter().rev()));
        for (i, v) in model.iter().enumerate() {
            assert_eq!(list.get(i), Some(v));
        }
    }
}

// =============================================================================
// Adapters
// =============================================================================

#[test]
fn queue_fifo() {
    let mut queue = Queue::new();
    for v in [1, 2, 3] {
        queue.enqueue(v);
    }

    assert_eq!(queue.dequeue(), Some(1));
    assert_eq!(queue.dequeue(), Some(2));
    assert_eq!(queue.dequeue(), Some(3));
    assert!(queue.is_empty());
    assert_eq!(queue.dequeue(), None);
    assert_eq!(queue.peek(), None);
}

#[test]
fn stack_lifo() {
    let mut stack = Stack::new();
    for v in [1, 2, 3] {
        stack.push(v);
    }

    assert_eq!(stack.pop(), Some(3));
    assert_eq!(stack.pop(), Some(2));
    assert_eq!(stack.pop(), Some(1));
    assert!(stack.is_empty());
    assert_eq!(stack.pop(), None);
    assert_eq!(stack.peek(), None);
}

#[test]
fn queue_random_against_vecdeque() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut queue = Queue::new();
    let mut model = VecDeque::new();

    for i in 0..1000u32 {
        if rng.gen_bool(0.6) {
            queue.enqueue(i);
            model.push_back(i);
        } else {
            assert_eq!(queue.dequeue(), model.pop_front());
        }
        assert_eq!(queue.peek(), model.front());
        assert_eq!(queue.len(), model.len());
    }
    assert!(queue.iter().eq(model.iter()));
}

#[test]
fn stack_random_against_vec() {
    let mut rng = StdRng::seed_from_u64(100);
    let mut stack = Stack::new();
    let mut model = Vec::new();

    for i in 0..1000u32 {
        if rng.gen_bool(0.6) {
            stack.push(i);
            model.push(i);
        } else {
            assert_eq!(stack.pop(), model.pop());
        }
        assert_eq!(stack.peek(), model.last());
        assert_eq!(stack.len(), model.len());
    }
    assert!(stack.iter().eq(model.iter()));
}
