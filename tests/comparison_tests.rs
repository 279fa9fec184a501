use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use segdeque::Deque;

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// `[1, 2, 3]` with every element in the front segment.
fn front_heavy() -> Deque<i32> {
    let mut deque = Deque::new();
    deque.push_back(1);
    deque.push_back(2);
    deque.push_back(3);
    deque
}

/// `[1, 2, 3]` with every element in the back segment.
fn back_heavy() -> Deque<i32> {
    let mut deque = Deque::new();
    deque.push_front(3);
    deque.push_front(2);
    deque.push_front(1);
    deque
}

/// `[1, 2, 3]` split across the seam.
fn split() -> Deque<i32> {
    let mut deque = Deque::new();
    deque.push_back(2);
    deque.push_front(1);
    let end = deque.end().position();
    deque.insert(end, 3);
    deque
}

#[test]
fn test_equality_ignores_segment_split() {
    let layouts = [front_heavy(), back_heavy(), split(), Deque::from(vec![1, 2, 3])];

    for a in &layouts {
        for b in &layouts {
            assert_eq!(a, b);
            assert_eq!(hash_of(a), hash_of(b));
        }
        assert_eq!(*a, [1, 2, 3]);
    }
}

#[test]
fn test_lexicographic_ordering() {
    let a: Deque<i32> = [1, 2].into();
    let b: Deque<i32> = [1, 3].into();
    assert!(a < b);
    assert!(!(b < a));
    assert!(a <= b);
    assert!(b > a);
    assert!(b >= a);
    assert!(a != b);
}

#[test]
fn test_shorter_prefix_is_less() {
    let short: Deque<i32> = [1, 2].into();
    let long = front_heavy();
    assert!(short < long);
    assert!(long > short);

    let empty: Deque<i32> = Deque::new();
    assert!(empty < short);
    assert_eq!(empty, Deque::new());
}

#[test]
fn test_ordering_across_different_splits() {
    let mut larger = split();
    *larger.back_mut() = 4;
    assert!(front_heavy() < larger);
    assert!(larger > back_heavy());
    assert_eq!(back_heavy().cmp(&front_heavy()), std::cmp::Ordering::Equal);
}

#[test]
fn test_equal_deques_compare_equal_both_ways() {
    let a = split();
    let b = front_heavy();
    assert!(a <= b);
    assert!(a >= b);
    assert!(!(a < b));
    assert!(!(a > b));
}

#[test]
fn test_clone_is_independent() {
    let original = split();
    let mut copy = original.clone();
    assert_eq!(copy, original);

    copy.push_back(4);
    copy[0] = 100;
    assert_eq!(original, [1, 2, 3]);
    assert_eq!(copy, [100, 2, 3, 4]);
}

#[test]
fn test_clone_of_empty() {
    let empty: Deque<String> = Deque::new();
    let copy = empty.clone();
    assert!(copy.is_empty());
    assert_eq!(copy, empty);
}

#[test]
fn test_clone_from_replaces_contents() {
    let source = split();
    let mut target: Deque<i32> = [9, 9, 9, 9, 9].into();

    target.clone_from(&source);
    assert_eq!(target, source);

    target.push_front(0);
    assert_eq!(source.len(), 3);
    assert_eq!(target, [0, 1, 2, 3]);
}

#[test]
fn test_clone_deep_copies_owned_values() {
    let mut original: Deque<String> = Deque::new();
    original.push_back("left".to_string());
    original.push_front("right".to_string());

    let mut copy = original.clone();
    copy.front_mut().push('!');
    assert_eq!(original, ["right", "left"]);
    assert_eq!(copy, ["right!", "left"]);
}
