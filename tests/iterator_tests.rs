use segdeque::Deque;

fn mixed() -> Deque<i32> {
    // push_back on an empty back segment keeps filling the front segment;
    // inserting at the end is what first populates the back segment
    let mut deque = Deque::new();
    deque.push_back(1);
    deque.push_back(2);
    deque.push_front(0);
    let end = deque.end().position();
    deque.insert(end, 3);
    deque.push_back(4);
    deque.push_back(5);
    deque
}

#[test]
fn test_iterator_matches_indexing() {
    let deque = mixed();
    let by_index: Vec<_> = (0..deque.len()).map(|i| deque[i]).collect();
    let by_iter: Vec<_> = deque.iter().copied().collect();

    assert_eq!(by_iter, by_index);
    assert_eq!(by_iter, [0, 1, 2, 3, 4, 5]);
}

#[test]
fn test_cursor_walk_matches_indexing() {
    let deque = mixed();
    let mut cursor = deque.begin();
    let mut index = 0;

    while cursor != deque.end() {
        assert_eq!(cursor.get(), &deque[index]);
        cursor.move_next();
        index += 1;
    }
    assert_eq!(index, deque.len());
}

#[test]
fn test_iterator_empty_deque() {
    let deque: Deque<i32> = Deque::new();
    assert_eq!(deque.iter().count(), 0);
    assert_eq!(deque.iter().next_back(), None);
}

#[test]
fn test_for_loop_over_reference() {
    let deque = mixed();
    let mut sum = 0;
    for value in &deque {
        sum += value;
    }
    assert_eq!(sum, 15);
}

#[test]
fn test_iterator_size_hint() {
    let deque = mixed();
    let mut iter = deque.iter();
    assert_eq!(iter.size_hint(), (6, Some(6)));

    iter.next();
    assert_eq!(iter.len(), 5);

    iter.next_back();
    assert_eq!(iter.len(), 4);
}

#[test]
fn test_iterator_double_ended_meets_in_middle() {
    let deque = mixed();
    let mut iter = deque.iter();

    assert_eq!(iter.next(), Some(&0));
    assert_eq!(iter.next_back(), Some(&5));
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next_back(), Some(&4));
    assert_eq!(iter.next(), Some(&2));
    assert_eq!(iter.next_back(), Some(&3));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);
}

#[test]
fn test_iterator_nth_jumps_across_seam() {
    let deque = mixed();
    let mut iter = deque.iter();

    assert_eq!(iter.nth(3), Some(&3));
    assert_eq!(iter.next(), Some(&4));
    assert_eq!(iter.nth(5), None);
    assert_eq!(iter.next(), None);
}

#[test]
fn test_iterator_clone_is_independent() {
    let deque = mixed();
    let mut iter = deque.iter();
    iter.next();

    let copy = iter.clone();
    iter.next();
    assert_eq!(copy.len(), 5);
    assert_eq!(iter.len(), 4);
}

#[test]
fn test_iter_mut_updates_both_segments() {
    let mut deque = mixed();
    for value in deque.iter_mut() {
        *value *= 10;
    }
    assert_eq!(deque, [0, 10, 20, 30, 40, 50]);

    for value in &mut deque {
        *value += 1;
    }
    assert_eq!(deque.iter_mut().len(), 6);
    assert_eq!(deque.iter_mut().next_back().copied(), Some(51));
    assert_eq!(deque, [1, 11, 21, 31, 41, 51]);
}

#[test]
fn test_into_iter_owned() {
    let deque = mixed();
    let forward: Vec<i32> = deque.clone().into_iter().collect();
    let backward: Vec<i32> = deque.into_iter().rev().collect();

    assert_eq!(forward, [0, 1, 2, 3, 4, 5]);
    assert_eq!(backward, [5, 4, 3, 2, 1, 0]);
}

#[test]
fn test_until_iterates_subrange() {
    let deque = mixed();
    let first = deque.begin() + 1;
    let last = deque.begin() + 4;

    let middle: Vec<_> = first.until(last).copied().collect();
    assert_eq!(middle, [1, 2, 3]);
    assert_eq!(first.until(first).count(), 0);
}

#[test]
fn test_collect_and_extend() {
    let mut deque: Deque<i32> = (1..=3).collect();
    deque.extend([4, 5]);
    deque.extend(&[6, 7]);
    assert_eq!(deque, [1, 2, 3, 4, 5, 6, 7]);

    let mut pushed_back = Deque::new();
    pushed_back.extend(vec![1, 2, 3]);
    pushed_back.push_front(0);
    pushed_back.extend(vec![4]);
    assert_eq!(pushed_back, [0, 1, 2, 3, 4]);

    let back_to_vec: Vec<i32> = pushed_back.into();
    assert_eq!(back_to_vec, vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_debug_lists_logical_order() {
    let deque = mixed();
    assert_eq!(format!("{deque:?}"), "[0, 1, 2, 3, 4, 5]");
    assert_eq!(format!("{:?}", deque.iter()), "[0, 1, 2, 3, 4, 5]");
}
