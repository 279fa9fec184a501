use segdeque::{Deque, RevCursor};

fn split_deque() -> Deque<i32> {
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
fn test_reverse_cursor_visits_reverse_order() {
    let deque = split_deque();
    let mut cursor = deque.rbegin();
    let mut seen = Vec::new();

    while cursor != deque.rend() {
        seen.push(*cursor.get());
        cursor.move_next();
    }
    assert_eq!(seen, [5, 4, 3, 2, 1, 0]);
}

#[test]
fn test_reverse_cursor_empty_deque() {
    let deque: Deque<i32> = Deque::new();
    assert!(deque.rbegin() == deque.rend());
    assert_eq!(deque.rbegin().until(deque.rend()).count(), 0);
}

#[test]
fn test_reverse_cursor_single_item_in_each_layout() {
    let mut front_only = Deque::new();
    front_only.push_back(7);
    assert_eq!(*front_only.rbegin().get(), 7);
    assert!(front_only.rbegin() + 1 == front_only.rend());

    let mut back_only = Deque::new();
    back_only.push_front(7);
    assert_eq!(*back_only.rbegin().get(), 7);
    assert!(back_only.rbegin() + 1 == back_only.rend());
}

#[test]
fn test_reverse_cursor_random_access() {
    let deque = split_deque();
    let rbegin = deque.rbegin();

    for n in 0..6 {
        assert_eq!(*(rbegin + n).get(), deque[5 - n]);
        assert_eq!(*rbegin.at(n), deque[5 - n]);
    }
    assert!(rbegin + 6 == deque.rend());
    assert_eq!(*(deque.rend() - 1).get(), 0);

    let mut cursor = rbegin;
    cursor += 3;
    assert_eq!(*cursor.get(), 2);
    cursor -= 1;
    assert_eq!(*cursor.get(), 3);
    cursor.offset(2);
    assert_eq!(*cursor.get(), 1);
    assert_eq!(rbegin.distance_to(&cursor), 4);
}

#[test]
fn test_reverse_cursor_ordering_is_reversed() {
    let deque = split_deque();
    let rbegin = deque.rbegin();
    let later = rbegin + 4;

    assert!(rbegin < later);
    assert!(later > rbegin);
    assert!(later.logical_index() < rbegin.logical_index());
    assert!(rbegin <= rbegin);
}

#[test]
fn test_reverse_until_matches_forward_reversed() {
    let deque = split_deque();
    let forward: Vec<_> = deque.iter().copied().collect();
    let mut reverse: Vec<_> = deque.rbegin().until(deque.rend()).copied().collect();
    reverse.reverse();

    assert_eq!(forward, reverse);
    assert_eq!(
        deque.iter().rev().copied().collect::<Vec<_>>(),
        [5, 4, 3, 2, 1, 0]
    );
}

#[test]
fn test_reverse_subrange() {
    let deque = split_deque();
    let part: Vec<_> = (deque.rbegin() + 1)
        .until(deque.rbegin() + 4)
        .copied()
        .collect();
    assert_eq!(part, [4, 3, 2]);
}

#[test]
fn test_forward_and_reverse_conversion() {
    let deque = split_deque();
    let cursor = deque.begin() + 2;
    let reverse = cursor.into_reverse();

    assert_eq!(*reverse.get(), 2);
    assert_eq!(*(reverse + 1).get(), 1);
    assert!(reverse.into_forward() == cursor);
}

#[test]
fn test_null_reverse_cursor_as_assignment_target() {
    let deque = split_deque();
    let mut cursor: RevCursor<'_, i32> = RevCursor::default();
    assert!(cursor.is_null());
    cursor = deque.rbegin();
    assert_eq!(*cursor.get(), 5);
}

#[test]
fn test_reverse_cursor_mut_updates() {
    let mut deque = split_deque();
    let mut cursor = deque.rbegin_mut();
    let mut step = 0;

    while cursor.logical_index() >= 0 {
        *cursor.get_mut() = step;
        step += 1;
        cursor.move_next();
    }
    assert_eq!(deque, [5, 4, 3, 2, 1, 0]);
}

#[test]
fn test_reverse_cursor_mut_insert_and_remove() {
    let mut deque = split_deque();
    {
        let mut cursor = deque.rbegin_mut();
        cursor.advance(2);
        assert_eq!(*cursor.get(), 3);

        // lands logically after 3, so reverse traversal meets it first
        cursor.insert(35);
        assert_eq!(*cursor.get(), 35);
        assert_eq!(*cursor.at(1), 3);

        cursor.advance(1);
        assert_eq!(cursor.remove(), 3);
        assert_eq!(*cursor.get(), 2);

        *cursor.at_mut(2) = -10;
    }
    assert_eq!(deque, [-10, 1, 2, 35, 4, 5]);
}

#[test]
fn test_reverse_cursor_mut_at_rend_inserts_at_front() {
    let mut deque = split_deque();
    {
        let mut cursor = deque.rend_mut();
        cursor.insert(-1);
        assert_eq!(*cursor.get(), -1);
        assert_eq!(cursor.logical_index(), 0);
    }
    assert_eq!(*deque.front(), -1);
    assert_eq!(deque.len(), 7);
}

#[test]
fn test_reverse_cursor_mut_into_forward() {
    let mut deque = split_deque();
    let mut reverse = deque.rbegin_mut();
    reverse.advance(1);
    let mut forward = reverse.into_forward();
    forward.move_next();
    *forward.get_mut() = 50;
    assert_eq!(deque, [0, 1, 2, 3, 4, 50]);
}
