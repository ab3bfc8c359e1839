use pacman_search::frontier::PriorityQueue;

#[test]
fn second_push_with_lower_priority_wins() {
    let mut pq = PriorityQueue::new();
    pq.push("x", 5.0);
    pq.push("x", 3.0);
    assert_eq!(pq.len(), 1);
    assert_eq!(pq.priority_of(&"x"), Some(3.0));
    assert_eq!(pq.pop_with_priority(), Some(("x", 3.0)));
    assert!(pq.is_empty());
    assert_eq!(pq.pop(), None);
}

#[test]
fn update_never_raises_a_priority() {
    let mut pq = PriorityQueue::new();
    pq.push("x", 3.0);
    assert!(!pq.update("x", 7.0));
    assert_eq!(pq.priority_of(&"x"), Some(3.0));

    pq.push("y", 4.0);
    assert_eq!(pq.pop(), Some("x"));
    assert_eq!(pq.pop(), Some("y"));
    assert_eq!(pq.pop(), None);
}

#[test]
fn update_inserts_absent_items_and_reorders_present_ones() {
    let mut pq = PriorityQueue::new();
    assert!(pq.update('a', 2.0));
    assert!(pq.update('b', 1.0));
    assert!(pq.update('c', 3.0));
    assert!(pq.update('c', 0.5));
    assert!(pq.contains(&'c'));

    let order: Vec<char> = std::iter::from_fn(|| pq.pop()).collect();
    assert_eq!(order, vec!['c', 'b', 'a']);
}

#[test]
fn popped_items_can_be_queued_again() {
    let mut pq = PriorityQueue::new();
    pq.push(1u32, 1.0);
    assert_eq!(pq.pop(), Some(1));
    assert!(!pq.contains(&1));
    pq.push(1, 9.0);
    assert_eq!(pq.pop_with_priority(), Some((1, 9.0)));
}
