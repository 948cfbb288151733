use bounded_stack::{BoundedArrayStack, BoundedLinkedStack, BoundedStack, StackError};

fn fresh_stack_is_empty<S: BoundedStack<i32>>(s: &S, capacity: usize) {
    assert_eq!(s.len(), 0);
    assert_eq!(s.capacity(), capacity);
    assert!(s.is_empty());
    assert!(!s.is_full());
}

fn capacity_boundary<S: BoundedStack<i32>>(s: &mut S) {
    let capacity = s.capacity();
    for i in 0..capacity as i32 {
        assert!(!s.is_full());
        s.push(i).unwrap();
    }
    assert!(s.is_full());
    assert_eq!(s.push(-1), Err(StackError::Overflow { capacity }));
    assert_eq!(s.len(), capacity);
    for i in (0..capacity as i32).rev() {
        assert_eq!(s.pop(), Ok(i));
    }
    assert!(s.is_empty());
    assert_eq!(s.pop(), Err(StackError::Underflow));
    assert_eq!(s.peek(), Err(StackError::Underflow));
}

fn round_trip_and_peek<S: BoundedStack<i32>>(s: &mut S) {
    s.push(7).unwrap();
    let before = s.len();
    s.push(8).unwrap();
    assert_eq!(s.pop(), Ok(8));
    assert_eq!(s.len(), before);
    assert_eq!(s.peek(), Ok(&7));
    assert_eq!(s.peek(), Ok(&7));
    assert_eq!(s.len(), before);
}

fn clear_releases<S: BoundedStack<i32>>(s: &mut S) {
    s.push(1).unwrap();
    s.clear();
    assert!(s.is_empty());
    assert_eq!(s.capacity(), 0);
    assert!(s.is_full());
    assert_eq!(s.push(2), Err(StackError::Overflow { capacity: 0 }));
}

fn drain(s: &mut dyn BoundedStack<i32>) -> Vec<i32> {
    let mut out = Vec::new();
    while let Ok(v) = s.pop() {
        out.push(v);
    }
    out
}

#[test]
fn array_stack_contract() {
    let mut s = BoundedArrayStack::new(4).unwrap();
    fresh_stack_is_empty(&s, 4);
    capacity_boundary(&mut s);
    round_trip_and_peek(&mut s);
    clear_releases(&mut s);
}

#[test]
fn linked_stack_contract() {
    let mut s = BoundedLinkedStack::new(4).unwrap();
    fresh_stack_is_empty(&s, 4);
    capacity_boundary(&mut s);
    round_trip_and_peek(&mut s);
    clear_releases(&mut s);
}

#[test]
fn invalid_capacity_for_both() {
    assert_eq!(
        BoundedArrayStack::<i32>::new(0).err(),
        Some(StackError::InvalidCapacity { requested: 0 })
    );
    assert_eq!(
        BoundedLinkedStack::<i32>::new(0).err(),
        Some(StackError::InvalidCapacity { requested: 0 })
    );
}

#[test]
fn strategies_agree_through_trait_objects() {
    let mut array = BoundedArrayStack::new(5).unwrap();
    let mut linked = BoundedLinkedStack::new(5).unwrap();
    let stacks: [&mut dyn BoundedStack<i32>; 2] = [&mut array, &mut linked];
    let mut drained = Vec::new();
    for s in stacks {
        for v in [3, 1, 4, 1, 5] {
            s.push(v).unwrap();
        }
        assert_eq!(s.push(9), Err(StackError::Overflow { capacity: 5 }));
        assert_eq!(s.len(), 5);
        drained.push(drain(s));
    }
    assert_eq!(drained[0], vec![5, 1, 4, 1, 3]);
    assert_eq!(drained[0], drained[1]);
}

#[test]
fn copy_then_mutate_keeps_copies_apart() {
    let mut a = BoundedArrayStack::new(3).unwrap();
    let mut la = BoundedLinkedStack::new(3).unwrap();
    for v in [1, 2] {
        a.push(v).unwrap();
        la.push(v).unwrap();
    }
    let b = a.clone();
    let lb = la.clone();
    a.pop().unwrap();
    la.push(3).unwrap();
    assert_eq!(b.iter().copied().collect::<Vec<_>>(), vec![2, 1]);
    assert_eq!(lb.iter().copied().collect::<Vec<_>>(), vec![2, 1]);
}

#[test]
fn move_leaves_released_source() {
    let mut a = BoundedArrayStack::new(3).unwrap();
    let mut la = BoundedLinkedStack::new(3).unwrap();
    for v in [1, 2, 3] {
        a.push(v).unwrap();
        la.push(v).unwrap();
    }
    let mut b = a.take();
    let mut lb = la.take();
    let sources: [&mut dyn BoundedStack<i32>; 2] = [&mut a, &mut la];
    for s in sources {
        assert_eq!(s.len(), 0);
        assert_eq!(s.capacity(), 0);
        assert_eq!(s.push(4), Err(StackError::Overflow { capacity: 0 }));
    }
    assert_eq!(drain(&mut b), vec![3, 2, 1]);
    assert_eq!(drain(&mut lb), vec![3, 2, 1]);
}
