use super::*;

#[test]
fn fifo_order() {
    let mut queue = CommandQueue::new();
    queue.enqueue(b"first").unwrap();
    queue.enqueue(b"second").unwrap();
    queue.enqueue(b"third").unwrap();

    assert_eq!(queue.len(), 3);
    assert_eq!(queue.dequeue().as_deref(), Some(&b"first"[..]));
    assert_eq!(queue.dequeue().as_deref(), Some(&b"second"[..]));
    assert_eq!(queue.dequeue().as_deref(), Some(&b"third"[..]));
    assert_eq!(queue.dequeue(), None);
}

#[test]
fn dequeue_on_empty_is_none() {
    let mut queue = CommandQueue::new();
    assert!(queue.is_empty());
    assert_eq!(queue.dequeue(), None);
    // still empty, cursors untouched
    assert_eq!(queue.len(), 0);
}

#[test]
fn slots_are_not_reused_after_drain() {
    let mut queue = CommandQueue::new();
    for i in 0..MAX_CMD_QUEUE {
        queue.enqueue(&[b'a' + i as u8]).unwrap();
    }
    assert!(queue.is_full());
    assert_eq!(queue.enqueue(b"overflow"), Err(Error::Full));

    while queue.dequeue().is_some() {}
    assert!(queue.is_empty());

    // drained but not cleared: capacity is still gone
    assert!(queue.is_full());
    assert_eq!(queue.enqueue(b"late"), Err(Error::Full));
}

#[test]
fn partial_drain_consumes_capacity() {
    let mut queue = CommandQueue::new();
    queue.enqueue(b"a").unwrap();
    queue.enqueue(b"b").unwrap();
    assert_eq!(queue.dequeue().as_deref(), Some(&b"a"[..]));

    // the freed slot does not come back; only tail movement matters
    for _ in 0..(MAX_CMD_QUEUE - 2) {
        queue.enqueue(b"fill").unwrap();
    }
    assert_eq!(queue.enqueue(b"one too many"), Err(Error::Full));
    assert_eq!(queue.len(), MAX_CMD_QUEUE - 1);
}

#[test]
fn clear_restores_capacity() {
    let mut queue = CommandQueue::new();
    for _ in 0..MAX_CMD_QUEUE {
        queue.enqueue(b"x").unwrap();
    }
    assert!(queue.is_full());

    queue.clear();
    assert!(queue.is_empty());
    assert!(!queue.is_full());
    queue.enqueue(b"fresh").unwrap();
    assert_eq!(queue.dequeue().as_deref(), Some(&b"fresh"[..]));
}

#[test]
fn oversize_line_is_rejected_whole() {
    let mut queue = CommandQueue::new();
    let long = [b'x'; MAX_LINE_LENGTH + 1];
    assert_eq!(queue.enqueue(&long), Err(Error::Oversize));
    assert!(queue.is_empty());

    // exactly at capacity is fine
    let max = [b'y'; MAX_LINE_LENGTH];
    queue.enqueue(&max).unwrap();
    assert_eq!(queue.dequeue().as_deref(), Some(&max[..]));
}

#[test]
fn iter_walks_pending_lines_only() {
    let mut queue = CommandQueue::new();
    queue.enqueue(b"a").unwrap();
    queue.enqueue(b"b").unwrap();
    queue.enqueue(b"c").unwrap();
    queue.dequeue();

    let mut pending = queue.iter();
    assert_eq!(pending.next(), Some(&b"b"[..]));
    assert_eq!(pending.next(), Some(&b"c"[..]));
    assert_eq!(pending.next(), None);
    drop(pending);

    queue.clear();
    assert_eq!(queue.iter().count(), 0);
}

#[test]
fn empty_line_is_a_valid_entry() {
    let mut queue = CommandQueue::new();
    queue.enqueue(b"").unwrap();
    assert_eq!(queue.len(), 1);
    assert_eq!(queue.dequeue().as_deref(), Some(&b""[..]));
}
