use std::collections::VecDeque;

/// Fixed-capacity, insertion-ordered store of formatted log lines.
///
/// Once full, a push evicts the single oldest entry, so the queue always
/// holds the most recent `capacity` lines in push order. Push is total:
/// it never fails and never grows the queue past its capacity.
#[derive(Debug)]
pub struct BoundedLogQueue {
    entries: VecDeque<String>,
    capacity: usize,
}

impl BoundedLogQueue {
    /// Creates a queue holding at most `capacity` entries. The capacity is
    /// fixed for the lifetime of the queue. A zero-capacity queue silently
    /// drops everything pushed into it.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, entry: String) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Current contents, oldest first.
    pub fn snapshot(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_keeps_most_recent_in_order() {
        let mut queue = BoundedLogQueue::new(5);
        for i in 0..12 {
            queue.push(format!("line{i}"));
        }
        assert_eq!(queue.len(), 5);
        assert_eq!(
            queue.snapshot(),
            vec!["line7", "line8", "line9", "line10", "line11"]
        );
    }

    #[test]
    fn test_below_capacity_keeps_everything() {
        let mut queue = BoundedLogQueue::new(5);
        queue.push("a".into());
        queue.push("b".into());
        assert_eq!(queue.snapshot(), vec!["a", "b"]);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_push_at_capacity_evicts_exactly_one() {
        let mut queue = BoundedLogQueue::new(3);
        queue.push("a".into());
        queue.push("b".into());
        queue.push("c".into());
        queue.push("d".into());
        assert_eq!(queue.snapshot(), vec!["b", "c", "d"]);
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn test_snapshot_does_not_mutate() {
        let mut queue = BoundedLogQueue::new(3);
        queue.push("a".into());
        let first = queue.snapshot();
        let second = queue.snapshot();
        assert_eq!(first, second);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_zero_capacity_drops_everything() {
        let mut queue = BoundedLogQueue::new(0);
        queue.push("a".into());
        assert!(queue.is_empty());
        assert!(queue.snapshot().is_empty());
    }
}
