//! Delayed callbacks on a single logical timeline.
//!
//! The scheduler owns a monotonic logical clock and a queue of pending tasks.
//! Nothing runs on its own: the owner advances the clock and receives due
//! tasks one at a time, in due-time order, with ties broken by scheduling
//! order. Each task may carry the flow generation it belongs to so the owner
//! can drop callbacks whose flow is gone.

use std::{cmp::Ordering, collections::BinaryHeap, time::Duration};

/// A task waiting in the queue.
#[derive(Debug)]
pub struct Scheduled<T> {
    /// Logical time at which the task becomes due
    pub due: Duration,
    /// Flow generation the task belongs to, if any
    pub generation: Option<u64>,
    pub task: T,
    seq: u64,
}

impl<T> Scheduled<T> {
    /// Whether the task was bound to a generation other than `current`.
    pub fn is_stale(&self, current: u64) -> bool {
        self.generation.is_some_and(|g| g != current)
    }
}

impl<T> PartialEq for Scheduled<T> {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl<T> Eq for Scheduled<T> {}

impl<T> PartialOrd for Scheduled<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Scheduled<T> {
    // Reversed so the max-heap yields the earliest task first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due
            .cmp(&self.due)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Timer queue with a logical clock.
#[derive(Debug)]
pub struct Scheduler<T> {
    now: Duration,
    next_seq: u64,
    queue: BinaryHeap<Scheduled<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            queue: BinaryHeap::new(),
        }
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current logical time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Queues `task` to become due `delay` from now.
    pub fn schedule(&mut self, delay: Duration, generation: Option<u64>, task: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Scheduled {
            due: self.now + delay,
            generation,
            task,
            seq,
        });
    }

    /// Removes the earliest task due at or before `until`, moving the clock
    /// to its due time.
    pub fn pop_due(&mut self, until: Duration) -> Option<Scheduled<T>> {
        if self.queue.peek()?.due > until {
            return None;
        }
        let entry = self.queue.pop()?;
        self.now = self.now.max(entry.due);
        Some(entry)
    }

    /// Moves the clock forward to `time`. The clock never goes backwards.
    pub fn finish_at(&mut self, time: Duration) {
        self.now = self.now.max(time);
    }

    /// Earliest due time among tasks matching `predicate`.
    pub fn next_due_where(&self, predicate: impl Fn(&T) -> bool) -> Option<Duration> {
        self.queue
            .iter()
            .filter(|entry| predicate(&entry.task))
            .map(|entry| entry.due)
            .min()
    }

    /// Number of queued tasks, stale ones included.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(scheduler: &mut Scheduler<&'static str>, until: Duration) -> Vec<&'static str> {
        let mut fired = Vec::new();
        while let Some(entry) = scheduler.pop_due(until) {
            fired.push(entry.task);
        }
        scheduler.finish_at(until);
        fired
    }

    #[test]
    fn test_tasks_fire_in_due_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(Duration::from_millis(300), None, "late");
        scheduler.schedule(Duration::from_millis(100), None, "early");
        scheduler.schedule(Duration::from_millis(200), None, "middle");

        assert_eq!(
            drain(&mut scheduler, Duration::from_secs(1)),
            ["early", "middle", "late"]
        );
        assert_eq!(scheduler.now(), Duration::from_secs(1));
    }

    #[test]
    fn test_ties_keep_scheduling_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(Duration::from_millis(50), None, "first");
        scheduler.schedule(Duration::from_millis(50), None, "second");
        scheduler.schedule(Duration::ZERO, None, "zero");

        assert_eq!(
            drain(&mut scheduler, Duration::from_millis(50)),
            ["zero", "first", "second"]
        );
    }

    #[test]
    fn test_tasks_not_yet_due_stay_queued() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(Duration::from_secs(5), None, "later");

        assert!(drain(&mut scheduler, Duration::from_secs(4)).is_empty());
        assert_eq!(scheduler.len(), 1);

        // Delays are relative to the clock at scheduling time
        scheduler.schedule(Duration::from_secs(2), None, "relative");
        assert_eq!(
            scheduler.next_due_where(|t| *t == "relative"),
            Some(Duration::from_secs(6))
        );
        assert_eq!(
            drain(&mut scheduler, Duration::from_secs(6)),
            ["later", "relative"]
        );
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_clock_moves_to_task_due_time() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(Duration::from_millis(700), None, "a");
        let entry = scheduler.pop_due(Duration::from_secs(2)).unwrap();
        assert_eq!(entry.task, "a");
        assert_eq!(scheduler.now(), Duration::from_millis(700));

        scheduler.finish_at(Duration::from_millis(100));
        assert_eq!(scheduler.now(), Duration::from_millis(700));
    }

    #[test]
    fn test_staleness_by_generation() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(Duration::ZERO, Some(1), "bound");
        scheduler.schedule(Duration::ZERO, None, "unbound");

        let bound = scheduler.pop_due(Duration::ZERO).unwrap();
        let unbound = scheduler.pop_due(Duration::ZERO).unwrap();
        assert!(bound.is_stale(2));
        assert!(!bound.is_stale(1));
        assert!(!unbound.is_stale(2));
    }
}
