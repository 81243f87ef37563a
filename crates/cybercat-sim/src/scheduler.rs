//! Scheduler abstraction for the game's timers.
//!
//! The controller never sleeps or reads a wall clock. It asks a `Scheduler`
//! for the next due task inside a time window, so tests drive the game in
//! virtual time and the host drives it with real elapsed time.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use cybercat_core::types::{EntityId, Millis};

/// Handle for cancelling a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// Work a timer triggers when it comes due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Simulation heartbeat.
    Update,
    /// Threat creation cadence.
    Spawn,
    /// One-shot removal of a shield at the end of its lifetime.
    ExpireShield(EntityId),
}

pub trait Scheduler {
    /// Current reading of the scheduler clock.
    fn now(&self) -> Millis;

    /// Run `task` once, `delay` after now.
    fn schedule_once(&mut self, delay: Millis, task: Task) -> TimerId;

    /// Run `task` every `interval`, first one interval after now.
    fn schedule_repeating(&mut self, interval: Millis, task: Task) -> TimerId;

    /// Cancel a timer. Returns false if it already fired (one-shot) or was
    /// cancelled. A cancelled timer never fires again, even if queued.
    fn cancel(&mut self, id: TimerId) -> bool;

    /// Pop the next task due at or before `until` and move the clock to its
    /// due time. Tasks due at the same instant come out in scheduling order.
    fn pop_due(&mut self, until: Millis) -> Option<Task>;

    /// Move the clock forward to `until` once nothing else is due.
    fn advance_to(&mut self, until: Millis);
}

struct Timer {
    task: Task,
    interval: Option<Millis>,
}

/// Deterministic virtual-time scheduler backed by a min-heap.
#[derive(Default)]
pub struct TimerQueue {
    now: Millis,
    next_id: u64,
    next_seq: u64,
    timers: HashMap<TimerId, Timer>,
    queue: BinaryHeap<Reverse<(Millis, u64, TimerId)>>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of timers that can still fire.
    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    fn insert(&mut self, due: Millis, task: Task, interval: Option<Millis>) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.insert(id, Timer { task, interval });
        self.enqueue(due, id);
        id
    }

    fn enqueue(&mut self, due: Millis, id: TimerId) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Reverse((due, seq, id)));
    }
}

impl Scheduler for TimerQueue {
    fn now(&self) -> Millis {
        self.now
    }

    fn schedule_once(&mut self, delay: Millis, task: Task) -> TimerId {
        self.insert(self.now.saturating_add(delay), task, None)
    }

    fn schedule_repeating(&mut self, interval: Millis, task: Task) -> TimerId {
        let interval = interval.max(1);
        self.insert(self.now.saturating_add(interval), task, Some(interval))
    }

    fn cancel(&mut self, id: TimerId) -> bool {
        // Queue entries for a cancelled id are skipped when popped.
        self.timers.remove(&id).is_some()
    }

    fn pop_due(&mut self, until: Millis) -> Option<Task> {
        while let Some(Reverse((due, _, id))) = self.queue.peek().copied() {
            if due > until {
                return None;
            }
            self.queue.pop();

            let Some(timer) = self.timers.get(&id) else {
                continue;
            };
            let (task, interval) = (timer.task, timer.interval);
            match interval {
                Some(interval) => self.enqueue(due.saturating_add(interval), id),
                None => {
                    self.timers.remove(&id);
                }
            }
            self.now = self.now.max(due);
            return Some(task);
        }
        None
    }

    fn advance_to(&mut self, until: Millis) {
        self.now = self.now.max(until);
    }
}
