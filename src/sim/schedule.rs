//! Simulated-time task scheduler
//!
//! Every timed behaviour of a round (frame loop, spawn waves, countdown,
//! effect expiry) is a task in one scheduler owned by the session. Time only
//! moves when the host calls `advance`, which keeps rounds reproducible and
//! lets a restart drop every outstanding timer in one call.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Things the session does on a timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Task {
    /// Advance entities by one frame
    Frame,
    /// Spawn a batch of fruit
    Spawn,
    /// Decrement the round timer
    Countdown,
    /// End of the ice freeze
    ResumeCountdown,
    /// Hide the "timer frozen" overlay
    ClearIceOverlay,
    /// End of the bomb flash/shake
    ClearBomb,
}

/// Identifies one scheduled entry for cancellation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskHandle(u64);

#[derive(Debug, Clone)]
struct Entry {
    handle: TaskHandle,
    task: Task,
    due: Duration,
    period: Option<Duration>,
}

/// Deterministic timer wheel over simulated time
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    now: Duration,
    entries: Vec<Entry>,
    next_handle: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current simulated time
    pub fn now(&self) -> Duration {
        self.now
    }

    fn insert(&mut self, task: Task, delay: Duration, period: Option<Duration>) -> TaskHandle {
        let handle = TaskHandle(self.next_handle);
        self.next_handle += 1;
        self.entries.push(Entry {
            handle,
            task,
            due: self.now + delay,
            period,
        });
        handle
    }

    /// Run `task` once, `delay` from now
    pub fn schedule_once(&mut self, task: Task, delay: Duration) -> TaskHandle {
        self.insert(task, delay, None)
    }

    /// Run `task` every `period`, first time one period from now
    pub fn schedule_every(&mut self, task: Task, period: Duration) -> TaskHandle {
        // A zero period would fire forever within one advance
        let period = period.max(Duration::from_nanos(1));
        self.insert(task, period, Some(period))
    }

    /// Returns false if the handle had already fired or been cancelled
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.handle != handle);
        self.entries.len() != before
    }

    /// Cancel every entry running `task`
    pub fn cancel_task(&mut self, task: Task) {
        self.entries.retain(|e| e.task != task);
    }

    pub fn cancel_all(&mut self) {
        self.entries.clear();
    }

    pub fn is_scheduled(&self, task: Task) -> bool {
        self.entries.iter().any(|e| e.task == task)
    }

    /// Number of outstanding entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pop the earliest task due at or before `until`
    ///
    /// The clock jumps to that task's due time, so anything the caller
    /// schedules while handling it is relative to the right instant.
    /// Periodic tasks are re-armed before being returned. Ties go to the
    /// entry scheduled first.
    pub fn pop_due(&mut self, until: Duration) -> Option<Task> {
        let idx = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due <= until)
            .min_by_key(|(_, e)| (e.due, e.handle.0))
            .map(|(i, _)| i)?;

        let entry = &mut self.entries[idx];
        let task = entry.task;
        self.now = self.now.max(entry.due);
        match entry.period {
            Some(period) => entry.due += period,
            None => {
                self.entries.swap_remove(idx);
            }
        }
        Some(task)
    }

    /// Move the clock forward to `until` once nothing else is due
    pub fn settle(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }
}
