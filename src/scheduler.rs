//! Explicit scheduled tasks with cancellation.
//!
//! The engine is single-threaded and event-driven; anything time-delayed
//! (the deletion detach, the audio fade ramp) is expressed as an explicit
//! scheduled task rather than an ambient timer callback. The app drives the
//! queue from [`run_due`](Scheduler::run_due) with an externally supplied
//! clock, which keeps every timing behavior deterministic under test.
//!
//! Actions are plain data. A fired action whose target no longer exists
//! (for example a detach task for an item that was already removed) must be
//! applied as a no-op by the caller, never treated as an error.

use crate::theme::FadeDirection;
use crate::types::ItemId;
use std::time::Duration;

/// Handle for cancelling a scheduled task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

/// What a task does when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskAction {
    /// Detach an item from the board. No-op if the item is already gone.
    RemoveItem(ItemId),
    /// Advance the audio volume ramp by one step.
    AudioFadeStep(FadeDirection),
}

#[derive(Debug)]
struct ScheduledTask {
    id: TaskId,
    due: Duration,
    /// `Some` for periodic tasks; the task re-arms itself until cancelled.
    repeat: Option<Duration>,
    action: TaskAction,
}

/// Single-threaded task queue keyed on an external monotonic clock
/// (duration since app start).
#[derive(Debug, Default)]
pub struct Scheduler {
    tasks: Vec<ScheduledTask>,
    next_id: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a fire-once task at an absolute time.
    pub fn schedule_once(&mut self, due: Duration, action: TaskAction) -> TaskId {
        self.push(due, None, action)
    }

    /// Schedule a periodic task; first fire at `due`, then every `every`.
    pub fn schedule_repeating(
        &mut self,
        due: Duration,
        every: Duration,
        action: TaskAction,
    ) -> TaskId {
        self.push(due, Some(every), action)
    }

    fn push(&mut self, due: Duration, repeat: Option<Duration>, action: TaskAction) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(ScheduledTask {
            id,
            due,
            repeat,
            action,
        });
        id
    }

    /// Cancel a pending task. Returns false if it already fired or was
    /// cancelled before; that is not an error.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        self.tasks.len() != before
    }

    pub fn is_scheduled(&self, id: TaskId) -> bool {
        self.tasks.iter().any(|task| task.id == id)
    }

    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    /// Collect every action due at or before `now`, in firing order.
    ///
    /// One-shot tasks are consumed; periodic tasks re-arm and fire once per
    /// elapsed interval, so a coarse tick still produces the full ramp.
    pub fn run_due(&mut self, now: Duration) -> Vec<TaskAction> {
        let mut fired: Vec<(Duration, u64, TaskAction)> = Vec::new();

        for task in &mut self.tasks {
            match task.repeat {
                None => {
                    if task.due <= now {
                        fired.push((task.due, task.id.0, task.action));
                    }
                }
                Some(every) => {
                    while task.due <= now {
                        fired.push((task.due, task.id.0, task.action));
                        task.due += every;
                    }
                }
            }
        }

        // Consumed one-shots drop out; periodic tasks stay until cancelled.
        self.tasks
            .retain(|task| task.repeat.is_some() || task.due > now);

        fired.sort_by_key(|&(due, id, _)| (due, id));
        fired.into_iter().map(|(_, _, action)| action).collect()
    }
}
