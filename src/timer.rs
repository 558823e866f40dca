use std::ops::ControlFlow;
use std::time::Duration;

use thiserror::Error;

/// Body of a recurring timer. Returning `Break` stops the timer from inside its own tick.
pub type Tick = Box<dyn FnMut() -> ControlFlow<()>>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimerError {
    #[error("Timer could not be scheduled: {0}")]
    Rejected(String),
}

pub trait TimerHandle {
    fn cancel(&self);
}

/// Something that can run a [`Tick`] every `period`.
///
/// Implementations must deliver ticks of one timer in increasing time order and must never
/// invoke a tick again once it returned `Break` or its handle was cancelled.
pub trait Scheduler {
    type Handle: TimerHandle;

    fn every(&self, period: Duration, tick: Tick) -> Result<Self::Handle, TimerError>;
}

/// Owns a recurring timer for as long as its owner lives.
///
/// Dropping the guard cancels the timer, so a timer can never outlive the state it mutates.
pub struct ScopedTimer<H: TimerHandle> {
    handle: Option<H>,
}

impl<H: TimerHandle> ScopedTimer<H> {
    pub fn new(handle: H) -> Self {
        Self {
            handle: Some(handle),
        }
    }

    pub fn start<S>(scheduler: &S, period: Duration, tick: Tick) -> Result<Self, TimerError>
    where
        S: Scheduler<Handle = H>,
    {
        scheduler.every(period, tick).map(Self::new)
    }

    pub fn is_held(&self) -> bool {
        self.handle.is_some()
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.cancel();
        }
    }
}

impl<H: TimerHandle> Drop for ScopedTimer<H> {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
pub(crate) mod manual {
    //! Virtual clock used to drive timers deterministically in tests.

    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::ops::ControlFlow;
    use std::rc::{Rc, Weak};
    use std::time::Duration;

    use super::{Scheduler, Tick, TimerError, TimerHandle};

    struct Task {
        id: u64,
        period: Duration,
        due: Duration,
        tick: Tick,
    }

    #[derive(Default)]
    struct ClockState {
        now: Duration,
        next_id: u64,
        tasks: Vec<Task>,
        // ids cancelled while their tick was running
        cancelled: HashSet<u64>,
        refuse: bool,
    }

    #[derive(Clone, Default)]
    pub struct ManualClock {
        state: Rc<RefCell<ClockState>>,
    }

    pub struct ManualHandle {
        id: u64,
        state: Weak<RefCell<ClockState>>,
    }

    impl TimerHandle for ManualHandle {
        fn cancel(&self) {
            if let Some(state) = self.state.upgrade() {
                let mut state = state.borrow_mut();
                state.tasks.retain(|t| t.id != self.id);
                state.cancelled.insert(self.id);
            }
        }
    }

    impl ManualClock {
        pub fn new() -> Self {
            Self::default()
        }

        /// A clock whose `every` always fails.
        pub fn refusing() -> Self {
            let clock = Self::default();
            clock.state.borrow_mut().refuse = true;
            clock
        }

        pub fn now(&self) -> Duration {
            self.state.borrow().now
        }

        pub fn active_timers(&self) -> usize {
            self.state.borrow().tasks.len()
        }

        pub fn advance(&self, by: Duration) {
            let until = self.now() + by;
            loop {
                let next = {
                    let mut state = self.state.borrow_mut();
                    let earliest = state
                        .tasks
                        .iter()
                        .enumerate()
                        .filter(|(_, t)| t.due <= until)
                        .min_by_key(|(_, t)| (t.due, t.id))
                        .map(|(i, _)| i);
                    earliest.map(|i| {
                        let task = state.tasks.remove(i);
                        state.now = task.due;
                        task
                    })
                };
                let Some(mut task) = next else {
                    break;
                };
                // run without holding the borrow so ticks may cancel timers
                let flow = (task.tick)();
                let mut state = self.state.borrow_mut();
                if flow == ControlFlow::Continue(()) && !state.cancelled.remove(&task.id) {
                    task.due += task.period;
                    state.tasks.push(task);
                }
            }
            self.state.borrow_mut().now = until;
        }
    }

    impl Scheduler for ManualClock {
        type Handle = ManualHandle;

        fn every(&self, period: Duration, tick: Tick) -> Result<ManualHandle, TimerError> {
            let mut state = self.state.borrow_mut();
            if state.refuse {
                return Err(TimerError::Rejected("manual clock refuses timers".to_string()));
            }
            let id = state.next_id;
            state.next_id += 1;
            let due = state.now + period;
            state.tasks.push(Task {
                id,
                period,
                due,
                tick,
            });
            Ok(ManualHandle {
                id,
                state: Rc::downgrade(&self.state),
            })
        }
    }
}
