use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;

use crate::timer::{Scheduler, Tick, TimerError, TimerHandle};

/// Browser `setInterval`, usable only once the page is hydrated.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalScheduler;

pub struct IntervalCancel(Rc<Cell<Option<IntervalHandle>>>);

impl TimerHandle for IntervalCancel {
    fn cancel(&self) {
        if let Some(handle) = self.0.take() {
            handle.clear();
        }
    }
}

impl Scheduler for IntervalScheduler {
    type Handle = IntervalCancel;

    fn every(&self, period: Duration, tick: Tick) -> Result<IntervalCancel, TimerError> {
        let slot = Rc::new(Cell::new(None::<IntervalHandle>));
        let own = Rc::clone(&slot);
        let tick = RefCell::new(tick);
        let handle = set_interval_with_handle(
            move || {
                let flow = (tick.borrow_mut().as_mut())();
                if flow.is_break() {
                    if let Some(handle) = own.take() {
                        handle.clear();
                    }
                }
            },
            period,
        )
        .map_err(|e| TimerError::Rejected(format!("{e:?}")))?;
        slot.set(Some(handle));
        Ok(IntervalCancel(slot))
    }
}
