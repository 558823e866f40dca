use std::cell::RefCell;
use std::ops::ControlFlow;
use std::rc::Rc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::timer::{Scheduler, ScopedTimer, TimerError};

/// Progress past which a counter starts stepping.
pub const DEFAULT_THRESHOLD: f64 = 0.2;
/// Delay between two increments.
pub const DEFAULT_STEP_INTERVAL: Duration = Duration::from_millis(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatIcon {
    Clock,
    Clipboard,
    Code,
    ThumbsUp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterSpec {
    pub target: u32,
    pub label: String,
    pub icon: StatIcon,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatorConfig {
    pub threshold: f64,
    pub step_interval: Duration,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            step_interval: DEFAULT_STEP_INTERVAL,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterState {
    pub current: u32,
    pub started: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Advanced(u32),
    Reached(u32),
}

impl Step {
    pub fn value(self) -> u32 {
        match self {
            Step::Advanced(v) | Step::Reached(v) => v,
        }
    }
}

/// Counter state machine, free of any timer or DOM concerns.
#[derive(Debug, Clone)]
pub struct CounterAnimator {
    target: u32,
    threshold: f64,
    state: CounterState,
    retired: bool,
}

impl CounterAnimator {
    pub fn new(target: u32, config: &AnimatorConfig) -> Self {
        Self {
            target,
            threshold: config.threshold,
            state: CounterState::default(),
            retired: false,
        }
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn state(&self) -> CounterState {
        self.state
    }

    pub fn current(&self) -> u32 {
        self.state.current
    }

    /// Feeds a progress value. Returns `true` exactly once: on the first crossing that
    /// requires a step sequence to begin.
    pub fn observe(&mut self, progress: f64) -> bool {
        if self.retired || self.state.started || self.state.current >= self.target {
            return false;
        }
        if progress > self.threshold {
            self.state.started = true;
            return true;
        }
        false
    }

    pub fn step(&mut self) -> Step {
        if self.retired || self.state.current >= self.target {
            return Step::Reached(self.state.current);
        }
        self.state.current += 1;
        if self.state.current == self.target {
            Step::Reached(self.state.current)
        } else {
            Step::Advanced(self.state.current)
        }
    }

    /// Jumps to the final value without stepping.
    pub fn finish(&mut self) {
        if !self.retired {
            self.state.started = true;
            self.state.current = self.target;
        }
    }

    /// Freezes the animator; no later call mutates it.
    pub fn retire(&mut self) {
        self.retired = true;
    }

    pub fn is_retired(&self) -> bool {
        self.retired
    }
}

pub fn display_value(current: u32) -> String {
    format!("{current}+")
}

/// Binds a [`CounterAnimator`] to a [`Scheduler`]: starts the step timer on the first
/// threshold crossing and cancels it on teardown.
pub struct CounterDriver<S: Scheduler> {
    animator: Rc<RefCell<CounterAnimator>>,
    scheduler: S,
    step_interval: Duration,
    timer: Option<ScopedTimer<S::Handle>>,
    on_step: Rc<dyn Fn(u32)>,
}

impl<S: Scheduler> CounterDriver<S> {
    pub fn new(
        target: u32,
        config: &AnimatorConfig,
        scheduler: S,
        on_step: impl Fn(u32) + 'static,
    ) -> Self {
        Self {
            animator: Rc::new(RefCell::new(CounterAnimator::new(target, config))),
            scheduler,
            step_interval: config.step_interval,
            timer: None,
            on_step: Rc::new(on_step),
        }
    }

    pub fn current(&self) -> u32 {
        self.animator.borrow().current()
    }

    pub fn state(&self) -> CounterState {
        self.animator.borrow().state()
    }

    pub fn is_stepping(&self) -> bool {
        self.timer.as_ref().is_some_and(|t| t.is_held())
            && self.animator.borrow().current() < self.animator.borrow().target()
    }

    pub fn observe(&mut self, progress: f64) -> Result<(), TimerError> {
        if !self.animator.borrow_mut().observe(progress) {
            return Ok(());
        }
        let animator = Rc::clone(&self.animator);
        let on_step = Rc::clone(&self.on_step);
        let started = ScopedTimer::start(
            &self.scheduler,
            self.step_interval,
            Box::new(move || {
                let step = animator.borrow_mut().step();
                on_step(step.value());
                match step {
                    Step::Advanced(_) => ControlFlow::Continue(()),
                    Step::Reached(_) => ControlFlow::Break(()),
                }
            }),
        );
        match started {
            Ok(timer) => {
                self.timer = Some(timer);
                Ok(())
            }
            Err(e) => {
                let value = {
                    let mut animator = self.animator.borrow_mut();
                    animator.finish();
                    animator.current()
                };
                (self.on_step)(value);
                Err(e)
            }
        }
    }

    pub fn teardown(&mut self) {
        if let Some(mut timer) = self.timer.take() {
            timer.cancel();
        }
        self.animator.borrow_mut().retire();
    }
}

impl<S: Scheduler> Drop for CounterDriver<S> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;
    use crate::timer::manual::ManualClock;

    const TICK: Duration = Duration::from_millis(30);

    fn recording_driver(
        target: u32,
        clock: &ManualClock,
    ) -> (CounterDriver<ManualClock>, Rc<RefCell<Vec<(Duration, u32)>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&seen);
        let time = clock.clone();
        let driver = CounterDriver::new(target, &AnimatorConfig::default(), clock.clone(), {
            move |v| log.borrow_mut().push((time.now(), v))
        });
        (driver, seen)
    }

    #[test]
    fn test_animator_threshold_is_strict() {
        let mut animator = CounterAnimator::new(3, &AnimatorConfig::default());
        assert!(!animator.observe(0.0));
        assert!(!animator.observe(0.2));
        assert!(animator.observe(0.21));
        assert!(animator.state().started);
        // later crossings are no-ops
        assert!(!animator.observe(0.9));
    }

    #[test]
    fn test_animator_never_exceeds_target() {
        let mut animator = CounterAnimator::new(2, &AnimatorConfig::default());
        assert!(animator.observe(0.5));
        assert_eq!(animator.step(), Step::Advanced(1));
        assert_eq!(animator.step(), Step::Reached(2));
        assert_eq!(animator.step(), Step::Reached(2));
        assert_eq!(animator.current(), 2);
    }

    #[test]
    fn test_zero_target_never_starts() {
        let clock = ManualClock::new();
        let (mut driver, seen) = recording_driver(0, &clock);
        for p in [0.0, 0.3, 1.0, 0.1, 0.7] {
            driver.observe(p).unwrap();
        }
        clock.advance(Duration::from_secs(1));
        assert_eq!(driver.current(), 0);
        assert!(!driver.state().started);
        assert_eq!(clock.active_timers(), 0);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_four_step_sequence() {
        let clock = ManualClock::new();
        let (mut driver, seen) = recording_driver(4, &clock);
        assert_eq!(driver.current(), 0);

        driver.observe(0.5).unwrap();
        clock.advance(Duration::from_secs(2));

        let expected = (1..=4).map(|v| (TICK * v, v)).collect::<Vec<_>>();
        assert_eq!(*seen.borrow(), expected);
        assert_eq!(driver.current(), 4);
        assert_eq!(clock.active_timers(), 0);
        assert!(!driver.is_stepping());
    }

    #[test]
    fn test_recrossing_does_not_restart() {
        let clock = ManualClock::new();
        let (mut driver, seen) = recording_driver(10, &clock);

        driver.observe(0.3).unwrap();
        clock.advance(TICK * 3);
        assert_eq!(driver.current(), 3);

        // scroll back above the band, then down again
        driver.observe(0.05).unwrap();
        clock.advance(TICK);
        driver.observe(0.6).unwrap();
        assert_eq!(clock.active_timers(), 1);
        assert_eq!(driver.current(), 4);

        clock.advance(Duration::from_secs(1));
        assert_eq!(driver.current(), 10);
        let values = seen.borrow().iter().map(|(_, v)| *v).collect::<Vec<_>>();
        assert_eq!(values, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_monotonic_for_many_targets() {
        for target in [1, 2, 7, 99] {
            let clock = ManualClock::new();
            let (mut driver, seen) = recording_driver(target, &clock);
            driver.observe(1.0).unwrap();
            for _ in 0..(target + 5) {
                clock.advance(Duration::from_millis(17));
                driver.observe(0.5).unwrap();
            }
            clock.advance(Duration::from_secs(10));
            let values = seen.borrow().iter().map(|(_, v)| *v).collect::<Vec<_>>();
            assert!(values.windows(2).all(|w| w[0] <= w[1]));
            assert_eq!(values.last().copied(), Some(target));
            assert_eq!(driver.current(), target);
        }
    }

    #[test]
    fn test_teardown_stops_mutation() {
        let clock = ManualClock::new();
        let torn_down = Rc::new(Cell::new(false));
        let flag = Rc::clone(&torn_down);
        let mut driver = CounterDriver::new(50, &AnimatorConfig::default(), clock.clone(), {
            move |_| assert!(!flag.get(), "counter stepped after teardown")
        });

        driver.observe(0.4).unwrap();
        clock.advance(TICK * 5);
        assert_eq!(driver.current(), 5);

        driver.teardown();
        torn_down.set(true);
        assert!(driver.animator.borrow().is_retired());
        assert_eq!(clock.active_timers(), 0);
        clock.advance(Duration::from_secs(5));
        driver.observe(0.9).unwrap();
        assert_eq!(driver.current(), 5);
    }

    #[test]
    fn test_drop_cancels_timer() {
        let clock = ManualClock::new();
        {
            let (mut driver, _) = recording_driver(20, &clock);
            driver.observe(0.4).unwrap();
            clock.advance(TICK);
            assert_eq!(clock.active_timers(), 1);
        }
        assert_eq!(clock.active_timers(), 0);
    }

    #[test]
    fn test_refused_timer_jumps_to_target() {
        let clock = ManualClock::refusing();
        let (mut driver, seen) = recording_driver(8, &clock);
        assert!(driver.observe(0.5).is_err());
        assert_eq!(driver.current(), 8);
        assert_eq!(seen.borrow().len(), 1);
        // no retry on later crossings
        assert!(driver.observe(0.9).is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = AnimatorConfig {
            threshold: 0.5,
            step_interval: Duration::from_millis(100),
        };
        let clock = ManualClock::new();
        let mut driver = CounterDriver::new(2, &config, clock.clone(), |_| {});
        driver.observe(0.4).unwrap();
        assert!(!driver.state().started);
        driver.observe(0.51).unwrap();
        clock.advance(Duration::from_millis(100));
        assert_eq!(driver.current(), 1);
        clock.advance(Duration::from_millis(100));
        assert_eq!(driver.current(), 2);
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(0), "0+");
        assert_eq!(display_value(99), "99+");
    }
}
