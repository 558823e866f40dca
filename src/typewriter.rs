use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterConfig {
    pub type_speed: Duration,
    pub back_speed: Duration,
    /// Pause on a fully typed string before backspacing.
    pub back_delay: Duration,
    pub looped: bool,
    /// Only erase back to the prefix shared with the next string.
    pub smart_backspace: bool,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            type_speed: Duration::from_millis(50),
            back_speed: Duration::from_millis(50),
            back_delay: Duration::from_millis(700),
            looped: true,
            smart_backspace: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Holding,
    Deleting,
    Done,
}

/// Types a list of strings one character at a time, then erases and moves to the next.
#[derive(Debug, Clone)]
pub struct Typewriter {
    strings: Vec<Vec<char>>,
    config: TypewriterConfig,
    index: usize,
    shown: usize,
    phase: Phase,
    pending: Duration,
}

impl Typewriter {
    pub fn new<S: AsRef<str>>(strings: &[S], config: TypewriterConfig) -> Self {
        let min = Duration::from_millis(1);
        let config = TypewriterConfig {
            type_speed: config.type_speed.max(min),
            back_speed: config.back_speed.max(min),
            back_delay: config.back_delay.max(min),
            ..config
        };
        let strings = strings
            .iter()
            .map(|s| s.as_ref().chars().collect::<Vec<_>>())
            .collect::<Vec<_>>();
        let phase = if strings.is_empty() {
            Phase::Done
        } else {
            Phase::Typing
        };
        Self {
            strings,
            config,
            index: 0,
            shown: 0,
            phase,
            pending: Duration::ZERO,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn text(&self) -> String {
        self.strings
            .get(self.index)
            .map(|s| s[..self.shown].iter().collect())
            .unwrap_or_default()
    }

    /// Interval at which a driver should call [`Typewriter::advance`].
    pub fn tick_period(&self) -> Duration {
        self.config.type_speed.min(self.config.back_speed)
    }

    /// Consumes `elapsed` in whole steps. Returns whether the visible text changed.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        let before = (self.index, self.shown);
        self.pending += elapsed;
        while let Some(needed) = self.step_duration() {
            if self.pending < needed {
                break;
            }
            self.pending -= needed;
            self.step();
        }
        if self.phase == Phase::Done {
            self.pending = Duration::ZERO;
        }
        before != (self.index, self.shown)
    }

    fn step_duration(&self) -> Option<Duration> {
        match self.phase {
            Phase::Typing => Some(self.config.type_speed),
            Phase::Holding => Some(self.config.back_delay),
            Phase::Deleting => Some(self.config.back_speed),
            Phase::Done => None,
        }
    }

    fn next_index(&self) -> usize {
        (self.index + 1) % self.strings.len()
    }

    fn is_last(&self) -> bool {
        self.index + 1 == self.strings.len()
    }

    /// Characters kept while erasing the current string.
    fn keep(&self) -> usize {
        if !self.config.smart_backspace || self.is_last() {
            return 0;
        }
        let current = &self.strings[self.index];
        let next = &self.strings[self.next_index()];
        current
            .iter()
            .zip(next.iter())
            .take_while(|(a, b)| a == b)
            .count()
    }

    fn step(&mut self) {
        match self.phase {
            Phase::Typing => {
                let len = self.strings[self.index].len();
                if self.shown < len {
                    self.shown += 1;
                }
                if self.shown >= len {
                    self.phase = if self.is_last() && !self.config.looped {
                        Phase::Done
                    } else {
                        Phase::Holding
                    };
                }
            }
            Phase::Holding => self.phase = Phase::Deleting,
            Phase::Deleting => {
                let keep = self.keep();
                if self.shown > keep {
                    self.shown -= 1;
                }
                if self.shown <= keep {
                    self.index = self.next_index();
                    self.phase = Phase::Typing;
                }
            }
            Phase::Done => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_types_one_char_per_step() {
        let mut tw = Typewriter::new(&["abc"], TypewriterConfig::default());
        assert_eq!(tw.text(), "");
        assert!(!tw.advance(MS * 49));
        assert!(tw.advance(MS));
        assert_eq!(tw.text(), "a");
        tw.advance(MS * 100);
        assert_eq!(tw.text(), "abc");
        assert_eq!(tw.phase(), Phase::Holding);
    }

    #[test]
    fn test_hold_then_backspace_and_loop() {
        let strings = ["Hi, I'm Sasanka Gayathra", "I'm a Full Stack Developer"];
        let mut tw = Typewriter::new(&strings, TypewriterConfig::default());
        let first = strings[0].chars().count() as u32;

        tw.advance(MS * 50 * first);
        assert_eq!(tw.text(), strings[0]);

        // still held just before the back delay elapses
        tw.advance(MS * 699);
        assert_eq!(tw.text(), strings[0]);
        tw.advance(MS);
        assert_eq!(tw.phase(), Phase::Deleting);

        // no shared prefix, so everything is erased
        tw.advance(MS * 50 * first);
        assert_eq!(tw.text(), "");
        assert_eq!(tw.index(), 1);
        assert_eq!(tw.phase(), Phase::Typing);

        let second = strings[1].chars().count() as u32;
        tw.advance(MS * 50 * second);
        assert_eq!(tw.text(), strings[1]);
        tw.advance(MS * 700 + MS * 50 * second);
        assert_eq!(tw.index(), 0);
        assert_eq!(tw.text(), "");
    }

    #[test]
    fn test_smart_backspace_keeps_prefix() {
        let mut tw = Typewriter::new(&["Hello world", "Hello there"], TypewriterConfig::default());
        tw.advance(MS * 50 * 11 + MS * 700);
        tw.advance(MS * 50 * 5);
        assert_eq!(tw.text(), "Hello ");
        assert_eq!(tw.index(), 1);
        tw.advance(MS * 50 * 5);
        assert_eq!(tw.text(), "Hello there");
    }

    #[test]
    fn test_plain_backspace_erases_everything() {
        let config = TypewriterConfig {
            smart_backspace: false,
            ..TypewriterConfig::default()
        };
        let mut tw = Typewriter::new(&["Hello world", "Hello there"], config);
        tw.advance(MS * 50 * 11 + MS * 700 + MS * 50 * 11);
        assert_eq!(tw.text(), "");
        assert_eq!(tw.index(), 1);
    }

    #[test]
    fn test_without_loop_stops_on_last() {
        let config = TypewriterConfig {
            looped: false,
            ..TypewriterConfig::default()
        };
        let mut tw = Typewriter::new(&["ab", "cd"], config);
        tw.advance(Duration::from_secs(60));
        assert_eq!(tw.phase(), Phase::Done);
        assert_eq!(tw.text(), "cd");
        assert!(!tw.advance(Duration::from_secs(1)));
    }

    #[test]
    fn test_multibyte_chars() {
        let mut tw = Typewriter::new(&["héllo ❤"], TypewriterConfig::default());
        tw.advance(MS * 50 * 2);
        assert_eq!(tw.text(), "hé");
        tw.advance(MS * 50 * 5);
        assert_eq!(tw.text(), "héllo ❤");
    }

    #[test]
    fn test_empty_list() {
        let mut tw = Typewriter::new::<&str>(&[], TypewriterConfig::default());
        assert_eq!(tw.phase(), Phase::Done);
        assert!(!tw.advance(Duration::from_secs(1)));
        assert_eq!(tw.text(), "");
    }

    #[test]
    fn test_tick_period() {
        let config = TypewriterConfig {
            type_speed: Duration::from_millis(80),
            back_speed: Duration::from_millis(40),
            ..TypewriterConfig::default()
        };
        let tw = Typewriter::new(&["x"], config);
        assert_eq!(tw.tick_period(), Duration::from_millis(40));
    }
}
