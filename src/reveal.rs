/// Latches the first time an element becomes visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    /// A latch carrying over an earlier result.
    pub fn resume(revealed: bool) -> Self {
        Self { revealed }
    }

    pub fn observe(&mut self, visible: bool) -> bool {
        self.revealed |= visible;
        self.revealed
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

/// Stagger delay for the `index`th element of a group, in milliseconds.
pub fn stagger_delay_ms(base_ms: u32, step_ms: u32, index: usize) -> u32 {
    base_ms + step_ms * index as u32
}
