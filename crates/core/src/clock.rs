//! Session clock - turns elapsed wall milliseconds into whole seconds.
//!
//! The clock itself has no notion of pause; [`crate::Session::tick`] decides at
//! call time whether the clock runs and only then feeds it milliseconds.

use crate::types::CLOCK_TICK_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionClock {
    interval_ms: u32,
    carry_ms: u32,
}

impl SessionClock {
    pub fn new() -> Self {
        Self {
            interval_ms: CLOCK_TICK_MS,
            carry_ms: 0,
        }
    }

    /// Feed `elapsed_ms` of running time; returns how many whole ticks fired.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        let total = self.carry_ms as u64 + elapsed_ms as u64;
        let ticks = total / self.interval_ms as u64;
        self.carry_ms = (total % self.interval_ms as u64) as u32;
        ticks.min(u32::MAX as u64) as u32
    }

    /// Milliseconds accumulated toward the next tick.
    pub fn carry_ms(&self) -> u32 {
        self.carry_ms
    }
}

impl Default for SessionClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_seconds_only() {
        let mut clock = SessionClock::new();
        assert_eq!(clock.advance(999), 0);
        assert_eq!(clock.advance(1), 1);
        assert_eq!(clock.carry_ms(), 0);
    }

    #[test]
    fn test_small_steps_accumulate() {
        let mut clock = SessionClock::new();
        let mut ticks = 0;
        // 16ms frames for a little over 3 seconds.
        for _ in 0..190 {
            ticks += clock.advance(16);
        }
        assert_eq!(ticks, 3);
        assert_eq!(clock.carry_ms(), 190 * 16 - 3000);
    }

    #[test]
    fn test_large_step_yields_several_ticks() {
        let mut clock = SessionClock::new();
        assert_eq!(clock.advance(3500), 3);
        assert_eq!(clock.carry_ms(), 500);
    }
}
