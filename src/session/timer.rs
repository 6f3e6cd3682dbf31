//! Countdown for a quiz attempt.

/// Every attempt gets ten minutes.
pub const TIME_LIMIT_SECS: u32 = 600;

/// What a single one-second tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The countdown is stopped; nothing changed.
    Idle,
    /// Still running with this many seconds left.
    Running(u32),
    /// Just reached zero. Reported once; the countdown stops itself.
    Expired,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    budget: u32,
    remaining: u32,
    running: bool,
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(TIME_LIMIT_SECS)
    }
}

impl Countdown {
    pub fn new(budget: u32) -> Self {
        Self {
            budget,
            remaining: budget,
            running: false,
        }
    }

    /// Restart from the full budget. A zero budget expires on the first tick.
    pub fn start(&mut self) {
        self.remaining = self.budget;
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn tick(&mut self) -> Tick {
        if !self.running {
            return Tick::Idle;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.running = false;
            Tick::Expired
        } else {
            Tick::Running(self.remaining)
        }
    }

    /// `MM:SS`
    pub fn display(&self) -> String {
        format!("{:02}:{:02}", self.remaining / 60, self.remaining % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopped_countdown_does_not_tick() {
        let mut timer = Countdown::default();
        assert_eq!(timer.tick(), Tick::Idle);
        assert_eq!(timer.remaining(), TIME_LIMIT_SECS);
    }

    #[test]
    fn test_expires_exactly_once() {
        let mut timer = Countdown::new(3);
        timer.start();

        assert_eq!(timer.tick(), Tick::Running(2));
        assert_eq!(timer.tick(), Tick::Running(1));
        assert_eq!(timer.tick(), Tick::Expired);
        assert_eq!(timer.tick(), Tick::Idle);
        assert_eq!(timer.remaining(), 0);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_restart_restores_full_budget() {
        let mut timer = Countdown::default();
        timer.start();
        for _ in 0..125 {
            timer.tick();
        }
        assert_eq!(timer.display(), "07:55");

        timer.start();
        assert_eq!(timer.remaining(), TIME_LIMIT_SECS);
        assert_eq!(timer.display(), "10:00");
    }

    #[test]
    fn test_zero_budget_expires_on_first_tick() {
        let mut timer = Countdown::new(0);
        timer.start();
        assert!(timer.is_running());
        assert_eq!(timer.tick(), Tick::Expired);
        assert_eq!(timer.tick(), Tick::Idle);
    }

    #[test]
    fn test_stop_freezes_remaining() {
        let mut timer = Countdown::new(10);
        timer.start();
        timer.tick();
        timer.stop();
        assert_eq!(timer.tick(), Tick::Idle);
        assert_eq!(timer.remaining(), 9);
    }
}
