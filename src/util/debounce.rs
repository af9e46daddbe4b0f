//! Quiet-period debounce for search input.
//!
//! Each keystroke re-arms a deadline; the app's tick handler fires the
//! pending action once the quiet period has elapsed. This is the explicit
//! timer-reset-on-input pattern: arming again cancels the prior deadline.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Arms (or re-arms) the deadline at `now + delay`.
    pub fn poke(&mut self) {
        self.poke_at(Instant::now());
    }

    pub fn poke_at(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Disarms without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns true exactly once when the quiet period has elapsed.
    pub fn fire_due(&mut self) -> bool {
        self.fire_due_at(Instant::now())
    }

    pub fn fire_due_at(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_only_after_quiet_period() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(Duration::from_millis(1000));
        d.poke_at(t0);
        assert!(!d.fire_due_at(t0 + Duration::from_millis(999)));
        assert!(d.fire_due_at(t0 + Duration::from_millis(1000)));
        // One-shot: already disarmed.
        assert!(!d.fire_due_at(t0 + Duration::from_millis(2000)));
    }

    #[test]
    fn poke_resets_the_deadline() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(Duration::from_millis(1000));
        d.poke_at(t0);
        d.poke_at(t0 + Duration::from_millis(900));
        assert!(!d.fire_due_at(t0 + Duration::from_millis(1500)));
        assert!(d.fire_due_at(t0 + Duration::from_millis(1900)));
    }

    #[test]
    fn cancel_disarms() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(Duration::from_millis(100));
        d.poke_at(t0);
        assert!(d.is_armed());
        d.cancel();
        assert!(!d.is_armed());
        assert!(!d.fire_due_at(t0 + Duration::from_secs(10)));
    }

    #[test]
    fn unarmed_never_fires() {
        let mut d = Debouncer::new(Duration::from_millis(100));
        assert!(!d.fire_due_at(Instant::now() + Duration::from_secs(60)));
    }
}
