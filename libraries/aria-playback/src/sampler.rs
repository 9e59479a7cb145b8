//! Position sampling schedule
//!
//! While a track plays, the host polls the session on this period and the
//! session answers each tick with a position event. The sampler owns only
//! the activation flag and the period; cancellation is idempotent, and a
//! tick after cancellation does nothing.

use std::time::Duration;

/// Activation flag and period for the recurring position sample
#[derive(Debug, Clone)]
pub struct PositionSampler {
    active: bool,
    period: Duration,
}

impl PositionSampler {
    /// Create an inactive sampler with the given period
    pub fn new(period: Duration) -> Self {
        Self {
            active: false,
            period,
        }
    }

    /// Activate sampling
    pub fn start(&mut self) {
        self.active = true;
    }

    /// Deactivate sampling (safe to call repeatedly)
    pub fn cancel(&mut self) {
        self.active = false;
    }

    /// Check whether sampling is active
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Sampling period the host should poll on
    pub fn period(&self) -> Duration {
        self.period
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_inactive() {
        let sampler = PositionSampler::new(Duration::from_millis(100));
        assert!(!sampler.is_active());
        assert_eq!(sampler.period(), Duration::from_millis(100));
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut sampler = PositionSampler::new(Duration::from_millis(100));
        sampler.start();
        assert!(sampler.is_active());

        sampler.cancel();
        sampler.cancel();
        assert!(!sampler.is_active());
    }

    #[test]
    fn restart_after_cancel() {
        let mut sampler = PositionSampler::new(Duration::from_millis(100));
        sampler.start();
        sampler.cancel();
        sampler.start();
        assert!(sampler.is_active());
    }
}
