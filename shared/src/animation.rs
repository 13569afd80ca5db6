use crate::config::AnimationConfig;

/// Running total behind the animated balance.
///
/// Each tick adds a fixed increment; the first tick that reaches or passes the
/// target clamps the value to the target and settles the counter. Ticks after
/// that are no-ops.
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceCounter {
    target: f64,
    increment: f64,
    current: f64,
    settled: bool,
}

impl BalanceCounter {
    pub fn new(target: f64, config: &AnimationConfig) -> Self {
        Self {
            target,
            increment: config.increment(target),
            current: 0.0,
            // Nothing to animate towards
            settled: target <= 0.0,
        }
    }

    pub fn current(&self) -> f64 {
        if self.settled {
            self.target
        } else {
            self.current
        }
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Advance one step. Returns the new value, or `None` once settled.
    pub fn tick(&mut self) -> Option<f64> {
        if self.settled {
            return None;
        }
        self.current += self.increment;
        if self.current >= self.target {
            self.current = self.target;
            self.settled = true;
        }
        Some(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_settles_exactly_at_target() {
        let config = AnimationConfig::default();
        let mut counter = BalanceCounter::new(67420.50, &config);
        assert_eq!(counter.current(), 0.0);

        let mut previous = 0.0;
        let mut ticks = 0;
        while let Some(value) = counter.tick() {
            ticks += 1;
            assert!(value > previous, "counter must increase monotonically");
            assert!(value <= 67420.50, "counter must never exceed the target");
            previous = value;
        }

        assert!(counter.is_settled());
        assert_eq!(counter.current(), 67420.50);
        // Float accumulation may need one extra step to cross the target
        assert!((60..=61).contains(&ticks), "took {ticks} ticks");
    }

    #[test]
    fn test_ticks_after_settling_are_noops() {
        let config = AnimationConfig {
            duration_ms: 100,
            steps: 4,
        };
        let mut counter = BalanceCounter::new(100.0, &config);
        assert_eq!(counter.tick(), Some(25.0));
        assert_eq!(counter.tick(), Some(50.0));
        assert_eq!(counter.tick(), Some(75.0));
        assert_eq!(counter.tick(), Some(100.0));
        assert!(counter.is_settled());
        assert_eq!(counter.tick(), None);
        assert_eq!(counter.current(), 100.0);
    }

    #[test]
    fn test_overshoot_is_clamped() {
        let config = AnimationConfig {
            duration_ms: 100,
            steps: 3,
        };
        let mut counter = BalanceCounter::new(10.0, &config);
        let values: Vec<f64> = std::iter::from_fn(|| counter.tick()).collect();
        assert_eq!(values.last().copied(), Some(10.0));
        assert!(values.iter().all(|v| *v <= 10.0));
    }

    #[test]
    fn test_zero_target_is_settled_immediately() {
        let mut counter = BalanceCounter::new(0.0, &AnimationConfig::default());
        assert!(counter.is_settled());
        assert_eq!(counter.tick(), None);
        assert_eq!(counter.current(), 0.0);
    }

    #[test]
    fn test_negative_target_shows_target_immediately() {
        let config = crate::DashboardConfig::from_json(r#"{"target_balance": -500.0}"#).unwrap();
        let mut counter = BalanceCounter::new(config.target_balance, &config.animation);
        assert!(counter.is_settled());
        assert_eq!(counter.current(), -500.0);
        assert_eq!(counter.tick(), None);
        assert_eq!(crate::format_currency(counter.current()), "-$500.00");
    }
}
