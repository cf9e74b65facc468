//! Slow query reporting.

use std::time::Duration;

use boilerplate_config::LoggingConfig;

/// Flags operations that run longer than `logging.slow_query_threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlowQueryDetector {
    threshold: Duration,
}

impl SlowQueryDetector {
    pub fn new(threshold: Duration) -> Self {
        Self { threshold }
    }

    /// A negative threshold (rejected by validation) is treated as zero.
    pub fn from_config(logging: &LoggingConfig) -> Self {
        Self::new(logging.slow_query_threshold.to_std().unwrap_or(Duration::ZERO))
    }

    pub fn threshold(&self) -> Duration {
        self.threshold
    }

    pub fn is_slow(&self, elapsed: Duration) -> bool {
        elapsed > self.threshold
    }

    /// Returns whether `elapsed` is over the threshold, logging a warning if so.
    pub fn observe(&self, query: &str, elapsed: Duration) -> bool {
        let slow = self.is_slow(elapsed);
        if slow {
            tracing::warn!(
                query,
                elapsed_ms = elapsed.as_millis() as u64,
                threshold_ms = self.threshold.as_millis() as u64,
                "slow query detected"
            );
        }
        slow
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boilerplate_config::ObservabilityConfig;
    use chrono::TimeDelta;
    use tracing_test::traced_test;

    #[test]
    fn threshold_comes_from_config() {
        let config = ObservabilityConfig::default();
        let detector = SlowQueryDetector::from_config(&config.logging);
        assert_eq!(detector.threshold(), Duration::from_millis(100));
    }

    #[test]
    fn negative_threshold_clamps_to_zero() {
        let mut logging = LoggingConfig::default();
        logging.slow_query_threshold = TimeDelta::milliseconds(-5);
        let detector = SlowQueryDetector::from_config(&logging);
        assert_eq!(detector.threshold(), Duration::ZERO);
        assert!(detector.is_slow(Duration::from_nanos(1)));
        assert!(!detector.is_slow(Duration::ZERO));
    }

    #[test]
    fn threshold_itself_is_not_slow() {
        let detector = SlowQueryDetector::new(Duration::from_millis(100));
        assert!(!detector.is_slow(Duration::from_millis(100)));
        assert!(detector.is_slow(Duration::from_millis(101)));
    }

    #[traced_test]
    #[test]
    fn slow_queries_are_logged() {
        let detector = SlowQueryDetector::new(Duration::from_millis(100));
        assert!(detector.observe("select_orders", Duration::from_millis(250)));
        assert!(logs_contain("slow query detected"));
        assert!(logs_contain("select_orders"));
    }

    #[traced_test]
    #[test]
    fn fast_queries_are_not_logged() {
        let detector = SlowQueryDetector::new(Duration::from_millis(100));
        assert!(!detector.observe("select_users", Duration::from_millis(20)));
        assert!(!logs_contain("slow query detected"));
    }
}
