use std::time::{Duration, Instant};

/// Fixed-interval timer driving the periodic reload of the event list.
///
/// There is no jitter and no backoff. A reload becoming due while an earlier
/// one is still in flight is started anyway.
#[derive(Debug, Clone)]
pub struct RefreshScheduler {
    interval: Duration,
    last_started: Option<Instant>,
}

impl RefreshScheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_started: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Due immediately if nothing has been started yet
    pub fn is_due(&self, now: Instant) -> bool {
        match self.last_started {
            None => true,
            Some(started) => now.saturating_duration_since(started) >= self.interval,
        }
    }

    pub fn mark_started(&mut self, now: Instant) {
        self.last_started = Some(now);
    }

    /// Time left until the next reload is due
    pub fn time_until_due(&self, now: Instant) -> Duration {
        match self.last_started {
            None => Duration::ZERO,
            Some(started) => self
                .interval
                .saturating_sub(now.saturating_duration_since(started)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_due_before_first_run() {
        let scheduler = RefreshScheduler::new(Duration::from_secs(300));
        let now = Instant::now();
        assert!(scheduler.is_due(now));
        assert_eq!(scheduler.time_until_due(now), Duration::ZERO);
    }

    #[test]
    fn test_not_due_within_interval() {
        let mut scheduler = RefreshScheduler::new(Duration::from_secs(300));
        let start = Instant::now();
        scheduler.mark_started(start);

        let later = start + Duration::from_secs(120);
        assert!(!scheduler.is_due(later));
        assert_eq!(scheduler.time_until_due(later), Duration::from_secs(180));
    }

    #[test]
    fn test_due_after_interval() {
        let mut scheduler = RefreshScheduler::new(Duration::from_secs(300));
        let start = Instant::now();
        scheduler.mark_started(start);

        assert!(scheduler.is_due(start + Duration::from_secs(300)));
        assert!(scheduler.is_due(start + Duration::from_secs(1000)));
        assert_eq!(
            scheduler.time_until_due(start + Duration::from_secs(1000)),
            Duration::ZERO
        );
    }
}
