use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// How often the "scanned N minutes ago" counter advances
pub const DEFAULT_SCAN_INTERVAL: Duration = Duration::from_secs(60);

/// ScanTicker - Counts elapsed scan intervals for a mounted detail view
///
/// Starts at zero and increments once per period on a background task.
/// The task is aborted when the ticker is stopped or dropped, so the count
/// never advances after teardown. Must be started inside a tokio runtime.
#[derive(Debug)]
pub struct ScanTicker {
    period: Duration,
    ticks: watch::Receiver<u64>,
    task: Option<JoinHandle<()>>,
}

impl ScanTicker {
    pub fn start(period: Duration) -> Self {
        let (sender, ticks) = watch::channel(0u64);
        let task = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                sender.send_modify(|count| *count += 1);
            }
        });

        Self {
            period,
            ticks,
            task: Some(task),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Intervals elapsed since the ticker started
    pub fn ticks(&self) -> u64 {
        *self.ticks.borrow()
    }

    /// Waits for the next tick and returns the new count, or `None` once
    /// the ticker has been stopped.
    pub async fn changed(&mut self) -> Option<u64> {
        self.ticks.changed().await.ok()?;
        Some(*self.ticks.borrow_and_update())
    }

    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }
}

impl Drop for ScanTicker {
    fn drop(&mut self) {
        self.stop();
    }
}

/// "Scanned N minute(s) ago" for a tick count of one-minute intervals
pub fn scanned_label(minutes: u64) -> String {
    if minutes == 1 {
        "Scanned 1 minute ago".to_string()
    } else {
        format!("Scanned {} minutes ago", minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_starts_at_zero() {
        let ticker = ScanTicker::start(DEFAULT_SCAN_INTERVAL);
        assert_eq!(ticker.ticks(), 0);
        assert!(ticker.is_running());
        assert_eq!(ticker.period(), Duration::from_secs(60));
    }

    #[tokio::test(start_paused = true)]
    async fn test_counts_once_per_period() {
        let mut ticker = ScanTicker::start(DEFAULT_SCAN_INTERVAL);
        let started = Instant::now();

        assert_eq!(ticker.changed().await, Some(1));
        assert!(started.elapsed() >= Duration::from_secs(60));
        assert_eq!(ticker.changed().await, Some(2));
        assert!(started.elapsed() >= Duration::from_secs(120));
        assert_eq!(ticker.ticks(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_tick_before_the_first_period() {
        let ticker = ScanTicker::start(Duration::from_secs(60));
        tokio::time::sleep(Duration::from_secs(59)).await;
        assert_eq!(ticker.ticks(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_ends_the_count() {
        let mut ticker = ScanTicker::start(Duration::from_secs(60));
        assert_eq!(ticker.changed().await, Some(1));
        ticker.stop();
        assert!(!ticker.is_running());
        assert_eq!(ticker.changed().await, None);
        assert_eq!(ticker.ticks(), 1);
    }

    #[test]
    fn test_scanned_label() {
        assert_eq!(scanned_label(0), "Scanned 0 minutes ago");
        assert_eq!(scanned_label(1), "Scanned 1 minute ago");
        assert_eq!(scanned_label(5), "Scanned 5 minutes ago");
    }
}
