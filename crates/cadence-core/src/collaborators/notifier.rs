//! Calendar notification collaborators.

use std::time::Duration;

use async_trait::async_trait;
use jiff::Timestamp;
use log::info;

use super::Notifier;
use crate::error::Result;

/// Notifier that logs the reservations it would make instead of calling a
/// calendar API, after a simulated network delay.
#[derive(Debug, Clone)]
pub struct CalendarLog {
    latency: Duration,
}

impl CalendarLog {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for CalendarLog {
    fn default() -> Self {
        Self::new(Duration::from_millis(10))
    }
}

#[async_trait]
impl Notifier for CalendarLog {
    async fn reserve_block(&self, description: &str, start: Timestamp, end: Timestamp) -> Result<()> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        info!("[calendar] Would block: {description} from {start} to {end}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_calendar_log_always_succeeds() {
        let notifier = CalendarLog::new(Duration::ZERO);
        let start: Timestamp = "2024-01-01T09:00:00Z".parse().unwrap();
        let end: Timestamp = "2024-01-01T09:30:00Z".parse().unwrap();

        assert!(notifier.reserve_block("1. Buy domain", start, end).await.is_ok());
    }
}
