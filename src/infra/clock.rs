use chrono::Utc;

use crate::usecases::contracts::Clock;

/// Wall-clock timestamps in the store's wire format: UTC, second precision,
/// trailing `Z`. Messages are timestamped by the sender, never the server.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn timestamp(&self) -> String {
        Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}
