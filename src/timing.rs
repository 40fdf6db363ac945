use chrono::Utc;
use std::time::{Duration, Instant};

pub trait Timing {
    /// Fractional seconds, keeping sub-second precision.
    fn elapsed_secs(&self) -> f64;
}

impl Timing for Duration {
    fn elapsed_secs(&self) -> f64 {
        self.as_secs() as f64 + f64::from(self.subsec_nanos()) / 1_000_000_000.0
    }
}

impl Timing for Instant {
    fn elapsed_secs(&self) -> f64 {
        self.elapsed().elapsed_secs()
    }
}

/// Wall-clock seconds since the Unix epoch.
pub fn unix_now() -> f64 {
    let now = Utc::now();
    now.timestamp() as f64 + f64::from(now.timestamp_subsec_nanos()) / 1_000_000_000.0
}
