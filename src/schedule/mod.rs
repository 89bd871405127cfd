pub mod resolver;
pub mod times;

pub use resolver::{countdown, resolve_next, NextPrayer};
pub use times::{parse_prayer_time, PrayerSchedule};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    /// A single timing string is malformed. Recoverable — the resolver
    /// skips the entry and continues with the remaining valid ones.
    #[error("invalid prayer time {raw:?}: expected HH:MM")]
    Parse { raw: String },

    /// Even the rollover target (tomorrow's Fajr) is malformed. Fatal —
    /// no next prayer can be determined from this schedule.
    #[error("cannot determine next prayer: Fajr time {raw:?} is malformed")]
    Resolution { raw: String },
}
