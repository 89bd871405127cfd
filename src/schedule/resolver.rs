use chrono::{Duration, NaiveDateTime};

use crate::models::Prayer;
use crate::schedule::times::{parse_prayer_time, PrayerSchedule};
use crate::schedule::ScheduleError;

/// A resolved next prayer: which one, and the instant it starts.
/// Anchored to today or, after rollover, tomorrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextPrayer {
    pub prayer: Prayer,
    pub at: NaiveDateTime,
}

/// Find the next upcoming prayer relative to `now`.
///
/// Walks the five obligatory prayers in chronological order, skipping
/// entries that fail to parse, and returns the first whose instant is
/// strictly after `now` — an instant equal to `now` counts as passed.
/// When all of today's prayers have passed, rolls over to tomorrow's
/// Fajr. `now` is injected by the caller; resolution never reads the
/// wall clock.
pub fn resolve_next(
    schedule: &PrayerSchedule,
    now: NaiveDateTime,
) -> Result<NextPrayer, ScheduleError> {
    let today = now.date();

    for prayer in Prayer::obligatory() {
        let Ok(at) = parse_prayer_time(schedule.raw(prayer), today) else {
            continue;
        };
        if now < at {
            return Ok(NextPrayer { prayer, at });
        }
    }

    // All passed — roll over to tomorrow's Fajr. If Fajr itself is
    // malformed there is nothing left to resolve.
    let tomorrow = today.succ_opt().unwrap_or(today);
    let at =
        parse_prayer_time(schedule.raw(Prayer::Fajr), tomorrow).map_err(|_| {
            ScheduleError::Resolution {
                raw: schedule.raw(Prayer::Fajr).to_string(),
            }
        })?;
    Ok(NextPrayer {
        prayer: Prayer::Fajr,
        at,
    })
}

/// Time remaining until `at`, or `None` when it is not strictly in the
/// future. Callers print an "arrived" message instead of a countdown
/// when this is `None`.
pub fn countdown(now: NaiveDateTime, at: NaiveDateTime) -> Option<Duration> {
    let remaining = at.signed_duration_since(now);
    (remaining > Duration::zero()).then_some(remaining)
}
