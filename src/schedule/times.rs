use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::models::Prayer;
use crate::schedule::ScheduleError;

/// Raw time-of-day strings for one day, as supplied by the provider.
/// Entries keep whatever trailing annotation the API appended
/// (e.g. "05:15 (+03)"); parsing strips it.
#[derive(Debug, Clone)]
pub struct PrayerSchedule {
    pub fajr: String,
    pub sunrise: String,
    pub dhuhr: String,
    pub asr: String,
    pub maghrib: String,
    pub isha: String,
}

impl PrayerSchedule {
    pub fn raw(&self, prayer: Prayer) -> &str {
        match prayer {
            Prayer::Fajr => &self.fajr,
            Prayer::Sunrise => &self.sunrise,
            Prayer::Dhuhr => &self.dhuhr,
            Prayer::Asr => &self.asr,
            Prayer::Maghrib => &self.maghrib,
            Prayer::Isha => &self.isha,
        }
    }

    /// The leading "HH:MM" token of an entry, for display.
    pub fn display_time(&self, prayer: Prayer) -> &str {
        let raw = self.raw(prayer);
        raw.split(' ').next().unwrap_or(raw)
    }
}

/// Parse a provider time string onto a calendar date.
///
/// The leading segment must be 24-hour "HH:MM"; anything after the first
/// space (typically a timezone annotation) is discarded unvalidated.
/// Seconds are zero. Pure function of its inputs — no clock access.
pub fn parse_prayer_time(raw: &str, date: NaiveDate) -> Result<NaiveDateTime, ScheduleError> {
    let token = raw.split(' ').next().unwrap_or(raw);
    let time = NaiveTime::parse_from_str(token, "%H:%M").map_err(|_| ScheduleError::Parse {
        raw: raw.to_string(),
    })?;
    Ok(date.and_time(time))
}
