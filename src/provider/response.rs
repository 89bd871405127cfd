#![allow(dead_code)]
use serde::Deserialize;

use crate::schedule::PrayerSchedule;

/// Top-level body of `GET /v1/timingsByCity` on api.aladhan.com.
/// Unknown fields are ignored; only what the tool renders is modeled.
#[derive(Debug, Deserialize)]
pub struct TimingsResponse {
    pub code: u32,
    pub status: String,
    pub data: TimingsData,
}

#[derive(Debug, Deserialize)]
pub struct TimingsData {
    pub timings: Timings,
    pub date: ApiDate,
    pub meta: Meta,
}

/// Raw "HH:MM" strings. The API appends a timezone annotation when asked
/// for one; entries are passed through verbatim and parsed downstream.
/// Sunset is carried on the wire but is not a schedule entry.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Timings {
    pub fajr: String,
    pub sunrise: String,
    pub dhuhr: String,
    pub asr: String,
    pub sunset: String,
    pub maghrib: String,
    pub isha: String,
}

impl From<&Timings> for PrayerSchedule {
    fn from(t: &Timings) -> Self {
        PrayerSchedule {
            fajr: t.fajr.clone(),
            sunrise: t.sunrise.clone(),
            dhuhr: t.dhuhr.clone(),
            asr: t.asr.clone(),
            maghrib: t.maghrib.clone(),
            isha: t.isha.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ApiDate {
    pub readable: String,
    pub hijri: Hijri,
}

#[derive(Debug, Deserialize)]
pub struct Hijri {
    pub date: String,
    pub day: String,
    pub weekday: Weekday,
    pub month: HijriMonth,
    pub year: String,
}

#[derive(Debug, Deserialize)]
pub struct Weekday {
    pub en: String,
    pub ar: String,
}

#[derive(Debug, Deserialize)]
pub struct HijriMonth {
    pub number: u32,
    pub en: String,
    pub ar: String,
}

#[derive(Debug, Deserialize)]
pub struct Meta {
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
    pub method: MethodInfo,
}

#[derive(Debug, Deserialize)]
pub struct MethodInfo {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub params: serde_json::Value,
}
