use anyhow::{Context, Result};
use chrono::Local;

use crate::cli::args::Query;
use crate::models::Prayer;
use crate::provider::ProviderClient;
use crate::schedule::{countdown, resolve_next, PrayerSchedule};
use crate::utils::format::{format_duration, format_time, pad_display};

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const GOLD: &str = "\x1b[38;2;196;160;68m";

/// Presenter-owned schedule decorations, fixed per identifier.
fn emoji(prayer: Prayer) -> &'static str {
    match prayer {
        Prayer::Fajr => "🌅",
        Prayer::Sunrise => "☀️",
        Prayer::Dhuhr => "🌞",
        Prayer::Asr => "🌤️",
        Prayer::Maghrib => "🌅",
        Prayer::Isha => "🌙",
    }
}

const NAME_COLUMN: usize = 12;

// ─── Full schedule ───────────────────────────────────────────────────────────

pub fn handle_times(client: &ProviderClient, query: &Query) -> Result<()> {
    let response = client.timings_by_city(&query.city, &query.country, query.method)?;
    let schedule = PrayerSchedule::from(&response.data.timings);
    let now = Local::now().naive_local();
    let next = resolve_next(&schedule, now).context("Resolving next prayer")?;

    let hijri = &response.data.date.hijri;

    println!();
    println_colored!(GOLD, "  🕌 Prayer Times for {}", query.city);
    println!("  {}", "━".repeat(50));
    println_colored!(
        CYAN,
        "  📅 {} | {} {}, {} AH",
        response.data.date.readable,
        hijri.day,
        hijri.month.en,
        hijri.year
    );
    println!();

    for prayer in Prayer::all() {
        let label = format!("{} {}", emoji(prayer), prayer.display_name());
        let time = schedule.display_time(prayer);
        if prayer == next.prayer {
            println_colored!(GOLD, "  ▶ {} {}", pad_display(&label, NAME_COLUMN), time);
        } else {
            println_colored!(BOLD, "    {} {}", pad_display(&label, NAME_COLUMN), time);
        }
    }

    if let Some(remaining) = countdown(now, next.at) {
        println!();
        println_colored!(RED, "  ⏰ Next prayer in {}", format_duration(remaining));
    }

    println!();
    println!("  {}", "━".repeat(50));
    println_colored!(DIM, "  📍 Method: {}", response.data.meta.method.name);
    println!();
    Ok(())
}

// ─── Next prayer ─────────────────────────────────────────────────────────────

pub fn handle_next(client: &ProviderClient, query: &Query) -> Result<()> {
    let response = client.timings_by_city(&query.city, &query.country, query.method)?;
    let schedule = PrayerSchedule::from(&response.data.timings);
    let now = Local::now().naive_local();
    let next = resolve_next(&schedule, now).context("Resolving next prayer")?;

    println!();
    println_colored!(GOLD, "  🕌 Next Prayer");
    println!("  {}", "━".repeat(30));
    println!();
    println_colored!(
        BOLD,
        "  {} {} at {}",
        emoji(next.prayer),
        next.prayer,
        format_time(next.at)
    );
    println!();

    match countdown(now, next.at) {
        Some(remaining) => println_colored!(RED, "  ⏰ In {}", format_duration(remaining)),
        None => println_colored!(RED, "  🔔 Prayer time has arrived!"),
    }

    println!();
    println_colored!(CYAN, "  📍 {}", query.city);
    println!();
    Ok(())
}
