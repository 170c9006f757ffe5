//! Indonesian (`id-ID`) presentation helpers shared by every template.

use chrono::{DateTime, Datelike, NaiveDateTime, TimeDelta, Timelike, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

const WEEKDAYS: [&str; 7] = ["Minggu", "Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu"];

const MONTHS: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Western Indonesia Time is a fixed UTC+7 with no daylight saving.
const WIB_OFFSET_HOURS: i64 = 7;

/// Format a currency amount with `.` thousands separators and no decimals.
///
/// Fractions are rounded half away from zero: `15000.5` becomes `15.001`.
pub fn format_rupiah(amount: Decimal) -> String {
    let rounded = amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

/// Customer-facing order reference: first eight characters, upper-cased.
pub fn short_order_id(order_id: &str) -> String {
    order_id.chars().take(8).collect::<String>().to_uppercase()
}

/// Wall-clock time in Western Indonesia Time.
pub fn to_wib(at: DateTime<Utc>) -> NaiveDateTime {
    at.naive_utc() + TimeDelta::hours(WIB_OFFSET_HOURS)
}

/// Current wall-clock time in Western Indonesia Time.
pub fn now_wib() -> NaiveDateTime {
    to_wib(Utc::now())
}

/// `Jumat, 16 Oktober 2026`
pub fn format_long_date(at: NaiveDateTime) -> String {
    format!(
        "{}, {} {} {}",
        WEEKDAYS[at.weekday().num_days_from_sunday() as usize],
        at.day(),
        MONTHS[at.month0() as usize],
        at.year()
    )
}

/// `Jumat, 16 Oktober 2026 pukul 09.05`
pub fn format_long_datetime(at: NaiveDateTime) -> String {
    format!(
        "{} pukul {:02}.{:02}",
        format_long_date(at),
        at.hour(),
        at.minute()
    )
}

/// `16/10/2026, 09.05.07`
pub fn format_short_datetime(at: NaiveDateTime) -> String {
    format!(
        "{}/{}/{}, {:02}.{:02}.{:02}",
        at.day(),
        at.month(),
        at.year(),
        at.hour(),
        at.minute(),
        at.second()
    )
}
