//! Station clock payloads.
//!
//! Firmware revisions disagree on how the clock is laid out, so a payload is
//! tried against several candidate layouts in a fixed order and the first
//! plausible reading wins:
//!
//! 1. Seven bytes: `u24` seconds of day, year offset (`u16` LE, else BE),
//!    month, day. Month and day may be BCD-swapped or stored the other way
//!    round; if neither is plausible only the time of day is reported.
//! 2. Seven bytes, older revision: `u16` seconds of day, year offset (BE),
//!    month, day.
//! 3. Seven or more bytes: `u16` LE year, month, day, hour, minute, second.
//! 4. Six or more bytes, all BCD: year offset, month, day, hour, minute,
//!    second.

use serde::Serialize;

const SECONDS_PER_DAY: u32 = 86_400;
const MAX_YEAR_OFFSET: u16 = 99;
const BASE_YEAR: u16 = 2000;

/// Result of interpreting a clock payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DateTimeReading {
    /// A complete calendar timestamp.
    Full {
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    },
    /// Time of day with a plausible year but no plausible date.
    TimeOnly {
        seconds_of_day: u32,
        year: u16,
        month: Option<u8>,
        day: Option<u8>,
    },
    /// No layout matched.
    Unrecognized,
}

impl DateTimeReading {
    /// `YYYY-MM-DD HH:MM:SS` for full readings.
    pub fn iso(&self) -> Option<String> {
        match *self {
            DateTimeReading::Full {
                year,
                month,
                day,
                hour,
                minute,
                second,
            } => Some(format!(
                "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
                year, month, day, hour, minute, second
            )),
            _ => None,
        }
    }
}

/// Interpret a clock payload.
pub fn parse(data: &[u8]) -> DateTimeReading {
    if data.len() == 7 {
        if let Some(reading) = seconds_of_day_layout(data) {
            return reading;
        }
        if let Some(reading) = legacy_layout(data) {
            return reading;
        }
    }
    if let Some(reading) = calendar_layout(data) {
        return reading;
    }
    if let Some(reading) = bcd_layout(data) {
        return reading;
    }
    DateTimeReading::Unrecognized
}

fn seconds_of_day_layout(d: &[u8]) -> Option<DateTimeReading> {
    let sod = u32::from(d[0]) | u32::from(d[1]) << 8 | u32::from(d[2]) << 16;
    if sod >= SECONDS_PER_DAY {
        return None;
    }
    let le = u16::from_le_bytes([d[3], d[4]]);
    let be = u16::from_be_bytes([d[3], d[4]]);
    let offset = [le, be].into_iter().find(|y| *y <= MAX_YEAR_OFFSET)?;
    let year = BASE_YEAR + offset;

    if let (Some(month), Some(day)) = (month_byte(d[5]), day_byte(d[6])) {
        return Some(full_from_sod(year, month, day, sod));
    }
    // Some revisions store the day first.
    if let (Some(month), Some(day)) = (month_byte(d[6]), day_byte(d[5])) {
        return Some(full_from_sod(year, month, day, sod));
    }
    Some(DateTimeReading::TimeOnly {
        seconds_of_day: sod,
        year,
        month: month_byte(d[5]),
        day: day_byte(d[6]),
    })
}

fn legacy_layout(d: &[u8]) -> Option<DateTimeReading> {
    let sod = u32::from(u16::from_le_bytes([d[0], d[1]]));
    let offset = u16::from_be_bytes([d[2], d[3]]);
    if offset > MAX_YEAR_OFFSET {
        return None;
    }
    let year = BASE_YEAR + offset;
    let month = month_byte(d[4]);
    let day = day_byte(d[5]);
    Some(match (month, day) {
        (Some(month), Some(day)) => full_from_sod(year, month, day, sod),
        _ => DateTimeReading::TimeOnly {
            seconds_of_day: sod,
            year,
            month,
            day,
        },
    })
}

fn calendar_layout(d: &[u8]) -> Option<DateTimeReading> {
    if d.len() < 7 {
        return None;
    }
    let year = u16::from_le_bytes([d[0], d[1]]);
    if !(BASE_YEAR..=BASE_YEAR + MAX_YEAR_OFFSET).contains(&year) {
        return None;
    }
    checked_full(year, d[2], d[3], d[4], d[5], d[6])
}

fn bcd_layout(d: &[u8]) -> Option<DateTimeReading> {
    let fields = d.get(..6)?;
    if !fields.iter().all(|b| is_bcd(*b)) {
        return None;
    }
    let v: Vec<u8> = fields.iter().map(|b| bcd(*b)).collect();
    checked_full(BASE_YEAR + u16::from(v[0]), v[1], v[2], v[3], v[4], v[5])
}

fn checked_full(
    year: u16,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
) -> Option<DateTimeReading> {
    let plausible = (1..=12).contains(&month)
        && (1..=31).contains(&day)
        && hour <= 23
        && minute <= 59
        && second <= 59;
    plausible.then_some(DateTimeReading::Full {
        year,
        month,
        day,
        hour,
        minute,
        second,
    })
}

fn full_from_sod(year: u16, month: u8, day: u8, sod: u32) -> DateTimeReading {
    DateTimeReading::Full {
        year,
        month,
        day,
        hour: (sod / 3600) as u8,
        minute: (sod % 3600 / 60) as u8,
        second: (sod % 60) as u8,
    }
}

/// Month taken either directly or as a nibble-swapped BCD byte.
fn month_byte(b: u8) -> Option<u8> {
    in_range(b, 12)
}

fn day_byte(b: u8) -> Option<u8> {
    in_range(b, 31)
}

fn in_range(b: u8, max: u8) -> Option<u8> {
    if (1..=max).contains(&b) {
        return Some(b);
    }
    bcd_swap(b).filter(|v| (1..=max).contains(v))
}

fn is_bcd(b: u8) -> bool {
    b >> 4 <= 9 && b & 0x0F <= 9
}

fn bcd(b: u8) -> u8 {
    (b >> 4) * 10 + (b & 0x0F)
}

/// BCD read with the nibbles swapped: `0x21` → 12.
fn bcd_swap(b: u8) -> Option<u8> {
    is_bcd(b).then(|| (b & 0x0F) * 10 + (b >> 4))
}
