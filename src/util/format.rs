//! Display values derived from a weather snapshot.
//!
//! None of these are stored; the dashboard recomputes them on render.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, FixedOffset};

const HPA_TO_MMHG: f64 = 0.750_062;

/// Eight 45° compass sectors centred on the cardinal and intercardinal points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Compass {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Compass {
    const SECTORS: [Self; 8] = [
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
    ];

    /// Sector index `round(deg / 45) mod 8`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_degrees(deg: f64) -> Self {
        let index = js_round(deg / 45.0).rem_euclid(8);
        Self::SECTORS[index as usize]
    }

    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::North => "N",
            Self::NorthEast => "NE",
            Self::East => "E",
            Self::SouthEast => "SE",
            Self::South => "S",
            Self::SouthWest => "SW",
            Self::West => "W",
            Self::NorthWest => "NW",
        }
    }
}

/// Round half up, matching JavaScript `Math.round` (`-0.5` → `0`).
///
/// `f64::round` already agrees everywhere except exact negative halves,
/// which it rounds away from zero.
#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
pub fn js_round(value: f64) -> i64 {
    let rounded = value.round();
    if rounded - value == -0.5 {
        (rounded + 1.0) as i64
    } else {
        rounded as i64
    }
}

/// `21.4` → `"21°C"`.
pub fn temperature(celsius: f64) -> String {
    format!("{}°C", js_round(celsius))
}

/// Hectopascals to whole millimetres of mercury.
pub fn pressure_mmhg(hpa: f64) -> i64 {
    js_round(hpa * HPA_TO_MMHG)
}

/// Metres to kilometres with one decimal, `10000` → `"10.0"`.
pub fn visibility_km(metres: f64) -> String {
    format!("{:.1}", metres / 1000.0)
}

/// Local `HH:MM` of a unix timestamp at the location's UTC offset.
///
/// Returns `None` for an out-of-range offset or timestamp.
pub fn local_time(timestamp: i64, utc_offset_secs: i32) -> Option<String> {
    let offset = FixedOffset::east_opt(utc_offset_secs)?;
    let instant = DateTime::from_timestamp(timestamp, 0)?;
    Some(instant.with_timezone(&offset).format("%H:%M").to_string())
}
