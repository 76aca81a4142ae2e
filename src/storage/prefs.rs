//! Typed preference store over a [`CookieJar`].
//!
//! DESIGN
//! ======
//! Three keys, three expiry policies:
//!
//! - `inspiTap.dailyQuote`: JSON record, expires at the next local midnight.
//! - `inspiTap.language`: `english` | `spanish`, one year.
//! - `inspiTap.theme`: `dark` | `light`, one year.
//!
//! There is no cache. Every read goes back to the jar, so a value changed by
//! another tab is picked up on the next read. Reads never fail; anything
//! missing or unparsable falls back to the documented default. Writes return
//! `Result` so the caller decides how loudly to report a failure.

#[cfg(test)]
#[path = "prefs_test.rs"]
mod prefs_test;

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Deserializer, Serialize, de};

use super::clock::{self, Clock};
use super::cookie;
use super::jar::CookieJar;
use crate::error::StorageError;

/// Cookie names.
pub mod keys {
    pub const DAILY: &str = "inspiTap.dailyQuote";
    pub const LANGUAGE: &str = "inspiTap.language";
    pub const THEME: &str = "inspiTap.theme";
}

/// Lifetime of the language and theme cookies.
pub const PREFERENCE_TTL: Duration = Duration::from_secs(365 * 24 * 3600);

/// Display language of the quote.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Spanish,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Spanish => "spanish",
        }
    }

    /// Parse a stored value. Anything unrecognized is the default.
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("spanish") => Self::Spanish,
            _ => Self::English,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::English => Self::Spanish,
            Self::Spanish => Self::English,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Color theme of the screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Parse a stored value. Anything unrecognized is the default.
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which quote is shown on a given local calendar day.
///
/// `language` records the language active when the record was last written.
/// It is informational: the display language comes from the separate
/// language preference.
///
/// `index` is written as a JSON integer. On read, an integral float such as
/// `3.0` is accepted too; fractional or negative values are not.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyQuote {
    pub date: String,
    #[serde(deserialize_with = "integral_index")]
    pub index: usize,
    #[serde(default)]
    pub language: Language,
}

/// Largest integer a JSON number holds exactly as an `f64`.
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_991.0;

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn integral_index<'de, D: Deserializer<'de>>(deserializer: D) -> Result<usize, D::Error> {
    let number = serde_json::Number::deserialize(deserializer)?;
    if let Some(index) = number.as_u64() {
        return usize::try_from(index).map_err(de::Error::custom);
    }
    match number.as_f64() {
        Some(f) if f >= 0.0 && f.fract() == 0.0 && f <= MAX_EXACT_FLOAT => Ok(f as usize),
        _ => Err(de::Error::custom(format!("index {number} is not a non-negative integer"))),
    }
}

/// Cookie-backed preference store.
pub struct PreferenceStore<J, C> {
    jar: J,
    clock: C,
}

impl<J: CookieJar, C: Clock> PreferenceStore<J, C> {
    pub fn new(jar: J, clock: C) -> Self {
        Self { jar, clock }
    }

    /// Today's `YYYY-MM-DD` key in local time.
    pub fn today_key(&self) -> String {
        clock::today_local_key(&self.clock.now())
    }

    /// The next local midnight after now, in the clock's own zone.
    pub fn next_midnight(&self) -> DateTime<FixedOffset> {
        self.clock.next_midnight()
    }

    /// Delay until the next local midnight, never negative.
    pub fn until_next_midnight(&self) -> Duration {
        clock::delay_until(&self.clock.now(), &self.clock.next_midnight())
    }

    // ---------- Daily quote ----------

    /// The stored daily record, or `None` when missing or malformed.
    pub fn read_daily(&self) -> Option<DailyQuote> {
        let raw = self.read(keys::DAILY)?;
        if raw.is_empty() {
            return None;
        }
        match serde_json::from_str(&raw) {
            Ok(daily) => Some(daily),
            Err(e) => {
                log::debug!("ignoring malformed daily record: {e}");
                None
            }
        }
    }

    /// The stored daily record only if it belongs to today.
    pub fn read_today(&self) -> Option<DailyQuote> {
        let today = self.today_key();
        self.read_daily().filter(|daily| daily.date == today)
    }

    /// Persist the daily record until the next local midnight.
    pub fn write_daily(&self, daily: &DailyQuote) -> Result<(), StorageError> {
        let json = serde_json::to_string(daily)?;
        self.write(keys::DAILY, &json, &self.next_midnight())
    }

    /// Expire the daily record immediately.
    pub fn clear_daily(&self) -> Result<(), StorageError> {
        self.write(keys::DAILY, "", &DateTime::<Utc>::UNIX_EPOCH.fixed_offset())
    }

    // ---------- Language ----------

    pub fn read_language(&self) -> Language {
        Language::from_stored(self.read(keys::LANGUAGE).as_deref())
    }

    pub fn write_language(&self, language: Language) -> Result<(), StorageError> {
        self.write(keys::LANGUAGE, language.as_str(), &self.one_year_out())
    }

    // ---------- Theme ----------

    pub fn read_theme(&self) -> Theme {
        Theme::from_stored(self.read(keys::THEME).as_deref())
    }

    pub fn write_theme(&self, theme: Theme) -> Result<(), StorageError> {
        self.write(keys::THEME, theme.as_str(), &self.one_year_out())
    }

    fn one_year_out(&self) -> DateTime<FixedOffset> {
        let ttl = chrono::Duration::from_std(PREFERENCE_TTL).unwrap_or(chrono::Duration::zero());
        self.clock.now() + ttl
    }

    fn read(&self, name: &str) -> Option<String> {
        match self.jar.cookie_string() {
            Ok(cookies) => cookie::find(&cookies, name),
            Err(e) => {
                log::debug!("cookie read of {name} failed: {e}");
                None
            }
        }
    }

    fn write(&self, name: &str, value: &str, expires: &DateTime<FixedOffset>) -> Result<(), StorageError> {
        self.jar.set_cookie(&cookie::format_set_cookie(name, value, expires))
    }
}
