//! Wall-clock access and local-calendar helpers.
//!
//! Everything date-related goes through [`Clock`] so the daily rotation can be
//! driven from a [`ManualClock`] in tests instead of the device clock.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use chrono::{
    DateTime, Datelike, FixedOffset, Local, MappedLocalTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone,
    Utc,
};

/// Source of "now" in the device's local offset.
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;

    /// The first local 00:00 strictly after [`Clock::now`].
    ///
    /// The default keeps the current offset. Clocks that know their time
    /// zone override this so a daylight-saving change lands on the real
    /// midnight.
    fn next_midnight(&self) -> DateTime<FixedOffset> {
        next_local_midnight(&self.now())
    }
}

/// The device clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }

    fn next_midnight(&self) -> DateTime<FixedOffset> {
        next_midnight_in(&self.now(), &Local)
    }
}

/// A settable clock shared between a store, a cookie jar, and a test.
#[derive(Clone, Debug)]
pub struct ManualClock {
    now: Rc<Cell<DateTime<FixedOffset>>>,
    zone: Option<OffsetChange>,
}

impl ManualClock {
    pub fn new(now: DateTime<FixedOffset>) -> Self {
        Self { now: Rc::new(Cell::new(now)), zone: None }
    }

    #[cfg(test)]
    pub fn at(rfc3339: &str) -> Self {
        Self::new(DateTime::parse_from_rfc3339(rfc3339).expect("valid rfc3339 timestamp"))
    }

    /// Report local time in `zone` instead of the offset `now` was set with.
    #[must_use]
    pub fn in_zone(mut self, zone: OffsetChange) -> Self {
        self.zone = Some(zone);
        self
    }

    pub fn set(&self, now: DateTime<FixedOffset>) {
        self.now.set(now);
    }

    pub fn advance(&self, by: Duration) {
        let step = chrono::Duration::from_std(by).unwrap_or(chrono::Duration::zero());
        self.now.set(self.now.get() + step);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<FixedOffset> {
        let now = self.now.get();
        match &self.zone {
            Some(zone) => now.with_timezone(zone).fixed_offset(),
            None => now,
        }
    }

    fn next_midnight(&self) -> DateTime<FixedOffset> {
        match &self.zone {
            Some(zone) => next_midnight_in(&self.now(), zone),
            None => next_local_midnight(&self.now()),
        }
    }
}

/// A zone whose offset switches once, at `at`, from `before` to `after`.
///
/// Models a single daylight-saving transition without a tz database.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OffsetChange {
    pub at: DateTime<Utc>,
    pub before: FixedOffset,
    pub after: FixedOffset,
}

impl OffsetChange {
    fn offset_at(&self, utc: &NaiveDateTime) -> FixedOffset {
        if *utc < self.at.naive_utc() { self.before } else { self.after }
    }

    /// `local` read in `offset`, if that offset is in effect at that instant.
    fn valid_in(&self, local: &NaiveDateTime, offset: FixedOffset) -> Option<FixedOffset> {
        let utc = local.checked_sub_signed(TimeDelta::seconds(i64::from(offset.local_minus_utc())))?;
        (self.offset_at(&utc) == offset).then_some(offset)
    }
}

impl TimeZone for OffsetChange {
    type Offset = FixedOffset;

    fn from_offset(offset: &FixedOffset) -> Self {
        Self { at: DateTime::<Utc>::MAX_UTC, before: *offset, after: *offset }
    }

    fn offset_from_local_date(&self, local: &NaiveDate) -> MappedLocalTime<FixedOffset> {
        self.offset_from_local_datetime(&local.and_time(NaiveTime::MIN))
    }

    fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> MappedLocalTime<FixedOffset> {
        let earlier = self.valid_in(local, self.before);
        let later = if self.after == self.before { None } else { self.valid_in(local, self.after) };
        match (earlier, later) {
            (Some(a), Some(b)) => MappedLocalTime::Ambiguous(a, b),
            (Some(o), None) | (None, Some(o)) => MappedLocalTime::Single(o),
            (None, None) => MappedLocalTime::None,
        }
    }

    fn offset_from_utc_date(&self, utc: &NaiveDate) -> FixedOffset {
        self.offset_at(&utc.and_time(NaiveTime::MIN))
    }

    fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
        self.offset_at(utc)
    }
}

/// `YYYY-MM-DD` from the local calendar fields of `date`.
pub fn today_local_key<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// The first 00:00 strictly after `now`, keeping the offset of `now`.
///
/// Only correct when the offset does not change before midnight; use
/// [`next_midnight_in`] when the zone is known.
pub fn next_local_midnight(now: &DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    let tomorrow = now
        .date_naive()
        .succ_opt()
        .unwrap_or(now.date_naive())
        .and_time(NaiveTime::MIN);
    tomorrow
        .and_local_timezone(*now.offset())
        .single()
        .unwrap_or(*now)
}

/// The first 00:00 on the calendar of `zone` strictly after `now`.
///
/// Tomorrow's offset is looked up in `zone`, so the result is the real
/// midnight even across a daylight-saving change. If midnight itself is
/// skipped by the zone, the offset of `now` is kept.
pub fn next_midnight_in<Tz: TimeZone>(now: &DateTime<FixedOffset>, zone: &Tz) -> DateTime<FixedOffset> {
    let local = now.with_timezone(zone);
    let tomorrow = local
        .date_naive()
        .succ_opt()
        .unwrap_or(local.date_naive())
        .and_time(NaiveTime::MIN);
    match tomorrow.and_local_timezone(zone.clone()).earliest() {
        Some(midnight) => midnight.fixed_offset(),
        None => next_local_midnight(&local.fixed_offset()),
    }
}

/// Non-negative delay from `now` until `midnight`.
pub fn delay_until(now: &DateTime<FixedOffset>, midnight: &DateTime<FixedOffset>) -> Duration {
    (*midnight - *now).to_std().unwrap_or(Duration::ZERO)
}

/// Non-negative delay from `now` until [`next_local_midnight`].
pub fn until_next_midnight(now: &DateTime<FixedOffset>) -> Duration {
    delay_until(now, &next_local_midnight(now))
}
