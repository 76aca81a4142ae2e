//! Cookie-backed persistence of the screen's preferences.
//!
//! DESIGN
//! ======
//! The ambient cookie jar and clock are injected (`CookieJar`, `Clock`) so
//! the same [`PreferenceStore`] runs against `document.cookie` in the browser
//! and against [`MemoryCookieJar`] + [`ManualClock`] natively.

pub mod clock;
pub mod cookie;
pub mod jar;
pub mod prefs;

pub use clock::{Clock, ManualClock, OffsetChange, SystemClock, next_local_midnight, next_midnight_in, today_local_key};
#[cfg(feature = "csr")]
pub use jar::DocumentCookieJar;
pub use jar::{CookieJar, MemoryCookieJar};
pub use prefs::{DailyQuote, Language, PreferenceStore, Theme, keys};
