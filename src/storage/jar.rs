//! Cookie jar backends.
//!
//! [`CookieJar`] mirrors the two halves of `document.cookie`: reading the
//! `a=1; b=2` string of live cookies and assigning one `name=value; attrs`
//! cookie at a time. The browser backend is gated behind `csr`.

#[cfg(test)]
#[path = "jar_test.rs"]
mod jar_test;

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, FixedOffset};

use super::clock::Clock;
use crate::error::StorageError;

/// Ambient cookie storage.
pub trait CookieJar {
    /// All live cookies as a `document.cookie` string.
    fn cookie_string(&self) -> Result<String, StorageError>;

    /// Assign a single cookie (`name=value; expires=...; path=/; ...`).
    fn set_cookie(&self, cookie: &str) -> Result<(), StorageError>;
}

#[derive(Clone, Debug)]
struct StoredCookie {
    name: String,
    value: String,
    expires: Option<DateTime<FixedOffset>>,
}

/// In-memory jar that honours `expires` against a [`Clock`].
///
/// Used for native builds and tests. Clones share the same cookies.
#[derive(Clone)]
pub struct MemoryCookieJar<C> {
    clock: C,
    cookies: Rc<RefCell<Vec<StoredCookie>>>,
}

impl<C: Clock> MemoryCookieJar<C> {
    pub fn new(clock: C) -> Self {
        Self { clock, cookies: Rc::new(RefCell::new(Vec::new())) }
    }

    /// Number of cookies not yet expired.
    pub fn live_count(&self) -> usize {
        let now = self.clock.now();
        self.cookies.borrow().iter().filter(|c| is_live(c, &now)).count()
    }

    /// Place a cookie without going through `set_cookie`, e.g. to seed a
    /// malformed value. `value` is stored as given (already encoded).
    pub fn insert_raw(&self, name: &str, value: &str) {
        self.upsert(StoredCookie { name: name.to_owned(), value: value.to_owned(), expires: None });
    }

    fn upsert(&self, cookie: StoredCookie) {
        let mut cookies = self.cookies.borrow_mut();
        if let Some(existing) = cookies.iter_mut().find(|c| c.name == cookie.name) {
            *existing = cookie;
        } else {
            cookies.push(cookie);
        }
    }
}

fn is_live(cookie: &StoredCookie, now: &DateTime<FixedOffset>) -> bool {
    cookie.expires.is_none_or(|at| at > *now)
}

impl<C: Clock> CookieJar for MemoryCookieJar<C> {
    fn cookie_string(&self) -> Result<String, StorageError> {
        let now = self.clock.now();
        let cookies = self.cookies.borrow();
        let pairs: Vec<String> = cookies
            .iter()
            .filter(|c| is_live(c, &now))
            .map(|c| format!("{}={}", c.name, c.value))
            .collect();
        Ok(pairs.join("; "))
    }

    fn set_cookie(&self, cookie: &str) -> Result<(), StorageError> {
        let mut parts = cookie.split(';').map(str::trim);
        let (name, value) = parts
            .next()
            .and_then(|pair| pair.split_once('='))
            .ok_or_else(|| StorageError::Rejected(format!("missing name=value in {cookie:?}")))?;

        let mut expires = None;
        for attr in parts {
            if let Some((key, raw)) = attr.split_once('=') {
                if key.eq_ignore_ascii_case("expires") {
                    let parsed = DateTime::parse_from_rfc2822(&raw.replace("GMT", "+0000"))
                        .map_err(|e| StorageError::Rejected(format!("bad expires {raw:?}: {e}")))?;
                    expires = Some(parsed);
                }
            }
        }

        self.upsert(StoredCookie { name: name.to_owned(), value: value.to_owned(), expires });
        Ok(())
    }
}

/// The page's real `document.cookie`.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentCookieJar;

#[cfg(feature = "csr")]
impl DocumentCookieJar {
    fn document() -> Result<web_sys::HtmlDocument, StorageError> {
        use wasm_bindgen::JsCast;

        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
            .ok_or(StorageError::Unavailable)
    }
}

#[cfg(feature = "csr")]
impl CookieJar for DocumentCookieJar {
    fn cookie_string(&self) -> Result<String, StorageError> {
        Self::document()?
            .cookie()
            .map_err(|e| StorageError::Rejected(format!("{e:?}")))
    }

    fn set_cookie(&self, cookie: &str) -> Result<(), StorageError> {
        Self::document()?
            .set_cookie(cookie)
            .map_err(|e| StorageError::Rejected(format!("{e:?}")))
    }
}
