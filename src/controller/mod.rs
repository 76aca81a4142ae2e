//! Presentation controller for the quote screen.
//!
//! DESIGN
//! ======
//! `QuoteController` is plain Rust over the preference store; it knows
//! nothing about timers or the DOM. `mount` attaches it to a `Host`
//! (timers, resize, scroll lock, image preloads) and returns a `Mount` whose
//! teardown cancels every registration. `BrowserHost` is the `csr` host;
//! tests drive a recording fake.

#[cfg(feature = "csr")]
pub mod browser;
pub mod host;
pub mod mount;
pub mod quote;

#[cfg(feature = "csr")]
pub use browser::BrowserHost;
pub use host::{Host, TaskHandle};
pub use mount::{Mount, mount};
pub use quote::{IndexSource, QuoteController, RandomIndex};
