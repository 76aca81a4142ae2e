//! Quote screen controller: startup, midnight rollover, and the two toggles.

#[cfg(test)]
#[path = "quote_test.rs"]
mod quote_test;

use std::time::Duration;

use rand::Rng;

use crate::config::ScreenConfig;
use crate::error::{PreloadError, StorageError};
use crate::state::{ScreenState, Viewport, font_size_px};
use crate::storage::{Clock, CookieJar, DailyQuote, PreferenceStore};

/// Source of the daily quote index.
pub trait IndexSource {
    /// An index in `[0, len)`. Only called with `len > 0`.
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform pick from the thread-local RNG.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomIndex;

impl IndexSource for RandomIndex {
    fn pick(&mut self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Owns the live [`ScreenState`] and keeps it in step with the store.
pub struct QuoteController<J, C> {
    store: PreferenceStore<J, C>,
    picker: Box<dyn IndexSource>,
    config: ScreenConfig,
    state: ScreenState,
    observer: Option<Box<dyn Fn(&ScreenState)>>,
    started: bool,
}

impl<J: CookieJar, C: Clock> QuoteController<J, C> {
    pub fn new(store: PreferenceStore<J, C>, picker: impl IndexSource + 'static, config: ScreenConfig) -> Self {
        let state = ScreenState {
            font_size_px: config.max_font_px,
            ..ScreenState::default()
        };
        Self {
            store,
            picker: Box::new(picker),
            config,
            state,
            observer: None,
            started: false,
        }
    }

    /// Called with the new state after every change.
    pub fn on_change(&mut self, observer: impl Fn(&ScreenState) + 'static) {
        self.observer = Some(Box::new(observer));
    }

    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    pub fn store(&self) -> &PreferenceStore<J, C> {
        &self.store
    }

    pub fn config(&self) -> &ScreenConfig {
        &self.config
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn until_next_midnight(&self) -> Duration {
        self.store.until_next_midnight()
    }

    /// Load preferences and resolve today's quote. Runs once; later calls
    /// return `false` and change nothing.
    pub fn start(&mut self) -> bool {
        if self.started {
            log::debug!("quote screen already started");
            return false;
        }
        self.started = true;

        let theme = self.store.read_theme();
        let language = self.store.read_language();
        let count = self.state.quotes.len();

        let index = match self.store.read_today().filter(|daily| daily.index < count) {
            Some(daily) => {
                log::debug!("reusing daily quote {} for {}", daily.index, daily.date);
                daily.index
            }
            None => {
                let index = self.pick_index();
                let daily = DailyQuote { date: self.store.today_key(), index, language };
                log::info!("picked daily quote {index} for {}", daily.date);
                report("daily quote", self.store.write_daily(&daily));
                index
            }
        };

        self.state.theme = theme;
        self.state.language = language;
        self.state.quote_index = index;
        self.notify();
        true
    }

    /// Local midnight passed: drop yesterday's record and pick a new quote.
    pub fn rollover(&mut self) {
        report("daily quote clear", self.store.clear_daily());

        let index = self.pick_index();
        let language = self.store.read_language();
        let daily = DailyQuote { date: self.store.today_key(), index, language };
        log::info!("midnight rollover: daily quote {index} for {}", daily.date);

        self.state.quote_index = index;
        self.state.language = language;
        report("daily quote", self.store.write_daily(&daily));
        self.notify();
    }

    pub fn toggle_theme(&mut self) {
        let next = self.state.theme.toggled();
        self.state.theme = next;
        report("theme", self.store.write_theme(next));
        self.notify();
    }

    /// Flip the language. Today's record, if any, is re-tagged with the new
    /// language; its date and index stay as they are.
    pub fn toggle_language(&mut self) {
        let next = self.state.language.toggled();
        self.state.language = next;
        report("language", self.store.write_language(next));

        if let Some(daily) = self.store.read_today() {
            report("daily quote", self.store.write_daily(&DailyQuote { language: next, ..daily }));
        }
        self.notify();
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.state.portrait = viewport.is_portrait();
        self.state.font_size_px =
            font_size_px(viewport.height, self.config.max_font_px, self.config.font_height_percent);
        self.notify();
    }

    pub fn reveal_logo(&mut self) {
        self.state.show_logo = true;
        self.notify();
    }

    /// Every preload finished. Failures are logged; the screen renders anyway.
    pub fn images_settled(&mut self, failures: &[PreloadError]) {
        for failure in failures {
            log::warn!("{failure}");
        }
        self.state.images_ready = true;
        self.notify();
    }

    fn pick_index(&mut self) -> usize {
        let count = self.state.quotes.len();
        if count == 0 {
            return 0;
        }
        self.picker.pick(count).min(count - 1)
    }

    fn notify(&self) {
        if let Some(observer) = &self.observer {
            observer(&self.state);
        }
    }
}

fn report(what: &str, result: Result<(), StorageError>) {
    if let Err(e) = result {
        log::warn!("failed to persist {what}: {e}");
    }
}
