#[cfg(test)]
#[path = "screen_test.rs"]
mod screen_test;

use crate::config;
use crate::quotes::{QUOTES, Quote, QuoteEntry, quote_at};
use crate::storage::{Language, Theme};

/// Inner window size in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_portrait(self) -> bool {
        self.height > self.width
    }
}

/// `min(max_px, height * percent / 100)`.
pub fn font_size_px(height: f64, max_px: f64, percent: f64) -> f64 {
    (height * percent / 100.0).min(max_px)
}

/// Live render state of the quote screen.
///
/// The displayed quote is not stored: [`ScreenState::quote`] derives it from
/// `quote_index` and `language`, so the two can never disagree.
#[derive(Clone, Debug, PartialEq)]
pub struct ScreenState {
    pub quotes: &'static [QuoteEntry],
    pub quote_index: usize,
    pub language: Language,
    pub theme: Theme,
    pub show_logo: bool,
    pub font_size_px: f64,
    pub portrait: bool,
    pub images_ready: bool,
}

impl Default for ScreenState {
    fn default() -> Self {
        Self {
            quotes: QUOTES,
            quote_index: 0,
            language: Language::default(),
            theme: Theme::default(),
            show_logo: false,
            font_size_px: config::DEFAULT_MAX_FONT_PX,
            portrait: false,
            images_ready: false,
        }
    }
}

impl ScreenState {
    pub fn quote(&self) -> Quote {
        quote_at(self.quotes, self.quote_index, self.language)
    }

    pub fn font_size_css(&self) -> String {
        format!("{}px", self.font_size_px)
    }

    pub fn background_image(&self) -> &'static str {
        match (self.theme, self.portrait) {
            (Theme::Dark, true) => config::BG_DARK_PORTRAIT,
            (Theme::Light, true) => config::BG_LIGHT_PORTRAIT,
            (Theme::Dark, false) => config::BG_DARK_LANDSCAPE,
            (Theme::Light, false) => config::BG_LIGHT_LANDSCAPE,
        }
    }

    pub fn logo_image(&self) -> &'static str {
        if self.theme.is_dark() { config::LOGO_ON_DARK } else { config::LOGO_ON_LIGHT }
    }

    pub fn flag_image(&self) -> &'static str {
        match self.language {
            Language::English => config::FLAG_ENGLISH,
            Language::Spanish => config::FLAG_SPANISH,
        }
    }

    pub fn foreground(&self) -> &'static str {
        if self.theme.is_dark() { "white" } else { "black" }
    }

    pub fn text_shadow(&self) -> &'static str {
        if self.theme.is_dark() { "2px 2px 4px black" } else { "2px 2px 4px white" }
    }

    /// Translucent chip behind the toggle buttons.
    pub fn chip_background(&self) -> &'static str {
        if self.theme.is_dark() { "rgba(255, 255, 255, 0.2)" } else { "rgba(0, 0, 0, 0.1)" }
    }

    pub fn track_background(&self) -> &'static str {
        if self.theme.is_dark() { "#222222" } else { "#e2e8f0" }
    }
}
