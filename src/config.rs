//! Screen configuration: timings, sizing, and static asset paths.
//!
//! There is no runtime input (no env, no query string). `ScreenConfig::default()`
//! is what ships; tests build their own to shorten delays or swap assets.

use std::time::Duration;

pub const DEFAULT_LOGO_DELAY_MS: u64 = 2000;
pub const DEFAULT_MAX_FONT_PX: f64 = 24.0;
/// Font size as a percentage of viewport height.
pub const DEFAULT_FONT_HEIGHT_PERCENT: f64 = 3.0;
pub const DEFAULT_SHOP_URL: &str = "https://inspitap.com";

pub const LOGO_ON_DARK: &str = "/images/inspi-tap_white.png";
pub const LOGO_ON_LIGHT: &str = "/images/inspi-tap_black.png";
pub const FLAG_ENGLISH: &str = "/images/usa_flag.png";
pub const FLAG_SPANISH: &str = "/images/spain_flag.png";
pub const BG_DARK_PORTRAIT: &str = "/images/black_bg_phone.png";
pub const BG_LIGHT_PORTRAIT: &str = "/images/white_bg_phone.png";
pub const BG_DARK_LANDSCAPE: &str = "/images/black_bg.png";
pub const BG_LIGHT_LANDSCAPE: &str = "/images/white_bg.png";

/// Every image the screen can show, preloaded before first paint.
pub const PRELOAD_IMAGES: [&str; 8] = [
    LOGO_ON_DARK,
    LOGO_ON_LIGHT,
    FLAG_ENGLISH,
    FLAG_SPANISH,
    BG_DARK_PORTRAIT,
    BG_LIGHT_PORTRAIT,
    BG_DARK_LANDSCAPE,
    BG_LIGHT_LANDSCAPE,
];

#[derive(Debug, Clone, PartialEq)]
pub struct ScreenConfig {
    pub logo_delay: Duration,
    pub max_font_px: f64,
    pub font_height_percent: f64,
    pub preload_images: Vec<String>,
    pub shop_url: String,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            logo_delay: Duration::from_millis(DEFAULT_LOGO_DELAY_MS),
            max_font_px: DEFAULT_MAX_FONT_PX,
            font_height_percent: DEFAULT_FONT_HEIGHT_PERCENT,
            preload_images: PRELOAD_IMAGES.iter().map(|p| (*p).to_owned()).collect(),
            shop_url: DEFAULT_SHOP_URL.to_owned(),
        }
    }
}
