use super::*;

// =============================================================
// Font sizing and orientation
// =============================================================

#[test]
fn font_size_caps_at_24_for_tall_viewports() {
    assert_eq!(font_size_px(800.0, 24.0, 3.0), 24.0);
    assert_eq!(font_size_px(1200.0, 24.0, 3.0), 24.0);
}

#[test]
fn font_size_scales_with_height() {
    assert_eq!(font_size_px(400.0, 24.0, 3.0), 12.0);
    assert_eq!(font_size_px(0.0, 24.0, 3.0), 0.0);
}

#[test]
fn portrait_only_when_taller_than_wide() {
    assert!(Viewport::new(390.0, 844.0).is_portrait());
    assert!(!Viewport::new(1280.0, 800.0).is_portrait());
    assert!(!Viewport::new(600.0, 600.0).is_portrait());
}

// =============================================================
// ScreenState derived values
// =============================================================

#[test]
fn default_state_is_dark_english_not_ready() {
    let state = ScreenState::default();
    assert_eq!(state.theme, Theme::Dark);
    assert_eq!(state.language, Language::English);
    assert!(!state.images_ready);
    assert!(!state.show_logo);
}

#[test]
fn quote_follows_index_and_language() {
    let mut state = ScreenState { quote_index: 3, ..ScreenState::default() };
    assert_eq!(state.quote(), QUOTES[3].english);

    state.language = Language::Spanish;
    assert_eq!(state.quote(), QUOTES[3].spanish);

    state.quote_index = 5;
    assert_eq!(state.quote(), QUOTES[5].spanish);
}

#[test]
fn background_covers_theme_and_orientation() {
    let mut state = ScreenState::default();
    assert_eq!(state.background_image(), "/images/black_bg.png");
    state.portrait = true;
    assert_eq!(state.background_image(), "/images/black_bg_phone.png");
    state.theme = Theme::Light;
    assert_eq!(state.background_image(), "/images/white_bg_phone.png");
    state.portrait = false;
    assert_eq!(state.background_image(), "/images/white_bg.png");
}

#[test]
fn logo_and_colors_follow_theme() {
    let mut state = ScreenState::default();
    assert_eq!(state.logo_image(), "/images/inspi-tap_white.png");
    assert_eq!(state.foreground(), "white");

    state.theme = Theme::Light;
    assert_eq!(state.logo_image(), "/images/inspi-tap_black.png");
    assert_eq!(state.foreground(), "black");
    assert_eq!(state.text_shadow(), "2px 2px 4px white");
}

#[test]
fn flag_follows_language() {
    let mut state = ScreenState::default();
    assert_eq!(state.flag_image(), "/images/usa_flag.png");
    state.language = Language::Spanish;
    assert_eq!(state.flag_image(), "/images/spain_flag.png");
}

#[test]
fn font_size_css_has_px_suffix() {
    let state = ScreenState { font_size_px: 12.0, ..ScreenState::default() };
    assert_eq!(state.font_size_css(), "12px");
}
