//! Full-screen daily quote with theme and language toggles.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use crate::config::ScreenConfig;
use crate::controller::{QuoteController, RandomIndex};
use crate::state::ScreenState;
use crate::storage::{PreferenceStore, SystemClock};

#[cfg(feature = "csr")]
type Jar = crate::storage::DocumentCookieJar;
#[cfg(not(feature = "csr"))]
type Jar = crate::storage::MemoryCookieJar<SystemClock>;

type ScreenController = Rc<RefCell<QuoteController<Jar, SystemClock>>>;

fn page_jar() -> Jar {
    #[cfg(feature = "csr")]
    {
        crate::storage::DocumentCookieJar
    }
    #[cfg(not(feature = "csr"))]
    {
        crate::storage::MemoryCookieJar::new(SystemClock)
    }
}

/// The quote screen.
///
/// Owns a [`QuoteController`] mirrored into one `RwSignal<ScreenState>`.
/// In the browser it mounts the controller on the window and tears it down
/// on cleanup. Until every image has settled only a loading line renders.
#[component]
pub fn QuoteScreen() -> impl IntoView {
    let config = ScreenConfig::default();
    let shop_url = config.shop_url.clone();
    let screen = RwSignal::new(ScreenState::default());

    let controller: ScreenController = Rc::new(RefCell::new(QuoteController::new(
        PreferenceStore::new(page_jar(), SystemClock),
        RandomIndex,
        config,
    )));
    controller.borrow_mut().on_change(move |state| screen.set(state.clone()));

    #[cfg(feature = "csr")]
    {
        let host = Rc::new(crate::controller::BrowserHost);
        if let Some(mount) = crate::controller::mount(&controller, &host) {
            let mount = send_wrapper::SendWrapper::new(mount);
            on_cleanup(move || mount.take().teardown());
        }
    }

    let controller = StoredValue::new_local(controller);
    let toggle_theme = move |_: leptos::ev::MouseEvent| controller.with_value(|c| c.borrow_mut().toggle_theme());
    let toggle_language = move |_: leptos::ev::MouseEvent| controller.with_value(|c| c.borrow_mut().toggle_language());

    let dark = move || screen.with(|s| s.theme.is_dark());
    let english = move || screen.with(|s| s.language == crate::storage::Language::English);
    let chip = move || screen.with(ScreenState::chip_background);
    let track = move || screen.with(ScreenState::track_background);

    view! {
        <Show
            when=move || screen.with(|s| s.images_ready)
            fallback=|| view! { <div class="quote-screen__loading">"Loading..."</div> }
        >
            <div
                class="quote-screen"
                style:background-image=move || format!("url({})", screen.with(ScreenState::background_image))
                style:color=move || screen.with(ScreenState::foreground)
            >
                <div class="quote-screen__theme">
                    <button class="toggle-chip" style:background-color=chip on:click=toggle_theme>
                        <div class="toggle-track" style:background-color=track>
                            <div class="toggle-knob" class:toggle-knob-right=move || !dark()></div>
                            <span class="toggle-icon toggle-icon--left">{move || dark().then_some("☾")}</span>
                            <span class="toggle-icon toggle-icon--right">{move || (!dark()).then_some("☀")}</span>
                        </div>
                    </button>
                </div>

                <div class="quote-screen__body">
                    <p
                        class="quote-screen__text"
                        style:font-size=move || screen.with(ScreenState::font_size_css)
                        style:text-shadow=move || screen.with(ScreenState::text_shadow)
                    >
                        {move || screen.with(|s| s.quote().text)}
                        <br/>
                        <span class="quote-screen__author">
                            {move || format!("— {}", screen.with(|s| s.quote().author))}
                        </span>
                    </p>
                </div>

                <div class="quote-screen__language">
                    <span class="quote-screen__lang-label">"EN"</span>
                    <div class="toggle-chip" style:background-color=chip>
                        <button
                            class="toggle-track"
                            style:background-color=track
                            aria-label="Toggle language"
                            on:click=toggle_language
                        >
                            <div
                                class="toggle-flag"
                                class:toggle-flag-right=move || !english()
                                style:background-image=move || format!("url({})", screen.with(ScreenState::flag_image))
                            ></div>
                        </button>
                    </div>
                    <span class="quote-screen__lang-label">"ES"</span>
                </div>

                <Show when=move || screen.with(|s| s.show_logo)>
                    <img
                        class="quote-screen__logo"
                        src=move || screen.with(ScreenState::logo_image)
                        alt="Logo"
                    />
                </Show>

                <a
                    class="quote-screen__shop toggle-chip"
                    style:background-color=chip
                    href=shop_url.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label="Open shop"
                    title="Open shop"
                >
                    "🛍"
                </a>
            </div>
        </Show>
    }
}
