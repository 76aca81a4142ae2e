//! [`Host`] backed by the browser window. Requires the `csr` feature.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use super::host::{Host, TaskHandle};
use crate::error::PreloadError;
use crate::state::Viewport;

/// Longest delay `setTimeout` honours; larger values fire immediately.
const MAX_DELAY_MS: u32 = 2_147_483_647;

/// The real window, document body, and image loader.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHost;

impl Host for BrowserHost {
    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TaskHandle {
        let millis = u32::try_from(delay.as_millis()).map_or(MAX_DELAY_MS, |ms| ms.min(MAX_DELAY_MS));
        let timeout = Timeout::new(millis, callback);
        TaskHandle::new(move || drop(timeout.cancel()))
    }

    fn viewport(&self) -> Viewport {
        let Some(window) = web_sys::window() else {
            return Viewport::default();
        };
        let dimension = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
            v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
        };
        Viewport::new(dimension(window.inner_width()), dimension(window.inner_height()))
    }

    fn on_resize(&self, callback: Box<dyn Fn(Viewport)>) -> TaskHandle {
        let Some(window) = web_sys::window() else {
            return TaskHandle::noop();
        };
        let host = *self;
        let listener = Closure::<dyn Fn()>::new(move || callback(host.viewport()));
        if let Err(e) = window.add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref()) {
            log::warn!("resize listener not attached: {e:?}");
            return TaskHandle::noop();
        }
        TaskHandle::new(move || {
            if let Err(e) = window.remove_event_listener_with_callback("resize", listener.as_ref().unchecked_ref()) {
                log::debug!("resize listener not detached: {e:?}");
            }
            drop(listener);
        })
    }

    fn lock_scroll(&self) -> TaskHandle {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return TaskHandle::noop();
        };
        let style = body.style();
        let previous = style.get_property_value("overflow").unwrap_or_default();
        if let Err(e) = style.set_property("overflow", "hidden") {
            log::debug!("body overflow not locked: {e:?}");
        }
        TaskHandle::new(move || {
            let restored = if previous.is_empty() {
                style.remove_property("overflow").map(drop)
            } else {
                style.set_property("overflow", &previous)
            };
            if let Err(e) = restored {
                log::debug!("body overflow not restored: {e:?}");
            }
        })
    }

    fn preload_images(&self, paths: Vec<String>, done: Box<dyn FnOnce(Vec<PreloadError>)>) {
        leptos::task::spawn_local(async move {
            let results = futures::future::join_all(paths.into_iter().map(load_image)).await;
            let failures = results.into_iter().filter_map(Result::err).collect();
            done(failures);
        });
    }
}

/// Resolve once the image has either loaded or errored.
async fn load_image(path: String) -> Result<(), PreloadError> {
    let failed = || PreloadError { path: path.clone() };
    let img = web_sys::HtmlImageElement::new().map_err(|_| failed())?;

    let (tx, rx) = futures::channel::oneshot::channel::<bool>();
    let tx = Rc::new(RefCell::new(Some(tx)));
    let settle = |loaded: bool| {
        let tx = Rc::clone(&tx);
        Closure::<dyn Fn()>::new(move || {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(loaded);
            }
        })
    };
    let on_load = settle(true);
    let on_error = settle(false);

    img.set_onload(Some(on_load.as_ref().unchecked_ref()));
    img.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    img.set_src(&path);

    let loaded = rx.await.unwrap_or(false);
    img.set_onload(None);
    img.set_onerror(None);

    if loaded { Ok(()) } else { Err(failed()) }
}
