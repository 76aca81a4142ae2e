//! Wiring a [`QuoteController`] to a [`Host`] for the lifetime of the screen.

#[cfg(test)]
#[path = "mount_test.rs"]
mod mount_test;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::host::{Host, TaskHandle};
use super::quote::QuoteController;
use crate::storage::{Clock, CookieJar};

type Shared<J, C> = Rc<RefCell<QuoteController<J, C>>>;
type Slot = Rc<RefCell<Option<TaskHandle>>>;

/// Everything registered by [`mount`]. Pass to [`Mount::teardown`] on unmount.
///
/// Holds the host alive so the midnight timer can re-arm itself.
pub struct Mount {
    logo: TaskHandle,
    resize: TaskHandle,
    scroll: TaskHandle,
    midnight: Slot,
    _host: Rc<dyn Host>,
}

impl Mount {
    /// Cancel both timers, detach the resize listener, restore scrolling.
    pub fn teardown(self) {
        self.logo.cancel();
        self.resize.cancel();
        if let Some(midnight) = self.midnight.borrow_mut().take() {
            midnight.cancel();
        }
        self.scroll.cancel();
        log::debug!("quote screen torn down");
    }
}

/// Run the startup sequence and register every background task.
///
/// Returns `None` if the controller was already started, so a duplicate
/// mount registers nothing.
pub fn mount<J, C, H>(controller: &Shared<J, C>, host: &Rc<H>) -> Option<Mount>
where
    J: CookieJar + 'static,
    C: Clock + 'static,
    H: Host + 'static,
{
    if !controller.borrow_mut().start() {
        return None;
    }

    let (logo_delay, images) = {
        let ctrl = controller.borrow();
        (ctrl.config().logo_delay, ctrl.config().preload_images.clone())
    };

    let logo = {
        let ctrl = Rc::clone(controller);
        host.set_timeout(logo_delay, Box::new(move || ctrl.borrow_mut().reveal_logo()))
    };

    controller.borrow_mut().resize(host.viewport());
    let resize = {
        let ctrl = Rc::clone(controller);
        host.on_resize(Box::new(move |viewport| ctrl.borrow_mut().resize(viewport)))
    };

    {
        let ctrl = Rc::clone(controller);
        host.preload_images(images, Box::new(move |failures| ctrl.borrow_mut().images_settled(&failures)));
    }

    let scroll = host.lock_scroll();

    let midnight: Slot = Rc::new(RefCell::new(None));
    arm_midnight(controller, host, &midnight);

    let host: Rc<dyn Host> = Rc::clone(host) as Rc<dyn Host>;
    Some(Mount { logo, resize, scroll, midnight, _host: host })
}

/// Schedule the next rollover. Each firing re-arms for the following night
/// as long as the mount is alive.
fn arm_midnight<J, C, H>(controller: &Shared<J, C>, host: &Rc<H>, slot: &Slot)
where
    J: CookieJar + 'static,
    C: Clock + 'static,
    H: Host + 'static,
{
    let delay = controller.borrow().until_next_midnight();
    log::debug!("next rollover in {}s", delay.as_secs());

    let ctrl = Rc::clone(controller);
    let weak_host: Weak<H> = Rc::downgrade(host);
    let weak_slot: Weak<RefCell<Option<TaskHandle>>> = Rc::downgrade(slot);

    let handle = host.set_timeout(
        delay,
        Box::new(move || {
            ctrl.borrow_mut().rollover();
            if let (Some(host), Some(slot)) = (weak_host.upgrade(), weak_slot.upgrade()) {
                arm_midnight(&ctrl, &host, &slot);
            }
        }),
    );
    *slot.borrow_mut() = Some(handle);
}
