use super::*;
use std::cell::Cell;
use std::rc::Rc;

/// Stands in for a JS timer id: cleared once, and the callback is released.
struct TimerSlot {
    cleared: Cell<u32>,
    callback: Cell<Option<Box<dyn FnOnce()>>>,
}

fn timer_handle(slot: &Rc<TimerSlot>) -> TaskHandle {
    let slot = Rc::clone(slot);
    TaskHandle::new(move || {
        slot.cleared.set(slot.cleared.get() + 1);
        drop(slot.callback.take());
    })
}

// =============================================================
// TaskHandle
// =============================================================

#[test]
fn cancel_clears_the_timer_and_releases_its_callback() {
    let captured = Rc::new(());
    let held = Rc::clone(&captured);
    let slot = Rc::new(TimerSlot {
        cleared: Cell::new(0),
        callback: Cell::new(Some(Box::new(move || drop(held)))),
    });

    timer_handle(&slot).cancel();

    assert_eq!(slot.cleared.get(), 1);
    assert_eq!(Rc::strong_count(&captured), 1);
}

#[test]
fn noop_handle_cancels_cleanly() {
    let handle = TaskHandle::noop();
    assert_eq!(format!("{handle:?}"), "TaskHandle { armed: false }");
    handle.cancel();
}

#[test]
fn armed_handle_reports_armed() {
    let handle = TaskHandle::new(|| {});
    assert_eq!(format!("{handle:?}"), "TaskHandle { armed: true }");
    handle.cancel();
}
