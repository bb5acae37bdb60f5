//! Shared scroll-direction capability.
//!
//! One window scroll listener feeds a thread-local direction value;
//! presentational components subscribe through id-keyed hooks and use the
//! reading to decide whether to replay entrance animations.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use gloo::render::{request_animation_frame, AnimationFrame};

use sakuhinshu_core::{direction_step, ScrollDirection};

type DirectionHook = Rc<dyn Fn(Option<ScrollDirection>)>;

thread_local! {
    static DIRECTION: Cell<Option<ScrollDirection>> = Cell::new(None);
    static LAST_Y: Cell<f64> = Cell::new(0.0);
    static HOOKS: RefCell<Vec<(u64, DirectionHook)>> = RefCell::new(Vec::new());
    static NEXT_HOOK_ID: Cell<u64> = Cell::new(1);
    static SCROLL_LISTENER: RefCell<Option<EventListener>> = RefCell::new(None);
    static FRAME: RefCell<Option<AnimationFrame>> = RefCell::new(None);
}

pub(crate) fn direction() -> Option<ScrollDirection> {
    DIRECTION.with(|slot| slot.get())
}

pub(crate) fn add_direction_hook(hook: DirectionHook) -> u64 {
    ensure_scroll_listener();
    HOOKS.with(|hooks| {
        let mut hooks = hooks.borrow_mut();
        let id = NEXT_HOOK_ID.with(|next| {
            let id = next.get();
            next.set(id.saturating_add(1));
            id
        });
        hooks.push((id, hook));
        id
    })
}

pub(crate) fn remove_direction_hook(id: u64) {
    HOOKS.with(|hooks| {
        hooks.borrow_mut().retain(|(hook_id, _)| *hook_id != id);
    });
}

fn set_direction(next: Option<ScrollDirection>) {
    let changed = DIRECTION.with(|slot| {
        if slot.get() == next {
            false
        } else {
            slot.set(next);
            true
        }
    });
    if !changed {
        return;
    }
    let hooks: Vec<DirectionHook> =
        HOOKS.with(|hooks| hooks.borrow().iter().map(|(_, hook)| hook.clone()).collect());
    for hook in hooks {
        hook(next);
    }
}

fn ensure_scroll_listener() {
    let installed = SCROLL_LISTENER.with(|slot| slot.borrow().is_some());
    if installed {
        return;
    }
    let Some(window) = web_sys::window() else {
        return;
    };
    LAST_Y.with(|slot| slot.set(window.scroll_y().unwrap_or(0.0)));
    let listener = EventListener::new_with_options(
        &window,
        "scroll",
        EventListenerOptions {
            phase: EventListenerPhase::Bubble,
            passive: true,
        },
        move |_| queue_direction_pass(),
    );
    SCROLL_LISTENER.with(|slot| {
        *slot.borrow_mut() = Some(listener);
    });
}

// One pass per animation frame; scroll events landing while a frame is
// pending are coalesced into that frame's read of the live position.
fn queue_direction_pass() {
    let pending = FRAME.with(|slot| slot.borrow().is_some());
    if pending {
        return;
    }
    let handle = request_animation_frame(move |_| {
        FRAME.with(|slot| slot.borrow_mut().take());
        direction_pass();
    });
    FRAME.with(|slot| {
        *slot.borrow_mut() = Some(handle);
    });
}

fn direction_pass() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let new_y = window.scroll_y().unwrap_or(0.0);
    let last_y = LAST_Y.with(|slot| slot.replace(new_y));
    set_direction(direction_step(direction(), last_y, new_y));
}
