//! Scroll-synchronized active-section tracking for project pages.
//!
//! A tracker owns the scroll/resize listeners for one mounted view, measures
//! the configured sections through a [`LayoutProbe`], and reports the section
//! nearest the viewport center through a callback. Recomputation is throttled
//! to one pass per animation frame.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use gloo::render::{request_animation_frame, AnimationFrame};
#[cfg(target_arch = "wasm32")]
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use sakuhinshu_core::{select_active, SectionMetrics, ViewportMetrics};

/// Minimal layout query surface, so selection runs against synthetic
/// metrics in tests.
pub(crate) trait LayoutProbe {
    fn viewport(&self) -> Option<ViewportMetrics>;
    fn section(&self, id: &str) -> Option<SectionMetrics>;
}

pub(crate) struct DomLayoutProbe;

impl LayoutProbe for DomLayoutProbe {
    fn viewport(&self) -> Option<ViewportMetrics> {
        let window = web_sys::window()?;
        let scroll_y = window.scroll_y().ok()?;
        let height = window.inner_height().ok()?.as_f64()?;
        Some(ViewportMetrics { scroll_y, height })
    }

    fn section(&self, id: &str) -> Option<SectionMetrics> {
        let document = web_sys::window()?.document()?;
        let element = document.get_element_by_id(id)?;
        let rect = element.get_bounding_client_rect();
        Some(SectionMetrics {
            top: rect.top(),
            height: rect.height(),
        })
    }
}

pub(crate) struct SectionTracker {
    section_ids: Vec<&'static str>,
    probe: Box<dyn LayoutProbe>,
    active: Cell<usize>,
    on_active: Rc<dyn Fn(&'static str)>,
    listeners: RefCell<Vec<EventListener>>,
    frame_handle: RefCell<Option<AnimationFrame>>,
}

impl SectionTracker {
    pub(crate) fn new(
        section_ids: Vec<&'static str>,
        probe: Box<dyn LayoutProbe>,
        on_active: Rc<dyn Fn(&'static str)>,
    ) -> Rc<Self> {
        debug_assert!(!section_ids.is_empty());
        Rc::new(Self {
            section_ids,
            probe,
            active: Cell::new(0),
            on_active,
            listeners: RefCell::new(Vec::new()),
            frame_handle: RefCell::new(None),
        })
    }

    pub(crate) fn active_id(&self) -> &'static str {
        self.section_ids[self.active.get()]
    }

    /// Runs one eager pass and attaches the scroll/resize listeners.
    pub(crate) fn install(self: &Rc<Self>) {
        self.recompute_now();
        let Some(window) = web_sys::window() else {
            return;
        };
        let mut listeners = Vec::new();

        let tracker = Rc::clone(self);
        let listener = EventListener::new_with_options(
            &window,
            "scroll",
            EventListenerOptions {
                phase: EventListenerPhase::Bubble,
                passive: true,
            },
            move |_| tracker.queue_recompute(),
        );
        listeners.push(listener);

        let tracker = Rc::clone(self);
        let listener = EventListener::new(&window, "resize", move |_| {
            tracker.queue_recompute();
        });
        listeners.push(listener);

        *self.listeners.borrow_mut() = listeners;
    }

    /// Detaches the listeners and cancels any pending pass. Events firing
    /// after this change nothing.
    pub(crate) fn teardown(&self) {
        self.listeners.borrow_mut().clear();
        self.frame_handle.borrow_mut().take();
    }

    /// Sets the active section immediately and smooth-scrolls to it. The
    /// next scroll-driven pass confirms or overrides the value once the
    /// scroll settles.
    pub(crate) fn set_active_manual(&self, id: &'static str) {
        let Some(index) = self.section_ids.iter().position(|section| *section == id) else {
            return;
        };
        self.active.set(index);
        (self.on_active)(id);
        scroll_to_section(id);
    }

    // One pass per animation frame; events arriving while a frame is
    // pending coalesce into that frame's read of the live layout.
    fn queue_recompute(self: &Rc<Self>) {
        if self.frame_handle.borrow().is_some() {
            return;
        }
        let tracker = Rc::clone(self);
        let handle = request_animation_frame(move |_| {
            tracker.frame_handle.borrow_mut().take();
            tracker.recompute_now();
        });
        *self.frame_handle.borrow_mut() = Some(handle);
    }

    fn recompute_now(&self) {
        // No viewport reading means no layout to judge; keep the last value.
        let Some(viewport) = self.probe.viewport() else {
            return;
        };
        let metrics: Vec<Option<SectionMetrics>> = self
            .section_ids
            .iter()
            .map(|id| self.probe.section(id))
            .collect();
        let next = select_active(viewport, &metrics);
        if next == self.active.get() {
            return;
        }
        self.active.set(next);
        (self.on_active)(self.section_ids[next]);
    }
}

/// Smooth-scrolls the viewport so the section with `id` is in view.
pub(crate) fn scroll_to_section(id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            return;
        };
        let Some(element) = document.get_element_by_id(id) else {
            return;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct SyntheticProbe {
        viewport: Option<ViewportMetrics>,
        sections: HashMap<&'static str, SectionMetrics>,
    }

    impl LayoutProbe for SyntheticProbe {
        fn viewport(&self) -> Option<ViewportMetrics> {
            self.viewport
        }

        fn section(&self, id: &str) -> Option<SectionMetrics> {
            self.sections.get(id).copied()
        }
    }

    fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, Rc<dyn Fn(&'static str)>) {
        let log: Rc<RefCell<Vec<&'static str>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        let hook: Rc<dyn Fn(&'static str)> = Rc::new(move |id| sink.borrow_mut().push(id));
        (log, hook)
    }

    #[test]
    fn eager_pass_reports_nearest_section() {
        let (log, hook) = recorder();
        let mut sections = HashMap::new();
        sections.insert("alpha", SectionMetrics { top: -600.0, height: 400.0 });
        sections.insert("beta", SectionMetrics { top: 100.0, height: 600.0 });
        let probe = SyntheticProbe {
            viewport: Some(ViewportMetrics { scroll_y: 700.0, height: 800.0 }),
            sections,
        };
        let tracker = SectionTracker::new(vec!["alpha", "beta"], Box::new(probe), hook);
        tracker.recompute_now();
        assert_eq!(tracker.active_id(), "beta");
        assert_eq!(*log.borrow(), vec!["beta"]);
    }

    #[test]
    fn unchanged_result_does_not_refire() {
        let (log, hook) = recorder();
        let mut sections = HashMap::new();
        sections.insert("alpha", SectionMetrics { top: 0.0, height: 800.0 });
        let probe = SyntheticProbe {
            viewport: Some(ViewportMetrics { scroll_y: 0.0, height: 800.0 }),
            sections,
        };
        let tracker = SectionTracker::new(vec!["alpha"], Box::new(probe), hook);
        tracker.recompute_now();
        tracker.recompute_now();
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn missing_viewport_keeps_last_value() {
        let (log, hook) = recorder();
        let probe = SyntheticProbe {
            viewport: None,
            sections: HashMap::new(),
        };
        let tracker = SectionTracker::new(vec!["alpha", "beta"], Box::new(probe), hook);
        tracker.recompute_now();
        assert_eq!(tracker.active_id(), "alpha");
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn manual_override_fires_immediately() {
        let (log, hook) = recorder();
        let probe = SyntheticProbe {
            viewport: None,
            sections: HashMap::new(),
        };
        let tracker = SectionTracker::new(vec!["alpha", "beta"], Box::new(probe), hook);
        tracker.set_active_manual("beta");
        assert_eq!(tracker.active_id(), "beta");
        assert_eq!(*log.borrow(), vec!["beta"]);
    }

    #[test]
    fn unknown_manual_id_is_ignored() {
        let (log, hook) = recorder();
        let probe = SyntheticProbe {
            viewport: None,
            sections: HashMap::new(),
        };
        let tracker = SectionTracker::new(vec!["alpha"], Box::new(probe), hook);
        tracker.set_active_manual("missing");
        assert_eq!(tracker.active_id(), "alpha");
        assert!(log.borrow().is_empty());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;
    use web_sys::Event;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_sections(ids: &[&'static str]) {
        let document = web_sys::window().unwrap().document().unwrap();
        let body = document.body().unwrap();
        for id in ids {
            if document.get_element_by_id(id).is_some() {
                continue;
            }
            let element = document.create_element("div").unwrap();
            element.set_id(id);
            element
                .set_attribute("style", "display:block;height:400px;")
                .unwrap();
            body.append_child(&element).unwrap();
        }
    }

    fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, Rc<dyn Fn(&'static str)>) {
        let log: Rc<RefCell<Vec<&'static str>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        let hook: Rc<dyn Fn(&'static str)> = Rc::new(move |id| sink.borrow_mut().push(id));
        (log, hook)
    }

    #[wasm_bindgen_test]
    fn eager_pass_runs_on_install() {
        let ids = ["bt-install-a", "bt-install-b"];
        mount_sections(&ids);
        let (_log, hook) = recorder();
        let tracker = SectionTracker::new(ids.to_vec(), Box::new(DomLayoutProbe), hook);
        tracker.install();
        assert!(ids.contains(&tracker.active_id()));
        tracker.teardown();
    }

    #[wasm_bindgen_test]
    fn manual_override_applies_before_any_scroll() {
        let ids = ["bt-manual-a", "bt-manual-b"];
        mount_sections(&ids);
        let (log, hook) = recorder();
        let tracker = SectionTracker::new(ids.to_vec(), Box::new(DomLayoutProbe), hook);
        tracker.install();
        log.borrow_mut().clear();
        tracker.set_active_manual("bt-manual-b");
        assert_eq!(tracker.active_id(), "bt-manual-b");
        assert_eq!(*log.borrow(), vec!["bt-manual-b"]);
        tracker.teardown();
    }

    #[wasm_bindgen_test]
    fn teardown_detaches_listeners() {
        let ids = ["bt-teardown-a", "bt-teardown-b"];
        mount_sections(&ids);
        let (log, hook) = recorder();
        let tracker = SectionTracker::new(ids.to_vec(), Box::new(DomLayoutProbe), hook);
        tracker.install();
        tracker.teardown();
        let before = log.borrow().len();

        let window = web_sys::window().unwrap();
        let scroll = Event::new("scroll").unwrap();
        window.dispatch_event(&scroll).unwrap();
        let resize = Event::new("resize").unwrap();
        window.dispatch_event(&resize).unwrap();

        assert!(tracker.frame_handle.borrow().is_none());
        assert_eq!(log.borrow().len(), before);
    }
}
