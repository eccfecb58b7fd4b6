use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::browser::{self, ScrollListener};
use crate::config::LandingConfig;
use crate::types::SectionId;

/// Pick the section to highlight from `(section, top)` measurements.
///
/// Walks the measurements in the order given and keeps the last section
/// whose top edge is at or above `threshold`. Sections that could not be
/// measured are skipped. Falls back to [`SectionId::Home`].
pub fn resolve_active_section<I>(tops: I, threshold: f64) -> SectionId
where
    I: IntoIterator<Item = (SectionId, Option<f64>)>,
{
    tops.into_iter()
        .fold(SectionId::Home, |current, (section, top)| match top {
            Some(top) if top <= threshold => section,
            _ => current,
        })
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActiveSectionTracker {
    threshold: f64,
    active: SectionId,
}

impl ActiveSectionTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            active: SectionId::Home,
        }
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    /// Re-scan every section in declaration order using `measure`.
    /// Returns true if the active section changed.
    pub fn observe(&mut self, mut measure: impl FnMut(SectionId) -> Option<f64>) -> bool {
        let next = resolve_active_section(
            SectionId::ALL.into_iter().map(|section| (section, measure(section))),
            self.threshold,
        );
        let changed = next != self.active;
        self.active = next;
        changed
    }
}

/// Track the section in view, updated on every window scroll.
pub fn use_active_section() -> Signal<SectionId> {
    let config = use_context::<LandingConfig>();
    let mut active = use_signal(SectionId::default);

    let listener = use_hook(move || {
        let mut tracker = ActiveSectionTracker::new(config.scroll_threshold_px);
        let attached = ScrollListener::attach(move || {
            if tracker.observe(browser::section_top) {
                tracing::debug!("active section -> {}", tracker.active());
                active.set(tracker.active());
            }
        });
        let slot = match attached {
            Ok(listener) => Some(listener),
            Err(err) => {
                tracing::warn!("section highlighting disabled: {}", err);
                None
            }
        };
        Rc::new(RefCell::new(slot))
    });

    // Detach on unmount
    use_drop(move || {
        listener.borrow_mut().take();
    });

    active
}
