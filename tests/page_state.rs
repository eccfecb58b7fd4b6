//! Behavior of the page state as seen from the event handlers' side.

use std::time::Duration;

use novamed_landing::browser;
use novamed_landing::hooks::{resolve_active_section, ActiveSectionTracker, ContactForm, MenuDisclosure};
use novamed_landing::{LandingConfig, SectionId};

fn scrolled_to(offset: f64) -> impl FnMut(SectionId) -> Option<f64> {
    // Each section is 800px tall and the page starts 120px below the nav.
    move |section| {
        let index = SectionId::ALL.iter().position(|s| *s == section)? as f64;
        Some(120.0 + index * 800.0 - offset)
    }
}

#[test]
fn top_of_page_highlights_home() {
    let mut tracker = ActiveSectionTracker::new(LandingConfig::default().scroll_threshold_px);
    tracker.observe(scrolled_to(0.0));
    assert_eq!(tracker.active(), SectionId::Home);
}

#[test]
fn scrolling_down_walks_the_sections_in_order() {
    let mut tracker = ActiveSectionTracker::new(100.0);
    let mut visited = vec![tracker.active()];
    for offset in (0..4000).step_by(50) {
        if tracker.observe(scrolled_to(offset as f64)) {
            visited.push(tracker.active());
        }
    }
    assert_eq!(visited, SectionId::ALL);
}

#[test]
fn home_and_areas_both_crossed_highlights_areas() {
    let active = resolve_active_section(
        [
            (SectionId::Home, Some(-700.0)),
            (SectionId::Areas, Some(60.0)),
            (SectionId::Features, Some(860.0)),
            (SectionId::Software, Some(1660.0)),
            (SectionId::About, Some(2460.0)),
        ],
        100.0,
    );
    assert_eq!(active, SectionId::Areas);
}

#[test]
fn menu_toggle_and_follow_link() {
    let mut menu = MenuDisclosure::default();
    menu.toggle();
    assert!(menu.is_open());
    menu.toggle();
    assert!(!menu.is_open());

    menu.toggle();
    menu.close();
    assert!(!menu.is_open());
}

#[test]
fn empty_email_is_not_acknowledged() {
    let mut form = ContactForm::default();
    form.set_email("");
    assert!(form.submit().is_none());
    assert!(!form.is_acknowledged());
}

#[tokio::test]
async fn acknowledgement_clears_after_delay() {
    let config = LandingConfig::from_json(r#"{"ack_reset_delay_ms": 30}"#).unwrap();
    let mut form = ContactForm::default();
    form.set_email("a@b.com");

    let ticket = form.submit().unwrap();
    assert!(form.is_acknowledged());
    assert_eq!(form.email(), "");

    browser::sleep(config.ack_reset_delay()).await;
    assert!(form.expire(ticket));
    assert!(!form.is_acknowledged());
}

#[tokio::test]
async fn resubmitting_restarts_the_acknowledgement_window() {
    let delay = Duration::from_millis(20);
    let mut form = ContactForm::default();

    form.set_email("a@b.com");
    let first = form.submit().unwrap();
    form.set_email("c@d.com");
    let second = form.submit().unwrap();

    browser::sleep(delay).await;
    assert!(!form.expire(first), "the older timer must not clear the newer acknowledgement");
    assert!(form.is_acknowledged());
    assert!(form.expire(second));
}
