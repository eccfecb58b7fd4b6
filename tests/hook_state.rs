//! The signal-backed hooks driven through a real `VirtualDom`.

use std::cell::RefCell;
use std::time::Duration;

use dioxus::dioxus_core::{NoOpMutations, VirtualDom};
use dioxus::prelude::*;

use novamed_landing::hooks::{use_contact_form, use_nav_state};
use novamed_landing::LandingConfig;

thread_local! {
    static ACK_RENDERS: RefCell<Vec<bool>> = const { RefCell::new(Vec::new()) };
    static MENU_STATES: RefCell<Vec<bool>> = const { RefCell::new(Vec::new()) };
}

fn short_delay_config() -> LandingConfig {
    LandingConfig {
        ack_reset_delay_ms: 30,
        ..LandingConfig::default()
    }
}

fn contact_root() -> Element {
    use_context_provider(short_delay_config);
    rsx! { SubmittedOnMount {} }
}

#[component]
fn SubmittedOnMount() -> Element {
    let mut contact = use_contact_form();
    use_hook(move || {
        contact.set_email("a@b.com".to_string());
        contact.submit();
    });

    let acknowledged = contact.is_acknowledged();
    ACK_RENDERS.with(|renders| renders.borrow_mut().push(acknowledged));

    rsx! { "{acknowledged}" }
}

#[tokio::test]
async fn acknowledgement_resets_itself_after_delay() {
    let mut dom = VirtualDom::new(contact_root);
    dom.rebuild_in_place();

    let cleared = tokio::time::timeout(Duration::from_secs(2), async {
        while ACK_RENDERS.with(|renders| renders.borrow().last() != Some(&false)) {
            dom.wait_for_work().await;
            dom.render_immediate(&mut NoOpMutations);
        }
    })
    .await;
    assert!(cleared.is_ok(), "acknowledgement was never cleared");

    let renders = ACK_RENDERS.with(|renders| renders.borrow().clone());
    assert_eq!(renders.first(), Some(&true));
    assert_eq!(renders.last(), Some(&false));
}

#[derive(Clone, Copy, PartialEq)]
enum MenuScript {
    OpenThenFollow,
    FollowWhileClosed,
    ToggleTwice,
}

#[component]
fn ScriptedMenu(script: MenuScript) -> Element {
    let mut nav = use_nav_state();
    use_hook(move || {
        let record = |open: bool| MENU_STATES.with(|states| states.borrow_mut().push(open));
        match script {
            MenuScript::OpenThenFollow => {
                nav.toggle_menu();
                record(nav.is_menu_open());
                nav.follow_link();
                record(nav.is_menu_open());
            }
            MenuScript::FollowWhileClosed => {
                record(nav.is_menu_open());
                nav.follow_link();
                record(nav.is_menu_open());
            }
            MenuScript::ToggleTwice => {
                nav.toggle_menu();
                record(nav.is_menu_open());
                nav.toggle_menu();
                record(nav.is_menu_open());
            }
        }
    });

    rsx! {}
}

fn open_then_follow_root() -> Element {
    use_context_provider(LandingConfig::default);
    rsx! { ScriptedMenu { script: MenuScript::OpenThenFollow } }
}

fn follow_while_closed_root() -> Element {
    use_context_provider(LandingConfig::default);
    rsx! { ScriptedMenu { script: MenuScript::FollowWhileClosed } }
}

fn toggle_twice_root() -> Element {
    use_context_provider(LandingConfig::default);
    rsx! { ScriptedMenu { script: MenuScript::ToggleTwice } }
}

fn recorded_menu_states(root: fn() -> Element) -> Vec<bool> {
    MENU_STATES.with(|states| states.borrow_mut().clear());
    let mut dom = VirtualDom::new(root);
    dom.rebuild_in_place();
    MENU_STATES.with(|states| states.borrow().clone())
}

#[test]
fn following_a_link_closes_open_menu() {
    assert_eq!(recorded_menu_states(open_then_follow_root), [true, false]);
}

#[test]
fn following_a_link_keeps_closed_menu_closed() {
    assert_eq!(recorded_menu_states(follow_while_closed_root), [false, false]);
}

#[test]
fn menu_toggle_opens_then_closes() {
    assert_eq!(recorded_menu_states(toggle_twice_root), [true, false]);
}
