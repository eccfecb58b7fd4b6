use dioxus::prelude::*;

use crate::hooks::use_active_section::use_active_section;
use crate::types::SectionId;

/// Open/closed state of the mobile navigation panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuDisclosure {
    open: bool,
}

impl MenuDisclosure {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the panel and return the new state
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

#[derive(Clone, Copy, PartialEq)]
pub struct NavState {
    pub active_section: Signal<SectionId>,
    pub menu: Signal<MenuDisclosure>,
}

pub fn use_nav_state() -> NavState {
    let active_section = use_active_section();
    let menu = use_signal(MenuDisclosure::default);

    NavState {
        active_section,
        menu,
    }
}

impl NavState {
    pub fn is_active(&self, section: SectionId) -> bool {
        *self.active_section.read() == section
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu.read().is_open()
    }

    pub fn toggle_menu(&mut self) {
        self.menu.write().toggle();
    }

    /// A navigation link was followed; collapse the mobile panel.
    pub fn follow_link(&mut self) {
        if self.menu.peek().is_open() {
            self.menu.write().close();
        }
    }
}
