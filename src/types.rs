use std::fmt;

use serde::{Deserialize, Serialize};

/// The anchored sections of the page, in document order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    #[default]
    Home,
    Areas,
    Features,
    Software,
    About,
}

impl SectionId {
    /// Declaration order. The active-section scan walks this slice front to back.
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::Areas,
        SectionId::Features,
        SectionId::Software,
        SectionId::About,
    ];

    /// DOM id of the section element
    pub fn anchor_id(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Areas => "areas",
            SectionId::Features => "features",
            SectionId::Software => "software",
            SectionId::About => "about",
        }
    }

    pub fn href(self) -> &'static str {
        match self {
            SectionId::Home => "#home",
            SectionId::Areas => "#areas",
            SectionId::Features => "#features",
            SectionId::Software => "#software",
            SectionId::About => "#about",
        }
    }

    /// Navigation label
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Inicio",
            SectionId::Areas => "Áreas",
            SectionId::Features => "Servicios",
            SectionId::Software => "Software",
            SectionId::About => "¿Quiénes Somos?",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor_id())
    }
}

// Page content types

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrustBadge {
    pub icon: &'static str,
    pub label: &'static str,
    pub tone: &'static str, // CSS modifier class
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatingCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub caption: &'static str,
    pub class: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AreaGroup {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ServiceCard {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub test_id: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SoftwareFeature {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactLink {
    pub icon: &'static str,
    pub label: &'static str,
    pub href: &'static str,
    pub text: &'static str,
}

impl ContactLink {
    /// Web links open in a new tab; `tel:` and `mailto:` stay in place.
    pub fn opens_new_tab(&self) -> bool {
        self.href.starts_with("http")
    }

    pub fn target(&self) -> Option<&'static str> {
        self.opens_new_tab().then_some("_blank")
    }

    pub fn rel(&self) -> Option<&'static str> {
        self.opens_new_tab().then_some("noopener noreferrer")
    }
}
