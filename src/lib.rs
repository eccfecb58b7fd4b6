//! Novamed Ingeniería landing page
//!
//! A single-page Dioxus app: navigation with scroll-driven section
//! highlighting, the content sections, and a footer contact form.
//! Page state lives in plain structs under [`hooks`] so it can be tested
//! without a browser; the hooks wrap them in signals.

pub mod browser;
pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod hooks;
pub mod pages;
pub mod types;

pub use config::LandingConfig;
pub use error::{LandingError, LandingResult};
pub use types::SectionId;
