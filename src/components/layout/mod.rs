pub mod contact_panel;
pub mod footer;
pub mod landing_layout;

pub use contact_panel::ContactPanel;
pub use footer::Footer;
pub use landing_layout::LandingLayout;
