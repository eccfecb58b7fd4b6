pub mod mobile_menu;
pub mod nav_bar;

pub use mobile_menu::MobileMenu;
pub use nav_bar::NavBar;
