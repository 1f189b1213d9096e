//! Shared UI crate for the NL2SQL site. Views, components, state engines and
//! static content live here; the `web` and `desktop` crates only add routing.

pub mod content;
pub mod core;
pub mod demo;
pub mod i18n;
pub mod motion;
pub mod navigation;
pub mod theme;
pub mod views;

pub mod components {
    // Localized site navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::nav_link;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    // Site footer (components/footer.rs)
    pub mod footer;
    pub use footer::Footer;
}

pub use theme::ThemePreference;
