//! Shared UI crate for Hoverdock. The toolbar logic and component live here;
//! the `web` and `desktop` crates only launch it.

pub mod config;
pub mod core;
pub mod i18n;

pub mod components {
    // Toolbar widget (components/toolbar.rs)
    pub mod toolbar;
    pub use toolbar::Toolbar;

    pub mod icons;
    pub mod measure;
}

pub use components::Toolbar;
