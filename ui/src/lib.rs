//! Shared crate for Metabo: GKI computation, data loading, and the dashboard views used by
//! the web and desktop launchers.

pub mod components;
pub mod core;
pub mod dashboard;
pub mod i18n;
pub mod views;
