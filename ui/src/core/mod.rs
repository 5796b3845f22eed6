//! Platform-agnostic logic: unit conversion, GKI derivation, data loading and the
//! aggregations the dashboard renders. Nothing in here touches Dioxus.

pub mod config;
pub mod error;
pub mod format;
pub mod gate;
pub mod gki;
pub mod platform;
pub mod reading;
pub mod series;
pub mod source;
pub mod stats;
pub mod units;

pub use error::{MetaboError, Result};
