//! Shared UI crate for the vprof viewer. The web and desktop shells only launch it.

use dioxus::prelude::*;

pub mod core;
pub mod i18n;
pub mod viewer;
pub mod views;

/// Shared theme, linked by the web shell.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

/// Same theme for shells that inline their styles.
pub const THEME_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));
