//! skthemer turns an HTML palette into a Standard Notes StyleKit theme
//!
//! it writes `theme.css` + `ext.json` and can serve them locally with
//! permissive CORS headers so the app can import the package
#![warn(
    clippy::missing_docs_in_private_items,
    missing_docs,
    rustdoc::missing_crate_level_docs
)]

pub mod app;
pub mod artifact;
pub mod config;
pub mod error;
pub mod macros;
pub mod serve;
pub mod theme;
