//! the local CORS-enabled static file server
pub mod cfg;
pub mod cors;
pub mod server;

pub use {cfg::ServerConfig, server::ThemeServer};
