pub mod app;
pub mod backend;
pub mod config;
pub mod error;
pub mod logging;
pub mod server;
