// Library target shared by the binary, integration tests and criterion
// benchmarks.

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod event;
pub mod session;
pub mod slides;
pub mod ui;
