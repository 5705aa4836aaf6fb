//! Data models for the application

mod app;

pub use app::*;
