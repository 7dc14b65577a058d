pub mod app;
pub mod config;
pub mod patterns;
pub mod ui;
