pub mod base;
pub mod config;
pub mod engine;
pub mod error;
pub mod ui;
