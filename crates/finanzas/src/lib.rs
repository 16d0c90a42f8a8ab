//! finanzas library: command dispatch for the personal finance CLI.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
