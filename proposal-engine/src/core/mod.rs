//! Core - runtime configuration

pub mod config;

pub use config::Config;
