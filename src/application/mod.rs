/// Token management
pub mod auth;
/// Public client
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces
pub mod interfaces;
