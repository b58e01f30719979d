//! HRISELINK Console Library
//!
//! This library provides core functionality for the HRISELINK Console
//! application: the employee roster model, the delete-confirmation workflow
//! against the remote task API, and configuration management.

// Module declarations
pub mod api;
pub mod config;
pub mod constants;
pub mod models;
pub mod roster;
pub mod tui;
