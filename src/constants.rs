//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the default API address.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "HRISELINK Console";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "hriselink";

/// Default base address of the HRISELINK task API.
///
/// Used whenever no `api.base_url` override is persisted in the config file.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Number of roster rows shown per page.
pub const PAGE_SIZE: usize = 10;
