//! # DateTime MCP Server Core
//!
//! This module provides date, time, and calendar operations for the MCP
//! server.
//!
//! ## Features
//! - Current date/time queries for any IANA timezone or fixed offset
//! - Relative-time phrasing between two instants
//! - Calendar arithmetic: leap years, days-in-month, ISO week numbering
//! - Wall-clock conversion between timezones
//! - Local timezone detection
//!
//! ## Modules
//! - `calendar`: Pure calendar arithmetic
//! - `error`: Custom error types and error handling
//! - `format`: Output format selection and rendering
//! - `models`: Data structures for requests and responses
//! - `provider`: The five datetime operations
//! - `relative`: Relative-time phrasing
//! - `utils`: Format strings and parsing helpers
//! - `zone`: Timezone resolution

pub mod calendar;
pub mod error;
pub mod format;
pub mod models;
pub mod provider;
pub mod relative;
pub mod utils;
pub mod zone;
