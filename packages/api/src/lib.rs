//! Shared command-listing types and the fullstack server function that
//! proxies the Hoyo Buddy command service.

pub mod config;
pub mod error;
pub mod locale;
pub mod types;

#[cfg(feature = "server")]
pub mod client;

#[cfg(feature = "server")]
pub mod state;

mod commands;

#[cfg(test)]
mod types_tests;

#[cfg(feature = "server")]
pub mod test_utils;

pub use commands::{fetch_commands, list_commands};
pub use error::{ConfigError, FetchError, LocaleError};
pub use locale::{Locale, LocaleTable};
pub use types::{CommandListing, CommandsResponse};
