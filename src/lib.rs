//! Spotify Playback Backend Library
//!
//! This library provides a small HTTP backend that walks a browser through the
//! Spotify OAuth 2.0 authorization-code flow, exchanges the returned code for an
//! access token, answers with the user's top tracks and forwards playback
//! commands to the Spotify Web API.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints served to the browser
//! - `config` - Configuration management and environment variables
//! - `cors` - Allow-list based CORS gate for browser-facing routes
//! - `server` - Router wiring and the HTTP listener
//! - `spotify` - Spotify accounts and Web API client
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use spotplay::{config, server};
//!
//! #[tokio::main]
//! async fn main() -> spotplay::Res<()> {
//!     config::load_env().await?;
//!     let config = config::Config::from_env()?;
//!     server::start_api_server(config).await
//! }
//! ```

pub mod api;
pub mod config;
pub mod cors;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Used by startup plumbing (configuration, binding the listener) where the
/// caller only reports the error and stops. Request handling uses the typed
/// errors in [`spotify::SpotifyError`] and [`api::ApiError`] instead.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Listening on {}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only meant for fatal startup failures. Request handlers report problems
/// with [`warning!`] and answer with an error status instead.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for upstream failures that turn into an error response but must not
/// stop the server.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
