//! Playlist Generator CLI Library
//!
//! This library provides the terminal front end of the playlist generator. It
//! includes the exclusive preview player that guarantees only one track preview
//! plays at a time, the login redirect flow against the generator backend, and
//! the supporting configuration, caching and rendering utilities.
//!
//! # Modules
//!
//! - `audio` - Remote preview clips fetched over HTTP and played with rodio
//! - `backend` - HTTP calls to the playlist generator backend
//! - `board` - The track board: one row and one preview button per track
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Domain error type
//! - `logging` - Verbose diagnostics switch
//! - `management` - Local caching of the last loaded playlist
//! - `preview` - The exclusive preview player and its playback state machine
//! - `spinner` - Loading overlay shown around network work
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use playgencli::{config, cli};
//!
//! #[tokio::main]
//! async fn main() -> playgencli::Res<()> {
//!     config::load_env().await?;
//!     cli::login().await;
//!     Ok(())
//! }
//! ```

pub mod audio;
pub mod backend;
pub mod board;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod management;
pub mod preview;
pub mod spinner;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern for the CLI glue using a boxed
/// dynamic error trait object. Domain code in [`preview`] uses
/// [`error::PreviewError`] instead.
///
/// # Example
///
/// ```
/// use playgencli::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Loading playlist...");
/// info!("Found {} tracks", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Redirecting to Spotify");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only the CLI entry points use this macro. The preview player never
/// terminates the process; it reports recoverable problems with [`warning!`].
///
/// # Example
///
/// ```
/// error!("Failed to initiate Spotify login. Please try again.");
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues such as a track row without a playable
/// preview resource or a preview that failed to load.
///
/// # Example
///
/// ```
/// warning!("No audio element found for track {}", id);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a dimmed diagnostic line to stderr when verbose logging is enabled.
///
/// Verbose logging is switched on by the `PLAYGEN_LOGS` environment variable
/// or the `--verbose` flag, see [`logging::verbose_enabled`].
#[macro_export]
macro_rules! debug {
  ($($arg:tt)*) => ({
    if $crate::logging::verbose_enabled() {
      use colored::Colorize;
      eprintln!("[{}] {}", "·".dimmed(), std::format_args!($($arg)*).to_string().dimmed());
    }
  })
}
