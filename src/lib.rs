//! Spotify Like & File Library
//!
//! This library likes the track currently playing on Spotify and files it into
//! a rotating set of playlists: one per calendar month and, optionally, one
//! archive per calendar year. Playlists are created lazily and older month
//! playlists are merged into their year archive once a month boundary has
//! been crossed.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `errors` - Error type shared by all fallible operations
//! - `library` - The music library interface the rotation logic talks to
//! - `management` - Playlist rotation policy
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Date and naming helpers
//!
//! # Example
//!
//! ```
//! use spotlike::{cli, config, management::RotationPolicy};
//!
//! #[tokio::main]
//! async fn main() {
//!     config::load_env().await.ok();
//!     cli::add(None, RotationPolicy::MonthAndYear, None).await;
//! }
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod library;
pub mod management;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Every fallible operation in the crate reports a [`errors::SpotlikeError`],
/// which keeps the distinction between authentication failures, API failures
/// and duplicate additions visible to the caller.
///
/// # Example
///
/// ```
/// use spotlike::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, errors::SpotlikeError>;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message.
///
/// # Example
///
/// ```
/// info!("Refreshing access token...");
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
/// success!("added {} to your playlist", name);
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
/// Creates a formatted error output with a red "!" indicator on stderr and
/// immediately terminates the program with exit code 1. Used for failures
/// that end the run.
///
/// # Example
///
/// ```
/// error!("there was an error: {}", err);
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

/// Prints an error message with a red exclamation mark without exiting.
///
/// Same output as [`error!`] but the program keeps running, so the run can
/// still finish with exit code 0. Used for failures after authentication
/// that are reported to the user rather than treated as fatal.
///
/// # Example
///
/// ```
/// failure!("there was an error: {}", err);
/// ```
#[macro_export]
macro_rules! failure {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
  })
}
