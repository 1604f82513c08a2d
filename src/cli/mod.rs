//! # CLI Module
//!
//! This module provides the command-line interface layer for playgencli, the
//! terminal front end of the playlist generator. It implements all user-facing
//! commands and coordinates between the backend client, the playlist cache and
//! the preview player.
//!
//! ## Command Categories
//!
//! ### Authentication
//!
//! - [`login`] - Asks the backend for the Spotify login URL and opens it in the
//!   browser; on failure the spinner is cleared and the user is told to retry
//!
//! ### Playlist Generation
//!
//! - [`generate`] - Opens the generation form, or regenerates from an artist
//!   list, in the browser behind a short spinner
//!
//! ### Previews
//!
//! - [`preview`] - Shows a generated playlist as a board of tracks and plays
//!   30 second previews, one at a time
//!
//! ## Architecture Design
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Board / Preview Player (exclusive playback)
//!     ↓
//! Audio (HTTP fetch + rodio)      Backend (login URL)
//! ```
//!
//! ## Error Handling Philosophy
//!
//! - **Recoverable issues** such as a track without a playable resource or a
//!   failed preview are reported with `warning!` and the board keeps running
//! - **Fatal issues** such as an unreadable playlist or a failed login end the
//!   command with `error!`
//!
//! ## Usage Patterns
//!
//! ```bash
//! playgencli login                      # Sign in with Spotify via the backend
//! playgencli generate                   # Open the generation form
//! playgencli generate --artists "A, B"  # Regenerate from artists
//! playgencli preview playlist.json      # Preview tracks of a generated playlist
//! playgencli preview                    # Reopen the last playlist
//! ```

mod generate;
mod login;
mod preview;

pub use generate::generate;
pub use login::login;
pub use preview::preview;
