//! # Backend Module
//!
//! HTTP calls to the playlist generator backend. The backend owns the Spotify
//! OAuth flow and playlist generation; the CLI only asks it where to send the
//! user and then hands that URL to the system browser.
//!
//! ## Endpoints
//!
//! - `GET {api}/login` - returns the Spotify authorization URL as plain text,
//!   see [`login::fetch_login_url`]
//! - `GET {api}/generate-playlist` - playlist generation form (browser only)
//! - `GET {api}/playlist-generation?artists=..` - regenerate from an artist
//!   list (browser only)
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use playgencli::{backend, config};
//!
//! let client = reqwest::Client::new();
//! let url = backend::login::fetch_login_url(&client, &config::api_url()).await?;
//! webbrowser::open(&url)?;
//! ```

pub mod login;
