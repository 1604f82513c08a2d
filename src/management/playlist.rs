use std::path::{Path, PathBuf};

use crate::{config, types::Playlist};

/// Keeps the last loaded playlist in the local cache so `preview` can be
/// re-run without a path.
pub struct PlaylistManager {
    playlist: Playlist,
}

impl PlaylistManager {
    pub fn new(playlist: Playlist) -> Self {
        PlaylistManager { playlist }
    }

    pub async fn load_from_file(path: &Path) -> Result<Self, String> {
        let content = async_fs::read_to_string(path)
            .await
            .map_err(|e| format!("{}: {}", path.display(), e))?;
        let playlist = Self::parse(&content)?;
        Ok(Self { playlist })
    }

    pub async fn load_from_cache() -> Result<Self, String> {
        Self::load_from_file(&Self::cache_path()).await
    }

    /// Accepts either a full playlist object or a bare array of tracks.
    pub fn parse(content: &str) -> Result<Playlist, String> {
        let value: serde_json::Value = serde_json::from_str(content).map_err(|e| e.to_string())?;
        if value.is_array() {
            let tracks = serde_json::from_value(value).map_err(|e| e.to_string())?;
            return Ok(Playlist {
                playlist_name: None,
                tracks,
            });
        }
        serde_json::from_value(value).map_err(|e| e.to_string())
    }

    pub async fn persist(&self) -> Result<(), String> {
        let path = Self::cache_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(&self.playlist).map_err(|e| e.to_string())?;
        async_fs::write(path, json).await.map_err(|e| e.to_string())
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn into_playlist(self) -> Playlist {
        self.playlist
    }

    pub fn cache_path() -> PathBuf {
        let mut path = config::data_dir();
        path.push("cache/playlist.json");
        path
    }
}
