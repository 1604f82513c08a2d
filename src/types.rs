use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub name: String,
    #[serde(default)]
    pub artists: String,
    #[serde(default)]
    pub album_name: String,
    #[serde(default)]
    pub album_cover_url: Option<String>,
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub spotify_url: Option<String>,
    #[serde(default)]
    pub uri: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    #[serde(default)]
    pub playlist_name: Option<String>,
    pub tracks: Vec<Track>,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    #[tabled(rename = "#")]
    pub position: usize,
    #[tabled(rename = "preview")]
    pub glyph: String,
    pub name: String,
    pub artists: String,
    pub album: String,
}
