mod playlist;

pub use playlist::PlaylistManager;
