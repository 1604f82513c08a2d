use playgencli::board::TrackBoard;
use playgencli::error::PreviewError;
use playgencli::preview::*;
use playgencli::types::{Playlist, Track};

// The board never plays anything itself; a unit audio type is enough
#[derive(Clone)]
struct SilentAudio;

impl PreviewAudio for SilentAudio {
    fn is_paused(&self) -> bool {
        true
    }

    fn pause(&self) {}

    fn rewind(&self) {}

    fn play(&self, _observer: PlaybackObserver) -> Result<(), PreviewError> {
        Ok(())
    }
}

fn create_test_board() -> TrackBoard<SilentAudio> {
    let track = |name: &str, preview: Option<&str>| Track {
        name: name.to_string(),
        artists: "Artist".to_string(),
        album_name: "Album".to_string(),
        album_cover_url: None,
        preview_url: preview.map(str::to_string),
        spotify_url: None,
        uri: None,
    };

    let playlist = Playlist {
        playlist_name: Some("Board".to_string()),
        tracks: vec![
            track("With Preview", Some("https://p.scdn.co/mp3-preview/a")),
            track("Null Preview", Some("null")),
            track("No Preview", None),
        ],
    };

    TrackBoard::new(playlist, |_| Some(SilentAudio))
}

#[test]
fn test_board_resolves_audio_only_for_real_previews() {
    let board = create_test_board();

    assert_eq!(board.len(), 3);
    assert_eq!(board.title(), Some("Board"));
    assert!(board.resolve_audio(ButtonId(0)).is_some());
    assert!(board.resolve_audio(ButtonId(1)).is_none());
    assert!(board.resolve_audio(ButtonId(2)).is_none());
    assert!(board.resolve_audio(ButtonId(3)).is_none());
}

#[test]
fn test_board_requests_carry_row_preview_url() {
    let board = create_test_board();

    let request = board.request(ButtonId(0)).unwrap();
    assert_eq!(request.button, ButtonId(0));
    assert!(request.has_preview());

    assert!(!board.request(ButtonId(1)).unwrap().has_preview());
    assert!(!board.request(ButtonId(2)).unwrap().has_preview());
    assert!(board.request(ButtonId(9)).is_none());
}

#[test]
fn test_board_take_changes_reports_each_change_once() {
    let mut board = create_test_board();
    assert!(board.take_changes().is_empty());

    board.button_mut(ButtonId(0)).unwrap().set_glyph(Glyph::Loading);
    board
        .button_mut(ButtonId(0))
        .unwrap()
        .add_class(ButtonClass::Loading);

    assert_eq!(board.take_changes(), vec![ButtonId(0)]);
    assert!(board.take_changes().is_empty());

    let line = board.status_line(ButtonId(0)).unwrap();
    assert!(line.contains("⏳"));
    assert!(line.contains("With Preview"));
}

#[test]
fn test_board_table_lists_tracks() {
    let board = create_test_board();
    let table = board.table().to_string();

    assert!(table.contains("With Preview"));
    assert!(table.contains("Null Preview"));
    assert!(table.contains("▶"));
    assert_eq!(board.playing_count(), 0);
}
