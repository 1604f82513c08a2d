use std::path::PathBuf;

use reqwest::Client;
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::mpsc::{self, UnboundedReceiver},
};

use crate::{
    audio::{AudioOutput, RemotePreview},
    board::TrackBoard,
    config, error, info,
    management::PlaylistManager,
    preview::{PreviewAudio, PreviewEvent, PreviewPlayer},
    spinner::Spinner,
    utils::{self, BoardCommand},
    warning,
};

pub async fn preview(path: Option<PathBuf>, no_audio: bool) {
    let spinner = Spinner::new("Loading playlist...");
    spinner.show();

    let manager = match path {
        Some(path) => match PlaylistManager::load_from_file(&path).await {
            Ok(manager) => {
                if let Err(e) = manager.persist().await {
                    warning!("Failed to cache playlist: {}", e);
                }
                manager
            }
            Err(e) => {
                spinner.hide();
                error!("Cannot load playlist. Err: {}", e)
            }
        },
        None => match PlaylistManager::load_from_cache().await {
            Ok(manager) => manager,
            Err(e) => {
                spinner.hide();
                error!("No cached playlist, pass a playlist file. Err: {}", e)
            }
        },
    };

    let output = if no_audio {
        None
    } else {
        match AudioOutput::open_default() {
            Ok(output) => Some(output),
            Err(e) => {
                warning!("{}. Previews are unavailable.", e);
                None
            }
        }
    };

    let client = Client::new();
    let handle = output.as_ref().map(AudioOutput::handle);
    let board = TrackBoard::new(manager.into_playlist(), |url| {
        handle
            .as_ref()
            .map(|h| RemotePreview::new(url, client.clone(), h.clone()))
    });
    spinner.hide();

    if board.is_empty() {
        warning!("Playlist has no tracks.");
        return;
    }

    if let Some(title) = board.title() {
        info!("{}", title);
    }
    println!("{}", board.table());
    print_help();

    let (player, events) = PreviewPlayer::new(board, config::preview_error_revert());
    run_board(player, events, spawn_stdin_reader()).await;

    drop(output);
}

async fn run_board<A: PreviewAudio>(
    mut player: PreviewPlayer<TrackBoard<A>>,
    mut events: UnboundedReceiver<PreviewEvent>,
    mut lines: UnboundedReceiver<String>,
) {
    loop {
        tokio::select! {
            line = lines.recv() => {
                let Some(line) = line else {
                    break;
                };
                match utils::parse_command(&line) {
                    Some(BoardCommand::Toggle(button)) => match player.page().request(button) {
                        Some(request) => player.dispatch(PreviewEvent::Toggle(request)),
                        None => warning!("There is no track {}", button),
                    },
                    Some(BoardCommand::Hide) => player.dispatch(PreviewEvent::PageHidden),
                    Some(BoardCommand::List) => println!("{}", player.page().table()),
                    Some(BoardCommand::Help) => print_help(),
                    Some(BoardCommand::Quit) => break,
                    None if line.trim().is_empty() => {}
                    None => warning!("Unknown command: {}", line.trim()),
                }
            }
            Some(event) = events.recv() => player.dispatch(event),
            _ = tokio::signal::ctrl_c() => break,
        }
        render_changes(player.page_mut());
    }

    player.dispatch(PreviewEvent::PageHidden);
    render_changes(player.page_mut());
}

fn render_changes<A: PreviewAudio>(board: &mut TrackBoard<A>) {
    for button in board.take_changes() {
        if let Some(line) = board.status_line(button) {
            println!("{}", line);
        }
    }
}

fn spawn_stdin_reader() -> UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

fn print_help() {
    info!("<n> play/stop track n | h hide (pause) | l list | ? help | q quit");
}
