use crate::{config, error, info, spinner::Spinner, success, utils, warning};

pub async fn generate(artists: Option<String>) {
    let api = config::api_url();
    let url = match artists {
        Some(artists) => match utils::playlist_generation_url(&api, &artists) {
            Ok(url) => url,
            Err(e) => error!("{}", e),
        },
        None => utils::generate_playlist_url(&api),
    };

    info!("Opening playlist generator at {}", url);
    let spinner = Spinner::new("Opening playlist generator...");
    if let Err(e) = spinner
        .show_and_redirect(&url, config::redirect_delay())
        .await
    {
        warning!(
            "Failed to open browser ({}). Please navigate to the following URL manually:\n{}",
            e,
            url
        );
        return;
    }

    success!("Playlist generator opened in your browser.");
}
