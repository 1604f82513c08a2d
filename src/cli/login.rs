use reqwest::Client;

use crate::{backend, config, error, spinner::Spinner, success, warning};

pub async fn login() {
    let spinner = Spinner::new("Requesting Spotify login...");
    spinner.show();

    let client = Client::new();
    let url = match backend::login::fetch_login_url(&client, &config::api_url()).await {
        Ok(url) => url,
        Err(e) => {
            spinner.hide();
            warning!("Login error: {}", e);
            error!("Failed to initiate Spotify login. Please try again.");
        }
    };

    spinner.hide();
    if webbrowser::open(&url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            url
        );
        return;
    }

    success!("Continue the Spotify login in your browser.");
}
