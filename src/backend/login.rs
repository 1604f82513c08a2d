use reqwest::Client;

use crate::{debug, error::PreviewError};

/// Asks the backend for the Spotify authorization URL.
///
/// Sends `GET {api_url}/login` and expects the redirect URL as the plain-text
/// response body.
///
/// # Arguments
///
/// * `client` - HTTP client used for the request
/// * `api_url` - Backend API base URL without a trailing slash
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(String)` - The trimmed redirect URL
/// - `Err(PreviewError::Network)` - Transport failure, non-success status, or
///   an empty body
///
/// # Example
///
/// ```
/// let url = fetch_login_url(&Client::new(), "http://localhost:8080/api").await?;
/// println!("Continue at {}", url);
/// ```
pub async fn fetch_login_url(client: &Client, api_url: &str) -> Result<String, PreviewError> {
    let endpoint = format!("{}/login", api_url);
    debug!("requesting login URL from {}", endpoint);

    let res = client.get(&endpoint).send().await?;

    let status = res.status();
    if !status.is_success() {
        return Err(PreviewError::Network(format!(
            "HTTP error! status: {}",
            status.as_u16()
        )));
    }

    let url = res.text().await?.trim().to_string();
    if url.is_empty() {
        return Err(PreviewError::Network(
            "backend returned an empty login URL".to_string(),
        ));
    }

    Ok(url)
}
