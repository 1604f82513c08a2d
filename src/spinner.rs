use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Loading overlay shown while the CLI waits on the backend.
///
/// The spinner hides itself when dropped, so work that bails out early never
/// leaves a stale spinner on the terminal.
pub struct Spinner {
    pb: ProgressBar,
}

impl Spinner {
    pub fn new(message: impl Into<String>) -> Self {
        let pb = ProgressBar::new_spinner();
        pb.set_message(message.into());
        if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
            pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
        }
        Self { pb }
    }

    pub fn show(&self) {
        self.pb.enable_steady_tick(Duration::from_millis(100));
    }

    pub fn hide(&self) {
        self.pb.finish_and_clear();
    }

    pub fn is_hidden(&self) -> bool {
        self.pb.is_finished()
    }

    /// Shows the spinner, waits `delay`, then opens `url` in the browser.
    pub async fn show_and_redirect(&self, url: &str, delay: Duration) -> std::io::Result<()> {
        self.show();
        tokio::time::sleep(delay).await;
        let opened = webbrowser::open(url);
        self.hide();
        opened
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if !self.pb.is_finished() {
            self.pb.finish_and_clear();
        }
    }
}
