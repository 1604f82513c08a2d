use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use playgencli::{cli, config, logging, warning};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Print diagnostic output
    #[clap(long, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Sign in with Spotify through the playlist generator backend
    Login,

    /// Open the playlist generator in the browser
    Generate(GenerateOptions),

    /// Preview the tracks of a generated playlist
    Preview(PreviewOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct GenerateOptions {
    /// Regenerate a playlist inspired by these artists (comma separated)
    #[clap(long)]
    pub artists: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct PreviewOptions {
    /// Playlist JSON file; defaults to the last previewed playlist
    pub playlist: Option<PathBuf>,

    /// Do not open an audio device
    #[clap(long)]
    pub no_audio: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment, using defaults. Err: {}", e);
    }

    let cli = Cli::parse();
    if cli.verbose {
        logging::enable_verbose();
    }

    match cli.command {
        Command::Login => cli::login().await,
        Command::Generate(opt) => cli::generate(opt.artists).await,
        Command::Preview(opt) => cli::preview(opt.playlist, opt.no_audio).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
