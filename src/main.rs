use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotlike::{cli, config, management::RotationPolicy, utils};

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
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Like the current track and file it into this month's playlists
    Add(AddOptions),

    /// Show the track that is currently playing
    Current,

    /// List the month and year playlists managed by the rotation
    Playlists,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct AddOptions {
    /// File the track as if played on this date (YYYY-MM-DD)
    #[clap(long, value_parser = utils::parse_date)]
    pub date: Option<NaiveDate>,

    /// Which playlists the track is filed into
    #[clap(
        long,
        value_enum,
        env = "SPOTLIKE_ROTATION_POLICY",
        default_value_t = RotationPolicy::MonthAndYear
    )]
    pub policy: RotationPolicy,

    /// Also write the status line to this file
    #[clap(long)]
    pub output_file: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = config::load_env().await {
        log::warn!("cannot load environment: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Add(opt) => cli::add(opt.date, opt.policy, opt.output_file).await,
        Command::Current => cli::current().await,
        Command::Playlists => cli::playlists().await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
