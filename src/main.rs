use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};
use tracing_subscriber::EnvFilter;

use fairshuffle::{
    cli, config, error,
    pipeline::{
        filter::TempoFilter,
        view::{SortColumn, SortDirection, ViewSpec},
    },
};

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
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List your playlists that have tracks
    Playlists,

    /// Show a playlist reordered by artist separation, or sorted by another column
    Show(ViewOptions),

    /// Save the reordered playlist as a new playlist or over the original
    Save(SaveOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ViewOptions {
    /// Playlist id, spotify:playlist: URI or open.spotify.com link
    pub playlist: String,

    /// Column to order the tracks by
    #[clap(long, value_enum, default_value_t = SortColumn::ArtistSeparation)]
    pub sort: SortColumn,

    /// Sort in decreasing order
    #[clap(long)]
    pub desc: bool,

    /// Drop tracks slower than this tempo
    #[clap(long)]
    pub min_bpm: Option<u32>,

    /// Drop tracks faster than this tempo
    #[clap(long)]
    pub max_bpm: Option<u32>,

    /// Do not accept tracks whose doubled tempo falls in range
    #[clap(long)]
    pub no_double: bool,
}

impl ViewOptions {
    fn view_spec(&self) -> ViewSpec<TempoFilter> {
        ViewSpec {
            column: self.sort,
            direction: if self.desc {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            },
            filter: TempoFilter {
                min_bpm: self.min_bpm,
                max_bpm: self.max_bpm,
                include_double: !self.no_double,
            },
        }
    }
}

#[derive(Parser, Debug, Clone)]
pub struct SaveOptions {
    #[command(flatten)]
    pub view: ViewOptions,

    /// Replace the tracks of the original playlist instead of creating a new one
    #[clap(long)]
    pub overwrite: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config::log_filter()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Playlists => cli::list_playlists().await,
        Command::Show(opt) => cli::show(&opt.playlist, opt.view_spec()).await,
        Command::Save(opt) => {
            cli::save(&opt.view.playlist, opt.view.view_spec(), opt.overwrite).await
        }
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
