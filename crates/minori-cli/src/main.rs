use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use minori_api::KindSelector;
use minori_core::models::ListName;

mod commands;
mod logging;

use commands::{config as config_cmd, lists, progress, random, search};

#[derive(Parser)]
#[command(name = "minori")]
#[command(about = "minori - your movie, TV, and anime wishlist")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the catalogs
    #[command(
        long_about = "Search TMDB (movies, TV) and Jikan (anime) for a title. Pass --add N to put the N-th result straight onto a list."
    )]
    Search {
        query: String,

        /// Which catalogs to search
        #[arg(long, value_enum, default_value = "all")]
        kind: KindArg,

        /// Bias movie results toward a release region (e.g. "IN")
        #[arg(long)]
        region: Option<String>,

        /// Add result N (1-based) from this search
        #[arg(long, value_name = "N")]
        add: Option<usize>,

        /// Target list for --add (defaults to the configured list)
        #[arg(long, value_enum)]
        list: Option<ListArg>,
    },

    /// Pick something at random from the popular pools, or from your own
    /// to-watch list
    Random {
        #[arg(long, value_enum, default_value = "movie")]
        kind: KindArg,

        /// Filter the pool to a genre (action, comedy, drama, horror, ...)
        #[arg(long)]
        genre: Option<String>,

        /// Pick from the to-watch list instead of discovering new titles
        #[arg(long, action = ArgAction::SetTrue)]
        from_watchlist: bool,

        /// Add the pick to the to-watch list
        #[arg(long, action = ArgAction::SetTrue)]
        add: bool,
    },

    /// Print one list
    List {
        #[arg(value_enum, default_value = "to-watch")]
        list: ListArg,
    },

    /// Print everything you've saved, A to Z
    Catalogue,

    /// Show one item in detail
    Show { id: String },

    /// Remove an item from a list
    Remove {
        id: String,
        #[arg(long, value_enum, default_value = "to-watch")]
        list: ListArg,
    },

    /// Move an item between the two lists
    Move {
        id: String,
        #[arg(long, value_enum)]
        from: ListArg,
        #[arg(long, value_enum)]
        to: ListArg,
    },

    /// Toggle an episode watched/unwatched in the current season
    Watch { id: String, episode: u32 },

    /// Change the episode and season counts (destructive when shrinking)
    Resize {
        id: String,
        #[arg(long)]
        episodes: u32,
        /// New season count; defaults to the current one
        #[arg(long)]
        seasons: Option<u32>,
    },

    /// Overwrite one season's progress wholesale
    SetSeason {
        id: String,
        #[arg(long)]
        season: u32,
        /// Comma-separated watched episode numbers, e.g. --watched 1,2,3
        #[arg(long, value_delimiter = ',')]
        watched: Vec<u32>,
        /// Next episode to watch
        #[arg(long)]
        current: u32,
        #[arg(long)]
        episodes: Option<u32>,
        #[arg(long)]
        seasons: Option<u32>,
    },

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        cmd: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the current configuration (masks the TMDB key)
    Show,
    /// Store the TMDB v3 API key
    SetTmdbKey { key: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum KindArg {
    All,
    Movie,
    Tv,
    Anime,
}

impl From<KindArg> for KindSelector {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::All => Self::All,
            KindArg::Movie => Self::Movie,
            KindArg::Tv => Self::Tv,
            KindArg::Anime => Self::Anime,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ListArg {
    ToWatch,
    Watched,
}

impl From<ListArg> for ListName {
    fn from(arg: ListArg) -> Self {
        match arg {
            ListArg::ToWatch => Self::ToWatch,
            ListArg::Watched => Self::Watched,
        }
    }
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Search {
            query,
            kind,
            region,
            add,
            list,
        } => search::run_search(&query, kind.into(), region.as_deref(), add, list.map(Into::into)).await,
        Commands::Random {
            kind,
            genre,
            from_watchlist,
            add,
        } => random::run_random(kind.into(), genre.as_deref(), from_watchlist, add).await,
        Commands::List { list } => lists::run_list(list.into()),
        Commands::Catalogue => lists::run_catalogue(),
        Commands::Show { id } => lists::run_show(&id),
        Commands::Remove { id, list } => lists::run_remove(&id, list.into()),
        Commands::Move { id, from, to } => lists::run_move(&id, from.into(), to.into()),
        Commands::Watch { id, episode } => progress::run_watch(&id, episode),
        Commands::Resize {
            id,
            episodes,
            seasons,
        } => progress::run_resize(&id, episodes, seasons),
        Commands::SetSeason {
            id,
            season,
            watched,
            current,
            episodes,
            seasons,
        } => progress::run_set_season(&id, season, watched, current, episodes, seasons),
        Commands::Config { cmd } => match cmd {
            ConfigCommands::Show => config_cmd::run_show(),
            ConfigCommands::SetTmdbKey { key } => config_cmd::run_set_tmdb_key(key),
        },
    }
}
