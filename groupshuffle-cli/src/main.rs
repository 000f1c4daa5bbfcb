mod config;
mod input;
mod output;

use clap::Parser;
use groupshuffle_core::{blend, ShuffleOptions, UnevenPolicy};
use std::path::PathBuf;
use tracing::{info, warn};

use crate::input::Contributor;

/// Default playlist file, written to the working directory.
const DEFAULT_OUTPUT: &str = "Playlist.txt";

pub fn bail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

#[derive(Parser)]
#[command(name = "group-shuffle", version, about = "Merge everyone's song lists into one fair, shuffled playlist")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Build a playlist from one song list per contributor
    Shuffle(ShuffleArgs),
    /// Create a default config file at ~/.config/group-shuffle/config.toml
    Init {
        /// Where to write the config (default: ~/.config/group-shuffle/config.toml)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Parser)]
struct ShuffleArgs {
    /// Song list files, one per contributor, one "title,owner" per line
    files: Vec<PathBuf>,

    /// Use every .txt file in this directory as a contributor
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Playlist file to create or overwrite (default: Playlist.txt)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Fixed random seed for a reproducible playlist
    #[arg(long)]
    seed: Option<u64>,

    /// Fail instead of truncating when contributors bring different numbers of songs
    #[arg(long)]
    strict: bool,

    /// Print JSON instead of one song per line
    #[arg(long)]
    json: bool,

    /// Only print the playlist, don't write the output file
    #[arg(long)]
    no_write: bool,

    /// Show progress during execution
    #[arg(short, long)]
    verbose: bool,

    /// Path to config file (default: ~/.config/group-shuffle/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Shuffle(args) => {
            init_tracing(args.verbose);
            run_shuffle(args);
        }
        Commands::Init { config: config_override } => {
            let path = config_override.unwrap_or_else(config::config_path);
            let path = config::create_default_config(&path);
            println!("Created config at {}", path.display());
            println!("Edit it to set your default input directory, output file, etc.");
        }
    }
}

fn run_shuffle(args: ShuffleArgs) {
    // Load config file, merge with CLI args (CLI wins)
    let config_path = args.config.clone().unwrap_or_else(config::config_path);
    let cfg = config::load_config(&config_path);

    let output_path = args.output.clone()
        .or(cfg.output)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
    let strict = args.strict || cfg.strict.unwrap_or(false);
    let seed = args.seed.or(cfg.seed);

    let files = if !args.files.is_empty() {
        args.files.clone()
    } else {
        let dir = args.dir.clone()
            .or(cfg.input_dir)
            .unwrap_or_else(|| {
                bail(format!(
                    "No song lists provided. Pass files, --dir, or set input_dir in {}",
                    config_path.display()
                ))
            });
        input::discover(&dir, Some(&output_path)).unwrap_or_else(|e| bail(e))
    };

    let contributors: Vec<Contributor> = files
        .iter()
        .map(|path| input::read_contributor(path).unwrap_or_else(|e| bail(e)))
        .collect();

    for c in &contributors {
        info!(contributor = %c.name, songs = c.songs.len(), skipped = c.skipped, "Contributor loaded");
        if c.songs.is_empty() {
            warn!(contributor = %c.name, "Contributor has no songs; the playlist will be empty");
        }
    }

    let names: Vec<String> = contributors.iter().map(|c| c.name.clone()).collect();
    let lists = contributors.into_iter().map(|c| c.songs).collect();

    let options = ShuffleOptions {
        policy: if strict { UnevenPolicy::Reject } else { UnevenPolicy::Truncate },
        seed,
    };

    let playlist = blend(lists, &options).unwrap_or_else(|e| bail(e));

    if playlist.dropped() > 0 {
        warn!(
            dropped = playlist.dropped(),
            kept_each = playlist.songs_per_contributor(),
            "Contributors brought different numbers of songs; extra songs left out"
        );
    }
    info!(
        contributors = playlist.contributors(),
        songs = playlist.len(),
        "Playlist shuffled"
    );

    if args.json {
        output::print_json(&playlist, &names);
    } else {
        output::print_list(&playlist);
    }

    if !args.no_write {
        output::write_playlist(&output_path, &playlist)
            .unwrap_or_else(|e| bail(format!("Failed to write {}: {e}", output_path.display())));
        info!(path = %output_path.display(), "Playlist written");
    }
}
