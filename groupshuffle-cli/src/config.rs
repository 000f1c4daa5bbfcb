/// Config file loading and creation for the group-shuffle CLI.
///
/// Config lives at ~/.config/group-shuffle/config.toml.
/// All fields are optional — CLI args override config values.
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::bail;

#[derive(Deserialize, Default, Debug, PartialEq, Eq)]
pub struct GroupShuffleConfig {
    pub input_dir: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub strict: Option<bool>,
    pub seed: Option<u64>,
}

const DEFAULT_CONFIG_TEMPLATE: &str = "\
# group-shuffle configuration
# All values here can be overridden by CLI flags.

# Directory holding one .txt song list per contributor
# input_dir = \"/home/me/playlists\"

# Where to write the combined playlist
# output = \"Playlist.txt\"

# Refuse to run when contributors bring different numbers of songs
# (default: keep the shortest list's length from everyone)
# strict = false

# Fixed random seed for a reproducible playlist
# seed = 42
";

/// Returns the default config path: ~/.config/group-shuffle/config.toml
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| bail("HOME environment variable not set"));
    PathBuf::from(home).join(".config").join("group-shuffle").join("config.toml")
}

/// Load config from a file path. Returns default (all None) if file doesn't exist.
pub fn load_config(path: &Path) -> GroupShuffleConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => parse_config(&content)
            .unwrap_or_else(|e| bail(format!("Failed to parse config at {}: {e}", path.display()))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => GroupShuffleConfig::default(),
        Err(e) => bail(format!("Failed to read config at {}: {e}", path.display())),
    }
}

fn parse_config(content: &str) -> Result<GroupShuffleConfig, toml::de::Error> {
    toml::from_str(content)
}

/// Create the default config file. Errors if it already exists.
pub fn create_default_config(path: &Path) -> PathBuf {
    if path.exists() {
        bail(format!("Config file already exists at {}", path.display()));
    }

    // Create parent directories
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| bail(format!("Failed to create directory {}: {e}", parent.display())));
    }

    std::fs::write(path, DEFAULT_CONFIG_TEMPLATE)
        .unwrap_or_else(|e| bail(format!("Failed to write config to {}: {e}", path.display())));

    path.to_path_buf()
}
