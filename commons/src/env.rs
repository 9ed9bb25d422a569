use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = ".hemi-bridge";
const CONFIG_FILE: &str = "config.env";

// Loads `.env` from the working directory, then `~/.hemi-bridge/config.env` as defaults.
// Variables already present in the process environment are never overwritten.
pub fn load_env() {
    let _ = dotenv::dotenv();

    if let Some(dir) = home_config_dir() {
        let _ = dotenv::from_path(dir.join(CONFIG_FILE));
    }
}

pub fn load_env_from_paths(local_env: &Path, default_config: &Path) {
    let _ = dotenv::from_path(local_env);
    let _ = dotenv::from_path(default_config);
}

fn home_config_dir() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_DIR))
}
