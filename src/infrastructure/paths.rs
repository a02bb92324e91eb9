//! Platform path resolution following the XDG base directory layout.
//!
//! Both directories honour their `XDG_*` variable when it holds an absolute
//! path and fall back to the conventional location under `$HOME`. Resolution
//! is split into pure `*_from` helpers so the rules can be tested without
//! touching the process environment.

use std::env;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "synoscope";

/// Returns the data directory for log files.
///
/// `$XDG_DATA_HOME/synoscope`, else `~/.local/share/synoscope`. `None` when
/// neither variable is usable.
///
/// # Examples
///
/// ```
/// use synoscope::infrastructure::get_data_dir;
///
/// if let Some(dir) = get_data_dir() {
///     assert!(dir.ends_with("synoscope"));
/// }
/// ```
#[must_use]
pub fn get_data_dir() -> Option<PathBuf> {
    data_dir_from(env::var_os("XDG_DATA_HOME").as_deref().map(Path::new), home().as_deref())
}

/// Returns the configuration directory.
///
/// `$XDG_CONFIG_HOME/synoscope`, else `~/.config/synoscope`.
#[must_use]
pub fn get_config_dir() -> Option<PathBuf> {
    config_dir_from(env::var_os("XDG_CONFIG_HOME").as_deref().map(Path::new), home().as_deref())
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading tilde, and every path when `$HOME` is unset, are
/// returned unchanged.
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    expand_tilde_with(path, home().as_deref())
}

fn home() -> Option<PathBuf> {
    env::var_os("HOME").filter(|h| !h.is_empty()).map(PathBuf::from)
}

fn data_dir_from(xdg: Option<&Path>, home: Option<&Path>) -> Option<PathBuf> {
    base_dir(xdg, home, &[".local", "share"]).map(|dir| dir.join(APP_DIR))
}

fn config_dir_from(xdg: Option<&Path>, home: Option<&Path>) -> Option<PathBuf> {
    base_dir(xdg, home, &[".config"]).map(|dir| dir.join(APP_DIR))
}

fn base_dir(xdg: Option<&Path>, home: Option<&Path>, fallback: &[&str]) -> Option<PathBuf> {
    if let Some(xdg) = xdg.filter(|p| p.is_absolute()) {
        return Some(xdg.to_path_buf());
    }
    home.map(|home| fallback.iter().fold(home.to_path_buf(), |dir, part| dir.join(part)))
}

fn expand_tilde_with(path: &str, home: Option<&Path>) -> PathBuf {
    match (path, home) {
        ("~", Some(home)) => home.to_path_buf(),
        (p, Some(home)) if p.starts_with("~/") => home.join(&p[2..]),
        (p, _) => PathBuf::from(p),
    }
}
