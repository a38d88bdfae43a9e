use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".cmakelintrc";
const XDG_CONFIG_FILE_NAME: &str = "cmakelintrc";

/// Paths where a configuration file is looked for, in order of priority:
///
/// 1. `.cmakelintrc` in the working directory,
/// 2. `cmakelintrc` in `$XDG_CONFIG_DIR` (`~/.config` when unset),
/// 3. `.cmakelintrc` in the home directory.
pub fn candidate_config_paths(
    cwd: &Path,
    home: Option<&Path>,
    xdg_config_dir: Option<&Path>,
) -> Vec<PathBuf> {
    let mut candidates = vec![cwd.join(CONFIG_FILE_NAME)];

    let xdg = match (xdg_config_dir, home) {
        (Some(xdg), _) => Some(xdg.to_path_buf()),
        (None, Some(home)) => Some(home.join(".config")),
        (None, None) => None,
    };
    if let Some(xdg) = xdg {
        candidates.push(xdg.join(XDG_CONFIG_FILE_NAME));
    }
    if let Some(home) = home {
        candidates.push(home.join(CONFIG_FILE_NAME));
    }

    candidates
}

/// Find the configuration file that applies when none is passed explicitly.
pub fn discover_config(cwd: &Path) -> Option<PathBuf> {
    let home = etcetera::home_dir().ok();
    let xdg = std::env::var_os("XDG_CONFIG_DIR").map(PathBuf::from);

    let found = candidate_config_paths(cwd, home.as_deref(), xdg.as_deref())
        .into_iter()
        .find(|path| path.is_file());

    match &found {
        Some(path) => tracing::debug!("Using configuration file {}", path.display()),
        None => tracing::debug!("No configuration file found"),
    }

    found
}

/// Resolve the configuration file to use given the value of `--config`.
///
/// Without a value the file is discovered with [discover_config]. The value
/// `None` disables configuration files altogether. An explicit path that is
/// not a file is ignored.
pub fn resolve_config(explicit: Option<&str>, cwd: &Path) -> Option<PathBuf> {
    match explicit {
        None => discover_config(cwd),
        Some("None") => None,
        Some(path) => {
            let path = cwd.join(path);
            if path.is_file() {
                Some(path)
            } else {
                tracing::warn!(
                    "Configuration file {} does not exist, ignoring it",
                    path.display()
                );
                None
            }
        }
    }
}
