use std::path::PathBuf;

pub const DEFAULT_USER_AGENT: &str = concat!("curlson/", env!("CARGO_PKG_VERSION"));

const APP_DIR_NAME: &str = ".curlson";

/// Directory holding execution logs: `~/.curlson`, or `./.curlson` when no
/// home directory is known.
#[must_use]
pub fn default_app_dir() -> PathBuf {
    if let Some(home) = user_home_dir() {
        return home.join(APP_DIR_NAME);
    }

    PathBuf::from(APP_DIR_NAME)
}

fn user_home_dir() -> Option<PathBuf> {
    #[cfg(windows)]
    {
        if let Some(value) = std::env::var_os("USERPROFILE") {
            return Some(PathBuf::from(value));
        }
        let drive = std::env::var_os("HOMEDRIVE");
        let path = std::env::var_os("HOMEPATH");
        if let (Some(drive), Some(path)) = (drive, path) {
            let mut full = PathBuf::from(drive);
            full.push(path);
            return Some(full);
        }
    }

    std::env::var_os("HOME")
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
