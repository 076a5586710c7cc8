//! Path helpers for the plugin sandbox.

use std::path::PathBuf;

/// Directory for files the plugin writes (span exports).
///
/// ```
/// assert!(zelect::infrastructure::get_data_dir().ends_with("zelect"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("zelect")
}

/// Maps a leading `~` onto the sandbox mount of the host home.
///
/// ```
/// use zelect::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_tilde_is_host_root() {
        assert_eq!(expand_tilde("~"), "/host");
        assert_eq!(expand_tilde("~user/x"), "~user/x");
    }
}
