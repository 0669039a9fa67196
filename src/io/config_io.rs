use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::Config;

/// Name of the config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "tasktrack.toml";

/// Environment variable naming a config file
pub const CONFIG_ENV_VAR: &str = "TASKTRACK_CONFIG";

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Pick the config file to load: explicit path, then `$TASKTRACK_CONFIG`,
/// then `tasktrack.toml` in `cwd` if it exists.
pub fn resolve_config_path(
    explicit: Option<&Path>,
    env_value: Option<&str>,
    cwd: &Path,
) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(value) = env_value.filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(value));
    }
    let local = cwd.join(CONFIG_FILE_NAME);
    local.is_file().then_some(local)
}

/// Read and parse a config file
pub fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load the effective config for this process
pub fn load_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    let env_value = std::env::var(CONFIG_ENV_VAR).ok();
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    match resolve_config_path(explicit, env_value.as_deref(), &cwd) {
        Some(path) => {
            let config = read_config(&path)?;
            tracing::info!(path = %path.display(), "loaded config");
            Ok(config)
        }
        None => {
            tracing::debug!("no config file found, using defaults");
            Ok(Config::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::view_mode::ViewMode;
    use tempfile::TempDir;

    #[test]
    fn explicit_path_wins() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "").unwrap();
        let explicit = dir.path().join("other.toml");
        assert_eq!(
            resolve_config_path(Some(&explicit), Some("/env.toml"), dir.path()),
            Some(explicit)
        );
    }

    #[test]
    fn env_var_beats_local_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "").unwrap();
        assert_eq!(
            resolve_config_path(None, Some("/env.toml"), dir.path()),
            Some(PathBuf::from("/env.toml"))
        );
    }

    #[test]
    fn empty_env_var_is_ignored() {
        let dir = TempDir::new().unwrap();
        assert_eq!(resolve_config_path(None, Some(""), dir.path()), None);
    }

    #[test]
    fn local_file_used_when_present() {
        let dir = TempDir::new().unwrap();
        assert_eq!(resolve_config_path(None, None, dir.path()), None);
        fs::write(dir.path().join(CONFIG_FILE_NAME), "").unwrap();
        assert_eq!(
            resolve_config_path(None, None, dir.path()),
            Some(dir.path().join(CONFIG_FILE_NAME))
        );
    }

    #[test]
    fn read_config_parses_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[general]\ndefault_view = \"yesterday\"\n").unwrap();
        let config = read_config(&path).unwrap();
        assert_eq!(config.general.default_view, ViewMode::Yesterday);
    }

    #[test]
    fn read_missing_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let err = read_config(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
        assert!(err.to_string().contains("nope.toml"));
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[page\ntitle = ").unwrap();
        let err = read_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn load_config_reads_explicit_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("board.toml");
        fs::write(&path, "[page]\ntitle = \"Ops\"\n").unwrap();
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.page.title, "Ops");
    }
}
