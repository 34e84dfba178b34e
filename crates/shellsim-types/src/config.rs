//! Per-session shell configuration, loadable from TOML.
//!
//! Every field has a default, so an empty document (or no file at all) yields
//! the classic teaching setup: `user@linux` with home `/home/user`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};

/// Identity and behaviour knobs for a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Login name, reported by `whoami` and shown in the prompt.
    #[serde(default = "default_user")]
    pub user: String,
    /// Host name shown in the prompt.
    #[serde(default = "default_hostname")]
    pub hostname: String,
    /// Home directory; the initial cwd and the target of `cd` / `cd ~`.
    #[serde(default = "default_home")]
    pub home: String,
    /// Initial value of `$PATH`.
    #[serde(default = "default_path")]
    pub path: String,
    /// Maximum number of lines kept by `history`.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
    /// Emit ANSI colour in `ls` and the prompt.
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_user() -> String {
    "user".to_string()
}
fn default_hostname() -> String {
    "linux".to_string()
}
fn default_home() -> String {
    "/home/user".to_string()
}
fn default_path() -> String {
    "/usr/bin:/usr/local/bin".to_string()
}
fn default_history_limit() -> usize {
    100
}
fn default_color() -> bool {
    true
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            user: default_user(),
            hostname: default_hostname(),
            home: default_home(),
            path: default_path(),
            history_limit: default_history_limit(),
            color: default_color(),
        }
    }
}

impl ShellConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(src: &str) -> Result<Self> {
        let config: Self = toml::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path)?;
        log::debug!("loaded config from {}", path.display());
        Self::from_toml_str(&src)
    }

    /// Reject values the session cannot work with.
    pub fn validate(&self) -> Result<()> {
        if !self.home.starts_with('/') {
            return Err(SimError::Config(format!(
                "home must be an absolute path, got '{}'",
                self.home
            )));
        }
        if self.user.is_empty() || self.user.chars().any(char::is_whitespace) {
            return Err(SimError::Config(format!(
                "invalid user name '{}'",
                self.user
            )));
        }
        if self.history_limit == 0 {
            return Err(SimError::Config(
                "history_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_teaching_setup() {
        let c = ShellConfig::default();
        assert_eq!(c.user, "user");
        assert_eq!(c.hostname, "linux");
        assert_eq!(c.home, "/home/user");
        assert_eq!(c.path, "/usr/bin:/usr/local/bin");
        assert_eq!(c.history_limit, 100);
        assert!(c.color);
    }

    #[test]
    fn empty_document_uses_defaults() {
        let c = ShellConfig::from_toml_str("").unwrap();
        assert_eq!(c, ShellConfig::default());
    }

    #[test]
    fn partial_document_overrides_fields() {
        let c = ShellConfig::from_toml_str("user = \"alice\"\ncolor = false\n").unwrap();
        assert_eq!(c.user, "alice");
        assert!(!c.color);
        assert_eq!(c.home, "/home/user");
    }

    #[test]
    fn relative_home_rejected() {
        let err = ShellConfig::from_toml_str("home = \"home/user\"").unwrap_err();
        assert!(matches!(err, SimError::Config(_)));
    }

    #[test]
    fn zero_history_rejected() {
        let err = ShellConfig::from_toml_str("history_limit = 0").unwrap_err();
        assert!(err.to_string().contains("history_limit"));
    }

    #[test]
    fn bad_toml_is_parse_error() {
        let err = ShellConfig::from_toml_str("user = ").unwrap_err();
        assert!(matches!(err, SimError::TomlParse(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "hostname = \"sandbox\"").unwrap();
        let c = ShellConfig::load(file.path()).unwrap();
        assert_eq!(c.hostname, "sandbox");
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ShellConfig::load(dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, SimError::Io(_)));
    }
}
