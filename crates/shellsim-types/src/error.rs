//! Error types for shellsim.
//!
//! Two layers: [`ShellError`] is what a user sees in the terminal after a
//! failed command, and [`SimError`] covers host-level failures such as a bad
//! seed file or an unreadable config.

use std::io;

/// A non-fatal command failure. `Display` yields the exact shell message.
///
/// The `context` fields carry the command-specific prefix (for example
/// `rm: cannot remove 'notes.txt'`); the variant supplies the reason.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShellError {
    #[error("{context}: No such file or directory")]
    NotFound { context: String },

    #[error("{context}: Is a directory")]
    IsADirectory { context: String },

    #[error("{context}: Not a directory")]
    NotADirectory { context: String },

    #[error("{context}: File exists")]
    AlreadyExists { context: String },

    #[error("{cmd}: missing {operand}")]
    MissingOperand { cmd: String, operand: &'static str },

    #[error("bash: {0}: command not found")]
    UnknownCommand(String),

    #[error("{cmd}: '{arg}': not a valid identifier")]
    InvalidIdentifier { cmd: String, arg: String },

    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    Usage(String),

    #[error("No manual entry for {0}")]
    NoManualEntry(String),
}

impl ShellError {
    pub fn not_found(context: impl Into<String>) -> Self {
        Self::NotFound {
            context: context.into(),
        }
    }

    pub fn is_a_directory(context: impl Into<String>) -> Self {
        Self::IsADirectory {
            context: context.into(),
        }
    }

    pub fn not_a_directory(context: impl Into<String>) -> Self {
        Self::NotADirectory {
            context: context.into(),
        }
    }

    pub fn already_exists(context: impl Into<String>) -> Self {
        Self::AlreadyExists {
            context: context.into(),
        }
    }

    /// `<cmd>: missing <operand>`, e.g. `missing_operand("cat", "file operand")`.
    pub fn missing_operand(cmd: impl Into<String>, operand: &'static str) -> Self {
        Self::MissingOperand {
            cmd: cmd.into(),
            operand,
        }
    }
}

/// Structural failures from the virtual filesystem tree.
///
/// These carry the absolute path involved; commands turn them into a
/// [`ShellError`] with their own message prefix via [`FsError::with_context`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FsError {
    #[error("no such file or directory: {0}")]
    NotFound(String),

    #[error("not a directory: {0}")]
    NotADirectory(String),

    #[error("already exists: {0}")]
    AlreadyExists(String),

    #[error("invalid name: {0:?}")]
    InvalidName(String),
}

impl FsError {
    /// Attach a command-specific prefix, producing the user-facing error.
    pub fn with_context(self, context: impl Into<String>) -> ShellError {
        let context = context.into();
        match self {
            Self::NotFound(_) => ShellError::not_found(context),
            Self::NotADirectory(_) => ShellError::not_a_directory(context),
            Self::AlreadyExists(_) => ShellError::already_exists(context),
            Self::InvalidName(_) => {
                ShellError::InvalidArgument(format!("{context}: Invalid argument"))
            },
        }
    }
}

/// Errors produced outside command execution: loading seeds and configs.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("seed error: {0}")]
    Seed(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for host-level results.
pub type Result<T> = std::result::Result<T, SimError>;

/// Result type returned by command handlers.
pub type ShellResult<T> = std::result::Result<T, ShellError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display() {
        let e = ShellError::not_found("rm: cannot remove 'ghost'");
        assert_eq!(
            format!("{e}"),
            "rm: cannot remove 'ghost': No such file or directory"
        );
    }

    #[test]
    fn is_a_directory_display() {
        let e = ShellError::is_a_directory("cat: documents");
        assert_eq!(format!("{e}"), "cat: documents: Is a directory");
    }

    #[test]
    fn not_a_directory_display() {
        let e = ShellError::not_a_directory("ls: cannot access 'a.txt/'");
        assert_eq!(format!("{e}"), "ls: cannot access 'a.txt/': Not a directory");
    }

    #[test]
    fn already_exists_display() {
        let e = ShellError::already_exists("mkdir: cannot create directory 'docs'");
        assert_eq!(
            format!("{e}"),
            "mkdir: cannot create directory 'docs': File exists"
        );
    }

    #[test]
    fn missing_operand_display() {
        assert_eq!(
            ShellError::missing_operand("cat", "file operand").to_string(),
            "cat: missing file operand"
        );
        assert_eq!(
            ShellError::missing_operand("mkdir", "operand").to_string(),
            "mkdir: missing operand"
        );
    }

    #[test]
    fn unknown_command_display() {
        let e = ShellError::UnknownCommand("foo".into());
        assert_eq!(format!("{e}"), "bash: foo: command not found");
    }

    #[test]
    fn invalid_identifier_display() {
        let e = ShellError::InvalidIdentifier {
            cmd: "export".into(),
            arg: "1FOO=bar".into(),
        };
        assert_eq!(format!("{e}"), "export: '1FOO=bar': not a valid identifier");
    }

    #[test]
    fn no_manual_entry_display() {
        let e = ShellError::NoManualEntry("frobnicate".into());
        assert_eq!(format!("{e}"), "No manual entry for frobnicate");
    }

    #[test]
    fn fs_error_takes_command_context() {
        let e = FsError::NotFound("/tmp/x".into()).with_context("touch: cannot touch 'x'");
        assert_eq!(e.to_string(), "touch: cannot touch 'x': No such file or directory");

        let e = FsError::AlreadyExists("/tmp".into()).with_context("mkdir: cannot create directory 'tmp'");
        assert_eq!(e.to_string(), "mkdir: cannot create directory 'tmp': File exists");

        let e = FsError::InvalidName("..".into()).with_context("mkdir: cannot create directory 'a/..'");
        assert_eq!(
            e.to_string(),
            "mkdir: cannot create directory 'a/..': Invalid argument"
        );
    }

    #[test]
    fn seed_error_display() {
        let e = SimError::Seed("root must be a directory".into());
        assert_eq!(format!("{e}"), "seed error: root must be a directory");
    }

    #[test]
    fn config_error_display() {
        let e = SimError::Config("home must be absolute".into());
        assert_eq!(format!("{e}"), "config error: home must be absolute");
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let e: SimError = io_err.into();
        let msg = format!("{e}");
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn toml_error_from_conversion() {
        let toml_err = toml::from_str::<toml::Value>("this is [[[not valid toml").unwrap_err();
        let e: SimError = toml_err.into();
        assert!(format!("{e}").contains("TOML parse error"));
    }

    #[test]
    fn json_error_from_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let e: SimError = json_err.into();
        assert!(format!("{e}").contains("JSON error"));
    }

    #[test]
    fn shell_result_alias_err() {
        let r: ShellResult<()> = Err(ShellError::Usage("Usage: find [path] -name [pattern]".into()));
        assert_eq!(
            r.unwrap_err().to_string(),
            "Usage: find [path] -name [pattern]"
        );
    }
}
