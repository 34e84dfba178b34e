//! One isolated shell instance: filesystem, cwd, variables, history.

use serde::Serialize;
use shellsim_types::config::ShellConfig;
use shellsim_types::error::Result;
use shellsim_vfs::{Filesystem, Node, path};

use crate::env::EnvStore;
use crate::interpreter::{CommandRegistry, Environment};

/// Most suggestions `complete` returns.
const MAX_COMPLETIONS: usize = 10;

/// Commands whose arguments complete as paths.
const PATH_COMMANDS: &[&str] = &["cd", "ls", "cat", "rm", "cp", "mv", "touch", "mkdir"];

/// What one call to [`Session::execute`] produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionResult {
    /// Text to show, possibly multi-line and possibly containing ANSI codes.
    pub output: String,
    /// Working directory after the command ran.
    pub new_directory: String,
}

/// A shell session. Each session owns a private copy of its seed filesystem,
/// so nothing done in one session is visible from another.
pub struct Session {
    registry: CommandRegistry,
    fs: Filesystem,
    cwd: String,
    vars: EnvStore,
    history: Vec<String>,
    config: ShellConfig,
}

impl Session {
    /// Start a session on a copy of `seed` with the default config.
    pub fn new(seed: &Node) -> Result<Self> {
        Self::with_config(seed, ShellConfig::default())
    }

    /// Start a session on a copy of `seed`.
    ///
    /// The session starts in `config.home` when the seed has that directory,
    /// otherwise in `/`.
    pub fn with_config(seed: &Node, config: ShellConfig) -> Result<Self> {
        config.validate()?;
        let fs = Filesystem::from_seed(seed)?;
        let home = path::normalize(&config.home);
        let cwd = if fs.is_dir(&home) {
            home
        } else {
            "/".to_string()
        };

        let mut registry = CommandRegistry::new();
        crate::register_builtins(&mut registry);

        log::info!("session started for {} in {cwd}", config.user);
        Ok(Self {
            registry,
            vars: EnvStore::from_config(&config, &cwd),
            fs,
            cwd,
            history: Vec::new(),
            config,
        })
    }

    /// Run one input line. Never fails: errors come back as output text.
    pub fn execute(&mut self, line: &str) -> ExecutionResult {
        let line = line.trim();
        if !line.is_empty() {
            self.record(line);
        }

        let mut env = Environment {
            cwd: self.cwd.clone(),
            fs: &mut self.fs,
            vars: &mut self.vars,
            history: &self.history,
            config: &self.config,
        };
        let output = match self.registry.execute(line, &mut env) {
            Ok(out) => out.render(),
            Err(e) => {
                log::debug!("command failed: {e}");
                e.to_string()
            },
        };
        // A command may only move the cursor onto an existing directory.
        if env.fs.is_dir(&env.cwd) {
            self.cwd = env.cwd;
        }

        ExecutionResult {
            output,
            new_directory: self.cwd.clone(),
        }
    }

    fn record(&mut self, line: &str) {
        if self.history.last().map(String::as_str) == Some(line) {
            return;
        }
        self.history.push(line.to_string());
        let excess = self.history.len().saturating_sub(self.config.history_limit);
        if excess > 0 {
            self.history.drain(..excess);
        }
    }

    pub fn current_directory(&self) -> &str {
        &self.cwd
    }

    pub fn filesystem(&self) -> &Filesystem {
        &self.fs
    }

    pub fn env(&self) -> &EnvStore {
        &self.vars
    }

    /// Lines entered so far, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// The prompt a terminal shows before the next line.
    pub fn prompt(&self) -> String {
        let ShellConfig { user, hostname, .. } = &self.config;
        if self.config.color {
            format!(
                "\x1b[1;32m{user}@{hostname}\x1b[0m:\x1b[1;34m{}\x1b[0m$ ",
                self.cwd
            )
        } else {
            format!("{user}@{hostname}:{}$ ", self.cwd)
        }
    }

    /// Suggest completions for a partially typed line.
    ///
    /// A single word completes against command names. The last argument of
    /// a path-taking command completes against the entries of the directory
    /// it names; directories get a trailing `/`.
    pub fn complete(&self, input: &str) -> Vec<String> {
        let tokens: Vec<&str> = input.split(' ').collect();
        match tokens.as_slice() {
            [] | [""] => Vec::new(),
            [partial] => {
                let mut names = self.registry.completions(partial);
                names.truncate(MAX_COMPLETIONS);
                names
            },
            [cmd, .., last] if PATH_COMMANDS.contains(cmd) => self.complete_path(last),
            _ => Vec::new(),
        }
    }

    fn complete_path(&self, partial: &str) -> Vec<String> {
        let (dir_part, stem) = match partial.rfind('/') {
            Some(i) => partial.split_at(i + 1),
            None => ("", partial),
        };
        let dir = if dir_part.is_empty() {
            self.fs.lookup(&self.cwd)
        } else {
            let expanded = match dir_part.strip_prefix("~/") {
                Some(rest) => format!("{}/{rest}", self.config.home),
                None => dir_part.to_string(),
            };
            self.fs.resolve(&expanded, &self.cwd)
        };
        let Some(children) = dir.and_then(Node::children) else {
            return Vec::new();
        };

        children
            .iter()
            .filter(|(name, _)| name.starts_with(stem))
            .filter(|(name, _)| stem.starts_with('.') || !name.starts_with('.'))
            .take(MAX_COMPLETIONS)
            .map(|(name, node)| {
                let slash = if node.is_dir() { "/" } else { "" };
                format!("{dir_part}{name}{slash}")
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shellsim_vfs::default_seed;

    fn session() -> Session {
        Session::new(&default_seed()).unwrap()
    }

    #[test]
    fn starts_in_home() {
        let s = session();
        assert_eq!(s.current_directory(), "/home/user");
        assert_eq!(s.env().get("PWD"), Some("/home/user"));
    }

    #[test]
    fn starts_at_root_without_home() {
        let s = Session::new(&Node::dir()).unwrap();
        assert_eq!(s.current_directory(), "/");
    }

    #[test]
    fn rejects_file_seed() {
        assert!(Session::new(&Node::file("x")).is_err());
    }

    #[test]
    fn rejects_invalid_config() {
        let config = ShellConfig {
            home: "relative".into(),
            ..ShellConfig::default()
        };
        assert!(Session::with_config(&default_seed(), config).is_err());
    }

    #[test]
    fn empty_line_is_silent() {
        let mut s = session();
        let r = s.execute("   ");
        assert_eq!(r.output, "");
        assert_eq!(r.new_directory, "/home/user");
        assert!(s.history().is_empty());
    }

    #[test]
    fn unknown_command_keeps_cwd() {
        let mut s = session();
        let r = s.execute("frobnicate now");
        assert_eq!(r.output, "bash: frobnicate: command not found");
        assert_eq!(r.new_directory, "/home/user");
    }

    #[test]
    fn cd_reports_new_directory() {
        let mut s = session();
        let r = s.execute("cd documents");
        assert_eq!(r.output, "");
        assert_eq!(r.new_directory, "/home/user/documents");
        assert_eq!(s.env().get("PWD"), Some("/home/user/documents"));
    }

    #[test]
    fn history_collapses_repeats_and_caps() {
        let config = ShellConfig {
            history_limit: 3,
            ..ShellConfig::default()
        };
        let mut s = Session::with_config(&default_seed(), config).unwrap();
        for line in ["pwd", "pwd", "ls", "whoami", "date"] {
            s.execute(line);
        }
        assert_eq!(s.history(), ["ls", "whoami", "date"]);
    }

    #[test]
    fn prompt_plain_and_colored() {
        let s = session();
        assert_eq!(
            s.prompt(),
            "\x1b[1;32muser@linux\x1b[0m:\x1b[1;34m/home/user\x1b[0m$ "
        );
        let config = ShellConfig {
            color: false,
            ..ShellConfig::default()
        };
        let s = Session::with_config(&default_seed(), config).unwrap();
        assert_eq!(s.prompt(), "user@linux:/home/user$ ");
    }

    #[test]
    fn result_serializes_camel_case() {
        let r = ExecutionResult {
            output: "x".into(),
            new_directory: "/".into(),
        };
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"{"output":"x","newDirectory":"/"}"#);
    }

    #[test]
    fn complete_command_names() {
        let s = session();
        assert_eq!(s.complete("wh"), vec!["which", "whoami"]);
        assert_eq!(s.complete("h"), vec!["head", "help", "history"]);
        assert!(s.complete("").is_empty());
        assert!(s.complete("zzz").is_empty());
    }

    #[test]
    fn complete_paths() {
        let s = session();
        assert_eq!(s.complete("cd doc"), vec!["documents/"]);
        assert_eq!(
            s.complete("cat documents/"),
            vec!["documents/notes.txt", "documents/readme.txt"]
        );
        assert_eq!(s.complete("cat ."), vec![".bashrc"]);
        assert!(s.complete("whoami x").is_empty());
        assert!(s.complete("cat missing/").is_empty());
    }
}
