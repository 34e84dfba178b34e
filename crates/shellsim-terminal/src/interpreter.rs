//! Command trait, registry, and dispatch logic.
//!
//! A line is split on whitespace; the first token names the command and the
//! rest are passed through untouched. There is no quoting, no pipes and no
//! redirection.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

use shellsim_types::config::ShellConfig;
use shellsim_types::error::{ShellError, ShellResult};
use shellsim_vfs::{Filesystem, Node, path};

use crate::env::EnvStore;

/// ANSI sequence that clears the screen and homes the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Output produced by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Plain text lines.
    Text(String),
    /// Tabular data (header row + data rows).
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    /// Command produced no visible output.
    None,
    /// Signal to clear the terminal.
    Clear,
}

impl CommandOutput {
    /// Flatten to the text a terminal would show.
    pub fn render(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::None => String::new(),
            Self::Clear => CLEAR_SCREEN.to_string(),
            Self::Table { headers, rows } => render_table(headers, rows),
        }
    }
}

fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(String::len).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            match widths.get_mut(i) {
                Some(w) => *w = (*w).max(cell.len()),
                None => widths.push(cell.len()),
            }
        }
    }
    let fmt_row = |cells: &[String]| {
        let line: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{c:<width$}", width = widths[i]))
            .collect();
        line.join("  ").trim_end().to_string()
    };
    let mut lines = vec![fmt_row(headers)];
    lines.extend(rows.iter().map(|r| fmt_row(r)));
    lines.join("\n")
}

/// Shared mutable environment passed to every command.
pub struct Environment<'a> {
    /// Current working directory (absolute, normalized).
    pub cwd: String,
    /// The session's filesystem.
    pub fs: &'a mut Filesystem,
    /// Shell variables.
    pub vars: &'a mut EnvStore,
    /// Lines entered so far, oldest first.
    pub history: &'a [String],
    pub config: &'a ShellConfig,
}

impl Environment<'_> {
    /// Expand a leading `~` to the configured home directory.
    pub fn expand_home<'p>(&self, expr: &'p str) -> Cow<'p, str> {
        if expr == "~" {
            Cow::Owned(self.config.home.clone())
        } else if let Some(rest) = expr.strip_prefix("~/") {
            Cow::Owned(format!("{}/{rest}", self.config.home))
        } else {
            Cow::Borrowed(expr)
        }
    }

    /// Absolute form of a path expression relative to the cwd.
    pub fn absolute(&self, expr: &str) -> String {
        path::absolute_path(&self.expand_home(expr), &self.cwd)
    }

    /// Resolve a path expression relative to the cwd.
    pub fn resolve(&self, expr: &str) -> Option<&Node> {
        self.fs.resolve(&self.expand_home(expr), &self.cwd)
    }
}

/// A single executable command.
pub trait Command {
    /// The command name (what the user types).
    fn name(&self) -> &str;

    /// One-line description for `help` and the NAME section of `man`.
    fn description(&self) -> &str;

    /// Usage string (e.g. "ls \[-a\] \[-l\] \[path\]").
    fn usage(&self) -> &str;

    /// Command category for grouping in `help` output.
    fn category(&self) -> &str {
        "general"
    }

    /// Longer text for the DESCRIPTION section of `man`.
    fn manual(&self) -> Option<&str> {
        None
    }

    /// Execute the command with the given arguments and environment.
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> ShellResult<CommandOutput>;
}

/// Commands handled by the registry itself because they read its metadata.
const REGISTRY_BUILTINS: &[(&str, &str, &str)] = &[
    ("help", "list available commands", "help"),
    ("man", "show the manual page for a command", "man <command>"),
    ("which", "locate a command", "which <command>..."),
];

/// Registry of available commands with dispatch.
pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Register a command. Replaces any existing command with the same name.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name().to_string(), cmd);
    }

    /// True if `name` is a registered command or a registry builtin.
    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name) || REGISTRY_BUILTINS.iter().any(|(n, ..)| *n == name)
    }

    /// Parse and execute a command line. Command names are case-sensitive.
    pub fn execute(&self, line: &str, env: &mut Environment<'_>) -> ShellResult<CommandOutput> {
        let tokens = tokenize(line);
        let Some((&name, args)) = tokens.split_first() else {
            return Ok(CommandOutput::None);
        };

        match name {
            "help" => return Ok(self.execute_help()),
            "man" => return self.execute_man(args),
            "which" => return Ok(self.execute_which(args, env)),
            _ => {},
        }

        match self.commands.get(name) {
            Some(cmd) => {
                log::debug!("dispatch {name} with {} args", args.len());
                cmd.execute(args, env)
            },
            None => {
                log::debug!("unknown command: {name}");
                Err(ShellError::UnknownCommand(name.to_string()))
            },
        }
    }

    fn execute_help(&self) -> CommandOutput {
        let mut categories: BTreeMap<&str, Vec<(&str, &str, &str)>> = BTreeMap::new();
        for &(name, desc, usage) in REGISTRY_BUILTINS {
            categories
                .entry("shell")
                .or_default()
                .push((name, usage, desc));
        }
        for cmd in self.commands.values() {
            categories
                .entry(cmd.category())
                .or_default()
                .push((cmd.name(), cmd.usage(), cmd.description()));
        }

        let total: usize = categories.values().map(Vec::len).sum();
        let mut out = format!("Linux Command Reference ({total} commands)\n");
        for (cat, cmds) in &mut categories {
            cmds.sort_by_key(|(name, ..)| *name);
            out.push_str(&format!("\n{}:\n", cat.to_uppercase()));
            for (_, usage, desc) in cmds.iter() {
                out.push_str(&format!("  {usage:<28} {desc}\n"));
            }
        }
        out.push_str("\nType 'man <command>' for detailed help on any command.");
        CommandOutput::Text(out)
    }

    fn execute_man(&self, args: &[&str]) -> ShellResult<CommandOutput> {
        let Some(&topic) = args.first() else {
            return Err(ShellError::Usage(
                "What manual page do you want?".to_string(),
            ));
        };
        let (desc, usage, manual) = match self.commands.get(topic) {
            Some(cmd) => (cmd.description(), cmd.usage(), cmd.manual()),
            None => match REGISTRY_BUILTINS.iter().find(|(n, ..)| *n == topic) {
                Some((_, desc, usage)) => (*desc, *usage, None),
                None => return Err(ShellError::NoManualEntry(topic.to_string())),
            },
        };
        let body = manual.unwrap_or(desc);
        Ok(CommandOutput::Text(format!(
            "NAME\n    {topic} - {desc}\n\nSYNOPSIS\n    {usage}\n\nDESCRIPTION\n    {}",
            body.replace('\n', "\n    ")
        )))
    }

    fn execute_which(&self, args: &[&str], env: &Environment<'_>) -> CommandOutput {
        if args.is_empty() {
            return CommandOutput::None;
        }
        let path = env.vars.get("PATH").unwrap_or_default();
        let lines: Vec<String> = args
            .iter()
            .map(|name| {
                if self.contains(name) {
                    format!("/usr/bin/{name}")
                } else {
                    format!("which: no {name} in ({path})")
                }
            })
            .collect();
        CommandOutput::Text(lines.join("\n"))
    }

    /// List all command names and descriptions, sorted by name.
    pub fn list_commands(&self) -> Vec<(&str, &str)> {
        let mut list: Vec<(&str, &str)> = self
            .commands
            .values()
            .map(|c| (c.name(), c.description()))
            .chain(REGISTRY_BUILTINS.iter().map(|(n, d, _)| (*n, *d)))
            .collect();
        list.sort_by_key(|(name, _)| *name);
        list
    }

    /// Command names starting with `partial`, sorted.
    pub fn completions(&self, partial: &str) -> Vec<String> {
        self.list_commands()
            .into_iter()
            .filter(|(name, _)| name.starts_with(partial))
            .map(|(name, _)| name.to_string())
            .collect()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a line on runs of whitespace.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}
