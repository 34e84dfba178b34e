//! Command interpreter and shell sessions.
//!
//! The interpreter is a registry-based dispatch system. Commands implement
//! the `Command` trait and are registered by name. A [`Session`] owns one
//! filesystem, one working directory and one variable store, and turns each
//! input line into an [`ExecutionResult`].

mod commands;
pub mod env;
mod interpreter;
mod session;
mod system_commands;
mod text_commands;

/// Register every builtin command (files, text, system) into a registry.
pub use commands::register_builtins;
/// Shell variable store.
pub use env::EnvStore;
/// Escape sequence emitted by `clear`.
pub use interpreter::CLEAR_SCREEN;
/// A single executable command trait.
pub use interpreter::Command;
/// Output produced by a command (text, table, signals).
pub use interpreter::CommandOutput;
/// Registry of available commands with dispatch.
pub use interpreter::CommandRegistry;
/// Shared mutable environment passed to every command.
pub use interpreter::Environment;
/// Split a line into whitespace-separated tokens.
pub use interpreter::tokenize;
/// One shell instance and the result of running a line in it.
pub use session::{ExecutionResult, Session};
/// Register whoami, date, history, ps, df, du, env and export.
pub use system_commands::register_system_commands;
/// Register grep, head, tail, wc, sort and uniq.
pub use text_commands::register_text_commands;
