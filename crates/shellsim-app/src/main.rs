//! shellsim command-line host.
//!
//! Runs one shell session. Lines come from `-c` or from stdin; a prompt is
//! printed when stdin is a terminal. `exit` ends the session.

use std::io::{BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use shellsim_terminal::{ExecutionResult, Session};
use shellsim_types::config::ShellConfig;
use shellsim_vfs::{Node, default_seed, seed};

#[derive(Parser)]
#[command(name = "shellsim")]
#[command(about = "A sandboxed virtual shell for learning Linux commands")]
#[command(version)]
struct Cli {
    /// Run a single command line and exit
    #[arg(short = 'c', long = "command")]
    command: Option<String>,

    /// JSON seed filesystem to start from instead of the built-in tree
    #[arg(long = "seed")]
    seed: Option<PathBuf>,

    /// TOML shell config (user, hostname, home, ...)
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Print each result as JSON ({"output", "newDirectory"})
    #[arg(long = "json")]
    json: bool,

    /// Print the final filesystem as JSON on exit
    #[arg(long = "dump")]
    dump: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ShellConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ShellConfig::default(),
    };
    let seed = load_seed(cli.seed.as_deref())?;
    let mut session = Session::with_config(&seed, config)?;

    let mut out = std::io::stdout().lock();
    match &cli.command {
        Some(line) => {
            let result = session.execute(line);
            emit(&mut out, &result, cli.json)?;
        },
        None => repl(&mut session, &mut out, cli.json)?,
    }

    if cli.dump {
        writeln!(out, "{}", session.filesystem().to_json()?)?;
    }
    Ok(())
}

fn load_seed(path: Option<&Path>) -> Result<Node> {
    let Some(path) = path else {
        return Ok(default_seed());
    };
    let src = std::fs::read_to_string(path)
        .with_context(|| format!("reading seed {}", path.display()))?;
    let node = seed::parse_seed(&src).with_context(|| format!("parsing seed {}", path.display()))?;
    log::info!("loaded seed from {}", path.display());
    Ok(node)
}

fn repl(session: &mut Session, out: &mut impl Write, json: bool) -> Result<()> {
    let stdin = std::io::stdin();
    let interactive = stdin.is_terminal();
    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            write!(out, "{}", session.prompt())?;
            out.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if line.trim() == "exit" {
            break;
        }
        let result = session.execute(&line);
        emit(out, &result, json)?;
    }
    Ok(())
}

fn emit(out: &mut impl Write, result: &ExecutionResult, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string(result)?)?;
    } else if !result.output.is_empty() {
        writeln!(out, "{}", result.output)?;
    }
    Ok(())
}
