//! System and session commands: whoami, date, history, ps, df, du, env, export.

use shellsim_types::error::{ShellError, ShellResult};
use shellsim_vfs::{Node, path};

use crate::commands::split_flags;
use crate::env::is_valid_name;
use crate::interpreter::{Command, CommandOutput, Environment};

// ---------------------------------------------------------------------------
// whoami
// ---------------------------------------------------------------------------

struct WhoamiCmd;
impl Command for WhoamiCmd {
    fn name(&self) -> &str {
        "whoami"
    }
    fn description(&self) -> &str {
        "print effective user name"
    }
    fn usage(&self) -> &str {
        "whoami"
    }
    fn category(&self) -> &str {
        "system"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> ShellResult<CommandOutput> {
        Ok(CommandOutput::Text(env.config.user.clone()))
    }
}

// ---------------------------------------------------------------------------
// date
// ---------------------------------------------------------------------------

struct DateCmd;
impl Command for DateCmd {
    fn name(&self) -> &str {
        "date"
    }
    fn description(&self) -> &str {
        "print the current date and time"
    }
    fn usage(&self) -> &str {
        "date"
    }
    fn category(&self) -> &str {
        "system"
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> ShellResult<CommandOutput> {
        let now = chrono::Local::now();
        Ok(CommandOutput::Text(
            now.format("%a %b %e %H:%M:%S %Z %Y").to_string(),
        ))
    }
}

// ---------------------------------------------------------------------------
// history
// ---------------------------------------------------------------------------

struct HistoryCmd;
impl Command for HistoryCmd {
    fn name(&self) -> &str {
        "history"
    }
    fn description(&self) -> &str {
        "show command history"
    }
    fn usage(&self) -> &str {
        "history [N]"
    }
    fn category(&self) -> &str {
        "shell"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> ShellResult<CommandOutput> {
        let limit = match args.first() {
            Some(n) => n.parse::<usize>().map_err(|_| {
                ShellError::InvalidArgument(format!(
                    "bash: history: {n}: numeric argument required"
                ))
            })?,
            None => env.history.len(),
        };
        let skip = env.history.len().saturating_sub(limit);
        let lines: Vec<String> = env
            .history
            .iter()
            .enumerate()
            .skip(skip)
            .map(|(i, line)| format!("{:>5}  {line}", i + 1))
            .collect();
        Ok(CommandOutput::Text(lines.join("\n")))
    }
}

// ---------------------------------------------------------------------------
// ps
// ---------------------------------------------------------------------------

/// PID of the simulated login shell.
const SHELL_PID: usize = 1000;

struct PsCmd;
impl Command for PsCmd {
    fn name(&self) -> &str {
        "ps"
    }
    fn description(&self) -> &str {
        "report a snapshot of current processes"
    }
    fn usage(&self) -> &str {
        "ps"
    }
    fn category(&self) -> &str {
        "system"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> ShellResult<CommandOutput> {
        let row = |pid: usize, cmd: &str| {
            vec![
                pid.to_string(),
                "pts/0".to_string(),
                "00:00:00".to_string(),
                cmd.to_string(),
            ]
        };
        Ok(CommandOutput::Table {
            headers: vec!["PID".into(), "TTY".into(), "TIME".into(), "CMD".into()],
            rows: vec![
                row(SHELL_PID, "bash"),
                row(SHELL_PID + env.history.len().max(1), "ps"),
            ],
        })
    }
}

// ---------------------------------------------------------------------------
// df
// ---------------------------------------------------------------------------

struct DfCmd;
impl Command for DfCmd {
    fn name(&self) -> &str {
        "df"
    }
    fn description(&self) -> &str {
        "report filesystem usage"
    }
    fn usage(&self) -> &str {
        "df"
    }
    fn category(&self) -> &str {
        "system"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> ShellResult<CommandOutput> {
        let stats = env.fs.stats();
        Ok(CommandOutput::Table {
            headers: vec![
                "Filesystem".into(),
                "Files".into(),
                "Dirs".into(),
                "Used".into(),
                "Mounted on".into(),
            ],
            rows: vec![vec![
                "vfs".into(),
                stats.files.to_string(),
                stats.directories.to_string(),
                format!("{}B", stats.bytes),
                "/".into(),
            ]],
        })
    }
}

// ---------------------------------------------------------------------------
// du
// ---------------------------------------------------------------------------

struct DuCmd;
impl Command for DuCmd {
    fn name(&self) -> &str {
        "du"
    }
    fn description(&self) -> &str {
        "estimate file space usage"
    }
    fn usage(&self) -> &str {
        "du [-s] [path]"
    }
    fn category(&self) -> &str {
        "system"
    }
    fn manual(&self) -> Option<&str> {
        Some(
            "Print the bytes of file content under each directory of PATH,\n\
             deepest first, ending with PATH itself.\n\
             -s  print only the total for PATH",
        )
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> ShellResult<CommandOutput> {
        let (flags, operands) = split_flags(args);
        let target = operands.first().copied().unwrap_or(".");
        let Some(node) = env.resolve(target) else {
            return Err(ShellError::not_found(format!("du: cannot access '{target}'")));
        };
        let mut lines = Vec::new();
        if flags.contains(&'s') || node.is_file() {
            lines.push(format!("{}\t{target}", node.content_bytes()));
        } else {
            du_walk(target, node, &mut lines);
        }
        Ok(CommandOutput::Text(lines.join("\n")))
    }
}

/// Post-order: children before their parent.
fn du_walk(base: &str, node: &Node, out: &mut Vec<String>) {
    if let Some(children) = node.children() {
        for (name, child) in children.iter().filter(|(_, c)| c.is_dir()) {
            du_walk(&path::join(base, name), child, out);
        }
    }
    out.push(format!("{}\t{base}", node.content_bytes()));
}

// ---------------------------------------------------------------------------
// env
// ---------------------------------------------------------------------------

struct EnvCmd;
impl Command for EnvCmd {
    fn name(&self) -> &str {
        "env"
    }
    fn description(&self) -> &str {
        "print environment variables"
    }
    fn usage(&self) -> &str {
        "env"
    }
    fn category(&self) -> &str {
        "shell"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> ShellResult<CommandOutput> {
        Ok(CommandOutput::Text(list_vars(env)))
    }
}

fn list_vars(env: &Environment<'_>) -> String {
    let lines: Vec<String> = env.vars.iter().map(|(k, v)| format!("{k}={v}")).collect();
    lines.join("\n")
}

// ---------------------------------------------------------------------------
// export
// ---------------------------------------------------------------------------

struct ExportCmd;
impl Command for ExportCmd {
    fn name(&self) -> &str {
        "export"
    }
    fn description(&self) -> &str {
        "set environment variables"
    }
    fn usage(&self) -> &str {
        "export [NAME=VALUE]..."
    }
    fn category(&self) -> &str {
        "shell"
    }
    fn manual(&self) -> Option<&str> {
        Some(
            "Set each NAME to VALUE. Everything after the first '=' is the value.\n\
             With no arguments, print all variables like env.",
        )
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> ShellResult<CommandOutput> {
        if args.is_empty() {
            return Ok(CommandOutput::Text(list_vars(env)));
        }
        // Validate every assignment first so a bad one leaves the store untouched.
        let mut assignments = Vec::with_capacity(args.len());
        for &arg in args {
            match arg.split_once('=') {
                Some((name, value)) if is_valid_name(name) => assignments.push((name, value)),
                _ => {
                    return Err(ShellError::InvalidIdentifier {
                        cmd: "export".to_string(),
                        arg: arg.to_string(),
                    });
                },
            }
        }
        for (name, value) in assignments {
            env.vars.set(name, value);
        }
        Ok(CommandOutput::None)
    }
}

/// Register system and session commands.
pub fn register_system_commands(reg: &mut crate::CommandRegistry) {
    reg.register(Box::new(WhoamiCmd));
    reg.register(Box::new(DateCmd));
    reg.register(Box::new(HistoryCmd));
    reg.register(Box::new(PsCmd));
    reg.register(Box::new(DfCmd));
    reg.register(Box::new(DuCmd));
    reg.register(Box::new(EnvCmd));
    reg.register(Box::new(ExportCmd));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CommandRegistry, EnvStore};
    use shellsim_types::config::ShellConfig;
    use shellsim_vfs::{Filesystem, default_seed};

    struct Fixture {
        reg: CommandRegistry,
        fs: Filesystem,
        vars: EnvStore,
        history: Vec<String>,
        config: ShellConfig,
    }

    fn setup() -> Fixture {
        let mut reg = CommandRegistry::new();
        register_system_commands(&mut reg);
        let config = ShellConfig::default();
        Fixture {
            reg,
            fs: Filesystem::from_seed(&default_seed()).unwrap(),
            vars: EnvStore::from_config(&config, "/home/user"),
            history: vec!["pwd".into(), "ls".into(), "history".into()],
            config,
        }
    }

    fn exec(fx: &mut Fixture, line: &str) -> ShellResult<CommandOutput> {
        let mut env = Environment {
            cwd: "/home/user".to_string(),
            fs: &mut fx.fs,
            vars: &mut fx.vars,
            history: &fx.history,
            config: &fx.config,
        };
        fx.reg.execute(line, &mut env)
    }

    fn text(out: ShellResult<CommandOutput>) -> String {
        match out.unwrap() {
            CommandOutput::Text(s) => s,
            _ => panic!("expected text"),
        }
    }

    #[test]
    fn whoami_reports_config_user() {
        let mut fx = setup();
        assert_eq!(text(exec(&mut fx, "whoami")), "user");
    }

    #[test]
    fn date_has_year() {
        let mut fx = setup();
        let s = text(exec(&mut fx, "date"));
        assert!(s.contains(&chrono::Local::now().format("%Y").to_string()));
    }

    #[test]
    fn history_numbered() {
        let mut fx = setup();
        assert_eq!(
            text(exec(&mut fx, "history")),
            "    1  pwd\n    2  ls\n    3  history"
        );
        assert_eq!(text(exec(&mut fx, "history 1")), "    3  history");
        assert!(exec(&mut fx, "history x").is_err());
    }

    #[test]
    fn ps_table() {
        let mut fx = setup();
        match exec(&mut fx, "ps").unwrap() {
            CommandOutput::Table { headers, rows } => {
                assert_eq!(headers, vec!["PID", "TTY", "TIME", "CMD"]);
                assert_eq!(rows.len(), 2);
                assert_eq!(rows[0][3], "bash");
                assert_eq!(rows[1][3], "ps");
            },
            _ => panic!("expected table"),
        }
    }

    #[test]
    fn df_counts_tree() {
        let mut fx = setup();
        match exec(&mut fx, "df").unwrap() {
            CommandOutput::Table { rows, .. } => {
                assert_eq!(rows[0][0], "vfs");
                assert_eq!(rows[0][1], "6");
            },
            _ => panic!("expected table"),
        }
    }

    #[test]
    fn du_post_order() {
        let mut fx = setup();
        let out = text(exec(&mut fx, "du projects"));
        assert_eq!(out, "45\tprojects/game\n45\tprojects");
    }

    #[test]
    fn du_summary_and_missing() {
        let mut fx = setup();
        assert_eq!(text(exec(&mut fx, "du -s /etc")), "74\t/etc");
        assert_eq!(
            exec(&mut fx, "du ghost").unwrap_err().to_string(),
            "du: cannot access 'ghost': No such file or directory"
        );
    }

    #[test]
    fn env_in_insertion_order() {
        let mut fx = setup();
        assert_eq!(
            text(exec(&mut fx, "env")),
            "HOME=/home/user\nUSER=user\nPATH=/usr/bin:/usr/local/bin\nPWD=/home/user"
        );
    }

    #[test]
    fn export_sets_variable() {
        let mut fx = setup();
        assert_eq!(exec(&mut fx, "export FOO=bar").unwrap(), CommandOutput::None);
        assert_eq!(fx.vars.get("FOO"), Some("bar"));
        exec(&mut fx, "export EQ=a=b EMPTY=").unwrap();
        assert_eq!(fx.vars.get("EQ"), Some("a=b"));
        assert_eq!(fx.vars.get("EMPTY"), Some(""));
    }

    #[test]
    fn export_rejects_bad_identifiers() {
        let mut fx = setup();
        for bad in ["1X=y", "=y", "NOEQUALS", "A-B=c"] {
            let err = exec(&mut fx, &format!("export {bad}")).unwrap_err();
            assert_eq!(err.to_string(), format!("export: '{bad}': not a valid identifier"));
        }
        assert_eq!(fx.vars.len(), 4);
    }

    #[test]
    fn export_without_args_lists() {
        let mut fx = setup();
        assert_eq!(text(exec(&mut fx, "export")), text(exec(&mut fx, "env")));
    }
}
