//! Built-in navigation and file commands.

use shellsim_types::error::{FsError, ShellError, ShellResult};
use shellsim_vfs::{Node, path};

use crate::interpreter::{Command, CommandOutput, CommandRegistry, Environment};

/// Register every builtin command into a registry.
pub fn register_builtins(reg: &mut CommandRegistry) {
    reg.register(Box::new(PwdCmd));
    reg.register(Box::new(LsCmd));
    reg.register(Box::new(CdCmd));
    reg.register(Box::new(CatCmd));
    reg.register(Box::new(EchoCmd));
    reg.register(Box::new(MkdirCmd));
    reg.register(Box::new(TouchCmd));
    reg.register(Box::new(RmCmd));
    reg.register(Box::new(CpCmd));
    reg.register(Box::new(MvCmd));
    reg.register(Box::new(FindCmd));
    reg.register(Box::new(ChmodCmd));
    reg.register(Box::new(ClearCmd));
    crate::register_text_commands(reg);
    crate::register_system_commands(reg);
}

/// Split arguments into short-flag characters and operands.
///
/// Any argument starting with `-` (other than a lone `-`) counts as a flag
/// cluster, so `-la` yields `l` and `a`.
pub(crate) fn split_flags<'a>(args: &[&'a str]) -> (Vec<char>, Vec<&'a str>) {
    let mut flags = Vec::new();
    let mut operands = Vec::new();
    for &arg in args {
        match arg.strip_prefix('-') {
            Some(cluster) if !cluster.is_empty() => flags.extend(cluster.chars()),
            _ => operands.push(arg),
        }
    }
    (flags, operands)
}

/// One error becomes the command's error; several are reported line by line.
fn report(mut errors: Vec<ShellError>) -> ShellResult<CommandOutput> {
    match errors.len() {
        0 => Ok(CommandOutput::None),
        1 => Err(errors.remove(0)),
        _ => {
            let lines: Vec<String> = errors.iter().map(ToString::to_string).collect();
            Ok(CommandOutput::Text(lines.join("\n")))
        },
    }
}

// ---------------------------------------------------------------------------
// pwd
// ---------------------------------------------------------------------------

struct PwdCmd;
impl Command for PwdCmd {
    fn name(&self) -> &str {
        "pwd"
    }
    fn description(&self) -> &str {
        "print working directory"
    }
    fn usage(&self) -> &str {
        "pwd"
    }
    fn category(&self) -> &str {
        "navigation"
    }
    fn manual(&self) -> Option<&str> {
        Some("Print the full pathname of the current working directory.")
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> ShellResult<CommandOutput> {
        Ok(CommandOutput::Text(env.cwd.clone()))
    }
}

// ---------------------------------------------------------------------------
// ls
// ---------------------------------------------------------------------------

struct LsCmd;
impl Command for LsCmd {
    fn name(&self) -> &str {
        "ls"
    }
    fn description(&self) -> &str {
        "list directory contents"
    }
    fn usage(&self) -> &str {
        "ls [-a] [-l] [path]"
    }
    fn category(&self) -> &str {
        "navigation"
    }
    fn manual(&self) -> Option<&str> {
        Some(
            "List the entries of a directory, sorted by name.\n\
             -a  include entries whose names begin with '.'\n\
             -l  use a long listing format",
        )
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> ShellResult<CommandOutput> {
        let (flags, operands) = split_flags(args);
        let show_hidden = flags.contains(&'a');
        let long = flags.contains(&'l');
        let target = operands.first().copied();

        let node = match target {
            Some(p) => env.resolve(p),
            None => env.fs.lookup(&env.cwd),
        };
        let Some(children) = node.and_then(Node::children) else {
            let shown = target.unwrap_or(&env.cwd);
            return Err(ShellError::not_found(format!("ls: cannot access '{shown}'")));
        };

        let visible = children
            .iter()
            .filter(|(name, _)| show_hidden || !name.starts_with('.'));

        let output = if long {
            let user = &env.config.user;
            let lines: Vec<String> = visible
                .map(|(name, node)| {
                    let kind = if node.is_dir() { 'd' } else { '-' };
                    let size = node.size();
                    format!("{kind}rwxr-xr-x 1 {user} {user} {size:>5} Jan 01 12:00 {name}")
                })
                .collect();
            lines.join("\n")
        } else {
            let color = env.config.color;
            let names: Vec<String> = visible
                .map(|(name, node)| match (node.is_dir(), color) {
                    (true, true) => format!("\x1b[1;34m{name}/\x1b[0m"),
                    (true, false) => format!("{name}/"),
                    (false, _) => name.clone(),
                })
                .collect();
            names.join("  ")
        };
        Ok(CommandOutput::Text(output))
    }
}

// ---------------------------------------------------------------------------
// cd
// ---------------------------------------------------------------------------

struct CdCmd;
impl Command for CdCmd {
    fn name(&self) -> &str {
        "cd"
    }
    fn description(&self) -> &str {
        "change directory"
    }
    fn usage(&self) -> &str {
        "cd [directory]"
    }
    fn category(&self) -> &str {
        "navigation"
    }
    fn manual(&self) -> Option<&str> {
        Some(
            "Change the current directory to the specified path.\n\
             With no argument, or '~', change to the home directory.",
        )
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> ShellResult<CommandOutput> {
        let arg = args.first().copied().unwrap_or("~");
        if !env.resolve(arg).is_some_and(Node::is_dir) {
            return Err(ShellError::not_found(format!("bash: cd: {arg}")));
        }
        env.cwd = env.absolute(arg);
        env.vars.set("PWD", &env.cwd);
        Ok(CommandOutput::None)
    }
}

// ---------------------------------------------------------------------------
// cat
// ---------------------------------------------------------------------------

struct CatCmd;
impl Command for CatCmd {
    fn name(&self) -> &str {
        "cat"
    }
    fn description(&self) -> &str {
        "concatenate files and print"
    }
    fn usage(&self) -> &str {
        "cat <file>..."
    }
    fn category(&self) -> &str {
        "files"
    }
    fn manual(&self) -> Option<&str> {
        Some(
            "Concatenate FILE(s) to standard output.\n\
             Each unreadable argument produces one error line in place.",
        )
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> ShellResult<CommandOutput> {
        if args.is_empty() {
            return Err(ShellError::missing_operand("cat", "file operand"));
        }
        let parts: Vec<String> = args
            .iter()
            .map(|&file| match env.resolve(file) {
                Some(Node::File { content, .. }) => content.clone(),
                Some(Node::Directory { .. }) => {
                    ShellError::is_a_directory(format!("cat: {file}")).to_string()
                },
                None => ShellError::not_found(format!("cat: {file}")).to_string(),
            })
            .collect();
        Ok(CommandOutput::Text(parts.join("\n")))
    }
}

// ---------------------------------------------------------------------------
// echo
// ---------------------------------------------------------------------------

struct EchoCmd;
impl Command for EchoCmd {
    fn name(&self) -> &str {
        "echo"
    }
    fn description(&self) -> &str {
        "display a line of text"
    }
    fn usage(&self) -> &str {
        "echo [text...]"
    }
    fn category(&self) -> &str {
        "shell"
    }
    fn manual(&self) -> Option<&str> {
        Some(
            "Print the arguments separated by single spaces.\n\
             Quote characters are dropped and $NAME is replaced by the\n\
             value of the shell variable NAME (empty if unset).",
        )
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> ShellResult<CommandOutput> {
        let text: String = args
            .join(" ")
            .chars()
            .filter(|c| !matches!(c, '"' | '\''))
            .collect();
        Ok(CommandOutput::Text(env.vars.expand(&text)))
    }
}

// ---------------------------------------------------------------------------
// mkdir
// ---------------------------------------------------------------------------

struct MkdirCmd;
impl Command for MkdirCmd {
    fn name(&self) -> &str {
        "mkdir"
    }
    fn description(&self) -> &str {
        "make directories"
    }
    fn usage(&self) -> &str {
        "mkdir [-p] <directory>..."
    }
    fn category(&self) -> &str {
        "files"
    }
    fn manual(&self) -> Option<&str> {
        Some(
            "Create each DIRECTORY, if it does not already exist.\n\
             -p  create missing parents; no error if the directory exists",
        )
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> ShellResult<CommandOutput> {
        let (flags, operands) = split_flags(args);
        if operands.is_empty() {
            return Err(ShellError::missing_operand("mkdir", "operand"));
        }
        let parents = flags.contains(&'p');
        let mut errors = Vec::new();
        for name in operands {
            let context = format!("mkdir: cannot create directory '{name}'");
            let abs = env.absolute(name);
            let result = if parents {
                make_parents(env, &abs)
            } else {
                match path::split_parent(&abs) {
                    Some((dir, leaf)) => env.fs.insert_child(dir, leaf, Node::dir()),
                    None => Err(FsError::AlreadyExists(abs.clone())),
                }
            };
            if let Err(e) = result {
                errors.push(e.with_context(context));
            }
        }
        report(errors)
    }
}

/// Create `abs` and any missing ancestors. Existing directories are fine.
/// Nothing is created if any segment is `.` or `..`.
fn make_parents(env: &mut Environment<'_>, abs: &str) -> Result<(), FsError> {
    if let Some(bad) = path::segments(abs).find(|seg| matches!(*seg, "." | "..")) {
        return Err(FsError::InvalidName(bad.to_string()));
    }
    let mut current = String::from("/");
    for seg in path::segments(abs) {
        let next = path::join(&current, seg);
        match env.fs.lookup(&next) {
            Some(node) if node.is_dir() => {},
            Some(_) => return Err(FsError::NotADirectory(next)),
            None => env.fs.insert_child(&current, seg, Node::dir())?,
        }
        current = next;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// touch
// ---------------------------------------------------------------------------

struct TouchCmd;
impl Command for TouchCmd {
    fn name(&self) -> &str {
        "touch"
    }
    fn description(&self) -> &str {
        "create empty files"
    }
    fn usage(&self) -> &str {
        "touch <file>..."
    }
    fn category(&self) -> &str {
        "files"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> ShellResult<CommandOutput> {
        let (_, operands) = split_flags(args);
        if operands.is_empty() {
            return Err(ShellError::missing_operand("touch", "file operand"));
        }
        let mut errors = Vec::new();
        for name in operands {
            let abs = env.absolute(name);
            if env.fs.exists(&abs) {
                continue;
            }
            let context = format!("touch: cannot touch '{name}'");
            let result = match path::split_parent(&abs) {
                Some((dir, leaf)) => env.fs.insert_child(dir, leaf, Node::file("")),
                None => continue,
            };
            if let Err(e) = result {
                errors.push(e.with_context(context));
            }
        }
        report(errors)
    }
}

// ---------------------------------------------------------------------------
// rm
// ---------------------------------------------------------------------------

struct RmCmd;
impl Command for RmCmd {
    fn name(&self) -> &str {
        "rm"
    }
    fn description(&self) -> &str {
        "remove files or directories"
    }
    fn usage(&self) -> &str {
        "rm [-r] [-f] <file>..."
    }
    fn category(&self) -> &str {
        "files"
    }
    fn manual(&self) -> Option<&str> {
        Some(
            "Remove each FILE.\n\
             -r  remove directories and their contents recursively\n\
             -f  ignore nonexistent files",
        )
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> ShellResult<CommandOutput> {
        let (flags, operands) = split_flags(args);
        if operands.is_empty() {
            return Err(ShellError::missing_operand("rm", "operand"));
        }
        let recursive = flags.iter().any(|f| matches!(f, 'r' | 'R'));
        let force = flags.contains(&'f');

        let mut errors = Vec::new();
        for name in operands {
            if let Err(e) = remove_one(env, name, recursive, force) {
                errors.push(e);
            }
        }
        report(errors)
    }
}

fn remove_one(
    env: &mut Environment<'_>,
    name: &str,
    recursive: bool,
    force: bool,
) -> ShellResult<()> {
    let last = name.trim_end_matches('/').rsplit('/').next().unwrap_or(name);
    if matches!(last, "." | "..") {
        return Err(ShellError::InvalidArgument(format!(
            "rm: refusing to remove '.' or '..' directory: skipping '{name}'"
        )));
    }
    let context = format!("rm: cannot remove '{name}'");
    let abs = env.absolute(name);
    let Some(node) = env.fs.lookup(&abs) else {
        return if force {
            Ok(())
        } else {
            Err(ShellError::not_found(context))
        };
    };
    if node.is_dir() && !recursive {
        return Err(ShellError::is_a_directory(context));
    }
    if abs == "/" {
        return Err(ShellError::InvalidArgument(
            "rm: it is dangerous to operate recursively on '/'".to_string(),
        ));
    }
    if path::is_within(&env.cwd, &abs) {
        return Err(ShellError::InvalidArgument(format!(
            "{context}: Device or resource busy"
        )));
    }
    env.fs.remove(&abs).map_err(|e| e.with_context(context))?;
    Ok(())
}

// ---------------------------------------------------------------------------
// cp / mv shared destination planning
// ---------------------------------------------------------------------------

/// Where a copied or moved node will land.
struct Destination {
    parent: String,
    name: String,
    target: String,
    /// An existing file at `target` will be replaced.
    replace: bool,
}

/// Work out the destination for `src` → `dst` and validate it without
/// touching the tree. An existing directory at `dst` receives the source
/// under its own name.
fn plan_destination(
    env: &Environment<'_>,
    cmd: &str,
    src: &str,
    dst: &str,
    src_abs: &str,
    src_is_dir: bool,
) -> ShellResult<Destination> {
    let dst_abs = env.absolute(dst);
    let target = if env.fs.is_dir(&dst_abs) {
        path::join(&dst_abs, path::file_name(src_abs))
    } else {
        dst_abs
    };

    if target == src_abs {
        return Err(ShellError::InvalidArgument(format!(
            "{cmd}: '{src}' and '{dst}' are the same file"
        )));
    }
    if src_is_dir && path::is_within(&target, src_abs) {
        let msg = if cmd == "mv" {
            format!("mv: cannot move '{src}' to a subdirectory of itself, '{dst}'")
        } else {
            format!("cp: cannot copy a directory, '{src}', into itself, '{dst}'")
        };
        return Err(ShellError::InvalidArgument(msg));
    }

    let create_context = if src_is_dir {
        format!("{cmd}: cannot create directory '{dst}'")
    } else {
        format!("{cmd}: cannot create regular file '{dst}'")
    };
    let Some((parent, name)) = path::split_parent(&target) else {
        return Err(ShellError::InvalidArgument(format!(
            "{cmd}: cannot overwrite directory '{dst}'"
        )));
    };
    if matches!(name, "." | "..") {
        return Err(ShellError::InvalidArgument(format!(
            "{create_context}: Invalid argument"
        )));
    }
    match env.fs.lookup(parent) {
        Some(node) if node.is_dir() => {},
        Some(_) => return Err(ShellError::not_a_directory(create_context)),
        None => return Err(ShellError::not_found(create_context)),
    }

    let replace = match env.fs.lookup(&target) {
        None => false,
        Some(existing) if existing.is_dir() => {
            let msg = if src_is_dir {
                format!("{cmd}: cannot overwrite directory '{dst}'")
            } else {
                format!("{cmd}: cannot overwrite directory '{dst}' with non-directory")
            };
            return Err(ShellError::InvalidArgument(msg));
        },
        Some(_) if src_is_dir => {
            return Err(ShellError::InvalidArgument(format!(
                "{cmd}: cannot overwrite non-directory '{dst}' with directory '{src}'"
            )));
        },
        Some(_) => true,
    };

    Ok(Destination {
        parent: parent.to_string(),
        name: name.to_string(),
        target,
        replace,
    })
}

/// Place `node` at a planned destination.
fn place(
    env: &mut Environment<'_>,
    dest: &Destination,
    node: Node,
    context: &str,
) -> ShellResult<()> {
    if dest.replace {
        env.fs
            .remove(&dest.target)
            .map_err(|e| e.with_context(context))?;
    }
    env.fs
        .insert_child(&dest.parent, &dest.name, node)
        .map_err(|e| e.with_context(context))
}

/// First two operands of cp/mv, or the usual complaint.
fn source_and_dest<'a>(cmd: &str, args: &[&'a str]) -> ShellResult<(&'a str, &'a str)> {
    let (_, operands) = split_flags(args);
    match operands.as_slice() {
        [] => Err(ShellError::missing_operand(cmd, "file operand")),
        [_] => Err(ShellError::missing_operand(cmd, "destination file operand")),
        [src, dst, ..] => Ok((*src, *dst)),
    }
}

// ---------------------------------------------------------------------------
// cp
// ---------------------------------------------------------------------------

struct CpCmd;
impl Command for CpCmd {
    fn name(&self) -> &str {
        "cp"
    }
    fn description(&self) -> &str {
        "copy files and directories"
    }
    fn usage(&self) -> &str {
        "cp <source> <dest>"
    }
    fn category(&self) -> &str {
        "files"
    }
    fn manual(&self) -> Option<&str> {
        Some(
            "Copy SOURCE to DEST. Directories are copied with all their contents.\n\
             If DEST is an existing directory the copy is placed inside it.",
        )
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> ShellResult<CommandOutput> {
        let (src, dst) = source_and_dest("cp", args)?;
        let src_abs = env.absolute(src);
        let Some(node) = env.fs.lookup(&src_abs) else {
            return Err(ShellError::not_found(format!("cp: cannot stat '{src}'")));
        };
        let copy = node.clone();
        let dest = plan_destination(env, "cp", src, dst, &src_abs, copy.is_dir())?;
        place(env, &dest, copy, &format!("cp: cannot create '{dst}'"))?;
        Ok(CommandOutput::None)
    }
}

// ---------------------------------------------------------------------------
// mv
// ---------------------------------------------------------------------------

struct MvCmd;
impl Command for MvCmd {
    fn name(&self) -> &str {
        "mv"
    }
    fn description(&self) -> &str {
        "move or rename files"
    }
    fn usage(&self) -> &str {
        "mv <source> <dest>"
    }
    fn category(&self) -> &str {
        "files"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> ShellResult<CommandOutput> {
        let (src, dst) = source_and_dest("mv", args)?;
        let src_abs = env.absolute(src);
        let Some(node) = env.fs.lookup(&src_abs) else {
            return Err(ShellError::not_found(format!("mv: cannot stat '{src}'")));
        };
        let src_is_dir = node.is_dir();
        if src_abs == "/" || path::is_within(&env.cwd, &src_abs) {
            return Err(ShellError::InvalidArgument(format!(
                "mv: cannot move '{src}': Device or resource busy"
            )));
        }
        let dest = plan_destination(env, "mv", src, dst, &src_abs, src_is_dir)?;
        let context = format!("mv: cannot move '{src}' to '{dst}'");
        let moved = env
            .fs
            .remove(&src_abs)
            .map_err(|e| e.with_context(context.as_str()))?;
        place(env, &dest, moved, &context)?;
        Ok(CommandOutput::None)
    }
}

// ---------------------------------------------------------------------------
// find
// ---------------------------------------------------------------------------

struct FindCmd;
impl Command for FindCmd {
    fn name(&self) -> &str {
        "find"
    }
    fn description(&self) -> &str {
        "search for files in a directory hierarchy"
    }
    fn usage(&self) -> &str {
        "find [path] -name <pattern> [-type f|d]"
    }
    fn category(&self) -> &str {
        "files"
    }
    fn manual(&self) -> Option<&str> {
        Some(
            "List every entry below PATH (default: the current directory)\n\
             whose name contains PATTERN. '*' characters in PATTERN are ignored.\n\
             -type f  only files\n\
             -type d  only directories",
        )
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> ShellResult<CommandOutput> {
        let usage = || ShellError::Usage("Usage: find [path] -name [pattern]".to_string());
        let name_at = args.iter().position(|&a| a == "-name").ok_or_else(usage)?;
        let pattern = args.get(name_at + 1).ok_or_else(usage)?.replace('*', "");
        let kind = match args.iter().position(|&a| a == "-type") {
            Some(i) => match args.get(i + 1).copied() {
                Some("f") => Some(false),
                Some("d") => Some(true),
                Some(other) => {
                    return Err(ShellError::InvalidArgument(format!(
                        "find: Unknown argument to -type: {other}"
                    )));
                },
                None => {
                    return Err(ShellError::InvalidArgument(
                        "find: missing argument to `-type'".to_string(),
                    ));
                },
            },
            None => None,
        };

        let start = if name_at == 0 || args[0].starts_with('-') {
            env.cwd.clone()
        } else {
            args[0].to_string()
        };
        let Some(root) = env.resolve(&start) else {
            return Err(ShellError::not_found(format!("find: '{start}'")));
        };

        let mut results = Vec::new();
        search(&start, root, &pattern, kind, &mut results);
        Ok(CommandOutput::Text(results.join("\n")))
    }
}

fn search(base: &str, node: &Node, pattern: &str, kind: Option<bool>, out: &mut Vec<String>) {
    let Some(children) = node.children() else {
        return;
    };
    for (name, child) in children {
        let child_path = path::join(base, name);
        if name.contains(pattern) && kind.is_none_or(|want_dir| want_dir == child.is_dir()) {
            out.push(child_path.clone());
        }
        search(&child_path, child, pattern, kind, out);
    }
}

// ---------------------------------------------------------------------------
// chmod
// ---------------------------------------------------------------------------

struct ChmodCmd;
impl Command for ChmodCmd {
    fn name(&self) -> &str {
        "chmod"
    }
    fn description(&self) -> &str {
        "change file mode bits"
    }
    fn usage(&self) -> &str {
        "chmod <mode> <file>..."
    }
    fn category(&self) -> &str {
        "files"
    }
    fn manual(&self) -> Option<&str> {
        Some(
            "Record MODE on each FILE. MODE is octal (e.g. 755) or symbolic\n\
             (e.g. u+x,go-w). Modes are stored but never enforced.",
        )
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> ShellResult<CommandOutput> {
        let (mode, files) = match args {
            [] => return Err(ShellError::missing_operand("chmod", "operand")),
            [mode] => {
                return Err(ShellError::InvalidArgument(format!(
                    "chmod: missing operand after '{mode}'"
                )));
            },
            [mode, files @ ..] => (*mode, files),
        };
        if !is_valid_mode(mode) {
            return Err(ShellError::InvalidArgument(format!(
                "chmod: invalid mode: '{mode}'"
            )));
        }
        let mut errors = Vec::new();
        for &file in files {
            let abs = env.absolute(file);
            match env.fs.lookup_mut(&abs) {
                Some(Node::File { mode: slot, .. }) => *slot = Some(mode.to_string()),
                Some(Node::Directory { .. }) => {},
                None => errors.push(ShellError::not_found(format!(
                    "chmod: cannot access '{file}'"
                ))),
            }
        }
        report(errors)
    }
}

/// Octal (`644`, `0755`) or symbolic (`u+x`, `go-w,a=r`).
fn is_valid_mode(mode: &str) -> bool {
    if mode.chars().all(|c| c.is_ascii_digit()) {
        return (1..=4).contains(&mode.len()) && mode.chars().all(|c| c < '8');
    }
    mode.split(',').all(|clause| {
        let ops = clause.trim_start_matches(['u', 'g', 'o', 'a']);
        if ops.is_empty() {
            return false;
        }
        let mut chars = ops.chars().peekable();
        while let Some(op) = chars.next() {
            if !matches!(op, '+' | '-' | '=') {
                return false;
            }
            while chars
                .peek()
                .is_some_and(|c| matches!(c, 'r' | 'w' | 'x' | 'X' | 's' | 't'))
            {
                chars.next();
            }
        }
        true
    })
}

// ---------------------------------------------------------------------------
// clear
// ---------------------------------------------------------------------------

struct ClearCmd;
impl Command for ClearCmd {
    fn name(&self) -> &str {
        "clear"
    }
    fn description(&self) -> &str {
        "clear the terminal screen"
    }
    fn usage(&self) -> &str {
        "clear"
    }
    fn category(&self) -> &str {
        "shell"
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> ShellResult<CommandOutput> {
        Ok(CommandOutput::Clear)
    }
}
