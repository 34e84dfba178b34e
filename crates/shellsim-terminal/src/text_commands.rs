//! Text processing commands: grep, head, tail, wc, sort, uniq.

use shellsim_types::error::{ShellError, ShellResult};
use shellsim_vfs::Node;

use crate::commands::split_flags;
use crate::interpreter::{Command, CommandOutput, Environment};

// ---------------------------------------------------------------------------
// grep
// ---------------------------------------------------------------------------

struct GrepCmd;
impl Command for GrepCmd {
    fn name(&self) -> &str {
        "grep"
    }
    fn description(&self) -> &str {
        "print lines that contain a pattern"
    }
    fn usage(&self) -> &str {
        "grep [-i] [-n] [-v] [-c] <pattern> <file>..."
    }
    fn category(&self) -> &str {
        "text"
    }
    fn manual(&self) -> Option<&str> {
        Some(
            "Print the lines of each FILE that contain PATTERN as a literal substring.\n\
             -i  ignore case\n\
             -n  prefix each line with its line number\n\
             -v  select non-matching lines\n\
             -c  print only a count of selected lines",
        )
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> ShellResult<CommandOutput> {
        let (flags, operands) = parse_grep_flags(args);
        let [pattern, files @ ..] = operands else {
            return Err(usage_grep());
        };
        if files.is_empty() {
            return Err(usage_grep());
        }
        let opts = GrepOptions {
            case_insensitive: flags.contains(&'i'),
            show_numbers: flags.contains(&'n'),
            invert: flags.contains(&'v'),
            count_only: flags.contains(&'c'),
        };

        if let [file] = files {
            let text = read_text(env, file, format!("grep: {file}"), format!("grep: {file}"))?;
            return Ok(CommandOutput::Text(grep_text(text, pattern, &opts, None)));
        }

        let mut blocks = Vec::new();
        for file in files {
            match read_text(env, file, format!("grep: {file}"), format!("grep: {file}")) {
                Ok(text) => {
                    let found = grep_text(text, pattern, &opts, Some(*file));
                    if !found.is_empty() {
                        blocks.push(found);
                    }
                },
                Err(e) => blocks.push(e.to_string()),
            }
        }
        Ok(CommandOutput::Text(blocks.join("\n")))
    }
}

/// Leading `-i`/`-v`/`-n`/`-c` clusters, then the operands. Parsing stops at
/// `--` or at the first argument that is not made of those letters, so a
/// pattern may start with `-`.
fn parse_grep_flags<'s, 'a>(args: &'s [&'a str]) -> (Vec<char>, &'s [&'a str]) {
    let mut flags = Vec::new();
    let mut rest = args;
    while let Some((&arg, tail)) = rest.split_first() {
        if arg == "--" {
            rest = tail;
            break;
        }
        match arg.strip_prefix('-') {
            Some(cluster)
                if !cluster.is_empty()
                    && cluster.chars().all(|c| matches!(c, 'i' | 'v' | 'n' | 'c')) =>
            {
                flags.extend(cluster.chars());
                rest = tail;
            },
            _ => break,
        }
    }
    (flags, rest)
}

fn usage_grep() -> ShellError {
    ShellError::Usage("Usage: grep [pattern] [file...]".to_string())
}

struct GrepOptions {
    case_insensitive: bool,
    show_numbers: bool,
    invert: bool,
    count_only: bool,
}

fn grep_text(text: &str, pattern: &str, opts: &GrepOptions, label: Option<&str>) -> String {
    let pat = if opts.case_insensitive {
        pattern.to_lowercase()
    } else {
        pattern.to_string()
    };
    let prefix = label.map(|l| format!("{l}:")).unwrap_or_default();

    let mut matches = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let found = if opts.case_insensitive {
            line.to_lowercase().contains(&pat)
        } else {
            line.contains(&pat)
        };
        if found != opts.invert {
            if opts.show_numbers {
                matches.push(format!("{prefix}{}:{line}", i + 1));
            } else {
                matches.push(format!("{prefix}{line}"));
            }
        }
    }

    if opts.count_only {
        format!("{prefix}{}", matches.len())
    } else {
        matches.join("\n")
    }
}

// ---------------------------------------------------------------------------
// head
// ---------------------------------------------------------------------------

struct HeadCmd;
impl Command for HeadCmd {
    fn name(&self) -> &str {
        "head"
    }
    fn description(&self) -> &str {
        "output the first part of a file"
    }
    fn usage(&self) -> &str {
        "head [-n N] <file>"
    }
    fn category(&self) -> &str {
        "text"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> ShellResult<CommandOutput> {
        let (n, file) = parse_n_flag("head", args, 10)?;
        let text = read_text(
            env,
            file,
            format!("head: cannot open '{file}' for reading"),
            format!("head: error reading '{file}'"),
        )?;
        let result: Vec<&str> = text.lines().take(n).collect();
        Ok(CommandOutput::Text(result.join("\n")))
    }
}

// ---------------------------------------------------------------------------
// tail
// ---------------------------------------------------------------------------

struct TailCmd;
impl Command for TailCmd {
    fn name(&self) -> &str {
        "tail"
    }
    fn description(&self) -> &str {
        "output the last part of a file"
    }
    fn usage(&self) -> &str {
        "tail [-n N] <file>"
    }
    fn category(&self) -> &str {
        "text"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> ShellResult<CommandOutput> {
        let (n, file) = parse_n_flag("tail", args, 10)?;
        let text = read_text(
            env,
            file,
            format!("tail: cannot open '{file}' for reading"),
            format!("tail: error reading '{file}'"),
        )?;
        let lines: Vec<&str> = text.lines().collect();
        let start = lines.len().saturating_sub(n);
        Ok(CommandOutput::Text(lines[start..].join("\n")))
    }
}

// ---------------------------------------------------------------------------
// wc
// ---------------------------------------------------------------------------

struct WcCmd;
impl Command for WcCmd {
    fn name(&self) -> &str {
        "wc"
    }
    fn description(&self) -> &str {
        "print line, word, and byte counts"
    }
    fn usage(&self) -> &str {
        "wc [-l] [-w] [-c] <file>"
    }
    fn category(&self) -> &str {
        "text"
    }
    fn manual(&self) -> Option<&str> {
        Some(
            "Print line, word and byte counts for FILE.\n\
             -l  lines\n\
             -w  words\n\
             -c  bytes\n\
             Without any of these flags all three counts are printed.",
        )
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> ShellResult<CommandOutput> {
        let (flags, operands) = split_flags(args);
        let Some(&file) = operands.first() else {
            return Err(ShellError::missing_operand("wc", "file operand"));
        };
        let text = read_text(env, file, format!("wc: {file}"), format!("wc: {file}"))?;

        let mut lines = flags.contains(&'l');
        let mut words = flags.contains(&'w');
        let mut bytes = flags.contains(&'c');
        if !(lines || words || bytes) {
            (lines, words, bytes) = (true, true, true);
        }

        let mut out = String::new();
        if lines {
            out.push_str(&format!("{:>7} ", text.lines().count()));
        }
        if words {
            out.push_str(&format!("{:>7} ", text.split_whitespace().count()));
        }
        if bytes {
            out.push_str(&format!("{:>7} ", text.len()));
        }
        out.push_str(file);
        Ok(CommandOutput::Text(out))
    }
}

// ---------------------------------------------------------------------------
// sort
// ---------------------------------------------------------------------------

struct SortCmd;
impl Command for SortCmd {
    fn name(&self) -> &str {
        "sort"
    }
    fn description(&self) -> &str {
        "sort lines of a file"
    }
    fn usage(&self) -> &str {
        "sort [-r] [-n] <file>"
    }
    fn category(&self) -> &str {
        "text"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> ShellResult<CommandOutput> {
        let (flags, operands) = split_flags(args);
        let Some(&file) = operands.first() else {
            return Err(ShellError::missing_operand("sort", "file operand"));
        };
        let text = read_text(
            env,
            file,
            format!("sort: cannot read: {file}"),
            format!("sort: read failed: {file}"),
        )?;
        let mut lines: Vec<&str> = text.lines().collect();

        if flags.contains(&'n') {
            lines.sort_by(|a, b| {
                leading_number(a)
                    .total_cmp(&leading_number(b))
                    .then_with(|| a.cmp(b))
            });
        } else {
            lines.sort();
        }
        if flags.contains(&'r') {
            lines.reverse();
        }
        Ok(CommandOutput::Text(lines.join("\n")))
    }
}

/// Numeric key for `sort -n`: the leading number of a line, or 0.
fn leading_number(line: &str) -> f64 {
    let trimmed = line.trim_start();
    let end = trimmed
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || c == '.' || (i == 0 && c == '-')))
        .map_or(trimmed.len(), |(i, _)| i);
    trimmed[..end].parse().unwrap_or(0.0)
}

// ---------------------------------------------------------------------------
// uniq
// ---------------------------------------------------------------------------

struct UniqCmd;
impl Command for UniqCmd {
    fn name(&self) -> &str {
        "uniq"
    }
    fn description(&self) -> &str {
        "collapse adjacent duplicate lines"
    }
    fn usage(&self) -> &str {
        "uniq [-c] <file>"
    }
    fn category(&self) -> &str {
        "text"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> ShellResult<CommandOutput> {
        let (flags, operands) = split_flags(args);
        let show_count = flags.contains(&'c');
        let Some(&file) = operands.first() else {
            return Err(ShellError::missing_operand("uniq", "file operand"));
        };
        let text = read_text(env, file, format!("uniq: {file}"), format!("uniq: {file}"))?;

        let mut runs: Vec<(usize, &str)> = Vec::new();
        for line in text.lines() {
            match runs.last_mut() {
                Some((count, prev)) if *prev == line => *count += 1,
                _ => runs.push((1, line)),
            }
        }
        let result: Vec<String> = runs
            .into_iter()
            .map(|(count, line)| {
                if show_count {
                    format!("{count:>7} {line}")
                } else {
                    line.to_string()
                }
            })
            .collect();
        Ok(CommandOutput::Text(result.join("\n")))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse `-n N`, `-nN` or `-N` from args, returning (count, file path).
fn parse_n_flag<'a>(
    cmd: &str,
    args: &[&'a str],
    default: usize,
) -> ShellResult<(usize, &'a str)> {
    let invalid = |value: &str| {
        ShellError::InvalidArgument(format!("{cmd}: invalid number of lines: '{value}'"))
    };
    let mut n = default;
    let mut file = None;
    let mut i = 0;
    while i < args.len() {
        let arg = args[i];
        if arg == "-n" {
            i += 1;
            let value = args.get(i).copied().ok_or_else(|| {
                ShellError::InvalidArgument(format!("{cmd}: option requires an argument -- 'n'"))
            })?;
            n = value.parse().map_err(|_| invalid(value))?;
        } else if let Some(value) = arg.strip_prefix("-n") {
            n = value.parse().map_err(|_| invalid(value))?;
        } else if let Some(value) = arg.strip_prefix('-').filter(|v| !v.is_empty()) {
            n = value.parse().map_err(|_| invalid(value))?;
        } else if file.is_none() {
            file = Some(arg);
        }
        i += 1;
    }
    let file = file.ok_or_else(|| ShellError::missing_operand(cmd, "file operand"))?;
    Ok((n, file))
}

/// Read a file's content, mapping a missing path or a directory to the
/// given message prefixes.
fn read_text<'e>(
    env: &'e Environment<'_>,
    file: &str,
    missing: String,
    directory: String,
) -> ShellResult<&'e str> {
    match env.resolve(file) {
        Some(Node::File { content, .. }) => Ok(content),
        Some(Node::Directory { .. }) => Err(ShellError::is_a_directory(directory)),
        None => Err(ShellError::not_found(missing)),
    }
}

/// Register text processing commands.
pub fn register_text_commands(reg: &mut crate::CommandRegistry) {
    reg.register(Box::new(GrepCmd));
    reg.register(Box::new(HeadCmd));
    reg.register(Box::new(TailCmd));
    reg.register(Box::new(WcCmd));
    reg.register(Box::new(SortCmd));
    reg.register(Box::new(UniqCmd));
}
