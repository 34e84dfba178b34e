//! Path arithmetic on plain strings.
//!
//! All functions here are pure and never consult the tree. Normalized paths
//! start with `/`, have no empty segments and no trailing `/` (except the
//! root itself).
//!
//! `.` and `..` are only understood as whole expressions (`cd .`, `cd ..`).
//! Inside a longer path they are kept as literal segments, which the tree
//! never contains, so such paths fail to resolve.

/// Turn a path expression typed at the prompt into an absolute path.
///
/// - `"/"` is the root; a leading `/` starts from the root.
/// - `"."` is `cwd`; `".."` is the parent of `cwd` (the root is its own parent).
/// - Anything else is appended to `cwd` segment by segment.
pub fn absolute_path(expr: &str, cwd: &str) -> String {
    match expr {
        "." => return normalize(cwd),
        ".." => return parent(&normalize(cwd)).to_string(),
        _ => {},
    }
    let base = if expr.starts_with('/') { "" } else { cwd };
    let joined = segments(base).chain(segments(expr));
    let mut out = String::with_capacity(base.len() + expr.len() + 1);
    for seg in joined {
        out.push('/');
        out.push_str(seg);
    }
    if out.is_empty() {
        out.push('/');
    }
    out
}

/// Collapse empty segments and strip any trailing `/`.
pub fn normalize(path: &str) -> String {
    absolute_path(path, "/")
}

/// Non-empty segments of a path, in order.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Parent of a normalized absolute path. The parent of `/` is `/`.
pub fn parent(path: &str) -> &str {
    match path.rfind('/') {
        Some(0) | None => "/",
        Some(i) => &path[..i],
    }
}

/// Split a normalized absolute path into `(parent, name)`. `None` for `/`.
pub fn split_parent(path: &str) -> Option<(&str, &str)> {
    if path == "/" {
        return None;
    }
    let i = path.rfind('/')?;
    let dir = if i == 0 { "/" } else { &path[..i] };
    Some((dir, &path[i + 1..]))
}

/// Last segment of a path, or `/` for the root.
pub fn file_name(path: &str) -> &str {
    split_parent(path).map_or("/", |(_, name)| name)
}

/// Append a child name to a directory path.
pub fn join(dir: &str, name: &str) -> String {
    if dir == "/" {
        format!("/{name}")
    } else {
        format!("{dir}/{name}")
    }
}

/// True if `path` equals `ancestor` or lies somewhere beneath it.
pub fn is_within(path: &str, ancestor: &str) -> bool {
    if ancestor == "/" {
        return true;
    }
    path == ancestor
        || path
            .strip_prefix(ancestor)
            .is_some_and(|rest| rest.starts_with('/'))
}
