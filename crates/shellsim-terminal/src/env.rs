//! Shell variable store.

use indexmap::IndexMap;
use shellsim_types::config::ShellConfig;

/// Shell variables in insertion order, which is the order `env` prints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvStore {
    vars: IndexMap<String, String>,
}

impl EnvStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed `HOME`, `USER`, `PATH` and `PWD` from the config.
    pub fn from_config(config: &ShellConfig, cwd: &str) -> Self {
        let mut store = Self::new();
        store.set("HOME", &config.home);
        store.set("USER", &config.user);
        store.set("PATH", &config.path);
        store.set("PWD", cwd);
        store
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Set a variable. Existing names keep their position.
    pub fn set(&mut self, name: &str, value: &str) {
        self.vars.insert(name.to_string(), value.to_string());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Replace every `$NAME` (`NAME` = one or more of `[A-Za-z0-9_]`).
    /// Undefined names expand to nothing; a lone `$` is kept.
    pub fn expand(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        let mut rest = input;
        while let Some(pos) = rest.find('$') {
            out.push_str(&rest[..pos]);
            let after = &rest[pos + 1..];
            let len = after
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                .unwrap_or(after.len());
            if len == 0 {
                out.push('$');
            } else {
                out.push_str(self.get(&after[..len]).unwrap_or(""));
            }
            rest = &after[len..];
        }
        out.push_str(rest);
        out
    }
}

/// A valid name starts with a letter or `_` and continues with
/// alphanumerics or `_`.
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {},
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_in_order() {
        let store = EnvStore::from_config(&ShellConfig::default(), "/home/user");
        let keys: Vec<&str> = store.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["HOME", "USER", "PATH", "PWD"]);
        assert_eq!(store.get("PWD"), Some("/home/user"));
    }

    #[test]
    fn set_keeps_position() {
        let mut store = EnvStore::from_config(&ShellConfig::default(), "/");
        store.set("FOO", "1");
        store.set("HOME", "/root");
        let keys: Vec<&str> = store.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["HOME", "USER", "PATH", "PWD", "FOO"]);
        assert_eq!(store.get("HOME"), Some("/root"));
    }

    #[test]
    fn expand_known_and_unknown() {
        let mut store = EnvStore::new();
        store.set("FOO", "bar");
        assert_eq!(store.expand("$FOO"), "bar");
        assert_eq!(store.expand("x$FOO-y"), "xbar-y");
        assert_eq!(store.expand("$NOPE!"), "!");
        assert_eq!(store.expand("cost: $"), "cost: $");
        assert_eq!(store.expand("$FOO$FOO"), "barbar");
    }

    #[test]
    fn valid_names() {
        assert!(is_valid_name("FOO"));
        assert!(is_valid_name("_x1"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("1A"));
        assert!(!is_valid_name("A-B"));
    }
}
