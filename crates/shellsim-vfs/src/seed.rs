//! Seed templates: the tree every new session starts from.

use shellsim_types::error::{Result, SimError};

use crate::node::Node;

/// The built-in teaching tree.
///
/// ```text
/// /home/user/documents/{readme.txt, notes.txt}
/// /home/user/projects/game/main.py
/// /home/user/.bashrc
/// /etc/passwd
/// /var/log/system.log
/// /usr/bin, /usr/local/bin
/// ```
pub fn default_seed() -> Node {
    Node::dir_with([
        (
            "home",
            Node::dir_with([(
                "user",
                Node::dir_with([
                    (
                        "documents",
                        Node::dir_with([
                            (
                                "readme.txt",
                                Node::file(
                                    "Welcome to the Linux Mastery Game!\n\
                                     Learn Linux commands by completing challenges.",
                                ),
                            ),
                            (
                                "notes.txt",
                                Node::file(
                                    "Remember:\n\
                                     - pwd shows current directory\n\
                                     - ls lists files\n\
                                     - cd changes directory",
                                ),
                            ),
                        ]),
                    ),
                    (
                        "projects",
                        Node::dir_with([(
                            "game",
                            Node::dir_with([(
                                "main.py",
                                Node::file("#!/usr/bin/env python3\nprint(\"Hello, Linux!\")"),
                            )]),
                        )]),
                    ),
                    (
                        ".bashrc",
                        Node::file("# Bash configuration file\nexport PATH=$PATH:/usr/local/bin"),
                    ),
                ]),
            )]),
        ),
        (
            "etc",
            Node::dir_with([(
                "passwd",
                Node::file(
                    "root:x:0:0:root:/root:/bin/bash\n\
                     user:x:1000:1000:user:/home/user:/bin/bash",
                ),
            )]),
        ),
        (
            "var",
            Node::dir_with([(
                "log",
                Node::dir_with([(
                    "system.log",
                    Node::file("[INFO] System started successfully\n[INFO] All services running"),
                )]),
            )]),
        ),
        (
            "usr",
            Node::dir_with([
                ("bin", Node::dir()),
                ("local", Node::dir_with([("bin", Node::dir())])),
            ]),
        ),
    ])
}

/// Parse a seed document.
///
/// Accepts either the root directory node itself or a single-entry object
/// wrapping it under `"/"`.
pub fn parse_seed(src: &str) -> Result<Node> {
    let value: serde_json::Value = serde_json::from_str(src)?;
    let root_value = match value {
        serde_json::Value::Object(mut map) if !map.contains_key("type") => {
            if map.len() != 1 {
                return Err(SimError::Seed(
                    "expected a root node or a single \"/\" entry".to_string(),
                ));
            }
            map.remove("/")
                .ok_or_else(|| SimError::Seed("missing \"/\" entry".to_string()))?
        },
        other => other,
    };
    let root: Node = serde_json::from_value(root_value)?;
    if !root.is_dir() {
        return Err(SimError::Seed("root node must be a directory".to_string()));
    }
    log::debug!(
        "parsed seed with {} top-level entries",
        root.children().map_or(0, |c| c.len())
    );
    Ok(root)
}
