//! End-to-end behavior of a session driven one line at a time.

use proptest::prelude::*;
use shellsim_terminal::{CLEAR_SCREEN, Session};
use shellsim_vfs::{Node, default_seed, path};

fn session() -> Session {
    Session::new(&default_seed()).unwrap()
}

fn child_names(s: &Session, abs: &str) -> Vec<String> {
    s.filesystem()
        .lookup(abs)
        .and_then(Node::children)
        .map(|c| c.keys().cloned().collect())
        .unwrap_or_default()
}

#[test]
fn cd_then_cat_readme() {
    let mut s = session();
    let r = s.execute("cd documents");
    assert_eq!(r.new_directory, "/home/user/documents");
    let r = s.execute("cat readme.txt");
    assert_eq!(
        r.output,
        "Welcome to the Linux Mastery Game!\nLearn Linux commands by completing challenges."
    );
    assert_eq!(r.new_directory, "/home/user/documents");
}

#[test]
fn mkdir_then_rm_restores_children() {
    let mut s = session();
    let before = child_names(&s, "/home/user");
    assert_eq!(s.execute("mkdir scratch").output, "");
    assert_ne!(child_names(&s, "/home/user"), before);
    assert_eq!(s.execute("rm -r scratch").output, "");
    assert_eq!(child_names(&s, "/home/user"), before);
}

#[test]
fn touch_twice_keeps_empty_content() {
    let mut s = session();
    s.execute("touch f");
    s.execute("touch f");
    let node = s.filesystem().lookup("/home/user/f").unwrap();
    assert_eq!(node.content(), Some(""));
}

#[test]
fn cp_does_not_alias() {
    let mut s = session();
    s.execute("cp documents/notes.txt b");
    s.execute("rm b");
    s.execute("cp documents/notes.txt b");
    s.execute("chmod 600 b");
    let a = s.filesystem().lookup("/home/user/documents/notes.txt").unwrap();
    assert_eq!(a.mode(), None);
    assert!(a.content().unwrap().starts_with("Remember:"));
}

#[test]
fn cd_up_at_root_stays_at_root() {
    let mut s = session();
    s.execute("cd /");
    let r = s.execute("cd ..");
    assert_eq!(r.output, "");
    assert_eq!(r.new_directory, "/");
}

#[test]
fn ls_dotfiles() {
    let mut s = session();
    s.execute("mkdir box");
    s.execute("touch box/.hidden box/plain");
    assert_eq!(s.execute("ls box").output, "plain");
    assert_eq!(s.execute("ls -a box").output, ".hidden  plain");
}

#[test]
fn rm_missing_reports_and_changes_nothing() {
    let mut s = session();
    let before = s.filesystem().clone();
    let r = s.execute("rm nonexistent");
    assert_eq!(
        r.output,
        "rm: cannot remove 'nonexistent': No such file or directory"
    );
    assert_eq!(r.new_directory, "/home/user");
    assert_eq!(s.filesystem(), &before);
}

#[test]
fn export_then_echo() {
    let mut s = session();
    assert_eq!(s.execute("export FOO=bar").output, "");
    assert_eq!(s.execute("echo $FOO").output, "bar");
    assert_eq!(
        s.execute("export 1BAD=x").output,
        "export: '1BAD=x': not a valid identifier"
    );
}

#[test]
fn clear_emits_escape() {
    let mut s = session();
    assert_eq!(s.execute("clear").output, CLEAR_SCREEN);
}

#[test]
fn history_lists_entered_lines() {
    let mut s = session();
    s.execute("pwd");
    s.execute("whoami");
    assert_eq!(
        s.execute("history").output,
        "    1  pwd\n    2  whoami\n    3  history"
    );
}

#[test]
fn sessions_are_isolated() {
    let seed = default_seed();
    let mut a = Session::new(&seed).unwrap();
    let mut b = Session::new(&seed).unwrap();
    a.execute("rm -r documents");
    a.execute("export ONLY_A=1");
    a.execute("cd /etc");
    assert!(b.filesystem().exists("/home/user/documents/readme.txt"));
    assert_eq!(b.env().get("ONLY_A"), None);
    assert_eq!(b.current_directory(), "/home/user");
    assert_eq!(b.execute("echo $ONLY_A").output, "");
    assert!(seed.children().unwrap().contains_key("home"));
}

#[test]
fn embedded_dotdot_is_not_found() {
    let mut s = session();
    assert_eq!(
        s.execute("cat documents/../.bashrc").output,
        "cat: documents/../.bashrc: No such file or directory"
    );
    assert_eq!(s.execute("cd documents/..").new_directory, "/home/user");
}

#[test]
fn embedded_dot_is_not_found() {
    let mut s = session();
    assert_eq!(
        s.execute("cat ./documents/readme.txt").output,
        "cat: ./documents/readme.txt: No such file or directory"
    );
    let r = s.execute("cd documents/./");
    assert_eq!(r.output, "bash: cd: documents/./: No such file or directory");
    assert_eq!(r.new_directory, "/home/user");
    assert_eq!(s.execute("cd .").new_directory, "/home/user");
}

fn all_paths(s: &Session) -> Vec<String> {
    let mut paths = vec!["/".to_string()];
    paths.extend(s.filesystem().walk("/").into_iter().map(|(p, _)| p));
    paths
}

proptest! {
    #[test]
    fn relative_and_absolute_agree(pick_cwd in 0usize..64, pick_target in 0usize..64) {
        let s = session();
        let fs = s.filesystem();
        let dirs: Vec<String> = all_paths(&s).into_iter().filter(|p| fs.is_dir(p)).collect();
        let cwd = &dirs[pick_cwd % dirs.len()];
        let paths = all_paths(&s);
        let target = &paths[pick_target % paths.len()];

        // Express the target relative to cwd when it sits below it.
        let expr = match target.strip_prefix(cwd.as_str()) {
            Some(rest) if cwd != "/" && rest.starts_with('/') => rest[1..].to_string(),
            _ => target.clone(),
        };
        let abs = path::absolute_path(&expr, cwd);
        prop_assert_eq!(fs.resolve(&abs, "/"), fs.resolve(&expr, cwd));
        prop_assert!(fs.resolve(&expr, cwd).is_some());
    }

    #[test]
    fn any_line_keeps_cwd_valid(line in "[a-z]{1,6}( [a-z./~-]{1,8}){0,3}") {
        let mut s = session();
        let r = s.execute(&line);
        prop_assert!(s.filesystem().is_dir(&r.new_directory));
        prop_assert_eq!(r.new_directory.as_str(), s.current_directory());
    }
}
