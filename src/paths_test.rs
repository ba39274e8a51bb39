use std::path::PathBuf;

use serial_test::serial;

use crate::paths::*;

fn s(v: &str) -> Option<String> {
    Some(v.to_string())
}

#[test]
fn kanban_home_wins() {
    let dir = resolve_data_dir(s("/opt/kb"), s("/xdg"), s("/home/me"));
    assert_eq!(dir, PathBuf::from("/opt/kb"));
}

#[test]
fn xdg_data_home_is_next() {
    let dir = resolve_data_dir(None, s("/xdg"), s("/home/me"));
    assert_eq!(dir, PathBuf::from("/xdg/kanban"));
}

#[test]
fn falls_back_to_home_local_share() {
    let dir = resolve_data_dir(None, None, s("/home/me"));
    assert_eq!(dir, PathBuf::from("/home/me/.local/share/kanban"));
}

#[test]
fn empty_values_are_ignored() {
    let dir = resolve_data_dir(s(""), s(""), s("/home/me"));
    assert_eq!(dir, PathBuf::from("/home/me/.local/share/kanban"));
}

#[test]
fn no_variables_uses_working_directory() {
    let dir = resolve_data_dir(None, None, None);
    assert_eq!(dir, PathBuf::from("./.kanban"));
}

#[test]
#[serial]
fn db_path_follows_kanban_home() {
    let previous = std::env::var("KANBAN_HOME").ok();
    // SAFETY: serialized with the other env-mutating tests
    unsafe { std::env::set_var("KANBAN_HOME", "/tmp/kanban-paths-test") };

    assert_eq!(
        get_db_path(),
        PathBuf::from("/tmp/kanban-paths-test/kanban.db")
    );

    match previous {
        Some(v) => unsafe { std::env::set_var("KANBAN_HOME", v) },
        None => unsafe { std::env::remove_var("KANBAN_HOME") },
    }
}
