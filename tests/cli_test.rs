use assert_cmd::Command;
use predicates::prelude::*;
use rstest::rstest;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

/// Command running inside `temp` with `temp/home` as the home directory
fn installer(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("add-rust-skill").unwrap();
    cmd.current_dir(temp.path())
        .env("HOME", temp.path().join("home"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn is_empty_dir(path: &Path) -> bool {
    fs::read_dir(path).unwrap().next().is_none()
}

#[test]
fn test_help_output() {
    let temp = TempDir::new().unwrap();
    installer(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("TARGET"));
}

#[test]
fn test_version_output() {
    let temp = TempDir::new().unwrap();
    installer(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("add-rust-skill"));
}

#[rstest]
#[case::missing(&[])]
#[case::unknown(&["unknown"])]
#[case::wrong_case(&["Claude"])]
#[case::extra_argument(&["claude", "opencode"])]
fn test_invalid_target_prints_usage(#[case] args: &[&str]) {
    let temp = TempDir::new().unwrap();
    write(&temp.path().join("skills/foo.md"), "foo");

    installer(&temp)
        .args(args)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid or missing target environment."))
        .stdout(predicate::str::contains("add-rust-skill <target>"))
        .stdout(predicate::str::contains("- opencode"))
        .stdout(predicate::str::contains("- claude"));

    assert!(!temp.path().join("home").exists());
}

#[test]
fn test_install_claude_into_missing_destination() {
    let temp = TempDir::new().unwrap();
    write(&temp.path().join("skills/foo.md"), "# foo skill\n");

    installer(&temp)
        .arg("claude")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Starting rust-skills installation for Claude Code...",
        ))
        .stdout(predicate::str::contains("Target directory is"))
        .stdout(predicate::str::contains("Copied 1 file(s)"))
        .stdout(predicate::str::contains(
            "SUCCESS Successfully installed skills for Claude Code.",
        ));

    let dest = temp.path().join("home/.claude/skills");
    assert_eq!(fs::read_to_string(dest.join("foo.md")).unwrap(), "# foo skill\n");
}

#[test]
fn test_install_opencode_copies_nested_skills() {
    let temp = TempDir::new().unwrap();
    write(&temp.path().join("skills/async/SKILL.md"), "async");
    write(&temp.path().join("skills/async/reference/tokio.md"), "tokio");

    installer(&temp)
        .arg("opencode")
        .assert()
        .success()
        .stdout(predicate::str::contains("OpenCode"));

    let dest = temp.path().join("home/.config/opencode/skills");
    assert_eq!(fs::read_to_string(dest.join("async/SKILL.md")).unwrap(), "async");
    assert_eq!(
        fs::read_to_string(dest.join("async/reference/tokio.md")).unwrap(),
        "tokio"
    );
}

#[test]
fn test_missing_source_fails_without_creating_destination() {
    let temp = TempDir::new().unwrap();

    installer(&temp)
        .arg("opencode")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Source skills directory not found at"))
        .stderr(predicate::str::contains("skills"))
        .stderr(predicate::str::contains(
            "Please run this command from the root of the \"rust-skills\" repository.",
        ));

    assert!(!temp.path().join("home/.config/opencode").exists());
}

#[test]
fn test_overwrites_changed_skills_and_keeps_others() {
    let temp = TempDir::new().unwrap();
    write(&temp.path().join("skills/baz.md"), "baz from source");
    let dest = temp.path().join("home/.config/opencode/skills");
    write(&dest.join("bar.md"), "bar installed earlier");
    write(&dest.join("baz.md"), "stale baz");

    installer(&temp).arg("opencode").assert().success();

    assert_eq!(
        fs::read_to_string(dest.join("bar.md")).unwrap(),
        "bar installed earlier"
    );
    assert_eq!(fs::read_to_string(dest.join("baz.md")).unwrap(), "baz from source");
}

#[test]
fn test_second_run_produces_same_destination() {
    let temp = TempDir::new().unwrap();
    write(&temp.path().join("skills/one.md"), "one");
    write(&temp.path().join("skills/nested/two.md"), "two");
    let dest = temp.path().join("home/.claude/skills");

    installer(&temp).arg("claude").assert().success();
    let first = (
        fs::read_to_string(dest.join("one.md")).unwrap(),
        fs::read_to_string(dest.join("nested/two.md")).unwrap(),
    );
    installer(&temp).arg("claude").assert().success();
    let second = (
        fs::read_to_string(dest.join("one.md")).unwrap(),
        fs::read_to_string(dest.join("nested/two.md")).unwrap(),
    );

    assert_eq!(first, second);
    assert_eq!(fs::read_dir(&dest).unwrap().count(), 2);
}

#[test]
fn test_empty_source_warns_but_succeeds() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("skills")).unwrap();

    installer(&temp)
        .arg("claude")
        .assert()
        .success()
        .stderr(predicate::str::contains("WARN No skill files found"));

    assert!(is_empty_dir(&temp.path().join("home/.claude/skills")));
}

#[test]
fn test_blocked_destination_reports_cause() {
    let temp = TempDir::new().unwrap();
    write(&temp.path().join("skills/foo.md"), "foo");
    write(&temp.path().join("home/.claude"), "a file where a directory belongs");

    installer(&temp)
        .arg("claude")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "An unexpected error occurred during installation",
        ))
        .stderr(predicate::str::contains("Failed to create target directory"));
}

#[test]
fn test_running_inside_destination_keeps_installed_skills() {
    let temp = TempDir::new().unwrap();
    let claude_dir = temp.path().join("home/.claude");
    write(&claude_dir.join("skills/mine.md"), "my installed skill");

    let mut cmd = installer(&temp);
    cmd.current_dir(&claude_dir)
        .arg("claude")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Source and target must not be the same directory",
        ))
        .stdout(predicate::str::contains("SUCCESS").not());

    assert_eq!(
        fs::read_to_string(claude_dir.join("skills/mine.md")).unwrap(),
        "my installed skill"
    );
}

#[test]
fn test_source_nested_in_destination_is_refused() {
    let temp = TempDir::new().unwrap();
    let dest = temp.path().join("home/.config/opencode/skills");
    write(&dest.join("skills/foo.md"), "foo");

    let mut cmd = installer(&temp);
    cmd.current_dir(&dest)
        .arg("opencode")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("must not contain one another"));

    assert!(!dest.join("foo.md").exists());
}

#[test]
fn test_copy_failure_reports_cause() {
    let temp = TempDir::new().unwrap();
    write(&temp.path().join("skills/foo.md"), "foo");
    let dest = temp.path().join("home/.claude/skills");
    fs::create_dir_all(dest.join("foo.md")).unwrap();

    installer(&temp)
        .arg("claude")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "An unexpected error occurred during installation",
        ))
        .stderr(predicate::str::contains("Failed to copy"))
        .stderr(predicate::str::contains("foo.md"))
        .stdout(predicate::str::contains("SUCCESS").not());

    assert!(dest.join("foo.md").is_dir());
}

#[test]
fn test_directory_failure_reports_cause() {
    let temp = TempDir::new().unwrap();
    write(&temp.path().join("skills/async/SKILL.md"), "async");
    write(
        &temp.path().join("home/.config/opencode/skills/async"),
        "a file where a skill directory belongs",
    );

    installer(&temp)
        .arg("opencode")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "An unexpected error occurred during installation",
        ))
        .stderr(predicate::str::contains("Failed to create directory"));
}

#[cfg(unix)]
#[test]
fn test_symlinks_are_installed_as_links() {
    let temp = TempDir::new().unwrap();
    write(&temp.path().join("skills/real.md"), "real");
    std::os::unix::fs::symlink("real.md", temp.path().join("skills/alias.md")).unwrap();

    installer(&temp)
        .arg("claude")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 link(s)"));

    let dest = temp.path().join("home/.claude/skills");
    assert_eq!(
        fs::read_link(dest.join("alias.md")).unwrap(),
        Path::new("real.md")
    );
    assert_eq!(fs::read_to_string(dest.join("alias.md")).unwrap(), "real");
}
