use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn dicepass(config: &Path) -> Command {
    let mut cmd = Command::cargo_bin("dicepass").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .arg("-f")
        .arg(config);
    cmd
}

fn read_config(path: &Path) -> serde_json::Value {
    let content = std::fs::read_to_string(path).unwrap();
    serde_json::from_str(&content).unwrap()
}

#[test]
fn test_once_prints_password_within_bounds() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");

    let output = dicepass(&config).arg("--once").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let password = stdout.trim_end_matches('\n');
    let len = password.chars().count();
    assert!((20..=64).contains(&len), "bad length {}: {:?}", len, password);
    assert_eq!(password.split(' ').count(), 3);

    // scripting mode leaves the config alone
    assert!(!config.exists());
}

#[test]
fn test_once_with_inverted_bounds_fails() {
    let dir = tempfile::tempdir().unwrap();
    dicepass(&dir.path().join("config.json"))
        .args(["--once", "--min", "50", "--max", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("greater than maximum"));
}

#[test]
fn test_version_flag() {
    let dir = tempfile::tempdir().unwrap();
    dicepass(&dir.path().join("config.json"))
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_orientation_flags_conflict() {
    let dir = tempfile::tempdir().unwrap();
    dicepass(&dir.path().join("config.json"))
        .args(["--portrait", "--landscape"])
        .assert()
        .failure();
}

#[test]
fn test_config_file_overrides_flags() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");
    std::fs::write(&config, r#"{"wordCount": 1, "minLen": 0, "maxLen": 100}"#).unwrap();

    let output = dicepass(&config)
        .args(["--once", "--wc", "5"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.trim().contains(' '));
}

#[test]
fn test_corrupt_config_is_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");
    std::fs::write(&config, "{ definitely not json").unwrap();

    dicepass(&config)
        .arg("--once")
        .assert()
        .success()
        .stderr(predicate::str::contains("could not be loaded"));
}

#[test]
fn test_custom_word_list() {
    let dir = tempfile::tempdir().unwrap();
    let words = dir.path().join("words.txt");
    std::fs::write(&words, "alpha\nbravo\n").unwrap();

    let output = dicepass(&dir.path().join("config.json"))
        .args(["--once", "--wc", "2", "--min", "0", "-s", "+"])
        .arg("--simple-words")
        .arg(&words)
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    for word in stdout.trim().split('+') {
        assert!(word == "alpha" || word == "bravo", "unexpected word {}", word);
    }
}

#[test]
fn test_session_saves_settings_on_quit() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("nested").join("config.json");

    dicepass(&config)
        .write_stdin("wc 4\nsep -\nmin 0\nmax 200\ngen\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Output:"))
        .stdout(predicate::str::contains("Currently generated password length"));

    let saved = read_config(&config);
    assert_eq!(saved["wordCount"], 4);
    assert_eq!(saved["separator"], "-");
    assert_eq!(saved["minLen"], 0);
    assert_eq!(saved["maxLen"], 200);
}

#[test]
fn test_end_of_input_also_saves() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");

    dicepass(&config)
        .write_stdin("dark\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("restarted"));

    assert_eq!(read_config(&config)["darkMode"], true);
}

#[test]
fn test_resize_reports_layout() {
    let dir = tempfile::tempdir().unwrap();
    dicepass(&dir.path().join("config.json"))
        .write_stdin("resize 300 450\nquit\n")
        .assert()
        .success()
        // portrait output field at three times the design size
        .stdout(predicate::str::contains("270x45+15+15"));
}

#[test]
fn test_unknown_command_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    dicepass(&dir.path().join("config.json"))
        .write_stdin("frobnicate\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown command: frobnicate"));
}

#[test]
fn test_extra_needs_confirmation() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");

    dicepass(&config)
        .write_stdin("extra\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("extra yes"));
    assert_eq!(read_config(&config)["useExtendedWordList"], false);

    dicepass(&config)
        .write_stdin("extra yes\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Extra words enabled"));
    assert_eq!(read_config(&config)["useExtendedWordList"], true);
}

#[test]
fn test_huge_word_count_keeps_session_alive() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");

    dicepass(&config)
        .write_stdin("min 0\nmax 9223372036854775807\nwc 9223372036854775807\ngen\nwc 2\ngen\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("above the limit"))
        .stdout(predicate::str::contains("Currently generated password length"));
    assert_eq!(read_config(&config)["wordCount"], 2);
}

#[cfg(unix)]
#[test]
fn test_interrupt_saves_and_exits_cleanly() {
    use std::io::{BufRead, BufReader};
    use std::process::Stdio;

    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");

    let mut child = std::process::Command::new(assert_cmd::cargo::cargo_bin("dicepass"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .arg("-f")
        .arg(&config)
        .args(["--wc", "5"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    // the interrupt handler is in place once the greeting is printed
    let mut stdout = BufReader::new(child.stdout.take().unwrap());
    let mut line = String::new();
    stdout.read_line(&mut line).unwrap();
    assert!(line.contains("help"), "unexpected greeting: {:?}", line);

    let pid = libc::pid_t::try_from(child.id()).unwrap();
    assert_eq!(unsafe { libc::kill(pid, libc::SIGINT) }, 0);

    let status = child.wait().unwrap();
    assert!(status.success(), "exit status {:?}", status);
    assert_eq!(read_config(&config)["wordCount"], 5);
}
