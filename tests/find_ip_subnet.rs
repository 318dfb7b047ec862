use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/*-------------------------------------------------------------------------------------------------
  find-ip-subnet Binary Tests
-------------------------------------------------------------------------------------------------*/

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn stdout_lines(output: &std::process::Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(String::from)
        .collect()
}

/*--------------------------------------------------------------------------------------
  Version
--------------------------------------------------------------------------------------*/

#[test]
fn command_version() {
    Command::cargo_bin("find-ip-subnet")
        .unwrap()
        .arg("--version")
        .assert()
        .success();
}

/*--------------------------------------------------------------------------------------
  Search Targets
--------------------------------------------------------------------------------------*/

#[test]
fn command_search_file() {
    let dir = TempDir::new().unwrap();
    write(
        &dir.path().join("prefixes.txt"),
        "# AS64500 prefixes\n10.0.0.0/25\n10.1.0.0/24\n192.0.2.77\n",
    );

    let assert = Command::cargo_bin("find-ip-subnet")
        .unwrap()
        .current_dir(dir.path())
        .args(["--file", "prefixes.txt", "--search", "10.0.0.0/24,192.0.2.0/24"])
        .assert()
        .success();

    assert_eq!(
        stdout_lines(assert.get_output()),
        vec![
            "./prefixes.txt: line 2: 10.0.0.0/25",
            "./prefixes.txt: line 4: 192.0.2.77",
        ]
    );
}

#[test]
fn command_search_directory_then_file() {
    let dir = TempDir::new().unwrap();
    write(&dir.path().join("lists/b.txt"), "2001:db8::1\n");
    write(&dir.path().join("lists/a.txt"), "192.0.2.1\n");
    write(&dir.path().join("lists/.hidden"), "192.0.2.2\n");
    write(&dir.path().join("lists/nested/c.txt"), "192.0.2.3\n");
    write(&dir.path().join("single.txt"), "192.0.2.0/28\n");

    let assert = Command::cargo_bin("find-ip-subnet")
        .unwrap()
        .current_dir(dir.path())
        .args([
            "--file",
            "single.txt",
            "--directory",
            "lists",
            "--search",
            "192.0.2.0/24, 2001:db8::/32",
        ])
        .assert()
        .success();

    assert_eq!(
        stdout_lines(assert.get_output()),
        vec![
            "lists/a.txt: line 1: 192.0.2.1",
            "lists/b.txt: line 1: 2001:db8::1",
            "lists/nested/c.txt: line 1: 192.0.2.3",
            "./single.txt: line 1: 192.0.2.0/28",
        ]
    );
}

#[test]
fn command_no_matches() {
    let dir = TempDir::new().unwrap();
    write(&dir.path().join("prefixes.txt"), "10.0.0.0/8\n");

    let assert = Command::cargo_bin("find-ip-subnet")
        .unwrap()
        .current_dir(dir.path())
        .args(["--file", "prefixes.txt", "--search", "2001:db8::/32"])
        .assert()
        .success();

    assert!(assert.get_output().stdout.is_empty());
}

/*--------------------------------------------------------------------------------------
  CSV Output
--------------------------------------------------------------------------------------*/

#[test]
fn command_csv_output() {
    let dir = TempDir::new().unwrap();
    write(&dir.path().join("prefixes.txt"), "198.51.100.0/24\n203.0.113.9\n");

    Command::cargo_bin("find-ip-subnet")
        .unwrap()
        .current_dir(dir.path())
        .args([
            "--file",
            "prefixes.txt",
            "--search",
            "198.51.100.0/23,203.0.113.0/24",
            "--csv",
            "matches.csv",
        ])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(dir.path().join("matches.csv")).unwrap(),
        "File,Line,Entry,Matched Search Network\n\
         prefixes.txt,1,198.51.100.0/24,198.51.100.0/23\n\
         prefixes.txt,2,203.0.113.9,203.0.113.0/24\n"
    );
}

/*--------------------------------------------------------------------------------------
  Rejected Input
--------------------------------------------------------------------------------------*/

#[test]
fn command_requires_directory_or_file() {
    Command::cargo_bin("find-ip-subnet")
        .unwrap()
        .args(["--search", "10.0.0.0/8"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn command_invalid_search_network() {
    let dir = TempDir::new().unwrap();
    write(&dir.path().join("prefixes.txt"), "10.0.0.0/8\n");

    let assert = Command::cargo_bin("find-ip-subnet")
        .unwrap()
        .current_dir(dir.path())
        .args(["--file", "prefixes.txt", "--search", "10.0.0.0/8,10.0.0.256"])
        .assert()
        .code(1);

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(stderr.contains("Error: Invalid IP address or subnet: \"10.0.0.256\""));
    assert!(assert.get_output().stdout.is_empty());
}

#[test]
fn command_missing_file_is_skipped() {
    let dir = TempDir::new().unwrap();

    Command::cargo_bin("find-ip-subnet")
        .unwrap()
        .current_dir(dir.path())
        .args(["--file", "missing.txt", "--search", "10.0.0.0/8"])
        .assert()
        .success();
}
