use std::fs;
use std::path::Path;

use assert_cmd::Command;
use tempfile::TempDir;

fn write_file(dir: &Path, relative: &str, content: &str) {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
}

fn stringslint(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("stringslint").unwrap();
    cmd.current_dir(temp.path());
    cmd
}

#[test]
fn test_keys_reports_occurrences() {
    let temp = TempDir::new().unwrap();
    write_file(
        temp.path(),
        "Localizable.strings",
        "\"a\" = \"1\";\n\"a\" = \"2\";\n\"b\" = \"3\";\n",
    );

    let output = stringslint(&temp)
        .args(["keys", "a", "ghost", "-p", "Localizable.strings"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Key [a] found [2x] in Localizable.strings"));
    assert!(stdout.contains("Key [ghost] not found in Localizable.strings"));
}

#[test]
fn test_keys_remove_saves_changes() {
    let temp = TempDir::new().unwrap();
    write_file(
        temp.path(),
        "Localizable.strings",
        "\"a\" = \"1\";\n\"b\" = \"2\";\n",
    );

    stringslint(&temp)
        .args(["keys", "a", "-p", "Localizable.strings", "--remove"])
        .assert()
        .success();

    let content = fs::read_to_string(temp.path().join("Localizable.strings")).unwrap();
    assert_eq!(content, "\"b\" = \"2\";\n");
}

#[test]
fn test_keys_remove_dry_run_leaves_file_untouched() {
    let temp = TempDir::new().unwrap();
    let content = "\"a\" = \"1\";\n\"b\" = \"2\";\n";
    write_file(temp.path(), "Localizable.strings", content);

    let output = stringslint(&temp)
        .args([
            "keys",
            "a",
            "-p",
            "Localizable.strings",
            "--remove",
            "--dry-run",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Dry run; no files were changed."));
    assert_eq!(
        fs::read_to_string(temp.path().join("Localizable.strings")).unwrap(),
        content
    );
}

#[test]
fn test_remove_spares_excluded_languages() {
    let temp = TempDir::new().unwrap();
    write_file(
        temp.path(),
        "Resources/en.lproj/Localizable.strings",
        "\"a\" = \"A\";\n\"b\" = \"B\";\n",
    );
    write_file(
        temp.path(),
        "Resources/de.lproj/Localizable.strings",
        "\"a\" = \"Ah\";\n\"b\" = \"Beh\";\n",
    );

    let output = stringslint(&temp)
        .args([
            "remove",
            "a",
            "-p",
            "Resources",
            "--exclude-language",
            "de",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Key [a] removed from the following 1 files:"));

    let en = fs::read_to_string(temp.path().join("Resources/en.lproj/Localizable.strings")).unwrap();
    assert_eq!(en, "\"b\" = \"B\";\n");
    let de = fs::read_to_string(temp.path().join("Resources/de.lproj/Localizable.strings")).unwrap();
    assert_eq!(de, "\"a\" = \"Ah\";\n\"b\" = \"Beh\";\n");
}

#[test]
fn test_remove_missing_key_is_informational() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "Localizable.strings", "\"a\" = \"1\";\n");

    let output = stringslint(&temp)
        .args(["remove", "ghost", "a"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    // The first key is missing; processing continues with the next one.
    assert!(stdout.contains("Key [ghost] not found in any .strings file"));
    assert!(stdout.contains("Key [a] removed from the following 1 files:"));
}
