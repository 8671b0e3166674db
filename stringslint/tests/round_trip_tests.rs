use std::fs;

use stringslint::StringsFile;
use tempfile::TempDir;

#[test]
fn read_save_round_trip_is_lossless() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("Localizable.strings");

    let content = "\
// Onboarding
\"welcome_title\" = \"Welcome\";
\"welcome_subtitle\" = \"Glad you are here\";

/* profile */
\"profile_title\" = \"Profile\";
\"profile_logout\" = \"\";
";
    fs::write(&path, content).unwrap();

    let file = StringsFile::read_from(&path).unwrap();
    assert_eq!(file.lines.len(), 7);

    file.save().unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), content);
}

#[test]
fn line_numbers_are_one_based_file_positions() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("Localizable.strings");
    fs::write(&path, "// header\n\"a\" = \"1\";\n").unwrap();

    let file = StringsFile::read_from(&path).unwrap();
    assert_eq!(file.lines[0].line_number, 1);
    assert_eq!(file.lines[1].line_number, 2);
    assert_eq!(file.lines[1].key, "a");
}

#[test]
fn reads_utf16_files_with_bom() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("Localizable.strings");

    // Xcode writes .strings as UTF-16LE with a BOM.
    let mut bytes = vec![0xFF, 0xFE];
    for unit in "\"grüße\" = \"Grüße aus Köln\";\n".encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    fs::write(&path, bytes).unwrap();

    let file = StringsFile::read_from(&path).unwrap();
    assert_eq!(file.lines.len(), 1);
    assert_eq!(file.lines[0].key, "grüße");
    assert_eq!(file.lines[0].value, "Grüße aus Köln");
}

#[test]
fn missing_file_surfaces_io_error() {
    let temp = TempDir::new().unwrap();
    let result = StringsFile::read_from(temp.path().join("absent.strings"));
    assert!(matches!(result, Err(stringslint::Error::Io(_))));
}
