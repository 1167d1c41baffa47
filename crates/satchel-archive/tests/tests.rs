use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use satchel_archive::pack_dir;

fn write_file(path: &Path, content: &[u8]) {
    let mut file = File::create(path).expect("Failed to create fixture file");
    file.write_all(content).expect("Failed to write fixture file");
}

fn archive_names(zip_file: &Path) -> Vec<String> {
    let file = File::open(zip_file).expect("Failed to open archive");
    let archive = zip::ZipArchive::new(file).expect("Failed to read archive");
    let mut names: Vec<String> = archive.file_names().map(str::to_string).collect();
    names.sort();
    names
}

#[test]
fn packs_lowercase_files_one_level_deep() {
    let temp_dir = tempfile::Builder::new()
        .prefix("satchel-pack-")
        .tempdir()
        .expect("Failed to create temp dir");
    let root = temp_dir.path().join("project");

    fs::create_dir_all(root.join("libs")).unwrap();
    fs::create_dir_all(root.join("Docs")).unwrap();
    fs::create_dir_all(root.join("libs/deep")).unwrap();

    write_file(&root.join("alpha.txt"), b"alpha");
    write_file(&root.join("Beta.txt"), b"skipped: uppercase file");
    write_file(&root.join("libs/util.rs"), b"pub fn util() {}");
    write_file(&root.join("libs/Template.rs"), b"skipped: uppercase file");
    write_file(&root.join("Docs/readme.md"), b"skipped: uppercase dir");
    write_file(&root.join("libs/deep/nested.txt"), b"skipped: two levels down");

    let zip_file = temp_dir.path().join("project.zip");
    let report = pack_dir(&root, &zip_file).expect("pack_dir failed");

    assert_eq!(archive_names(&zip_file), ["alpha.txt", "libs/util.rs"]);
    assert_eq!(report.entry_count, 2);
    assert_eq!(report.total_bytes, ("alpha".len() + "pub fn util() {}".len()) as u64);
}

#[test]
fn report_lists_relative_paths_in_write_order() {
    let temp_dir = tempfile::Builder::new()
        .prefix("satchel-pack-")
        .tempdir()
        .expect("Failed to create temp dir");
    let root = temp_dir.path().join("tree");

    fs::create_dir_all(root.join("b_dir")).unwrap();
    fs::create_dir_all(root.join("a_dir")).unwrap();
    write_file(&root.join("b_dir/one.txt"), b"1");
    write_file(&root.join("a_dir/two.txt"), b"2");
    write_file(&root.join("top.txt"), b"t");

    let zip_file = temp_dir.path().join("tree.zip");
    let report = pack_dir(&root, &zip_file).expect("pack_dir failed");

    // Subdirectories first (sorted), then the directory itself.
    let entries: Vec<_> = report
        .entries
        .iter()
        .map(|p| p.to_string_lossy().replace('\\', "/"))
        .collect();
    assert_eq!(entries, ["a_dir/two.txt", "b_dir/one.txt", "top.txt"]);
}

#[test]
fn replaces_existing_archive() {
    let temp_dir = tempfile::Builder::new()
        .prefix("satchel-pack-")
        .tempdir()
        .expect("Failed to create temp dir");
    let root = temp_dir.path().join("src");
    fs::create_dir_all(&root).unwrap();
    write_file(&root.join("keep.txt"), b"keep");

    let zip_file = temp_dir.path().join("out.zip");
    write_file(&zip_file, b"not a zip archive at all");

    pack_dir(&root, &zip_file).expect("pack_dir failed");
    assert_eq!(archive_names(&zip_file), ["keep.txt"]);
}

#[test]
fn empty_directory_yields_empty_archive() {
    let temp_dir = tempfile::Builder::new()
        .prefix("satchel-pack-")
        .tempdir()
        .expect("Failed to create temp dir");
    let root = temp_dir.path().join("empty");
    fs::create_dir_all(&root).unwrap();

    let zip_file = temp_dir.path().join("empty.zip");
    let report = pack_dir(&root, &zip_file).expect("pack_dir failed");

    assert_eq!(report.entry_count, 0);
    assert!(archive_names(&zip_file).is_empty());
}

#[test]
fn missing_directory_is_an_error() {
    let temp_dir = tempfile::Builder::new()
        .prefix("satchel-pack-")
        .tempdir()
        .expect("Failed to create temp dir");

    let result = pack_dir(
        &temp_dir.path().join("nowhere"),
        &temp_dir.path().join("out.zip"),
    );
    assert!(matches!(
        result,
        Err(satchel_archive::Error::NotADirectory { .. })
    ));
}
