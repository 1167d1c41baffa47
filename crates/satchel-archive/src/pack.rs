use std::ffi::{OsStr, OsString};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use glob::Pattern;
use once_cell::sync::Lazy;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::error::{Error, Result};
use crate::report::PackReport;

/// Fixed entry filter: names starting with a lowercase letter.
static LOWERCASE_NAME: Lazy<Pattern> =
    Lazy::new(|| Pattern::new("[a-z]*").expect("hard-coded pattern"));

/// Pack `directory` into a fresh deflate-compressed zip archive at `zip_file`.
///
/// Any pre-existing file at `zip_file` is removed first. The scan visits
/// `directory`'s immediate lowercase-named subdirectories (one level, no
/// deeper) and then `directory` itself, storing every lowercase-named
/// regular file under its path relative to `directory`. Entries are written
/// in sorted name order within each directory.
///
/// The archive writer lives inside this call; it is finished on success and
/// dropped (closing the output handle) when any entry fails mid-archive.
pub fn pack_dir(directory: &Path, zip_file: &Path) -> Result<PackReport> {
    if !directory.is_dir() {
        return Err(Error::NotADirectory {
            path: directory.to_path_buf(),
        });
    }

    match fs::remove_file(zip_file) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }

    let mut writer = ZipWriter::new(File::create(zip_file)?);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut report = PackReport::default();

    for (subdir, dir_name) in lowercase_dirs(directory)? {
        for (file, name) in lowercase_files(&subdir)? {
            let relative = Path::new(&dir_name).join(&name);
            archive_file(&mut writer, options, &file, &relative, &mut report)?;
        }
    }
    for (file, name) in lowercase_files(directory)? {
        archive_file(&mut writer, options, &file, Path::new(&name), &mut report)?;
    }

    writer.finish()?;
    Ok(report)
}

fn archive_file(
    writer: &mut ZipWriter<File>,
    options: SimpleFileOptions,
    file: &Path,
    relative: &Path,
    report: &mut PackReport,
) -> Result<()> {
    let name = relative.to_string_lossy().replace('\\', "/");
    writer.start_file(name, options)?;

    let mut input = File::open(file).map_err(|e| Error::EntryFailed {
        path: file.to_path_buf(),
        source: e,
    })?;
    let written = io::copy(&mut input, writer).map_err(|e| Error::EntryFailed {
        path: file.to_path_buf(),
        source: e,
    })?;

    report.entry_count += 1;
    report.total_bytes += written;
    report.entries.push(relative.to_path_buf());
    Ok(())
}

fn lowercase_dirs(dir: &Path) -> Result<Vec<(PathBuf, OsString)>> {
    lowercase_entries(dir, true)
}

fn lowercase_files(dir: &Path) -> Result<Vec<(PathBuf, OsString)>> {
    lowercase_entries(dir, false)
}

/// Matching entries of `dir`, sorted by name. Names that are not valid
/// unicode never match the filter and are skipped.
fn lowercase_entries(dir: &Path, want_dirs: bool) -> Result<Vec<(PathBuf, OsString)>> {
    let mut out = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        if !matches_filter(&name) {
            continue;
        }
        let file_type = entry.file_type().map_err(|e| Error::EntryFailed {
            path: entry.path(),
            source: e,
        })?;
        let keep = if want_dirs {
            file_type.is_dir()
        } else {
            file_type.is_file()
        };
        if keep {
            out.push((entry.path(), name));
        }
    }
    out.sort_by(|a, b| a.1.cmp(&b.1));
    Ok(out)
}

fn matches_filter(name: &OsStr) -> bool {
    name.to_str().is_some_and(|n| LOWERCASE_NAME.matches(n))
}
