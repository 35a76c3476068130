//! Wrappers around the external `unzip` tool

use crate::invoke;
use log::debug;
use std::ffi::OsStr;
use std::path::Path;

/// Prefix `unzip -t` puts in front of every member line it tests.
const TESTING_PREFIX: &str = "    testing:";
/// Offset of the member name within a testing line.
const NAME_START: usize = 13;
/// A testing line carries at least a one-character name plus the status tail.
const MIN_LINE_LEN: usize = 16;

/// Extract an archive (or one named member of it) into a destination
/// directory with `unzip -u`.
///
/// The update flag makes `unzip` overwrite only when the archived copy is
/// newer. Tool output is discarded entirely; failures are visible only
/// through the returned exit status (0 = success, `-1` = spawn failure).
pub fn extract_from_zip_to(
    archive: impl AsRef<Path>,
    extract_path: impl AsRef<Path>,
    member: Option<&str>,
) -> i32 {
    let archive = archive.as_ref();
    let extract_path = extract_path.as_ref();

    let mut args: Vec<&OsStr> = vec![OsStr::new("-u"), archive.as_os_str()];
    if let Some(name) = member {
        args.push(OsStr::new(name));
    }
    args.push(OsStr::new("-d"));
    args.push(extract_path.as_os_str());

    match invoke::run_tool_quiet("unzip", args) {
        Ok(status) => status,
        Err(err) => {
            debug!("⚠️ Cannot spawn unzip: {err}");
            -1
        }
    }
}

/// Determine whether an archive contains a member, via `unzip -t`.
///
/// True iff the tool exits 0, which also requires the member's integrity
/// check to pass - a failed checksum inside the archive is indistinguishable
/// from a missing member.
pub fn file_in_zip(archive: impl AsRef<Path>, member: &str) -> bool {
    let archive = archive.as_ref();
    match invoke::run_tool(
        "unzip",
        [OsStr::new("-t"), archive.as_os_str(), OsStr::new(member)],
    ) {
        Ok(output) => output.success(),
        Err(err) => {
            debug!("⚠️ Cannot spawn unzip: {err}");
            false
        }
    }
}

/// List the members of an archive matching a glob pattern, via `unzip -t`.
///
/// The pattern is passed to `unzip` as a single argument, so globs are
/// expanded against the archive contents, not the filesystem. Returns `None`
/// when the tool exits non-zero or cannot be spawned ("cannot determine",
/// which includes a pattern matching nothing), and the matched member names
/// in archive order otherwise.
pub fn get_files_in_zip(archive: impl AsRef<Path>, pattern: &str) -> Option<Vec<String>> {
    let archive = archive.as_ref();
    let output = match invoke::run_tool(
        "unzip",
        [OsStr::new("-t"), archive.as_os_str(), OsStr::new(pattern)],
    ) {
        Ok(output) => output,
        Err(err) => {
            debug!("⚠️ Cannot spawn unzip: {err}");
            return None;
        }
    };

    if !output.success() {
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Some(parse_test_listing(stdout.lines()))
}

/// Extract member names from `unzip -t` human-readable output.
///
/// A member line looks like `    testing: <name>   OK`; it is recognized by
/// its fixed 12-character prefix and minimum length, and the name is cut out
/// by fixed offsets (everything between the prefix and the two-character
/// status tail), trimmed of padding spaces. Lines that do not match are
/// silently ignored. Isolated here so a machine-readable listing mode could
/// replace it without touching the call sites.
pub fn parse_test_listing<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut names = Vec::new();
    for line in lines {
        if line.len() < MIN_LINE_LEN || !line.starts_with(TESTING_PREFIX) {
            continue;
        }
        if let Some(raw) = line.get(NAME_START..line.len() - 2) {
            names.push(raw.trim_matches(' ').to_string());
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoke::tool_exists;
    use std::fs;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// Build a two-member archive without depending on a `zip` binary.
    fn write_zip_fixture(dir: &Path) -> PathBuf {
        use zip::write::{SimpleFileOptions, ZipWriter};

        let path = dir.join("fixture.zip");
        let file = fs::File::create(&path).unwrap();
        let mut writer = ZipWriter::new(file);

        let options = SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Stored);

        writer.start_file("alpha.txt", options).unwrap();
        writer.write_all(b"alpha contents\n").unwrap();
        writer.start_file("docs/beta.txt", options).unwrap();
        writer.write_all(b"beta contents\n").unwrap();

        writer.finish().unwrap();
        path
    }

    #[test]
    fn test_parse_listing_extracts_names_in_order() {
        let output = "Archive:  fixture.zip\n\
                      \x20   testing: alpha.txt                OK\n\
                      \x20   testing: docs/beta.txt            OK\n\
                      No errors detected in compressed data of fixture.zip.\n";

        assert_eq!(
            parse_test_listing(output.lines()),
            vec!["alpha.txt".to_string(), "docs/beta.txt".to_string()]
        );
    }

    #[test]
    fn test_parse_listing_ignores_non_member_lines() {
        let output = "Archive:  fixture.zip\nshort\n  caution: filename mismatch\n";
        assert!(parse_test_listing(output.lines()).is_empty());
    }

    #[test]
    fn test_extract_all_members() {
        if !tool_exists("unzip") {
            return;
        }

        let temp_dir = TempDir::new().unwrap();
        let archive = write_zip_fixture(temp_dir.path());
        let dest = temp_dir.path().join("out");
        fs::create_dir(&dest).unwrap();

        assert_eq!(extract_from_zip_to(&archive, &dest, None), 0);
        assert_eq!(fs::read(dest.join("alpha.txt")).unwrap(), b"alpha contents\n");
        assert_eq!(
            fs::read(dest.join("docs/beta.txt")).unwrap(),
            b"beta contents\n"
        );
    }

    #[test]
    fn test_extract_single_member() {
        if !tool_exists("unzip") {
            return;
        }

        let temp_dir = TempDir::new().unwrap();
        let archive = write_zip_fixture(temp_dir.path());
        let dest = temp_dir.path().join("out");
        fs::create_dir(&dest).unwrap();

        assert_eq!(extract_from_zip_to(&archive, &dest, Some("alpha.txt")), 0);
        assert_eq!(fs::read(dest.join("alpha.txt")).unwrap(), b"alpha contents\n");
        assert!(!dest.join("docs/beta.txt").exists());
    }

    #[test]
    fn test_extract_missing_member_fails() {
        if !tool_exists("unzip") {
            return;
        }

        let temp_dir = TempDir::new().unwrap();
        let archive = write_zip_fixture(temp_dir.path());
        let dest = temp_dir.path().join("out");
        fs::create_dir(&dest).unwrap();

        assert_ne!(extract_from_zip_to(&archive, &dest, Some("missing.txt")), 0);
        assert!(!dest.join("missing.txt").exists());
    }

    #[test]
    fn test_membership() {
        if !tool_exists("unzip") {
            return;
        }

        let temp_dir = TempDir::new().unwrap();
        let archive = write_zip_fixture(temp_dir.path());

        assert!(file_in_zip(&archive, "alpha.txt"));
        assert!(file_in_zip(&archive, "docs/beta.txt"));
        assert!(!file_in_zip(&archive, "missing.txt"));
    }

    #[test]
    fn test_membership_of_missing_archive_is_false() {
        if !tool_exists("unzip") {
            return;
        }

        let temp_dir = TempDir::new().unwrap();
        assert!(!file_in_zip(temp_dir.path().join("nope.zip"), "alpha.txt"));
    }

    #[test]
    fn test_listing_matches_pattern_in_archive_order() {
        if !tool_exists("unzip") {
            return;
        }

        let temp_dir = TempDir::new().unwrap();
        let archive = write_zip_fixture(temp_dir.path());

        assert_eq!(
            get_files_in_zip(&archive, "*").unwrap(),
            vec!["alpha.txt".to_string(), "docs/beta.txt".to_string()]
        );
        assert_eq!(
            get_files_in_zip(&archive, "docs/*").unwrap(),
            vec!["docs/beta.txt".to_string()]
        );
    }

    #[test]
    fn test_listing_with_unmatched_pattern_is_none() {
        if !tool_exists("unzip") {
            return;
        }

        let temp_dir = TempDir::new().unwrap();
        let archive = write_zip_fixture(temp_dir.path());

        // unzip reports "no files matched" as an error exit
        assert_eq!(get_files_in_zip(&archive, "*.nope"), None);
    }

    #[test]
    fn test_listing_of_missing_archive_is_none() {
        if !tool_exists("unzip") {
            return;
        }

        let temp_dir = TempDir::new().unwrap();
        assert_eq!(get_files_in_zip(temp_dir.path().join("nope.zip"), "*"), None);
    }
}
