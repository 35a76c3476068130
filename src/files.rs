//! Local file helpers: checksum computation and size queries

use log::debug;
use md5::{Digest, Md5};
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

/// Compute the MD5 digest of a file as a lowercase hex string.
///
/// The file is read in fixed-size chunks and fed to an incremental hasher, so
/// arbitrarily large files are handled without buffering them whole. Returns
/// `None` if the file cannot be opened or read - callers must treat `None` as
/// "unavailable", not "invalid file".
pub fn md5_file(path: impl AsRef<Path>) -> Option<String> {
    const BUFFER_SIZE: usize = 8 * 1024;

    let path = path.as_ref();
    let mut file = match File::open(path) {
        Ok(f) => f,
        Err(err) => {
            debug!("⚠️ Cannot open {} for hashing: {err}", path.display());
            return None;
        }
    };

    let mut hasher = Md5::new();
    let mut buffer = [0u8; BUFFER_SIZE];
    loop {
        match file.read(&mut buffer) {
            Ok(0) => break,
            Ok(bytes_read) => hasher.update(&buffer[..bytes_read]),
            Err(err) => {
                debug!("⚠️ Read error while hashing {}: {err}", path.display());
                return None;
            }
        }
    }

    Some(format!("{:x}", hasher.finalize()))
}

/// Get the size of an existing file in bytes.
///
/// Returns `None` when the status query fails; a missing file and a
/// permission failure fold into the same `None` outcome.
pub fn get_file_size(path: impl AsRef<Path>) -> Option<u64> {
    let path = path.as_ref();
    match fs::metadata(path) {
        Ok(metadata) => Some(metadata.len()),
        Err(err) => {
            debug!("⚠️ Cannot stat {}: {err}", path.display());
            None
        }
    }
}
