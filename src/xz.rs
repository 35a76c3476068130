//! Wrappers around the external `xz` tool

use crate::invoke;
use log::debug;
use std::ffi::OsStr;
use std::path::Path;

/// Confirm that `xz` is installed and reachable on the search path.
pub fn test_xz() -> bool {
    invoke::tool_exists("xz")
}

/// Decompress an `.xz` file in place with `xz -d`.
///
/// Returns the raw exit status (0 = success). On success the tool deletes the
/// source file and leaves the decompressed contents at the same path minus
/// the `.xz` suffix; that side effect belongs to `xz`, not this crate.
/// Returns `-1` when the process could not be spawned at all.
pub fn decompress_xz(path: impl AsRef<Path>) -> i32 {
    let path = path.as_ref();
    match invoke::run_tool("xz", [OsStr::new("-d"), path.as_os_str()]) {
        Ok(output) => output.status,
        Err(err) => {
            debug!("⚠️ Cannot spawn xz: {err}");
            -1
        }
    }
}
