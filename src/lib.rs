//! Toolwrap - thin helpers around external command-line tools
//!
//! This crate wraps a handful of external tools behind a small set of
//! functions with primitive return values: checksum computation and file size
//! queries are done in-process; decompression and archive inspection shell
//! out to `xz` and `unzip`.
//!
//! Failure handling is deliberately two-valued. Functions returning an
//! optional value fold every underlying failure into `None`, and functions
//! returning a status or boolean fold failure into a non-zero code or
//! `false`. The discarded cause is logged at `debug!` level; callers who need
//! the exit status plus captured stderr can use [`invoke::run_tool`]
//! directly.

// Enforce strict code quality and reliability
#![deny(
    // Safety
    unsafe_code,

    // Correctness
    missing_debug_implementations,
    unreachable_pub,

    // Future compatibility
    future_incompatible,

    // Rust 2018 idioms
    rust_2018_idioms,
)]
#![warn(
    // Documentation
    missing_docs,

    // Error handling best practices
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
)]

pub mod files;
pub mod invoke;
pub mod logger;
pub mod xz;
pub mod zip;

// Re-export the function surface at the crate root
pub use files::{get_file_size, md5_file};
pub use invoke::{ToolOutput, run_tool, tool_exists};
pub use xz::{decompress_xz, test_xz};
pub use zip::{extract_from_zip_to, file_in_zip, get_files_in_zip};
