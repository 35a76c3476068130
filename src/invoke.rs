//! Process invocation for external tools
//!
//! Everything here launches the tool directly with an argument vector via
//! [`std::process::Command`] - no shell is ever involved, so member names and
//! glob patterns reach the tool as single argv entries without quoting
//! hazards.

use log::debug;
use std::ffi::{OsStr, OsString};
use std::io;
use std::process::{Command, ExitStatus, Output, Stdio};

/// Captured result of a finished external tool invocation.
///
/// Created per invocation and consumed immediately by the wrapper functions;
/// exposed so callers who need more than the folded return values (e.g. the
/// captured stderr of a failed run) can invoke tools through [`run_tool`]
/// themselves.
#[derive(Debug)]
pub struct ToolOutput {
    /// Exit status code; `-1` when the process was killed by a signal.
    pub status: i32,
    /// Captured standard output bytes.
    pub stdout: Vec<u8>,
    /// Captured standard error bytes.
    pub stderr: Vec<u8>,
}

impl ToolOutput {
    /// True iff the tool exited with status 0.
    pub fn success(&self) -> bool {
        self.status == 0
    }
}

impl From<Output> for ToolOutput {
    fn from(output: Output) -> Self {
        ToolOutput {
            status: exit_code(output.status),
            stdout: output.stdout,
            stderr: output.stderr,
        }
    }
}

fn exit_code(status: ExitStatus) -> i32 {
    // None means killed by a signal on Unix
    status.code().unwrap_or(-1)
}

/// Run an executable with an argument vector, capturing stdout and stderr,
/// and block until it exits.
///
/// Returns `Err` only when the process could not be spawned (e.g. the
/// executable is not installed); a tool that ran and failed is an `Ok`
/// [`ToolOutput`] with a non-zero status.
pub fn run_tool<I, S>(program: &str, args: I) -> io::Result<ToolOutput>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let args: Vec<OsString> = args.into_iter().map(|a| a.as_ref().to_os_string()).collect();
    debug!("🏃 Running: {program} {args:?}");

    let output = Command::new(program).args(&args).output()?;
    let result = ToolOutput::from(output);

    if !result.success() {
        debug!(
            "⚠️ {program} exited with status {}: {}",
            result.status,
            String::from_utf8_lossy(&result.stderr).trim_end()
        );
    }

    Ok(result)
}

/// Run an executable with stdout and stderr sent to a null sink, and block
/// until it exits. Failures are visible only through the returned status.
pub fn run_tool_quiet<I, S>(program: &str, args: I) -> io::Result<i32>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let args: Vec<OsString> = args.into_iter().map(|a| a.as_ref().to_os_string()).collect();
    debug!("🏃 Running (quiet): {program} {args:?}");

    let status = Command::new(program)
        .args(&args)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()?;

    Ok(exit_code(status))
}

/// Check whether an executable can be found on the search path.
///
/// A capability probe with no side effects; safe to call any number of times.
pub fn tool_exists(tool: &str) -> bool {
    match which::which(tool) {
        Ok(path) => {
            debug!("🔍 Resolved tool '{}' to '{}'", tool, path.display());
            true
        }
        Err(_) => {
            debug!("🔍 Tool '{tool}' not found on PATH");
            false
        }
    }
}
