//! OS-backed implementation of the dispatcher's `Host` capabilities:
//! sysinfo process snapshot, std filesystem checks, detached spawn.

use std::ffi::OsStr;
use std::path::Path;

use anyhow::{Context, Result};
use sysinfo::{ProcessesToUpdate, System};

use crate::dispatch::Host;

pub struct SystemHost {
    sys: System,
}

impl SystemHost {
    /// Takes a fresh process snapshot. The snapshot is read once per
    /// invocation and never refreshed; a browser starting afterwards is
    /// not observed (accepted staleness).
    pub fn new() -> Self {
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::All, true);
        Self { sys }
    }
}

impl Default for SystemHost {
    fn default() -> Self {
        Self::new()
    }
}

/// Short-name match. Windows process names carry an `.exe` suffix and
/// compare case-insensitively; elsewhere the comparison is exact.
fn name_matches(proc_name: &OsStr, wanted: &str) -> bool {
    let name = proc_name.to_string_lossy();
    if cfg!(windows) {
        let lower = name.to_ascii_lowercase();
        let base = lower.strip_suffix(".exe").unwrap_or(&lower);
        base == wanted.to_ascii_lowercase()
    } else {
        name == wanted
    }
}

impl Host for SystemHost {
    fn process_running(&self, name: &str) -> bool {
        self.sys
            .processes()
            .values()
            .any(|p| name_matches(p.name(), name))
    }

    fn path_exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn launch(&self, path: &Path, arg_string: &str) -> Result<()> {
        spawn_detached(path, arg_string)
            .with_context(|| format!("failed to launch {}", path.display()))
    }
}

#[cfg(windows)]
fn spawn_detached(path: &Path, arg_string: &str) -> std::io::Result<()> {
    use std::os::windows::process::CommandExt;
    use std::process::{Command, Stdio};

    const CREATE_NO_WINDOW: u32 = 0x0800_0000;
    const DETACHED_PROCESS: u32 = 0x0000_0008;

    // raw_arg passes the pre-quoted argument string through unchanged.
    Command::new(path)
        .raw_arg(arg_string)
        .creation_flags(CREATE_NO_WINDOW | DETACHED_PROCESS)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(())
}

#[cfg(unix)]
fn spawn_detached(path: &Path, arg_string: &str) -> std::io::Result<()> {
    use std::os::unix::process::CommandExt;
    use std::process::{Command, Stdio};

    // argv is an array here; undo the quoting to pass the literal URL.
    let url = unquote_arg(arg_string);
    let mut cmd = Command::new(path);
    cmd.arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    // New session so the browser outlives this short-lived handler.
    unsafe {
        cmd.pre_exec(|| {
            libc::setsid();
            Ok(())
        });
    }
    cmd.spawn()?;
    Ok(())
}

/// Inverse of `dispatch::quote_arg`: strips the wrapping quotes and
/// backslash escapes to recover the literal argument value.
#[cfg(unix)]
fn unquote_arg(s: &str) -> String {
    let inner = s
        .strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(s);
    inner.replace("\\\"", "\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_exists_matches_files_not_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("browser");
        std::fs::write(&file, b"").unwrap();

        let host = SystemHost::new();
        assert!(host.path_exists(&file));
        assert!(!host.path_exists(dir.path()));
        assert!(!host.path_exists(&dir.path().join("missing")));
    }

    #[test]
    fn process_running_false_for_unlikely_name() {
        let host = SystemHost::new();
        assert!(!host.process_running("definitely-not-a-real-process-name-4242"));
    }

    #[cfg(unix)]
    #[test]
    fn name_match_is_exact_on_unix() {
        assert!(name_matches(OsStr::new("chrome"), "chrome"));
        assert!(!name_matches(OsStr::new("Chrome"), "chrome"));
        assert!(!name_matches(OsStr::new("chrome.exe"), "chrome"));
    }

    #[cfg(windows)]
    #[test]
    fn name_match_ignores_case_and_exe_suffix() {
        assert!(name_matches(OsStr::new("Chrome.EXE"), "chrome"));
        assert!(name_matches(OsStr::new("chrome"), "chrome"));
        assert!(!name_matches(OsStr::new("chromium.exe"), "chrome"));
    }

    #[cfg(unix)]
    #[test]
    fn unquote_inverts_quote_arg() {
        use crate::dispatch::quote_arg;
        for url in ["https://a/b", "https://a/?q=\"x\"", ""] {
            assert_eq!(unquote_arg(&quote_arg(url)), url);
        }
    }
}
