//! Browser selection and launch decision logic.
//!
//! The dispatcher only depends on the `Host` trait and does not know
//! about sysinfo or real process spawning, so the selection rules are
//! unit-testable against fakes.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::config::RouterConfig;

/// External capabilities the dispatcher needs from the operating system.
pub trait Host {
    /// Whether a process with this short name (no extension, no path)
    /// is running in the current snapshot.
    fn process_running(&self, name: &str) -> bool;

    fn path_exists(&self, path: &Path) -> bool;

    /// Starts `path` as a detached child, passing `arg_string` as a
    /// single pre-quoted command-line argument. No shell, no console.
    fn launch(&self, path: &Path, arg_string: &str) -> Result<()>;
}

/// What a dispatch attempt did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// A browser was launched with the URL.
    Launched { exe_path: PathBuf },
    /// Neither configured browser exists on disk; nothing was started.
    NoBrowser,
}

/// Routes `url` to whichever configured browser is already running,
/// defaulting to the primary, with an existence-check fallback to the
/// other install path. Neither path on disk is a silent no-op.
pub fn dispatch(cfg: &RouterConfig, url: &str, host: &impl Host) -> Result<DispatchOutcome> {
    let primary_running = host.process_running(&cfg.primary.process_name);
    let secondary_running = host.process_running(&cfg.secondary.process_name);

    // Both checks read the same snapshot, so "both running -> primary"
    // is a fixed tie rule, not a race.
    let (chosen, other) = if primary_running {
        (&cfg.primary, &cfg.secondary)
    } else if secondary_running {
        (&cfg.secondary, &cfg.primary)
    } else {
        (&cfg.primary, &cfg.secondary)
    };

    let mut target = chosen.exe_path.as_path();
    if !host.path_exists(target) {
        if host.path_exists(&other.exe_path) {
            target = other.exe_path.as_path();
        } else {
            tracing::debug!(
                primary = %cfg.primary.exe_path.display(),
                secondary = %cfg.secondary.exe_path.display(),
                "no configured browser exists on disk; skipping launch"
            );
            return Ok(DispatchOutcome::NoBrowser);
        }
    }

    tracing::debug!(
        chosen = %target.display(),
        primary_running,
        secondary_running,
        "launching browser"
    );
    host.launch(target, &quote_arg(url))?;
    Ok(DispatchOutcome::Launched {
        exe_path: target.to_path_buf(),
    })
}

/// Minimal safe quoting for a single command-line argument: wrap in
/// double quotes, backslash-escaping any embedded quote first.
pub fn quote_arg(s: &str) -> String {
    if s.is_empty() {
        return "\"\"".to_string();
    }
    if s.contains('"') {
        format!("\"{}\"", s.replace('"', "\\\""))
    } else {
        format!("\"{s}\"")
    }
}
