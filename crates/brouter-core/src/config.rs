//! Static router configuration: the two browser targets and the
//! registration identity. Built once at startup; values never change
//! during a run.

use std::path::PathBuf;

/// One launchable browser: short process name (no extension, no path)
/// plus the install path of its executable.
#[derive(Debug, Clone)]
pub struct BrowserTarget {
    pub process_name: String,
    pub exe_path: PathBuf,
}

impl BrowserTarget {
    pub fn new(process_name: impl Into<String>, exe_path: impl Into<PathBuf>) -> Self {
        Self {
            process_name: process_name.into(),
            exe_path: exe_path.into(),
        }
    }
}

/// Immutable configuration injected at startup. The primary browser
/// wins all ties (see `dispatch`).
#[derive(Debug, Clone)]
pub struct RouterConfig {
    pub primary: BrowserTarget,
    pub secondary: BrowserTarget,
    /// Registration key name (registry key / desktop file stem).
    pub app_key_name: &'static str,
    /// Human-readable name shown in the system's default-apps UI.
    pub display_name: &'static str,
    pub description: &'static str,
    /// ProgID the http/https associations point at (Windows only).
    pub prog_id: &'static str,
}

impl Default for RouterConfig {
    #[cfg(windows)]
    fn default() -> Self {
        Self {
            primary: BrowserTarget::new(
                "chrome",
                r"C:\Program Files\Google\Chrome\Application\chrome.exe",
            ),
            secondary: BrowserTarget::new(
                "brave",
                r"C:\Program Files\BraveSoftware\Brave-Browser\Application\brave.exe",
            ),
            app_key_name: "Brouter",
            display_name: "Brouter",
            description: "Routes links to the browser that is already running.",
            prog_id: "BrouterURL",
        }
    }

    #[cfg(not(windows))]
    fn default() -> Self {
        Self {
            primary: BrowserTarget::new("chrome", "/usr/bin/google-chrome"),
            secondary: BrowserTarget::new("brave", "/usr/bin/brave-browser"),
            app_key_name: "Brouter",
            display_name: "Brouter",
            description: "Routes links to the browser that is already running.",
            prog_id: "BrouterURL",
        }
    }
}
