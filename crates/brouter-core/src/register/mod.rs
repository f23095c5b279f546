//! Protocol-handler registration behind one trait, with a per-platform
//! adapter. The rest of the crate never touches the registry or XDG
//! directly.

use std::path::Path;

use anyhow::Result;

use crate::config::RouterConfig;

#[cfg(unix)]
mod unix;
#[cfg(windows)]
mod windows;

/// System registration service: installs or removes the association
/// that makes the OS route http(s) launches through this executable.
pub trait Registrar {
    /// Whether the current process has the privileges registration
    /// needs. Checked before any mutation.
    fn is_elevated(&self) -> bool;

    fn register(&self, cfg: &RouterConfig, exe_path: &Path) -> Result<()>;

    /// Idempotent: removing an absent registration succeeds.
    fn unregister(&self, cfg: &RouterConfig) -> Result<()>;
}

#[cfg(windows)]
pub fn platform_registrar() -> impl Registrar {
    windows::WindowsRegistrar
}

#[cfg(unix)]
pub fn platform_registrar() -> impl Registrar {
    unix::XdgRegistrar
}
