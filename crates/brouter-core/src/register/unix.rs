//! Unix registration: a `.desktop` entry under the XDG data dir plus an
//! `xdg-settings` call to claim the default-browser role. Per-user, so
//! no elevation is involved.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};

use super::Registrar;
use crate::config::RouterConfig;

pub struct XdgRegistrar;

fn desktop_file_name(cfg: &RouterConfig) -> String {
    format!("{}.desktop", cfg.app_key_name.to_ascii_lowercase())
}

fn desktop_file_path(cfg: &RouterConfig) -> Result<PathBuf> {
    let dirs = xdg::BaseDirectories::new().context("resolving XDG base directories")?;
    Ok(dirs
        .get_data_home()
        .join("applications")
        .join(desktop_file_name(cfg)))
}

/// Desktop entry claiming the http/https scheme handlers. `%u` is the
/// clicked URL.
fn desktop_entry(cfg: &RouterConfig, exe_path: &Path) -> String {
    format!(
        "[Desktop Entry]\n\
         Type=Application\n\
         Name={name}\n\
         Comment={comment}\n\
         Exec={exe} %u\n\
         Terminal=false\n\
         Categories=Network;WebBrowser;\n\
         MimeType=x-scheme-handler/http;x-scheme-handler/https;\n",
        name = cfg.display_name,
        comment = cfg.description,
        exe = exe_path.display(),
    )
}

impl Registrar for XdgRegistrar {
    fn is_elevated(&self) -> bool {
        // Everything written here is per-user.
        true
    }

    fn register(&self, cfg: &RouterConfig, exe_path: &Path) -> Result<()> {
        let path = desktop_file_path(cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        fs::write(&path, desktop_entry(cfg, exe_path))
            .with_context(|| format!("writing {}", path.display()))?;
        tracing::info!(entry = %path.display(), "installed desktop entry");

        // Best effort: the desktop entry alone already shows up in the
        // default-apps UI if xdg-settings is unavailable.
        let name = desktop_file_name(cfg);
        match Command::new("xdg-settings")
            .args(["set", "default-web-browser", &name])
            .status()
        {
            Ok(status) if status.success() => {}
            Ok(status) => {
                tracing::warn!(%status, "xdg-settings could not set the default browser")
            }
            Err(err) => tracing::warn!("xdg-settings unavailable: {err}"),
        }
        Ok(())
    }

    fn unregister(&self, cfg: &RouterConfig) -> Result<()> {
        let path = desktop_file_path(cfg)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::info!(entry = %path.display(), "removed desktop entry");
                Ok(())
            }
            // Removing twice is not an error.
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("removing {}", path.display())),
        }
    }
}
