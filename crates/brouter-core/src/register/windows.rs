//! Windows registration: StartMenuInternet client, RegisteredApplications
//! entry and a ProgID under HKLM so the default-apps UI can offer this
//! handler for http/https.

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use winreg::enums::{HKEY_LOCAL_MACHINE, KEY_WRITE};
use winreg::RegKey;

use super::Registrar;
use crate::config::RouterConfig;

pub struct WindowsRegistrar;

fn start_menu_internet(cfg: &RouterConfig) -> String {
    format!(r"SOFTWARE\Clients\StartMenuInternet\{}", cfg.app_key_name)
}

fn delete_tree(hklm: &RegKey, path: &str) -> Result<()> {
    match hklm.delete_subkey_all(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).with_context(|| format!(r"deleting HKLM\{path}")),
    }
}

impl Registrar for WindowsRegistrar {
    fn is_elevated(&self) -> bool {
        // Registration writes HKLM; probe writability without mutating.
        RegKey::predef(HKEY_LOCAL_MACHINE)
            .open_subkey_with_flags("SOFTWARE", KEY_WRITE)
            .is_ok()
    }

    fn register(&self, cfg: &RouterConfig, exe_path: &Path) -> Result<()> {
        let hklm = RegKey::predef(HKEY_LOCAL_MACHINE);
        let smi = start_menu_internet(cfg);
        let capabilities = format!(r"{smi}\Capabilities");
        let exe = exe_path.display().to_string();

        let (key, _) = hklm
            .create_subkey(&smi)
            .context("creating StartMenuInternet key")?;
        key.set_value("", &cfg.display_name)?;

        let (key, _) = hklm.create_subkey(format!(r"{smi}\DefaultIcon"))?;
        key.set_value("", &format!("\"{exe}\",0"))?;

        let (key, _) = hklm.create_subkey(&capabilities)?;
        key.set_value("ApplicationName", &cfg.display_name)?;
        key.set_value("ApplicationDescription", &cfg.description)?;

        // http/https point at the ProgID.
        let (key, _) = hklm.create_subkey(format!(r"{capabilities}\URLAssociations"))?;
        key.set_value("http", &cfg.prog_id)?;
        key.set_value("https", &cfg.prog_id)?;

        let (key, _) = hklm.create_subkey(r"SOFTWARE\RegisteredApplications")?;
        key.set_value(cfg.app_key_name, &capabilities)?;

        let (key, _) = hklm.create_subkey(format!(r"SOFTWARE\Classes\{}", cfg.prog_id))?;
        key.set_value("", &format!("URL:{}", cfg.display_name))?;
        key.set_value("URL Protocol", &"")?;

        // The OS substitutes the clicked URL for %1.
        let (key, _) =
            hklm.create_subkey(format!(r"SOFTWARE\Classes\{}\shell\open\command", cfg.prog_id))?;
        key.set_value("", &format!("\"{exe}\" \"%1\""))?;

        tracing::info!(exe = %exe_path.display(), "registered protocol handler");
        Ok(())
    }

    fn unregister(&self, cfg: &RouterConfig) -> Result<()> {
        let hklm = RegKey::predef(HKEY_LOCAL_MACHINE);

        if let Ok(key) =
            hklm.open_subkey_with_flags(r"SOFTWARE\RegisteredApplications", KEY_WRITE)
        {
            // Value may already be gone; that is fine.
            let _ = key.delete_value(cfg.app_key_name);
        }

        delete_tree(&hklm, &start_menu_internet(cfg))?;
        delete_tree(&hklm, &format!(r"SOFTWARE\Classes\{}", cfg.prog_id))?;

        tracing::info!("unregistered protocol handler");
        Ok(())
    }
}
