//! Invocation classification and the administrative commands.
//!
//! The OS hands us either an administrative command (`/register`,
//! `/unregister`, `/help`) or the clicked URL, so everything is one
//! trailing positional list and the first argument is classified by
//! case-insensitive exact match.

use clap::Parser;

use brouter_core::config::RouterConfig;
use brouter_core::dispatch;
use brouter_core::error::RouterError;
use brouter_core::extract::extract_url;
use brouter_core::host::SystemHost;
use brouter_core::register::{platform_registrar, Registrar};

/// Forwards clicked links to whichever configured browser is already
/// running.
#[derive(Debug, Parser)]
#[command(name = "brouter")]
#[command(about = "Routes links to the primary or secondary browser, preferring the one already running", long_about = None)]
#[command(override_usage = "brouter /register      (run elevated)\n       \
                            brouter /unregister    (run elevated)\n       \
                            brouter \"https://...\"   (normal URL handling)")]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// Administrative command or the URL the OS passed in.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

fn is_command(arg: &str, cmd: &str) -> bool {
    arg.eq_ignore_ascii_case(cmd)
}

fn print_help() -> std::io::Result<()> {
    use clap::CommandFactory;
    Cli::command().print_help()
}

pub fn run_from_args() -> Result<(), RouterError> {
    let cli = Cli::parse();
    let cfg = RouterConfig::default();
    tracing::debug!("config: {cfg:?}");
    run(&cli.args, &cfg)
}

fn run(args: &[String], cfg: &RouterConfig) -> Result<(), RouterError> {
    if let Some(first) = args.first() {
        let cmd = first.trim();
        if is_command(cmd, "/register") {
            return register(cfg);
        }
        if is_command(cmd, "/unregister") {
            return unregister(cfg);
        }
        if is_command(cmd, "/help") || is_command(cmd, "-h") || is_command(cmd, "--help") {
            print_help().map_err(anyhow::Error::from)?;
            return Ok(());
        }
    }

    // Invoked as URL handler: brouter "%1"
    let Some(url) = extract_url(args) else {
        tracing::debug!("no URL in invocation arguments; nothing to do");
        return Ok(());
    };

    let host = SystemHost::new();
    let outcome = dispatch::dispatch(cfg, &url, &host)?;
    tracing::debug!(?outcome, url = %url, "dispatch finished");
    Ok(())
}

fn register(cfg: &RouterConfig) -> Result<(), RouterError> {
    let registrar = platform_registrar();
    if !registrar.is_elevated() {
        return Err(RouterError::ElevationRequired("/register"));
    }

    let exe_path = std::env::current_exe().map_err(|err| {
        tracing::debug!("current_exe failed: {err}");
        RouterError::ExePath
    })?;
    if !exe_path.is_file() {
        return Err(RouterError::ExePath);
    }

    registrar.register(cfg, &exe_path)?;
    println!(
        "Registered. Now pick {} as the default browser in the system settings.",
        cfg.display_name
    );
    Ok(())
}

fn unregister(cfg: &RouterConfig) -> Result<(), RouterError> {
    let registrar = platform_registrar();
    if !registrar.is_elevated() {
        return Err(RouterError::ElevationRequired("/unregister"));
    }

    registrar.unregister(cfg)?;
    println!("Unregistered.");
    Ok(())
}
