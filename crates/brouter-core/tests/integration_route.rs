//! Integration test: full extract -> dispatch pipeline over a fake host.
//!
//! Feeds raw handler invocation arguments through extraction and routes
//! the result exactly as the URL-handler path of the binary does.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use brouter_core::config::{BrowserTarget, RouterConfig};
use brouter_core::dispatch::{dispatch, DispatchOutcome, Host};
use brouter_core::extract::extract_url;

struct FakeHost {
    running: Vec<&'static str>,
    existing: Vec<PathBuf>,
    launched: RefCell<Vec<(PathBuf, String)>>,
}

impl FakeHost {
    fn new(running: &[&'static str], existing: &[&str]) -> Self {
        Self {
            running: running.to_vec(),
            existing: existing.iter().map(PathBuf::from).collect(),
            launched: RefCell::new(Vec::new()),
        }
    }
}

impl Host for FakeHost {
    fn process_running(&self, name: &str) -> bool {
        self.running.contains(&name)
    }

    fn path_exists(&self, path: &Path) -> bool {
        self.existing.iter().any(|p| p == path)
    }

    fn launch(&self, path: &Path, arg_string: &str) -> anyhow::Result<()> {
        self.launched
            .borrow_mut()
            .push((path.to_path_buf(), arg_string.to_string()));
        Ok(())
    }
}

fn cfg() -> RouterConfig {
    RouterConfig {
        primary: BrowserTarget::new("chrome", "/opt/chrome"),
        secondary: BrowserTarget::new("brave", "/opt/brave"),
        ..RouterConfig::default()
    }
}

fn route(args: &[&str], host: &FakeHost) -> Option<DispatchOutcome> {
    let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
    let url = extract_url(&args)?;
    Some(dispatch(&cfg(), &url, host).unwrap())
}

#[test]
fn quoted_url_with_primary_running_launches_primary() {
    let host = FakeHost::new(&["chrome"], &["/opt/chrome", "/opt/brave"]);

    let outcome = route(&["\"https://example.com/x\""], &host).unwrap();

    assert_eq!(
        outcome,
        DispatchOutcome::Launched {
            exe_path: PathBuf::from("/opt/chrome")
        }
    );
    let launched = host.launched.borrow();
    assert_eq!(launched.len(), 1);
    assert_eq!(launched[0].0, PathBuf::from("/opt/chrome"));
    assert_eq!(launched[0].1, "\"https://example.com/x\"");
}

#[test]
fn junk_then_url_with_secondary_running_targets_secondary() {
    let host = FakeHost::new(&["brave"], &["/opt/chrome", "/opt/brave"]);

    let outcome = route(&["notaurl", "https://foo.bar"], &host).unwrap();

    assert_eq!(
        outcome,
        DispatchOutcome::Launched {
            exe_path: PathBuf::from("/opt/brave")
        }
    );
    assert_eq!(host.launched.borrow()[0].1, "\"https://foo.bar\"");
}

#[test]
fn no_url_in_args_routes_nothing() {
    let host = FakeHost::new(&["chrome"], &["/opt/chrome"]);

    assert_eq!(route(&["/register"], &host), None);
    assert_eq!(route(&[], &host), None);
    assert!(host.launched.borrow().is_empty());
}

#[test]
fn missing_binaries_end_to_end_noop() {
    let host = FakeHost::new(&["chrome", "brave"], &[]);

    let outcome = route(&["https://example.com"], &host).unwrap();

    assert_eq!(outcome, DispatchOutcome::NoBrowser);
    assert!(host.launched.borrow().is_empty());
}
