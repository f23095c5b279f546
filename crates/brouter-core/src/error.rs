//! Top-level error kinds and their process exit codes.
//!
//! Absence (no URL, no installed browser) is not an error: those runs
//! exit 0 without a message because the handler is usually invoked
//! invisibly by the OS. Only genuine failures surface here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouterError {
    /// Administrative command invoked without the required privileges.
    /// Reported before any registration mutation happens.
    #[error("{0} must be run with administrative privileges")]
    ElevationRequired(&'static str),

    /// Could not determine this executable's own path, which the
    /// registration keys have to point at.
    #[error("could not determine executable path")]
    ExePath,

    /// Any other failure (process enumeration, registry write, spawn).
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RouterError {
    pub fn exit_code(&self) -> u8 {
        match self {
            RouterError::Other(_) => 1,
            RouterError::ElevationRequired(_) => 2,
            RouterError::ExePath => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_code_mapping() {
        assert_eq!(RouterError::Other(anyhow::anyhow!("boom")).exit_code(), 1);
        assert_eq!(RouterError::ElevationRequired("/register").exit_code(), 2);
        assert_eq!(RouterError::ExePath.exit_code(), 3);
    }

    #[test]
    fn elevation_message_names_the_command() {
        let msg = RouterError::ElevationRequired("/unregister").to_string();
        assert!(msg.contains("/unregister"));
    }
}
