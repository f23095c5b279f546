pub mod config;
pub mod dispatch;
pub mod error;
pub mod extract;
pub mod host;
pub mod logging;
pub mod register;
