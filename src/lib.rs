// Talka client library - command resolution and dispatch

// Re-export error types
pub mod error;
pub use error::{Result, TalkaError};

// Module declarations
pub mod cli;
pub mod commands;
pub mod core;

// Re-export commonly used types
pub use cli::Cli;
pub use crate::core::{Dispatcher, DomainHandler, HandlerTable};

/// Environment variable controlling the log filter
pub const LOG_ENV: &str = "TALKA_LOG";

// Initialize logging
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or(LOG_ENV, "warn"))
        .format_timestamp(None)
        .init();
}

/// Run one invocation and return its exit status
pub fn command(argv: Vec<String>) -> i32 {
    Cli::new().run(argv)
}
