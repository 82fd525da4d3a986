// Command resolution and dispatch engine

pub mod config;
pub mod dispatcher;
pub mod external;
pub mod handler;
pub mod normalizer;
pub mod resolver;
pub mod shortcuts;
pub mod usage;

// Re-export commonly used items
pub use config::ClientSettings;
pub use dispatcher::Dispatcher;
pub use external::{ExecLauncher, ExecutableLocator, PathLocator, ProcessLauncher};
pub use handler::{DomainHandler, HandlerTable};
pub use normalizer::{normalize, parse_args};
pub use resolver::domain_of;
