use std::io;
use thiserror::Error;

/// Custom error type for the talka client
#[derive(Error, Debug)]
pub enum TalkaError {
    #[error("{0}")]
    Usage(String),

    #[error("'{command}' is not a valid command, try 'talka help {domain}'")]
    UnknownVerb { command: String, domain: String },

    #[error("'{command}' requires the controller API, which is not available in this client")]
    ControllerRequired { command: String },

    #[error("Not logged in. Use 'talka login' to sign in to a controller")]
    NotLoggedIn,

    #[error("External command not found: {0}")]
    ExternalNotFound(String),

    #[error("Failed to execute {program}: {source}")]
    Exec {
        program: String,
        #[source]
        source: io::Error,
    },
}

/// Result type alias for talka
pub type Result<T> = std::result::Result<T, TalkaError>;

impl TalkaError {
    /// Create a usage error
    pub fn usage<S: Into<String>>(msg: S) -> Self {
        TalkaError::Usage(msg.into())
    }

    /// Create an unknown verb error for a qualified command token
    pub fn unknown_verb<C: Into<String>, D: Into<String>>(command: C, domain: D) -> Self {
        TalkaError::UnknownVerb {
            command: command.into(),
            domain: domain.into(),
        }
    }

    pub fn controller_required<S: Into<String>>(command: S) -> Self {
        TalkaError::ControllerRequired {
            command: command.into(),
        }
    }

    pub fn external_not_found<S: Into<String>>(name: S) -> Self {
        TalkaError::ExternalNotFound(name.into())
    }

    pub fn exec<S: Into<String>>(program: S, source: io::Error) -> Self {
        TalkaError::Exec {
            program: program.into(),
            source,
        }
    }
}
