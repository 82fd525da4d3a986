use clap::{Arg, Command};
use log::debug;
use std::io::{self, Write};

use crate::commands::builtin_handlers;
use crate::core::dispatcher::Dispatcher;
use crate::core::normalizer::parse_args;
use crate::core::usage::{PRODUCT, SHORT_USAGE};
use crate::error::{Result, TalkaError};

/// Top-level front-end: normalizes, validates and dispatches one invocation
pub struct Cli {
    dispatcher: Dispatcher,
}

impl Cli {
    /// Front-end with the builtin handlers, `PATH` lookup and process replacement
    pub fn new() -> Self {
        Self::with_dispatcher(Dispatcher::new(builtin_handlers()))
    }

    pub fn with_dispatcher(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Run `argv` (without the program name) against the process's stdout and stderr
    pub fn run(&self, argv: Vec<String>) -> i32 {
        let stdout = io::stdout();
        let stderr = io::stderr();
        self.run_with(argv, &mut stdout.lock(), &mut stderr.lock())
    }

    /// Run `argv` writing to the given streams and return the exit status
    pub fn run_with(&self, argv: Vec<String>, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
        let (command, argv) = parse_args(argv);

        if let Err(e) = validate_command(&command) {
            debug!("{}", e);
            let _ = writeln!(err, "{}", SHORT_USAGE);
            return 1;
        }

        if argv.is_empty() {
            let _ = writeln!(err, "{}", SHORT_USAGE);
            return 1;
        }

        self.dispatcher.dispatch(&command, argv, out, err)
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self::new()
    }
}

/// Check the command as the single positional of `talka <command> [<args>...]`.
///
/// Rejects unknown top-level flags such as `-x` or `--bogus`.
pub fn validate_command(command: &str) -> Result<()> {
    Command::new(PRODUCT)
        .no_binary_name(true)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(Arg::new("command").required(true))
        .try_get_matches_from([command])
        .map(|_| ())
        .map_err(|e| TalkaError::usage(e.to_string()))
}
