// Routes a resolved domain to an internal handler or an external `talka-<domain>` executable

use log::debug;
use std::io::Write;

use super::external::{
    strip_domain_prefix, ExecLauncher, ExecutableLocator, PathLocator, ProcessLauncher,
};
use super::handler::HandlerTable;
use super::usage::{external_command_name, USAGE};
use crate::error::TalkaError;

/// Dispatches one canonical command per process invocation
pub struct Dispatcher {
    handlers: HandlerTable,
    locator: Box<dyn ExecutableLocator>,
    launcher: Box<dyn ProcessLauncher>,
}

impl Dispatcher {
    /// Dispatcher searching `PATH` and replacing the process for external handlers
    pub fn new(handlers: HandlerTable) -> Self {
        Self {
            handlers,
            locator: Box::new(PathLocator::new()),
            launcher: Box::new(ExecLauncher),
        }
    }

    pub fn with_locator<L: ExecutableLocator + 'static>(mut self, locator: L) -> Self {
        self.locator = Box::new(locator);
        self
    }

    pub fn with_launcher<P: ProcessLauncher + 'static>(mut self, launcher: P) -> Self {
        self.launcher = Box::new(launcher);
        self
    }

    /// Dispatch `argv` to the handler for `domain` and return the process exit status.
    ///
    /// A successful external handoff does not return.
    pub fn dispatch(
        &self,
        domain: &str,
        argv: Vec<String>,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> i32 {
        if domain == "help" {
            let _ = write!(out, "{}", USAGE);
            return 0;
        }

        if let Some(handler) = self.handlers.get(domain) {
            debug!("Dispatching {:?} to internal handler '{}'", argv, domain);
            return match handler.run(&argv, out) {
                Ok(()) => 0,
                Err(e) => {
                    let _ = writeln!(err, "Error: {:#}", e);
                    1
                }
            };
        }

        match self.dispatch_external(domain, argv) {
            Ok(()) => 0,
            Err(e) => {
                debug!("External dispatch failed: {}", e);
                let _ = write!(err, "{}", USAGE);
                1
            }
        }
    }

    fn dispatch_external(&self, domain: &str, mut argv: Vec<String>) -> Result<(), TalkaError> {
        let name = external_command_name(domain);

        let binary = self
            .locator
            .locate(&name)
            .ok_or_else(|| TalkaError::external_not_found(&name))?;

        if let Some(first) = argv.first_mut() {
            if let Some(verb) = strip_domain_prefix(first, domain) {
                *first = verb;
            }
        }

        let mut cmd_argv = Vec::with_capacity(argv.len() + 1);
        cmd_argv.push(name.clone());
        cmd_argv.extend(argv);

        debug!("Handing off to {:?} with {:?}", binary, cmd_argv);
        let _ = std::io::stdout().flush();

        self.launcher
            .launch(&binary, &cmd_argv)
            .map_err(|e| TalkaError::exec(name, e))
    }
}
