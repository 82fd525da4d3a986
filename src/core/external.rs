//! External handler discovery and process handoff
//!
//! An unknown domain `foo` is served by an executable named `talka-foo` found on the
//! search path. Control is handed over by replacing the current process image.

use log::debug;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

#[cfg(unix)]
use std::os::unix::process::CommandExt;

/// Finds external handler executables by name
pub trait ExecutableLocator {
    fn locate(&self, name: &str) -> Option<PathBuf>;
}

/// Hands control over to an external executable.
///
/// `argv[0]` is the name the program sees itself invoked as. Implementations that
/// replace the process never return on success.
pub trait ProcessLauncher {
    fn launch(&self, program: &Path, argv: &[String]) -> io::Result<()>;
}

/// Looks executables up on `PATH`, or on an explicit search path
#[derive(Debug, Clone, Default)]
pub struct PathLocator {
    search_path: Option<OsString>,
}

impl PathLocator {
    /// Locator using the process's `PATH`
    pub fn new() -> Self {
        Self::default()
    }

    /// Locator restricted to the given search path (same syntax as `PATH`)
    pub fn with_search_path<S: Into<OsString>>(search_path: S) -> Self {
        Self {
            search_path: Some(search_path.into()),
        }
    }
}

impl ExecutableLocator for PathLocator {
    fn locate(&self, name: &str) -> Option<PathBuf> {
        let found = match &self.search_path {
            Some(paths) => {
                let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
                which::which_in(name, Some(paths), cwd)
            }
            None => which::which(name),
        };

        match found {
            Ok(path) => {
                debug!("Found {} at {:?}", name, path);
                Some(path)
            }
            Err(e) => {
                debug!("{} not found on search path: {}", name, e);
                None
            }
        }
    }
}

/// Launcher that replaces the current process with the external executable
#[derive(Debug, Clone, Copy, Default)]
pub struct ExecLauncher;

#[cfg(unix)]
impl ProcessLauncher for ExecLauncher {
    fn launch(&self, program: &Path, argv: &[String]) -> io::Result<()> {
        let (arg0, args) = argv
            .split_first()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "empty argument list"))?;

        debug!("Replacing process with {:?} {:?}", program, argv);

        // Only returns if exec failed; the environment is inherited unchanged
        Err(Command::new(program).arg0(arg0).args(args).exec())
    }
}

#[cfg(windows)]
impl ProcessLauncher for ExecLauncher {
    fn launch(&self, program: &Path, argv: &[String]) -> io::Result<()> {
        let args = argv
            .get(1..)
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "empty argument list"))?;

        debug!("Spawning {:?} {:?}", program, argv);

        // No exec on Windows: run the child to completion and exit with its code
        let status = Command::new(program).args(args).status()?;
        std::process::exit(status.code().unwrap_or(1));
    }
}

/// Rewrite the command token for an external handler.
///
/// The token is split on `"<domain>:"`; when a second part exists it replaces the token,
/// so `talka-foo` receives `bar` rather than `foo:bar`.
pub fn strip_domain_prefix(token: &str, domain: &str) -> Option<String> {
    let separator = format!("{}:", domain);
    token.split(separator.as_str()).nth(1).map(str::to_string)
}
