// Local auth actions backed by the client settings file

use anyhow::Result;
use colored::Colorize;
use log::warn;
use std::io::Write;
use std::path::PathBuf;

use super::catalog::DomainInfo;
use super::router::VerbRouter;
use crate::core::config::ClientSettings;
use crate::core::handler::DomainHandler;
use crate::error::TalkaError;

/// Router for the `auth` domain using the default settings location
pub fn router(info: &'static DomainInfo) -> VerbRouter {
    build(info, None)
}

/// Router for the `auth` domain reading settings from `path`
pub fn router_with_settings(info: &'static DomainInfo, path: PathBuf) -> VerbRouter {
    build(info, Some(path))
}

fn build(info: &'static DomainInfo, settings_path: Option<PathBuf>) -> VerbRouter {
    VerbRouter::new(info)
        .with_action(
            "whoami",
            Whoami {
                settings_path: settings_path.clone(),
            },
        )
        .with_action("logout", Logout { settings_path })
}

fn resolve(settings_path: &Option<PathBuf>) -> Result<PathBuf> {
    match settings_path {
        Some(path) => Ok(path.clone()),
        None => ClientSettings::default_path(),
    }
}

struct Whoami {
    settings_path: Option<PathBuf>,
}

impl DomainHandler for Whoami {
    fn run(&self, _argv: &[String], out: &mut dyn Write) -> Result<()> {
        let settings = ClientSettings::load_from(&resolve(&self.settings_path)?)?;
        if !settings.is_logged_in() {
            return Err(TalkaError::NotLoggedIn.into());
        }

        let user = settings.username.unwrap_or_default();
        let controller = settings.controller.unwrap_or_default();
        writeln!(out, "You are {} at {}", user.cyan().bold(), controller)?;
        Ok(())
    }
}

struct Logout {
    settings_path: Option<PathBuf>,
}

impl DomainHandler for Logout {
    fn run(&self, _argv: &[String], out: &mut dyn Write) -> Result<()> {
        let path = resolve(&self.settings_path)?;
        let settings = match ClientSettings::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Clearing unreadable client settings: {:#}", e);
                ClientSettings::default()
            }
        };

        ClientSettings::clear(&path)?;

        match settings.username {
            Some(user) => writeln!(out, "Logged out as {}", user)?,
            None => writeln!(out, "Logged out")?,
        }
        Ok(())
    }
}
