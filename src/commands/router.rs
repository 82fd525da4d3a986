use anyhow::Result;
use clap::error::ErrorKind;
use clap::{Arg, Command};
use std::collections::HashMap;
use std::io::Write;

use super::catalog::{DomainInfo, Verb};
use crate::core::handler::DomainHandler;
use crate::core::usage::PRODUCT;
use crate::error::TalkaError;

/// Internal handler that routes `domain:verb` tokens for one catalog domain.
///
/// Each verb is parsed by its own clap `Command` named after the qualified
/// token. Verbs without a registered action need the controller API and fail
/// with an error naming the command.
pub struct VerbRouter {
    info: &'static DomainInfo,
    actions: HashMap<&'static str, Box<dyn DomainHandler>>,
}

impl VerbRouter {
    pub fn new(info: &'static DomainInfo) -> Self {
        Self {
            info,
            actions: HashMap::new(),
        }
    }

    /// Attach a local action to a verb
    pub fn with_action<H>(mut self, verb: &'static str, action: H) -> Self
    where
        H: DomainHandler + 'static,
    {
        self.actions.insert(verb, Box::new(action));
        self
    }

    fn qualified(&self, verb: &Verb) -> String {
        format!("{}:{}", self.info.name, verb.name)
    }

    /// Listing of every verb in the domain, used for `talka help <domain>`
    fn domain_command(&self) -> Command {
        Command::new(self.info.name)
            .bin_name(format!("{} {}", PRODUCT, self.info.name))
            .about(capitalize(self.info.summary))
            .override_usage(format!("{} {}:<command> [ARGS]...", PRODUCT, self.info.name))
            .disable_version_flag(true)
            .disable_help_subcommand(true)
            .subcommands(
                self.info
                    .verbs
                    .iter()
                    .map(|verb| Command::new(self.qualified(verb)).about(capitalize(verb.summary))),
            )
            .after_help(format!("Use '{} help [command]' to learn more.", PRODUCT))
    }

    /// Parser for a bare domain token; arguments go to the default verb
    fn bare_command(&self) -> Command {
        Command::new(self.info.name)
            .bin_name(format!("{} {}", PRODUCT, self.info.name))
            .disable_version_flag(true)
            .arg(trailing_args())
    }

    fn verb_command(&self, verb: &Verb) -> Command {
        let qualified = self.qualified(verb);
        Command::new(qualified.clone())
            .bin_name(format!("{} {}", PRODUCT, qualified))
            .about(capitalize(verb.summary))
            .disable_version_flag(true)
            .arg(trailing_args())
    }

    fn print_domain_usage(&self, out: &mut dyn Write) -> Result<()> {
        let help = self.domain_command().render_help().to_string();
        write_help(out, &help)
    }

    fn run_bare(&self, argv: &[String], out: &mut dyn Write) -> Result<()> {
        match self.bare_command().try_get_matches_from(argv) {
            Ok(_) => {}
            Err(e) if e.kind() == ErrorKind::DisplayHelp => return self.print_domain_usage(out),
            Err(e) => return Err(usage_error(e).into()),
        }

        match self.info.default_verb.and_then(|name| self.info.verb(name)) {
            Some(verb) => self.run_action(verb, argv, out),
            None => self.print_domain_usage(out),
        }
    }

    fn run_verb(&self, verb: &Verb, argv: &[String], out: &mut dyn Write) -> Result<()> {
        match self.verb_command(verb).try_get_matches_from(argv) {
            Ok(_) => self.run_action(verb, argv, out),
            Err(e) if e.kind() == ErrorKind::DisplayHelp => write_help(out, &e.render().to_string()),
            Err(e) => Err(usage_error(e).into()),
        }
    }

    fn run_action(&self, verb: &Verb, argv: &[String], out: &mut dyn Write) -> Result<()> {
        match self.actions.get(verb.name) {
            Some(action) => action.run(argv, out),
            None => Err(TalkaError::controller_required(self.qualified(verb)).into()),
        }
    }
}

impl DomainHandler for VerbRouter {
    fn run(&self, argv: &[String], out: &mut dyn Write) -> Result<()> {
        let token = argv.first().map(String::as_str).unwrap_or(self.info.name);

        let Some((_, verb_name)) = token.split_once(':') else {
            return self.run_bare(argv, out);
        };

        let verb = self
            .info
            .verb(verb_name)
            .ok_or_else(|| TalkaError::unknown_verb(token, self.info.name))?;

        self.run_verb(verb, argv, out)
    }
}

/// Everything after the command token, including anything after `--`
fn trailing_args() -> Arg {
    Arg::new("args")
        .value_name("ARGS")
        .num_args(0..)
        .trailing_var_arg(true)
        .help("Arguments for the command")
}

fn usage_error(e: clap::Error) -> TalkaError {
    let rendered = e.render().to_string();
    TalkaError::usage(rendered.trim_start_matches("error: ").trim_end())
}

fn write_help(out: &mut dyn Write, help: &str) -> Result<()> {
    if help.ends_with('\n') {
        write!(out, "{}", help)?;
    } else {
        writeln!(out, "{}", help)?;
    }
    Ok(())
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
