use anyhow::Result;
use std::collections::HashMap;
use std::io::Write;

/// An internal handler for one command domain.
///
/// Receives the full canonical argument vector, first element still qualified
/// (e.g. `apps:create`), and does its own flag parsing and usage output.
pub trait DomainHandler {
    fn run(&self, argv: &[String], out: &mut dyn Write) -> Result<()>;
}

impl<F> DomainHandler for F
where
    F: Fn(&[String], &mut dyn Write) -> Result<()>,
{
    fn run(&self, argv: &[String], out: &mut dyn Write) -> Result<()> {
        self(argv, out)
    }
}

/// Domain name to handler mapping, built once at startup
#[derive(Default)]
pub struct HandlerTable {
    handlers: HashMap<&'static str, Box<dyn DomainHandler>>,
}

impl HandlerTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler, replacing any previous one for the domain
    pub fn register<H>(&mut self, domain: &'static str, handler: H) -> &mut Self
    where
        H: DomainHandler + 'static,
    {
        self.handlers.insert(domain, Box::new(handler));
        self
    }

    pub fn get(&self, domain: &str) -> Option<&dyn DomainHandler> {
        self.handlers.get(domain).map(|h| h.as_ref())
    }

    pub fn contains(&self, domain: &str) -> bool {
        self.handlers.contains_key(domain)
    }
}
