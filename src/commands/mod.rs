// Internal command handlers
pub mod auth;
pub mod catalog;
pub mod router;
pub mod shortcuts;
pub mod version;

pub use router::VerbRouter;

use crate::core::handler::HandlerTable;

/// Handler table with every internal domain registered
pub fn builtin_handlers() -> HandlerTable {
    let mut table = HandlerTable::new();

    for info in catalog::DOMAINS {
        match info.name {
            "auth" => table.register(info.name, auth::router(info)),
            _ => table.register(info.name, VerbRouter::new(info)),
        };
    }

    table
        .register("version", version::execute)
        .register("shortcuts", shortcuts::execute);

    table
}
