use once_cell::sync::Lazy;
use std::collections::HashMap;

/// User-facing shorthands and the canonical `domain:verb` command each one expands to
pub const SHORTCUTS: &[(&str, &str)] = &[
    ("create", "apps:create"),
    ("destroy", "apps:destroy"),
    ("info", "apps:info"),
    ("login", "auth:login"),
    ("logout", "auth:logout"),
    ("logs", "apps:logs"),
    ("open", "apps:open"),
    ("passwd", "auth:passwd"),
    ("pull", "builds:create"),
    ("register", "auth:register"),
    ("rollback", "releases:rollback"),
    ("run", "apps:run"),
    ("scale", "ps:scale"),
    ("sharing", "perms:list"),
    ("sharing:list", "perms:list"),
    ("sharing:add", "perms:create"),
    ("sharing:remove", "perms:delete"),
    ("whoami", "auth:whoami"),
];

static SHORTCUT_TABLE: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| SHORTCUTS.iter().copied().collect());

/// Expand a shortcut into its canonical command.
///
/// Lookup is exact-match; anything that is not a known shortcut is returned unchanged.
pub fn expand(command: &str) -> &str {
    SHORTCUT_TABLE.get(command).copied().unwrap_or(command)
}

/// All shortcuts sorted by name
pub fn list() -> Vec<(&'static str, &'static str)> {
    let mut entries: Vec<_> = SHORTCUTS.to_vec();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
}
