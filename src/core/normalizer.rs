// Argument normalization: top-level flag shortcuts, `help <cmd>` and shortcut expansion

use super::resolver::domain_of;
use super::shortcuts;

const HELP_TOKENS: &[&str] = &["help", "--help", "-h"];

/// Rewrite a raw argument vector into its canonical form.
///
/// - `talka --help` / `talka -h` becomes `talka help`
/// - `talka --version` / `talka -v` becomes `talka version`
/// - `talka help <cmd> [args]` becomes `talka <cmd> [args] --help`
/// - a leading shortcut such as `create` is expanded to `apps:create`
pub fn normalize(mut argv: Vec<String>) -> Vec<String> {
    if argv.len() == 1 {
        match argv[0].as_str() {
            "--help" | "-h" => argv[0] = "help".to_string(),
            "--version" | "-v" => argv[0] = "version".to_string(),
            _ => {}
        }
    }

    if argv.len() >= 2 && HELP_TOKENS.contains(&argv[0].as_str()) {
        argv.remove(0);
        argv.push("--help".to_string());
    }

    if let Some(first) = argv.first_mut() {
        *first = shortcuts::expand(first).to_string();
    }

    argv
}

/// Normalize `argv` and resolve the domain of its command token.
///
/// An empty vector yields an empty domain; the caller reports that as a usage error.
pub fn parse_args(argv: Vec<String>) -> (String, Vec<String>) {
    let argv = normalize(argv);
    let domain = argv
        .first()
        .map(|token| domain_of(token).to_string())
        .unwrap_or_default();
    (domain, argv)
}
