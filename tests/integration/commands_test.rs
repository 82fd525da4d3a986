use anyhow::Result;
use std::cell::RefCell;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use talka::commands::builtin_handlers;
use talka::core::usage::{SHORT_USAGE, USAGE};
use talka::core::{Dispatcher, ExecutableLocator, ProcessLauncher};
use talka::Cli;

type Calls = Rc<RefCell<Vec<Vec<String>>>>;

/// Locator that never finds anything and counts how often it was asked
struct NoExternal {
    lookups: Rc<RefCell<usize>>,
}

impl ExecutableLocator for NoExternal {
    fn locate(&self, _name: &str) -> Option<PathBuf> {
        *self.lookups.borrow_mut() += 1;
        None
    }
}

struct NeverLaunch;

impl ProcessLauncher for NeverLaunch {
    fn launch(&self, program: &Path, _argv: &[String]) -> io::Result<()> {
        panic!("unexpected launch of {:?}", program);
    }
}

struct Harness {
    cli: Cli,
    apps_calls: Calls,
    lookups: Rc<RefCell<usize>>,
}

fn harness() -> Harness {
    let apps_calls: Calls = Rc::new(RefCell::new(Vec::new()));
    let lookups = Rc::new(RefCell::new(0));

    let mut handlers = builtin_handlers();
    let calls = apps_calls.clone();
    handlers.register("apps", move |argv: &[String], _: &mut dyn Write| -> Result<()> {
        calls.borrow_mut().push(argv.to_vec());
        Ok(())
    });

    let dispatcher = Dispatcher::new(handlers)
        .with_locator(NoExternal {
            lookups: lookups.clone(),
        })
        .with_launcher(NeverLaunch);

    Harness {
        cli: Cli::with_dispatcher(dispatcher),
        apps_calls,
        lookups,
    }
}

fn run(h: &Harness, argv: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let argv = argv.iter().map(|s| s.to_string()).collect();
    let code = h.cli.run_with(argv, &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn test_no_command_is_usage_error() {
    let h = harness();
    let (code, out, err) = run(&h, &[]);
    assert_eq!(code, 1);
    assert!(out.is_empty());
    assert_eq!(err.trim_end(), SHORT_USAGE);
    assert_eq!(*h.lookups.borrow(), 0);
}

#[test]
fn test_unknown_top_level_flag_is_usage_error() {
    let h = harness();
    let (code, _, err) = run(&h, &["--bogus"]);
    assert_eq!(code, 1);
    assert_eq!(err.trim_end(), SHORT_USAGE);
    assert_eq!(*h.lookups.borrow(), 0);
}

#[test]
fn test_help_prints_full_usage() {
    let h = harness();
    for argv in [&["help"][..], &["--help"][..], &["-h"][..]] {
        let (code, out, err) = run(&h, argv);
        assert_eq!(code, 0);
        assert_eq!(out, USAGE);
        assert!(err.is_empty());
    }
}

#[test]
fn test_version_flag_routes_to_version() {
    let h = harness();
    let (code, out, _) = run(&h, &["-v"]);
    assert_eq!(code, 0);
    assert_eq!(out, format!("talka version {}\n", env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_shortcut_reaches_internal_handler() {
    let h = harness();
    let (code, _, err) = run(&h, &["create", "myapp"]);
    assert_eq!(code, 0);
    assert!(err.is_empty());
    assert_eq!(
        *h.apps_calls.borrow(),
        vec![vec!["apps:create".to_string(), "myapp".to_string()]]
    );
    assert_eq!(*h.lookups.borrow(), 0);
}

#[test]
fn test_internal_handler_error_is_printed() {
    let h = harness();
    let (code, out, err) = run(&h, &["ps:bogus"]);
    assert_eq!(code, 1);
    assert!(out.is_empty());
    assert_eq!(
        err,
        "Error: 'ps:bogus' is not a valid command, try 'talka help ps'\n"
    );
    assert_eq!(*h.lookups.borrow(), 0);
}

#[test]
fn test_sharing_add_goes_to_perms() {
    let h = harness();
    let (code, _, err) = run(&h, &["sharing:add", "bob"]);
    assert_eq!(code, 1);
    assert_eq!(
        err,
        "Error: 'perms:create' requires the controller API, which is not available in this client\n"
    );
    assert_eq!(*h.lookups.borrow(), 0);
}

#[test]
fn test_help_for_domain_prints_domain_usage() {
    let h = harness();
    let (code, out, _) = run(&h, &["help", "releases"]);
    assert_eq!(code, 0);
    assert!(out.contains("releases:rollback"));
}

#[test]
fn test_help_for_shortcut_prints_verb_usage() {
    let h = harness();
    let (code, out, _) = run(&h, &["help", "scale"]);
    assert_eq!(code, 0);
    assert!(out.starts_with("Scale processes by type"));
    assert!(out.contains("Usage: talka ps:scale"));
}

#[test]
fn test_help_after_double_dash_is_an_argument() {
    let h = harness();
    let (code, out, err) = run(&h, &["ps:restart", "--", "-h"]);
    assert_eq!(code, 1);
    assert!(out.is_empty());
    assert_eq!(
        err,
        "Error: 'ps:restart' requires the controller API, which is not available in this client\n"
    );
}

#[test]
fn test_unknown_verb_flag_is_reported() {
    let h = harness();
    let (code, out, err) = run(&h, &["ps:scale", "--bogus"]);
    assert_eq!(code, 1);
    assert!(out.is_empty());
    assert!(err.starts_with("Error: unexpected argument '--bogus'"));
    assert_eq!(*h.lookups.borrow(), 0);
}

#[test]
fn test_shortcuts_listing() {
    let h = harness();
    let (code, out, _) = run(&h, &["shortcuts"]);
    assert_eq!(code, 0);
    assert!(out.contains("sharing:remove"));
    assert!(out.contains("perms:delete"));
}

#[test]
fn test_unknown_command_without_external_handler() {
    let h = harness();
    let (code, out, err) = run(&h, &["foo:bar", "baz"]);
    assert_eq!(code, 1);
    assert!(out.is_empty());
    assert_eq!(err, USAGE);
    assert_eq!(*h.lookups.borrow(), 1);
}
