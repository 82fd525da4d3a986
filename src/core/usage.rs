/// Product name, also the prefix of external handler executables
pub const PRODUCT: &str = "talka";

/// One-line usage printed on usage errors
pub const SHORT_USAGE: &str = "Usage: talka <command> [<args>...]";

/// Full top-level usage text
pub const USAGE: &str = "
The Talka command-line client issues API calls to a Talka controller.

Usage: talka <command> [<args>...]

Option flags::

  -h --help     display help information
  -v --version  display client version

Auth commands::

  register      register a new user with a controller
  login         login to a controller
  logout        logout from the current controller

Subcommands, use 'talka help [subcommand]' to learn more::

  apps          manage applications used to provide services
  ps            manage processes inside an app container
  config        manage environment variables that define app config
  domains       manage and assign domain names to your applications
  builds        manage builds created using 'git push'
  limits        manage resource limits for your application
  tags          manage tags for application containers
  releases      manage releases of an application
  certs         manage SSL endpoints for an app

  keys          manage ssh keys used for 'git push' deployments
  perms         manage permissions for applications
  git           manage git for applications
  users         manage users
  version       display client version

Shortcut commands, use 'talka shortcuts' to see all::

  create        create a new application
  scale         scale processes by type (web=2, worker=1)
  info          view information about the current app
  open          open a URL to the app in a browser
  logs          view aggregated log info for the app
  run           run a command in an ephemeral app container
  destroy       destroy an application and its artifacts (releases, git, containers)
  pull          import an image and deploy it as a new release

Use 'git push talka master' to deploy to an application.
";

/// External handler executable name for a domain, e.g. `talka-foo`
pub fn external_command_name(domain: &str) -> String {
    format!("{}-{}", PRODUCT, domain)
}
