/// A verb accepted by a domain, e.g. `create` in `apps:create`
#[derive(Debug)]
pub struct Verb {
    pub name: &'static str,
    pub summary: &'static str,
}

/// Description of an internal command domain
#[derive(Debug)]
pub struct DomainInfo {
    pub name: &'static str,
    pub summary: &'static str,
    /// Verb run when the domain is invoked bare (`talka apps` runs `apps:list`)
    pub default_verb: Option<&'static str>,
    pub verbs: &'static [Verb],
}

impl DomainInfo {
    pub fn verb(&self, name: &str) -> Option<&'static Verb> {
        self.verbs.iter().find(|v| v.name == name)
    }
}

const fn verb(name: &'static str, summary: &'static str) -> Verb {
    Verb { name, summary }
}

pub static DOMAINS: &[DomainInfo] = &[
    DomainInfo {
        name: "apps",
        summary: "manage applications used to provide services",
        default_verb: Some("list"),
        verbs: &[
            verb("create", "create a new application"),
            verb("list", "list accessible applications"),
            verb("info", "view info about an application"),
            verb("open", "open the application in a browser"),
            verb("logs", "view aggregated application logs"),
            verb("run", "run a command in an ephemeral app container"),
            verb("destroy", "destroy an application"),
        ],
    },
    DomainInfo {
        name: "auth",
        summary: "manage users and authentication",
        default_verb: None,
        verbs: &[
            verb("register", "register a new user"),
            verb("login", "authenticate against a controller"),
            verb("logout", "clear the current user session"),
            verb("passwd", "change the password for an account"),
            verb("whoami", "display the current user"),
            verb("cancel", "remove the current account"),
            verb("regenerate", "regenerate the user's API token"),
        ],
    },
    DomainInfo {
        name: "ps",
        summary: "manage processes inside an app container",
        default_verb: Some("list"),
        verbs: &[
            verb("list", "list application processes"),
            verb("scale", "scale processes by type (web=2, worker=1)"),
            verb("restart", "restart an application's processes"),
        ],
    },
    DomainInfo {
        name: "config",
        summary: "manage environment variables that define app config",
        default_verb: Some("list"),
        verbs: &[
            verb("list", "list environment variables for an app"),
            verb("set", "set environment variables for an app"),
            verb("unset", "unset environment variables for an app"),
            verb("pull", "extract environment variables to .env"),
            verb("push", "set environment variables from .env"),
        ],
    },
    DomainInfo {
        name: "domains",
        summary: "manage and assign domain names to your applications",
        default_verb: Some("list"),
        verbs: &[
            verb("add", "bind a domain to an application"),
            verb("list", "list domains bound to an application"),
            verb("remove", "unbind a domain from an application"),
        ],
    },
    DomainInfo {
        name: "builds",
        summary: "manage builds created using 'git push'",
        default_verb: Some("list"),
        verbs: &[
            verb("list", "list build history for an application"),
            verb("create", "import an image and deploy as a new release"),
        ],
    },
    DomainInfo {
        name: "limits",
        summary: "manage resource limits for your application",
        default_verb: Some("list"),
        verbs: &[
            verb("list", "list resource limits for an app"),
            verb("set", "set resource limits for an app"),
            verb("unset", "unset resource limits for an app"),
        ],
    },
    DomainInfo {
        name: "tags",
        summary: "manage tags for application containers",
        default_verb: Some("list"),
        verbs: &[
            verb("list", "list tags for an application"),
            verb("set", "set tags for an application"),
            verb("unset", "unset tags for an application"),
        ],
    },
    DomainInfo {
        name: "releases",
        summary: "manage releases of an application",
        default_verb: Some("list"),
        verbs: &[
            verb("list", "list an application's release history"),
            verb("info", "print information about a specific release"),
            verb("rollback", "return to a previous release"),
        ],
    },
    DomainInfo {
        name: "certs",
        summary: "manage SSL endpoints for an app",
        default_verb: Some("list"),
        verbs: &[
            verb("list", "list SSL certificates for an app"),
            verb("add", "add an SSL certificate to an app"),
            verb("remove", "remove an SSL certificate from an app"),
        ],
    },
    DomainInfo {
        name: "keys",
        summary: "manage ssh keys used for 'git push' deployments",
        default_verb: Some("list"),
        verbs: &[
            verb("list", "list SSH keys for the logged in user"),
            verb("add", "add an SSH key"),
            verb("remove", "remove an SSH key"),
        ],
    },
    DomainInfo {
        name: "perms",
        summary: "manage permissions for applications",
        default_verb: Some("list"),
        verbs: &[
            verb("list", "list permissions granted on an app"),
            verb("create", "create a new permission for a user"),
            verb("delete", "delete a permission for a user"),
        ],
    },
    DomainInfo {
        name: "git",
        summary: "manage git for applications",
        default_verb: None,
        verbs: &[verb("remote", "add a git remote for an app")],
    },
    DomainInfo {
        name: "users",
        summary: "manage users",
        default_verb: Some("list"),
        verbs: &[verb("list", "list all registered users")],
    },
];

/// Look up a catalog domain by name
pub fn find(name: &str) -> Option<&'static DomainInfo> {
    DOMAINS.iter().find(|d| d.name == name)
}
