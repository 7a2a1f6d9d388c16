use crate::CommandAppend;
use clap::{App, AppSettings, Arg, ArgMatches};
use config::environment::{expand_path, Config};
use std::path::PathBuf;

const ABOUT: &str = "Scales OpenFaaS functions that saw no invocations over the inactivity \
window down to zero replicas.

Only functions labelled com.openfaas.scale.zero=true (or 1) are considered. \
Everything else is configured through the environment: gateway_url, \
prometheus_host, prometheus_port, inactivity_duration, reconcile_interval, \
http_timeout, write_debug, read_only and secret_mount_path.";

pub(crate) struct Idler;

impl CommandAppend for Idler {
    #[inline(always)]
    fn append_subcommand(app: App<'static, 'static>) -> App<'static, 'static> {
        app.arg(
            Arg::with_name("dry-run")
                .long("dry-run")
                .help("Log the functions that would be scaled without scaling them"),
        )
        .arg(
            Arg::with_name("read-only")
                .long("read-only")
                .help("Same as --dry-run, overrides the read_only environment variable"),
        )
        .arg(
            Arg::with_name("debug")
                .long("debug")
                .help("Log every function and its invocation rate, overrides write_debug"),
        )
        .arg(
            Arg::with_name("secret-mount-path")
                .long("secret-mount-path")
                .takes_value(true)
                .value_name("dir")
                .help("Directory holding basic-auth-user and basic-auth-password"),
        )
    }
}

pub fn build_cli() -> App<'static, 'static> {
    let app = App::new("faas-idler")
        .version(env!("CARGO_PKG_VERSION"))
        .setting(AppSettings::ColoredHelp)
        .setting(AppSettings::DeriveDisplayOrder)
        .about(ABOUT);

    Idler::append_subcommand(app)
}

/// command line switches, each one only ever turns a behavior on
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Flags {
    pub dry_run: bool,
    pub read_only: bool,
    pub debug: bool,
    pub secret_mount_path: Option<PathBuf>,
}

impl Flags {
    pub fn from_matches(args: &ArgMatches<'_>) -> Flags {
        Flags {
            dry_run: args.is_present("dry-run"),
            read_only: args.is_present("read-only"),
            debug: args.is_present("debug"),
            secret_mount_path: args
                .value_of("secret-mount-path")
                .filter(|path| !path.is_empty())
                .map(expand_path),
        }
    }

    /// layers the switches over the config read from the environment
    pub fn apply(&self, config: &mut Config) {
        if self.read_only {
            config.read_only = true;
        }
        if self.debug {
            config.write_debug = true;
        }
        if let Some(path) = &self.secret_mount_path {
            config.secret_mount_path = path.clone();
        }
    }

    /// whether scale requests must only be logged
    pub fn dry_run(&self, config: &Config) -> bool {
        self.dry_run || self.read_only || config.read_only
    }
}
