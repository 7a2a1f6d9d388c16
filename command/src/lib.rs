use crate::cmds::{build_cli, Flags};
use clap::{App, ArgMatches};
use config::environment::Config;
use tracing::error;

pub mod cmds;
pub(crate) mod logging;
pub mod startup;

/// process exit code for a failed startup
pub const EXIT_FAILURE: i32 = 1;

pub(crate) trait CommandAppend {
    fn append_subcommand(app: App<'static, 'static>) -> App<'static, 'static>;
}

/// parses the command line and the environment, then runs the idler.
/// the returned exit code is only ever produced by a failed startup
pub async fn exec() -> i32 {
    let app = build_cli();
    let args: ArgMatches = app.get_matches();
    let flags = Flags::from_matches(&args);

    let config = Config::from_env().map(|mut config| {
        flags.apply(&mut config);
        config
    });

    let debug = flags.debug || config.as_ref().map(|c| c.write_debug).unwrap_or(false);
    logging::init(debug);

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            return EXIT_FAILURE;
        }
    };

    let dry_run = flags.dry_run(&config);
    if let Err(e) = startup::start(config, dry_run).await {
        error!(error = %e, "startup failed");
        return EXIT_FAILURE;
    }
    0
}
