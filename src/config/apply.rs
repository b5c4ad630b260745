use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{Command, CurlsonArgs};

use super::types::ConfigFile;

/// Fills every option that was not given on the command line from `config`.
pub fn apply_config(args: &mut CurlsonArgs, matches: &ArgMatches, config: &ConfigFile) {
    if !is_cli(matches, "no_color")
        && let Some(no_color) = config.no_color
    {
        args.no_color = no_color;
    }

    match &mut args.command {
        Command::Get(get) => {
            let Some(matches) = matches.subcommand_matches("get") else {
                return;
            };
            if !is_cli(matches, "threads")
                && let Some(threads) = config.threads
            {
                get.threads = threads;
            }
            if !is_cli(matches, "count")
                && let Some(count) = config.count
            {
                get.count = count;
            }
            if !is_cli(matches, "sleep")
                && let Some(sleep) = config.sleep
            {
                get.sleep = sleep;
            }
            if !is_cli(matches, "duration")
                && let Some(duration) = config.duration
            {
                get.duration = duration;
            }
            if !is_cli(matches, "template_file")
                && let Some(template_file) = config.template_file.as_ref()
            {
                get.template_file.clone_from(template_file);
            }
            if !is_cli(matches, "persist_logs")
                && let Some(persist_logs) = config.persist_logs
            {
                get.persist_logs = persist_logs;
            }
            if !is_cli(matches, "verbose")
                && let Some(verbose) = config.verbose
            {
                get.verbose = verbose;
            }
        }
    }
}

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}
