use std::io::IsTerminal;

use clap::{ArgMatches, CommandFactory, FromArgMatches};
use tracing::{error, info};

use crate::app::{ExecutionLogs, RunSettings, run_get};
use crate::args::{Command, CurlsonArgs, GetArgs, default_app_dir};
use crate::error::{AppError, AppResult, RunError, ValidationError};
use crate::system::logger::init_logging;
use crate::validation::validate;

pub(crate) fn run() -> AppResult<()> {
    let (mut args, matches) = parse_args()?;
    if let Some(config) = crate::config::load_config(args.config.as_deref())? {
        crate::config::apply_config(&mut args, &matches, &config);
    }

    let Command::Get(get) = &args.command;
    let color = !args.no_color && std::io::stdout().is_terminal();
    let logs = setup_logs(get, args.no_color);

    let result = run_get_command(get, args.no_color, color);

    if let Some(logs) = logs
        && let Err(err) = logs.finish()
    {
        eprintln!("Application can not clean up the execution log file: {}", err);
    }
    result
}

fn parse_args() -> AppResult<(CurlsonArgs, ArgMatches)> {
    let matches = CurlsonArgs::command().get_matches_from(std::env::args_os());
    let args = CurlsonArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}

fn setup_logs(get: &GetArgs, no_color: bool) -> Option<ExecutionLogs> {
    match ExecutionLogs::create(&default_app_dir(), get.persist_logs) {
        Ok((logs, file)) => {
            init_logging(get.verbose, no_color, Some(file));
            println!("{}", logs.describe());
            Some(logs)
        }
        Err(err) => {
            init_logging(get.verbose, no_color, None);
            eprintln!("{}", err);
            None
        }
    }
}

fn run_get_command(get: &GetArgs, no_color: bool, color: bool) -> AppResult<()> {
    let params = get.run_parameters();
    let outcome = validate(&params);
    outcome.write_report(&mut std::io::stdout().lock(), color)?;

    if !outcome.is_valid() {
        let errors = outcome.errors().len();
        error!("Validation failed with {} error(s), nothing was executed", errors);
        return Err(AppError::validation(ValidationError::InvalidInput {
            errors,
        }));
    }

    let settings = RunSettings::from_parameters(&params, no_color);
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|source| AppError::run(RunError::RuntimeBuildFailed { source }))?;
    let summary = runtime.block_on(run_get(settings, outcome.into_template()))?;

    info!("Execution finished");
    println!("{}", summary);
    Ok(())
}
