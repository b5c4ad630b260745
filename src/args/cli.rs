use clap::{Args, Parser, Subcommand};

use crate::validation::RunParameters;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Multi-threaded HTTP GET load generator with templated URLs and pre-flight validation."
)]
pub struct CurlsonArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Path to config file (TOML/JSON). Defaults to ./curlson.toml or ./curlson.json if present.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Disable colored console output
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Performs HTTP GET request with options
    Get(GetArgs),
}

#[derive(Debug, Args, Clone)]
pub struct GetArgs {
    /// Target URL. May reference template values with #T{i} (raw) or #TE{i} (escaped)
    pub url: String,

    /// A number of concurrent GET requests
    #[arg(long, short = 't', default_value_t = 1, allow_hyphen_values = true)]
    pub threads: i64,

    /// A number of GET requests per single thread
    #[arg(long, short = 'c', default_value_t = 1, allow_hyphen_values = true)]
    pub count: i64,

    /// A delay in millis after each GET request. Doesn't impact performance report results if set
    #[arg(long, short = 's', default_value_t = 0, allow_hyphen_values = true)]
    pub sleep: i64,

    /// A maximum duration in seconds after which execution stops regardless of --count. 0 disables it
    #[arg(long, short = 'd', default_value_t = 0, allow_hyphen_values = true)]
    pub duration: i64,

    /// A file of comma-separated values substituted into the URL placeholders, one line per request
    #[arg(long = "template-file", short = 'f', default_value = "")]
    pub template_file: String,

    /// Keep the execution log file instead of removing it after the run
    #[arg(long = "persist-logs", short = 'p')]
    pub persist_logs: bool,

    /// Mirror execution logs to the console (sets log level to debug unless overridden by CURLSON_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl GetArgs {
    #[must_use]
    pub fn run_parameters(&self) -> RunParameters {
        RunParameters {
            threads: self.threads,
            count: self.count,
            sleep_ms: self.sleep,
            max_duration_secs: self.duration,
            url: self.url.clone(),
            template: self.template_file.clone(),
        }
    }
}
