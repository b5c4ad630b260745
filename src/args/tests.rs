use clap::Parser;

use super::*;
use crate::validation::RunParameters;

fn parse_get<I>(args: I) -> Result<GetArgs, String>
where
    I: IntoIterator<Item = &'static str>,
{
    let parsed = CurlsonArgs::try_parse_from(args)
        .map_err(|err| format!("Expected parse success: {}", err))?;
    match parsed.command {
        Command::Get(get) => Ok(get),
    }
}

#[test]
fn parse_get_defaults() -> Result<(), String> {
    let get = parse_get(["curlson", "get", "http://localhost:8080"])?;
    let expected = RunParameters {
        threads: 1,
        count: 1,
        sleep_ms: 0,
        max_duration_secs: 0,
        url: "http://localhost:8080".to_owned(),
        template: String::new(),
    };
    if get.run_parameters() != expected {
        return Err(format!("Unexpected parameters: {:?}", get.run_parameters()));
    }
    if get.persist_logs || get.verbose {
        return Err("Expected flags to default to false".to_owned());
    }
    Ok(())
}

#[test]
fn parse_get_short_flags() -> Result<(), String> {
    let get = parse_get([
        "curlson",
        "get",
        "http://localhost/#T{0}",
        "-t",
        "4",
        "-c",
        "20",
        "-s",
        "15",
        "-d",
        "30",
        "-f",
        "values.csv",
        "-p",
        "-v",
    ])?;
    if get.threads != 4 || get.count != 20 || get.sleep != 15 || get.duration != 30 {
        return Err(format!("Unexpected numeric flags: {:?}", get));
    }
    if get.template_file != "values.csv" || !get.persist_logs || !get.verbose {
        return Err(format!("Unexpected flags: {:?}", get));
    }
    Ok(())
}

#[test]
fn parse_get_long_flags() -> Result<(), String> {
    let get = parse_get([
        "curlson",
        "get",
        "--threads",
        "2",
        "--count",
        "3",
        "--sleep",
        "4",
        "--duration",
        "5",
        "--template-file",
        "t.csv",
        "--persist-logs",
        "--verbose",
        "https://localhost",
    ])?;
    if get.threads != 2 || get.count != 3 || get.sleep != 4 || get.duration != 5 {
        return Err(format!("Unexpected numeric flags: {:?}", get));
    }
    if get.url != "https://localhost" || get.template_file != "t.csv" {
        return Err(format!("Unexpected values: {:?}", get));
    }
    Ok(())
}

#[test]
fn parse_get_accepts_negative_values_for_validation() -> Result<(), String> {
    let get = parse_get([
        "curlson",
        "get",
        "http://localhost",
        "-t",
        "-1",
        "--sleep",
        "-20",
    ])?;
    if get.threads != -1 || get.sleep != -20 {
        return Err(format!("Unexpected values: {:?}", get));
    }
    Ok(())
}

#[test]
fn parse_get_requires_url() -> Result<(), String> {
    if CurlsonArgs::try_parse_from(["curlson", "get"]).is_ok() {
        return Err("Expected missing URL to fail".to_owned());
    }
    Ok(())
}

#[test]
fn parse_global_flags_after_subcommand() -> Result<(), String> {
    let parsed = CurlsonArgs::try_parse_from([
        "curlson",
        "get",
        "http://localhost",
        "--no-color",
        "--config",
        "custom.toml",
    ])
    .map_err(|err| format!("Expected parse success: {}", err))?;
    if !parsed.no_color || parsed.config.as_deref() != Some("custom.toml") {
        return Err(format!("Unexpected global flags: {:?}", parsed));
    }
    Ok(())
}
