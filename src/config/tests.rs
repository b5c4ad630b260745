use clap::{CommandFactory, FromArgMatches};
use tempfile::tempdir;

use super::{apply_config, load_config, load_config_file, types::ConfigFile};
use crate::args::{Command, CurlsonArgs, GetArgs};

fn parse_with_config(argv: &[&str], config: &ConfigFile) -> Result<CurlsonArgs, String> {
    let matches = CurlsonArgs::command()
        .try_get_matches_from(argv.iter().copied())
        .map_err(|err| format!("parse failed: {}", err))?;
    let mut args =
        CurlsonArgs::from_arg_matches(&matches).map_err(|err| format!("from matches failed: {}", err))?;
    apply_config(&mut args, &matches, config);
    Ok(args)
}

fn get_args(args: &CurlsonArgs) -> &GetArgs {
    match &args.command {
        Command::Get(get) => get,
    }
}

#[test]
fn parse_toml_config() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("curlson.toml");
    let content = r#"
threads = 8
count = 100
sleep = 25
duration = 60
template_file = "values.csv"
persist_logs = true
"#;
    std::fs::write(&path, content).map_err(|err| format!("write failed: {}", err))?;

    let config = load_config_file(&path).map_err(|err| err.to_string())?;
    let expected = ConfigFile {
        threads: Some(8),
        count: Some(100),
        sleep: Some(25),
        duration: Some(60),
        template_file: Some("values.csv".to_owned()),
        persist_logs: Some(true),
        verbose: None,
        no_color: None,
    };
    if config != expected {
        return Err(format!("Unexpected config: {:?}", config));
    }
    Ok(())
}

#[test]
fn parse_json_config() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("curlson.json");
    std::fs::write(&path, r#"{"threads": 3, "verbose": true, "no_color": true}"#)
        .map_err(|err| format!("write failed: {}", err))?;

    let config = load_config_file(&path).map_err(|err| err.to_string())?;
    if config.threads != Some(3) || config.verbose != Some(true) || config.no_color != Some(true)
    {
        return Err(format!("Unexpected config: {:?}", config));
    }
    Ok(())
}

#[test]
fn load_config_rejects_unknown_extension() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("curlson.yaml");
    std::fs::write(&path, "threads: 1").map_err(|err| format!("write failed: {}", err))?;

    let path_str = path.to_string_lossy().into_owned();
    if load_config(Some(&path_str)).is_ok() {
        return Err("Expected unsupported extension error".to_owned());
    }
    Ok(())
}

#[test]
fn load_config_reports_invalid_toml() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "threads = [").map_err(|err| format!("write failed: {}", err))?;

    if load_config_file(&path).is_ok() {
        return Err("Expected parse error".to_owned());
    }
    Ok(())
}

#[test]
fn config_fills_unset_options() -> Result<(), String> {
    let config = ConfigFile {
        threads: Some(6),
        count: Some(50),
        sleep: Some(10),
        duration: Some(5),
        template_file: Some("values.csv".to_owned()),
        persist_logs: Some(true),
        verbose: Some(true),
        no_color: Some(true),
    };
    let args = parse_with_config(&["curlson", "get", "http://localhost"], &config)?;
    let get = get_args(&args);
    if get.threads != 6 || get.count != 50 || get.sleep != 10 || get.duration != 5 {
        return Err(format!("Unexpected numeric values: {:?}", get));
    }
    if get.template_file != "values.csv" || !get.persist_logs || !get.verbose || !args.no_color {
        return Err(format!("Unexpected values: {:?}", args));
    }
    Ok(())
}

#[test]
fn cli_values_override_config() -> Result<(), String> {
    let config = ConfigFile {
        threads: Some(6),
        count: Some(50),
        template_file: Some("from-config.csv".to_owned()),
        ..ConfigFile::default()
    };
    let args = parse_with_config(
        &[
            "curlson",
            "get",
            "http://localhost",
            "-t",
            "2",
            "-f",
            "from-cli.csv",
        ],
        &config,
    )?;
    let get = get_args(&args);
    if get.threads != 2 || get.template_file != "from-cli.csv" {
        return Err(format!("CLI values were overridden: {:?}", get));
    }
    if get.count != 50 {
        return Err(format!("Expected count from config: {:?}", get));
    }
    Ok(())
}
