use serde::Deserialize;

/// Optional defaults for `get` flags, read from `curlson.toml` or `curlson.json`.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub struct ConfigFile {
    pub threads: Option<i64>,
    pub count: Option<i64>,
    pub sleep: Option<i64>,
    pub duration: Option<i64>,
    pub template_file: Option<String>,
    pub persist_logs: Option<bool>,
    pub verbose: Option<bool>,
    pub no_color: Option<bool>,
}
