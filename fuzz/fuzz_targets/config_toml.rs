#![no_main]

use curlson::config::types::ConfigFile;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let _: Option<ConfigFile> = toml::from_str(input).ok();
    }
});
