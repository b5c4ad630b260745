#![no_main]

use curlson::config::types::ConfigFile;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _: Option<ConfigFile> = serde_json::from_slice(data).ok();
});
