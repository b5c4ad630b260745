#![no_main]

use curlson::template::{placeholders, prepare_url_from_bytes};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let (template_bytes, line) = match data.iter().position(|byte| *byte == b'\n') {
        Some(split) => (&data[..split], &data[split + 1..]),
        None => (data, &[][..]),
    };
    if let Ok(url_template) = std::str::from_utf8(template_bytes) {
        let _ = placeholders(url_template).count();
        if let Ok(url) = prepare_url_from_bytes(url_template, line) {
            debug_assert!(url.starts_with("http://") || url.starts_with("https://"));
            debug_assert!(!url.bytes().any(|byte| byte.is_ascii_control()));
        }
    }
});
