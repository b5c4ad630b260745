use std::fs::File;
use std::io::{BufRead, BufReader};

use tracing::{debug, info};

use crate::template::{contains_template_placeholders, prepare_url, prepare_url_from_bytes};

use super::{TemplateConfig, ValidationOutcome};

const LINE_DELIMITER: u8 = b'\n';
const READ_BUFFER_SIZE: usize = 32 * 1024;

/// Checks the URL template against the template file and returns the
/// resulting config. Any failure leaves the config disabled.
pub(super) fn validate_url_for_template(
    template: &str,
    url: &str,
    outcome: &mut ValidationOutcome,
) -> TemplateConfig {
    if template.is_empty() {
        validate_plain_url(url, outcome);
        return TemplateConfig::default();
    }

    let path = match std::path::absolute(template) {
        Ok(path) => path,
        Err(err) => {
            outcome.error(format!(
                "Provided template file path '{}' is invalid. Reason: {}",
                template, err
            ));
            return TemplateConfig::default();
        }
    };

    match std::fs::metadata(&path) {
        Ok(metadata) if metadata.is_file() => {}
        Ok(_) => {
            outcome.error(format!(
                "Provided template file '{}' is not a file",
                template
            ));
            return TemplateConfig::default();
        }
        Err(_) => {
            outcome.error(format!(
                "Provided template file '{}' can not be found",
                template
            ));
            return TemplateConfig::default();
        }
    }

    let file = match File::open(&path) {
        Ok(file) => file,
        Err(err) => {
            outcome.error(format!(
                "Provided template file '{}' can not be opened. Reason: {}",
                template, err
            ));
            return TemplateConfig::default();
        }
    };

    if !contains_template_placeholders(url) {
        outcome.warning(format!(
            "Provided template file '{}' is not used since URL address '{}' has no template placeholders",
            template, url
        ));
        validate_plain_url(url, outcome);
        return TemplateConfig::default();
    }

    match scan_template_lines(file, url, template) {
        Ok(0) => {
            info!("Template file '{}' has no lines, templating disabled", template);
            TemplateConfig::default()
        }
        Ok(size) => {
            debug!("Template file '{}' resolved {} line(s)", path.display(), size);
            TemplateConfig {
                enabled: true,
                path,
                size,
            }
        }
        Err(message) => {
            outcome.error(message);
            TemplateConfig::default()
        }
    }
}

fn validate_plain_url(url: &str, outcome: &mut ValidationOutcome) {
    if let Err(err) = prepare_url(url, "") {
        outcome.error(format!(
            "Provided URL address: '{}' is invalid. Reason: {}",
            url, err
        ));
    }
}

// Stops at the first line that does not resolve.
fn scan_template_lines(file: File, url: &str, template: &str) -> Result<usize, String> {
    let mut reader = BufReader::with_capacity(READ_BUFFER_SIZE, file);
    let mut line = Vec::new();
    let mut size: usize = 0;

    loop {
        line.clear();
        let read = reader.read_until(LINE_DELIMITER, &mut line).map_err(|err| {
            format!(
                "Provided template file '{}' can not be read. Reason: {}",
                template, err
            )
        })?;
        if read == 0 {
            return Ok(size);
        }

        let values = line.strip_suffix(&[LINE_DELIMITER]).unwrap_or(&line);
        prepare_url_from_bytes(url, values).map_err(|err| err.to_string())?;
        size = size.saturating_add(1);
    }
}
