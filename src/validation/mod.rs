//! Pre-flight validation of run parameters and URL templating.
mod params;
mod report;
mod template_file;


use std::path::PathBuf;

use tracing::debug;

use params::{
    MAX_DURATION_DESCRIPTION, REQUEST_COUNT_DESCRIPTION, SLEEP_DESCRIPTION, THREADS_DESCRIPTION,
    validate_positive, validate_positive_or_zero,
};
use template_file::validate_url_for_template;

/// Inputs of a single `get` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunParameters {
    pub threads: i64,
    pub count: i64,
    pub sleep_ms: i64,
    pub max_duration_secs: i64,
    pub url: String,
    /// Empty disables templating.
    pub template: String,
}

/// Templating settings derived by validation. Disabled by default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateConfig {
    pub enabled: bool,
    pub path: PathBuf,
    pub size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    valid: bool,
    errors: Vec<String>,
    warnings: Vec<String>,
    template: TemplateConfig,
}

impl Default for ValidationOutcome {
    fn default() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
            template: TemplateConfig::default(),
        }
    }
}

impl ValidationOutcome {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    #[must_use]
    pub const fn template(&self) -> &TemplateConfig {
        &self.template
    }

    #[must_use]
    pub fn into_template(self) -> TemplateConfig {
        self.template
    }

    fn error(&mut self, message: String) {
        self.valid = false;
        self.errors.push(message);
    }

    fn warning(&mut self, message: String) {
        self.warnings.push(message);
    }
}

/// Validates every run parameter and the template setup in one pass.
///
/// Range checks never short-circuit, so all violations are reported
/// together. Template checks stop at the first failure.
#[must_use]
pub fn validate(params: &RunParameters) -> ValidationOutcome {
    let mut outcome = ValidationOutcome::default();

    validate_positive(THREADS_DESCRIPTION, params.threads, &mut outcome);
    validate_positive(REQUEST_COUNT_DESCRIPTION, params.count, &mut outcome);
    validate_positive_or_zero(SLEEP_DESCRIPTION, params.sleep_ms, &mut outcome);
    validate_positive_or_zero(
        MAX_DURATION_DESCRIPTION,
        params.max_duration_secs,
        &mut outcome,
    );

    let template = validate_url_for_template(&params.template, &params.url, &mut outcome);
    outcome.template = template;

    debug!(
        "Validation finished: valid = {}, errors = {}, warnings = {}",
        outcome.valid,
        outcome.errors.len(),
        outcome.warnings.len()
    );
    outcome
}
