use super::ValidationOutcome;

pub(super) const THREADS_DESCRIPTION: &str = "Amount of threads";
pub(super) const REQUEST_COUNT_DESCRIPTION: &str = "Amount of requests per thread";
pub(super) const SLEEP_DESCRIPTION: &str = "Delay in millis property";
pub(super) const MAX_DURATION_DESCRIPTION: &str = "Maximum execution duration property";

pub(super) fn validate_positive(description: &str, value: i64, outcome: &mut ValidationOutcome) {
    if value < 1 {
        outcome.error(format!(
            "{} should be positive. Currently it's: '{}'",
            description, value
        ));
    }
}

pub(super) fn validate_positive_or_zero(
    description: &str,
    value: i64,
    outcome: &mut ValidationOutcome,
) {
    if value < 0 {
        outcome.error(format!(
            "{} should be positive or equal to zero. Currently it's: '{}'",
            description, value
        ));
    }
}
