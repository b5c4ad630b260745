use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Input validation failed with {errors} error(s).")]
    InvalidInput { errors: usize },
}
