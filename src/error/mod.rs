mod app;
mod config;
mod run;
mod template;
mod validation;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use run::RunError;
pub use template::TemplateError;
pub use validation::ValidationError;
