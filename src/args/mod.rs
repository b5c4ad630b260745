//! CLI argument types.
mod cli;
mod defaults;

#[cfg(test)]
mod tests;

pub use cli::{Command, CurlsonArgs, GetArgs};

pub use defaults::{DEFAULT_USER_AGENT, default_app_dir};
