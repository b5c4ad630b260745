mod app;
mod args;
mod config;
mod entry;
mod error;
mod http;
mod system;
mod template;
mod validation;

use error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
