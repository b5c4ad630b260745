//! HTTP transport for `get` runs.
mod client;


pub(crate) use client::{RequestOutcome, build_client, send_get};
