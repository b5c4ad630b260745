//! Core library for the `curlson` CLI.
//!
//! This crate provides the pieces the binary is built from: CLI argument
//! types, configuration loading, the URL templating engine, and pre-flight
//! validation of run parameters and template files. The primary user-facing
//! interface is the `curlson` command-line application.
pub mod args;
pub mod config;
pub mod error;
pub mod template;
pub mod validation;
