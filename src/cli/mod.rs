//! Command-line front-end helpers.

pub mod commands;
