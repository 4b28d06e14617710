//! arrayfns CLI library.
//!
//! This crate provides the command-line harness for the `arrayfns` array
//! operations. The public modules are primarily exposed for testing purposes.

pub mod cli;
pub mod commands;
pub mod common;
