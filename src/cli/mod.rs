//! CLI module for tasktrack - command-line interface and subcommands.
//!
//! The binary is a demonstration caller: it drives the library's public
//! store operations against sample data and prints the results.

pub mod commands;

pub use commands::Cli;
