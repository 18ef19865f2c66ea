//! # CLI Layer
//!
//! One possible front-end for the stockroom library. This is the only code that
//! reads stdin, writes stdout/stderr or decides exit codes.
//!
//! - `setup.rs`: clap definitions
//! - `commands.rs`: context setup, logging and per-subcommand handlers
//! - `menu.rs`: the interactive text menu, generic over its input and output
//! - `print.rs`: table and message rendering
//! - `styles.rs`: terminal styles

pub mod commands;
mod menu;
mod print;
mod setup;
mod styles;
