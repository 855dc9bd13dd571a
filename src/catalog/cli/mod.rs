//! # CLI Layer
//!
//! One possible client for the catalog library, and the only code that
//! touches the terminal:
//!
//! - `setup`: clap argument definitions
//! - `commands`: context wiring and dispatch to [`catalog::api::CatalogApi`]
//! - `print`: turns a `CmdResult` into colored text (or JSON)
//! - `logging`: installs the `tracing` subscriber
//!
//! Business rules stay in the library; nothing here decides what a command
//! does, only how its outcome looks.

mod commands;
mod logging;
mod print;
mod setup;

pub use commands::run;
