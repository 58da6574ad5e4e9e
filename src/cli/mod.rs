//! CLI module
//!
//! Command-line interface over the record and app APIs.
//!
//! # Commands
//!
//! - `record` - Fetch one record
//! - `records` - Fetch one page of records
//! - `all` - Fetch every matching record with offset paging
//! - `cursor` - Stream every matching record through a cursor
//! - `app` - Show app information or form fields

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
