//! CLI module
//!
//! Command-line interface for browsing the character listing.
//!
//! # Commands
//!
//! - `list` - Fetch one page and print its characters
//! - `walk` - Drive a pagination cursor for a number of steps

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat, Redirect};
pub use runner::{format_step, redirect_for, walk, write_listing, Runner};
