//! CLI commands and argument parsing

use crate::cursor::{Direction, ResumeOverride};
use crate::error::{Error, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

/// Browse the Rick and Morty character listing with a resumable cursor
#[derive(Parser, Debug)]
#[command(name = "character-cursor")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// API configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch a single page and list its characters
    List {
        /// Page to fetch (omit for the API's first page)
        #[arg(short, long)]
        page: Option<u32>,
    },

    /// Walk the listing with a pagination cursor
    Walk {
        /// Starting page (values below 1 start at 1)
        #[arg(short, long, default_value_t = 10, allow_negative_numbers = true)]
        page: i64,

        /// Starting direction: forward, backward, 1 or -1
        #[arg(short, long, default_value = "forward", allow_negative_numbers = true)]
        direction: Direction,

        /// Number of steps to run
        #[arg(short, long, default_value_t = 5)]
        steps: u32,

        /// Redirect the cursor when resuming step STEP, e.g. `2:20:backward`
        #[arg(short, long = "redirect", value_name = "STEP:PAGE[:DIRECTION]")]
        redirects: Vec<Redirect>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one document per line)
    Json,
    /// Human-readable output
    Pretty,
}

/// An override to supply when resuming a given step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redirect {
    /// 1-based step whose resume carries the override
    pub step: u32,
    /// Page and/or direction to force
    pub with: ResumeOverride,
}

impl FromStr for Redirect {
    type Err = Error;

    /// Parses `STEP:PAGE`, `STEP:PAGE:DIRECTION` or `STEP::DIRECTION`
    fn from_str(s: &str) -> Result<Self> {
        let (step, rest) = s
            .split_once(':')
            .ok_or_else(|| Error::invalid_argument(s, "expected STEP:PAGE[:DIRECTION]"))?;

        let step: u32 = step
            .trim()
            .parse()
            .map_err(|_| Error::invalid_argument(s, "step must be a positive number"))?;
        if step == 0 {
            return Err(Error::invalid_argument(s, "steps are numbered from 1"));
        }

        let (page, direction) = match rest.split_once(':') {
            Some((page, direction)) => (page.trim(), direction.trim()),
            None => (rest.trim(), ""),
        };

        let mut with = ResumeOverride::new();
        if !page.is_empty() {
            let page: i64 = page
                .parse()
                .map_err(|_| Error::invalid_argument(s, "page is not a number"))?;
            with = with.page(page);
        }
        if !direction.is_empty() {
            with = with.direction(direction.parse()?);
        }
        if with.is_empty() {
            return Err(Error::invalid_argument(
                s,
                "a redirect needs a page, a direction or both",
            ));
        }

        Ok(Self { step, with })
    }
}
