//! CLI runner - executes commands

use crate::api::{CharacterApi, CharactersResponse};
use crate::cli::commands::{Cli, Commands, OutputFormat, Redirect};
use crate::config::ApiConfig;
use crate::cursor::{CursorOptions, PageCursor, PageSource, ResumeOverride, StepResult};
use crate::error::Result;
use std::io::{self, Write};
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let mut out = io::stdout();

        match &self.cli.command {
            Commands::List { page } => self.list(*page, &mut out).await,
            Commands::Walk {
                page,
                direction,
                steps,
                redirects,
            } => {
                let api = self.character_api()?;
                let options = CursorOptions::new(*page, *direction);
                walk(api, options, *steps, redirects, self.cli.format, &mut out).await
            }
        }
    }

    /// Load configuration, applying the `--base-url` override
    fn api_config(&self) -> Result<ApiConfig> {
        let mut config = ApiConfig::load(self.cli.config.as_deref())?;
        if let Some(base_url) = &self.cli.base_url {
            config = config.with_base_url(base_url);
            config.validate()?;
        }
        Ok(config)
    }

    fn character_api(&self) -> Result<CharacterApi> {
        CharacterApi::from_config(&self.api_config()?)
    }

    /// Fetch one page and print its characters
    async fn list(&self, page: Option<u32>, out: &mut impl Write) -> Result<()> {
        let api = self.character_api()?;
        let response = api.fetch_characters(page).await;
        write_listing(&response, self.cli.format, out)
    }
}

/// Drive a cursor for `steps` steps, writing one line per step
pub async fn walk<S>(
    source: S,
    options: CursorOptions,
    steps: u32,
    redirects: &[Redirect],
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()>
where
    S: PageSource<Page = CharactersResponse>,
{
    info!(
        page = options.page,
        direction = %options.direction,
        steps,
        "Starting cursor walk"
    );

    let mut cursor = PageCursor::with_options(source, options);
    for step in 1..=steps {
        let result = cursor.resume(redirect_for(redirects, step)).await;
        writeln!(out, "{}", format_step(&result, format)?)?;
    }
    Ok(())
}

/// Merge every redirect registered for `step`; later ones win per field
pub fn redirect_for(redirects: &[Redirect], step: u32) -> Option<ResumeOverride> {
    redirects
        .iter()
        .filter(|r| r.step == step)
        .fold(None, |merged: Option<ResumeOverride>, r| {
            let mut merged = merged.unwrap_or_default();
            if let Some(page) = r.with.page {
                merged.page = Some(page);
            }
            if let Some(direction) = r.with.direction {
                merged.direction = Some(direction);
            }
            Some(merged)
        })
}

/// Render one cursor step
pub fn format_step(result: &StepResult<CharactersResponse>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let summary = StepResult {
                payload: result.payload.summaries(),
                page: result.page,
                transition: result.transition,
            };
            Ok(serde_json::to_string(&summary)?)
        }
        OutputFormat::Pretty => {
            if result.degraded() {
                return Ok(format!("Page {}: (unavailable)", result.page));
            }
            Ok(format!(
                "Page {}: {}",
                result.page,
                result.payload.names().join(", ")
            ))
        }
    }
}

/// Render a single listing page
pub fn write_listing(
    response: &CharactersResponse,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let summaries = response.summaries();
    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&summaries)?)?,
        OutputFormat::Pretty => {
            for summary in &summaries {
                let episodes = if summary.episodes_count == 1 {
                    "episode"
                } else {
                    "episodes"
                };
                writeln!(
                    out,
                    "{} ({}) - {} {episodes}",
                    summary.name, summary.species, summary.episodes_count
                )?;
            }
        }
    }
    Ok(())
}
