//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::ControllerConfig;
use crate::controller::PaginationController;
use crate::error::{Error, Result, ResultExt};
use crate::source::InMemorySource;
use serde_json::Value;
use std::path::Path;
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
        match &self.cli.command {
            Commands::Walk {
                input,
                limit,
                pages,
                refresh,
            } => {
                let states = self.walk(input, *limit, *pages, *refresh).await?;
                for state in &states {
                    self.output_message(state);
                }
                Ok(())
            }
            Commands::Config => {
                let config = self.load_config()?;
                self.output_message(&serde_json::to_value(&config)?);
                Ok(())
            }
        }
    }

    /// Load the controller config, falling back to defaults
    fn load_config(&self) -> Result<ControllerConfig> {
        match &self.cli.config {
            Some(path) => ControllerConfig::from_file(path),
            None => Ok(ControllerConfig::default()),
        }
    }

    /// Page through `input` and collect every state the controller went
    /// through, as JSON
    pub async fn walk(
        &self,
        input: &Path,
        limit: Option<usize>,
        pages: Option<usize>,
        refresh: bool,
    ) -> Result<Vec<Value>> {
        let mut config = self.load_config()?;
        if let Some(limit) = limit {
            config = config.with_page_limit(limit);
        }

        let items = read_items(input).await?;
        info!(
            "Walking {} items, {} per page",
            items.len(),
            config.page_limit
        );

        let controller: PaginationController<Value, usize, String, _> =
            PaginationController::from_config(config, InMemorySource::new(items))?;

        let mut states = vec![serde_json::to_value(controller.get_first().await?)?];
        let mut fetched = 1;
        while controller.state().can_load_more() && pages.map_or(true, |max| fetched < max) {
            let state = controller.get_next().await?;
            fetched += 1;
            states.push(serde_json::to_value(&state)?);
        }

        if refresh {
            states.push(serde_json::to_value(controller.refresh_current().await?)?);
        }

        info!("Fetched {fetched} pages");
        Ok(states)
    }

    /// Output a message
    fn output_message(&self, msg: &Value) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(msg).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(msg).unwrap_or_default());
            }
        }
    }
}

/// Read a JSON array of items
async fn read_items(path: &Path) -> Result<Vec<Value>> {
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let contents = tokio::fs::read_to_string(path).await?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Input {} is not a JSON array", path.display()))
}
