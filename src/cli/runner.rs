//! CLI runner - executes a load

use crate::cli::commands::{Cli, OutputFormat};
use crate::config::{parse_table_list, LoaderConfig};
use crate::database::DatabaseEngine;
use crate::engine::{LoadConfig, Pipeline, RunSummary};
use crate::error::{Result, ResultExt};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Validate the configuration, create the database and load every
    /// selected table into it
    pub fn run(&self) -> Result<RunSummary> {
        let config = self.load_config()?;
        config.validate()?;

        tracing::info!(
            input = %config.input_dir()?.display(),
            output = %config.output.display(),
            tables = config.tables.len(),
            "Starting load"
        );

        let mut engine = DatabaseEngine::open(&config.output)?;
        let summary = Pipeline::new(config.input_dir()?)
            .with_config(LoadConfig::from(&config))
            .run(&mut engine)?;

        self.print_summary(&config, &summary)?;
        Ok(summary)
    }

    /// Merge the optional YAML file with command-line flags.
    ///
    /// Flags win over file values.
    pub fn load_config(&self) -> Result<LoaderConfig> {
        let mut config = match &self.cli.config {
            Some(path) => LoaderConfig::from_file(path)?,
            None => LoaderConfig::default(),
        };

        config.input_dir = Some(self.cli.directory.clone());

        if let Some(output) = &self.cli.output {
            config.output = output.clone();
        }

        if let Some(list) = &self.cli.tables {
            let tables = parse_table_list(list)?;
            if !tables.is_empty() {
                config.tables = tables;
            }
        }

        if let Some(size) = self.cli.batch_size {
            config.batch_size = size;
        }

        Ok(config)
    }

    /// Report what was loaded
    fn print_summary(&self, config: &LoaderConfig, summary: &RunSummary) -> Result<()> {
        match self.cli.format {
            OutputFormat::Text => {
                for load in &summary.tables {
                    println!("Inserted {} records in {}", load.rows_inserted, load.table);
                }
                println!("{} created", config.output.display());
            }
            OutputFormat::Json => {
                let rendered = serde_json::to_string_pretty(summary)
                    .context("Failed to render run summary")?;
                println!("{rendered}");
            }
        }
        Ok(())
    }
}
