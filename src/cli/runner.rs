//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::client::Client;
use crate::config::{load_config, ClientConfig};
use crate::error::Result;
use crate::pagination::{CancelHandle, CancelSignal};
use crate::record::{CreateCursorParams, GetAllRecordsParams, GetRecordsParams};
use serde::Serialize;
use serde_json::Value;
use std::time::Instant;
use tracing::{info, warn};

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
        let client = Client::from_config(self.load_config()?)?;
        let cancel = install_ctrl_c();

        match &self.cli.command {
            Commands::Record { app, id } => {
                let record: Value = client.record.get_record(app, id).await?;
                self.output(&record);
            }
            Commands::Records {
                app,
                query,
                fields,
                total_count,
            } => {
                let mut params = GetRecordsParams::new(app.as_str())
                    .fields(fields.iter().cloned())
                    .query(query.as_str());
                params.total_count = *total_count;
                let page = client.record.get_records::<Value>(&params).await?;
                if let Some(total) = &page.total_count {
                    eprintln!("total count: {total}");
                }
                page.records.iter().for_each(|r| self.output(r));
            }
            Commands::All {
                app,
                condition,
                order_by,
                fields,
            } => {
                let params = GetAllRecordsParams::new(app.as_str())
                    .fields(fields.iter().cloned())
                    .condition(condition.as_str())
                    .order_by(order_by.as_str());
                let started = Instant::now();
                let records: Vec<Value> = client.record.get_all_records(&params, &cancel).await?;
                info!(
                    records = records.len(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "fetched all records"
                );
                records.iter().for_each(|r| self.output(r));
            }
            Commands::Cursor {
                app,
                query,
                fields,
                size,
            } => {
                let params = CreateCursorParams::new(app.as_str())
                    .fields(fields.iter().cloned())
                    .query(query.as_str())
                    .size(*size);
                let started = Instant::now();
                let total = client
                    .record
                    .for_each_batch::<Value, _>(&params, cancel, |batch| {
                        batch.iter().for_each(|r| self.output(r));
                        Ok(())
                    })
                    .await?;
                info!(
                    records = total,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "cursor drained"
                );
            }
            Commands::App {
                app,
                form_fields,
                lang,
            } => {
                if *form_fields {
                    let form = client.app.get_form_fields(app, lang.as_deref()).await?;
                    let mut fields: Vec<_> = form.properties.values().collect();
                    fields.sort_by(|a, b| a.code.cmp(&b.code));
                    fields.into_iter().for_each(|f| self.output(f));
                } else {
                    self.output(&client.app.get_app(app).await?);
                }
            }
        }
        Ok(())
    }

    /// Load the config file when given, otherwise the environment alone
    fn load_config(&self) -> Result<ClientConfig> {
        match &self.cli.config {
            Some(path) => load_config(path),
            None => ClientConfig::from_env(),
        }
    }

    /// Print one value in the selected format
    fn output(&self, value: &impl Serialize) {
        let line = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value),
            OutputFormat::Pretty => serde_json::to_string_pretty(value),
        };
        match line {
            Ok(line) => println!("{line}"),
            Err(e) => warn!(error = %e, "failed to serialize output"),
        }
    }
}

/// Cancel in-flight work on Ctrl-C so cursors are still deleted
fn install_ctrl_c() -> CancelSignal {
    let (handle, signal) = CancelSignal::new();
    tokio::spawn(wait_for_ctrl_c(handle));
    signal
}

async fn wait_for_ctrl_c(handle: CancelHandle) {
    if tokio::signal::ctrl_c().await.is_ok() {
        warn!("interrupted, cancelling");
        handle.cancel();
    }
}
