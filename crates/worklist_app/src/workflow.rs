//! The end-to-end run: template, human edit pause, ingest, batch, report.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use colored::Colorize;
use thiserror::Error;
use worklist_engine::{
    create_template, read_input_items, work_filename, write_results, BatchRunner, FetchSettings,
    HttpProcessor, ItemProcessor, SimulatedProcessor, SimulatedSettings, TemplateProfile,
    WorkbookError,
};

use crate::config::AppConfig;
use crate::console;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Fetch each URL and record extracted page metadata.
    Http,
    /// Validate each item and stand in a fixed delay for real work.
    Simulated,
}

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error(transparent)]
    Workbook(#[from] WorkbookError),
    #[error("no input rows found in the worksheet")]
    NoInput,
    #[error("console error: {0}")]
    Io(#[from] io::Error),
}

fn fetch_settings(config: &AppConfig) -> FetchSettings {
    FetchSettings {
        request_timeout: Duration::from_secs(config.request_timeout_secs),
        ..FetchSettings::default()
    }
}

fn simulated_settings(config: &AppConfig) -> SimulatedSettings {
    SimulatedSettings {
        delay: Duration::from_secs(config.simulate_delay_secs),
        timeout: Duration::from_secs(config.simulate_timeout_secs),
    }
}

fn build_processor(mode: Mode, config: &AppConfig) -> Arc<dyn ItemProcessor> {
    match mode {
        Mode::Http => Arc::new(HttpProcessor::new(fetch_settings(config))),
        Mode::Simulated => Arc::new(SimulatedProcessor::new(simulated_settings(config))),
    }
}

fn preview(item: &str) -> String {
    match item.char_indices().nth(50) {
        Some((idx, _)) => format!("{}...", &item[..idx]),
        None => item.to_string(),
    }
}

pub fn run(mode: Mode, config: &AppConfig) -> Result<(), WorkflowError> {
    let now = Local::now().naive_local();
    let path = PathBuf::from(work_filename(&config.file_prefix, &now));

    println!("Step 1: creating the input template...");
    let profile = TemplateProfile {
        blank_rows: config.blank_rows,
        ..TemplateProfile::default()
    };
    create_template(&path, &profile)?;
    println!("Created {}", path.display().to_string().bold());

    println!("Step 2: edit the worksheet...");
    println!("Enter one URL per row in column A, starting at row 6.");
    println!("Save and close the file when you are done.");
    console::open_in_viewer(&path);
    console::wait_for_enter("Press Enter once editing is complete... ")?;

    println!("Step 3: reading input rows...");
    let items = read_input_items(&path)?;
    if items.is_empty() {
        return Err(WorkflowError::NoInput);
    }
    for (i, item) in items.iter().enumerate() {
        println!("  {}. {}", i + 1, preview(item));
    }
    println!("Loaded {} item(s)", items.len());

    println!("Step 4: running the batch...");
    let runtime = tokio::runtime::Runtime::new()?;
    let runner = BatchRunner::new(build_processor(mode, config));
    let report = runtime.block_on(runner.run(&items));

    println!("Step 5: writing results...");
    write_results(&path, &report.records, &report.stats)?;

    let stats = &report.stats;
    println!(
        "Done: {} / {} / {}",
        format!("{} success", stats.success).green(),
        format!("{} failure", stats.failure).red(),
        format!("rate {:.1}%", stats.success_rate())
    );
    println!("Results saved to {}", path.display().to_string().bold());

    if console::confirm("Open the result file? (y/N): ")? {
        console::open_in_viewer(&path);
    }
    Ok(())
}
