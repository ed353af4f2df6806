//! Command implementations.

use std::path::Path;
use std::sync::Arc;

use log::info;
use medfix::advisor::{
    AdvisoryRequest, GeminiAdvisor, KeywordAdvisor, PriorityAdvisor, PriorityAssessment,
};
use medfix::config::DashboardConfig;
use medfix::sync::{SheetSync, SyncOutcome, SyncScheduler};
use medfix::{aggregate, filter, parse, MaintenanceRecord, MedfixError, Result};
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast;

use crate::render;
use crate::OutputFormat;

/// Reads records from a local export, or fetches the sheet once.
async fn load_records(
    config: &DashboardConfig,
    file: Option<&Path>,
) -> Result<Vec<MaintenanceRecord>> {
    if let Some(path) = file {
        let text = std::fs::read_to_string(path).map_err(|e| MedfixError::ReadExport {
            path: path.to_path_buf(),
            source: e,
        })?;
        return Ok(parse(&text));
    }

    let sync = SheetSync::from_config(&config.sheet)?;
    match sync.sync().await {
        SyncOutcome::Updated { .. } => {
            let state = sync.state();
            let state = state.read().await;
            Ok(state.records().to_vec())
        }
        SyncOutcome::Failed { error } => Err(MedfixError::SyncFailed(error)),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub async fn summary(
    config: &DashboardConfig,
    file: Option<&Path>,
    format: OutputFormat,
) -> Result<()> {
    let records = load_records(config, file).await?;
    let snapshot = aggregate(&records);

    match format {
        OutputFormat::Json => print_json(&snapshot),
        OutputFormat::Text => {
            print!("{}", render::summary(&snapshot));
            Ok(())
        }
    }
}

pub async fn search(
    config: &DashboardConfig,
    query: &str,
    file: Option<&Path>,
    format: OutputFormat,
) -> Result<()> {
    let records = load_records(config, file).await?;
    let matches = filter(&records, query);
    info!("{} of {} records match {:?}", matches.len(), records.len(), query);

    match format {
        OutputFormat::Json => print_json(&matches),
        OutputFormat::Text => {
            print!("{}", render::records(&matches));
            Ok(())
        }
    }
}

/// Picks the remote advisor when allowed and configured, else the keyword one.
fn select_advisor(config: &DashboardConfig, offline: bool) -> Box<dyn PriorityAdvisor> {
    if offline {
        return Box::new(KeywordAdvisor::new());
    }

    match GeminiAdvisor::from_config(&config.advisor) {
        Ok(advisor) => Box::new(advisor),
        Err(e) => {
            info!("Using keyword advisor: {}", e);
            Box::new(KeywordAdvisor::new())
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AdviceOutput<'a> {
    record: &'a MaintenanceRecord,
    #[serde(flatten)]
    assessment: PriorityAssessment,
}

pub async fn advise(
    config: &DashboardConfig,
    id: &str,
    file: Option<&Path>,
    offline: bool,
    format: OutputFormat,
) -> Result<()> {
    let records = load_records(config, file).await?;
    let record = records
        .iter()
        .find(|r| r.id == id)
        .ok_or_else(|| MedfixError::RecordNotFound { id: id.to_string() })?;

    let advisor = select_advisor(config, offline);
    let assessment = advisor.advise(&AdvisoryRequest::from_record(record)).await;

    match format {
        OutputFormat::Json => print_json(&AdviceOutput { record, assessment }),
        OutputFormat::Text => {
            print!("{}", render::advice(record, &assessment));
            Ok(())
        }
    }
}

/// Runs the scheduler until stdin closes, printing a summary after each sync.
pub async fn watch(config: &DashboardConfig) -> Result<()> {
    let sync = Arc::new(SheetSync::from_config(&config.sheet)?);
    let state = sync.state();

    let (outcome_tx, mut outcome_rx) = broadcast::channel::<SyncOutcome>(16);
    let (trigger_tx, trigger_rx) = broadcast::channel::<()>(16);

    let scheduler = SyncScheduler::new(Arc::clone(&sync)).with_outcomes(outcome_tx);
    let handle = scheduler.start(trigger_rx);

    let printer = tokio::spawn(async move {
        loop {
            match outcome_rx.recv().await {
                Ok(outcome) => {
                    let state = state.read().await;
                    print!("{}", render::sync_report(&outcome, &state));
                }
                Err(broadcast::error::RecvError::Lagged(_)) => continue,
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    });

    eprintln!("Press Enter to sync again, Ctrl-D to stop.");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(_)) => {
                let _ = trigger_tx.send(());
            }
            Ok(None) => break,
            Err(e) => {
                log::warn!("Failed to read stdin: {}", e);
                break;
            }
        }
    }

    scheduler.stop();
    drop(trigger_tx);
    let _ = tokio::task::spawn_blocking(move || handle.join()).await;
    drop(scheduler);
    let _ = printer.await;

    Ok(())
}
