use std::path::Path;

use log::debug;
use serde::Serialize;

use crate::{
    CONFIG,
    alert::AlertsDocument,
    config::WpConfig,
    error::{WpError, WpResult},
    filter::{FilterState, SortKey, filter_rows, sort_rows},
    row::{Row, count_by_group, project_all},
    snapshot,
    table,
};

/// Per-invocation overrides of the configured sources
#[derive(Clone, Debug, Default)]
pub struct Sources {
    pub primary: Option<String>,
    pub fallback: Option<String>,
    pub alerts: Option<String>,
}

pub struct RowSet {
    pub generated_at: String,
    pub rows: Vec<Row>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, strum::Display, strum::EnumString)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
}

#[derive(Serialize)]
struct ExportDocument<'a> {
    generated_at: &'a str,
    items: &'a [&'a Row],
}

pub async fn load_rows(sources: &Sources) -> WpResult<RowSet> {
    let config = get_config().await?;
    let primary = sources.primary.as_deref().unwrap_or(&config.primary_source);
    let fallback = sources
        .fallback
        .as_deref()
        .unwrap_or(&config.fallback_source);

    let snapshot = snapshot::load_snapshot(
        primary,
        (!fallback.is_empty()).then_some(fallback),
        &config.load_options(),
    )
    .await?;
    let rows = project_all(&snapshot.items);

    for (group, count) in count_by_group(&rows) {
        debug!("[{group}] {count}");
    }

    Ok(RowSet {
        generated_at: snapshot.generated_at,
        rows,
    })
}

pub async fn load_alerts(sources: &Sources) -> WpResult<Option<AlertsDocument>> {
    let config = get_config().await?;
    let source = sources.alerts.as_deref().unwrap_or(&config.alerts_source);

    Ok(snapshot::load_alerts(source, &config.load_options()).await)
}

pub fn view<'a>(
    rows: &'a [Row],
    state: &FilterState,
    sort_key: SortKey,
    descending: bool,
) -> Vec<&'a Row> {
    sort_rows(filter_rows(rows, state), sort_key, descending)
}

pub fn find_row<'a>(rows: &'a [Row], ticker: &str) -> WpResult<&'a Row> {
    let ticker = ticker.trim();

    rows.iter()
        .find(|row| row.ticker().eq_ignore_ascii_case(ticker))
        .ok_or_else(|| WpError::NotExists {
            code: "TICKER_NOT_EXISTS",
            message: format!("Ticker '{ticker}' not exists"),
        })
}

pub fn export_rows(
    rows: &[&Row],
    generated_at: &str,
    path: &Path,
    format: ExportFormat,
) -> WpResult<()> {
    match format {
        ExportFormat::Json => {
            let document = ExportDocument {
                generated_at,
                items: rows,
            };
            std::fs::write(path, serde_json::to_vec_pretty(&document)?)?;
        }
        ExportFormat::Csv => {
            let mut writer = csv::Writer::from_path(path)?;
            writer.write_record(table::headers())?;
            for row in rows {
                writer.write_record(table::cells(row, ""))?;
            }
            writer.flush()?;
        }
    }

    debug!("Exported {} rows to '{}'", rows.len(), path.display());

    Ok(())
}

pub async fn get_config() -> WpResult<WpConfig> {
    Ok(CONFIG.read().await.clone())
}

pub async fn set_config(key: &str, value: &str) -> WpResult<()> {
    let mut config = CONFIG.write().await;

    let mut updated = config.clone();
    updated.set(key, value)?;
    updated.store()?;

    *config = updated;

    Ok(())
}
