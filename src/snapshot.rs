use std::collections::HashMap;

use fake_user_agent::get_rua;
use itertools::Itertools;
use log::{debug, warn};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{
    alert::AlertsDocument,
    error::{WpError, WpResult},
    record::RawRecord,
    utils::net::{http_get, is_http_url},
};

/// One dated capture of the full record set
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub generated_at: String,
    pub items: Vec<RawRecord>,
}

#[derive(Clone, Debug)]
pub struct LoadOptions {
    pub timeout_secs: u64,
    pub max_retries: u32,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            max_retries: 3,
        }
    }
}

/// Reads the primary snapshot, falling back to the secondary one on any failure
pub async fn load_snapshot(
    primary: &str,
    fallback: Option<&str>,
    options: &LoadOptions,
) -> WpResult<Snapshot> {
    let primary_err = match load_document::<Snapshot>(primary, options).await {
        Ok(snapshot) => return Ok(checked(snapshot, primary)),
        Err(err) => err,
    };

    let Some(fallback) = fallback else {
        return Err(WpError::NoData {
            code: "NO_SNAPSHOT",
            message: format!("Unable to load snapshot '{primary}': {primary_err}"),
        });
    };

    warn!("Load snapshot '{primary}' failed, fallback to '{fallback}': {primary_err}");

    match load_document::<Snapshot>(fallback, options).await {
        Ok(snapshot) => Ok(checked(snapshot, fallback)),
        Err(fallback_err) => Err(WpError::NoData {
            code: "NO_SNAPSHOT",
            message: format!(
                "Unable to load snapshot '{primary}' ({primary_err}) or '{fallback}' ({fallback_err})"
            ),
        }),
    }
}

/// A missing or broken alerts document never blocks the rows
pub async fn load_alerts(source: &str, options: &LoadOptions) -> Option<AlertsDocument> {
    match load_document::<AlertsDocument>(source, options).await {
        Ok(document) => Some(document),
        Err(err) => {
            warn!("Load alerts '{source}' failed: {err}");
            None
        }
    }
}

async fn load_document<T: DeserializeOwned>(source: &str, options: &LoadOptions) -> WpResult<T> {
    let bytes = read_source(source, options).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

async fn read_source(source: &str, options: &LoadOptions) -> WpResult<Vec<u8>> {
    if is_http_url(source) {
        debug!("[GET] {source}");

        let headers: HashMap<String, String> = HashMap::from([
            ("User-Agent".to_string(), get_rua().to_string()),
            ("Accept".to_string(), "application/json".to_string()),
        ]);
        http_get(source, &headers, options.timeout_secs, options.max_retries).await
    } else {
        debug!("[READ] {source}");

        Ok(tokio::fs::read(source).await?)
    }
}

fn checked(snapshot: Snapshot, source: &str) -> Snapshot {
    for ticker in snapshot
        .items
        .iter()
        .map(|item| item.ticker.as_str())
        .duplicates()
    {
        warn!("Duplicate ticker '{ticker}' in snapshot '{source}'");
    }

    debug!(
        "Loaded {} items generated at '{}' from '{source}'",
        snapshot.items.len(),
        snapshot.generated_at
    );

    snapshot
}
