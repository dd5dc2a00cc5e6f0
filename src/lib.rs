//! # weeklypay lib

use std::{env, sync::LazyLock};

use log::warn;
use tokio::sync::RwLock;

use crate::config::WpConfig;

pub mod alert;
pub mod api;
pub mod config;
pub mod derive;
pub mod error;
pub mod filter;
pub mod issuer;
pub mod record;
pub mod row;
pub mod snapshot;
pub mod table;
pub mod utils;

pub static VERSION: &str = env!("CARGO_PKG_VERSION");

pub async fn init() {
    env_logger::Builder::new()
        .parse_filters(env::var("LOG").as_deref().unwrap_or("off"))
        .init();

    match WpConfig::load() {
        Ok(config) => {
            *CONFIG.write().await = config;
        }
        Err(err) => {
            warn!("Load config error, using defaults: {err}");
        }
    }
}

static CONFIG: LazyLock<RwLock<WpConfig>> = LazyLock::new(|| RwLock::new(WpConfig::default()));
