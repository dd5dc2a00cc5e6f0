use colored::Colorize;
use tabled::settings::{Color, object::Columns};
use weeklypay::api;

#[derive(clap::Args)]
pub struct ConfigSetCommand {
    #[arg(help = "One of primary_source, fallback_source, alerts_source, http_timeout_secs, http_max_retries")]
    key: String,

    #[arg(help = "New value, sources accept a file path or an http(s) URL")]
    value: String,
}

impl ConfigSetCommand {
    pub async fn exec(&self) {
        if let Err(err) = api::set_config(&self.key, &self.value).await {
            println!("[!] {}", err.to_string().red());
            return;
        }

        match api::get_config().await {
            Ok(config) => {
                let key = self.key.trim().to_lowercase();
                let table_data: Vec<Vec<String>> = config
                    .entries()
                    .into_iter()
                    .filter(|(k, _)| *k == key)
                    .map(|(k, v)| vec![k.to_string(), v])
                    .collect();

                let mut table = tabled::builder::Builder::from_iter(&table_data).build();
                table.modify(Columns::first(), Color::FG_CYAN);
                println!("{table}");
            }
            Err(err) => {
                println!("[!] {}", err.to_string().red());
            }
        }
    }
}
