use colored::Colorize;
use tabled::settings::{
    Color,
    object::{Columns, Object, Rows},
};
use weeklypay::{
    alert::{AlertsDocument, DEFAULT_THRESHOLD_DROP_PCT, derive_alerts},
    api,
    filter::{FilterState, SortKey},
    utils::text::PLACEHOLDER,
};

use crate::cli::SourceArgs;

#[derive(clap::Args)]
pub struct AlertsCommand {
    #[command(flatten)]
    source: SourceArgs,

    #[arg(
        short = 'd',
        long = "derive",
        help = "Derive alerts from the snapshot when the alerts document is unavailable"
    )]
    derive: bool,

    #[arg(
        short = 't',
        long = "threshold",
        default_value_t = DEFAULT_THRESHOLD_DROP_PCT,
        allow_negative_numbers = true,
        help = "Distribution change in percent that raises a derived alert, the default value is -15"
    )]
    threshold_drop_pct: f64,
}

impl AlertsCommand {
    pub async fn exec(&self) {
        let sources = self.source.sources();

        let document = match api::load_alerts(&sources).await {
            Ok(Some(document)) => document,
            Ok(None) => {
                println!("[!] {}", "Alerts document unavailable".yellow());
                if !self.derive {
                    return;
                }

                match api::load_rows(&sources).await {
                    Ok(row_set) => {
                        let rows = api::view(
                            &row_set.rows,
                            &FilterState::default(),
                            SortKey::Issuer,
                            false,
                        );
                        derive_alerts(&rows, self.threshold_drop_pct)
                    }
                    Err(err) => {
                        println!("[!] {}", err.to_string().red());
                        return;
                    }
                }
            }
            Err(err) => {
                println!("[!] {}", err.to_string().red());
                return;
            }
        };

        print_alerts(&document);
    }
}

fn print_alerts(document: &AlertsDocument) {
    println!("[Threshold] {:.2}%", document.threshold_drop_pct);

    if document.alerts.is_empty() {
        println!("{}", "No alerts".green());
        return;
    }

    let mut table_data: Vec<Vec<String>> = vec![vec![
        "Ticker".to_string(),
        "Type".to_string(),
        "Change".to_string(),
        "Ex-Div".to_string(),
        "Message".to_string(),
    ]];
    for alert in &document.alerts {
        table_data.push(vec![
            alert.ticker.to_string(),
            alert
                .kind
                .map(|kind| kind.to_string())
                .unwrap_or(PLACEHOLDER.to_string()),
            alert
                .pct
                .map(|v| format!("{v:.2}%"))
                .unwrap_or(PLACEHOLDER.to_string()),
            alert
                .ex_dividend_date
                .clone()
                .unwrap_or(PLACEHOLDER.to_string()),
            alert.message.to_string(),
        ]);
    }

    let mut table = tabled::builder::Builder::from_iter(&table_data).build();
    table.modify(Rows::first(), Color::FG_BRIGHT_BLACK);
    table.modify(Columns::first().not(Rows::first()), Color::FG_CYAN);
    table.modify(Columns::new(2..3).not(Rows::first()), Color::FG_RED);
    println!("{table}");
}
