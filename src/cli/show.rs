use colored::Colorize;
use tabled::settings::{Color, object::Columns};
use weeklypay::{api, table, utils::text::PLACEHOLDER};

use crate::cli::SourceArgs;

#[derive(clap::Args)]
pub struct ShowCommand {
    #[arg(help = "Ticker to show, case-insensitive, e.g. ulty")]
    ticker: String,

    #[command(flatten)]
    source: SourceArgs,
}

impl ShowCommand {
    pub async fn exec(&self) {
        match api::load_rows(&self.source.sources()).await {
            Ok(row_set) => match api::find_row(&row_set.rows, &self.ticker) {
                Ok(row) => {
                    let mut table_data: Vec<Vec<String>> = table::headers()
                        .into_iter()
                        .zip(table::cells(row, PLACEHOLDER))
                        .map(|(header, cell)| vec![header, cell])
                        .collect();

                    let extra = &row.record.extra;
                    for (key, value) in extra {
                        table_data.push(vec![key.to_string(), value.to_string()]);
                    }
                    if let Some(notes) = &row.record.notes {
                        table_data.push(vec!["Notes".to_string(), notes.to_string()]);
                    }

                    let mut table = tabled::builder::Builder::from_iter(&table_data).build();
                    table.modify(Columns::first(), Color::FG_CYAN);
                    println!("{table}");
                }
                Err(err) => {
                    println!("[!] {}", err.to_string().red());
                }
            },
            Err(err) => {
                println!("[!] {}", err.to_string().red());
            }
        }
    }
}
