use std::path::PathBuf;

use colored::Colorize;
use weeklypay::api::{self, ExportFormat};

use crate::cli::{SourceArgs, ViewArgs};

#[derive(clap::Args)]
pub struct ExportCommand {
    #[arg(short = 'o', long = "output", help = "File the rows are written to")]
    output: PathBuf,

    #[arg(
        short = 'f',
        long = "format",
        default_value = "json",
        help = "Output format, json or csv, the default value is json"
    )]
    format: ExportFormat,

    #[command(flatten)]
    source: SourceArgs,

    #[command(flatten)]
    view: ViewArgs,
}

impl ExportCommand {
    pub async fn exec(&self) {
        match api::load_rows(&self.source.sources()).await {
            Ok(row_set) => {
                let rows = api::view(
                    &row_set.rows,
                    &self.view.filter_state(),
                    self.view.sort,
                    self.view.descending,
                );

                match api::export_rows(&rows, &row_set.generated_at, &self.output, self.format) {
                    Ok(_) => {
                        println!(
                            "[Exported] {} rows -> '{}'",
                            rows.len(),
                            self.output.to_string_lossy().cyan()
                        );
                    }
                    Err(err) => {
                        println!("[!] {}", err.to_string().red());
                    }
                }
            }
            Err(err) => {
                println!("[!] {}", err.to_string().red());
            }
        }
    }
}
