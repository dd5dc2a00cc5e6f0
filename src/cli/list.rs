use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tabled::settings::{
    Alignment, Color,
    object::{Columns, Object, Rows},
};
use tokio::time::Duration;
use weeklypay::{
    api,
    row::count_by_group,
    table,
    utils::{datetime::timestamp_to_local_str, text::PLACEHOLDER},
};

use crate::cli::{SourceArgs, ViewArgs};

#[derive(clap::Args)]
pub struct ListCommand {
    #[command(flatten)]
    source: SourceArgs,

    #[command(flatten)]
    view: ViewArgs,

    #[arg(long = "json", help = "Print the matching rows as JSON instead of a table")]
    json: bool,
}

impl ListCommand {
    pub async fn exec(&self) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(ProgressStyle::with_template("{msg}[{elapsed}] {spinner:.cyan}").unwrap());
        spinner.enable_steady_tick(Duration::from_millis(100));

        let row_set = match api::load_rows(&self.source.sources()).await {
            Ok(row_set) => row_set,
            Err(err) => {
                spinner.finish_with_message(format!("{} ", err.to_string().red()));
                return;
            }
        };
        spinner.finish_and_clear();

        let rows = api::view(
            &row_set.rows,
            &self.view.filter_state(),
            self.view.sort,
            self.view.descending,
        );

        if self.json {
            match serde_json::to_string_pretty(&rows) {
                Ok(json) => println!("{json}"),
                Err(err) => println!("[!] {}", err.to_string().red()),
            }
            return;
        }

        let mut table_data: Vec<Vec<String>> = vec![table::headers()];
        for row in &rows {
            table_data.push(table::cells(row, PLACEHOLDER));
        }

        let mut table = tabled::builder::Builder::from_iter(&table_data).build();
        table.modify(Rows::first(), Color::FG_BRIGHT_BLACK);
        table.modify(Columns::first().not(Rows::first()), Color::FG_CYAN);
        table.modify(Columns::new(6..7).not(Rows::first()), Color::FG_GREEN);
        table.modify(Columns::new(4..7), Alignment::right());
        table.modify(Columns::new(12..), Alignment::right());
        println!("\n{table}");

        let summary = count_by_group(&row_set.rows)
            .iter()
            .map(|(group, count)| format!("{group}={count}"))
            .collect::<Vec<_>>()
            .join(" ");
        println!(
            "[Generated at] {} \t [Rows] {}/{} \t {summary}",
            timestamp_to_local_str(&row_set.generated_at).yellow(),
            rows.len(),
            row_set.rows.len()
        );
    }
}
