use clap::Subcommand;
use weeklypay::{
    api::Sources,
    filter::{FilterState, IssuerFilter, SortKey},
};

mod alerts;
mod config;
mod export;
mod list;
mod show;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Show distribution drop alerts")]
    Alerts(Box<alerts::AlertsCommand>),

    #[command(about = "Manage configurations", subcommand)]
    #[clap(visible_aliases = &["cfg"])]
    Config(Box<config::ConfigCommand>),

    #[command(about = "Export projected rows as JSON or CSV")]
    Export(Box<export::ExportCommand>),

    #[command(about = "List weekly-distribution ETFs")]
    #[clap(visible_aliases = &["ls"])]
    List(Box<list::ListCommand>),

    #[command(about = "Show all fields of one ETF")]
    Show(Box<show::ShowCommand>),
}

#[derive(clap::Args)]
pub struct SourceArgs {
    #[arg(
        long = "primary",
        help = "Primary snapshot, a file path or an http(s) URL, overrides the configured one"
    )]
    primary: Option<String>,

    #[arg(
        long = "fallback",
        help = "Snapshot read when the primary one fails, overrides the configured one"
    )]
    fallback: Option<String>,

    #[arg(long = "alerts", help = "Alerts document, overrides the configured one")]
    alerts: Option<String>,
}

#[derive(clap::Args)]
pub struct ViewArgs {
    #[arg(
        short = 'q',
        long = "query",
        default_value = "",
        help = "Case-insensitive text matched against ticker, name, issuer and reference asset"
    )]
    query: String,

    #[arg(
        short = 'i',
        long = "issuer",
        default_value = "All",
        help = "Issuer bucket or raw issuer name, e.g. -i YieldMax, the default value is All"
    )]
    issuer: IssuerFilter,

    #[arg(
        short = 's',
        long = "sort",
        default_value = "issuer",
        help = "Sort column, e.g. -s div_pct, -s ex_date, -s dist_chg_1w, the default value is issuer"
    )]
    sort: SortKey,

    #[arg(long = "desc", help = "Sort in descending order")]
    descending: bool,
}

impl SourceArgs {
    pub fn sources(&self) -> Sources {
        Sources {
            primary: self.primary.clone(),
            fallback: self.fallback.clone(),
            alerts: self.alerts.clone(),
        }
    }
}

impl ViewArgs {
    pub fn filter_state(&self) -> FilterState {
        FilterState {
            query: self.query.clone(),
            issuer: self.issuer.clone(),
        }
    }
}
