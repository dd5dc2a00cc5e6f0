use std::{cmp::Ordering, convert::Infallible, str::FromStr};

use chrono::NaiveDate;

use crate::{
    record::{RawValue, to_finite_or_null},
    row::Row,
    utils::datetime::date_from_str,
};

/// Issuer selector of the table, `All` matches every row
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum IssuerFilter {
    #[default]
    All,
    Only(String),
}

#[derive(Clone, Debug, Default)]
pub struct FilterState {
    pub query: String,
    pub issuer: IssuerFilter,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, strum::Display, strum::EnumString)]
#[strum(ascii_case_insensitive, serialize_all = "snake_case")]
pub enum SortKey {
    #[default]
    Issuer,
    Ticker,
    Price,
    Dist,
    DivPct,
    Nav,
    ExDate,
    #[strum(serialize = "price_chg_1w")]
    PriceChg1w,
    #[strum(serialize = "price_chg_1m")]
    PriceChg1m,
    #[strum(serialize = "dist_chg_1w")]
    DistChg1w,
    #[strum(serialize = "dist_chg_1m")]
    DistChg1m,
    #[strum(serialize = "nav_chg_1w")]
    NavChg1w,
    #[strum(serialize = "nav_chg_1m")]
    NavChg1m,
    Stability,
}

pub fn matches(row: &Row, query: &str, issuer_filter: &IssuerFilter) -> bool {
    matches_query(row, query) && matches_issuer(row, issuer_filter)
}

pub fn filter_rows<'a>(rows: &'a [Row], state: &FilterState) -> Vec<&'a Row> {
    rows.iter()
        .filter(|row| matches(row, &state.query, &state.issuer))
        .collect()
}

/// Stable sort for display, rows without a value for `key` always go last
pub fn sort_rows<'a>(mut rows: Vec<&'a Row>, key: SortKey, descending: bool) -> Vec<&'a Row> {
    rows.sort_by(|a, b| {
        let ordering = match key {
            SortKey::Issuer => directed(a.issuer_sort.cmp(&b.issuer_sort), descending),
            SortKey::Ticker => directed(natord::compare(a.ticker(), b.ticker()), descending),
            SortKey::ExDate => cmp_nulls_last(ex_date(a), ex_date(b), descending),
            _ => cmp_nulls_last(numeric_value(a, key), numeric_value(b, key), descending),
        };

        ordering.then_with(|| natord::compare(a.ticker(), b.ticker()))
    });

    rows
}

fn matches_query(row: &Row, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }

    let query = query.to_lowercase();
    let group = row.issuer_group.to_string();
    let record = &row.record;

    [
        Some(record.ticker.as_str()),
        record.name.as_deref(),
        Some(group.as_str()),
        record.issuer.as_deref(),
        record.reference_asset.as_deref(),
    ]
    .into_iter()
    .flatten()
    .any(|candidate| candidate.to_lowercase().contains(&query))
}

fn matches_issuer(row: &Row, issuer_filter: &IssuerFilter) -> bool {
    match issuer_filter {
        IssuerFilter::All => true,
        IssuerFilter::Only(issuer) => {
            row.issuer_group.to_string() == *issuer
                || row.record.issuer.as_deref() == Some(issuer.as_str())
        }
    }
}

fn numeric_value(row: &Row, key: SortKey) -> Option<f64> {
    let record = &row.record;
    let raw: Option<&RawValue> = match key {
        SortKey::Price => return row.share_price,
        SortKey::DivPct => return row.div_pct_per_share,
        SortKey::Dist => record.distribution_per_share.as_ref(),
        SortKey::Nav => record.nav_official.as_ref(),
        SortKey::PriceChg1w => record.price_chg_ex_1w_pct.as_ref(),
        SortKey::PriceChg1m => record.price_chg_ex_1m_pct.as_ref(),
        SortKey::DistChg1w => record.dist_chg_ex_1w_pct.as_ref(),
        SortKey::DistChg1m => record.dist_chg_ex_1m_pct.as_ref(),
        SortKey::NavChg1w => record.nav_chg_ex_1w_pct.as_ref(),
        SortKey::NavChg1m => record.nav_chg_ex_1m_pct.as_ref(),
        SortKey::Stability => record.dist_stability_score.as_ref(),
        SortKey::Issuer | SortKey::Ticker | SortKey::ExDate => None,
    };

    to_finite_or_null(raw)
}

fn ex_date(row: &Row) -> Option<NaiveDate> {
    row.record
        .ex_dividend_date
        .as_deref()
        .and_then(|s| date_from_str(s).ok())
}

fn directed(ordering: Ordering, descending: bool) -> Ordering {
    if descending {
        ordering.reverse()
    } else {
        ordering
    }
}

fn cmp_nulls_last<T: PartialOrd>(a: Option<T>, b: Option<T>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => directed(a.partial_cmp(&b).unwrap_or(Ordering::Equal), descending),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl FromStr for IssuerFilter {
    type Err = Infallible;
    fn from_str(s: &str) -> Result<Self, <Self as FromStr>::Err> {
        let s = s.trim();

        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            Ok(Self::Only(s.to_string()))
        }
    }
}
