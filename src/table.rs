//! Column layout shared by the terminal table and the CSV export.

use crate::{
    record::{RawValue, to_finite_or_null},
    row::Row,
    utils::text::{fmt_number, fmt_pct, or_placeholder},
};

pub struct Column {
    pub header: &'static str,
    pub cell: fn(&Row) -> Option<String>,
}

pub const COLUMNS: &[Column] = &[
    Column {
        header: "Ticker",
        cell: |row| Some(row.record.ticker.clone()),
    },
    Column {
        header: "Name",
        cell: |row| row.record.name.clone(),
    },
    Column {
        header: "Issuer",
        cell: |row| Some(row.issuer_group.to_string()),
    },
    Column {
        header: "Reference",
        cell: |row| row.record.reference_asset.clone(),
    },
    Column {
        header: "Share Price",
        cell: |row| fmt_number(row.share_price, 2),
    },
    Column {
        header: "Dist/Share",
        cell: |row| number(row.record.distribution_per_share.as_ref(), 4),
    },
    Column {
        header: "Div%/Share",
        cell: |row| fmt_pct(row.div_pct_per_share, 2),
    },
    Column {
        header: "Frequency",
        cell: |row| row.record.frequency.clone(),
    },
    Column {
        header: "Declaration",
        cell: |row| row.record.declaration_date.clone(),
    },
    Column {
        header: "Ex-Div",
        cell: |row| row.record.ex_dividend_date.clone(),
    },
    Column {
        header: "Record",
        cell: |row| row.record.record_date.clone(),
    },
    Column {
        header: "Pay",
        cell: |row| row.record.pay_date.clone(),
    },
    Column {
        header: "NAV",
        cell: |row| number(row.record.nav_official.as_ref(), 2),
    },
    Column {
        header: "Price Proxy",
        cell: |row| number(row.record.price_proxy.as_ref(), 2),
    },
    Column {
        header: "Price 1W",
        cell: |row| pct(row.record.price_chg_ex_1w_pct.as_ref()),
    },
    Column {
        header: "Price 1M",
        cell: |row| pct(row.record.price_chg_ex_1m_pct.as_ref()),
    },
    Column {
        header: "Dist 1W",
        cell: |row| pct(row.record.dist_chg_ex_1w_pct.as_ref()),
    },
    Column {
        header: "Dist 1M",
        cell: |row| pct(row.record.dist_chg_ex_1m_pct.as_ref()),
    },
    Column {
        header: "Days Since Ex",
        cell: |row| number(row.record.days_since_ex_div.as_ref(), 0),
    },
    Column {
        header: "Dist Sum 8W",
        cell: |row| number(row.record.dist_sum_8w.as_ref(), 4),
    },
    Column {
        header: "Dist Slope 8W",
        cell: |row| number(row.record.dist_slope_8w.as_ref(), 6),
    },
    Column {
        header: "Stability",
        cell: |row| number(row.record.dist_stability_score.as_ref(), 1),
    },
];

pub fn headers() -> Vec<String> {
    COLUMNS.iter().map(|c| c.header.to_string()).collect()
}

pub fn cells(row: &Row, placeholder: &str) -> Vec<String> {
    COLUMNS
        .iter()
        .map(|c| or_placeholder((c.cell)(row), placeholder))
        .collect()
}

fn number(value: Option<&RawValue>, decimals: usize) -> Option<String> {
    fmt_number(to_finite_or_null(value), decimals)
}

fn pct(value: Option<&RawValue>) -> Option<String> {
    fmt_pct(to_finite_or_null(value), 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{record::RawRecord, row::project};

    #[test]
    fn test_cells() {
        let row = project(&RawRecord {
            ticker: "ULTY".to_string(),
            issuer: Some("YieldMax ETFs".to_string()),
            price_proxy: Some(20.0.into()),
            distribution_per_share: Some("0.25".into()),
            dist_chg_ex_1w_pct: Some((-3.5).into()),
            ex_dividend_date: Some("2025-01-02".to_string()),
            ..Default::default()
        });

        let cells = cells(&row, "-");
        assert_eq!(cells.len(), headers().len());
        assert_eq!(cells[0], "ULTY");
        assert_eq!(cells[1], "-");
        assert_eq!(cells[2], "YieldMax");
        assert_eq!(cells[4], "20.00");
        assert_eq!(cells[5], "0.2500");
        assert_eq!(cells[6], "1.25%");
        assert_eq!(cells[9], "2025-01-02");
        assert_eq!(cells[16], "-3.50%");
        assert_eq!(cells[21], "-");
    }
}
