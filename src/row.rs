use itertools::Itertools;
use serde::Serialize;

use crate::{
    derive::derive,
    issuer::{IssuerGroup, classify},
    record::RawRecord,
};

/// Keys owned by the projection, a same-named key carried over from the
/// snapshot is replaced by the derived value
const DERIVED_KEYS: &[&str] = &[
    "issuer_group",
    "issuer_sort",
    "share_price",
    "div_pct_per_share",
];

/// A view-ready record: the raw fields plus the derived ones
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Row {
    #[serde(flatten)]
    pub record: RawRecord,

    pub issuer_group: IssuerGroup,
    pub issuer_sort: u8,
    pub share_price: Option<f64>,
    pub div_pct_per_share: Option<f64>,
}

pub fn project(record: &RawRecord) -> Row {
    let issuer_group = classify(record.issuer.as_deref());
    let derived = derive(record);

    let mut record = record.clone();
    record
        .extra
        .retain(|key, _| !DERIVED_KEYS.contains(&key.as_str()));

    Row {
        record,
        issuer_group,
        issuer_sort: issuer_group.rank(),
        share_price: derived.share_price,
        div_pct_per_share: derived.div_pct_per_share,
    }
}

pub fn project_all(records: &[RawRecord]) -> Vec<Row> {
    records.iter().map(project).collect()
}

/// Row count per issuer bucket, in bucket rank order
pub fn count_by_group(rows: &[Row]) -> Vec<(IssuerGroup, usize)> {
    rows.iter()
        .counts_by(|row| row.issuer_group)
        .into_iter()
        .sorted_by_key(|(group, _)| group.rank())
        .collect()
}

impl Row {
    pub fn ticker(&self) -> &str {
        &self.record.ticker
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::record::RawValue;

    fn raw(ticker: &str, issuer: Option<&str>) -> RawRecord {
        RawRecord {
            ticker: ticker.to_string(),
            issuer: issuer.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_project() {
        let mut record = raw("ULTY", Some("YieldMax"));
        record.price_proxy = Some(RawValue::Number(20.0));
        record.distribution_per_share = Some(RawValue::Number(0.25));
        record.ex_dividend_date = Some("2025-01-02".to_string());

        let row = project(&record);
        assert_eq!(row.issuer_group, IssuerGroup::YieldMax);
        assert_eq!(row.issuer_sort, 1);
        assert_eq!(row.share_price, Some(20.0));
        assert!((row.div_pct_per_share.unwrap() - 1.25).abs() < 1e-12);
        assert_eq!(row.record, record);
        assert_eq!(row.ticker(), "ULTY");
    }

    #[test]
    fn test_project_is_deterministic() {
        let mut record = raw("AMYY", Some("GraniteShares"));
        record.price_proxy = Some("not a price".into());

        assert_eq!(project(&record), project(&record));
        assert_eq!(project(&record).share_price, None);
    }

    #[test]
    fn test_project_replaces_stale_derived_keys() {
        let record: RawRecord = serde_json::from_value(json!({
            "ticker": "XDTE",
            "issuer": "Roundhill",
            "price_proxy": 40.0,
            "distribution_per_share": 10.0,
            "share_price": 1.0,
            "div_pct_per_share": 99.0,
            "source_url": "https://example.com/xdte"
        }))
        .unwrap();

        let value = serde_json::to_value(project(&record)).unwrap();
        assert_eq!(value["share_price"], json!(40.0));
        assert_eq!(value["div_pct_per_share"], json!(25.0));
        assert_eq!(value["issuer_group"], json!("Roundhill"));
        assert_eq!(value["issuer_sort"], json!(3));
        assert_eq!(value["source_url"], json!("https://example.com/xdte"));
        assert_eq!(value["ticker"], json!("XDTE"));
    }

    #[test]
    fn test_project_keeps_source_fields() {
        let record: RawRecord = serde_json::from_value(json!({
            "ticker": "TSLW",
            "issuer": null,
            "notes": "Manually added",
            "record_date": "2025-01-03",
            "dist_sum_8w": 1.2345
        }))
        .unwrap();

        let value = serde_json::to_value(project(&record)).unwrap();
        assert_eq!(value["issuer_group"], json!("Other"));
        assert_eq!(value["issuer_sort"], json!(9));
        assert_eq!(value["notes"], json!("Manually added"));
        assert_eq!(value["record_date"], json!("2025-01-03"));
        assert_eq!(value["dist_sum_8w"], json!(1.2345));
        assert_eq!(value["share_price"], json!(null));
    }

    #[test]
    fn test_count_by_group() {
        let rows = project_all(&[
            raw("A", Some("Roundhill")),
            raw("B", None),
            raw("C", Some("YieldMax")),
            raw("D", Some("YieldMax")),
        ]);

        assert_eq!(
            count_by_group(&rows),
            vec![
                (IssuerGroup::YieldMax, 2),
                (IssuerGroup::Roundhill, 1),
                (IssuerGroup::Other, 1),
            ]
        );
    }
}
