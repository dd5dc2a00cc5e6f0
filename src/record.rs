use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A numeric field as it arrives from the snapshot, before any conversion
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

/// One ticker of a snapshot, as written by the scraper
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub ticker: String,

    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub issuer: Option<String>,
    #[serde(default)]
    pub reference_asset: Option<String>,
    #[serde(default)]
    pub frequency: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,

    #[serde(default)]
    pub declaration_date: Option<String>,
    #[serde(default)]
    pub ex_dividend_date: Option<String>,
    #[serde(default)]
    pub record_date: Option<String>,
    #[serde(default)]
    pub pay_date: Option<String>,

    #[serde(default)]
    pub distribution_per_share: Option<RawValue>,
    #[serde(default)]
    pub price_proxy: Option<RawValue>,
    #[serde(default)]
    pub nav_official: Option<RawValue>,

    #[serde(default)]
    pub price_chg_ex_1w_pct: Option<RawValue>,
    #[serde(default)]
    pub price_chg_ex_1m_pct: Option<RawValue>,
    #[serde(default)]
    pub dist_chg_ex_1w_pct: Option<RawValue>,
    #[serde(default)]
    pub dist_chg_ex_1m_pct: Option<RawValue>,
    #[serde(default)]
    pub nav_chg_ex_1w_pct: Option<RawValue>,
    #[serde(default)]
    pub nav_chg_ex_1m_pct: Option<RawValue>,

    #[serde(default)]
    pub dist_sum_8w: Option<RawValue>,
    #[serde(default)]
    pub dist_slope_8w: Option<RawValue>,
    #[serde(default)]
    pub dist_stability_score: Option<RawValue>,
    #[serde(default)]
    pub days_since_ex_div: Option<RawValue>,

    /// Fields this crate does not model (source urls, compatibility aliases, ...)
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Absent, non-numeric and non-finite values all resolve to `None`.
///
/// Numeric strings are accepted after trimming whitespace and dropping `$`
/// and thousands separators, so `" $1,234.5 "` reads as `1234.5`.
pub fn to_finite_or_null(value: Option<&RawValue>) -> Option<f64> {
    let number = match value? {
        RawValue::Number(n) => *n,
        RawValue::Text(s) => {
            let cleaned: String = s
                .trim()
                .chars()
                .filter(|c| *c != '$' && *c != ',')
                .collect();
            if cleaned.is_empty() {
                return None;
            }
            cleaned.parse::<f64>().ok()?
        }
        RawValue::Other(v) => v.as_f64()?,
    };

    number.is_finite().then_some(number)
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_to_finite_or_null() {
        assert_eq!(to_finite_or_null(None), None);
        assert_eq!(to_finite_or_null(Some(&RawValue::Number(20.0))), Some(20.0));
        assert_eq!(to_finite_or_null(Some(&RawValue::Number(-3.5))), Some(-3.5));
        assert_eq!(to_finite_or_null(Some(&RawValue::Number(f64::NAN))), None);
        assert_eq!(
            to_finite_or_null(Some(&RawValue::Number(f64::INFINITY))),
            None
        );
        assert_eq!(to_finite_or_null(Some(&"  12.5 ".into())), Some(12.5));
        assert_eq!(to_finite_or_null(Some(&"$1,234.50".into())), Some(1234.5));
        assert_eq!(to_finite_or_null(Some(&"".into())), None);
        assert_eq!(to_finite_or_null(Some(&"n/a".into())), None);
        assert_eq!(to_finite_or_null(Some(&"NaN".into())), None);
        assert_eq!(to_finite_or_null(Some(&"inf".into())), None);
        assert_eq!(
            to_finite_or_null(Some(&RawValue::Other(json!(true)))),
            None
        );
        assert_eq!(to_finite_or_null(Some(&RawValue::Other(json!([1])))), None);
    }

    #[test]
    fn test_deserialize_record() {
        let record: RawRecord = serde_json::from_value(json!({
            "ticker": "ULTY",
            "issuer": "YieldMax",
            "name": null,
            "price_proxy": 6.12,
            "distribution_per_share": "0.0937",
            "nav_official": null,
            "days_since_ex_div": 3,
            "dist_stability_score": {"bad": 1},
            "source_url": "https://example.com/ulty",
            "exDividend": "2025-01-02"
        }))
        .unwrap();

        assert_eq!(record.ticker, "ULTY");
        assert_eq!(record.issuer.as_deref(), Some("YieldMax"));
        assert_eq!(record.name, None);
        assert_eq!(record.price_proxy, Some(RawValue::Number(6.12)));
        assert_eq!(
            to_finite_or_null(record.distribution_per_share.as_ref()),
            Some(0.0937)
        );
        assert_eq!(record.nav_official, None);
        assert_eq!(to_finite_or_null(record.days_since_ex_div.as_ref()), Some(3.0));
        assert_eq!(to_finite_or_null(record.dist_stability_score.as_ref()), None);
        assert_eq!(record.pay_date, None);
        assert_eq!(
            record.extra.get("source_url"),
            Some(&json!("https://example.com/ulty"))
        );
        assert_eq!(record.extra.get("exDividend"), Some(&json!("2025-01-02")));
    }

    #[test]
    fn test_deserialize_record_without_ticker() {
        assert!(serde_json::from_value::<RawRecord>(json!({"issuer": "YieldMax"})).is_err());
    }
}
