use serde::{Deserialize, Serialize};

use crate::{record::to_finite_or_null, row::Row};

pub const DEFAULT_THRESHOLD_DROP_PCT: f64 = -15.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AlertsDocument {
    pub threshold_drop_pct: f64,
    pub alerts: Vec<Alert>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub ticker: String,
    pub message: String,
    #[serde(default)]
    pub ex_dividend_date: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<AlertKind>,
    #[serde(default)]
    pub pct: Option<f64>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize, strum::Display)]
pub enum AlertKind {
    #[serde(rename = "DIVIDEND_DROP_VS_1W")]
    #[strum(serialize = "DIVIDEND_DROP_VS_1W")]
    DividendDropVs1w,
    #[serde(rename = "DIVIDEND_DROP_VS_1M")]
    #[strum(serialize = "DIVIDEND_DROP_VS_1M")]
    DividendDropVs1m,
}

/// Distribution drops at or below `threshold_drop_pct` against the prior
/// ex-dividend week and month
pub fn derive_alerts(rows: &[&Row], threshold_drop_pct: f64) -> AlertsDocument {
    let mut alerts: Vec<Alert> = vec![];

    for row in rows {
        let record = &row.record;
        let checks = [
            (
                AlertKind::DividendDropVs1w,
                to_finite_or_null(record.dist_chg_ex_1w_pct.as_ref()),
                "week",
            ),
            (
                AlertKind::DividendDropVs1m,
                to_finite_or_null(record.dist_chg_ex_1m_pct.as_ref()),
                "month",
            ),
        ];

        for (kind, change, period) in checks {
            if let Some(pct) = change {
                if pct <= threshold_drop_pct {
                    alerts.push(Alert {
                        ticker: record.ticker.clone(),
                        message: format!(
                            "{} distribution down {pct:.2}% vs prior ex-div {period}",
                            record.ticker
                        ),
                        ex_dividend_date: record.ex_dividend_date.clone(),
                        kind: Some(kind),
                        pct: Some((pct * 100.0).round() / 100.0),
                    });
                }
            }
        }
    }

    AlertsDocument {
        threshold_drop_pct,
        alerts,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{
        record::RawRecord,
        row::{Row, project},
    };

    fn row(ticker: &str, chg_1w: Option<f64>, chg_1m: Option<f64>) -> Row {
        project(&RawRecord {
            ticker: ticker.to_string(),
            ex_dividend_date: Some("2025-01-02".to_string()),
            dist_chg_ex_1w_pct: chg_1w.map(Into::into),
            dist_chg_ex_1m_pct: chg_1m.map(Into::into),
            ..Default::default()
        })
    }

    #[test]
    fn test_derive_alerts() {
        let rows = [
            row("ULTY", Some(-20.456), Some(-5.0)),
            row("YMAX", Some(-15.0), Some(-30.0)),
            row("XDTE", None, Some(3.0)),
        ];
        let refs: Vec<&Row> = rows.iter().collect();

        let document = derive_alerts(&refs, DEFAULT_THRESHOLD_DROP_PCT);
        assert_eq!(document.threshold_drop_pct, -15.0);
        assert_eq!(document.alerts.len(), 3);

        let first = &document.alerts[0];
        assert_eq!(first.ticker, "ULTY");
        assert_eq!(first.kind, Some(AlertKind::DividendDropVs1w));
        assert_eq!(first.pct, Some(-20.46));
        assert_eq!(
            first.message,
            "ULTY distribution down -20.46% vs prior ex-div week"
        );
        assert_eq!(first.ex_dividend_date.as_deref(), Some("2025-01-02"));

        assert_eq!(document.alerts[1].kind, Some(AlertKind::DividendDropVs1w));
        assert_eq!(document.alerts[2].kind, Some(AlertKind::DividendDropVs1m));
        assert_eq!(
            document.alerts[2].message,
            "YMAX distribution down -30.00% vs prior ex-div month"
        );
    }

    #[test]
    fn test_deserialize_alerts_document() {
        let document: AlertsDocument = serde_json::from_value(json!({
            "threshold_drop_pct": -15.0,
            "alerts": [
                {"ticker": "ULTY", "message": "ULTY distribution down", "ex_dividend_date": null},
                {
                    "ticker": "YMAX",
                    "type": "DIVIDEND_DROP_VS_1M",
                    "pct": -31.2,
                    "ex_dividend_date": "2025-01-02",
                    "message": "YMAX distribution down -31.20% vs prior ex-div month"
                }
            ]
        }))
        .unwrap();

        assert_eq!(document.alerts.len(), 2);
        assert_eq!(document.alerts[0].kind, None);
        assert_eq!(document.alerts[1].kind, Some(AlertKind::DividendDropVs1m));
        assert_eq!(AlertKind::DividendDropVs1m.to_string(), "DIVIDEND_DROP_VS_1M");
    }
}
