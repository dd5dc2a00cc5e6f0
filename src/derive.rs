use serde::Serialize;

use crate::record::{RawRecord, to_finite_or_null};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct DerivedFields {
    pub share_price: Option<f64>,
    pub div_pct_per_share: Option<f64>,
}

pub fn derive(record: &RawRecord) -> DerivedFields {
    let share_price = to_finite_or_null(record.price_proxy.as_ref());
    let distribution = to_finite_or_null(record.distribution_per_share.as_ref());

    DerivedFields {
        share_price,
        div_pct_per_share: calc_div_pct_per_share(distribution, share_price),
    }
}

/// Weekly distribution as a percentage of the share price.
///
/// Defined only for a strictly positive price and a non-negative distribution.
pub fn calc_div_pct_per_share(distribution: Option<f64>, share_price: Option<f64>) -> Option<f64> {
    match (distribution, share_price) {
        (Some(dist), Some(price))
            if price.is_finite() && price > 0.0 && dist.is_finite() && dist >= 0.0 =>
        {
            let pct = dist / price * 100.0;
            pct.is_finite().then_some(pct)
        }
        _ => None,
    }
}
