use serde::{Deserialize, Serialize};

/// Canonical fund-sponsor buckets used for grouping and sorting
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum IssuerGroup {
    YieldMax,
    GraniteShares,
    Roundhill,
    #[default]
    Other,
}

/// Case-folded needle and its bucket, evaluated top to bottom, first hit wins
const ISSUER_RULES: &[(&str, IssuerGroup)] = &[
    ("yieldmax", IssuerGroup::YieldMax),
    ("granite", IssuerGroup::GraniteShares),
    ("roundhill", IssuerGroup::Roundhill),
];

pub fn classify(issuer: Option<&str>) -> IssuerGroup {
    let issuer = match issuer.map(str::trim) {
        Some(s) if !s.is_empty() => s.to_lowercase(),
        _ => return IssuerGroup::Other,
    };

    ISSUER_RULES
        .iter()
        .find(|(needle, _)| issuer.contains(needle))
        .map(|(_, group)| *group)
        .unwrap_or(IssuerGroup::Other)
}

impl IssuerGroup {
    pub fn rank(&self) -> u8 {
        match self {
            IssuerGroup::YieldMax => 1,
            IssuerGroup::GraniteShares => 2,
            IssuerGroup::Roundhill => 3,
            IssuerGroup::Other => 9,
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify(Some("YieldMax")), IssuerGroup::YieldMax);
        assert_eq!(classify(Some("yIeLdMaX ETFs")), IssuerGroup::YieldMax);
        assert_eq!(classify(Some("GraniteShares")), IssuerGroup::GraniteShares);
        assert_eq!(classify(Some("GRANITE")), IssuerGroup::GraniteShares);
        assert_eq!(classify(Some("Roundhill")), IssuerGroup::Roundhill);
        assert_eq!(
            classify(Some("RoundHill Investments")),
            IssuerGroup::Roundhill
        );
        assert_eq!(classify(Some("Defiance")), IssuerGroup::Other);
    }

    #[test]
    fn test_classify_absent() {
        assert_eq!(classify(None), IssuerGroup::Other);
        assert_eq!(classify(Some("")), IssuerGroup::Other);
        assert_eq!(classify(Some("   ")), IssuerGroup::Other);
    }

    #[test]
    fn test_classify_priority() {
        assert_eq!(
            classify(Some("Roundhill x YieldMax")),
            IssuerGroup::YieldMax
        );
        assert_eq!(
            classify(Some("roundhill granite")),
            IssuerGroup::GraniteShares
        );
    }

    #[test]
    fn test_rank() {
        for group in IssuerGroup::iter() {
            if group != IssuerGroup::Other {
                assert!(group.rank() < IssuerGroup::Other.rank());
            }
        }

        assert_eq!(classify(Some("yieldmax")).rank(), 1);
        assert_eq!(classify(Some("GraniteShares")).rank(), 2);
        assert_eq!(classify(Some("Roundhill")).rank(), 3);
        assert_eq!(classify(None).rank(), 9);
    }

    #[test]
    fn test_parse_group() {
        assert_eq!(
            "graniteshares".parse::<IssuerGroup>().unwrap(),
            IssuerGroup::GraniteShares
        );
        assert_eq!(IssuerGroup::Roundhill.to_string(), "Roundhill");
        assert!("Granite".parse::<IssuerGroup>().is_err());
    }
}
