// MMSI range rules
// Reference: ITU-R M.585 (assignment and use of identities in the maritime mobile service)
//
// Current intervals:
// [0 9999999] [10000000 99999999] [100000000 199999999] [200000000 799999999]
// [800000000 899999999] ... [970000000 970999998] ... [972000000 972999998]
// ... [974000000 974999998] ... [980000000 989999999] [990000000 999999999]
//
// Rules are evaluated top to bottom and the first match wins. Some bounds
// overlap, so the order is significant. The SART/MOB/EPIRB upper bounds are
// exclusive at xx999999, which leaves the last value of each band invalid.

use super::Owner;

/// One entry of the ordered range dispatch
#[derive(Debug, Clone, Copy)]
pub struct RangeRule {
    pub owner: Owner,
    /// Whether this rule claims the MMSI
    pub matches: fn(u32) -> bool,
    /// Extracts the MID; None when the category carries no MID or the
    /// arithmetic would go below zero
    pub mid: fn(u32) -> Option<u32>,
}

fn no_mid(_: u32) -> Option<u32> {
    None
}

/// Ordered range rules, first match wins
pub const RANGE_RULES: &[RangeRule] = &[
    RangeRule {
        owner: Owner::Ship,
        matches: |m| (200_000_000..800_000_000).contains(&m),
        mid: |m| Some(m / 1_000_000),
    },
    RangeRule {
        owner: Owner::CoastalStation,
        matches: |m| m <= 9_999_999,
        mid: |m| Some(m / 10_000),
    },
    RangeRule {
        owner: Owner::GroupOfShips,
        matches: |m| m <= 99_999_999,
        mid: |m| Some(m / 100_000),
    },
    RangeRule {
        owner: Owner::SarAircraft,
        matches: |m| m <= 199_999_999,
        mid: |m| (m / 1_000).checked_sub(111_000),
    },
    RangeRule {
        owner: Owner::DiversRadio,
        matches: |m| m < 900_000_000,
        mid: |m| (m / 100_000).checked_sub(8_000),
    },
    RangeRule {
        owner: Owner::AidsToNavigation,
        matches: |m| (990_000_000..1_000_000_000).contains(&m),
        mid: |m| (m / 10_000).checked_sub(99_000),
    },
    RangeRule {
        owner: Owner::AuxiliaryCraft,
        matches: |m| (980_000_000..990_000_000).contains(&m),
        mid: |m| (m / 10_000).checked_sub(98_000),
    },
    RangeRule {
        owner: Owner::AisSart,
        matches: |m| (970_000_000..970_999_999).contains(&m),
        mid: |m| (m / 1_000).checked_sub(970_000),
    },
    RangeRule {
        owner: Owner::MobDevice,
        matches: |m| (972_000_000..972_999_999).contains(&m),
        mid: no_mid,
    },
    RangeRule {
        owner: Owner::Epirb,
        matches: |m| (974_000_000..974_999_999).contains(&m),
        mid: no_mid,
    },
];

/// Find the first rule claiming this MMSI
pub fn match_rule(mmsi: u32) -> Option<&'static RangeRule> {
    RANGE_RULES.iter().find(|rule| (rule.matches)(mmsi))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_order() {
        let owners: Vec<Owner> = RANGE_RULES.iter().map(|r| r.owner).collect();
        assert_eq!(
            owners,
            vec![
                Owner::Ship,
                Owner::CoastalStation,
                Owner::GroupOfShips,
                Owner::SarAircraft,
                Owner::DiversRadio,
                Owner::AidsToNavigation,
                Owner::AuxiliaryCraft,
                Owner::AisSart,
                Owner::MobDevice,
                Owner::Epirb,
            ]
        );
    }

    #[test]
    fn test_ship_band_wins_over_lower_bounds() {
        // 250000000 also satisfies "< 900000000" for diver's radio
        assert_eq!(match_rule(250_000_000).map(|r| r.owner), Some(Owner::Ship));
        assert_eq!(match_rule(800_000_000).map(|r| r.owner), Some(Owner::DiversRadio));
    }

    #[test]
    fn test_unmatched_gaps() {
        assert!(match_rule(900_000_000).is_none());
        assert!(match_rule(909_999_999).is_none());
        assert!(match_rule(971_000_000).is_none());
        assert!(match_rule(970_999_999).is_none());
        assert!(match_rule(972_999_999).is_none());
        assert!(match_rule(974_999_999).is_none());
        assert!(match_rule(1_000_000_000).is_none());
        assert!(match_rule(u32::MAX).is_none());
    }

    #[test]
    fn test_mid_underflow_is_none() {
        let sar = match_rule(100_000_000).expect("SAR rule");
        assert_eq!(sar.owner, Owner::SarAircraft);
        assert_eq!((sar.mid)(100_000_000), None);
        assert_eq!((sar.mid)(111_211_000), Some(211));
    }
}
