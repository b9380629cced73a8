// Reference data module - MID allocation table
// Source: ITU Table of Maritime Identification Digits
//
// The table is a const slice; lookups go through a HashMap that is built
// once on first use and never written to afterwards.

pub mod mid;

use std::collections::HashMap;
use std::sync::OnceLock;
use mid::{MidEntry, MID_TABLE};

/// Lazily-initialized HashMap for O(1) country lookup by MID
static MID_MAP: OnceLock<HashMap<u32, &'static str>> = OnceLock::new();

/// Get or initialize the MID HashMap
pub fn mid_map() -> &'static HashMap<u32, &'static str> {
    MID_MAP.get_or_init(|| {
        let mut map = HashMap::with_capacity(MID_TABLE.len());
        for entry in MID_TABLE {
            map.insert(entry.mid, entry.country);
        }
        log::debug!("MID table initialized with {} entries", map.len());
        map
    })
}

/// Look up the country a MID is allocated to
pub fn lookup_mid(mid: u32) -> Option<&'static str> {
    mid_map().get(&mid).copied()
}

/// Get all MID entries
pub fn get_all_mids() -> &'static [MidEntry] {
    MID_TABLE
}

/// Get all MIDs allocated to a given country (case insensitive), ascending
pub fn mids_for_country(country: &str) -> Vec<u32> {
    let wanted = country.trim().to_lowercase();
    let mut mids: Vec<u32> = MID_TABLE
        .iter()
        .filter(|entry| entry.country.to_lowercase() == wanted)
        .map(|entry| entry.mid)
        .collect();
    mids.sort_unstable();
    mids
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_no_duplicate_mids() {
        let mut seen = HashSet::new();
        for entry in MID_TABLE {
            assert!(seen.insert(entry.mid), "duplicate MID {}", entry.mid);
        }
        assert_eq!(mid_map().len(), MID_TABLE.len());
    }

    #[test]
    fn test_mids_in_maritime_range() {
        for entry in MID_TABLE {
            assert!((200..=799).contains(&entry.mid), "MID {} out of range", entry.mid);
        }
    }

    #[test]
    fn test_table_is_sorted() {
        assert!(MID_TABLE.windows(2).all(|w| w[0].mid < w[1].mid));
    }

    #[test]
    fn test_lookup_mid() {
        assert_eq!(lookup_mid(211), Some("Germany"));
        assert_eq!(lookup_mid(257), Some("Norway"));
        assert_eq!(lookup_mid(338), Some("United States of America"));
        assert_eq!(lookup_mid(477), Some("Hong Kong"));
        assert_eq!(lookup_mid(503), Some("Australia"));
        assert_eq!(lookup_mid(636), Some("Liberia"));
        assert_eq!(lookup_mid(770), Some("Uruguay"));
    }

    #[test]
    fn test_unallocated_mids() {
        assert_eq!(lookup_mid(0), None);
        assert_eq!(lookup_mid(200), None);
        assert_eq!(lookup_mid(217), None);
        assert_eq!(lookup_mid(799), None);
        assert_eq!(lookup_mid(1000), None);
    }

    #[test]
    fn test_lookup_is_stable() {
        for entry in MID_TABLE {
            assert_eq!(lookup_mid(entry.mid), Some(entry.country));
            assert_eq!(lookup_mid(entry.mid), Some(entry.country));
        }
    }

    #[test]
    fn test_mids_for_country() {
        assert_eq!(
            mids_for_country("Panama"),
            vec![351, 352, 353, 354, 370, 371, 372, 373]
        );
        assert_eq!(mids_for_country("  germany "), vec![211, 218]);
        assert_eq!(mids_for_country("United States of America"), vec![338, 366, 367, 368, 369]);
        assert!(mids_for_country("Atlantis").is_empty());
    }
}
