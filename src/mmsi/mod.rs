// MMSI decoding
// Reference: https://en.wikipedia.org/wiki/Maritime_Mobile_Service_Identity
//
// An MMSI is classified into an owner category by numeric range. Most
// categories embed a three-digit MID, which identifies the flag state.
// Satellite equipment digits carried by some ship MMSIs are not decoded.

pub mod rules;

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{MmsiError, Result};
use crate::reference::lookup_mid;

/// Owner label used when no range rule matches
pub const INVALID_MMSI: &str = "Invalid MMSI";

/// Country label used when a MID was extracted but is not allocated
pub const UNKNOWN_COUNTRY: &str = "Unknown Country ID";

/// MIDs are three digits; anything larger is never looked up
const MID_LIMIT: u32 = 1000;

/// Owner category labels. Reference list only, the classifier uses `Owner`.
pub const MMSI_CODES: [&str; 11] = [
    "Ship",
    "Coastal Station",
    "Group of ships",
    "SAR Aircraft",
    "Diver's radio",
    "Aids to navigation",
    "Auxiliary craft associated with parent ship",
    "AIS SART",
    "MOB Device",
    "EPIRB",
    INVALID_MMSI,
];

/// Who an MMSI is assigned to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Owner {
    Ship,
    CoastalStation,
    GroupOfShips,
    SarAircraft,
    DiversRadio,
    AidsToNavigation,
    AuxiliaryCraft,
    AisSart,
    MobDevice,
    Epirb,
    Invalid,
}

impl Owner {
    pub const ALL: [Owner; 11] = [
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
        Owner::Invalid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Owner::Ship => "Ship",
            Owner::CoastalStation => "Coastal Station",
            Owner::GroupOfShips => "Group of ships",
            Owner::SarAircraft => "SAR Aircraft",
            Owner::DiversRadio => "Diver's radio",
            Owner::AidsToNavigation => "Aids to navigation",
            Owner::AuxiliaryCraft => "Auxiliary craft associated with parent ship",
            Owner::AisSart => "AIS SART",
            Owner::MobDevice => "MOB Device",
            Owner::Epirb => "EPIRB",
            Owner::Invalid => INVALID_MMSI,
        }
    }

    /// Long form with the abbreviation spelled out
    pub fn description(&self) -> &'static str {
        match self {
            Owner::SarAircraft => "SAR - Search and Rescue Aircraft",
            Owner::AisSart => "AIS SART - Search and Rescue Transmitter",
            Owner::MobDevice => "MOB - Man Overboard Device",
            Owner::Epirb => "EPIRB - Emergency Position Indicating Radio Beacon",
            other => other.as_str(),
        }
    }

    /// Whether MMSIs of this category embed a MID
    pub fn has_mid(&self) -> bool {
        !matches!(self, Owner::MobDevice | Owner::Epirb | Owner::Invalid)
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Owner {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A Maritime Mobile Service Identity as carried in AIS messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Mmsi(u32);

impl Mmsi {
    pub fn new(value: u32) -> Self {
        Mmsi(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn classify(&self) -> MmsiInfo {
        classify(self.0)
    }
}

impl From<u32> for Mmsi {
    fn from(value: u32) -> Self {
        Mmsi(value)
    }
}

impl From<Mmsi> for u32 {
    fn from(mmsi: Mmsi) -> Self {
        mmsi.0
    }
}

impl fmt::Display for Mmsi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:09}", self.0)
    }
}

impl FromStr for Mmsi {
    type Err = MmsiError;

    /// Accepts "211000000", " 211000000 ", "MMSI 211000000" and "mmsi:211000000"
    fn from_str(s: &str) -> Result<Self> {
        let mut digits = s.trim();
        if digits.get(..4).is_some_and(|tag| tag.eq_ignore_ascii_case("MMSI")) {
            digits = digits[4..].trim_start();
            digits = digits.strip_prefix(':').unwrap_or(digits).trim_start();
        }

        if digits.is_empty() {
            return Err(MmsiError::Empty);
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MmsiError::InvalidDigits { input: s.trim().to_string() });
        }

        digits
            .parse::<u32>()
            .map(Mmsi)
            .map_err(|_| MmsiError::Overflow { input: s.trim().to_string() })
    }
}

/// Decoded MMSI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MmsiInfo {
    pub mmsi: Mmsi,
    pub owner: Owner,
    /// MID extracted from the MMSI, if the category has one and it is three digits
    pub mid: Option<u32>,
    /// Allocated country for `mid`
    pub country: Option<&'static str>,
}

impl MmsiInfo {
    pub fn owner_label(&self) -> &'static str {
        self.owner.as_str()
    }

    /// Country name, "Unknown Country ID" for an unallocated MID, or ""
    /// when no MID could be extracted
    pub fn country_label(&self) -> &'static str {
        match (self.mid, self.country) {
            (_, Some(country)) => country,
            (Some(_), None) => UNKNOWN_COUNTRY,
            (None, None) => "",
        }
    }
}

impl Serialize for MmsiInfo {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("MmsiInfo", 5)?;
        state.serialize_field("mmsi", &self.mmsi)?;
        state.serialize_field("owner", &self.owner)?;
        state.serialize_field("description", self.owner.description())?;
        state.serialize_field("mid", &self.mid)?;
        state.serialize_field("country", self.country_label())?;
        state.end()
    }
}

/// Classify an MMSI by owner category and flag state
pub fn classify(mmsi: u32) -> MmsiInfo {
    let (owner, mid) = match rules::match_rule(mmsi) {
        Some(rule) => (rule.owner, (rule.mid)(mmsi).filter(|mid| *mid < MID_LIMIT)),
        None => {
            log::debug!("MMSI {} is outside every allocated range", mmsi);
            (Owner::Invalid, None)
        }
    };

    let country = mid.and_then(lookup_mid);
    if let (Some(mid), None) = (mid, country) {
        log::debug!("MMSI {} carries unallocated MID {}", mmsi, mid);
    }

    log::trace!("MMSI {} -> {} / {:?}", mmsi, owner, country);

    MmsiInfo {
        mmsi: Mmsi(mmsi),
        owner,
        mid,
        country,
    }
}

/// Decode an MMSI into (owner, country) labels.
///
/// Never fails. An unmatched MMSI yields ("Invalid MMSI", ""), a MID absent
/// from the table yields "Unknown Country ID", and categories without a MID
/// yield an empty country.
pub fn decode_mmsi(mmsi: u32) -> (&'static str, &'static str) {
    let info = classify(mmsi);
    (info.owner_label(), info.country_label())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn ship_band_uses_leading_digits(mmsi in 200_000_000u32..800_000_000) {
            let info = classify(mmsi);
            prop_assert_eq!(info.owner, Owner::Ship);
            prop_assert_eq!(info.mid, Some(mmsi / 1_000_000));
        }

        #[test]
        fn classify_is_idempotent(mmsi in any::<u32>()) {
            prop_assert_eq!(classify(mmsi), classify(mmsi));
            prop_assert_eq!(decode_mmsi(mmsi), decode_mmsi(mmsi));
        }

        #[test]
        fn country_only_with_mid(mmsi in any::<u32>()) {
            let info = classify(mmsi);
            if info.mid.is_none() {
                prop_assert_eq!(info.country_label(), "");
            } else {
                prop_assert!(!info.country_label().is_empty());
                prop_assert!(info.owner.has_mid());
            }
        }
    }
}
