// MMSI decoding library
// Re-export modules for use in main.rs

pub mod config;
pub mod error;
pub mod mmsi;
pub mod reference;

pub use error::{MmsiError, Result};
pub use mmsi::{
    classify, decode_mmsi, Mmsi, MmsiInfo, Owner, INVALID_MMSI, MMSI_CODES, UNKNOWN_COUNTRY,
};
pub use reference::mid::{MidEntry, MID_TABLE};
pub use reference::{get_all_mids, lookup_mid, mid_map, mids_for_country};
