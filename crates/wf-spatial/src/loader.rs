//! CSV location dataset loader.
//!
//! # CSV format
//!
//! One row per location; row order determines `LocationId` assignment.
//!
//! ```csv
//! name,x,y
//! Pesantren Islam Al Irsyad,2070,2995
//! Penginapan Ummu Yasmin,1810,3400
//! Raff Kos,575,2525
//! ```
//!
//! Coordinates are raw integer map units.  Names are free text and need not
//! be unique; [`LocationSet::find_by_name`] returns the lowest-ID match.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::locations::{Location, LocationSet};
use crate::{SpatialError, SpatialResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct LocationRecord {
    name: String,
    x: i32,
    y: i32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`LocationSet`] from a CSV file.
pub fn load_locations_csv(path: &Path) -> SpatialResult<LocationSet> {
    let file = std::fs::File::open(path).map_err(SpatialError::Io)?;
    load_locations_reader(file)
}

/// Like [`load_locations_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded datasets.
pub fn load_locations_reader<R: Read>(reader: R) -> SpatialResult<LocationSet> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let mut locations = Vec::new();
    for result in csv_reader.deserialize::<LocationRecord>() {
        let row = result.map_err(|e| SpatialError::Parse(e.to_string()))?;
        locations.push(Location::new(row.x, row.y, row.name));
    }

    Ok(LocationSet::from_locations(locations))
}
