//! Mapping of database records into map objects
//!
//! Every `fill_*` function reads a fixed set of columns from a [`Record`]
//! and writes them into an existing object. The functions never fail: missing
//! columns, NULL values and undecodable values become zero, `false` or an
//! empty string through the lenient accessors of [`Record`].
//!
//! Each object type also gets constructors (`Vor::from_vor_record`,
//! `Airport::from_record`, ...) that fill a default value.
//!
//! [`Record`]: crate::Record

mod airport;
mod airway;
mod flags;
mod navaid;
mod parking;
mod runway;

pub use airport::{fill_airport, fill_airport_for_overview};
pub use airway::fill_airway;
pub use flags::{COMMON_FLAG_COLUMNS, DETAIL_FLAG_COLUMNS, airport_flags};
pub use navaid::{
    fill_ils, fill_marker, fill_ndb, fill_vor, fill_vor_from_nav, fill_waypoint,
    fill_waypoint_from_nav,
};
pub use parking::{fill_parking, fill_start};
pub use runway::fill_runway;

use crate::{Pos, Record};

/// Round to a whole number, ties away from zero
///
/// Used for headings and parking radii: 179.5 becomes 180 and -0.5 becomes -1.
pub fn round_to_int(value: f32) -> i32 {
    value.round() as i32
}

/// Read `lonx`/`laty` style coordinate pair without altitude
fn read_pos(record: &impl Record, lon: &str, lat: &str) -> Pos {
    Pos::new(record.value_float(lon), record.value_float(lat))
}

/// Read `lonx`, `laty` and `altitude`
fn read_pos_3d(record: &impl Record) -> Pos {
    Pos::with_altitude(
        record.value_float("lonx"),
        record.value_float("laty"),
        record.value_float("altitude"),
    )
}
