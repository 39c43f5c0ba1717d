use crate::{AirportFlag, AirportFlags, Record};

/// Columns evaluated in both full and summary mode
pub const COMMON_FLAG_COLUMNS: &[(&str, AirportFlag)] = &[
    ("num_helipad", AirportFlag::Helipad),
    ("has_avgas", AirportFlag::Avgas),
    ("has_jetfuel", AirportFlag::JetFuel),
    ("tower_frequency", AirportFlag::Tower),
    ("is_closed", AirportFlag::Closed),
    ("is_military", AirportFlag::Military),
    ("is_addon", AirportFlag::Addon),
    ("num_runway_hard", AirportFlag::HardRunway),
    ("num_runway_soft", AirportFlag::SoftRunway),
    ("num_runway_water", AirportFlag::WaterRunway),
];

/// Columns evaluated in full mode only
///
/// All parking stand counters map to the same flag.
pub const DETAIL_FLAG_COLUMNS: &[(&str, AirportFlag)] = &[
    ("num_approach", AirportFlag::Approach),
    ("num_runway_light", AirportFlag::Lighted),
    ("num_runway_end_ils", AirportFlag::Ils),
    ("num_apron", AirportFlag::Apron),
    ("num_taxi_path", AirportFlag::Taxiway),
    ("has_tower_object", AirportFlag::TowerObject),
    ("num_parking_gate", AirportFlag::Parking),
    ("num_parking_ga_ramp", AirportFlag::Parking),
    ("num_parking_cargo", AirportFlag::Parking),
    ("num_parking_mil_cargo", AirportFlag::Parking),
    ("num_parking_mil_combat", AirportFlag::Parking),
    ("num_runway_end_vasi", AirportFlag::Vasi),
    ("num_runway_end_als", AirportFlag::Als),
    ("num_boundary_fence", AirportFlag::Fence),
    ("num_runway_end_closed", AirportFlag::ClosedRunway),
];

/// Flags forced for rated airports in summary mode
const RATED_FLAGS: [AirportFlag; 3] = [
    AirportFlag::Apron,
    AirportFlag::Taxiway,
    AirportFlag::TowerObject,
];

/// Compute the capability flags of an airport record
///
/// A flag is set if its column is not NULL and not zero. With `overview` the
/// detail columns are skipped; instead apron, taxiway and tower object are
/// set for any airport with a positive `rating`, so that rated airports do
/// not look empty on overview maps.
pub fn airport_flags(record: &impl Record, overview: bool) -> AirportFlags {
    let mut flags = column_flags(record, COMMON_FLAG_COLUMNS);

    if !overview {
        flags |= column_flags(record, DETAIL_FLAG_COLUMNS);
    } else if record.value_int("rating") > 0 {
        flags |= RATED_FLAGS.into_iter().collect::<AirportFlags>();
    }

    flags
}

fn column_flags(record: &impl Record, table: &[(&str, AirportFlag)]) -> AirportFlags {
    table
        .iter()
        .filter(|(column, _)| !record.is_null(column) && record.value_int(column) != 0)
        .map(|&(_, flag)| flag)
        .collect()
}
