use super::flags::airport_flags;
use super::{read_pos, round_to_int};
use crate::{Airport, AirportFlag, Pos, Record, Rect};

/// Fill an airport from an `airport` table record
///
/// Without `complete` only the id and the position without elevation are
/// read, which is enough for map labels and cheap listings. With `complete`
/// the detail columns, all capability flags, the bounding rectangle and the
/// elevation are read as well.
///
/// The flag pass replaces all flags, including the [`AirportFlag::Complete`]
/// flag set by the base pass, so a complete read ends up without it.
pub fn fill_airport(record: &impl Record, airport: &mut Airport, complete: bool) {
    fill_airport_base(record, airport, complete);

    if complete {
        airport.flags = airport_flags(record, false);

        if record.contains("has_tower_object") {
            airport.tower_coords = Some(read_pos(record, "tower_lonx", "tower_laty"));
        }

        airport.atis_frequency = record.value_int("atis_frequency");
        airport.awos_frequency = record.value_int("awos_frequency");
        airport.asos_frequency = record.value_int("asos_frequency");
        airport.unicom_frequency = record.value_int("unicom_frequency");

        airport.position = Pos::with_altitude(
            record.value_float("lonx"),
            record.value_float("laty"),
            record.value_float("altitude"),
        );
    } else {
        airport.position = read_pos(record, "lonx", "laty");
    }
}

/// Fill an airport from an overview record
///
/// Overview queries cover large map areas and select only summary columns.
/// See [`airport_flags`] for how the flags are derived in this mode. As in
/// [`fill_airport`], the flag pass drops the complete flag of the base pass.
pub fn fill_airport_for_overview(record: &impl Record, airport: &mut Airport) {
    fill_airport_base(record, airport, true);

    airport.flags = airport_flags(record, true);
    airport.position = read_pos(record, "lonx", "laty");
}

fn fill_airport_base(record: &impl Record, airport: &mut Airport, complete: bool) {
    airport.id = record.value_int("airport_id");

    if complete {
        airport.tower_frequency = record.value_int("tower_frequency");
        airport.ident = record.value_str("ident");
        airport.name = record.value_str("name");
        airport.longest_runway_length = record.value_int("longest_runway_length");
        airport.longest_runway_heading =
            round_to_int(record.value_float("longest_runway_heading"));
        airport.magvar = record.value_float("mag_var");

        airport.bounding = Some(Rect::new(
            record.value_float("left_lonx"),
            record.value_float("top_laty"),
            record.value_float("right_lonx"),
            record.value_float("bottom_laty"),
        ));
        airport.flags.insert(AirportFlag::Complete);
    }
}

impl Airport {
    /// Read an airport, see [`fill_airport`]
    pub fn from_record(record: &impl Record, complete: bool) -> Self {
        let mut airport = Self::default();
        fill_airport(record, &mut airport, complete);
        airport
    }

    /// Read an airport from an overview record, see [`fill_airport_for_overview`]
    pub fn overview_from_record(record: &impl Record) -> Self {
        let mut airport = Self::default();
        fill_airport_for_overview(record, &mut airport);
        airport
    }
}
