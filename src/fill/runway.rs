use super::read_pos;
use crate::{Record, Runway};

/// Fill a runway from a `runway` table record
///
/// With `overview` only length, heading and positions are read and all
/// numeric detail fields are reset to zero, so a runway object reused from a
/// detail read does not show stale values.
pub fn fill_runway(record: &impl Record, runway: &mut Runway, overview: bool) {
    if !overview {
        runway.surface = record.value_str("surface");
        runway.primary_name = record.value_str("primary_name");
        runway.secondary_name = record.value_str("secondary_name");
        runway.edge_light = record.value_str("edge_light");
        runway.width = record.value_int("width");
        runway.primary_offset = record.value_int("primary_offset_threshold");
        runway.secondary_offset = record.value_int("secondary_offset_threshold");
        runway.primary_blast_pad = record.value_int("primary_blast_pad");
        runway.secondary_blast_pad = record.value_int("secondary_blast_pad");
        runway.primary_overrun = record.value_int("primary_overrun");
        runway.secondary_overrun = record.value_int("secondary_overrun");
        runway.primary_closed = record.value_bool("primary_closed_markings");
        runway.secondary_closed = record.value_bool("secondary_closed_markings");
    } else {
        runway.width = 0;
        runway.primary_offset = 0;
        runway.secondary_offset = 0;
        runway.primary_blast_pad = 0;
        runway.secondary_blast_pad = 0;
        runway.primary_overrun = 0;
        runway.secondary_overrun = 0;
        runway.primary_closed = false;
        runway.secondary_closed = false;
    }

    runway.length = record.value_int("length");
    runway.heading = record.value_float("heading");
    runway.position = read_pos(record, "lonx", "laty");
    runway.primary_position = read_pos(record, "primary_lonx", "primary_laty");
    runway.secondary_position = read_pos(record, "secondary_lonx", "secondary_laty");
}

impl Runway {
    pub fn from_record(record: &impl Record, overview: bool) -> Self {
        let mut runway = Self::default();
        fill_runway(record, &mut runway, overview);
        runway
    }
}
