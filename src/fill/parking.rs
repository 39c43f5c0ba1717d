use super::{read_pos, read_pos_3d, round_to_int};
use crate::{Parking, Record, StartPosition};

pub fn fill_parking(record: &impl Record, parking: &mut Parking) {
    parking.id = record.value_int("parking_id");
    parking.airport_id = record.value_int("airport_id");
    parking.kind = record.value_str("type");
    parking.name = record.value_str("name");
    parking.airline_codes = record.value_str("airline_codes");

    parking.position = read_pos(record, "lonx", "laty");
    parking.jetway = record.value_int("has_jetway") > 0;
    parking.number = record.value_int("number");

    parking.heading = round_to_int(record.value_float("heading"));
    parking.radius = round_to_int(record.value_float("radius"));
}

/// Fill a start position; `name` holds the runway name
pub fn fill_start(record: &impl Record, start: &mut StartPosition) {
    start.id = record.value_int("start_id");
    start.airport_id = record.value_int("airport_id");
    start.kind = record.value_str("type");
    start.runway_name = record.value_str("name");
    start.helipad_number = record.value_int("number");
    start.position = read_pos_3d(record);
    start.heading = round_to_int(record.value_float("heading"));
}

impl Parking {
    pub fn from_record(record: &impl Record) -> Self {
        let mut parking = Self::default();
        fill_parking(record, &mut parking);
        parking
    }
}

impl StartPosition {
    pub fn from_record(record: &impl Record) -> Self {
        let mut start = Self::default();
        fill_start(record, &mut start);
        start
    }
}
