use super::read_pos;
use crate::{Airway, AirwayType, Record, Rect};

/// Fill an airway segment from an `airway` table record
pub fn fill_airway(record: &impl Record, airway: &mut Airway) {
    airway.id = record.value_int("airway_id");

    let code = record.value_str("airway_type");
    airway.kind = AirwayType::from_code(&code);
    if airway.kind == AirwayType::Unknown {
        tracing::debug!(airway_id = airway.id, %code, "Unknown airway type");
    }

    airway.name = record.value_str("airway_name");
    airway.min_altitude = record.value_int("minimum_altitude");
    airway.fragment = record.value_int("airway_fragment_no");
    airway.sequence = record.value_int("sequence_no");
    airway.from_waypoint_id = record.value_int("from_waypoint_id");
    airway.to_waypoint_id = record.value_int("to_waypoint_id");
    airway.from = read_pos(record, "from_lonx", "from_laty");
    airway.to = read_pos(record, "to_lonx", "to_laty");

    airway.bounding = Rect::from(airway.from);
    airway.bounding.extend(airway.to);
}

impl Airway {
    pub fn from_record(record: &impl Record) -> Self {
        let mut airway = Self::default();
        fill_airway(record, &mut airway);
        airway
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Pos, SqlRecord};

    fn segment(airway_type: &str) -> SqlRecord {
        SqlRecord::new()
            .with("airway_id", 801)
            .with("airway_type", airway_type)
            .with("airway_name", "UL607")
            .with("minimum_altitude", 24500)
            .with("airway_fragment_no", 2)
            .with("sequence_no", 14)
            .with("from_waypoint_id", 9001)
            .with("to_waypoint_id", 9002)
            .with("from_lonx", 8.9)
            .with("from_laty", 49.8)
            .with("to_lonx", 7.6)
            .with("to_laty", 50.3)
    }

    #[test]
    fn airway_segment() {
        let airway = Airway::from_record(&segment("JET"));

        assert_eq!(airway.id, 801);
        assert_eq!(airway.kind, AirwayType::Jet);
        assert_eq!(airway.name, "UL607");
        assert_eq!(airway.min_altitude, 24500);
        assert_eq!(airway.fragment, 2);
        assert_eq!(airway.sequence, 14);
        assert_eq!(airway.from_waypoint_id, 9001);
        assert_eq!(airway.to_waypoint_id, 9002);
        assert_eq!(airway.from, Pos::new(8.9, 49.8));
        assert_eq!(airway.to, Pos::new(7.6, 50.3));
    }

    #[test]
    fn bounding_is_extent_of_endpoints() {
        let airway = Airway::from_record(&segment("VICTOR"));

        assert_eq!(airway.bounding.left, airway.from.lon.min(airway.to.lon));
        assert_eq!(airway.bounding.right, airway.from.lon.max(airway.to.lon));
        assert_eq!(airway.bounding.bottom, airway.from.lat.min(airway.to.lat));
        assert_eq!(airway.bounding.top, airway.from.lat.max(airway.to.lat));
    }

    #[test]
    fn airway_types() {
        assert_eq!(Airway::from_record(&segment("VICTOR")).kind, AirwayType::Victor);
        assert_eq!(Airway::from_record(&segment("BOTH")).kind, AirwayType::Both);
        assert_eq!(Airway::from_record(&segment("X")).kind, AirwayType::Unknown);
        assert_eq!(Airway::from_record(&SqlRecord::new()).kind, AirwayType::Unknown);
    }

    #[test]
    fn idempotent() {
        let record = segment("JET");
        assert_eq!(Airway::from_record(&record), Airway::from_record(&record));
    }
}
