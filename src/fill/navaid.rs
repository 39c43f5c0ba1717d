use super::{read_pos, read_pos_3d, round_to_int};
use crate::{Ils, Marker, Ndb, Record, Rect, Vor, Waypoint};

/// Fill a VOR from a `vor` table record
///
/// DME presence comes from the `dme_only` and `dme_altitude` columns.
pub fn fill_vor(record: &impl Record, vor: &mut Vor) {
    fill_vor_base(record, vor);

    vor.dme_only = record.value_int("dme_only") > 0;
    vor.has_dme = !record.is_null("dme_altitude");
}

/// Fill a VOR from a combined navaid search record
///
/// The navaid table has no DME columns. DME presence is derived from
/// `nav_type` instead, and an unknown `nav_type` leaves `dme_only` and
/// `has_dme` as they were. The navaid table also stores frequencies scaled
/// by ten compared to the `vor` table.
pub fn fill_vor_from_nav(record: &impl Record, vor: &mut Vor) {
    fill_vor_base(record, vor);

    let nav_type = record.value_str("nav_type");
    match nav_type.as_str() {
        "VORDME" => {
            vor.dme_only = false;
            vor.has_dme = true;
        }
        "DME" => {
            vor.dme_only = true;
            vor.has_dme = true;
        }
        "VOR" => {
            vor.dme_only = false;
            vor.has_dme = false;
        }
        _ => tracing::debug!(vor_id = vor.id, %nav_type, "Unknown VOR navaid type"),
    }

    vor.frequency /= 10;
}

fn fill_vor_base(record: &impl Record, vor: &mut Vor) {
    vor.id = record.value_int("vor_id");
    vor.ident = record.value_str("ident");
    vor.region = record.value_str("region");
    vor.name = record.value_str("name");
    vor.kind = record.value_str("type");
    vor.frequency = record.value_int("frequency");
    vor.range = record.value_int("range");
    vor.magvar = record.value_float("mag_var");
    vor.position = read_pos_3d(record);
}

pub fn fill_ndb(record: &impl Record, ndb: &mut Ndb) {
    ndb.id = record.value_int("ndb_id");
    ndb.ident = record.value_str("ident");
    ndb.region = record.value_str("region");
    ndb.name = record.value_str("name");
    ndb.kind = record.value_str("type");
    ndb.frequency = record.value_int("frequency");
    ndb.range = record.value_int("range");
    ndb.magvar = record.value_float("mag_var");
    ndb.position = read_pos_3d(record);
}

/// Fill a waypoint from a `waypoint` table record
pub fn fill_waypoint(record: &impl Record, waypoint: &mut Waypoint) {
    fill_waypoint_with(
        record,
        waypoint,
        "num_victor_airway",
        "num_jet_airway",
    );
}

/// Fill a waypoint from a combined navaid search record
pub fn fill_waypoint_from_nav(record: &impl Record, waypoint: &mut Waypoint) {
    fill_waypoint_with(
        record,
        waypoint,
        "waypoint_num_victor_airway",
        "waypoint_num_jet_airway",
    );
}

fn fill_waypoint_with(
    record: &impl Record,
    waypoint: &mut Waypoint,
    victor_column: &str,
    jet_column: &str,
) {
    waypoint.id = record.value_int("waypoint_id");
    waypoint.ident = record.value_str("ident");
    waypoint.region = record.value_str("region");
    waypoint.kind = record.value_str("type");
    waypoint.magvar = record.value_float("mag_var");
    waypoint.has_victor_airways = record.value_int(victor_column) > 0;
    waypoint.has_jet_airways = record.value_int(jet_column) > 0;
    waypoint.position = read_pos(record, "lonx", "laty");
}

pub fn fill_marker(record: &impl Record, marker: &mut Marker) {
    marker.id = record.value_int("marker_id");
    marker.kind = record.value_str("type");
    marker.heading = round_to_int(record.value_float("heading"));
    marker.position = read_pos(record, "lonx", "laty");
}

/// Fill an ILS including the localizer feather geometry
///
/// The bounding rectangle covers the antenna position and both far corners
/// of the feather.
pub fn fill_ils(record: &impl Record, ils: &mut Ils) {
    ils.id = record.value_int("ils_id");
    ils.ident = record.value_str("ident");
    ils.name = record.value_str("name");
    ils.heading = record.value_float("loc_heading");
    ils.width = record.value_float("loc_width");
    ils.magvar = record.value_float("mag_var");
    ils.slope = record.value_float("gs_pitch");

    ils.frequency = record.value_int("frequency");
    ils.range = record.value_int("range");
    ils.has_dme = record.value_int("dme_range") > 0;

    ils.position = read_pos_3d(record);
    ils.pos1 = read_pos(record, "end1_lonx", "end1_laty");
    ils.pos2 = read_pos(record, "end2_lonx", "end2_laty");
    ils.posmid = read_pos(record, "end_mid_lonx", "end_mid_laty");

    ils.bounding = Rect::from(ils.position);
    ils.bounding.extend(ils.pos1);
    ils.bounding.extend(ils.pos2);
}

impl Vor {
    /// Read a VOR from a `vor` table record, see [`fill_vor`]
    pub fn from_vor_record(record: &impl Record) -> Self {
        let mut vor = Self::default();
        fill_vor(record, &mut vor);
        vor
    }

    /// Read a VOR from a navaid search record, see [`fill_vor_from_nav`]
    pub fn from_nav_record(record: &impl Record) -> Self {
        let mut vor = Self::default();
        fill_vor_from_nav(record, &mut vor);
        vor
    }
}

impl Ndb {
    pub fn from_record(record: &impl Record) -> Self {
        let mut ndb = Self::default();
        fill_ndb(record, &mut ndb);
        ndb
    }
}

impl Waypoint {
    pub fn from_waypoint_record(record: &impl Record) -> Self {
        let mut waypoint = Self::default();
        fill_waypoint(record, &mut waypoint);
        waypoint
    }

    pub fn from_nav_record(record: &impl Record) -> Self {
        let mut waypoint = Self::default();
        fill_waypoint_from_nav(record, &mut waypoint);
        waypoint
    }
}

impl Marker {
    pub fn from_record(record: &impl Record) -> Self {
        let mut marker = Self::default();
        fill_marker(record, &mut marker);
        marker
    }
}

impl Ils {
    pub fn from_record(record: &impl Record) -> Self {
        let mut ils = Self::default();
        fill_ils(record, &mut ils);
        ils
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Pos, SqlRecord};
    use insta::assert_compact_debug_snapshot;

    fn frankfurt_vor() -> SqlRecord {
        SqlRecord::new()
            .with("vor_id", 512)
            .with("ident", "FFM")
            .with("region", "ED")
            .with("name", "Frankfurt")
            .with("type", "H")
            .with("frequency", 114200)
            .with("range", 130)
            .with("mag_var", 2.5)
            .with("lonx", 8.63)
            .with("laty", 50.05)
            .with("altitude", 400.0)
    }

    fn nav_record(nav_type: &str, frequency: i32) -> SqlRecord {
        frankfurt_vor()
            .with("nav_type", nav_type)
            .with("frequency", frequency)
    }

    #[test]
    fn vor_from_vor_table() {
        let vor = Vor::from_vor_record(
            &frankfurt_vor()
                .with("dme_only", 0)
                .with("dme_altitude", 410.0),
        );

        assert_eq!(vor.id, 512);
        assert_eq!(vor.ident, "FFM");
        assert_eq!(vor.region, "ED");
        assert_eq!(vor.name, "Frankfurt");
        assert_eq!(vor.kind, "H");
        assert_eq!(vor.frequency, 114200);
        assert_eq!(vor.range, 130);
        assert_eq!(vor.magvar, 2.5);
        assert_eq!(vor.position, Pos::with_altitude(8.63, 50.05, 400.0));
        assert!(!vor.dme_only);
        assert!(vor.has_dme);
    }

    #[test]
    fn vor_dme_columns() {
        let vor = Vor::from_vor_record(&frankfurt_vor().with("dme_only", 1).with("dme_altitude", 0));
        assert!(vor.dme_only);
        assert!(vor.has_dme);

        let vor = Vor::from_vor_record(&frankfurt_vor().with("dme_altitude", None::<f64>));
        assert!(!vor.dme_only);
        assert!(!vor.has_dme);
    }

    #[test]
    fn vor_from_nav_vordme() {
        let vor = Vor::from_nav_record(&nav_record("VORDME", 1132));
        assert_eq!(vor.frequency, 113);
        assert!(!vor.dme_only);
        assert!(vor.has_dme);
    }

    #[test]
    fn vor_from_nav_dme() {
        let vor = Vor::from_nav_record(&nav_record("DME", 1132));
        assert!(vor.dme_only);
        assert!(vor.has_dme);
    }

    #[test]
    fn vor_from_nav_vor() {
        let vor = Vor::from_nav_record(&nav_record("VOR", 1132));
        assert!(!vor.dme_only);
        assert!(!vor.has_dme);
    }

    #[test]
    fn vor_from_nav_frequency_truncates() {
        assert_eq!(Vor::from_nav_record(&nav_record("VOR", 1139)).frequency, 113);
        assert_eq!(Vor::from_nav_record(&nav_record("VOR", 9)).frequency, 0);
        assert_eq!(Vor::from_nav_record(&nav_record("VOR", -19)).frequency, -1);
    }

    #[test]
    fn vor_from_nav_unknown_type_keeps_dme_fields() {
        // Unknown navaid types fall through without touching the DME fields
        let vor = Vor::from_nav_record(&nav_record("TACAN", 1132));
        assert!(!vor.dme_only);
        assert!(!vor.has_dme);
        assert_eq!(vor.frequency, 113);

        let mut vor = Vor {
            dme_only: true,
            has_dme: true,
            ..Default::default()
        };
        fill_vor_from_nav(&nav_record("", 1132), &mut vor);
        assert!(vor.dme_only);
        assert!(vor.has_dme);
    }

    #[test]
    fn ndb() {
        let record = SqlRecord::new()
            .with("ndb_id", 77)
            .with("ident", "CHA")
            .with("region", "ED")
            .with("name", "Charlie")
            .with("type", "HH")
            .with("frequency", 34800)
            .with("range", 25)
            .with("mag_var", 2.0)
            .with("lonx", 8.7)
            .with("laty", 50.1)
            .with("altitude", 650.0);

        let ndb = Ndb::from_record(&record);
        assert_eq!(ndb.id, 77);
        assert_eq!(ndb.ident, "CHA");
        assert_eq!(ndb.kind, "HH");
        assert_eq!(ndb.frequency, 34800);
        assert_eq!(ndb.range, 25);
        assert_eq!(ndb.position, Pos::with_altitude(8.7, 50.1, 650.0));
    }

    fn waypoint_record() -> SqlRecord {
        SqlRecord::new()
            .with("waypoint_id", 9001)
            .with("ident", "UNOKO")
            .with("region", "ED")
            .with("type", "WN")
            .with("mag_var", 2.1)
            .with("lonx", 8.9)
            .with("laty", 49.8)
    }

    #[test]
    fn waypoint_from_waypoint_table() {
        let record = waypoint_record()
            .with("num_victor_airway", 0)
            .with("num_jet_airway", 3)
            .with("waypoint_num_victor_airway", 5);

        let wp = Waypoint::from_waypoint_record(&record);
        assert_eq!(wp.id, 9001);
        assert_eq!(wp.ident, "UNOKO");
        assert_eq!(wp.region, "ED");
        assert_eq!(wp.kind, "WN");
        assert_eq!(wp.magvar, 2.1);
        assert!(!wp.has_victor_airways);
        assert!(wp.has_jet_airways);
        assert_eq!(wp.position, Pos::new(8.9, 49.8));
    }

    #[test]
    fn waypoint_from_nav_table() {
        let record = waypoint_record()
            .with("num_victor_airway", 0)
            .with("waypoint_num_victor_airway", 2)
            .with("waypoint_num_jet_airway", None::<i32>);

        let wp = Waypoint::from_nav_record(&record);
        assert!(wp.has_victor_airways);
        assert!(!wp.has_jet_airways);
    }

    #[test]
    fn marker_heading_rounds() {
        let record = SqlRecord::new()
            .with("marker_id", 4)
            .with("type", "OUTER")
            .with("heading", 249.5)
            .with("lonx", 8.2)
            .with("laty", 49.9);

        assert_compact_debug_snapshot!(
            Marker::from_record(&record),
            @r#"Marker { id: 4, kind: "OUTER", heading: 250, position: Pos { lon: 8.2, lat: 49.9, alt: 0.0 } }"#
        );

        let record = record.with("heading", 249.49);
        assert_eq!(Marker::from_record(&record).heading, 249);
    }

    fn ils_record() -> SqlRecord {
        SqlRecord::new()
            .with("ils_id", 31)
            .with("ident", "IFNE")
            .with("name", "ILS 07C")
            .with("loc_heading", 69.8)
            .with("loc_width", 3.5)
            .with("mag_var", 2.4)
            .with("gs_pitch", 3.0)
            .with("frequency", 110950)
            .with("range", 27)
            .with("dme_range", 27)
            .with("lonx", 8.6)
            .with("laty", 50.04)
            .with("altitude", 360.0)
            .with("end1_lonx", 8.1)
            .with("end1_laty", 49.95)
            .with("end2_lonx", 8.15)
            .with("end2_laty", 49.85)
            .with("end_mid_lonx", 8.12)
            .with("end_mid_laty", 49.9)
    }

    #[test]
    fn ils_bounding_covers_feather() {
        let record = ils_record();

        let ils = Ils::from_record(&record);
        assert_eq!(ils.id, 31);
        assert_eq!(ils.ident, "IFNE");
        assert_eq!(ils.heading, 69.8);
        assert_eq!(ils.width, 3.5);
        assert_eq!(ils.slope, 3.0);
        assert_eq!(ils.frequency, 110950);
        assert!(ils.has_dme);
        assert_eq!(ils.position, Pos::with_altitude(8.6, 50.04, 360.0));
        assert_eq!(ils.posmid, Pos::new(8.12, 49.9));
        assert_eq!(ils.bounding, Rect::new(8.1, 50.04, 8.6, 49.85));

        let ils = Ils::from_record(&record.with("dme_range", 0));
        assert!(!ils.has_dme);
    }

    #[test]
    fn missing_columns_give_defaults() {
        let empty = SqlRecord::new();

        assert_eq!(Vor::from_vor_record(&empty), Vor::default());
        assert_eq!(Ndb::from_record(&empty), Ndb::default());
        assert_eq!(Waypoint::from_nav_record(&empty), Waypoint::default());
        assert_eq!(Marker::from_record(&empty), Marker::default());
        assert_eq!(Ils::from_record(&empty), Ils::default());
    }

    #[test]
    fn idempotent() {
        let record = nav_record("VORDME", 1141);
        assert_eq!(Vor::from_nav_record(&record), Vor::from_nav_record(&record));

        let record = ils_record();
        assert_eq!(Ils::from_record(&record), Ils::from_record(&record));
    }
}
