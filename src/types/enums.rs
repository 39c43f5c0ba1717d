/// Airway route structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AirwayType {
    #[default]
    Unknown,
    /// Low altitude airway
    Victor,
    /// High altitude airway
    Jet,
    /// Segment shared by low and high altitude structure
    Both,
}

impl AirwayType {
    /// Parse from the `airway_type` column value
    pub fn from_code(code: &str) -> Self {
        match code {
            "VICTOR" => AirwayType::Victor,
            "JET" => AirwayType::Jet,
            "BOTH" => AirwayType::Both,
            _ => AirwayType::Unknown,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AirwayType::Unknown => "",
            AirwayType::Victor => "VICTOR",
            AirwayType::Jet => "JET",
            AirwayType::Both => "BOTH",
        }
    }
}

/// Kind of map object
///
/// The integer codes are stable and used in stored object reference lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MapObjectType {
    Airport,
    Runway,
    Vor,
    Ndb,
    Waypoint,
    Airway,
    Marker,
    Ils,
    Parking,
    Start,
}

impl MapObjectType {
    pub fn code(&self) -> u32 {
        match self {
            MapObjectType::Airport => 0x0001,
            MapObjectType::Runway => 0x0002,
            MapObjectType::Vor => 0x0004,
            MapObjectType::Ndb => 0x0008,
            MapObjectType::Waypoint => 0x0010,
            MapObjectType::Airway => 0x0020,
            MapObjectType::Marker => 0x0040,
            MapObjectType::Ils => 0x0080,
            MapObjectType::Parking => 0x0100,
            MapObjectType::Start => 0x0200,
        }
    }

    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0x0001 => Some(MapObjectType::Airport),
            0x0002 => Some(MapObjectType::Runway),
            0x0004 => Some(MapObjectType::Vor),
            0x0008 => Some(MapObjectType::Ndb),
            0x0010 => Some(MapObjectType::Waypoint),
            0x0020 => Some(MapObjectType::Airway),
            0x0040 => Some(MapObjectType::Marker),
            0x0080 => Some(MapObjectType::Ils),
            0x0100 => Some(MapObjectType::Parking),
            0x0200 => Some(MapObjectType::Start),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_none, assert_some_eq};

    #[test]
    fn airway_type_from_code() {
        assert_eq!(AirwayType::from_code("VICTOR"), AirwayType::Victor);
        assert_eq!(AirwayType::from_code("JET"), AirwayType::Jet);
        assert_eq!(AirwayType::from_code("BOTH"), AirwayType::Both);
        assert_eq!(AirwayType::from_code("victor"), AirwayType::Unknown);
        assert_eq!(AirwayType::from_code(""), AirwayType::Unknown);
    }

    #[test]
    fn airway_type_code_round_trip() {
        for airway_type in [AirwayType::Victor, AirwayType::Jet, AirwayType::Both] {
            assert_eq!(AirwayType::from_code(airway_type.code()), airway_type);
        }
    }

    #[test]
    fn map_object_type_codes() {
        assert_some_eq!(MapObjectType::from_code(0x0001), MapObjectType::Airport);
        assert_some_eq!(MapObjectType::from_code(0x0020), MapObjectType::Airway);
        assert_some_eq!(MapObjectType::from_code(0x0200), MapObjectType::Start);
        assert_none!(MapObjectType::from_code(0));
        assert_none!(MapObjectType::from_code(0x0003));
        assert_eq!(MapObjectType::Ndb.code(), 0x0008);
    }
}
