use crate::Pos;

/// Parking stand or gate
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parking {
    pub id: i32,
    pub airport_id: i32,
    pub kind: String,
    pub name: String,
    /// Comma separated ICAO airline codes
    pub airline_codes: String,
    pub position: Pos,
    pub jetway: bool,
    pub number: i32,
    /// Heading in whole degrees
    pub heading: i32,
    /// Radius in whole feet
    pub radius: i32,
}

/// Start position on a runway or helipad
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StartPosition {
    pub id: i32,
    pub airport_id: i32,
    pub kind: String,
    pub runway_name: String,
    pub helipad_number: i32,
    pub position: Pos,
    /// Heading in whole degrees
    pub heading: i32,
}
