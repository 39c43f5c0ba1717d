use crate::{AirwayType, Pos, Rect};

/// One segment of an airway between two waypoints
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Airway {
    pub id: i32,
    pub kind: AirwayType,
    pub name: String,
    /// Minimum enroute altitude in feet
    pub min_altitude: i32,
    /// Airways with gaps are split into numbered fragments
    pub fragment: i32,
    /// Position of this segment within its fragment
    pub sequence: i32,
    pub from_waypoint_id: i32,
    pub to_waypoint_id: i32,
    pub from: Pos,
    pub to: Pos,
    pub bounding: Rect,
}
