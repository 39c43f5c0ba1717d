use crate::{Pos, Rect};

/// VHF omnidirectional range, including DME-only stations
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vor {
    pub id: i32,
    pub ident: String,
    pub region: String,
    pub name: String,
    /// Class code (e.g. `H`, `L`, `T`)
    pub kind: String,
    /// Frequency in kHz
    pub frequency: i32,
    /// Range in nautical miles
    pub range: i32,
    pub magvar: f32,
    pub position: Pos,
    pub dme_only: bool,
    pub has_dme: bool,
}

/// Non-directional beacon
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ndb {
    pub id: i32,
    pub ident: String,
    pub region: String,
    pub name: String,
    pub kind: String,
    /// Frequency in 0.01 kHz
    pub frequency: i32,
    pub range: i32,
    pub magvar: f32,
    pub position: Pos,
}

/// Enroute or terminal waypoint
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint {
    pub id: i32,
    pub ident: String,
    pub region: String,
    pub kind: String,
    pub magvar: f32,
    pub has_victor_airways: bool,
    pub has_jet_airways: bool,
    pub position: Pos,
}

/// Marker beacon
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Marker {
    pub id: i32,
    pub kind: String,
    /// Heading in whole degrees
    pub heading: i32,
    pub position: Pos,
}

/// Instrument landing system
///
/// `pos1` and `pos2` are the far corners of the localizer feather and
/// `posmid` the middle of its far edge.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ils {
    pub id: i32,
    pub ident: String,
    pub name: String,
    /// Localizer heading in degrees true
    pub heading: f32,
    /// Localizer width in degrees
    pub width: f32,
    pub magvar: f32,
    /// Glideslope pitch in degrees
    pub slope: f32,
    pub frequency: i32,
    pub range: i32,
    pub has_dme: bool,
    pub position: Pos,
    pub pos1: Pos,
    pub pos2: Pos,
    pub posmid: Pos,
    pub bounding: Rect,
}
