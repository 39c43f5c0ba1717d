use crate::Pos;

/// Runway of an airport
///
/// Lengths, widths, offsets, blast pads and overruns are in feet. The detail
/// fields are zero when the runway was read for an overview.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Runway {
    pub surface: String,
    pub primary_name: String,
    pub secondary_name: String,
    pub edge_light: String,

    pub length: i32,
    pub heading: f32,
    pub width: i32,

    pub primary_offset: i32,
    pub secondary_offset: i32,
    pub primary_blast_pad: i32,
    pub secondary_blast_pad: i32,
    pub primary_overrun: i32,
    pub secondary_overrun: i32,
    pub primary_closed: bool,
    pub secondary_closed: bool,

    /// Runway center
    pub position: Pos,
    pub primary_position: Pos,
    pub secondary_position: Pos,
}
