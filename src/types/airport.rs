use crate::{AirportFlag, AirportFlags, Pos, Rect};

/// Airport as shown on the map and in the information panels
///
/// Populated by [`fill_airport`](crate::fill::fill_airport) or
/// [`fill_airport_for_overview`](crate::fill::fill_airport_for_overview).
/// Frequencies are stored as read from the database (kHz).
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Airport {
    pub id: i32,
    pub ident: String,
    pub name: String,

    /// Altitude is the airport elevation, only set for complete reads
    pub position: Pos,
    /// Only set for complete reads
    pub bounding: Option<Rect>,
    pub tower_coords: Option<Pos>,

    pub flags: AirportFlags,

    pub tower_frequency: i32,
    pub atis_frequency: i32,
    pub awos_frequency: i32,
    pub asos_frequency: i32,
    pub unicom_frequency: i32,

    pub longest_runway_length: i32,
    pub longest_runway_heading: i32,
    pub magvar: f32,
}

impl Airport {
    pub fn has_flag(&self, flag: AirportFlag) -> bool {
        self.flags.contains(flag)
    }

    /// Check for the complete flag
    ///
    /// [`fill_airport`](crate::fill::fill_airport) replaces the flags after
    /// setting it, so airports read through the mappers report `false`.
    pub fn is_complete(&self) -> bool {
        self.has_flag(AirportFlag::Complete)
    }

    pub fn is_closed(&self) -> bool {
        self.has_flag(AirportFlag::Closed)
    }

    pub fn is_military(&self) -> bool {
        self.has_flag(AirportFlag::Military)
    }

    pub fn is_addon(&self) -> bool {
        self.has_flag(AirportFlag::Addon)
    }

    pub fn has_hard_runways(&self) -> bool {
        self.has_flag(AirportFlag::HardRunway)
    }

    pub fn has_soft_runways(&self) -> bool {
        self.has_flag(AirportFlag::SoftRunway)
    }

    pub fn has_water_runways(&self) -> bool {
        self.has_flag(AirportFlag::WaterRunway)
    }

    pub fn has_helipad(&self) -> bool {
        self.has_flag(AirportFlag::Helipad)
    }

    pub fn has_any_fuel(&self) -> bool {
        self.flags
            .contains_any(&[AirportFlag::Avgas, AirportFlag::JetFuel])
    }

    pub fn has_tower(&self) -> bool {
        self.has_flag(AirportFlag::Tower)
    }

    /// Check if the airport has no ground infrastructure worth drawing
    ///
    /// True when there is no apron, taxiway, parking stand or tower object.
    pub fn is_empty(&self) -> bool {
        !self.flags.contains_any(&[
            AirportFlag::Apron,
            AirportFlag::Taxiway,
            AirportFlag::Parking,
            AirportFlag::TowerObject,
        ])
    }
}
