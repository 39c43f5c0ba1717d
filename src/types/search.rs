use crate::error::{Error, Result};
use crate::{Airport, Airway, Ils, MapObjectType, Marker, Ndb, Parking, StartPosition, Vor, Waypoint};

/// Reference to a map object by database id and kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapObjectRef {
    pub id: i32,
    pub kind: MapObjectType,
}

/// Map objects collected for one search, map click or selection
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapSearchResult {
    pub airports: Vec<Airport>,
    pub vors: Vec<Vor>,
    pub ndbs: Vec<Ndb>,
    pub waypoints: Vec<Waypoint>,
    pub airways: Vec<Airway>,
    pub ils: Vec<Ils>,
    pub markers: Vec<Marker>,
    pub parkings: Vec<Parking>,
    pub starts: Vec<StartPosition>,
}

impl MapSearchResult {
    /// Total number of objects
    pub fn len(&self) -> usize {
        self.airports.len()
            + self.vors.len()
            + self.ndbs.len()
            + self.waypoints.len()
            + self.airways.len()
            + self.ils.len()
            + self.markers.len()
            + self.parkings.len()
            + self.starts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// References to all contained objects
    ///
    /// Airports come first, followed by VORs, NDBs, waypoints, airways, ILS,
    /// markers, parking and start positions, each in list order.
    pub fn object_refs(&self) -> Vec<MapObjectRef> {
        fn refs<'a, T: 'a>(
            items: &'a [T],
            kind: MapObjectType,
            id: impl Fn(&T) -> i32 + 'a,
        ) -> impl Iterator<Item = MapObjectRef> + 'a {
            items.iter().map(move |item| MapObjectRef { id: id(item), kind })
        }

        let mut result = Vec::with_capacity(self.len());
        result.extend(refs(&self.airports, MapObjectType::Airport, |o| o.id));
        result.extend(refs(&self.vors, MapObjectType::Vor, |o| o.id));
        result.extend(refs(&self.ndbs, MapObjectType::Ndb, |o| o.id));
        result.extend(refs(&self.waypoints, MapObjectType::Waypoint, |o| o.id));
        result.extend(refs(&self.airways, MapObjectType::Airway, |o| o.id));
        result.extend(refs(&self.ils, MapObjectType::Ils, |o| o.id));
        result.extend(refs(&self.markers, MapObjectType::Marker, |o| o.id));
        result.extend(refs(&self.parkings, MapObjectType::Parking, |o| o.id));
        result.extend(refs(&self.starts, MapObjectType::Start, |o| o.id));
        result
    }
}

/// Encode references as `id;type;id;type...` using the type codes
pub fn format_object_refs(refs: &[MapObjectRef]) -> String {
    refs.iter()
        .map(|r| format!("{};{}", r.id, r.kind.code()))
        .collect::<Vec<_>>()
        .join(";")
}

/// Parse a reference list written by [`format_object_refs`]
///
/// Empty parts are skipped, so an empty string yields an empty list.
pub fn parse_object_refs(text: &str) -> Result<Vec<MapObjectRef>> {
    let parts: Vec<&str> = text.split(';').filter(|part| !part.is_empty()).collect();

    parts
        .chunks(2)
        .map(|pair| match *pair {
            [id, code] => {
                let id = id
                    .trim()
                    .parse::<i32>()
                    .map_err(|_| Error::InvalidObjectRef(format!("invalid id {id:?}")))?;
                let kind = code
                    .trim()
                    .parse::<u32>()
                    .ok()
                    .and_then(MapObjectType::from_code)
                    .ok_or_else(|| Error::InvalidObjectRef(format!("invalid type {code:?}")))?;
                Ok(MapObjectRef { id, kind })
            }
            _ => Err(Error::InvalidObjectRef(format!(
                "id {:?} without type",
                pair[0]
            ))),
        })
        .collect()
}
