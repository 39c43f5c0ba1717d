use crate::types::Pos;

/// Bounding rectangle for geographic areas
///
/// Represents a rectangular area defined by longitude and latitude bounds
/// in degrees.
///
/// # Limitations
///
/// **Anti-meridian handling**: Simple min/max logic is used, so an object
/// crossing the ±180° longitude line (e.g. an airway segment over the Pacific)
/// produces a rectangle spanning nearly the entire globe instead of the
/// actual smaller region.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub left: f32,   // west longitude
    pub top: f32,    // north latitude
    pub right: f32,  // east longitude
    pub bottom: f32, // south latitude
}

impl Rect {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a rectangle from a slice of positions
    ///
    /// Returns `None` if the slice is empty.
    pub fn from_points(points: &[Pos]) -> Option<Self> {
        let (first, rest) = points.split_first()?;

        let mut rect = Self::from(*first);
        for &point in rest {
            rect.extend(point);
        }
        Some(rect)
    }

    /// Extend rectangle to include a position
    ///
    /// Grows the rectangle if necessary to encompass the given position.
    /// If the position is already inside, no change is made.
    pub fn extend(&mut self, point: Pos) {
        self.left = self.left.min(point.lon);
        self.right = self.right.max(point.lon);
        self.top = self.top.max(point.lat);
        self.bottom = self.bottom.min(point.lat);
    }

    /// Merge another rectangle into this one
    pub fn merge(&mut self, other: Rect) {
        self.left = self.left.min(other.left);
        self.right = self.right.max(other.right);
        self.top = self.top.max(other.top);
        self.bottom = self.bottom.min(other.bottom);
    }

    /// Check if a position lies inside or on the edge of the rectangle
    pub fn contains(&self, point: Pos) -> bool {
        (self.left..=self.right).contains(&point.lon)
            && (self.bottom..=self.top).contains(&point.lat)
    }

    pub fn center(&self) -> Pos {
        Pos::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }
}

impl From<Pos> for Rect {
    fn from(point: Pos) -> Self {
        Self {
            left: point.lon,
            top: point.lat,
            right: point.lon,
            bottom: point.lat,
        }
    }
}
