use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Single airport capability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AirportFlag {
    Helipad,
    Avgas,
    JetFuel,
    Tower,
    Closed,
    Military,
    Addon,
    HardRunway,
    SoftRunway,
    WaterRunway,
    Lighted,
    Ils,
    Approach,
    Apron,
    Taxiway,
    TowerObject,
    Parking,
    Vasi,
    Als,
    Fence,
    ClosedRunway,
    /// Set by the base pass of a complete read and cleared by the flag pass
    /// that follows it
    Complete,
}

impl AirportFlag {
    pub const ALL: [AirportFlag; 22] = [
        AirportFlag::Helipad,
        AirportFlag::Avgas,
        AirportFlag::JetFuel,
        AirportFlag::Tower,
        AirportFlag::Closed,
        AirportFlag::Military,
        AirportFlag::Addon,
        AirportFlag::HardRunway,
        AirportFlag::SoftRunway,
        AirportFlag::WaterRunway,
        AirportFlag::Lighted,
        AirportFlag::Ils,
        AirportFlag::Approach,
        AirportFlag::Apron,
        AirportFlag::Taxiway,
        AirportFlag::TowerObject,
        AirportFlag::Parking,
        AirportFlag::Vasi,
        AirportFlag::Als,
        AirportFlag::Fence,
        AirportFlag::ClosedRunway,
        AirportFlag::Complete,
    ];

    fn bit(self) -> u32 {
        1 << self as u32
    }
}

/// Set of airport capabilities
///
/// Stored as a bitmask; each [`AirportFlag`] occupies one bit. Serialized as
/// the raw bits, deserialized through [`AirportFlags::from_bits`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "u32")
)]
pub struct AirportFlags(u32);

impl AirportFlags {
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Create from raw bits, dropping bits that map to no flag
    pub fn from_bits(bits: u32) -> Self {
        Self(bits & ((1 << AirportFlag::ALL.len()) - 1))
    }

    pub fn bits(&self) -> u32 {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn contains(&self, flag: AirportFlag) -> bool {
        self.0 & flag.bit() != 0
    }

    /// Check if at least one of the given flags is set
    pub fn contains_any(&self, flags: &[AirportFlag]) -> bool {
        flags.iter().any(|&flag| self.contains(flag))
    }

    pub fn insert(&mut self, flag: AirportFlag) {
        self.0 |= flag.bit();
    }

    pub fn remove(&mut self, flag: AirportFlag) {
        self.0 &= !flag.bit();
    }

    /// Iterate over set flags in declaration order
    pub fn iter(&self) -> impl Iterator<Item = AirportFlag> {
        let flags = *self;
        AirportFlag::ALL
            .into_iter()
            .filter(move |&flag| flags.contains(flag))
    }
}

impl From<u32> for AirportFlags {
    fn from(bits: u32) -> Self {
        Self::from_bits(bits)
    }
}

impl From<AirportFlag> for AirportFlags {
    fn from(flag: AirportFlag) -> Self {
        Self(flag.bit())
    }
}

impl FromIterator<AirportFlag> for AirportFlags {
    fn from_iter<I: IntoIterator<Item = AirportFlag>>(iter: I) -> Self {
        let mut flags = Self::empty();
        for flag in iter {
            flags.insert(flag);
        }
        flags
    }
}

impl BitOr for AirportFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOr<AirportFlag> for AirportFlags {
    type Output = Self;

    fn bitor(self, rhs: AirportFlag) -> Self {
        Self(self.0 | rhs.bit())
    }
}

impl BitOrAssign for AirportFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitOrAssign<AirportFlag> for AirportFlags {
    fn bitor_assign(&mut self, rhs: AirportFlag) {
        self.insert(rhs);
    }
}

impl fmt::Debug for AirportFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
