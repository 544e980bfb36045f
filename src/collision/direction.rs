use bitflags::bitflags;
use crate::math::Vector2;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

bitflags! {
    /// The faces of an object involved in a contact.
    ///
    /// Only exactly axis-aligned normals produce flags, so slopes and rounded
    /// corners classify to the empty set.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
    pub struct Direction: u8 {
        const TOP    = 0b0001;
        const BOTTOM = 0b0010;
        const LEFT   = 0b0100;
        const RIGHT  = 0b1000;
    }
}

impl Direction {
    /// Classifies a contact normal as seen from one side of the contact.
    ///
    /// Each axis is checked independently, so a normal with both components
    /// at exactly +/-1 yields two flags.
    pub fn from_normal(normal: Vector2) -> Self {
        let mut direction = Self::empty();

        // Exact comparisons: the engine emits exact unit axes for flat faces.
        if normal.y == 1.0 {
            direction |= Self::TOP;
        } else if normal.y == -1.0 {
            direction |= Self::BOTTOM;
        }

        if normal.x == 1.0 {
            direction |= Self::LEFT;
        } else if normal.x == -1.0 {
            direction |= Self::RIGHT;
        }

        direction
    }

    /// The flags the partner of a contact sees
    pub fn mirrored(self) -> Self {
        let mut mirrored = Self::empty();
        if self.contains(Self::TOP) {
            mirrored |= Self::BOTTOM;
        }
        if self.contains(Self::BOTTOM) {
            mirrored |= Self::TOP;
        }
        if self.contains(Self::LEFT) {
            mirrored |= Self::RIGHT;
        }
        if self.contains(Self::RIGHT) {
            mirrored |= Self::LEFT;
        }
        mirrored
    }
}
