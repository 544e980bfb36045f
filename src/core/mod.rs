pub mod config;
pub mod storage;
pub mod events;
pub mod object;

pub use self::config::ContactConfig;
pub use self::storage::{ObjectStorage, Storage};
pub use self::events::ContactQueue;
pub use self::object::{
    ContactCallback, ContactCallbacks, ContactHandler, ContactReport, ObjectRegistry,
};

use std::fmt;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Identity of a game object that owns a physics body.
///
/// This is what the engine stores in a body's user-data slot. It is a plain
/// handle: records hold it without keeping the object alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct ObjectId(pub(crate) u32);

impl ObjectId {
    /// Raw numeric value of the handle
    pub fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
