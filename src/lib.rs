//! Deferred collision notifications for 2D physics engines.
//!
//! Contact hooks fire while the physics world is mid-step, where touching
//! game state is unsafe. A [`ContactAggregator`] subscribes to the engine's
//! [`ContactManager`], snapshots every begin/end contact into a
//! [`ContactPair`], and replays the buffered pairs to the colliding objects
//! once the step is over:
//!
//! ```
//! use phys_contacts::{
//!     ContactAggregator, ContactCallbacks, ContactManager, ObjectStorage, Storage,
//! };
//!
//! let manager = ContactManager::new();
//! let aggregator = ContactAggregator::new(&manager);
//! let mut objects: ObjectStorage<ContactCallbacks> = ObjectStorage::new();
//! let _player = objects.add(ContactCallbacks::new());
//!
//! // ... the engine steps and fires `manager.begin_contact(..)` ...
//!
//! let report = aggregator.drain_and_notify(&mut objects);
//! assert_eq!(report.pairs, 0);
//! ```

pub mod math;
pub mod core;
pub mod collision;
pub mod dispatch;

pub use crate::core::{
    ContactCallbacks, ContactConfig, ContactHandler, ContactQueue, ContactReport, ObjectId,
    ObjectRegistry, ObjectStorage, Storage,
};
pub use crate::collision::{
    Body, Contact, ContactListener, ContactManager, ContactPair, ContactPhase, ContactRecord,
    Direction, Fixture, FixtureSide, Manifold, Subscription, WorldManifold,
};
pub use crate::dispatch::{CallbackKind, ContactAggregator, DispatchReport};
pub use crate::math::{Transform2, Vector2};

/// Error types for contact capture and dispatch
pub mod error {
    use crate::collision::{ContactPhase, FixtureSide};
    use thiserror::Error;

    #[derive(Error, Debug, Clone, PartialEq)]
    pub enum ContactError {
        /// A fixture's body carries no game object in its user-data slot
        #[error("fixture {0} belongs to a body without an owning object")]
        MissingSubject(FixtureSide),

        #[error("contact phase {0:?} is never dispatched and cannot be queued")]
        UnroutablePhase(ContactPhase),

        /// The engine stepped from inside a notification callback
        #[error("physics stepped while contact notifications were being dispatched")]
        ReentrantStep,

        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),

        #[error("Resource not found: {0}")]
        ResourceNotFound(String),
    }
}

/// Result type for contact operations
pub type Result<T> = std::result::Result<T, error::ContactError>;

/// Crate version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
