mod contact;
mod contact_manager;
mod contact_manifold;
mod contact_pair;
mod contact_record;
mod direction;

pub use self::contact::{Body, Contact, Fixture, FixtureSide};
pub use self::contact_manager::{
    ContactListener, ContactManager, ListenerId, SharedListener, Subscription,
};
pub use self::contact_manifold::{
    ContactImpulse, Manifold, ManifoldPoint, ManifoldType, WorldManifold, MAX_MANIFOLD_POINTS,
};
pub use self::contact_pair::ContactPair;
pub use self::contact_record::{ContactPhase, ContactRecord};
pub use self::direction::Direction;
