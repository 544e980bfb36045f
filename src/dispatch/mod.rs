//! Capture during the physics step, delivery after it.

mod aggregator;
mod dispatcher;

pub use self::aggregator::{ContactAggregator, ContactRecorder};
pub use self::dispatcher::{notify_objects, CallbackKind, DispatchReport};
