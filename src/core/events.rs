use crate::collision::{ContactPair, ContactPhase};
use crate::core::ObjectId;
use crate::error::ContactError;
use crate::Result;
use std::collections::VecDeque;

/// FIFO buffer of captured contact pairs awaiting dispatch.
///
/// Only `Begin` and `End` pairs are accepted; everything queued here is
/// consumed by exactly one drain.
#[derive(Debug, Default)]
pub struct ContactQueue {
    pairs: VecDeque<ContactPair>,
}

impl ContactQueue {
    /// Creates a new empty queue
    pub fn new() -> Self {
        Self {
            pairs: VecDeque::new(),
        }
    }

    /// Creates an empty queue with room for `capacity` pairs
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pairs: VecDeque::with_capacity(capacity),
        }
    }

    /// Appends a pair to the back of the queue
    pub fn push(&mut self, pair: ContactPair) -> Result<()> {
        let phase = pair.phase();
        if !phase.is_routable() {
            return Err(ContactError::UnroutablePhase(phase));
        }
        self.pairs.push_back(pair);
        Ok(())
    }

    /// Moves every queued pair out, leaving the queue empty
    pub fn take_all(&mut self) -> VecDeque<ContactPair> {
        std::mem::take(&mut self.pairs)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterates the queued pairs in arrival order
    pub fn iter(&self) -> impl Iterator<Item = &ContactPair> {
        self.pairs.iter()
    }

    /// Gets all queued pairs of a specific phase
    pub fn pairs_of_phase(&self, phase: ContactPhase) -> Vec<&ContactPair> {
        self.pairs.iter().filter(|p| p.phase() == phase).collect()
    }

    /// Gets all queued pairs involving a specific object
    pub fn pairs_for_object(&self, object: ObjectId) -> Vec<&ContactPair> {
        self.pairs.iter().filter(|p| p.contains(object)).collect()
    }
}
