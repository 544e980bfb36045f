use std::collections::HashMap;
use crate::core::ObjectId;
use crate::error::ContactError;
use crate::Result;

/// Generic handle-keyed storage
pub trait Storage<T, H> {
    /// Creates a new empty storage
    fn new() -> Self;

    /// Adds an item and returns its handle
    fn add(&mut self, item: T) -> H;

    fn get(&self, handle: H) -> Option<&T>;

    fn get_mut(&mut self, handle: H) -> Option<&mut T>;

    /// Removes an item, returning it if it was present
    fn remove(&mut self, handle: H) -> Option<T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool;

    fn clear(&mut self);

    /// Returns all live handles, in no particular order
    fn handles(&self) -> Vec<H>;
}

/// Storage for game objects that can own physics bodies
pub struct ObjectStorage<T> {
    items: HashMap<ObjectId, T>,
    next_id: u32,
}

impl<T> Storage<T, ObjectId> for ObjectStorage<T> {
    fn new() -> Self {
        Self {
            items: HashMap::new(),
            next_id: 1, // 0 is never handed out
        }
    }

    fn add(&mut self, item: T) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        self.items.insert(id, item);
        id
    }

    fn get(&self, handle: ObjectId) -> Option<&T> {
        self.items.get(&handle)
    }

    fn get_mut(&mut self, handle: ObjectId) -> Option<&mut T> {
        self.items.get_mut(&handle)
    }

    fn remove(&mut self, handle: ObjectId) -> Option<T> {
        self.items.remove(&handle)
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn clear(&mut self) {
        self.items.clear();
    }

    fn handles(&self) -> Vec<ObjectId> {
        self.items.keys().copied().collect()
    }
}

impl<T> ObjectStorage<T> {
    /// Gets an object by its id, returning an error if not found
    pub fn get_object(&self, id: ObjectId) -> Result<&T> {
        self.get(id)
            .ok_or_else(|| ContactError::ResourceNotFound(format!("Object {} not found", id)))
    }

    /// Gets a mutable reference to an object, returning an error if not found
    pub fn get_object_mut(&mut self, id: ObjectId) -> Result<&mut T> {
        self.get_mut(id)
            .ok_or_else(|| ContactError::ResourceNotFound(format!("Object {} not found", id)))
    }
}

impl<T> Default for ObjectStorage<T> {
    fn default() -> Self {
        <Self as Storage<T, ObjectId>>::new()
    }
}
