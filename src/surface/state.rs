use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;

/// Per-slide mutable state, keyed by type.
///
/// Created empty on every slide entry and dropped on exit: revisiting a slide
/// never observes a previous visit's fields. Owned exclusively by the active
/// slide's hooks; since only one draw loop is ever alive there are no
/// concurrent writers.
#[derive(Default)]
pub struct StateBag {
    slots: HashMap<TypeId, Box<dyn Any>>,
}

impl StateBag {
    /// An empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value, returning the previously stored value of the same type.
    pub fn insert<T: 'static>(&mut self, value: T) -> Option<T> {
        self.slots
            .insert(TypeId::of::<T>(), Box::new(value))
            .and_then(|prev| prev.downcast::<T>().ok())
            .map(|b| *b)
    }

    /// Shared access to the stored value of type `T`.
    pub fn get<T: 'static>(&self) -> Option<&T> {
        self.slots
            .get(&TypeId::of::<T>())
            .and_then(|slot| slot.downcast_ref())
    }

    /// Mutable access to the stored value of type `T`.
    pub fn get_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.slots
            .get_mut(&TypeId::of::<T>())
            .and_then(|slot| slot.downcast_mut())
    }

    /// Mutable access to the value of type `T`, inserting one first if absent.
    pub fn get_or_insert_with<T: 'static>(&mut self, init: impl FnOnce() -> T) -> &mut T {
        self.slots
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Box::new(init()))
            .downcast_mut()
            .expect("slot value matches its TypeId key")
    }

    /// Mutable access to the value of type `T`, inserting `T::default()` if
    /// absent.
    pub fn get_or_default<T: Default + 'static>(&mut self) -> &mut T {
        self.get_or_insert_with(T::default)
    }

    /// Remove and return the stored value of type `T`.
    pub fn remove<T: 'static>(&mut self) -> Option<T> {
        self.slots
            .remove(&TypeId::of::<T>())
            .and_then(|slot| slot.downcast::<T>().ok())
            .map(|b| *b)
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// `true` when nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl fmt::Debug for StateBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateBag")
            .field("slots", &self.slots.len())
            .finish()
    }
}
