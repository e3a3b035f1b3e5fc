//! Apples and the handle-based apple store.
//!
//! Apples are referenced by generational [`AppleId`] handles rather than
//! indices or shared pointers, so a handle held across a removal can be
//! detected as stale instead of dangling. The store iterates in insertion
//! order, which is the order perception scans in.

use glam::Vec2;
use slotmap::{SlotMap, new_key_type};
use thiserror::Error;

new_key_type! {
    /// Stable generational handle for apples in an [`AppleStore`].
    pub struct AppleId;
}

/// Signaled when consuming an apple that is already taken or no longer
/// exists.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("apple {0:?} has already been eaten or removed")]
pub struct StaleApple(pub AppleId);

/// A food item that people can eat.
#[derive(Debug, Clone)]
pub struct Apple {
    pos: Vec2,
    energy: f32,
    taken: bool,
}

impl Apple {
    /// Creates an apple at a fixed position with the energy it will yield.
    pub fn new(pos: Vec2, energy: f32) -> Self {
        Self {
            pos,
            energy,
            taken: false,
        }
    }

    /// Position of the apple, fixed at creation.
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    /// Energy this apple yields when eaten.
    pub fn energy(&self) -> f32 {
        self.energy
    }

    /// Whether the apple has already been eaten this tick.
    ///
    /// Taken apples stay in the store until the next [`AppleStore::sweep`]
    /// so that handles held by other people resolve as stale rather than
    /// silently reusing a slot.
    pub fn is_taken(&self) -> bool {
        self.taken
    }
}

/// Insertion-ordered container handing out generational apple handles.
#[derive(Debug, Default)]
pub struct AppleStore {
    slots: SlotMap<AppleId, Apple>,
    order: Vec<AppleId>,
}

impl AppleStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of apples still present, taken ones included until the sweep.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true when no apples are stored.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of apples that can still be eaten.
    pub fn available(&self) -> usize {
        self.slots.values().filter(|apple| !apple.taken).count()
    }

    /// Inserts an apple and returns its handle.
    pub fn insert(&mut self, apple: Apple) -> AppleId {
        let id = self.slots.insert(apple);
        self.order.push(id);
        id
    }

    /// Looks up an apple by handle.
    pub fn get(&self, id: AppleId) -> Option<&Apple> {
        self.slots.get(id)
    }

    /// Returns true if `id` refers to an apple still in the store.
    pub fn contains(&self, id: AppleId) -> bool {
        self.slots.contains_key(id)
    }

    /// Iterates over apples in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (AppleId, &Apple)> + '_ {
        self.order
            .iter()
            .filter_map(|&id| self.slots.get(id).map(|apple| (id, apple)))
    }

    /// Consumes the apple behind `id`, returning its energy.
    ///
    /// Marks the apple taken exactly once; a second claim, or a claim on a
    /// swept handle, yields [`StaleApple`].
    pub fn take(&mut self, id: AppleId) -> Result<f32, StaleApple> {
        match self.slots.get_mut(id) {
            Some(apple) if !apple.taken => {
                apple.taken = true;
                Ok(apple.energy)
            }
            _ => Err(StaleApple(id)),
        }
    }

    /// Removes all taken apples, returning how many were swept.
    pub fn sweep(&mut self) -> usize {
        let before = self.order.len();
        self.slots.retain(|_, apple| !apple.taken);
        let slots = &self.slots;
        self.order.retain(|id| slots.contains_key(*id));
        before - self.order.len()
    }
}
