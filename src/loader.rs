//! Generation-guarded slots for asynchronously loaded resources.
//!
//! A load begins by taking a [`LoadTicket`] from the slot, which bumps the
//! slot's generation. When the load finishes the ticket is handed back with
//! the result. If another load began (or the slot was reset) in between, the
//! ticket no longer matches and the result is dropped, so a slow early load
//! can never overwrite a faster later one.

#[cfg(test)]
#[path = "loader_test.rs"]
mod loader_test;

/// Generation captured when a load began.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadTicket(u32);

impl LoadTicket {
    /// Raw generation, for passing across the JS boundary.
    #[must_use]
    pub fn generation(self) -> u32 {
        self.0
    }

    /// Rebuild a ticket from a raw generation received from JS.
    #[must_use]
    pub fn from_generation(generation: u32) -> Self {
        Self(generation)
    }
}

/// Result of handing a finished load back to its slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The ticket was current; the value is now live.
    Applied,
    /// A newer load began after this one; the value was discarded.
    Stale,
}

/// Holds the live value of one resource and the generation of its latest load.
#[derive(Debug, Clone)]
pub struct ResourceSlot<T> {
    generation: u32,
    current: Option<T>,
}

impl<T> Default for ResourceSlot<T> {
    fn default() -> Self {
        Self { generation: 0, current: None }
    }
}

impl<T> ResourceSlot<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a load, invalidating every ticket issued before it.
    pub fn begin(&mut self) -> LoadTicket {
        self.generation = self.generation.wrapping_add(1);
        LoadTicket(self.generation)
    }

    /// Whether `ticket` belongs to the latest load.
    #[must_use]
    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Finish the load identified by `ticket`.
    pub fn complete(&mut self, ticket: LoadTicket, value: T) -> LoadOutcome {
        if !self.is_current(ticket) {
            return LoadOutcome::Stale;
        }
        self.current = Some(value);
        LoadOutcome::Applied
    }

    /// Drop the live value and invalidate any load in flight.
    pub fn reset(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.current = None;
    }

    /// The live value, if a load has been applied.
    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }
}
