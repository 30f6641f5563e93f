//! Bounded memory of accepted states.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};

use super::config::Eviction;
use crate::state::State;

/// FIFO-ordered record of recently accepted states.
///
/// Entries are held in arrival order next to a multiplicity map, so a
/// membership test is a hash lookup with full value equality. The same
/// state may be held several times; it stays tabu until its last copy is
/// evicted.
#[derive(Debug, Clone)]
pub struct TabuList {
    queue: VecDeque<State>,
    counts: HashMap<State, usize>,
    max_size: usize,
    eviction: Eviction,
}

impl TabuList {
    /// Creates an empty list holding at most `max_size` states.
    pub fn new(max_size: usize, eviction: Eviction) -> Self {
        Self {
            queue: VecDeque::with_capacity(max_size.saturating_add(1)),
            counts: HashMap::with_capacity(max_size.saturating_add(1)),
            max_size,
            eviction,
        }
    }

    /// Whether a state equal to `state` is held.
    pub fn contains(&self, state: &State) -> bool {
        self.counts.contains_key(state)
    }

    /// Appends `state`, evicting one entry if the capacity is exceeded.
    pub fn push(&mut self, state: State) {
        *self.counts.entry(state.clone()).or_insert(0) += 1;
        self.queue.push_back(state);

        if self.queue.len() > self.max_size {
            let evicted = match self.eviction {
                Eviction::Oldest => self.queue.pop_front(),
                Eviction::Newest => self.queue.pop_back(),
            };
            if let Some(evicted) = evicted {
                self.forget(evicted);
            }
        }
    }

    fn forget(&mut self, state: State) {
        if let Entry::Occupied(mut slot) = self.counts.entry(state) {
            *slot.get_mut() -= 1;
            if *slot.get() == 0 {
                slot.remove();
            }
        }
    }

    /// Number of held entries, duplicates included.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether the list holds no entry.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.max_size
    }

    /// Held entries, oldest first.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &State> + '_ {
        self.queue.iter()
    }
}
