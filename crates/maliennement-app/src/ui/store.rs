//! Observable state store.

/// Holds a state value and a revision that moves only on real changes.
#[derive(Debug)]
pub struct Store<T> {
    state: T,
    revision: u64,
    rendered: u64,
}

impl<T: Clone + PartialEq> Store<T> {
    /// A new store. Its initial state counts as one unrendered change.
    pub fn new(state: T) -> Self {
        Self {
            state,
            revision: 1,
            rendered: 0,
        }
    }

    pub fn get(&self) -> &T {
        &self.state
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Apply `f`. Returns `true` and bumps the revision only if the state
    /// is different afterwards.
    pub fn update(&mut self, f: impl FnOnce(&mut T)) -> bool {
        let mut next = self.state.clone();
        f(&mut next);
        if next == self.state {
            return false;
        }
        self.state = next;
        self.revision += 1;
        true
    }

    /// The state, once per revision. `None` when nothing changed since the
    /// last call.
    pub fn take_dirty(&mut self) -> Option<&T> {
        if self.rendered == self.revision {
            return None;
        }
        self.rendered = self.revision;
        Some(&self.state)
    }
}
