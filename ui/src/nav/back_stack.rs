//! Back-stack with per-destination save/restore.
//!
//! The bottom entry is always the start destination; it can never be popped.

use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct BackStackEntry<S> {
    pub route: &'static str,
    pub state: S,
}

impl<S: Default> BackStackEntry<S> {
    fn fresh(route: &'static str) -> Self {
        Self {
            route,
            state: S::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BackStack<S> {
    start: &'static str,
    entries: Vec<BackStackEntry<S>>,
    /// Sub-stacks popped with their state saved, keyed by the route of their
    /// first entry.
    saved: HashMap<&'static str, Vec<BackStackEntry<S>>>,
}

impl<S: Clone + Default> BackStack<S> {
    pub fn new(start: &'static str) -> Self {
        Self {
            start,
            entries: vec![BackStackEntry::fresh(start)],
            saved: HashMap::new(),
        }
    }

    pub fn start(&self) -> &'static str {
        self.start
    }

    pub fn entries(&self) -> &[BackStackEntry<S>] {
        &self.entries
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    pub fn current(&self) -> &BackStackEntry<S> {
        // Never empty: the start entry is seeded in new() and pop() keeps it.
        &self.entries[self.entries.len() - 1]
    }

    pub fn current_mut(&mut self) -> &mut BackStackEntry<S> {
        let last = self.entries.len() - 1;
        &mut self.entries[last]
    }

    pub fn count(&self, route: &str) -> usize {
        self.entries.iter().filter(|entry| entry.route == route).count()
    }

    pub fn saved_state(&self, route: &str) -> Option<&[BackStackEntry<S>]> {
        self.saved.get(route).map(Vec::as_slice)
    }

    /// Push a fresh entry on top.
    pub fn push(&mut self, route: &'static str) {
        self.entries.push(BackStackEntry::fresh(route));
    }

    /// Pop the top entry, discarding its state. Returns `false` at the start
    /// destination.
    pub fn pop(&mut self) -> bool {
        if self.entries.len() > 1 {
            self.entries.pop();
            true
        } else {
            false
        }
    }

    /// Pop everything above the start destination, saving the popped entries
    /// under the route of the first one.
    pub fn pop_to_start_saving(&mut self) {
        if self.entries.len() <= 1 {
            return;
        }
        let popped: Vec<_> = self.entries.drain(1..).collect();
        let key = popped[0].route;
        self.saved.insert(key, popped);
    }

    /// Make `route` the top entry unless it already is, restoring a saved
    /// sub-stack for it when there is one. The start destination is never
    /// pushed again: launching it pops back to it, saving what was above.
    pub fn launch_single_top(&mut self, route: &'static str) {
        if self.current().route == route {
            return;
        }
        if route == self.start {
            self.pop_to_start_saving();
            return;
        }
        match self.saved.remove(route) {
            Some(restored) => self.entries.extend(restored),
            None => self.push(route),
        }
    }
}
