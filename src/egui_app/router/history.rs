//! History Stack
//!
//! The in-app stand-in for the browser session history. Only the router writes
//! to it, and only when a navigation commits.

use crate::shared::Location;

/// How a committed navigation changes the history stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryAction {
    /// Add an entry after the current one, dropping any forward entries
    Push,
    /// Overwrite the current entry
    Replace,
    /// Move through existing entries (back is negative)
    Pop(isize),
}

/// Ordered list of visited locations with a cursor
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Location>,
    index: usize,
}

impl History {
    pub fn new(initial: Location) -> Self {
        Self {
            entries: vec![initial],
            index: 0,
        }
    }

    /// The entry under the cursor
    pub fn current(&self) -> &Location {
        &self.entries[self.index]
    }

    /// The entry `delta` steps away from the cursor, if any
    pub fn peek(&self, delta: isize) -> Option<&Location> {
        let target = self.index.checked_add_signed(delta)?;
        self.entries.get(target)
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn entries(&self) -> &[Location] {
        &self.entries
    }

    /// Apply a committed navigation. Returns false for a pop that no longer
    /// lands on an entry, in which case the stack is left untouched.
    pub fn apply(&mut self, action: HistoryAction, location: Location) -> bool {
        match action {
            HistoryAction::Push => {
                self.entries.truncate(self.index + 1);
                self.entries.push(location);
                self.index += 1;
            }
            HistoryAction::Replace => {
                self.entries[self.index] = location;
            }
            HistoryAction::Pop(delta) => {
                let Some(target) = self.index.checked_add_signed(delta) else {
                    return false;
                };
                if target >= self.entries.len() {
                    return false;
                }
                self.index = target;
                self.entries[target] = location;
            }
        }
        true
    }
}
