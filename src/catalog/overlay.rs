//! Detail overlay navigation
//!
//! The overlay remembers only the identifier of the open record. Its position
//! is resolved against the live derived list on every step, so a filter or
//! sort change while the overlay is open never leaves a stale index behind.

use crate::types::{Direction, ZineRecord};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Overlay {
    #[default]
    Closed,
    Open {
        identifier: String,
        direction: Direction,
    },
}

impl Overlay {
    pub fn is_open(&self) -> bool {
        matches!(self, Overlay::Open { .. })
    }

    pub fn identifier(&self) -> Option<&str> {
        match self {
            Overlay::Open { identifier, .. } => Some(identifier.as_str()),
            Overlay::Closed => None,
        }
    }

    /// Direction of the last transition; `None` while closed.
    pub fn direction(&self) -> Direction {
        match self {
            Overlay::Open { direction, .. } => *direction,
            Overlay::Closed => Direction::None,
        }
    }

    /// Open from the grid. Always legal, always without a direction.
    pub fn open(&mut self, identifier: impl Into<String>) {
        *self = Overlay::Open {
            identifier: identifier.into(),
            direction: Direction::None,
        };
    }

    pub fn close(&mut self) {
        *self = Overlay::Closed;
    }

    /// Position of the open record in `list`, if it is still there.
    pub fn current_index(&self, list: &[&ZineRecord]) -> Option<usize> {
        let id = self.identifier()?;
        list.iter().position(|z| z.identifier == id)
    }

    pub fn has_next(&self, list: &[&ZineRecord]) -> bool {
        self.current_index(list)
            .is_some_and(|i| i + 1 < list.len())
    }

    pub fn has_prev(&self, list: &[&ZineRecord]) -> bool {
        self.current_index(list).is_some_and(|i| i > 0)
    }

    /// Step to the following record. Returns false (and changes nothing) at the
    /// end of the list, when closed, or when the open record is no longer listed.
    pub fn next(&mut self, list: &[&ZineRecord]) -> bool {
        match self.current_index(list) {
            Some(i) if i + 1 < list.len() => {
                self.step_to(list[i + 1], Direction::Forward);
                true
            }
            _ => false,
        }
    }

    /// Step to the preceding record; the mirror image of [`Overlay::next`].
    pub fn prev(&mut self, list: &[&ZineRecord]) -> bool {
        match self.current_index(list) {
            Some(i) if i > 0 => {
                self.step_to(list[i - 1], Direction::Backward);
                true
            }
            _ => false,
        }
    }

    fn step_to(&mut self, record: &ZineRecord, direction: Direction) {
        *self = Overlay::Open {
            identifier: record.identifier.clone(),
            direction,
        };
    }
}
