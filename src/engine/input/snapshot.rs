// Per-tick input snapshot

use super::action::Action;
use std::collections::HashSet;

/// Everything the game may read about input during one tick
///
/// Built once per tick by the `InputManager` (or directly in tests) and
/// passed by reference into scene updates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSnapshot {
    /// Actions whose bound key or button is down this tick
    held: HashSet<Action>,
    /// Pointer position in canvas pixels
    pointer: (i32, i32),
}

impl InputSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: mark an action as held
    #[cfg(test)]
    pub fn with_action(mut self, action: Action) -> Self {
        self.held.insert(action);
        self
    }

    /// Builder: place the pointer
    #[cfg(test)]
    pub fn with_pointer(mut self, x: i32, y: i32) -> Self {
        self.pointer = (x, y);
        self
    }

    pub fn is_held(&self, action: Action) -> bool {
        self.held.contains(&action)
    }

    /// Pointer position in canvas pixels
    pub fn pointer(&self) -> (i32, i32) {
        self.pointer
    }

    /// Whether the primary pointer button is down
    pub fn pointer_down(&self) -> bool {
        self.is_held(Action::Select)
    }

    pub(crate) fn set_held(&mut self, held: HashSet<Action>) {
        self.held = held;
    }

    pub(crate) fn set_pointer(&mut self, x: i32, y: i32) {
        self.pointer = (x, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_snapshot() {
        let snapshot = InputSnapshot::new();
        assert!(!snapshot.is_held(Action::MoveUp));
        assert!(!snapshot.pointer_down());
        assert_eq!(snapshot.pointer(), (0, 0));
    }

    #[test]
    fn test_builder() {
        let snapshot = InputSnapshot::new()
            .with_action(Action::MoveLeft)
            .with_action(Action::Select)
            .with_pointer(12, 34);

        assert!(snapshot.is_held(Action::MoveLeft));
        assert!(!snapshot.is_held(Action::MoveRight));
        assert!(snapshot.pointer_down());
        assert_eq!(snapshot.pointer(), (12, 34));
    }
}
