// Input manager - turns window events into per-tick snapshots

use super::action::{Action, InputSource};
use super::config::{default_config, InputConfig};
use super::snapshot::InputSnapshot;
use crate::engine::renderer::Viewport;
use std::collections::HashSet;
use winit::event::{ElementState, KeyEvent, MouseButton};
use winit::keyboard::PhysicalKey;

/// Tracks which bound sources are down and where the cursor is
pub struct InputManager {
    /// Source to action bindings
    config: InputConfig,

    /// Physical sources currently held
    sources_down: HashSet<InputSource>,

    /// Cursor position in window (physical) pixels
    cursor: (f64, f64),
}

impl InputManager {
    /// Create a new input manager with the given bindings
    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            sources_down: HashSet::new(),
            cursor: (f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(key_code) = event.physical_key {
            let source = InputSource::key(key_code);
            match event.state {
                ElementState::Pressed => self.press(source),
                ElementState::Released => self.release(source),
            }
        }
    }

    /// Process a mouse button event from winit
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        let source = InputSource::mouse(button);
        match state {
            ElementState::Pressed => self.press(source),
            ElementState::Released => self.release(source),
        }
    }

    /// Process cursor movement (window physical pixels)
    pub fn process_cursor_moved(&mut self, x: f64, y: f64) {
        self.cursor = (x, y);
    }

    /// Mark a source as down
    pub(crate) fn press(&mut self, source: InputSource) {
        self.sources_down.insert(source);
    }

    /// Mark a source as up
    pub(crate) fn release(&mut self, source: InputSource) {
        self.sources_down.remove(&source);
    }

    /// Release everything, e.g. when the window loses focus
    pub fn reset(&mut self) {
        self.sources_down.clear();
    }

    /// Actions driven by the sources currently down
    pub fn held_actions(&self) -> HashSet<Action> {
        self.sources_down
            .iter()
            .filter_map(|source| self.config.action_for(*source))
            .collect()
    }

    /// Freeze the current state into a snapshot, mapping the cursor into canvas space
    pub fn snapshot(&self, viewport: &Viewport) -> InputSnapshot {
        let mut snapshot = InputSnapshot::new();
        snapshot.set_held(self.held_actions());
        let (x, y) = viewport.window_to_canvas(self.cursor.0, self.cursor.1);
        snapshot.set_pointer(x, y);
        snapshot
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new(default_config())
    }
}
