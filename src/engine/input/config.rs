// Key and button bindings

use super::action::{default_bindings, Action, InputSource};
use std::collections::HashMap;

/// Which action each physical key or button drives
///
/// A source drives at most one action; an action may have several sources
/// (WASD and the arrow keys, for instance).
#[derive(Debug, Clone, Default)]
pub struct InputConfig {
    bindings: HashMap<InputSource, Action>,
}

impl InputConfig {
    /// Bind every pair in order; a source listed twice keeps its last action
    pub fn from_bindings(bindings: impl IntoIterator<Item = (InputSource, Action)>) -> Self {
        let mut config = Self::default();
        for (source, action) in bindings {
            config.bind(source, action);
        }
        config
    }

    /// Bind `source` to `action`, replacing whatever it drove before
    pub fn bind(&mut self, source: InputSource, action: Action) {
        if let Some(previous) = self.bindings.insert(source, action) {
            if previous != action {
                log::debug!("Rebound {:?} from {:?} to {:?}", source, previous, action);
            }
        }
    }

    /// Action driven by `source`, if any
    pub fn action_for(&self, source: InputSource) -> Option<Action> {
        self.bindings.get(&source).copied()
    }
}

/// Keyboard layout used when nothing else is configured
pub fn default_config() -> InputConfig {
    InputConfig::from_bindings(default_bindings())
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::event::MouseButton;
    use winit::keyboard::KeyCode;

    #[test]
    fn test_bind() {
        let mut config = InputConfig::default();
        let source = InputSource::key(KeyCode::KeyA);
        config.bind(source, Action::MoveLeft);

        assert_eq!(config.action_for(source), Some(Action::MoveLeft));
        assert_eq!(config.action_for(InputSource::key(KeyCode::KeyD)), None);
    }

    #[test]
    fn test_rebind_replaces() {
        let mut config = InputConfig::default();
        let source = InputSource::key(KeyCode::KeyF);
        config.bind(source, Action::Attack);
        config.bind(source, Action::Back);

        assert_eq!(config.action_for(source), Some(Action::Back));
    }

    #[test]
    fn test_duplicate_source_keeps_last() {
        let source = InputSource::key(KeyCode::Space);
        let config =
            InputConfig::from_bindings([(source, Action::Attack), (source, Action::Select)]);
        assert_eq!(config.action_for(source), Some(Action::Select));
    }

    #[test]
    fn test_default_layout() {
        let config = default_config();
        let key = |code| config.action_for(InputSource::key(code));

        assert_eq!(key(KeyCode::KeyW), Some(Action::MoveUp));
        assert_eq!(key(KeyCode::ArrowUp), Some(Action::MoveUp));
        assert_eq!(key(KeyCode::KeyF), Some(Action::Attack));
        assert_eq!(key(KeyCode::Escape), Some(Action::Back));
        assert_eq!(
            config.action_for(InputSource::mouse(MouseButton::Left)),
            Some(Action::Select)
        );
    }
}
