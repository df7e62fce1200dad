// Scene state machine
//
// Exactly one scene is current. Scenes never switch themselves: `update`
// returns a `SceneAction` and the manager performs the transition, calling
// `exit` on the outgoing scene before `enter` on the incoming one.

mod menu;
mod play;

pub use menu::MenuScene;
pub use play::PlayScene;

use crate::engine::input::InputSnapshot;
use crate::engine::renderer::Surface;
use crate::game::assets::GameAssets;

/// Everything a scene may read during one tick
pub struct SceneContext<'a> {
    pub input: &'a InputSnapshot,
    /// Registry for building the next scene
    pub assets: &'a GameAssets,
    /// Tick length in seconds
    pub delta: f64,
}

/// What the manager should do after a scene update
pub enum SceneAction {
    /// Stay in the current scene
    None,
    /// Replace the current scene
    GoTo(Box<dyn Scene>),
    /// Ask the host to terminate
    Quit,
}

/// A self-contained game mode
pub trait Scene {
    /// Short name for logging
    fn name(&self) -> &'static str;

    /// Called once when the scene becomes current
    fn enter(&mut self) {}

    /// Called once when the scene stops being current
    fn exit(&mut self) {}

    fn update(&mut self, ctx: &SceneContext) -> SceneAction;

    fn draw(&self, surface: &mut dyn Surface);

    /// Logical canvas size for the given window size
    fn layout(&self, outside_width: u32, outside_height: u32) -> (u32, u32);
}

/// Owns the current scene and applies transitions
pub struct SceneManager {
    current: Option<Box<dyn Scene>>,
    default_layout: (u32, u32),
    quit_requested: bool,
}

impl SceneManager {
    /// Empty manager with the standard 320x128 fallback layout
    #[cfg(test)]
    pub fn new() -> Self {
        Self::with_default_layout(crate::game::GAME_WIDTH, crate::game::GAME_HEIGHT)
    }

    /// Empty manager reporting `width` x `height` until a scene is set
    pub fn with_default_layout(width: u32, height: u32) -> Self {
        Self {
            current: None,
            default_layout: (width, height),
            quit_requested: false,
        }
    }

    /// Exit the current scene (if any), then enter `scene`
    pub fn go_to(&mut self, mut scene: Box<dyn Scene>) {
        let from = self.current_name().unwrap_or("none");
        if let Some(current) = self.current.as_mut() {
            current.exit();
        }
        scene.enter();
        log::info!("Scene transition: {} -> {}", from, scene.name());
        self.current = Some(scene);
    }

    pub fn update(&mut self, ctx: &SceneContext) {
        let Some(scene) = self.current.as_mut() else {
            return;
        };

        let name = scene.name();
        match scene.update(ctx) {
            SceneAction::None => {}
            SceneAction::GoTo(next) => self.go_to(next),
            SceneAction::Quit => {
                log::info!("Quit requested by {} scene", name);
                self.quit_requested = true;
            }
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        if let Some(scene) = self.current.as_ref() {
            scene.draw(surface);
        }
    }

    pub fn layout(&self, outside_width: u32, outside_height: u32) -> (u32, u32) {
        match self.current.as_ref() {
            Some(scene) => scene.layout(outside_width, outside_height),
            None => self.default_layout,
        }
    }

    pub fn current_name(&self) -> Option<&'static str> {
        self.current.as_ref().map(|scene| scene.name())
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::renderer::RecordingSurface;
    use crate::game::assets::tests::sample_assets;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<String>>>;

    /// Records lifecycle calls; switches to `next` on its first update
    struct Recorder {
        name: &'static str,
        log: Log,
        next: Option<Box<dyn Scene>>,
        quit: bool,
    }

    impl Recorder {
        fn boxed(name: &'static str, log: &Log) -> Box<Self> {
            Box::new(Self {
                name,
                log: log.clone(),
                next: None,
                quit: false,
            })
        }

        fn record(&self, event: &str) {
            self.log.borrow_mut().push(format!("{}:{}", self.name, event));
        }
    }

    impl Scene for Recorder {
        fn name(&self) -> &'static str {
            self.name
        }

        fn enter(&mut self) {
            self.record("enter");
        }

        fn exit(&mut self) {
            self.record("exit");
        }

        fn update(&mut self, _ctx: &SceneContext) -> SceneAction {
            self.record("update");
            if self.quit {
                return SceneAction::Quit;
            }
            match self.next.take() {
                Some(next) => SceneAction::GoTo(next),
                None => SceneAction::None,
            }
        }

        fn draw(&self, _surface: &mut dyn Surface) {
            self.record("draw");
        }

        fn layout(&self, _outside_width: u32, _outside_height: u32) -> (u32, u32) {
            (640, 256)
        }
    }

    fn tick(manager: &mut SceneManager, assets: &GameAssets) {
        let input = InputSnapshot::new();
        manager.update(&SceneContext {
            input: &input,
            assets,
            delta: 1.0 / 60.0,
        });
    }

    #[test]
    fn test_empty_manager_is_noop() {
        let assets = sample_assets();
        let mut manager = SceneManager::new();
        tick(&mut manager, &assets);

        let mut surface = RecordingSurface::new(320, 128);
        manager.draw(&mut surface);
        assert!(surface.commands.is_empty());
        assert_eq!(manager.layout(1280, 720), (320, 128));
        assert_eq!(manager.current_name(), None);
    }

    #[test]
    fn test_custom_default_layout() {
        let manager = SceneManager::with_default_layout(400, 200);
        assert_eq!(manager.layout(1280, 720), (400, 200));
    }

    #[test]
    fn test_go_to_exits_before_enter() {
        let log = Log::default();
        let mut manager = SceneManager::new();
        manager.go_to(Recorder::boxed("a", &log));
        manager.go_to(Recorder::boxed("b", &log));

        assert_eq!(*log.borrow(), vec!["a:enter", "a:exit", "b:enter"]);
        assert_eq!(manager.current_name(), Some("b"));
    }

    #[test]
    fn test_transition_from_update() {
        let assets = sample_assets();
        let log = Log::default();
        let mut first = Recorder::boxed("menu", &log);
        first.next = Some(Recorder::boxed("play", &log) as Box<dyn Scene>);

        let mut manager = SceneManager::new();
        manager.go_to(first);
        tick(&mut manager, &assets);
        tick(&mut manager, &assets);
        manager.draw(&mut RecordingSurface::new(320, 128));

        assert_eq!(
            *log.borrow(),
            vec![
                "menu:enter",
                "menu:update",
                "menu:exit",
                "play:enter",
                "play:update",
                "play:draw",
            ]
        );
        assert_eq!(manager.layout(1, 1), (640, 256));
    }

    #[test]
    fn test_quit_action_sets_flag() {
        let assets = sample_assets();
        let log = Log::default();
        let mut scene = Recorder::boxed("menu", &log);
        scene.quit = true;

        let mut manager = SceneManager::new();
        manager.go_to(scene);
        assert!(!manager.quit_requested());
        tick(&mut manager, &assets);
        assert!(manager.quit_requested());
        assert_eq!(manager.current_name(), Some("menu"));
    }
}
