// Game layer: scenes, characters, map, camera and UI on top of the engine

pub mod assets;
pub mod camera;
pub mod characters;
pub mod map;
pub mod scenes;
pub mod ui;

use crate::core::GameConfig;
use crate::engine::input::InputSnapshot;
use crate::engine::renderer::{Color, Surface, TextureStore};
use assets::GameAssets;
use scenes::{MenuScene, SceneContext, SceneManager};

/// Logical canvas width
pub const GAME_WIDTH: u32 = 320;
/// Logical canvas height
pub const GAME_HEIGHT: u32 = 128;

/// Top-level game state driven by the host loop
pub struct Game {
    manager: SceneManager,
    assets: GameAssets,
    background: Color,
}

impl Game {
    /// Start in the menu
    pub fn new(assets: GameAssets, config: &GameConfig) -> Self {
        let mut manager =
            SceneManager::with_default_layout(config.canvas_width, config.canvas_height);
        manager.go_to(Box::new(MenuScene::new(&assets)));

        Self {
            manager,
            assets,
            background: config.background,
        }
    }

    /// Run one tick
    pub fn update(&mut self, input: &InputSnapshot, delta: f64) {
        let ctx = SceneContext {
            input,
            assets: &self.assets,
            delta,
        };
        self.manager.update(&ctx);
    }

    /// Fill the background, then draw the current scene
    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.fill(self.background);
        self.manager.draw(surface);
    }

    pub fn layout(&self, outside_width: u32, outside_height: u32) -> (u32, u32) {
        self.manager.layout(outside_width, outside_height)
    }

    /// Whether a scene asked the process to terminate
    pub fn should_quit(&self) -> bool {
        self.manager.quit_requested()
    }

    pub fn scene_name(&self) -> Option<&'static str> {
        self.manager.current_name()
    }

    /// Images the draw calls sample from
    pub fn textures(&self) -> &TextureStore {
        self.assets.textures()
    }
}
