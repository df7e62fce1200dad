// Gameplay scene: tile map, player, an idle skeleton and a following camera

use super::{MenuScene, Scene, SceneAction, SceneContext};
use crate::engine::assets::SpriteAtlas;
use crate::engine::input::Action;
use crate::engine::renderer::{draw_text_at_center, Surface};
use crate::game::assets::{GameAssets, MapAssets};
use crate::game::camera::Camera;
use crate::game::characters::{CharacterKind, CharacterManager, Player};
use crate::game::map::{self, CollisionMap};
use crate::game::{GAME_HEIGHT, GAME_WIDTH};
use glam::DVec2;
use std::collections::HashMap;

pub const HELP_TEXT: &str = "Gameplay - press ESC to return";

const SKELETON_SPAWN: DVec2 = DVec2::new(96.0, 64.0);

pub struct PlayScene {
    player: Player,
    characters: CharacterManager,
    sprites: HashMap<CharacterKind, SpriteAtlas>,
    map: Option<MapAssets>,
    camera: Camera,
}

impl PlayScene {
    pub fn new(assets: &GameAssets) -> Self {
        let mut characters = CharacterManager::new();
        let player = Player::new(characters.reserve_id());
        characters.spawn(CharacterKind::Skeleton, SKELETON_SPAWN);

        let sprites = CharacterKind::ALL
            .iter()
            .map(|&kind| (kind, assets.character_sprites(kind)))
            .collect();

        let map = assets.map.clone();
        let (world_width, world_height) = map
            .as_ref()
            .map(|map| map.map.pixel_size())
            .unwrap_or((GAME_WIDTH, GAME_HEIGHT));
        let mut camera = Camera::new(GAME_WIDTH, GAME_HEIGHT, world_width, world_height);
        camera.follow(player.character.id);

        Self {
            player,
            characters,
            sprites,
            map,
            camera,
        }
    }
}

impl Scene for PlayScene {
    fn name(&self) -> &'static str {
        "play"
    }

    fn enter(&mut self) {
        log::debug!(
            "Play scene entered with {} other characters",
            self.characters.len()
        );
    }

    fn update(&mut self, ctx: &SceneContext) -> SceneAction {
        if ctx.input.is_held(Action::Back) {
            return SceneAction::GoTo(Box::new(MenuScene::new(ctx.assets)));
        }

        let collision = self
            .map
            .as_ref()
            .map(|map| &map.map as &dyn CollisionMap);
        self.player.update(ctx.input, ctx.delta, collision);

        let player = &self.player;
        let characters = &self.characters;
        self.camera.update(|id| {
            if id == player.character.id {
                Some(player.position())
            } else {
                characters.get(id).map(|character| character.position)
            }
        });

        SceneAction::None
    }

    fn draw(&self, surface: &mut dyn Surface) {
        surface.clear();
        let offset = self.camera.offset();

        if let Some(map) = &self.map {
            map::draw_layers(surface, &map.map.layers, &map.tileset, offset);
        }

        for character in self.characters.all() {
            if let Some(sprites) = self.sprites.get(&character.kind) {
                character.draw(surface, sprites, offset);
            }
        }

        if let Some(sprites) = self.sprites.get(&CharacterKind::Player) {
            self.player.character.draw(surface, sprites, offset);
        }

        draw_text_at_center(surface, HELP_TEXT);
    }

    fn layout(&self, _outside_width: u32, _outside_height: u32) -> (u32, u32) {
        (GAME_WIDTH, GAME_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::InputSnapshot;
    use crate::engine::renderer::{
        DrawCommand, DrawOptions, RecordingSurface, TextureHandle, TextureStore,
    };
    use crate::game::assets::tests::sample_assets;
    use crate::game::assets::ButtonImages;
    use crate::game::characters::character::FacingDirection;
    use crate::game::scenes::SceneManager;
    use approx::assert_relative_eq;

    fn update(scene: &mut PlayScene, assets: &GameAssets, input: InputSnapshot) -> SceneAction {
        scene.update(&SceneContext {
            input: &input,
            assets,
            delta: 1.0 / 60.0,
        })
    }

    fn bare_assets() -> GameAssets {
        GameAssets::new(
            TextureStore::new(),
            ButtonImages::from_atlas(TextureHandle::from_index(0)),
        )
    }

    #[test]
    fn test_escape_returns_to_menu() {
        let assets = sample_assets();
        let mut manager = SceneManager::new();
        manager.go_to(Box::new(PlayScene::new(&assets)));

        let input = InputSnapshot::new().with_action(Action::Back);
        manager.update(&SceneContext {
            input: &input,
            assets: &assets,
            delta: 1.0 / 60.0,
        });
        assert_eq!(manager.current_name(), Some("menu"));
    }

    #[test]
    fn test_player_moves_and_camera_follows() {
        let assets = sample_assets();
        let mut scene = PlayScene::new(&assets);

        let input = InputSnapshot::new().with_action(Action::MoveRight);
        let action = update(&mut scene, &assets, input);
        assert!(matches!(action, SceneAction::None));

        assert_relative_eq!(scene.player.position().x, 162.5, epsilon = 1e-9);
        assert_eq!(scene.player.character.facing, FacingDirection::Right);
        // 480px wide map: centred on the player, y clamped to 0..=32
        assert_relative_eq!(scene.camera.position.x, 2.5, epsilon = 1e-9);
        assert_relative_eq!(scene.camera.position.y, 0.0);
    }

    #[test]
    fn test_map_bounds_block_movement() {
        let assets = sample_assets();
        let mut scene = PlayScene::new(&assets);

        // Map is 160px tall; walk down until blocked
        let down = InputSnapshot::new().with_action(Action::MoveDown);
        for _ in 0..120 {
            update(&mut scene, &assets, down.clone());
        }
        assert!(scene.player.position().y < 160.0);
        assert_eq!(scene.player.character.animation.index(), 0);
    }

    #[test]
    fn test_no_map_allows_any_move() {
        let assets = bare_assets();
        let mut scene = PlayScene::new(&assets);

        let up = InputSnapshot::new().with_action(Action::MoveUp);
        for _ in 0..60 {
            update(&mut scene, &assets, up.clone());
        }
        assert_relative_eq!(scene.player.position().y, 64.0 - 150.0, epsilon = 1e-6);
        // World equals the screen, so the camera never moves
        assert_eq!(scene.camera.position, DVec2::ZERO);
    }

    #[test]
    fn test_draw_order() {
        let assets = sample_assets();
        let scene = PlayScene::new(&assets);
        let mut surface = RecordingSurface::new(320, 128);
        scene.draw(&mut surface);

        assert_eq!(surface.commands.first(), Some(&DrawCommand::Clear));
        let images = surface.images();
        // Three tiles, no skeleton sheet in the sample, then the player
        assert_eq!(images.len(), 4);
        assert_eq!(images[0].1, DrawOptions::at(0.0, 0.0));
        assert_eq!(images[3].1, DrawOptions::at(160.0, 64.0));
        assert!(matches!(
            surface.commands.last(),
            Some(DrawCommand::Text { text, .. }) if text == HELP_TEXT
        ));
    }

    #[test]
    fn test_draw_without_assets_only_clears_and_prints() {
        let assets = bare_assets();
        let scene = PlayScene::new(&assets);
        let mut surface = RecordingSurface::new(320, 128);
        scene.draw(&mut surface);

        assert!(surface.images().is_empty());
        assert_eq!(surface.texts(), vec![HELP_TEXT.to_string()]);
    }

    #[test]
    fn test_layout() {
        let assets = bare_assets();
        assert_eq!(PlayScene::new(&assets).layout(1920, 1080), (320, 128));
    }
}
