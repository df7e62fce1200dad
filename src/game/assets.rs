// Game asset registry
//
// Everything scenes draw from, loaded once at startup and passed by
// reference into scene constructors.

use crate::core::Rect;
use crate::engine::assets::{AssetManager, ImageRegion, SpriteAtlas};
use crate::engine::renderer::{font, TextureHandle, TextureStore};
use crate::game::characters::CharacterKind;
use crate::game::map::{TileMap, Tileset};
use anyhow::{Context, Result};
use std::collections::HashMap;

/// Button atlas, required
pub const BUTTON_ATLAS: &str = "bluebuttons.png";
/// Tile map description
pub const TILE_MAP: &str = "maps/dirtmap.json";
/// Tileset image for `TILE_MAP`
pub const TILESET: &str = "maps/floorsheet.png";

/// Character sheets are 7 rows of 4 frames
pub const SPRITE_ROWS: usize = 7;
pub const SPRITE_COLUMNS: usize = 4;
pub const SPRITE_SIZE: i32 = 16;

/// Button frames in the button atlas
pub const START_NORMAL_RECT: Rect = Rect::new(16, 0, 16, 16);
pub const START_PUSHED_RECT: Rect = Rect::new(176, 0, 16, 16);
pub const EXIT_NORMAL_RECT: Rect = Rect::new(48, 0, 16, 16);
pub const EXIT_PUSHED_RECT: Rect = Rect::new(208, 0, 16, 16);

/// Normal and pushed frames for the menu buttons
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonImages {
    pub start_normal: ImageRegion,
    pub start_pushed: ImageRegion,
    pub exit_normal: ImageRegion,
    pub exit_pushed: ImageRegion,
}

impl ButtonImages {
    /// Cut the four frames out of the button atlas
    pub fn from_atlas(atlas: TextureHandle) -> Self {
        Self {
            start_normal: ImageRegion::new(atlas, START_NORMAL_RECT),
            start_pushed: ImageRegion::new(atlas, START_PUSHED_RECT),
            exit_normal: ImageRegion::new(atlas, EXIT_NORMAL_RECT),
            exit_pushed: ImageRegion::new(atlas, EXIT_PUSHED_RECT),
        }
    }
}

/// A tile map together with the tileset it is drawn from
#[derive(Debug, Clone)]
pub struct MapAssets {
    pub map: TileMap,
    pub tileset: Tileset,
}

/// All loaded game assets
#[derive(Debug)]
pub struct GameAssets {
    textures: TextureStore,
    pub buttons: ButtonImages,
    characters: HashMap<CharacterKind, SpriteAtlas>,
    pub map: Option<MapAssets>,
}

impl GameAssets {
    /// Registry with only the button frames; characters and map are empty
    pub fn new(textures: TextureStore, buttons: ButtonImages) -> Self {
        Self {
            textures,
            buttons,
            characters: HashMap::new(),
            map: None,
        }
    }

    /// Load everything from disk
    ///
    /// A missing button atlas is an error. Missing character sheets or map
    /// files are logged and leave that part empty.
    pub fn load(mut assets: AssetManager) -> Result<Self> {
        let atlas = assets
            .load_texture(BUTTON_ATLAS)
            .with_context(|| format!("Failed to load button atlas {}", BUTTON_ATLAS))?;
        let buttons = ButtonImages::from_atlas(atlas);
        assets
            .load_embedded_texture(font::DEBUG_FONT_NAME, font::DEBUG_FONT_PNG)
            .context("Failed to decode the built-in debug font")?;

        let sheets: Vec<_> = CharacterKind::ALL
            .into_iter()
            .map(|kind| (kind, load_character_sheet(&mut assets, kind)))
            .collect();
        let map = load_map(&mut assets);

        let mut game_assets = Self::new(assets.into_textures(), buttons);
        for (kind, sprites) in sheets {
            game_assets = game_assets.with_character_sprites(kind, sprites);
        }
        if let Some(map) = map {
            game_assets = game_assets.with_map(map);
        }

        log::info!(
            "Loaded {} textures, map {}",
            game_assets.textures.len(),
            if game_assets.map.is_some() { "present" } else { "missing" }
        );
        Ok(game_assets)
    }

    /// Builder: sprites for one character kind
    pub fn with_character_sprites(mut self, kind: CharacterKind, sprites: SpriteAtlas) -> Self {
        self.characters.insert(kind, sprites);
        self
    }

    /// Builder: the play scene map
    pub fn with_map(mut self, map: MapAssets) -> Self {
        self.map = Some(map);
        self
    }

    /// Sprites for a character kind; empty when its sheet failed to load
    pub fn character_sprites(&self, kind: CharacterKind) -> SpriteAtlas {
        self.characters.get(&kind).cloned().unwrap_or_default()
    }

    /// Decoded images that draw calls sample from
    pub fn textures(&self) -> &TextureStore {
        &self.textures
    }
}

fn load_character_sheet(assets: &mut AssetManager, kind: CharacterKind) -> SpriteAtlas {
    match assets.load_texture(kind.sheet_path()) {
        Ok(texture) => SpriteAtlas::from_grid(texture, SPRITE_ROWS, SPRITE_COLUMNS, SPRITE_SIZE),
        Err(e) => {
            log::warn!("Could not load {} sprites: {:#}", kind.sheet_path(), e);
            SpriteAtlas::empty()
        }
    }
}

fn load_map(assets: &mut AssetManager) -> Option<MapAssets> {
    let map = match assets.load_json::<TileMap>(TILE_MAP) {
        Ok(map) => map,
        Err(e) => {
            log::warn!("Failed to load tile map: {:#}", e);
            return None;
        }
    };
    if let Err(e) = map.validate(TILE_MAP) {
        log::warn!("{}", e);
        return None;
    }

    let texture = match assets.load_texture(TILESET) {
        Ok(texture) => texture,
        Err(e) => {
            log::warn!("Failed to load tileset image: {:#}", e);
            return None;
        }
    };
    let (width, _) = assets.textures().dimensions(texture)?;

    Some(MapAssets {
        map,
        tileset: Tileset::new(texture, width),
    })
}
