// Character entity and management

use super::animation::AnimationState;
use super::movement;
use crate::engine::assets::{ImageRegion, SpriteAtlas};
use crate::engine::input::{Action, InputSnapshot};
use crate::engine::renderer::{DrawOptions, Surface};
use crate::game::map::CollisionMap;
use crate::game::{GAME_HEIGHT, GAME_WIDTH};
use glam::DVec2;

/// Unique identifier for a character
pub type CharacterId = u32;

/// Which sprite sheet a character is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterKind {
    Player,
    Skeleton,
}

impl CharacterKind {
    pub const ALL: [CharacterKind; 2] = [CharacterKind::Player, CharacterKind::Skeleton];

    /// Sprite sheet file, relative to the asset root
    pub fn sheet_path(&self) -> &'static str {
        match self {
            CharacterKind::Player => "playersheet.png",
            CharacterKind::Skeleton => "skeletonsheet.png",
        }
    }

    /// Frames in one walk cycle
    pub fn animation_frames(&self) -> usize {
        match self {
            CharacterKind::Player | CharacterKind::Skeleton => super::animation::ANIM_AMOUNT,
        }
    }
}

/// Direction a character faces; the ordinal is the sprite sheet column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FacingDirection {
    #[default]
    Down = 0,
    Up = 1,
    Left = 2,
    Right = 3,
}

impl FacingDirection {
    /// Sprite sheet column for this facing
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Anything drawn from a character sprite sheet
#[derive(Debug, Clone)]
pub struct Character {
    /// Unique identifier
    pub id: CharacterId,
    /// Sprite sheet selector
    pub kind: CharacterKind,
    /// Top-left corner in world pixels
    pub position: DVec2,
    pub facing: FacingDirection,
    pub animation: AnimationState,
}

impl Character {
    pub fn new(id: CharacterId, kind: CharacterKind, position: DVec2) -> Self {
        Self {
            id,
            kind,
            position,
            facing: FacingDirection::Down,
            animation: AnimationState::new(
                super::animation::ANIM_DEFAULT_SPEED,
                kind.animation_frames(),
            ),
        }
    }

    /// Current sprite: row is the animation frame, column the facing
    pub fn sprite<'a>(&self, sprites: &'a SpriteAtlas) -> Option<&'a ImageRegion> {
        sprites.get(self.animation.index(), self.facing.index())
    }

    /// Draw the current sprite shifted by `offset` (the negated camera position)
    pub fn draw(&self, surface: &mut dyn Surface, sprites: &SpriteAtlas, offset: DVec2) {
        let Some(sprite) = self.sprite(sprites) else {
            return;
        };
        let at = self.position + offset;
        surface.draw_image(sprite, &DrawOptions::at(at.x, at.y));
    }
}

/// The player-controlled character
#[derive(Debug, Clone)]
pub struct Player {
    pub character: Character,
    /// Latched from the attack action every tick; only logged for now
    pub attacking: bool,
}

impl Player {
    /// Spawn the player at the centre of the game canvas
    pub fn new(id: CharacterId) -> Self {
        let spawn = DVec2::new(GAME_WIDTH as f64 / 2.0, GAME_HEIGHT as f64 / 2.0);
        Self {
            character: Character::new(id, CharacterKind::Player, spawn),
            attacking: false,
        }
    }

    /// Run one tick of movement
    ///
    /// Without a collision map every position is allowed. A blocked or idle
    /// tick resets the walk cycle.
    pub fn update(&mut self, input: &InputSnapshot, delta: f64, map: Option<&dyn CollisionMap>) {
        let attacking = input.is_held(Action::Attack);
        if attacking && !self.attacking {
            log::debug!("Player {} started attacking", self.character.id);
        }
        self.attacking = attacking;

        let (dx, dy) = movement::intent(input);
        let Some(step) = movement::plan_step(dx, dy) else {
            self.character.animation.reset();
            return;
        };

        self.character.facing = step.facing;
        let target = step.target(self.character.position, delta);
        let can_move = map.map_or(true, |map| map.can_move_here(target));

        if can_move {
            self.character.position = target;
            self.character.animation.advance();
        } else {
            self.character.animation.reset();
        }
    }

    pub fn position(&self) -> DVec2 {
        self.character.position
    }
}

/// Owns every non-player character in a scene
#[derive(Debug, Default)]
pub struct CharacterManager {
    characters: Vec<Character>,
    next_id: CharacterId,
}

impl CharacterManager {
    pub fn new() -> Self {
        Self {
            characters: Vec::new(),
            next_id: 0,
        }
    }

    /// Take an id for a character owned elsewhere (the player)
    pub fn reserve_id(&mut self) -> CharacterId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn a new character
    pub fn spawn(&mut self, kind: CharacterKind, position: DVec2) -> CharacterId {
        let id = self.reserve_id();
        self.characters.push(Character::new(id, kind, position));
        log::debug!("Spawned {:?} #{} at {:?}", kind, id, position);
        id
    }

    /// Get a character by ID
    pub fn get(&self, id: CharacterId) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }

    /// Get all characters
    pub fn all(&self) -> &[Character] {
        &self.characters
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }
}
