// Title menu with Start and Exit buttons

use super::{PlayScene, Scene, SceneAction, SceneContext};
use crate::engine::renderer::{draw_text_at_center, Surface};
use crate::game::assets::GameAssets;
use crate::game::ui::Button;
use crate::game::{GAME_HEIGHT, GAME_WIDTH};

pub const TITLE: &str = "Bullet Quest 2D";

pub struct MenuScene {
    start: Button,
    exit: Button,
    /// Pointer state on the previous tick
    was_pressed: bool,
}

impl MenuScene {
    pub fn new(assets: &GameAssets) -> Self {
        let images = &assets.buttons;
        Self {
            start: Button::new(
                10.0,
                10.0,
                64.0,
                32.0,
                2.0,
                images.start_normal,
                images.start_pushed,
            ),
            exit: Button::new(
                10.0,
                60.0,
                64.0,
                32.0,
                2.0,
                images.exit_normal,
                images.exit_pushed,
            ),
            was_pressed: false,
        }
    }
}

/// Feed one tick of pointer state to a button; true on a completed click
///
/// A click is a press that started on the button and a release still over it.
fn track_click(button: &mut Button, pointer: (i32, i32), pressed: bool, released: bool) -> bool {
    let over = button.contains(pointer.0, pointer.1);
    if pressed && over {
        button.set_pushed(true);
    }
    if released {
        let clicked = button.is_pushed() && over;
        button.set_pushed(false);
        return clicked;
    }
    false
}

impl Scene for MenuScene {
    fn name(&self) -> &'static str {
        "menu"
    }

    fn update(&mut self, ctx: &SceneContext) -> SceneAction {
        let down = ctx.input.pointer_down();
        let pointer = ctx.input.pointer();
        let pressed = down && !self.was_pressed;
        let released = !down && self.was_pressed;
        self.was_pressed = down;

        let start_clicked = track_click(&mut self.start, pointer, pressed, released);
        let exit_clicked = track_click(&mut self.exit, pointer, pressed, released);

        if start_clicked {
            SceneAction::GoTo(Box::new(PlayScene::new(ctx.assets)))
        } else if exit_clicked {
            SceneAction::Quit
        } else {
            SceneAction::None
        }
    }

    fn draw(&self, surface: &mut dyn Surface) {
        draw_text_at_center(surface, TITLE);
        self.start.draw(surface);
        self.exit.draw(surface);
    }

    fn layout(&self, _outside_width: u32, _outside_height: u32) -> (u32, u32) {
        (GAME_WIDTH, GAME_HEIGHT)
    }
}
