// Engine modules: assets, renderer, input, game loop

pub mod assets;
pub mod game_loop;
pub mod input;
pub mod renderer;
