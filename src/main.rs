use anyhow::Result;
use log::{debug, error, info};
use std::sync::Arc;
use std::time::Duration;
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;

use crate::core::GameConfig;
use engine::assets::AssetManager;
use engine::game_loop::GameLoop;
use engine::input::InputManager;
use engine::renderer::{Canvas, Renderer};
use game::assets::GameAssets;
use game::Game;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let config = GameConfig::from_env()?;
    info!("Starting {}...", config.title);

    // Button atlas failures end the process here, before any window exists
    let assets = match GameAssets::load(AssetManager::new(&config.asset_root)) {
        Ok(assets) => assets,
        Err(e) => {
            error!("Fatal asset error: {:#}", e);
            return Err(e);
        }
    };
    let mut game = Game::new(assets, &config);

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(config.title.as_str())
            .with_inner_size(winit::dpi::LogicalSize::new(
                config.window_width,
                config.window_height,
            ))
            .with_resizable(config.resizable)
            .build(&event_loop)?,
    );

    info!("Window created successfully");

    let mut renderer = pollster::block_on(Renderer::new(
        window.clone(),
        config.canvas_width,
        config.canvas_height,
    ))?;
    let mut canvas = Canvas::new(config.canvas_width, config.canvas_height);
    let mut input = InputManager::default();
    let mut game_loop = GameLoop::with_timestep(Duration::from_secs_f64(config.tick_duration()));

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    info!("Close requested, shutting down...");
                    elwt.exit();
                }
                WindowEvent::Resized(physical_size) => {
                    renderer.resize(physical_size);
                }
                WindowEvent::KeyboardInput { event, .. } => {
                    input.process_keyboard_event(&event);
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    input.process_mouse_button(button, state);
                }
                WindowEvent::CursorMoved { position, .. } => {
                    input.process_cursor_moved(position.x, position.y);
                }
                WindowEvent::Focused(false) => {
                    input.reset();
                }
                WindowEvent::RedrawRequested => {
                    let ticks = game_loop.begin_frame();
                    for _ in 0..ticks {
                        let snapshot = input.snapshot(&renderer.viewport());
                        game.update(&snapshot, game_loop.delta());
                        if game.should_quit() {
                            info!("Exit requested, shutting down...");
                            elwt.exit();
                            return;
                        }
                    }

                    let size = window.inner_size();
                    let (width, height) = game.layout(size.width, size.height);
                    canvas.resize(width, height);
                    game.draw(&mut canvas.surface(game.textures()));

                    if let Err(e) = renderer.present(canvas.image()) {
                        error!("Render error: {:#}", e);
                        elwt.exit();
                    }

                    if game_loop.frame_count() % 600 == 0 {
                        debug!(
                            "{:.1} fps, {} ticks, scene {:?}",
                            game_loop.fps(),
                            game_loop.update_count(),
                            game.scene_name()
                        );
                    }
                }
                _ => {}
            },
            Event::AboutToWait => {
                // Request redraw on next frame
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
