use anyhow::Result;
use log::info;
use winit::{
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;

use engine::game_loop::GameLoop;
use engine::input::{keys, GilrsBackend, InputState, JoystickBackend};
use game::config::{lineup, DEFAULT_SETTINGS};
use game::Game;

/// Keyboard seats alongside any connected joysticks
const KEYBOARD_SEATS: usize = 2;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Curve Arena...");

    let mut backend = GilrsBackend::new();
    let mut input = InputState::new();
    let opened = input.open_joysticks(&mut backend);
    info!("{} of {} joysticks opened", opened, backend.device_count());

    let joysticks: Vec<usize> = (0..input.num_joys())
        .filter(|&i| input.is_open(i))
        .collect();
    let mut game = Game::new(&lineup(KEYBOARD_SEATS, &joysticks), DEFAULT_SETTINGS);
    let mut game_loop = GameLoop::new();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Curve Arena")
        .with_inner_size(winit::dpi::LogicalSize::new(
            DEFAULT_SETTINGS.arena_width,
            DEFAULT_SETTINGS.arena_height,
        ))
        .with_resizable(false)
        .build(&event_loop)?;

    info!("Window created successfully");

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                input.close_joysticks(&mut backend);
                elwt.exit();
            }
            Event::WindowEvent {
                event:
                    WindowEvent::KeyboardInput {
                        event:
                            KeyEvent {
                                physical_key: PhysicalKey::Code(key),
                                state,
                                repeat: false,
                                ..
                            },
                        ..
                    },
                ..
            } => {
                if key == KeyCode::Escape && state == ElementState::Pressed {
                    game_loop.toggle_pause();
                }
                if let Some(code) = keys::from_key_code(key) {
                    input.set_key_down(code, state == ElementState::Pressed);
                }
            }
            Event::WindowEvent {
                event: WindowEvent::MouseInput { state, button, .. },
                ..
            } => {
                if let Some(code) = keys::from_mouse_button(button) {
                    input.set_key_down(code, state == ElementState::Pressed);
                }
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } => {
                // Releases are lost while unfocused
                input.reset();
            }
            Event::AboutToWait => {
                backend.poll(&mut input);
                let dt_ms = game_loop.begin_frame();
                if dt_ms > 0 {
                    game.update(&mut input, dt_ms);
                }
                if !game_loop.is_paused() && game_loop.frame_count() % 300 == 0 {
                    log::debug!(
                        "{:.0} fps, {} ms simulated",
                        game_loop.fps(),
                        game_loop.simulated_ms()
                    );
                    for line in game.status_lines(&input) {
                        log::debug!("{}", line);
                    }
                }
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
