use anyhow::Context;
use std::time::Instant;
use winit::event::Event;
use winit::event_loop::{ControlFlow, EventLoop};
use winit_input_helper::WinitInputHelper;
use wsnake::config::Config;
use wsnake::display::Display;
use wsnake::draw::Renderer;
use wsnake::food::FoodSpawner;
use wsnake::game::{Command, GameState};
use wsnake::grid::GridLayout;
use wsnake::input;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load().context("loading settings")?;

    let event_loop = EventLoop::new();
    let mut keys = WinitInputHelper::new();
    let mut display = Display::open(&event_loop, &config).context("opening display")?;

    let (width, height) = display.size();
    let layout = GridLayout::new(width, height, config.cell_size).context("laying out the grid")?;
    log::info!(
        "grid {}x{} cells of {}px, offset ({}, {})",
        layout.columns(),
        layout.rows(),
        layout.cell_size(),
        layout.x_offset(),
        layout.y_offset()
    );

    let renderer = Renderer::new(layout, config.palette);
    let mut spawner = FoodSpawner::new(&layout, config.food_policy, config.seed);
    let mut game = GameState::new(layout, &mut spawner);

    let tick = config.tick();
    let mut next_tick = Instant::now() + tick;
    display.request_redraw();

    event_loop.run(move |event, _, control_flow| {
        if let Event::RedrawRequested(_) = event {
            renderer.draw(display.frame_mut(), &game);
            if let Err(err) = display.present() {
                log::error!("render failed: {err}");
                *control_flow = ControlFlow::Exit;
                return;
            }
        }

        if let Event::LoopDestroyed = event {
            log::info!("exiting with snake length {}", game.snake().len());
            return;
        }

        if let Some(command) = input::command(&event) {
            if command == Command::Quit {
                *control_flow = ControlFlow::Exit;
                return;
            }
            game.apply(command);
        }

        if keys.update(&event) {
            if input::quit_requested(&keys) {
                *control_flow = ControlFlow::Exit;
                return;
            }

            if let Some(size) = keys.window_resized() {
                if let Err(err) = display.resize(size) {
                    log::error!("{err}");
                    *control_flow = ControlFlow::Exit;
                    return;
                }
            }

            let now = Instant::now();
            if now >= next_tick {
                next_tick = now + tick;
                if game.tick(&mut spawner).needs_redraw() {
                    display.request_redraw();
                }
            }
            *control_flow = ControlFlow::WaitUntil(next_tick);
        }
    });
}
