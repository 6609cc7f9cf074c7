use std::path::{Path, PathBuf};

use ggez::{event, GameResult};
use log::info;

use snake_game::app::SnakeApp;
use snake_game::config::{GameConfig, CONFIG_FILE};
use snake_game::logging;

fn main() -> GameResult {
    logging::init();

    let config = GameConfig::load_or_default(Path::new(CONFIG_FILE));
    info!(
        "Playfield {}x{}, grid {}, tick {}ms",
        config.window_width, config.window_height, config.grid_size, config.tick_millis
    );

    let resource_dir = PathBuf::from("./resources");
    let window_setup = ggez::conf::WindowSetup::default()
        .title("Snake Game")
        .vsync(true);
    let window_mode = ggez::conf::WindowMode::default()
        .dimensions(config.window_width as f32, config.window_height as f32)
        .resizable(false);

    let (mut ctx, event_loop) = ggez::ContextBuilder::new("snake", "author")
        .add_resource_path(resource_dir)
        .window_setup(window_setup)
        .window_mode(window_mode)
        .build()?;

    let app = SnakeApp::new(&mut ctx, config);
    event::run(ctx, event_loop, app)
}
