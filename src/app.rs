use ggez::event::EventHandler;
use ggez::{graphics, Context, GameResult};
use log::{info, warn};

use crate::config::GameConfig;
use crate::game::Game;
use crate::input::InputSnapshot;
use crate::render;
use crate::score_store::FileScoreStore;

const FONT_NAME: &str = "game_font";

/// ggez front end: samples the keyboard, drives the game, draws it.
pub struct SnakeApp {
    game: Game<FileScoreStore>,
    font: Option<&'static str>,
}

impl SnakeApp {
    pub fn new(ctx: &mut Context, config: GameConfig) -> Self {
        let font = load_font(ctx, &config.font_path);
        let store = FileScoreStore::new(config.high_score_path.clone());
        SnakeApp {
            game: Game::new(config, store),
            font,
        }
    }
}

fn load_font(ctx: &mut Context, path: &str) -> Option<&'static str> {
    match graphics::FontData::from_path(ctx, path) {
        Ok(data) => {
            ctx.gfx.add_font(FONT_NAME, data);
            Some(FONT_NAME)
        }
        Err(e) => {
            warn!("Could not load font {}: {}; using the default font", path, e);
            None
        }
    }
}

impl EventHandler for SnakeApp {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        let input = InputSnapshot::from_keyboard(&ctx.keyboard);
        self.game.frame(input, ctx.time.delta());
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        render::draw(ctx, &self.game, self.font)
    }

    fn quit_event(&mut self, _ctx: &mut Context) -> GameResult<bool> {
        info!("Window closed, high score {}", self.game.high_score());
        Ok(false)
    }
}
