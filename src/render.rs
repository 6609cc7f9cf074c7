use ggez::mint::Point2;
use ggez::{graphics, Context, GameResult};

use crate::game::{Game, GameState};
use crate::grid::Cell;
use crate::score_store::ScoreStore;

const BACKGROUND_COLOR: graphics::Color = graphics::Color::BLACK;
const SNAKE_COLOR: graphics::Color = graphics::Color::GREEN;
const FOOD_COLOR: graphics::Color = graphics::Color::RED;
const TEXT_COLOR: graphics::Color = graphics::Color::WHITE;

const HUD_TEXT_SIZE: f32 = 40.0;
const PROMPT_TEXT_SIZE: f32 = 60.0;
const HUD_MARGIN: f32 = 10.0;
const HIGH_SCORE_OFFSET: f32 = 300.0;

/// Renders one frame. `font` names a font registered with the graphics
/// context; `None` falls back to the ggez default font.
pub fn draw<S: ScoreStore>(ctx: &mut Context, game: &Game<S>, font: Option<&str>) -> GameResult {
    let mut canvas = graphics::Canvas::from_frame(ctx, BACKGROUND_COLOR);

    match game.state() {
        GameState::Menu => draw_prompt(game, &mut canvas, font, "Press Enter to Start"),
        GameState::GameOver => draw_prompt(game, &mut canvas, font, "Game Over! Press Enter"),
        GameState::Playing => draw_game(ctx, game, &mut canvas, font)?,
    }

    canvas.finish(ctx)
}

fn text(content: String, font: Option<&str>, scale: f32) -> graphics::Text {
    let mut text = graphics::Text::new(content);
    if let Some(name) = font {
        text.set_font(name);
    }
    text.set_scale(scale);
    text
}

fn draw_prompt<S: ScoreStore>(
    game: &Game<S>,
    canvas: &mut graphics::Canvas,
    font: Option<&str>,
    prompt: &str,
) {
    let config = game.config();
    let mut prompt = text(prompt.to_string(), font, PROMPT_TEXT_SIZE);
    prompt.set_layout(graphics::TextLayout::center());
    canvas.draw(
        &prompt,
        graphics::DrawParam::default()
            .dest(Point2 {
                x: config.window_width as f32 / 2.0,
                y: config.window_height as f32 / 2.0,
            })
            .color(TEXT_COLOR),
    );
}

fn draw_cell(
    ctx: &mut Context,
    canvas: &mut graphics::Canvas,
    cell: Cell,
    size: f32,
    color: graphics::Color,
) -> GameResult {
    let rect = graphics::Rect::new(cell.x as f32, cell.y as f32, size, size);
    canvas.draw(
        &graphics::Mesh::new_rectangle(ctx, graphics::DrawMode::fill(), rect, color)?,
        graphics::DrawParam::default(),
    );
    Ok(())
}

fn draw_game<S: ScoreStore>(
    ctx: &mut Context,
    game: &Game<S>,
    canvas: &mut graphics::Canvas,
    font: Option<&str>,
) -> GameResult {
    let config = game.config();
    let size = config.grid_size as f32;

    for &segment in game.snake() {
        draw_cell(ctx, canvas, segment, size, SNAKE_COLOR)?;
    }
    draw_cell(ctx, canvas, game.food(), size, FOOD_COLOR)?;

    let score_text = text(format!("Score: {}", game.score()), font, HUD_TEXT_SIZE);
    canvas.draw(
        &score_text,
        graphics::DrawParam::default()
            .dest(Point2 { x: HUD_MARGIN, y: HUD_MARGIN })
            .color(TEXT_COLOR),
    );

    let high_score_text = text(format!("Best Score: {}", game.high_score()), font, HUD_TEXT_SIZE);
    canvas.draw(
        &high_score_text,
        graphics::DrawParam::default()
            .dest(Point2 {
                x: config.window_width as f32 - HIGH_SCORE_OFFSET,
                y: HUD_MARGIN,
            })
            .color(TEXT_COLOR),
    );

    Ok(())
}
