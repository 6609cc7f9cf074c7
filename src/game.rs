//! Game state and simulation.
//!
//! `Game` owns everything that changes during play. It never touches the
//! window: the ggez handler feeds it an [`InputSnapshot`] and the frame time,
//! and the renderer reads it back through accessors.

use std::collections::{HashSet, VecDeque};
use std::time::Duration;

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::config::GameConfig;
use crate::grid::{Cell, Direction};
use crate::input::InputSnapshot;
use crate::score_store::ScoreStore;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum GameState {
    Menu,
    Playing,
    GameOver,
}

/// Outcome of a single simulation step.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum StepResult {
    Moved,
    Ate,
    Crashed,
}

pub struct Game<S: ScoreStore> {
    config: GameConfig,
    state: GameState,
    snake: VecDeque<Cell>,
    direction: Direction,
    next_direction: Direction,
    food: Cell,
    score: u32,
    high_score: u32,
    since_tick: Duration,
    store: S,
    rng: StdRng,
}

impl<S: ScoreStore> Game<S> {
    pub fn new(config: GameConfig, store: S) -> Self {
        Self::with_rng(config, store, StdRng::from_entropy())
    }

    pub fn with_rng(config: GameConfig, store: S, rng: StdRng) -> Self {
        let high_score = match store.load() {
            Ok(score) => score,
            Err(e) => {
                warn!("Could not load high score: {}; starting from 0", e);
                0
            }
        };
        info!("High score: {}", high_score);

        Game {
            state: GameState::Menu,
            snake: VecDeque::new(),
            direction: Direction::Right,
            next_direction: Direction::Right,
            food: config.center(),
            score: 0,
            high_score,
            since_tick: Duration::ZERO,
            store,
            rng,
            config,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn snake(&self) -> &VecDeque<Cell> {
        &self.snake
    }

    pub fn head(&self) -> Option<Cell> {
        self.snake.front().copied()
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn next_direction(&self) -> Direction {
        self.next_direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// One frame of input handling followed by at most one simulation step.
    pub fn frame(&mut self, input: InputSnapshot, dt: Duration) -> Option<StepResult> {
        self.handle_input(input);
        self.update(dt)
    }

    pub fn handle_input(&mut self, input: InputSnapshot) {
        match self.state {
            GameState::Menu | GameState::GameOver => {
                if input.confirm {
                    self.reset();
                }
            }
            GameState::Playing => {
                if let Some(direction) = input.turn(self.direction) {
                    self.next_direction = direction;
                }
            }
        }
    }

    /// Advances the tick clock by `dt`. Steps once if the tick interval has
    /// been exceeded; there is no catch-up for long frames.
    pub fn update(&mut self, dt: Duration) -> Option<StepResult> {
        if self.state != GameState::Playing {
            return None;
        }
        self.since_tick += dt;
        if self.since_tick > self.config.tick() {
            self.since_tick = Duration::ZERO;
            Some(self.step())
        } else {
            None
        }
    }

    pub fn step(&mut self) -> StepResult {
        self.direction = self.next_direction;

        let Some(head) = self.head() else {
            self.state = GameState::GameOver;
            return StepResult::Crashed;
        };
        let new_head = head.step(self.direction, self.config.grid_size);

        if !self.config.contains(new_head) || self.snake.contains(&new_head) {
            info!("Game over with score {}", self.score);
            self.state = GameState::GameOver;
            return StepResult::Crashed;
        }

        self.snake.push_front(new_head);
        if new_head != self.food {
            self.snake.pop_back();
            return StepResult::Moved;
        }

        self.score += 1;
        debug!("Ate food at {:?}, score {}", new_head, self.score);
        if self.score > self.high_score {
            self.high_score = self.score;
            self.persist_high_score();
        }
        match self.free_cell() {
            Some(cell) => self.food = cell,
            None => {
                info!("Board full with score {}", self.score);
                self.state = GameState::GameOver;
            }
        }
        StepResult::Ate
    }

    /// Starts a new run, first saving the finished run's score if it is a record.
    pub fn reset(&mut self) {
        if self.score > self.high_score {
            self.high_score = self.score;
            self.persist_high_score();
        }

        self.state = GameState::Playing;
        self.direction = Direction::Right;
        self.next_direction = Direction::Right;
        self.score = 0;
        self.since_tick = Duration::ZERO;

        let center = self.config.center();
        let pitch = self.config.grid_size;
        self.snake = (0..self.config.start_length as i32)
            .map(|i| Cell::new(center.x - i * pitch, center.y))
            .collect();

        match self.free_cell() {
            Some(cell) => self.food = cell,
            None => self.state = GameState::GameOver,
        }
        info!("New run started");
    }

    /// A uniformly random grid cell not covered by the snake.
    fn free_cell(&mut self) -> Option<Cell> {
        let occupied: HashSet<Cell> = self.snake.iter().copied().collect();
        let pitch = self.config.grid_size;
        let free: Vec<Cell> = (0..self.config.rows())
            .flat_map(|row| {
                (0..self.config.columns()).map(move |col| Cell::new(col * pitch, row * pitch))
            })
            .filter(|cell| !occupied.contains(cell))
            .collect();
        free.choose(&mut self.rng).copied()
    }

    fn persist_high_score(&mut self) {
        info!("New high score: {}", self.high_score);
        if let Err(e) = self.store.save(self.high_score) {
            warn!("Failed to save high score: {}", e);
        }
    }

    /// Places the game mid-run with an explicit layout.
    pub fn set_run(&mut self, snake: Vec<Cell>, direction: Direction, food: Cell, score: u32) {
        self.state = GameState::Playing;
        self.snake = snake.into();
        self.direction = direction;
        self.next_direction = direction;
        self.food = food;
        self.score = score;
        self.since_tick = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score_store::MemoryScoreStore;

    fn game() -> Game<MemoryScoreStore> {
        Game::with_rng(
            GameConfig::default(),
            MemoryScoreStore::default(),
            StdRng::seed_from_u64(7),
        )
    }

    fn tick() -> Duration {
        GameConfig::default().tick() + Duration::from_millis(1)
    }

    #[test]
    fn starts_in_menu_and_confirm_starts_a_run() {
        let mut game = game();
        assert_eq!(game.state(), GameState::Menu);
        assert_eq!(game.frame(InputSnapshot::default(), tick()), None);
        assert_eq!(game.state(), GameState::Menu);

        game.frame(InputSnapshot::confirm(), Duration::ZERO);
        assert_eq!(game.state(), GameState::Playing);
        assert_eq!(game.snake().len(), 5);
        assert_eq!(game.head(), Some(Cell::new(600, 400)));
        assert!(!game.snake().contains(&game.food()));
    }

    #[test]
    fn tick_fires_only_after_interval_is_exceeded() {
        let mut game = game();
        game.reset();
        let interval = game.config().tick();
        assert_eq!(game.update(interval), None);
        assert!(game.update(Duration::from_millis(1)).is_some());
        // The accumulator restarted from zero.
        assert_eq!(game.update(Duration::from_millis(50)), None);
    }

    #[test]
    fn long_frames_step_only_once() {
        let mut game = game();
        game.reset();
        let head = game.head().unwrap();
        game.update(Duration::from_secs(5));
        assert_eq!(game.head(), Some(Cell::new(head.x + 40, head.y)));
    }

    #[test]
    fn turn_applies_on_next_step() {
        let mut game = game();
        game.reset();
        game.handle_input(InputSnapshot::direction(Direction::Up));
        assert_eq!(game.direction(), Direction::Right);
        assert_eq!(game.next_direction(), Direction::Up);
        game.step();
        assert_eq!(game.direction(), Direction::Up);
        assert_eq!(game.head(), Some(Cell::new(600, 360)));
    }

    #[test]
    fn reversal_within_one_tick_is_ignored() {
        let mut game = game();
        game.reset();
        game.handle_input(InputSnapshot::direction(Direction::Up));
        // Still moving right until the tick, so Left is a reversal.
        game.handle_input(InputSnapshot::direction(Direction::Left));
        assert_eq!(game.next_direction(), Direction::Up);
    }

    #[test]
    fn self_collision_ends_the_run() {
        let mut game = game();
        let snake = vec![
            Cell::new(200, 200),
            Cell::new(200, 240),
            Cell::new(240, 240),
            Cell::new(240, 200),
            Cell::new(240, 160),
        ];
        game.set_run(snake.clone(), Direction::Right, Cell::new(0, 0), 0);
        assert_eq!(game.step(), StepResult::Crashed);
        assert_eq!(game.state(), GameState::GameOver);
        assert_eq!(game.snake().iter().copied().collect::<Vec<_>>(), snake);
    }

    #[test]
    fn filling_the_board_ends_the_run() {
        let config = GameConfig {
            window_width: 120,
            window_height: 40,
            grid_size: 40,
            start_length: 2,
            ..GameConfig::default()
        };
        let mut game = Game::with_rng(config, MemoryScoreStore::default(), StdRng::seed_from_u64(1));
        game.reset();
        // Snake covers (40,0) and (0,0); the only free cell is (80,0).
        assert_eq!(game.food(), Cell::new(80, 0));
        assert_eq!(game.step(), StepResult::Ate);
        assert_eq!(game.snake().len(), 3);
        assert_eq!(game.state(), GameState::GameOver);
    }

    #[test]
    fn record_is_saved_once_when_set() {
        let mut game = game();
        game.set_run(vec![Cell::new(600, 400)], Direction::Right, Cell::new(640, 400), 0);
        game.step();
        assert_eq!(game.high_score(), 1);
        assert_eq!(game.store().saves, vec![1]);
        // Reset sees no new record, so nothing more is written.
        game.reset();
        assert_eq!(game.store().saves, vec![1]);
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn stored_high_score_is_loaded() {
        let game = Game::with_rng(
            GameConfig::default(),
            MemoryScoreStore::with_value(9),
            StdRng::seed_from_u64(3),
        );
        assert_eq!(game.high_score(), 9);
    }
}
