pub mod app;
pub mod config;
pub mod game;
pub mod grid;
pub mod input;
pub mod logging;
pub mod render;
pub mod score_store;

pub use config::GameConfig;
pub use game::{Game, GameState, StepResult};
pub use grid::{Cell, Direction};
pub use input::InputSnapshot;
pub use score_store::{FileScoreStore, MemoryScoreStore, ScoreStore, ScoreStoreError};
