//! Game module - Core game logic and state management

mod state;

pub use state::{Game, GameState, TapOutcome, TypeCounter, LEVEL_ORDER};
