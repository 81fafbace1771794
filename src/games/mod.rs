//! Mini-game state machines
//!
//! Each game is a small, synchronous state machine with no I/O: the frontend
//! feeds it moves and renders whatever state it reports. Games are selected
//! by a string identifier coming from the lesson configuration, dispatched
//! through the closed `GameKind` set.

pub mod language;
pub mod math;
pub mod memory;

pub use language::{PickOutcome, WordBuilder};
pub use math::{NumberRace, Player, TurnOutcome};
pub use memory::{FlipOutcome, MemoryGame};

use thiserror::Error;

/// Errors produced by the game state machines.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid move: {0}")]
    InvalidMove(String),

    #[error("invalid game setup: {0}")]
    InvalidSetup(String),

    #[error("game is already finished")]
    Finished,
}

/// The closed set of mini-games, keyed by the identifier used in lesson
/// configuration and in the progress store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKind {
    NumberRace,
    MemoryCards,
    WordBuilder,
}

impl GameKind {
    pub fn all() -> [GameKind; 3] {
        [
            GameKind::NumberRace,
            GameKind::MemoryCards,
            GameKind::WordBuilder,
        ]
    }

    /// Resolve a configuration identifier to a game, `None` for ids outside
    /// the closed set.
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "number-race" => Some(GameKind::NumberRace),
            "memory-cards" => Some(GameKind::MemoryCards),
            "word-builder" => Some(GameKind::WordBuilder),
            _ => None,
        }
    }

    /// Stable identifier, also used as the progress store key.
    pub fn id(&self) -> &'static str {
        match self {
            GameKind::NumberRace => "number-race",
            GameKind::MemoryCards => "memory-cards",
            GameKind::WordBuilder => "word-builder",
        }
    }

    /// Display name shown to the player.
    pub fn title(&self) -> &'static str {
        match self {
            GameKind::NumberRace => "سباق الأرقام",
            GameKind::MemoryCards => "بطاقات الذاكرة",
            GameKind::WordBuilder => "بناء الكلمات",
        }
    }
}
