//! Word builder: assemble a word from shuffled letter tiles.
//!
//! The target word is split into grapheme clusters rather than `char`s so
//! Arabic letters with combining marks stay on a single tile. Tiles are
//! shuffled deterministically from a seed; the player places them in reading
//! order and wrong picks are counted as mistakes.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use unicode_segmentation::UnicodeSegmentation;

use super::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickOutcome {
    /// Tile placed; more letters remain.
    Placed,
    /// Tile placed and the word is complete.
    Completed,
    /// Wrong tile for the current position.
    Wrong,
}

#[derive(Debug, Clone)]
struct Tile {
    grapheme: String,
    used: bool,
}

#[derive(Debug, Clone)]
pub struct WordBuilder {
    target: Vec<String>,
    tiles: Vec<Tile>,
    placed: usize,
    mistakes: u32,
}

impl WordBuilder {
    pub fn new(word: &str, seed: u64) -> Result<Self, GameError> {
        let target: Vec<String> = word
            .trim()
            .graphemes(true)
            .filter(|g| !g.trim().is_empty())
            .map(|g| g.to_string())
            .collect();

        if target.len() < 2 {
            return Err(GameError::InvalidSetup(
                "word must have at least two letters".into(),
            ));
        }

        let mut tiles: Vec<Tile> = target
            .iter()
            .map(|g| Tile {
                grapheme: g.clone(),
                used: false,
            })
            .collect();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        tiles.shuffle(&mut rng);

        Ok(WordBuilder {
            target,
            tiles,
            placed: 0,
            mistakes: 0,
        })
    }

    /// Try to place the tile at `tile_index` on the next position.
    pub fn pick(&mut self, tile_index: usize) -> Result<PickOutcome, GameError> {
        if self.is_complete() {
            return Err(GameError::Finished);
        }
        let tile = self
            .tiles
            .get(tile_index)
            .ok_or_else(|| GameError::InvalidMove(format!("no tile at index {tile_index}")))?;
        if tile.used {
            return Err(GameError::InvalidMove("tile is already placed".into()));
        }

        if tile.grapheme == self.target[self.placed] {
            self.tiles[tile_index].used = true;
            self.placed += 1;
            if self.is_complete() {
                Ok(PickOutcome::Completed)
            } else {
                Ok(PickOutcome::Placed)
            }
        } else {
            self.mistakes += 1;
            Ok(PickOutcome::Wrong)
        }
    }

    /// Letters on offer, in board order. Used tiles stay visible but greyed
    /// out, so the list keeps its indices stable.
    pub fn tiles(&self) -> Vec<(&str, bool)> {
        self.tiles
            .iter()
            .map(|t| (t.grapheme.as_str(), t.used))
            .collect()
    }

    /// The part of the word assembled so far.
    pub fn assembled(&self) -> String {
        self.target[..self.placed].concat()
    }

    pub fn mistakes(&self) -> u32 {
        self.mistakes
    }

    pub fn is_complete(&self) -> bool {
        self.placed == self.target.len()
    }

    /// Score for the progress store: starts at 100, each mistake costs 10,
    /// floored at 0. `None` until the word is complete.
    pub fn score(&self) -> Option<u32> {
        self.is_complete()
            .then(|| 100u32.saturating_sub(self.mistakes * 10))
    }
}
