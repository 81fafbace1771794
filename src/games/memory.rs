//! Memory cards: find the matching word pairs.
//!
//! The board is built from a word list with every word appearing twice,
//! shuffled deterministically from a seed so a saved game can rebuild the
//! same board. Cards flip in pairs: the first flip holds, the second
//! resolves to a match or a mismatch.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    /// First card of the pair is face up, waiting for the second.
    FirstCard,
    /// Both cards matched and stay revealed.
    Matched,
    /// The cards differ; the frontend shows both briefly, then hides them.
    Mismatched { first: usize, second: usize },
}

#[derive(Debug, Clone)]
struct Card {
    word: String,
    matched: bool,
}

#[derive(Debug, Clone)]
pub struct MemoryGame {
    cards: Vec<Card>,
    pending: Option<usize>,
    matched_pairs: usize,
    moves: u32,
}

impl MemoryGame {
    /// Build a shuffled board with each word appearing twice. Words must be
    /// distinct, otherwise two "pairs" would be indistinguishable.
    pub fn new(words: &[String], seed: u64) -> Result<Self, GameError> {
        if words.is_empty() {
            return Err(GameError::InvalidSetup("word list is empty".into()));
        }
        for (i, word) in words.iter().enumerate() {
            if words[..i].contains(word) {
                return Err(GameError::InvalidSetup(format!(
                    "duplicate word in list: {word}"
                )));
            }
        }

        let mut cards: Vec<Card> = words
            .iter()
            .flat_map(|word| {
                std::iter::repeat_with(move || Card {
                    word: word.clone(),
                    matched: false,
                })
                .take(2)
            })
            .collect();

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        cards.shuffle(&mut rng);

        Ok(MemoryGame {
            cards,
            pending: None,
            matched_pairs: 0,
            moves: 0,
        })
    }

    /// Flip the card at `index`.
    pub fn flip(&mut self, index: usize) -> Result<FlipOutcome, GameError> {
        if self.is_complete() {
            return Err(GameError::Finished);
        }
        let card = self
            .cards
            .get(index)
            .ok_or_else(|| GameError::InvalidMove(format!("no card at index {index}")))?;
        if card.matched {
            return Err(GameError::InvalidMove("card is already matched".into()));
        }
        if self.pending == Some(index) {
            return Err(GameError::InvalidMove("card is already face up".into()));
        }

        match self.pending.take() {
            None => {
                self.pending = Some(index);
                Ok(FlipOutcome::FirstCard)
            }
            Some(first) => {
                self.moves += 1;
                if self.cards[first].word == self.cards[index].word {
                    self.cards[first].matched = true;
                    self.cards[index].matched = true;
                    self.matched_pairs += 1;
                    Ok(FlipOutcome::Matched)
                } else {
                    Ok(FlipOutcome::Mismatched {
                        first,
                        second: index,
                    })
                }
            }
        }
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Word on the card, revealed to the frontend only while flipped.
    pub fn word_at(&self, index: usize) -> Option<&str> {
        self.cards.get(index).map(|c| c.word.as_str())
    }

    pub fn is_matched(&self, index: usize) -> bool {
        self.cards.get(index).is_some_and(|c| c.matched)
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn is_complete(&self) -> bool {
        self.matched_pairs * 2 == self.cards.len()
    }

    /// Score for the progress store: the share of moves that were matches,
    /// as a percentage. `None` until the board is cleared.
    pub fn score(&self) -> Option<u32> {
        if !self.is_complete() || self.moves == 0 {
            return None;
        }
        Some((self.matched_pairs as u32 * 100) / self.moves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    /// Clear the board by looking every word up through `word_at`.
    fn solve(game: &mut MemoryGame) {
        while !game.is_complete() {
            let open: Vec<usize> = (0..game.card_count())
                .filter(|&i| !game.is_matched(i))
                .collect();
            let first = open[0];
            let partner = open[1..]
                .iter()
                .copied()
                .find(|&i| game.word_at(i) == game.word_at(first))
                .unwrap();
            game.flip(first).unwrap();
            game.flip(partner).unwrap();
        }
    }

    #[test]
    fn board_holds_each_word_twice() {
        let game = MemoryGame::new(&words(&["قط", "كلب", "أسد"]), 7).unwrap();
        assert_eq!(game.card_count(), 6);
        for word in ["قط", "كلب", "أسد"] {
            let count = (0..game.card_count())
                .filter(|&i| game.word_at(i) == Some(word))
                .count();
            assert_eq!(count, 2);
        }
    }

    #[test]
    fn same_seed_same_board() {
        let list = words(&["قط", "كلب", "أسد", "فيل"]);
        let a = MemoryGame::new(&list, 42).unwrap();
        let b = MemoryGame::new(&list, 42).unwrap();
        for i in 0..a.card_count() {
            assert_eq!(a.word_at(i), b.word_at(i));
        }
    }

    #[test]
    fn rejects_empty_and_duplicate_word_lists() {
        assert!(matches!(
            MemoryGame::new(&[], 1),
            Err(GameError::InvalidSetup(_))
        ));
        assert!(matches!(
            MemoryGame::new(&words(&["قط", "قط"]), 1),
            Err(GameError::InvalidSetup(_))
        ));
    }

    #[test]
    fn matching_pair_stays_revealed() {
        let mut game = MemoryGame::new(&words(&["قط", "كلب"]), 3).unwrap();
        let first = 0;
        let partner = (1..game.card_count())
            .find(|&i| game.word_at(i) == game.word_at(first))
            .unwrap();
        assert_eq!(game.flip(first).unwrap(), FlipOutcome::FirstCard);
        assert_eq!(game.flip(partner).unwrap(), FlipOutcome::Matched);
        assert!(game.is_matched(first));
        assert!(game.is_matched(partner));
    }

    #[test]
    fn mismatch_reports_both_cards() {
        let mut game = MemoryGame::new(&words(&["قط", "كلب"]), 3).unwrap();
        let first = 0;
        let other = (1..game.card_count())
            .find(|&i| game.word_at(i) != game.word_at(first))
            .unwrap();
        game.flip(first).unwrap();
        let outcome = game.flip(other).unwrap();
        assert_eq!(
            outcome,
            FlipOutcome::Mismatched {
                first,
                second: other
            }
        );
        assert!(!game.is_matched(first));
    }

    #[test]
    fn illegal_flips_are_rejected() {
        let mut game = MemoryGame::new(&words(&["قط", "كلب"]), 3).unwrap();
        assert!(matches!(game.flip(99), Err(GameError::InvalidMove(_))));
        game.flip(0).unwrap();
        assert!(matches!(game.flip(0), Err(GameError::InvalidMove(_))));
    }

    #[test]
    fn perfect_game_scores_full_marks() {
        let mut game = MemoryGame::new(&words(&["قط", "كلب", "أسد"]), 11).unwrap();
        solve(&mut game);
        assert!(game.is_complete());
        assert_eq!(game.score(), Some(100));
        assert_eq!(game.flip(0), Err(GameError::Finished));
    }
}
