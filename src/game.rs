//! Game engine for Spotlight Words.
//!
//! A [`Game`] owns the whole session: the active word, which letters are
//! revealed, and the lives/hints/score/round counters. Commands mutate the
//! session and return an outcome carrying a [`Snapshot`], the read-only view a
//! front end paints.
//!
//! # State Machine
//! - `Playing` → correct guess → `RoundWon` → `advance()` → `Playing`
//! - `Playing` → correct guess past the last round → `GameOver`
//! - `Playing` → wrong guess with no lives left → `GameOver`
//! - any phase → `new_game()` → `Playing`

use crate::random::RandomSource;
use crate::wordbank::WordBank;
use crate::{debug_log, info_log};
use std::collections::BTreeSet;
use std::sync::Arc;

pub const MAX_ROUNDS: u32 = 10;
pub const STARTING_LIVES: u32 = 3;
pub const STARTING_HINTS: u32 = 3;
pub const MAX_POINTS: u32 = 100;
pub const POINTS_PER_REVEALED: u32 = 10;
pub const MIN_POINTS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    /// The word was guessed and is fully revealed; `advance()` loads the next one.
    RoundWon,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Error,
}

/// One position of the masked word. `letter` is only set when `revealed` is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskedLetter {
    pub letter: Option<char>,
    pub revealed: bool,
}

/// Read-only projection of the game for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub category: String,
    pub masked: Vec<MaskedLetter>,
    pub score: u32,
    pub round: u32,
    pub lives: u32,
    pub hints: u32,
    pub game_over: bool,
    pub awaiting_advance: bool,
    pub message: String,
    pub message_kind: MessageKind,
}

impl Snapshot {
    pub fn revealed_count(&self) -> usize {
        self.masked.iter().filter(|l| l.revealed).count()
    }

    pub fn is_fully_revealed(&self) -> bool {
        self.masked.iter().all(|l| l.revealed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessStatus {
    /// Blank input; nothing changed.
    Empty,
    Correct { points: u32 },
    Incorrect { lives_left: u32 },
    /// The game is over or a won round is waiting for `advance()`.
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintStatus {
    Revealed { index: usize },
    NoHints,
    AllRevealed,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceStatus {
    Advanced,
    NotPending,
}

#[derive(Debug, Clone)]
pub struct GuessOutcome {
    pub status: GuessStatus,
    pub message: String,
    pub snapshot: Snapshot,
}

#[derive(Debug, Clone)]
pub struct HintOutcome {
    pub status: HintStatus,
    pub message: String,
    pub snapshot: Snapshot,
}

#[derive(Debug, Clone)]
pub struct AdvanceOutcome {
    pub status: AdvanceStatus,
    pub snapshot: Snapshot,
}

/// Points for a correct guess made with `revealed` letters showing.
#[must_use]
pub fn points_for(revealed: usize) -> u32 {
    let revealed = u32::try_from(revealed).unwrap_or(u32::MAX);
    MAX_POINTS
        .saturating_sub(revealed.saturating_mul(POINTS_PER_REVEALED))
        .max(MIN_POINTS)
}

pub struct Game<R> {
    bank: Arc<WordBank>,
    rng: R,
    word: String,
    category: String,
    revealed: BTreeSet<usize>,
    lives: u32,
    hints: u32,
    score: u32,
    round: u32,
    phase: Phase,
    message: String,
    message_kind: MessageKind,
}

impl<R: RandomSource> Game<R> {
    pub fn new(bank: Arc<WordBank>, rng: R) -> Self {
        let mut game = Self {
            bank,
            rng,
            word: String::new(),
            category: String::new(),
            revealed: BTreeSet::new(),
            lives: STARTING_LIVES,
            hints: STARTING_HINTS,
            score: 0,
            round: 1,
            phase: Phase::Playing,
            message: String::new(),
            message_kind: MessageKind::Info,
        };
        game.select_word();
        game.set_message("Guess the word!", MessageKind::Info);
        game
    }

    /// Discard the current session and start over from round 1.
    pub fn new_game(&mut self) -> Snapshot {
        self.lives = STARTING_LIVES;
        self.hints = STARTING_HINTS;
        self.score = 0;
        self.round = 1;
        self.phase = Phase::Playing;
        self.select_word();
        self.set_message("New game started! Good luck!", MessageKind::Info);
        info_log!("New game started");
        self.snapshot()
    }

    pub fn guess(&mut self, text: &str) -> GuessOutcome {
        if self.phase != Phase::Playing {
            debug_log!("guess() ignored in phase {:?}", self.phase);
            return self.guess_outcome(GuessStatus::Ignored);
        }

        let guess = text.trim().to_uppercase();
        if guess.is_empty() {
            self.set_message("Please enter a guess!", MessageKind::Error);
            return self.guess_outcome(GuessStatus::Empty);
        }

        let status = if guess == self.word {
            self.correct_guess()
        } else {
            self.incorrect_guess()
        };
        self.guess_outcome(status)
    }

    fn correct_guess(&mut self) -> GuessStatus {
        let points = points_for(self.revealed.len());
        self.score += points;
        self.round += 1;
        self.revealed.extend(0..self.word_len());
        info_log!(
            "Correct guess '{}' for {} points, score {}",
            self.word,
            points,
            self.score
        );

        if self.round <= MAX_ROUNDS {
            self.phase = Phase::RoundWon;
            self.set_message(format!("Correct! +{points} points"), MessageKind::Success);
        } else {
            self.phase = Phase::GameOver;
            self.set_message(
                format!(
                    "Correct! +{points} points. Game complete! Final score: {}",
                    self.score
                ),
                MessageKind::Success,
            );
            info_log!("Game complete with score {}", self.score);
        }
        GuessStatus::Correct { points }
    }

    fn incorrect_guess(&mut self) -> GuessStatus {
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.phase = Phase::GameOver;
            self.set_message(
                format!("Game over! The word was: {}", self.word),
                MessageKind::Error,
            );
            info_log!("Out of lives, game over on round {}", self.round);
        } else {
            self.set_message(
                format!("Wrong! {} lives remaining", self.lives),
                MessageKind::Error,
            );
        }
        GuessStatus::Incorrect {
            lives_left: self.lives,
        }
    }

    pub fn request_hint(&mut self) -> HintOutcome {
        if self.phase == Phase::GameOver {
            self.set_message("The game is over. Start a new game!", MessageKind::Error);
            return self.hint_outcome(HintStatus::GameOver);
        }
        if self.hints == 0 {
            self.set_message("No hints remaining!", MessageKind::Error);
            return self.hint_outcome(HintStatus::NoHints);
        }

        let hidden: Vec<usize> = (0..self.word_len())
            .filter(|i| !self.revealed.contains(i))
            .collect();
        if hidden.is_empty() {
            self.set_message("All letters are already revealed!", MessageKind::Info);
            return self.hint_outcome(HintStatus::AllRevealed);
        }

        let index = hidden[self.rng.uniform_index(hidden.len())];
        self.revealed.insert(index);
        self.hints -= 1;
        debug_log!("Hint revealed index {}, {} hints left", index, self.hints);
        self.set_message(
            format!("Letter revealed! {} hints remaining", self.hints),
            MessageKind::Info,
        );
        self.hint_outcome(HintStatus::Revealed { index })
    }

    /// Load the next word after a won round. Does nothing in any other phase.
    pub fn advance(&mut self) -> AdvanceOutcome {
        if self.phase != Phase::RoundWon {
            debug_log!("advance() ignored in phase {:?}", self.phase);
            return AdvanceOutcome {
                status: AdvanceStatus::NotPending,
                snapshot: self.snapshot(),
            };
        }

        self.phase = Phase::Playing;
        self.select_word();
        self.set_message("Next round! Guess the new word.", MessageKind::Info);
        AdvanceOutcome {
            status: AdvanceStatus::Advanced,
            snapshot: self.snapshot(),
        }
    }

    fn select_word(&mut self) {
        let category = self
            .bank
            .category_at(self.rng.uniform_index(self.bank.len()));
        let word = &category.words[self.rng.uniform_index(category.words.len())];
        self.category.clone_from(&category.name);
        self.word.clone_from(word);
        self.revealed.clear();
        self.revealed.insert(0);
        debug_log!(
            "Selected word of length {} from '{}' for round {}",
            self.word.len(),
            self.category,
            self.round
        );
    }

    pub fn snapshot(&self) -> Snapshot {
        let masked = self
            .word
            .chars()
            .enumerate()
            .map(|(i, c)| {
                let revealed = self.revealed.contains(&i);
                MaskedLetter {
                    letter: revealed.then_some(c),
                    revealed,
                }
            })
            .collect();

        Snapshot {
            category: self.category.clone(),
            masked,
            score: self.score,
            round: self.round,
            lives: self.lives,
            hints: self.hints,
            game_over: self.phase == Phase::GameOver,
            awaiting_advance: self.phase == Phase::RoundWon,
            message: self.message.clone(),
            message_kind: self.message_kind,
        }
    }

    fn guess_outcome(&self, status: GuessStatus) -> GuessOutcome {
        GuessOutcome {
            status,
            message: self.message.clone(),
            snapshot: self.snapshot(),
        }
    }

    fn hint_outcome(&self, status: HintStatus) -> HintOutcome {
        HintOutcome {
            status,
            message: self.message.clone(),
            snapshot: self.snapshot(),
        }
    }

    fn set_message(&mut self, message: impl Into<String>, kind: MessageKind) {
        self.message = message.into();
        self.message_kind = kind;
    }

    fn word_len(&self) -> usize {
        self.word.chars().count()
    }

    /// The full active word. Masking is a presentation concern, so the word
    /// is always available to the caller.
    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn revealed(&self) -> &BTreeSet<usize> {
        &self.revealed
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn hints(&self) -> u32 {
        self.hints
    }

    pub fn bank(&self) -> &WordBank {
        &self.bank
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;
    use crate::wordbank::load_wordbank_from_str;

    fn test_bank() -> Arc<WordBank> {
        Arc::new(load_wordbank_from_str("birds: ROBIN WREN\ntrees: OAK MAPLE\n").unwrap())
    }

    fn game_with(picks: &[usize]) -> Game<ScriptedRandom> {
        Game::new(test_bank(), ScriptedRandom::new(picks.iter().copied()))
    }

    #[test]
    fn test_points_formula() {
        assert_eq!(points_for(0), 100);
        assert_eq!(points_for(1), 90);
        assert_eq!(points_for(5), 50);
        assert_eq!(points_for(9), 10);
        assert_eq!(points_for(12), 10);
        assert_eq!(points_for(usize::MAX), 10);
    }

    #[test]
    fn test_initial_state() {
        let game = game_with(&[1, 1]);
        assert_eq!(game.word(), "MAPLE");
        assert_eq!(game.category(), "trees");
        assert_eq!(game.phase(), Phase::Playing);

        let snapshot = game.snapshot();
        assert_eq!(snapshot.score, 0);
        assert_eq!(snapshot.round, 1);
        assert_eq!(snapshot.lives, STARTING_LIVES);
        assert_eq!(snapshot.hints, STARTING_HINTS);
        assert!(!snapshot.game_over);
        assert!(!snapshot.awaiting_advance);
        assert_eq!(snapshot.message_kind, MessageKind::Info);
    }

    #[test]
    fn test_snapshot_masks_hidden_letters() {
        let game = game_with(&[0, 0]);
        let snapshot = game.snapshot();
        assert_eq!(snapshot.masked.len(), 5);
        assert_eq!(
            snapshot.masked[0],
            MaskedLetter {
                letter: Some('R'),
                revealed: true
            }
        );
        for letter in &snapshot.masked[1..] {
            assert_eq!(
                *letter,
                MaskedLetter {
                    letter: None,
                    revealed: false
                }
            );
        }
        assert_eq!(snapshot.revealed_count(), 1);
    }

    #[test]
    fn test_empty_guess_changes_nothing() {
        let mut game = game_with(&[0, 0]);
        let before = game.snapshot();
        let outcome = game.guess("   ");
        assert_eq!(outcome.status, GuessStatus::Empty);
        assert_eq!(outcome.message, "Please enter a guess!");
        assert_eq!(outcome.snapshot.lives, before.lives);
        assert_eq!(outcome.snapshot.masked, before.masked);
        assert_eq!(outcome.snapshot.message_kind, MessageKind::Error);
    }

    #[test]
    fn test_guess_is_normalized() {
        let mut game = game_with(&[0, 1]);
        let outcome = game.guess("  wren \n");
        assert_eq!(outcome.status, GuessStatus::Correct { points: 90 });
    }

    #[test]
    fn test_correct_guess_reveals_and_waits_for_advance() {
        let mut game = game_with(&[0, 0]);
        let outcome = game.guess("ROBIN");
        assert_eq!(outcome.status, GuessStatus::Correct { points: 90 });
        assert_eq!(outcome.message, "Correct! +90 points");
        assert_eq!(outcome.snapshot.score, 90);
        assert_eq!(outcome.snapshot.round, 2);
        assert!(outcome.snapshot.is_fully_revealed());
        assert!(outcome.snapshot.awaiting_advance);
        assert_eq!(outcome.snapshot.message_kind, MessageKind::Success);
        // The word is not swapped until advance() is called.
        assert_eq!(game.word(), "ROBIN");
    }

    #[test]
    fn test_points_account_for_hints() {
        let mut game = game_with(&[0, 0, 0, 0]);
        game.request_hint();
        game.request_hint();
        assert_eq!(game.revealed().len(), 3);
        let outcome = game.guess("ROBIN");
        assert_eq!(outcome.status, GuessStatus::Correct { points: 70 });
    }

    #[test]
    fn test_guess_ignored_while_round_won() {
        let mut game = game_with(&[0, 0]);
        game.guess("ROBIN");
        let outcome = game.guess("ROBIN");
        assert_eq!(outcome.status, GuessStatus::Ignored);
        assert_eq!(outcome.snapshot.score, 90);
        assert_eq!(outcome.snapshot.round, 2);
        assert_eq!(outcome.message, "Correct! +90 points");
    }

    #[test]
    fn test_advance_loads_next_word() {
        let mut game = game_with(&[0, 0, 1, 0]);
        game.guess("ROBIN");
        let outcome = game.advance();
        assert_eq!(outcome.status, AdvanceStatus::Advanced);
        assert_eq!(game.word(), "OAK");
        assert_eq!(outcome.snapshot.category, "trees");
        assert_eq!(outcome.snapshot.revealed_count(), 1);
        assert!(!outcome.snapshot.awaiting_advance);
        assert_eq!(outcome.snapshot.message, "Next round! Guess the new word.");
        assert_eq!(outcome.snapshot.score, 90);
        assert_eq!(outcome.snapshot.round, 2);
    }

    #[test]
    fn test_advance_when_not_pending_is_noop() {
        let mut game = game_with(&[0, 0]);
        let before = game.snapshot();
        let outcome = game.advance();
        assert_eq!(outcome.status, AdvanceStatus::NotPending);
        assert_eq!(outcome.snapshot, before);
    }

    #[test]
    fn test_advance_twice_is_idempotent() {
        let mut game = game_with(&[0, 0, 1, 1]);
        game.guess("ROBIN");
        let first = game.advance();
        let second = game.advance();
        assert_eq!(second.status, AdvanceStatus::NotPending);
        assert_eq!(first.snapshot, second.snapshot);
        assert_eq!(game.word(), "MAPLE");
    }

    #[test]
    fn test_incorrect_guess_costs_a_life() {
        let mut game = game_with(&[0, 0]);
        let outcome = game.guess("SPARROW");
        assert_eq!(outcome.status, GuessStatus::Incorrect { lives_left: 2 });
        assert_eq!(outcome.message, "Wrong! 2 lives remaining");
        assert_eq!(game.word(), "ROBIN");
        assert_eq!(outcome.snapshot.revealed_count(), 1);
    }

    #[test]
    fn test_running_out_of_lives_ends_game() {
        let mut game = game_with(&[0, 0]);
        game.guess("A");
        game.guess("B");
        let outcome = game.guess("C");
        assert_eq!(outcome.status, GuessStatus::Incorrect { lives_left: 0 });
        assert!(outcome.snapshot.game_over);
        assert_eq!(outcome.message, "Game over! The word was: ROBIN");

        let after = game.guess("D");
        assert_eq!(after.status, GuessStatus::Ignored);
        assert_eq!(after.snapshot.lives, 0);
    }

    #[test]
    fn test_hint_reveals_hidden_letter() {
        // category 0, word 0 (ROBIN), then hidden index pick 2 of [1, 2, 3, 4] -> 3
        let mut game = game_with(&[0, 0, 2]);
        let outcome = game.request_hint();
        assert_eq!(outcome.status, HintStatus::Revealed { index: 3 });
        assert_eq!(outcome.message, "Letter revealed! 2 hints remaining");
        assert_eq!(outcome.snapshot.masked[3].letter, Some('I'));
        assert_eq!(outcome.snapshot.hints, 2);
    }

    #[test]
    fn test_hints_run_out() {
        let mut game = game_with(&[0, 0]);
        for _ in 0..STARTING_HINTS {
            assert!(matches!(
                game.request_hint().status,
                HintStatus::Revealed { .. }
            ));
        }
        let before = game.revealed().clone();
        let outcome = game.request_hint();
        assert_eq!(outcome.status, HintStatus::NoHints);
        assert_eq!(outcome.message, "No hints remaining!");
        assert_eq!(game.revealed(), &before);
        assert_eq!(game.hints(), 0);
    }

    #[test]
    fn test_hint_on_fully_revealed_word_is_free() {
        // OAK: two hints reveal everything, the third finds nothing to show.
        let mut game = game_with(&[1, 0]);
        game.request_hint();
        game.request_hint();
        assert_eq!(game.hints(), 1);
        let outcome = game.request_hint();
        assert_eq!(outcome.status, HintStatus::AllRevealed);
        assert_eq!(game.hints(), 1);
        assert_eq!(outcome.snapshot.message_kind, MessageKind::Info);
    }

    #[test]
    fn test_hint_after_game_over() {
        let mut game = game_with(&[0, 0]);
        for _ in 0..STARTING_LIVES {
            game.guess("NOPE");
        }
        let outcome = game.request_hint();
        assert_eq!(outcome.status, HintStatus::GameOver);
        assert_eq!(outcome.snapshot.hints, STARTING_HINTS);
        assert_eq!(outcome.snapshot.revealed_count(), 1);
    }

    #[test]
    fn test_final_round_ends_game() {
        let mut game = game_with(&[]);
        for round in 1..=MAX_ROUNDS {
            let word = game.word().to_string();
            let outcome = game.guess(&word);
            assert!(matches!(outcome.status, GuessStatus::Correct { .. }));
            if round < MAX_ROUNDS {
                assert!(!outcome.snapshot.game_over);
                game.advance();
            } else {
                assert!(outcome.snapshot.game_over);
                assert!(!outcome.snapshot.awaiting_advance);
                assert_eq!(
                    outcome.message,
                    "Correct! +90 points. Game complete! Final score: 900"
                );
            }
        }
        assert_eq!(game.round(), MAX_ROUNDS + 1);
        assert_eq!(game.advance().status, AdvanceStatus::NotPending);
        assert!(game.snapshot().is_fully_revealed());
    }

    #[test]
    fn test_new_game_resets_counters() {
        let mut game = game_with(&[0, 0]);
        game.guess("ROBIN");
        game.advance();
        game.guess("WRONG");
        game.request_hint();

        let snapshot = game.new_game();
        assert_eq!(snapshot.score, 0);
        assert_eq!(snapshot.round, 1);
        assert_eq!(snapshot.lives, STARTING_LIVES);
        assert_eq!(snapshot.hints, STARTING_HINTS);
        assert_eq!(snapshot.revealed_count(), 1);
        assert!(!snapshot.game_over);
        assert_eq!(snapshot.message, "New game started! Good luck!");
    }

    #[test]
    fn test_new_game_leaves_game_over() {
        let mut game = game_with(&[0, 0]);
        for _ in 0..STARTING_LIVES {
            game.guess("NOPE");
        }
        assert!(game.is_over());
        game.new_game();
        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.guess("ROBIN").status, GuessStatus::Correct { points: 90 });
    }
}
