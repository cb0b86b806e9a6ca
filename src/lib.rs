// Library interface for spotlight-words
// This allows integration tests to access internal modules

pub mod cli;
pub mod error;
pub mod game;
pub mod game_state;
pub mod logging;
pub mod random;
pub mod tui;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use error::WordBankError;
pub use game::{
    AdvanceStatus, Game, GuessStatus, HintStatus, MaskedLetter, MessageKind, Phase, Snapshot,
    points_for,
};
pub use game_state::{GameInterface, UserAction, game_loop};
pub use random::{RandomSource, RngSource, ScriptedRandom};
pub use wordbank::{Category, WordBank, load_wordbank_from_file, load_wordbank_from_str};
