use crate::game::{Game, Snapshot};
use crate::info_log;
use crate::random::RandomSource;

/// A command coming from a front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Guess(String),
    Hint,
    NewGame,
    Exit,
}

/// Trait for front ends (CLI, TUI) that present the game and collect input.
pub trait GameInterface {
    /// Paint the current state.
    fn render(&mut self, snapshot: &Snapshot);

    /// Wait for the next command. `None` means nothing actionable arrived yet.
    fn read_action(&mut self) -> Option<UserAction>;

    /// Show the fully revealed word of a won round. The next word is loaded
    /// as soon as this returns, so any pause belongs here.
    fn present_round_won(&mut self, snapshot: &Snapshot);

    fn display_exit_message(&mut self);
}

/// Drive `game` with actions from `interface` until the player exits.
/// Returns the state the session ended in.
pub fn game_loop<R: RandomSource, I: GameInterface>(
    game: &mut Game<R>,
    interface: &mut I,
) -> Snapshot {
    interface.render(&game.snapshot());

    loop {
        let Some(action) = interface.read_action() else {
            continue;
        };

        match action {
            UserAction::Exit => {
                interface.display_exit_message();
                break;
            }
            UserAction::NewGame => {
                let snapshot = game.new_game();
                interface.render(&snapshot);
            }
            UserAction::Hint => {
                let outcome = game.request_hint();
                interface.render(&outcome.snapshot);
            }
            UserAction::Guess(text) => {
                let outcome = game.guess(&text);
                interface.render(&outcome.snapshot);
                if outcome.snapshot.awaiting_advance {
                    interface.present_round_won(&outcome.snapshot);
                    let advanced = game.advance();
                    interface.render(&advanced.snapshot);
                }
            }
        }
    }

    let snapshot = game.snapshot();
    info_log!(
        "Session ended on round {} with score {}",
        snapshot.round,
        snapshot.score
    );
    snapshot
}
