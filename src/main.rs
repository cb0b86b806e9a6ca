use spotlight_words::cli::{CliInterface, parse_cli};
use spotlight_words::game::MAX_ROUNDS;
use spotlight_words::logging::{self, LogTarget};
use spotlight_words::tui::TuiInterface;
use spotlight_words::{Game, RngSource, WordBank, game_loop, load_wordbank_from_file};
use std::io;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

fn main() -> ExitCode {
    let cli = parse_cli();

    let log_target = match (&cli.log_file, cli.plain) {
        (Some(path), _) => LogTarget::File(Path::new(path)),
        (None, true) => LogTarget::Stderr,
        (None, false) => LogTarget::Discard,
    };
    if let Err(e) = logging::init(log_target) {
        eprintln!("Failed to set up logging: {e}");
        return ExitCode::FAILURE;
    }

    let bank = match &cli.wordbank_path {
        Some(path) => load_wordbank_from_file(path),
        None => WordBank::embedded(),
    };
    let bank = match bank {
        Ok(bank) => Arc::new(bank),
        Err(e) => {
            eprintln!("Failed to load word bank: {e}");
            if e.is_parse_error() {
                eprintln!("Each line must look like 'category: WORD WORD ...'.");
            }
            return ExitCode::FAILURE;
        }
    };

    let rng = match cli.seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_entropy(),
    };
    let mut game = Game::new(bank, rng);
    let delay = Duration::from_millis(cli.delay_ms);

    let last = if cli.plain {
        let stdin = io::stdin();
        let mut interface = CliInterface::new(stdin.lock(), delay);
        game_loop(&mut game, &mut interface)
    } else {
        match TuiInterface::new(delay) {
            Ok(mut interface) => game_loop(&mut game, &mut interface),
            Err(e) => {
                eprintln!("Failed to start the terminal interface: {e}. Try --plain.");
                return ExitCode::FAILURE;
            }
        }
    };

    println!(
        "Final score: {} (round {}/{})",
        last.score,
        last.round.min(MAX_ROUNDS),
        MAX_ROUNDS
    );
    ExitCode::SUCCESS
}
